//! Position Resolver
//!
//! Picks the single source that sounds on a string. Precedence, highest first:
//! the highest-fret dot, then the first barre covering the string, then the
//! open string. How a mute flag interacts with dots and barres is set by
//! [`MutePolicy`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::note::check_string;
use crate::shape::{check_fret, ChordShape, StringState};

/// What sounds on a single string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A dot stops the string at this fret.
    Fretted(i32),
    /// A barre stops the string at this fret.
    Barred(i32),
    /// The string rings open.
    Open,
    /// The string is not played.
    Muted,
}

impl Resolution {
    /// Fret that sounds, or `None` for a muted string.
    pub fn fret(self) -> Option<i32> {
        match self {
            Resolution::Fretted(fret) | Resolution::Barred(fret) => Some(fret),
            Resolution::Open => Some(0),
            Resolution::Muted => None,
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Fretted(fret) => write!(f, "fret {fret}"),
            Resolution::Barred(fret) => write!(f, "barre fret {fret}"),
            Resolution::Open => f.write_str("open"),
            Resolution::Muted => f.write_str("muted"),
        }
    }
}

/// How a muted string treats dots and barres placed on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutePolicy {
    /// A muted string never sounds, whatever covers it.
    #[default]
    Silences,
    /// The mute flag is consulted only when no dot or barre covers the string.
    Fallback,
}

/// Resolve what sounds on `string` for `shape`.
///
/// Returns `Err(InvalidStringNumber)` if `string` is outside `1..=6`, and
/// `Err(InvalidFretNumber)` if the dot or barre that would sound is negative.
/// When several barres cover the string, the first one added wins.
pub fn resolve(
    string: u8,
    shape: &ChordShape,
    policy: MutePolicy,
) -> Result<Resolution, FretboardError> {
    check_string(string)?;
    let state = shape.string_state(string)?;

    if policy == MutePolicy::Silences && state == StringState::Muted {
        return Ok(Resolution::Muted);
    }

    if let Some(fret) = shape.positions_on(string).map(|p| p.fret).max() {
        check_fret(string, fret)?;
        return Ok(Resolution::Fretted(fret));
    }

    if let Some(barre) = shape.barre_covering(string) {
        check_fret(string, barre.fret)?;
        return Ok(Resolution::Barred(barre.fret));
    }

    Ok(match state {
        StringState::Open => Resolution::Open,
        StringState::Muted => Resolution::Muted,
    })
}
