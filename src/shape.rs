//! Chord shape snapshot
//!
//! Value types describing what the player's hand is doing on the fretboard:
//! fretted dots, barres and per-string open/mute flags. A [`ChordShape`] is an
//! immutable snapshot handed to the resolver on every change.

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::note::{check_string, STRING_COUNT};

/// A fretted note placed by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerPosition {
    /// String number, 1 (high E) to 6 (low E).
    pub string: u8,
    /// Fret number, 1 or higher.
    pub fret: i32,
    /// Optional fingering hint, 1 (index) to 4 (pinky).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
}

impl FingerPosition {
    /// A dot on `string` at `fret` without a finger number.
    pub fn new(string: u8, fret: i32) -> Self {
        FingerPosition {
            string,
            fret,
            finger: None,
        }
    }

    /// Attach a finger number.
    pub fn with_finger(mut self, finger: u8) -> Self {
        self.finger = Some(finger);
        self
    }
}

/// One finger pressing every string between two endpoints at a single fret.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    /// Fret the barre presses.
    pub fret: i32,
    /// First endpoint, as tapped.
    pub start_string: u8,
    /// Second endpoint, as tapped. May be lower than `start_string`.
    pub end_string: u8,
    /// Optional fingering hint, 1 (index) to 4 (pinky).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
}

impl Barre {
    /// A barre at `fret` from `start_string` to `end_string`, in either order.
    pub fn new(fret: i32, start_string: u8, end_string: u8) -> Self {
        Barre {
            fret,
            start_string,
            end_string,
            finger: None,
        }
    }

    /// Attach a finger number.
    pub fn with_finger(mut self, finger: u8) -> Self {
        self.finger = Some(finger);
        self
    }

    /// Covered string range as `(low, high)`, whatever order it was tapped in.
    pub fn span(&self) -> (u8, u8) {
        if self.start_string <= self.end_string {
            (self.start_string, self.end_string)
        } else {
            (self.end_string, self.start_string)
        }
    }

    /// Whether `string` lies inside the barre, endpoints included.
    pub fn covers(&self, string: u8) -> bool {
        let (low, high) = self.span();
        (low..=high).contains(&string)
    }
}

/// Whether a string is left ringing or silenced when nothing frets it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StringState {
    /// Sounds at fret 0 when not fretted.
    #[default]
    #[serde(rename = "O")]
    Open,
    /// Not played.
    #[serde(rename = "X")]
    Muted,
}

/// Immutable snapshot of a chord on the fretboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    /// Fretted dots. Several may share a string; the highest fret sounds.
    #[serde(default)]
    pub positions: Vec<FingerPosition>,
    /// Barres, in the order they were added.
    #[serde(default)]
    pub barres: Vec<Barre>,
    /// Open/mute flags ordered string 6 first, string 1 last.
    #[serde(default)]
    pub string_states: [StringState; STRING_COUNT as usize],
}

impl ChordShape {
    /// Return a builder for assembling a shape
    pub fn builder() -> ChordShapeBuilder {
        ChordShapeBuilder::new()
    }

    /// All strings open, nothing fretted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open/mute flag of `string`.
    pub fn string_state(&self, string: u8) -> Result<StringState, FretboardError> {
        check_string(string)?;
        Ok(self.string_states[state_idx(string)])
    }

    /// Dots placed on `string`.
    pub fn positions_on(&self, string: u8) -> impl Iterator<Item = &FingerPosition> + '_ {
        self.positions.iter().filter(move |p| p.string == string)
    }

    /// First barre, in insertion order, that covers `string`.
    pub fn barre_covering(&self, string: u8) -> Option<&Barre> {
        self.barres.iter().find(|b| b.covers(string))
    }

    /// True when nothing is fretted or barred.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.barres.is_empty()
    }

    /// Checks every string number and fret the shape references.
    ///
    /// Returns the first offending value as
    /// `Err(InvalidStringNumber)` or `Err(InvalidFretNumber)`.
    pub fn check(&self) -> Result<(), FretboardError> {
        for p in &self.positions {
            check_string(p.string)?;
            check_fret(p.string, p.fret)?;
        }
        for b in &self.barres {
            check_string(b.start_string)?;
            check_string(b.end_string)?;
            check_fret(b.span().0, b.fret)?;
        }
        Ok(())
    }
}

/// Rejects a negative `fret` placed on `string`.
pub(crate) fn check_fret(string: u8, fret: i32) -> Result<(), FretboardError> {
    if fret < 0 {
        return Err(FretboardError::InvalidFretNumber { string, fret });
    }
    Ok(())
}

/// Index into `string_states` for a validated string number
fn state_idx(string: u8) -> usize {
    usize::from(STRING_COUNT - string)
}

/// Builder for `ChordShape`
#[derive(Debug, Clone, Default)]
pub struct ChordShapeBuilder {
    shape: ChordShape,
    muted: Vec<u8>,
}

impl ChordShapeBuilder {
    /// Start from an empty shape with every string open
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a dot on `string` at `fret`.
    pub fn dot(mut self, string: u8, fret: i32) -> Self {
        self.shape.positions.push(FingerPosition::new(string, fret));
        self
    }

    /// Place a dot with a finger number.
    pub fn fingered(mut self, string: u8, fret: i32, finger: u8) -> Self {
        self.shape
            .positions
            .push(FingerPosition::new(string, fret).with_finger(finger));
        self
    }

    /// Add a barre across `start_string..=end_string` at `fret`.
    pub fn barre(mut self, fret: i32, start_string: u8, end_string: u8) -> Self {
        self.shape
            .barres
            .push(Barre::new(fret, start_string, end_string));
        self
    }

    /// Mark `string` as muted.
    pub fn mute(mut self, string: u8) -> Self {
        self.muted.push(string);
        self
    }

    /// Finalize the shape, rejecting out-of-range strings and negative frets.
    pub fn build(self) -> Result<ChordShape, FretboardError> {
        let mut shape = self.shape;
        for string in self.muted {
            check_string(string)?;
            shape.string_states[state_idx(string)] = StringState::Muted;
        }
        shape.check()?;
        Ok(shape)
    }
}
