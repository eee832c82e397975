//! Non-fatal checks on a chord shape.
//!
//! These never block note resolution; they report values an editor should
//! not have produced so the host can surface or log them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::note::STRING_COUNT;
use crate::shape::ChordShape;

/// Highest fret on a standard guitar neck
pub const MAX_FRET: i32 = 24;

/// Highest finger number (pinky)
pub const MAX_FINGER: u8 = 4;

/// Something questionable about a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValidationWarning {
    /// Fret outside `1..=24`.
    InvalidFret {
        /// Where the fret was found.
        context: String,
        /// The fret number.
        fret: i32,
    },
    /// String outside `1..=6`.
    InvalidString {
        /// Where the string was found.
        context: String,
        /// The string number.
        string: u8,
    },
    /// Finger number outside `1..=4`.
    InvalidFinger {
        /// Where the finger was found.
        context: String,
        /// The finger number.
        finger: u8,
    },
    /// Barre endpoints given high-to-low.
    ReversedBarre {
        /// First endpoint.
        start_string: u8,
        /// Second endpoint.
        end_string: u8,
    },
    /// More than one dot on the same string; only the highest sounds.
    Overlap {
        /// The string.
        string: u8,
        /// Frets of every dot on it.
        frets: Vec<i32>,
    },
}

impl Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::InvalidFret { context, fret } => write!(
                f,
                "invalid fret number {fret} in {context}, expected 1..={MAX_FRET}"
            ),
            ValidationWarning::InvalidString { context, string } => write!(
                f,
                "invalid string number {string} in {context}, expected 1..={STRING_COUNT}"
            ),
            ValidationWarning::InvalidFinger { context, finger } => write!(
                f,
                "invalid finger number {finger} in {context}, expected 1..={MAX_FINGER}"
            ),
            ValidationWarning::ReversedBarre {
                start_string,
                end_string,
            } => write!(
                f,
                "barre start string {start_string} is greater than end string {end_string}"
            ),
            ValidationWarning::Overlap { string, frets } => {
                write!(f, "string {string} has several dots at frets {frets:?}")
            }
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every warning found, in discovery order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// No warnings were raised.
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check `shape` for values an editor should never produce. Each warning is
/// also logged.
pub fn validate(shape: &ChordShape) -> ValidationReport {
    let mut warnings = Vec::new();

    for p in &shape.positions {
        check_fret(&mut warnings, "finger position", p.fret);
        check_string(&mut warnings, "finger position", p.string);
        check_finger(&mut warnings, "finger position", p.finger);
    }

    for b in &shape.barres {
        check_fret(&mut warnings, "barre", b.fret);
        check_string(&mut warnings, "barre start", b.start_string);
        check_string(&mut warnings, "barre end", b.end_string);
        check_finger(&mut warnings, "barre", b.finger);
        if b.start_string > b.end_string {
            warnings.push(ValidationWarning::ReversedBarre {
                start_string: b.start_string,
                end_string: b.end_string,
            });
        }
    }

    for string in (1..=STRING_COUNT).rev() {
        let frets: Vec<i32> = shape.positions_on(string).map(|p| p.fret).collect();
        if frets.len() > 1 {
            warnings.push(ValidationWarning::Overlap { string, frets });
        }
    }

    for w in &warnings {
        warn!("{w}");
    }
    ValidationReport { warnings }
}

fn check_fret(out: &mut Vec<ValidationWarning>, context: &str, fret: i32) {
    if !(1..=MAX_FRET).contains(&fret) {
        out.push(ValidationWarning::InvalidFret {
            context: context.to_string(),
            fret,
        });
    }
}

fn check_string(out: &mut Vec<ValidationWarning>, context: &str, string: u8) {
    if !(1..=STRING_COUNT).contains(&string) {
        out.push(ValidationWarning::InvalidString {
            context: context.to_string(),
            string,
        });
    }
}

fn check_finger(out: &mut Vec<ValidationWarning>, context: &str, finger: Option<u8>) {
    if let Some(finger) = finger.filter(|f| !(1..=MAX_FINGER).contains(f)) {
        out.push(ValidationWarning::InvalidFinger {
            context: context.to_string(),
            finger,
        });
    }
}
