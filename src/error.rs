//! Errors raised while resolving fretboard positions into notes.

use thiserror::Error;

/// Errors when mapping strings and frets to notes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// A string number outside `1..=6` was referenced.
    #[error("invalid string number {string}, expected 1..=6")]
    InvalidStringNumber {
        /// The string number that was supplied.
        string: u8,
    },

    /// A fret below zero was referenced.
    #[error("invalid fret number {fret} on string {string}, frets must be >= 0")]
    InvalidFretNumber {
        /// The string the fret was placed on.
        string: u8,
        /// The fret number that was supplied.
        fret: i32,
    },

    /// Text that is not a pitch-class name.
    #[error("invalid note name `{name}`")]
    InvalidNoteName {
        /// The text that failed to parse.
        name: String,
    },
}
