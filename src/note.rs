//! Note Mapper
//!
//! Converts a (string, fret) pair into the pitch class it sounds in standard
//! tuning. Octaves are not modeled and every accidental is spelled sharp.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: usize = 12;

/// Number of strings on the fretboard
pub const STRING_COUNT: u8 = 6;

/// Chromatic scale starting at C, sharp spelling
pub const CHROMATIC_SCALE: [NoteName; SEMITONES] = [
    NoteName::C,
    NoteName::Cs,
    NoteName::D,
    NoteName::Ds,
    NoteName::E,
    NoteName::F,
    NoteName::Fs,
    NoteName::G,
    NoteName::Gs,
    NoteName::A,
    NoteName::As,
    NoteName::B,
];

/// Open-string pitches in standard tuning, string 6 (low E) first
const OPEN_STRING_NOTES: [NoteName; STRING_COUNT as usize] = [
    NoteName::E,
    NoteName::A,
    NoteName::D,
    NoteName::G,
    NoteName::B,
    NoteName::E,
];

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    /// C
    C,
    /// C sharp / D flat
    #[serde(rename = "C#")]
    Cs,
    /// D
    D,
    /// D sharp / E flat
    #[serde(rename = "D#")]
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    #[serde(rename = "F#")]
    Fs,
    /// G
    G,
    /// G sharp / A flat
    #[serde(rename = "G#")]
    Gs,
    /// A
    A,
    /// A sharp / B flat
    #[serde(rename = "A#")]
    As,
    /// B
    B,
}

impl NoteName {
    /// Pitch class at `idx` semitones above C, wrapping every octave.
    pub const fn from_idx(idx: usize) -> NoteName {
        CHROMATIC_SCALE[idx % SEMITONES]
    }

    /// Position of this pitch class in the chromatic scale (C = 0).
    pub const fn index(self) -> usize {
        match self {
            NoteName::C => 0,
            NoteName::Cs => 1,
            NoteName::D => 2,
            NoteName::Ds => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::Fs => 6,
            NoteName::G => 7,
            NoteName::Gs => 8,
            NoteName::A => 9,
            NoteName::As => 10,
            NoteName::B => 11,
        }
    }

    /// Sharp spelling of the pitch class, e.g. `"F#"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }

    /// Pitch class `semitones` above this one.
    pub const fn transpose(self, semitones: usize) -> NoteName {
        NoteName::from_idx(self.index() + semitones)
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = FretboardError;

    /// Parses sharp or flat spellings; flats normalize to their sharp twin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let natural = match chars.next() {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(FretboardError::InvalidNoteName { name: s.to_string() }),
        };
        let idx = match chars.as_str() {
            "" => natural,
            "#" => natural + 1,
            "b" => natural + SEMITONES - 1,
            _ => return Err(FretboardError::InvalidNoteName { name: s.to_string() }),
        };
        Ok(NoteName::from_idx(idx))
    }
}

/// Checks that `string` names one of the six strings.
pub(crate) fn check_string(string: u8) -> Result<(), FretboardError> {
    if (1..=STRING_COUNT).contains(&string) {
        Ok(())
    } else {
        Err(FretboardError::InvalidStringNumber { string })
    }
}

/// Open-string pitch of `string` in standard tuning.
pub fn open_note(string: u8) -> Result<NoteName, FretboardError> {
    check_string(string)?;
    Ok(OPEN_STRING_NOTES[usize::from(STRING_COUNT - string)])
}

/// Pitch class sounding on `string` when stopped at `fret` (0 = open).
///
/// Returns:
/// - `Err(InvalidStringNumber)` if `string` is outside `1..=6`.
/// - `Err(InvalidFretNumber)` if `fret` is negative.
///
/// Frets are not capped; any non-negative fret wraps every 12 semitones.
pub fn note_at(string: u8, fret: i32) -> Result<NoteName, FretboardError> {
    let open = open_note(string)?;
    let semitones =
        usize::try_from(fret).map_err(|_| FretboardError::InvalidFretNumber { string, fret })?;
    Ok(open.transpose(semitones % SEMITONES))
}
