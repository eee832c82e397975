//! Host-facing chord snapshot with summary metadata.

use serde::{Deserialize, Serialize};

use crate::note::STRING_COUNT;
use crate::shape::{Barre, ChordShape, FingerPosition, StringState};

/// Window of the fretboard the host displays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardConfig {
    /// Fret shown at the top of the diagram.
    pub starting_fret: i32,
    /// Number of frets shown.
    pub visible_frets: u8,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        FretboardConfig {
            starting_fret: 1,
            visible_frets: 7,
        }
    }
}

/// Summary facts about a chord shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordMetadata {
    /// Fret shown at the top of the diagram.
    pub starting_fret: i32,
    /// Number of frets shown.
    pub visible_frets: u8,
    /// Whether any dot or barre carries a finger number.
    pub has_finger_numbers: bool,
    /// Whether nothing is fretted or barred.
    pub is_empty: bool,
    /// Frets spanned by all dots and barres, 0 when there are none.
    pub total_span: i32,
}

/// A chord as handed to the host on change or save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordData {
    /// Fretted dots.
    pub positions: Vec<FingerPosition>,
    /// Barres.
    pub barres: Vec<Barre>,
    /// Open/mute flags, string 6 first.
    pub string_states: [StringState; STRING_COUNT as usize],
    /// Primary detected chord name, if one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_chord_name: Option<String>,
    /// Summary facts.
    pub metadata: ChordMetadata,
}

impl ChordData {
    /// Snapshot `shape` as shown in `config`.
    pub fn from_shape(
        shape: &ChordShape,
        config: &FretboardConfig,
        detected_chord_name: Option<String>,
    ) -> Self {
        let has_finger_numbers = shape.positions.iter().any(|p| p.finger.is_some())
            || shape.barres.iter().any(|b| b.finger.is_some());

        ChordData {
            positions: shape.positions.clone(),
            barres: shape.barres.clone(),
            string_states: shape.string_states,
            detected_chord_name,
            metadata: ChordMetadata {
                starting_fret: config.starting_fret,
                visible_frets: config.visible_frets,
                has_finger_numbers,
                is_empty: shape.is_empty(),
                total_span: total_span(shape),
            },
        }
    }

    /// The shape this snapshot was taken from.
    pub fn shape(&self) -> ChordShape {
        ChordShape {
            positions: self.positions.clone(),
            barres: self.barres.clone(),
            string_states: self.string_states,
        }
    }
}

/// `max(fret) - min(fret) + 1` over every dot and barre, or 0 if there are none.
///
/// Saturates at `i32::MAX` instead of overflowing.
pub fn total_span(shape: &ChordShape) -> i32 {
    let frets = shape
        .positions
        .iter()
        .map(|p| p.fret)
        .chain(shape.barres.iter().map(|b| b.fret));

    frets
        .fold(None, |acc: Option<(i32, i32)>, fret| match acc {
            None => Some((fret, fret)),
            Some((lo, hi)) => Some((lo.min(fret), hi.max(fret))),
        })
        .map_or(0, |(lo, hi)| hi.saturating_sub(lo).saturating_add(1))
}
