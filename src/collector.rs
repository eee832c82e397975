//! Fretboard Note Collector and Deduplicator

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::FretboardError;
use crate::note::{note_at, NoteName, STRING_COUNT};
use crate::resolver::{resolve, MutePolicy};
use crate::shape::ChordShape;

/// Notes sounding on each played string, lowest string first
pub type NoteSequence = Vec<NoteName>;

/// Collect the note sounding on every played string, string 6 down to 1.
///
/// Muted strings produce no entry. The shape is checked up front, so an
/// out-of-range string or negative fret anywhere in it fails the whole call.
pub fn collect(shape: &ChordShape, policy: MutePolicy) -> Result<NoteSequence, FretboardError> {
    shape.check()?;

    let mut notes = Vec::with_capacity(usize::from(STRING_COUNT));
    for string in (1..=STRING_COUNT).rev() {
        let resolution = resolve(string, shape, policy)?;
        let Some(fret) = resolution.fret() else {
            trace!(string, "muted");
            continue;
        };
        let note = note_at(string, fret)?;
        trace!(string, %resolution, %note);
        notes.push(note);
    }

    debug!(?notes, "collected fretboard notes");
    Ok(notes)
}

/// Drop repeated pitch classes, keeping the first occurrence of each in order.
pub fn dedupe(notes: &[NoteName]) -> NoteSequence {
    let mut seen = HashSet::with_capacity(notes.len());
    notes.iter().copied().filter(|n| seen.insert(*n)).collect()
}
