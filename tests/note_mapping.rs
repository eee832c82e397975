//! Tests for mapping strings and frets to pitch classes.

use fretboard_chords::{note_at, open_note, FretboardError, NoteName, SEMITONES};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

#[test]
fn open_strings_follow_standard_tuning() {
    let expected = [
        (6, NoteName::E),
        (5, NoteName::A),
        (4, NoteName::D),
        (3, NoteName::G),
        (2, NoteName::B),
        (1, NoteName::E),
    ];
    for (string, note) in expected {
        assert_eq!(note_at(string, 0).unwrap(), note, "string {string}");
        assert_eq!(open_note(string).unwrap(), note, "string {string}");
    }
}

#[test]
fn fretted_notes_move_up_by_semitones() {
    assert_eq!(note_at(6, 3).unwrap(), NoteName::G);
    assert_eq!(note_at(5, 2).unwrap(), NoteName::B);
    assert_eq!(note_at(3, 1).unwrap(), NoteName::Gs);
    assert_eq!(note_at(2, 1).unwrap(), NoteName::C);
    assert_eq!(note_at(1, 12).unwrap(), NoteName::E);
    assert_eq!(note_at(4, 24).unwrap(), NoteName::D);
}

#[test]
fn notes_use_sharp_spelling() {
    assert_eq!(note_at(6, 1).unwrap().to_string(), "F");
    assert_eq!(note_at(6, 2).unwrap().to_string(), "F#");
    assert_eq!(note_at(5, 1).unwrap().to_string(), "A#");
    assert_eq!(note_at(4, 1).unwrap().to_string(), "D#");
}

#[test]
fn note_at_is_periodic_in_fret() {
    let pairs: Vec<(u8, i32)> = (1..=6u8)
        .flat_map(|s| (0..=48).map(move |f| (s, f)))
        .collect();

    let broken: Vec<(u8, i32)> = pairs
        .par_iter()
        .filter(|&&(s, f)| note_at(s, f).unwrap() != note_at(s, f + SEMITONES as i32).unwrap())
        .copied()
        .collect();

    assert!(broken.is_empty(), "not periodic at {broken:?}");
}

#[test]
fn rejects_strings_outside_the_neck() {
    assert_eq!(
        note_at(0, 0),
        Err(FretboardError::InvalidStringNumber { string: 0 })
    );
    assert_eq!(
        note_at(7, 3),
        Err(FretboardError::InvalidStringNumber { string: 7 })
    );
}

#[test]
fn rejects_negative_frets() {
    assert_eq!(
        note_at(5, -1),
        Err(FretboardError::InvalidFretNumber { string: 5, fret: -1 })
    );
}

#[test]
fn accepts_frets_past_the_last_fret() {
    assert_eq!(note_at(6, 100).unwrap(), NoteName::from_idx(4 + 100));
}

#[test]
fn parses_sharp_and_flat_names() {
    assert_eq!("C#".parse::<NoteName>().unwrap(), NoteName::Cs);
    assert_eq!("Bb".parse::<NoteName>().unwrap(), NoteName::As);
    assert_eq!("Cb".parse::<NoteName>().unwrap(), NoteName::B);
    assert_eq!("G".parse::<NoteName>().unwrap(), NoteName::G);
    assert_eq!(
        "H".parse::<NoteName>(),
        Err(FretboardError::InvalidNoteName {
            name: "H".to_string()
        })
    );
    assert!("C##".parse::<NoteName>().is_err());
    assert!("".parse::<NoteName>().is_err());
}
