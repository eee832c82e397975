//! Tests for the host snapshot, its JSON form and shape validation.

use fretboard_chords::{
    validate, Barre, ChordData, ChordShape, FingerPosition, FretboardAnalyzer, FretboardConfig,
    NoteName, StringState, ValidationWarning,
};
use serde_json::json;

fn f_major() -> ChordShape {
    ChordShape {
        positions: vec![
            FingerPosition::new(5, 3).with_finger(3),
            FingerPosition::new(4, 3).with_finger(4),
            FingerPosition::new(3, 2).with_finger(2),
        ],
        barres: vec![Barre::new(1, 1, 6).with_finger(1)],
        ..ChordShape::default()
    }
}

#[test]
fn empty_shape_metadata() {
    let data = ChordData::from_shape(&ChordShape::new(), &FretboardConfig::default(), None);
    assert!(data.metadata.is_empty);
    assert!(!data.metadata.has_finger_numbers);
    assert_eq!(data.metadata.total_span, 0);
    assert_eq!(data.metadata.starting_fret, 1);
    assert_eq!(data.metadata.visible_frets, 7);
}

#[test]
fn total_span_covers_dots_and_barres() {
    let data = ChordData::from_shape(&f_major(), &FretboardConfig::default(), None);
    assert!(!data.metadata.is_empty);
    assert!(data.metadata.has_finger_numbers);
    assert_eq!(data.metadata.total_span, 3);

    let single = ChordShape::builder().dot(3, 9).build().unwrap();
    let data = ChordData::from_shape(&single, &FretboardConfig::default(), None);
    assert_eq!(data.metadata.total_span, 1);
}

#[test]
fn analyzer_labels_snapshot() {
    let config = FretboardConfig {
        starting_fret: 1,
        visible_frets: 5,
    };
    let data = FretboardAnalyzer::new()
        .chord_data(&f_major(), &config)
        .unwrap();
    assert_eq!(data.detected_chord_name.as_deref(), Some("F"));
    assert_eq!(data.metadata.visible_frets, 5);
    assert_eq!(data.shape(), f_major());
}

#[test]
fn shape_json_uses_host_field_names() {
    let shape = ChordShape::builder()
        .mute(6)
        .fingered(5, 3, 3)
        .barre(1, 3, 1)
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&shape).unwrap(),
        json!({
            "positions": [{ "string": 5, "fret": 3, "finger": 3 }],
            "barres": [{ "fret": 1, "startString": 3, "endString": 1 }],
            "stringStates": ["X", "O", "O", "O", "O", "O"],
        })
    );
}

#[test]
fn shape_json_fills_missing_fields() {
    let shape: ChordShape = serde_json::from_value(json!({
        "positions": [{ "string": 2, "fret": 1 }],
    }))
    .unwrap();
    assert_eq!(shape.positions, vec![FingerPosition::new(2, 1)]);
    assert!(shape.barres.is_empty());
    assert_eq!(shape.string_states, [StringState::Open; 6]);
}

#[test]
fn detection_result_json() {
    let shape = ChordShape::builder().mute(6).dot(5, 3).dot(4, 2).dot(2, 1).build().unwrap();
    let result = FretboardAnalyzer::new().analyze(&shape).unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "notes": ["C", "E", "G"],
            "chordNames": ["C"],
            "primaryChord": "C",
        })
    );
}

#[test]
fn note_names_serialize_with_sharps() {
    assert_eq!(serde_json::to_value(NoteName::Fs).unwrap(), json!("F#"));
    let parsed: NoteName = serde_json::from_value(json!("A#")).unwrap();
    assert_eq!(parsed, NoteName::As);
}

#[test]
fn clean_shape_has_no_warnings() {
    let shape = ChordShape::builder().dot(5, 3).dot(4, 2).barre(1, 1, 2).build().unwrap();
    assert!(validate(&shape).is_valid());
}

#[test]
fn validation_reports_each_problem() {
    let shape = ChordShape {
        positions: vec![
            FingerPosition::new(7, 25),
            FingerPosition::new(3, 2).with_finger(5),
            FingerPosition::new(3, 4),
        ],
        barres: vec![Barre::new(0, 4, 2)],
        ..ChordShape::default()
    };

    let report = validate(&shape);

    assert!(!report.is_valid());
    assert_eq!(
        report.warnings,
        vec![
            ValidationWarning::InvalidFret {
                context: "finger position".to_string(),
                fret: 25,
            },
            ValidationWarning::InvalidString {
                context: "finger position".to_string(),
                string: 7,
            },
            ValidationWarning::InvalidFinger {
                context: "finger position".to_string(),
                finger: 5,
            },
            ValidationWarning::InvalidFret {
                context: "barre".to_string(),
                fret: 0,
            },
            ValidationWarning::ReversedBarre {
                start_string: 4,
                end_string: 2,
            },
            ValidationWarning::Overlap {
                string: 3,
                frets: vec![2, 4],
            },
        ]
    );
}

#[test]
fn warnings_read_as_messages() {
    let w = ValidationWarning::ReversedBarre {
        start_string: 5,
        end_string: 1,
    };
    assert_eq!(
        w.to_string(),
        "barre start string 5 is greater than end string 1"
    );
    assert_eq!(
        serde_json::to_value(&w).unwrap(),
        json!({ "type": "reversedBarre", "startString": 5, "endString": 1 })
    );
}

#[test]
fn total_span_saturates_on_extreme_frets() {
    let shape = ChordShape::builder().dot(5, i32::MAX).dot(4, 0).build().unwrap();

    let data = FretboardAnalyzer::new()
        .chord_data(&shape, &FretboardConfig::default())
        .unwrap();

    assert_eq!(data.metadata.total_span, i32::MAX);
}
