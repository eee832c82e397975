//! # fretboard_chords
//!
//! Work out which notes a guitar chord diagram sounds and what the chord is
//! called: resolve finger positions, barres and open/muted strings into a
//! low-to-high note sequence, then name it.
//!
//! ## Example
//! ```rust
//! use fretboard_chords::{ChordShape, FretboardAnalyzer, MutePolicy};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Describe the shape (open C major: x32010)
//!     let shape = ChordShape::builder()
//!         .mute(6)
//!         .dot(5, 3)
//!         .dot(4, 2)
//!         .dot(2, 1)
//!         .build()?;
//!
//!     // 2) Build an analyzer
//!     let analyzer = FretboardAnalyzer::builder()
//!         .mute_policy(MutePolicy::Silences)
//!         .build();
//!
//!     // 3) On every change to the shape:
//!     let result = analyzer.analyze(&shape)?;
//!     println!("{:?} -> {:?}", result.notes, result.primary_chord);
//!     assert_eq!(result.primary_chord.as_deref(), Some("C"));
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord naming backend and the trait it implements.
pub use chord_detector::{
    Chord, ChordDetector, ChordDetectorBuilder, ChordError, ChordIdentifier, ChordKind,
};

/// Shape-to-chord-name pipeline.
pub use detection::{identify, ChordDetectionResult, FretboardAnalyzer, FretboardAnalyzerBuilder};

/// Note collection and deduplication.
pub use collector::{collect, dedupe, NoteSequence};

/// Pitch classes and the string/fret note mapping.
pub use note::{note_at, open_note, NoteName, CHROMATIC_SCALE, SEMITONES, STRING_COUNT};

/// Per-string precedence.
pub use resolver::{resolve, MutePolicy, Resolution};

/// Chord shape value types.
pub use shape::{Barre, ChordShape, ChordShapeBuilder, FingerPosition, StringState};

/// Host snapshot and validation.
pub use chord_data::{ChordData, ChordMetadata, FretboardConfig};
pub use validation::{validate, ValidationReport, ValidationWarning};

pub use error::FretboardError;

/// Host-facing chord snapshot.
pub mod chord_data;

/// Chord detection module.
pub mod chord_detector;

/// Fretboard note collection.
pub mod collector;

/// Detection pipeline.
pub mod detection;

/// Error types.
pub mod error;

/// Note mapping module.
pub mod note;

/// Position resolution.
pub mod resolver;

/// Chord shape types.
pub mod shape;

/// Shape validation.
pub mod validation;
