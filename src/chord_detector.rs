//! Chord Detector
//!
//! Names chords from a set of pitch classes by matching it against a
//! precomputed profile for every root and chord quality.
//!
//! The [`ChordIdentifier`] trait is the seam the detection pipeline calls
//! through; [`ChordDetector`] is the built-in implementation.

use std::fmt::Display;

use thiserror::Error;

use crate::note::{NoteName, SEMITONES};

/// Number of chord qualities
const NUM_CHORD_KINDS: usize = 14;

/// Total number of chords (root × quality)
const NUM_CHORDS: usize = SEMITONES * NUM_CHORD_KINDS;

/// Supported chord qualities in the same order as `CHORD_INTERVALS`
const CHORD_KINDS: [ChordKind; NUM_CHORD_KINDS] = [
    ChordKind::Major,
    ChordKind::Minor,
    ChordKind::PowerFifth,
    ChordKind::DominantSeventh,
    ChordKind::MajorSeventh,
    ChordKind::MinorSeventh,
    ChordKind::Diminished,
    ChordKind::Augmented,
    ChordKind::SuspendedSecond,
    ChordKind::SuspendedFourth,
    ChordKind::MajorSixth,
    ChordKind::MinorSixth,
    ChordKind::DiminishedSeventh,
    ChordKind::HalfDiminished,
];

/// Intervals (in semitones) matching `CHORD_KINDS` order
const CHORD_INTERVALS: [&[usize]; NUM_CHORD_KINDS] = [
    &[0, 4, 7],
    &[0, 3, 7],
    &[0, 7],
    &[0, 4, 7, 10],
    &[0, 4, 7, 11],
    &[0, 3, 7, 10],
    &[0, 3, 6],
    &[0, 4, 8],
    &[0, 2, 7],
    &[0, 5, 7],
    &[0, 4, 7, 9],
    &[0, 3, 7, 9],
    &[0, 3, 6, 9],
    &[0, 3, 6, 10],
];

/// Pitch-class set as a 12-bit mask, bit `n` set for `NoteName::from_idx(n)`
type PitchSet = u16;

/// Precomputed chord profile
#[derive(Copy, Clone)]
struct PrecalcProfile {
    root: NoteName,
    kind_idx: usize,
    pitches: PitchSet,
}

/// A chord matched against a set of notes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    /// The root note of the chord.
    pub root: NoteName,
    /// The quality (e.g., Major, Minor) of the chord.
    pub quality: ChordKind,
    /// The lowest note that was played.
    pub bass: NoteName,
}

impl Chord {
    /// Whether the bass note is something other than the root.
    pub fn is_inversion(&self) -> bool {
        self.root != self.bass
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.quality.symbol())?;
        if self.is_inversion() {
            write!(f, "/{}", self.bass)?;
        }
        Ok(())
    }
}

/// Supported chord qualities
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChordKind {
    /// Major chord (e.g., C-E-G)
    Major,
    /// Minor chord (e.g., C-Eb-G)
    Minor,
    /// Power chord (e.g., C-G)
    PowerFifth,
    /// Dominant seventh chord (e.g., C-E-G-Bb)
    DominantSeventh,
    /// Major seventh chord (e.g., C-E-G-B)
    MajorSeventh,
    /// Minor seventh chord (e.g., C-Eb-G-Bb)
    MinorSeventh,
    /// Diminished chord (e.g., C-Eb-Gb)
    Diminished,
    /// Augmented chord (e.g., C-E-G#)
    Augmented,
    /// Suspended second chord (e.g., C-D-G)
    SuspendedSecond,
    /// Suspended fourth chord (e.g., C-F-G)
    SuspendedFourth,
    /// Major sixth chord (e.g., C-E-G-A)
    MajorSixth,
    /// Minor sixth chord (e.g., C-Eb-G-A)
    MinorSixth,
    /// Diminished seventh chord (e.g., C-Eb-Gb-A)
    DiminishedSeventh,
    /// Half-diminished chord (e.g., C-Eb-Gb-Bb)
    HalfDiminished,
}

impl ChordKind {
    /// Suffix written after the root in a chord symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::PowerFifth => "5",
            ChordKind::DominantSeventh => "7",
            ChordKind::MajorSeventh => "maj7",
            ChordKind::MinorSeventh => "m7",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "aug",
            ChordKind::SuspendedSecond => "sus2",
            ChordKind::SuspendedFourth => "sus4",
            ChordKind::MajorSixth => "6",
            ChordKind::MinorSixth => "m6",
            ChordKind::DiminishedSeventh => "dim7",
            ChordKind::HalfDiminished => "m7b5",
        }
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Errors when identifying chords
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// An invalid argument was provided to a detection function.
    #[error("invalid argument `{arg}`: {msg}")]
    InvalidArgument {
        /// The name of the invalid argument.
        arg: &'static str,
        /// A description of the invalid argument.
        msg: String,
    },

    /// The chord-naming backend could not produce an answer.
    #[error("chord identification unavailable: {0}")]
    Unavailable(String),
}

/// Something that names chords from an ordered list of pitch classes.
///
/// The first note is the bass and acts as a root hint. Candidates come back
/// best first; callers do not reorder them.
pub trait ChordIdentifier {
    /// Candidate chord names for `notes`, possibly none.
    fn identify(&self, notes: &[NoteName]) -> Result<Vec<String>, ChordError>;
}

impl<F> ChordIdentifier for F
where
    F: Fn(&[NoteName]) -> Result<Vec<String>, ChordError>,
{
    fn identify(&self, notes: &[NoteName]) -> Result<Vec<String>, ChordError> {
        self(notes)
    }
}

/// Builder for `ChordDetector`
pub struct ChordDetectorBuilder {
    slash_chords: bool,
    max_candidates: usize,
}

impl ChordDetectorBuilder {
    /// Create a new builder reporting inversions and every match
    pub fn new() -> Self {
        ChordDetectorBuilder {
            slash_chords: true,
            max_candidates: NUM_CHORDS,
        }
    }

    /// Whether to report chords whose root is not the bass note (e.g. `C/E`)
    pub fn slash_chords(mut self, enabled: bool) -> Self {
        self.slash_chords = enabled;
        self
    }

    /// Cap the number of candidates returned
    pub fn max_candidates(mut self, n: usize) -> Self {
        self.max_candidates = n;
        self
    }

    /// Build the `ChordDetector`
    pub fn build(self) -> ChordDetector {
        ChordDetector::with_options(self.slash_chords, self.max_candidates)
    }
}

impl Default for ChordDetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main chord detector
#[derive(Clone)]
pub struct ChordDetector {
    slash_chords: bool,
    max_candidates: usize,
    profiles: [PrecalcProfile; NUM_CHORDS],
}

impl ChordDetector {
    /// Return a builder to customize reporting
    pub fn builder() -> ChordDetectorBuilder {
        ChordDetectorBuilder::new()
    }

    /// Create a detector reporting inversions and every match
    pub fn new() -> Self {
        ChordDetectorBuilder::new().build()
    }

    fn with_options(slash_chords: bool, max_candidates: usize) -> Self {
        // Precompute profiles
        let mut profiles = [PrecalcProfile {
            root: NoteName::C,
            kind_idx: 0,
            pitches: 0,
        }; NUM_CHORDS];

        for (kind_idx, intervals) in CHORD_INTERVALS.iter().enumerate() {
            for root in 0..SEMITONES {
                let p = &mut profiles[kind_idx * SEMITONES + root];
                p.root = NoteName::from_idx(root);
                p.kind_idx = kind_idx;
                for &off in intervals.iter() {
                    p.pitches |= 1 << ((root + off) % SEMITONES);
                }
            }
        }

        ChordDetector {
            slash_chords,
            max_candidates,
            profiles,
        }
    }

    /// Every chord whose pitch-class set equals that of `notes`.
    ///
    /// `notes[0]` is taken as the bass. Chords rooted on the bass come
    /// first, then inversions, each group in chord-quality order.
    ///
    /// Returns `Err(InvalidArgument)` if `notes` is empty.
    pub fn detect(&self, notes: &[NoteName]) -> Result<Vec<Chord>, ChordError> {
        let Some(&bass) = notes.first() else {
            return Err(ChordError::InvalidArgument {
                arg: "notes",
                msg: "must contain at least one note".to_string(),
            });
        };
        let played = notes
            .iter()
            .fold(0, |acc: PitchSet, n| acc | (1 << n.index()));

        let mut matches: Vec<&PrecalcProfile> = self
            .profiles
            .iter()
            .filter(|p| p.pitches == played)
            .filter(|p| self.slash_chords || p.root == bass)
            .collect();

        matches.sort_by_key(|p| {
            let above_bass = (p.root.index() + SEMITONES - bass.index()) % SEMITONES;
            (p.root != bass, p.kind_idx, above_bass)
        });
        matches.truncate(self.max_candidates);

        Ok(matches
            .into_iter()
            .map(|p| Chord {
                root: p.root,
                quality: CHORD_KINDS[p.kind_idx],
                bass,
            })
            .collect())
    }
}

impl ChordIdentifier for ChordDetector {
    fn identify(&self, notes: &[NoteName]) -> Result<Vec<String>, ChordError> {
        Ok(self.detect(notes)?.iter().map(Chord::to_string).collect())
    }
}

impl Default for ChordDetector {
    fn default() -> Self {
        ChordDetector::new()
    }
}
