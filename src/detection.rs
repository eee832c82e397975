//! Chord detection pipeline
//!
//! Wires the collector, deduplicator and a [`ChordIdentifier`] together:
//! shape → notes → unique notes → chord names.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chord_data::{ChordData, FretboardConfig};
use crate::chord_detector::{ChordDetector, ChordIdentifier};
use crate::collector::{collect, dedupe};
use crate::error::FretboardError;
use crate::note::NoteName;
use crate::resolver::MutePolicy;
use crate::shape::ChordShape;

/// Notes and chord names derived from one shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDetectionResult {
    /// Unique pitch classes, lowest string first.
    pub notes: Vec<NoteName>,
    /// Candidate chord names, best first.
    pub chord_names: Vec<String>,
    /// The first candidate, if any.
    pub primary_chord: Option<String>,
}

/// Name the chord formed by already-deduplicated `notes`.
///
/// Empty input short-circuits without consulting `identifier`. A failing
/// identifier is logged and yields no candidates rather than an error.
pub fn identify<I>(notes: &[NoteName], identifier: &I) -> ChordDetectionResult
where
    I: ChordIdentifier + ?Sized,
{
    if notes.is_empty() {
        return ChordDetectionResult::default();
    }

    let chord_names = identifier.identify(notes).unwrap_or_else(|err| {
        warn!(%err, ?notes, "chord identification failed");
        Vec::new()
    });
    debug!(?notes, ?chord_names, "detected chords");

    ChordDetectionResult {
        notes: notes.to_vec(),
        primary_chord: chord_names.first().cloned(),
        chord_names,
    }
}

/// Builder for `FretboardAnalyzer`
pub struct FretboardAnalyzerBuilder {
    mute_policy: MutePolicy,
    identifier: Box<dyn ChordIdentifier + Send + Sync>,
}

impl FretboardAnalyzerBuilder {
    /// Start with `MutePolicy::Silences` and the built-in `ChordDetector`
    pub fn new() -> Self {
        FretboardAnalyzerBuilder {
            mute_policy: MutePolicy::default(),
            identifier: Box::new(ChordDetector::new()),
        }
    }

    /// Set how muted strings interact with dots and barres
    pub fn mute_policy(mut self, policy: MutePolicy) -> Self {
        self.mute_policy = policy;
        self
    }

    /// Replace the chord-naming backend
    pub fn identifier<I>(mut self, identifier: I) -> Self
    where
        I: ChordIdentifier + Send + Sync + 'static,
    {
        self.identifier = Box::new(identifier);
        self
    }

    /// Build the `FretboardAnalyzer`
    pub fn build(self) -> FretboardAnalyzer {
        FretboardAnalyzer {
            mute_policy: self.mute_policy,
            identifier: self.identifier,
        }
    }
}

impl Default for FretboardAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full shape-to-chord-name pipeline.
///
/// Stateless between calls: every `analyze` recomputes from the snapshot.
pub struct FretboardAnalyzer {
    mute_policy: MutePolicy,
    identifier: Box<dyn ChordIdentifier + Send + Sync>,
}

impl FretboardAnalyzer {
    /// Return a builder to customize the pipeline
    pub fn builder() -> FretboardAnalyzerBuilder {
        FretboardAnalyzerBuilder::new()
    }

    /// Analyzer with default settings
    pub fn new() -> Self {
        FretboardAnalyzerBuilder::new().build()
    }

    /// The mute policy in effect.
    pub fn mute_policy(&self) -> MutePolicy {
        self.mute_policy
    }

    /// Notes sounding on each played string, lowest string first.
    pub fn notes(&self, shape: &ChordShape) -> Result<Vec<NoteName>, FretboardError> {
        collect(shape, self.mute_policy)
    }

    /// Collect, deduplicate and name the chord held in `shape`.
    ///
    /// Fails only on an out-of-range string or negative fret.
    pub fn analyze(&self, shape: &ChordShape) -> Result<ChordDetectionResult, FretboardError> {
        let notes = self.notes(shape)?;
        Ok(identify(&dedupe(&notes), self.identifier.as_ref()))
    }

    /// Snapshot of `shape` for the host, labelled with the primary chord name.
    pub fn chord_data(
        &self,
        shape: &ChordShape,
        config: &FretboardConfig,
    ) -> Result<ChordData, FretboardError> {
        let detected = self.analyze(shape)?;
        Ok(ChordData::from_shape(shape, config, detected.primary_chord))
    }
}

impl Default for FretboardAnalyzer {
    fn default() -> Self {
        FretboardAnalyzer::new()
    }
}
