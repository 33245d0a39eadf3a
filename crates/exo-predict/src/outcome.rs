//! Prediction outcomes handed to the renderer

use exo_dataset::PredictionResult;
use serde::Serialize;
use std::fmt;

/// Text the ground truth shows for a free-form entry
pub const MANUAL_ENTRY_MARKER: &str = "MANUAL ENTRY";

/// What a prediction is compared against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundTruth {
    /// The form's `disposition` text at predict time
    Label(String),
    /// Free-form entry; nothing to compare against
    ManualEntry,
}

impl GroundTruth {
    /// Whether this is the manual-entry marker
    #[inline]
    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::ManualEntry)
    }

    /// Label text, if any
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(label),
            Self::ManualEntry => None,
        }
    }
}

impl fmt::Display for GroundTruth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::ManualEntry => f.write_str(MANUAL_ENTRY_MARKER),
        }
    }
}

/// Which branch of the resolver produced a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Empty `candidate_id`: synthesized
    Manual,
    /// Fixture found for the candidate
    Lookup,
    /// Candidate id without a fixture: validated, then synthesized
    LookupMissFallback,
}

/// Result plus what to compare it with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    /// Expert probabilities and final score
    pub result: PredictionResult,
    /// Label or manual-entry marker
    pub ground_truth: GroundTruth,
}

impl PredictionOutcome {
    /// Outcome of a fixture lookup
    #[must_use]
    pub fn lookup(result: PredictionResult, label: impl Into<String>) -> Self {
        Self {
            result,
            ground_truth: GroundTruth::Label(label.into()),
        }
    }

    /// Outcome of a synthesized prediction
    #[must_use]
    pub fn manual(result: PredictionResult) -> Self {
        Self {
            result,
            ground_truth: GroundTruth::ManualEntry,
        }
    }
}
