//! Error types for dataset loading
//!
//! Covers:
//! - Malformed individual records (missing or non-scalar fields)
//! - Unreadable or unparsable dataset files
//! - Registry invariant violations (duplicate identifiers, schema drift)

use std::path::PathBuf;

/// Which of the two datasets an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Candidate samples with ground truth
    Samples,
    /// Precomputed synthesis predictions
    Synthesis,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Samples => f.write_str("samples"),
            Self::Synthesis => f.write_str("synthesis"),
        }
    }
}

/// A single sample or synthesis record is malformed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Required field absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// Field holds an array or object
    #[error("field '{0}' is not a scalar value")]
    NonScalarField(String),

    /// Field must be a number
    #[error("field '{field}' must be numeric, got {found}")]
    NotNumeric { field: String, found: String },

    /// Probability outside [0, 1]
    #[error("field '{field}' must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: String, value: f64 },
}

/// Loading the datasets failed; the session cannot become interactive
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Dataset file could not be read
    #[error("failed to read {kind} dataset at {}: {source}", path.display())]
    Io {
        kind: DatasetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset text is not valid JSON of the expected shape
    #[error("failed to parse {kind} dataset: {source}")]
    Parse {
        kind: DatasetKind,
        #[source]
        source: serde_json::Error,
    },

    /// Two samples share a candidate id
    #[error("duplicate sample for candidate '{0}'")]
    DuplicateSample(String),

    /// Two synthesis records share a candidate id
    #[error("duplicate synthesis record for candidate '{0}'")]
    DuplicateSynthesis(String),

    /// Sample key set differs from the first sample's
    #[error("sample '{candidate_id}' does not match the form schema (unexpected: {unexpected:?}, missing: {missing:?})")]
    SchemaMismatch {
        candidate_id: String,
        unexpected: Vec<String>,
        missing: Vec<String>,
    },

    /// Collaborator-reported failure (e.g. a fetch that never resolved)
    #[error("{kind} dataset unavailable: {reason}")]
    Unavailable { kind: DatasetKind, reason: String },
}

impl LoadError {
    /// Dataset the failure belongs to, when it concerns a single dataset
    #[must_use]
    pub fn dataset(&self) -> Option<DatasetKind> {
        match self {
            Self::Io { kind, .. } | Self::Parse { kind, .. } | Self::Unavailable { kind, .. } => {
                Some(*kind)
            }
            Self::DuplicateSample(_) | Self::SchemaMismatch { .. } => Some(DatasetKind::Samples),
            Self::DuplicateSynthesis(_) => Some(DatasetKind::Synthesis),
        }
    }
}
