//! Precomputed synthesis predictions
//!
//! A [`SynthesisRecord`] pairs a candidate id with the per-expert
//! probabilities and the aggregate `final_score` the demo displays for it.

use crate::error::RecordError;
use crate::fields::{form_text, CANDIDATE_ID};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate classifier output field
pub const FINAL_SCORE: &str = "final_score";

const EXPERT_PREFIX: &str = "expert_";
const PROBA_SUFFIX: &str = "_proba";

/// Whether `key` names an expert probability (`expert_*_proba`)
#[inline]
#[must_use]
pub fn is_expert_key(key: &str) -> bool {
    key.starts_with(EXPERT_PREFIX) && key.ends_with(PROBA_SUFFIX)
}

/// Canonical key of the `index`-th expert (1-based, zero padded)
#[inline]
#[must_use]
pub fn expert_key(index: usize) -> String {
    format!("{EXPERT_PREFIX}{index:02}{PROBA_SUFFIX}")
}

/// Expert probabilities plus the aggregate score
///
/// Either read verbatim from a [`SynthesisRecord`] or synthesized for a
/// manual entry. Expert order is insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionResult {
    /// `expert_{NN}_proba` → probability
    pub experts: IndexMap<String, f64>,
    /// Aggregate probability of being a planet
    pub final_score: f64,
}

impl PredictionResult {
    /// Create result with no experts
    #[inline]
    #[must_use]
    pub fn new(final_score: f64) -> Self {
        Self {
            experts: IndexMap::new(),
            final_score,
        }
    }

    /// With expert probability
    #[inline]
    #[must_use]
    pub fn with_expert(mut self, key: impl Into<String>, probability: f64) -> Self {
        self.experts.insert(key.into(), probability);
        self
    }

    /// Probability reported by one expert
    #[inline]
    #[must_use]
    pub fn expert(&self, key: &str) -> Option<f64> {
        self.experts.get(key).copied()
    }

    /// Number of experts
    #[inline]
    #[must_use]
    pub fn expert_count(&self) -> usize {
        self.experts.len()
    }
}

/// Fixture prediction for one known candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Value>",
    into = "IndexMap<String, Value>"
)]
pub struct SynthesisRecord {
    /// Candidate the prediction belongs to
    pub candidate_id: String,
    /// The prediction itself
    pub result: PredictionResult,
}

impl SynthesisRecord {
    /// Create record
    #[inline]
    #[must_use]
    pub fn new(candidate_id: impl Into<String>, result: PredictionResult) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            result,
        }
    }
}

fn probability(field: &str, value: &Value) -> Result<f64, RecordError> {
    let p = value.as_f64().ok_or_else(|| RecordError::NotNumeric {
        field: field.to_string(),
        found: value.to_string(),
    })?;
    if !(0.0..=1.0).contains(&p) {
        return Err(RecordError::ProbabilityOutOfRange {
            field: field.to_string(),
            value: p,
        });
    }
    Ok(p)
}

impl TryFrom<IndexMap<String, Value>> for SynthesisRecord {
    type Error = RecordError;

    fn try_from(raw: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        let candidate_id = raw
            .get(CANDIDATE_ID)
            .and_then(form_text)
            .ok_or(RecordError::MissingField(CANDIDATE_ID))?;
        let final_score = raw
            .get(FINAL_SCORE)
            .ok_or(RecordError::MissingField(FINAL_SCORE))
            .and_then(|value| probability(FINAL_SCORE, value))?;

        let mut experts = IndexMap::new();
        for (key, value) in &raw {
            if is_expert_key(key) {
                experts.insert(key.clone(), probability(key, value)?);
            }
        }

        Ok(Self {
            candidate_id,
            result: PredictionResult {
                experts,
                final_score,
            },
        })
    }
}

impl From<SynthesisRecord> for IndexMap<String, Value> {
    fn from(record: SynthesisRecord) -> Self {
        let mut raw = IndexMap::with_capacity(record.result.experts.len() + 2);
        raw.insert(CANDIDATE_ID.to_string(), Value::from(record.candidate_id));
        for (key, p) in record.result.experts {
            raw.insert(key, Value::from(p));
        }
        raw.insert(FINAL_SCORE.to_string(), Value::from(record.result.final_score));
        raw
    }
}
