//! Testing utilities for the exo demo workspace
//!
//! Shared fixtures, a scripted random source, and dataset JSON.

#![allow(missing_docs)]

use exo_dataset::{expert_key, PredictionResult, Sample, SampleRegistry, SynthesisRecord};
use exo_predict::RandomSource;
use serde_json::{json, Map, Value};

pub const SAMPLES_JSON: &str = r#"[
    {"candidate_id": "K001", "disposition": "PLANET", "koi_period": 9.488, "koi_depth": 615.8, "dataset": "kepler"},
    {"candidate_id": "K002", "disposition": "FALSE_POSITIVE", "koi_period": 19.899, "koi_depth": 10829.0, "dataset": "kepler"},
    {"candidate_id": "T003", "disposition": "PLANET", "koi_period": 2.526, "koi_depth": 874.2, "dataset": "tess"}
]"#;

pub const SYNTHESIS_JSON: &str = r#"[
    {"candidate_id": "K001", "expert_01_proba": 0.91, "expert_02_proba": 0.87, "expert_03_proba": 0.78,
     "expert_04_proba": 0.95, "expert_05_proba": 0.66, "expert_06_proba": 0.72, "expert_07_proba": 0.81,
     "expert_08_proba": 0.88, "expert_09_proba": 0.79, "final_score": 0.82},
    {"candidate_id": "K002", "expert_01_proba": 0.11, "expert_02_proba": 0.07, "expert_03_proba": 0.21,
     "expert_04_proba": 0.05, "expert_05_proba": 0.16, "expert_06_proba": 0.09, "expert_07_proba": 0.12,
     "expert_08_proba": 0.03, "expert_09_proba": 0.18, "final_score": 0.09}
]"#;

pub fn create_sample(candidate_id: &str, disposition: &str, features: &[(&str, f64)]) -> Sample {
    let mut raw = Map::new();
    raw.insert("candidate_id".into(), json!(candidate_id));
    raw.insert("disposition".into(), json!(disposition));
    for (name, value) in features {
        raw.insert((*name).to_string(), json!(value));
    }
    serde_json::from_value(Value::Object(raw)).unwrap()
}

pub fn create_record(candidate_id: &str, final_score: f64, experts: &[f64]) -> SynthesisRecord {
    let result = experts
        .iter()
        .enumerate()
        .fold(PredictionResult::new(final_score), |result, (i, p)| {
            result.with_expert(expert_key(i + 1), *p)
        });
    SynthesisRecord::new(candidate_id, result)
}

/// `{candidate_id: "K001", disposition, feat_a: 1.0}`
pub fn k001_sample(disposition: &str) -> Sample {
    create_sample("K001", disposition, &[("feat_a", 1.0)])
}

/// Fixture for K001 with `final_score = 0.82` and `expert_01_proba = 0.9`
pub fn k001_record() -> SynthesisRecord {
    create_record("K001", 0.82, &[0.9, 0.8, 0.85, 0.7, 0.75, 0.9, 0.88, 0.79, 0.81])
}

pub fn k001_registry(disposition: &str) -> SampleRegistry {
    SampleRegistry::load(vec![k001_sample(disposition)], vec![k001_record()]).unwrap()
}

/// Registry built from [`SAMPLES_JSON`] and [`SYNTHESIS_JSON`] (T003 has no fixture)
pub fn demo_registry() -> SampleRegistry {
    SampleRegistry::load(
        exo_dataset::parse_samples(SAMPLES_JSON).unwrap(),
        exo_dataset::parse_synthesis(SYNTHESIS_JSON).unwrap(),
    )
    .unwrap()
}

/// Replays a fixed list of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "scripted source needs at least one draw");
        Self { draws, next: 0 }
    }

    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}
