//! Simulated expert probabilities for manual entry
//!
//! No model is consulted. Each expert draws uniformly from
//! `[0, expert_ceiling)`, the final score is their mean plus uniform noise
//! in `[-noise_amplitude, noise_amplitude)`, floored at zero. The defaults
//! lean towards low scores.

use crate::random::RandomSource;
use exo_dataset::{expert_key, PredictionResult};
use serde::{Deserialize, Serialize};

/// Bounds of the simulated manual-entry prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Number of simulated experts
    pub expert_count: usize,
    /// Exclusive upper bound of each expert probability
    pub expert_ceiling: f64,
    /// Half-width of the noise added to the mean
    pub noise_amplitude: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            expert_count: 9,
            expert_ceiling: 0.35,
            noise_amplitude: 0.05,
        }
    }
}

impl SynthesisConfig {
    /// Problems with the configured bounds; empty means valid
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.expert_count == 0 {
            errors.push("synthesis.expert_count must be > 0".into());
        }
        if self.expert_count > 99 {
            errors.push(format!(
                "synthesis.expert_count must be <= 99, got {}",
                self.expert_count
            ));
        }
        if !(self.expert_ceiling > 0.0 && self.expert_ceiling <= 1.0) {
            errors.push(format!(
                "synthesis.expert_ceiling must be in (0, 1], got {}",
                self.expert_ceiling
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_amplitude) {
            errors.push(format!(
                "synthesis.noise_amplitude must be in [0, 1], got {}",
                self.noise_amplitude
            ));
        }
        errors
    }
}

/// Produces placeholder predictions for free-form entries
#[derive(Debug, Clone, Default)]
pub struct ManualSynthesizer {
    config: SynthesisConfig,
}

impl ManualSynthesizer {
    /// Create synthesizer
    #[inline]
    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Configured bounds
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Draw one simulated prediction
    pub fn synthesize<R: RandomSource + ?Sized>(&self, random: &mut R) -> PredictionResult {
        let mut result = PredictionResult::default();
        let mut sum = 0.0;
        for i in 1..=self.config.expert_count {
            let p = random.next_unit() * self.config.expert_ceiling;
            sum += p;
            result.experts.insert(expert_key(i), p);
        }

        #[allow(clippy::cast_precision_loss)]
        let avg = if self.config.expert_count == 0 {
            0.0
        } else {
            sum / self.config.expert_count as f64
        };
        let noise = (random.next_unit() - 0.5) * 2.0 * self.config.noise_amplitude;
        result.final_score = (avg + noise).max(0.0);

        tracing::debug!(
            experts = self.config.expert_count,
            avg,
            final_score = result.final_score,
            "synthesized manual prediction"
        );
        result
    }
}
