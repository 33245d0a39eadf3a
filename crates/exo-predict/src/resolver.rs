//! Prediction routing
//!
//! Decides, from the form's `candidate_id`, whether a request is a fixture
//! lookup or a manual entry, and produces a [`PredictionOutcome`].
//!
//! Branches, in priority order:
//! 1. empty `candidate_id`: validate, then synthesize
//! 2. fixture exists for the id: return it verbatim, ground truth is the
//!    form's `disposition`
//! 3. no fixture: validate, then synthesize as in 1. The stale id and its
//!    ground truth are dropped.

use crate::outcome::{PredictionOutcome, Route};
use crate::random::RandomSource;
use crate::synthesizer::ManualSynthesizer;
use exo_dataset::SampleRegistry;
use exo_form::{FormState, InputValidator, ValidationReport};

/// Result of a predict request
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A prediction is ready to render
    Predicted {
        /// Result and ground truth
        outcome: PredictionOutcome,
        /// Branch that produced it
        route: Route,
    },
    /// Manual entry failed validation; nothing was predicted
    Rejected(ValidationReport),
}

impl Resolution {
    /// The outcome, if a prediction was produced
    #[must_use]
    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match self {
            Self::Predicted { outcome, .. } => Some(outcome),
            Self::Rejected(_) => None,
        }
    }

    /// The branch taken, if a prediction was produced
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Predicted { route, .. } => Some(*route),
            Self::Rejected(_) => None,
        }
    }
}

/// Routes predict requests to a fixture lookup or a synthesized result
#[derive(Debug)]
pub struct PredictionResolver<R> {
    random: R,
    synthesizer: ManualSynthesizer,
    validator: InputValidator,
}

impl<R: RandomSource> PredictionResolver<R> {
    /// Resolver with default synthesis bounds and validator
    #[must_use]
    pub fn new(random: R) -> Self {
        Self {
            random,
            synthesizer: ManualSynthesizer::default(),
            validator: InputValidator::new(),
        }
    }

    /// With synthesizer
    #[inline]
    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: ManualSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// With validator
    #[inline]
    #[must_use]
    pub fn with_validator(mut self, validator: InputValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Validator used for manual entry
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    /// Resolve the form's current state into a prediction
    pub fn resolve(&mut self, form: &FormState, registry: &SampleRegistry) -> Resolution {
        let candidate_id = form.candidate_id();

        let route = if candidate_id.is_empty() {
            Route::Manual
        } else if let Some(record) = registry.find_synthesis(candidate_id) {
            tracing::info!(candidate_id, "prediction from synthesis fixture");
            return Resolution::Predicted {
                outcome: PredictionOutcome::lookup(record.result.clone(), form.disposition()),
                route: Route::Lookup,
            };
        } else {
            tracing::warn!(
                candidate_id,
                "no synthesis record for candidate; falling back to manual entry"
            );
            Route::LookupMissFallback
        };

        let report = self.validator.validate(form);
        if !report.is_valid() {
            return Resolution::Rejected(report);
        }

        let result = self.synthesizer.synthesize(&mut self.random);
        tracing::info!(?route, final_score = result.final_score, "manual prediction synthesized");
        Resolution::Predicted {
            outcome: PredictionOutcome::manual(result),
            route,
        }
    }
}
