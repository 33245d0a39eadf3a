//! Demo session
//!
//! [`Session`] is the explicit state container behind the page. It reacts
//! to discrete events, one at a time, and hands back render-ready views:
//!
//! - data loaded (or failed) → [`FormView`] or [`LoadFailureView`]
//! - selection changed / field edited → [`FormView`]
//! - predict requested → [`PredictResponse`]
//!
//! Phases: `Loading → Ready | LoadFailed`. `LoadFailed` is terminal.

use crate::config::DemoConfig;
use crate::error::SessionError;
use exo_dataset::{
    load_datasets, DatasetSource, LoadError, Sample, SampleRegistry, SynthesisRecord,
};
use exo_form::{
    selector_options, FormFieldSpec, FormMode, FormSchema, FormState, InputValidator, Selection,
    SelectorOption, ValidationReport,
};
use exo_predict::{
    ManualSynthesizer, PredictionResolver, RandomSource, RenderedReport, Resolution,
    ResultRenderer, RngSource,
};
use rand::rngs::StdRng;
use serde::Serialize;

/// Message shown when the datasets could not be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Error: Could not load necessary data files.";

/// Coarse session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Waiting for both datasets
    Loading,
    /// Interactive
    Ready,
    /// Terminal load-error state
    LoadFailed,
}

/// Everything the shell needs to paint the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Inputs in form order
    pub fields: Vec<FormFieldSpec>,
    /// Sample picker options
    pub selector: Vec<SelectorOption>,
    /// Routing a predict request would take
    pub mode: FormMode,
}

/// Terminal load-error display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailureView {
    /// User-facing message
    pub message: &'static str,
    /// Underlying cause, for logs and diagnostics
    pub detail: String,
}

/// Answer to a predict request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictResponse {
    /// Prediction to display
    Report(RenderedReport),
    /// Manual entry rejected; highlight these fields
    Invalid(ValidationReport),
}

#[derive(Debug)]
struct Ready {
    registry: SampleRegistry,
    form: FormState,
    selector: Vec<SelectorOption>,
}

impl Ready {
    fn view(&self) -> FormView {
        FormView {
            fields: self.form.fields(),
            selector: self.selector.clone(),
            mode: self.form.mode(),
        }
    }
}

#[derive(Debug)]
enum Phase {
    Loading,
    Ready(Box<Ready>),
    LoadFailed(LoadFailureView),
}

/// Event-driven demo session
#[derive(Debug)]
pub struct Session<R> {
    phase: Phase,
    resolver: PredictionResolver<R>,
    renderer: ResultRenderer,
    strict_schema: bool,
}

impl Session<RngSource<StdRng>> {
    /// Session configured from `config`; seeded if `config.seed` is set
    #[must_use]
    pub fn from_config(config: &DemoConfig) -> Self {
        let random: RngSource<StdRng> = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self::with_config(random, config)
    }
}

impl<R: RandomSource> Session<R> {
    /// Session with stock settings
    #[must_use]
    pub fn new(random: R) -> Self {
        Self::with_config(random, &DemoConfig::default())
    }

    /// Session with an explicit random source and configuration
    #[must_use]
    pub fn with_config(random: R, config: &DemoConfig) -> Self {
        let resolver = PredictionResolver::new(random)
            .with_synthesizer(ManualSynthesizer::new(config.synthesis.clone()))
            .with_validator(InputValidator::with_numeric_exempt(
                config.numeric_exempt_fields.iter().cloned(),
            ));
        Self {
            phase: Phase::Loading,
            resolver,
            renderer: ResultRenderer::with_threshold(config.decision_threshold),
            strict_schema: config.strict_schema,
        }
    }

    /// Current phase
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::Loading => SessionStatus::Loading,
            Phase::Ready(_) => SessionStatus::Ready,
            Phase::LoadFailed(_) => SessionStatus::LoadFailed,
        }
    }

    /// Form state, once ready
    #[must_use]
    pub fn form(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Ready(ready) => Some(&ready.form),
            _ => None,
        }
    }

    /// Registry, once ready
    #[must_use]
    pub fn registry(&self) -> Option<&SampleRegistry> {
        match &self.phase {
            Phase::Ready(ready) => Some(&ready.registry),
            _ => None,
        }
    }

    /// Load-error view, if loading failed
    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailureView> {
        match &self.phase {
            Phase::LoadFailed(view) => Some(view),
            _ => None,
        }
    }

    /// Fetch both datasets from `source` and feed the result in
    ///
    /// # Errors
    /// Same as [`on_data_loaded`](Self::on_data_loaded); a failed fetch is
    /// [`SessionError::Load`] and leaves the session in the load-error state.
    pub async fn load<S>(&mut self, source: &S) -> Result<FormView, SessionError>
    where
        S: DatasetSource + ?Sized,
    {
        self.ensure_loading()?;
        match load_datasets(source).await {
            Ok(datasets) => self.on_data_loaded(datasets.samples, datasets.synthesis),
            Err(err) => {
                self.fail(&err);
                Err(err.into())
            }
        }
    }

    /// Both datasets arrived
    ///
    /// Builds the registry, shapes the form after the first sample (its
    /// values are not shown) and derives the selector.
    ///
    /// # Errors
    /// - [`SessionError::AlreadyLoaded`] / [`SessionError::LoadFailed`] if not loading
    /// - [`SessionError::Load`] if the registry rejects the data; the session
    ///   moves to the load-error state
    pub fn on_data_loaded(
        &mut self,
        samples: Vec<Sample>,
        synthesis: Vec<SynthesisRecord>,
    ) -> Result<FormView, SessionError> {
        self.ensure_loading()?;

        let loaded = if self.strict_schema {
            SampleRegistry::load_strict(samples, synthesis)
        } else {
            SampleRegistry::load(samples, synthesis)
        };
        let registry = match loaded {
            Ok(registry) => registry,
            Err(err) => {
                self.fail(&err);
                return Err(err.into());
            }
        };

        let schema = registry
            .first_sample()
            .map(FormSchema::from_sample)
            .unwrap_or_default();
        let ready = Ready {
            form: FormState::new(schema),
            selector: selector_options(&registry),
            registry,
        };
        let view = ready.view();
        tracing::info!(
            fields = view.fields.len(),
            options = view.selector.len(),
            "session ready"
        );
        self.phase = Phase::Ready(Box::new(ready));
        Ok(view)
    }

    /// Either dataset failed to load; the session stops being interactive
    ///
    /// # Errors
    /// - [`SessionError::AlreadyLoaded`] once ready; the session stays ready
    /// - [`SessionError::LoadFailed`] if an earlier failure was recorded
    pub fn on_load_failed(&mut self, error: &LoadError) -> Result<LoadFailureView, SessionError> {
        if let Err(err) = self.ensure_loading() {
            tracing::warn!(%error, "ignoring load failure outside the loading phase");
            return Err(err);
        }
        Ok(self.fail(error))
    }

    fn fail(&mut self, error: &LoadError) -> LoadFailureView {
        tracing::error!(%error, "failed to load initial data");
        let view = LoadFailureView {
            message: LOAD_FAILURE_MESSAGE,
            detail: error.to_string(),
        };
        self.phase = Phase::LoadFailed(view.clone());
        view
    }

    /// The sample picker changed; `None` or `""` is the placeholder
    ///
    /// # Errors
    /// [`SessionError::NotReady`] / [`SessionError::LoadFailed`] outside the ready phase.
    pub fn on_selection_changed(&mut self, value: Option<&str>) -> Result<FormView, SessionError> {
        let ready = self.ready_mut()?;
        let selection = Selection::from_value(value);
        let outcome = ready.form.apply_selection(&selection, &ready.registry);
        tracing::debug!(?selection, ?outcome, "selection changed");
        Ok(ready.view())
    }

    /// The user typed into one field
    ///
    /// # Errors
    /// [`SessionError::Form`] for unknown or read-only fields, plus the
    /// phase errors of [`on_selection_changed`](Self::on_selection_changed).
    pub fn on_field_edited(&mut self, name: &str, value: &str) -> Result<FormView, SessionError> {
        let ready = self.ready_mut()?;
        ready.form.edit(name, value)?;
        Ok(ready.view())
    }

    /// The user pressed predict
    ///
    /// `current_values` is what the shell displays right now; it is adopted
    /// into the form before routing. Fields it omits keep their value.
    ///
    /// # Errors
    /// [`SessionError::Form`] if a value names an unknown field, plus the
    /// phase errors of [`on_selection_changed`](Self::on_selection_changed).
    pub fn on_predict_requested<'a, I>(
        &mut self,
        current_values: I,
    ) -> Result<PredictResponse, SessionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let ready = match &mut self.phase {
            Phase::Ready(ready) => ready,
            Phase::Loading => return Err(SessionError::NotReady),
            Phase::LoadFailed(view) => return Err(SessionError::LoadFailed(view.detail.clone())),
        };
        ready.form.sync(current_values)?;

        match self.resolver.resolve(&ready.form, &ready.registry) {
            Resolution::Predicted { outcome, route } => {
                let report = self.renderer.render(&outcome);
                tracing::info!(
                    ?route,
                    prediction = %report.final_prediction,
                    verdict = ?report.verdict(),
                    "prediction rendered"
                );
                Ok(PredictResponse::Report(report))
            }
            Resolution::Rejected(report) => Ok(PredictResponse::Invalid(report)),
        }
    }

    fn ensure_loading(&self) -> Result<(), SessionError> {
        match &self.phase {
            Phase::Loading => Ok(()),
            Phase::Ready(_) => Err(SessionError::AlreadyLoaded),
            Phase::LoadFailed(view) => Err(SessionError::LoadFailed(view.detail.clone())),
        }
    }

    fn ready_mut(&mut self) -> Result<&mut Ready, SessionError> {
        match &mut self.phase {
            Phase::Ready(ready) => Ok(&mut **ready),
            Phase::Loading => Err(SessionError::NotReady),
            Phase::LoadFailed(view) => Err(SessionError::LoadFailed(view.detail.clone())),
        }
    }
}
