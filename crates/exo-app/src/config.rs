//! Demo configuration
//!
//! Every tunable of the demo in one [`DemoConfig`], loadable from TOML.
//! Defaults reproduce the stock behavior, so an empty file is valid.
//!
//! ```toml
//! samples_path = "data/samples.json"
//! synthesis_path = "data/synthesis_data.json"
//! decision_threshold = 0.5
//! seed = 42
//!
//! [synthesis]
//! expert_count = 9
//! expert_ceiling = 0.35
//! noise_amplitude = 0.05
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

use crate::error::ConfigError;
use exo_dataset::fields::NUMERIC_EXEMPT_FIELDS;
use exo_dataset::{DEFAULT_SAMPLES_PATH, DEFAULT_SYNTHESIS_PATH};
use exo_predict::{SynthesisConfig, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Samples dataset file
    pub samples_path: PathBuf,
    /// Synthesis dataset file
    pub synthesis_path: PathBuf,
    /// `final_score` strictly above this is a planet
    pub decision_threshold: f64,
    /// Reject samples whose field set differs from the first sample's
    pub strict_schema: bool,
    /// Fixed seed for manual-entry synthesis; entropy when absent
    pub seed: Option<u64>,
    /// Fields allowed to hold non-numeric text
    pub numeric_exempt_fields: Vec<String>,
    /// Manual-entry synthesis bounds
    pub synthesis: SynthesisConfig,
    /// Log output
    pub logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            samples_path: PathBuf::from(DEFAULT_SAMPLES_PATH),
            synthesis_path: PathBuf::from(DEFAULT_SYNTHESIS_PATH),
            decision_threshold: DEFAULT_THRESHOLD,
            strict_schema: false,
            seed: None,
            numeric_exempt_fields: NUMERIC_EXEMPT_FIELDS.iter().map(ToString::to_string).collect(),
            synthesis: SynthesisConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With fixed seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// With dataset paths
    #[inline]
    #[must_use]
    pub fn with_paths(mut self, samples: impl Into<PathBuf>, synthesis: impl Into<PathBuf>) -> Self {
        self.samples_path = samples.into();
        self.synthesis_path = synthesis.into();
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// [`ConfigError::Toml`] on malformed TOML or unknown value types.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if unreadable, [`ConfigError::Toml`] if malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Problems with the configured values; empty means valid
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            errors.push(format!(
                "decision_threshold must be in [0, 1], got {}",
                self.decision_threshold
            ));
        }
        errors.extend(self.synthesis.validate());
        errors
    }

    /// [`validate`](Self::validate) as a `Result`
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] listing every problem.
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}
