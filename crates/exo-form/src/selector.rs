//! Sample selector options

use exo_dataset::SampleRegistry;
use serde::Serialize;

/// Label of the "no sample" option
pub const PLACEHOLDER_LABEL: &str = "Select a sample...";

/// One entry of the sample picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    /// Candidate id, `None` for the placeholder
    pub value: Option<String>,
    /// Text shown to the user
    pub label: String,
}

impl SelectorOption {
    /// The leading "no sample" option
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            value: None,
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Placeholder followed by one option per sample, in load order
#[must_use]
pub fn selector_options(registry: &SampleRegistry) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption::placeholder())
        .chain(registry.samples().iter().map(|sample| SelectorOption {
            value: Some(sample.candidate_id().to_string()),
            label: format!(
                "Candidate: {} ({})",
                sample.candidate_id(),
                sample.disposition()
            ),
        }))
        .collect()
}
