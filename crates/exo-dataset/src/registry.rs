//! Sample registry
//!
//! Provides [`SampleRegistry`], the immutable store of everything loaded at
//! startup. Built once by [`SampleRegistry::load`]; read-only afterwards.

use crate::error::LoadError;
use crate::fields::FieldName;
use crate::sample::Sample;
use crate::synthesis::SynthesisRecord;
use std::collections::HashMap;

/// Loaded samples and synthesis fixtures, indexed by candidate id
#[derive(Debug, Default, Clone)]
pub struct SampleRegistry {
    samples: Vec<Sample>,
    sample_index: HashMap<String, usize>,
    synthesis: HashMap<String, SynthesisRecord>,
}

impl SampleRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from both datasets
    ///
    /// # Errors
    /// - [`LoadError::DuplicateSample`] if two samples share a candidate id
    /// - [`LoadError::DuplicateSynthesis`] if two records share a candidate id
    pub fn load(
        samples: Vec<Sample>,
        synthesis: Vec<SynthesisRecord>,
    ) -> Result<Self, LoadError> {
        let mut sample_index = HashMap::with_capacity(samples.len());
        for (i, sample) in samples.iter().enumerate() {
            if sample_index
                .insert(sample.candidate_id().to_string(), i)
                .is_some()
            {
                return Err(LoadError::DuplicateSample(sample.candidate_id().to_string()));
            }
        }

        let mut by_id = HashMap::with_capacity(synthesis.len());
        for record in synthesis {
            let id = record.candidate_id.clone();
            if by_id.insert(id.clone(), record).is_some() {
                return Err(LoadError::DuplicateSynthesis(id));
            }
        }

        tracing::info!(
            samples = samples.len(),
            synthesis = by_id.len(),
            "sample registry loaded"
        );

        Ok(Self {
            samples,
            sample_index,
            synthesis: by_id,
        })
    }

    /// Like [`load`](Self::load), but every sample must have exactly the
    /// field set of the first sample
    ///
    /// # Errors
    /// Everything [`load`](Self::load) rejects, plus
    /// [`LoadError::SchemaMismatch`] for the first deviating sample.
    pub fn load_strict(
        samples: Vec<Sample>,
        synthesis: Vec<SynthesisRecord>,
    ) -> Result<Self, LoadError> {
        if let Some((first, rest)) = samples.split_first() {
            for sample in rest {
                let (unexpected, missing) = key_diff(first, sample);
                if !unexpected.is_empty() || !missing.is_empty() {
                    return Err(LoadError::SchemaMismatch {
                        candidate_id: sample.candidate_id().to_string(),
                        unexpected,
                        missing,
                    });
                }
            }
        }
        Self::load(samples, synthesis)
    }

    /// All samples in load order
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Sample that defines the form shape
    #[inline]
    #[must_use]
    pub fn first_sample(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Look up a sample by candidate id
    #[must_use]
    pub fn find_sample(&self, candidate_id: &str) -> Option<&Sample> {
        self.sample_index
            .get(candidate_id)
            .and_then(|&i| self.samples.get(i))
    }

    /// Look up the synthesis fixture for a candidate id
    #[inline]
    #[must_use]
    pub fn find_synthesis(&self, candidate_id: &str) -> Option<&SynthesisRecord> {
        self.synthesis.get(candidate_id)
    }

    /// Number of samples
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples were loaded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of synthesis records
    #[inline]
    #[must_use]
    pub fn synthesis_len(&self) -> usize {
        self.synthesis.len()
    }
}

/// Keys of `other` missing from `reference`, and keys of `reference` missing from `other`
fn key_diff(reference: &Sample, other: &Sample) -> (Vec<String>, Vec<String>) {
    let unexpected = other
        .field_names()
        .filter(|name| !reference.has_field(name.as_str()))
        .map(|name| name.as_str().to_string())
        .collect();
    let missing = reference
        .field_names()
        .filter(|name| !other.has_field(name.as_str()))
        .map(FieldName::to_string)
        .collect();
    (unexpected, missing)
}
