//! Selection sync
//!
//! Mirrors the sample picker into the form. Choosing the placeholder clears
//! every field; choosing a known candidate overwrites every field the form
//! and the sample have in common, read-only ones included.

use crate::state::FormState;
use exo_dataset::{Sample, SampleRegistry};

/// What the user picked in the sample selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The placeholder option
    None,
    /// A candidate id
    Candidate(String),
}

impl Selection {
    /// Map a selector value; the placeholder's value is empty
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Self::None,
            Some(id) => Self::Candidate(id.to_string()),
        }
    }
}

/// Effect a selection had on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Every field was cleared
    Cleared,
    /// Fields were copied from the sample
    Populated {
        /// Number of form fields overwritten
        updated: usize,
        /// Sample keys the form has no field for
        skipped: Vec<String>,
    },
    /// No sample has this id; the form is unchanged
    Unknown(String),
}

impl FormState {
    /// Apply a selector change
    pub fn apply_selection(
        &mut self,
        selection: &Selection,
        registry: &SampleRegistry,
    ) -> SelectionOutcome {
        match selection {
            Selection::None => {
                self.clear();
                tracing::debug!("selection cleared");
                SelectionOutcome::Cleared
            }
            Selection::Candidate(id) => match registry.find_sample(id) {
                Some(sample) => self.populate(sample),
                None => {
                    tracing::warn!(candidate_id = %id, "selected candidate not in registry");
                    SelectionOutcome::Unknown(id.clone())
                }
            },
        }
    }

    /// Copy every field `sample` shares with the form
    pub fn populate(&mut self, sample: &Sample) -> SelectionOutcome {
        let mut updated = 0;
        let mut skipped = Vec::new();
        for (name, text) in sample.form_values() {
            match self.schema().position(name.as_str()) {
                Some(i) => {
                    self.set_at(i, text);
                    updated += 1;
                }
                None => skipped.push(name.to_string()),
            }
        }

        if !skipped.is_empty() {
            tracing::warn!(
                candidate_id = sample.candidate_id(),
                ?skipped,
                "sample fields outside the form schema were not shown"
            );
        }
        tracing::debug!(candidate_id = sample.candidate_id(), updated, "form populated");

        SelectionOutcome::Populated { updated, skipped }
    }
}
