//! Form schema
//!
//! The form's field set is captured once, from the first loaded sample, and
//! never changes afterwards. Only values change.

use exo_dataset::{FieldName, Sample};
use serde::Serialize;

/// Ordered, fixed set of form fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FormSchema {
    fields: Vec<FieldName>,
}

/// Key-set difference between a sample and the schema
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDiff {
    /// Keys of the sample the form has no field for
    pub unexpected: Vec<String>,
    /// Form fields the sample does not define
    pub missing: Vec<String>,
}

impl SchemaDiff {
    /// Whether the sample matches the schema exactly
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unexpected.is_empty() && self.missing.is_empty()
    }
}

impl FormSchema {
    /// Schema from explicit field names, order preserved, duplicates dropped
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = FieldName>) -> Self {
        let mut unique: Vec<FieldName> = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        Self { fields: unique }
    }

    /// Schema shaped like `sample` (its values are not used)
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        Self::new(sample.field_names().cloned())
    }

    /// Field names in form order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Position of a field in the form
    #[inline]
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.as_str() == name)
    }

    /// Whether the form has a field called `name`
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Compare a sample's key set against the schema
    #[must_use]
    pub fn diff(&self, sample: &Sample) -> SchemaDiff {
        SchemaDiff {
            unexpected: sample
                .field_names()
                .filter(|name| !self.contains(name.as_str()))
                .map(ToString::to_string)
                .collect(),
            missing: self
                .fields
                .iter()
                .filter(|name| !sample.has_field(name.as_str()))
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
