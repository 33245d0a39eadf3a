//! Candidate samples
//!
//! A [`Sample`] is a flat, ordered mapping from field name to JSON scalar.
//! Every sample carries a `candidate_id` and a `disposition`; every other
//! field is a feature value shown in the form.

use crate::disposition::Disposition;
use crate::error::RecordError;
use crate::fields::{form_text, FieldName, CANDIDATE_ID, DISPOSITION};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate with its features and ground-truth label
///
/// Immutable once loaded. Key order is the order of the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Value>",
    into = "IndexMap<String, Value>"
)]
pub struct Sample {
    candidate_id: String,
    disposition: String,
    fields: IndexMap<FieldName, Value>,
}

impl Sample {
    /// Unique candidate identifier (as form text)
    #[inline]
    #[must_use]
    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    /// Ground-truth label (as form text)
    #[inline]
    #[must_use]
    pub fn disposition(&self) -> &str {
        &self.disposition
    }

    /// Ground-truth label, if it is one of the two known classes
    #[must_use]
    pub fn known_disposition(&self) -> Option<Disposition> {
        self.disposition.parse().ok()
    }

    /// Field names in source order
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    /// Raw value of a field
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the sample defines `name`
    #[inline]
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Value of a field as a form input would show it
    #[must_use]
    pub fn form_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(form_text)
    }

    /// All fields as form text, in source order
    pub fn form_values(&self) -> impl Iterator<Item = (&FieldName, String)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| form_text(value).map(|text| (name, text)))
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the sample has no fields (never true for a loaded sample)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<IndexMap<String, Value>> for Sample {
    type Error = RecordError;

    fn try_from(raw: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        let mut fields = IndexMap::with_capacity(raw.len());
        for (name, value) in raw {
            if value.is_array() || value.is_object() {
                return Err(RecordError::NonScalarField(name));
            }
            fields.insert(FieldName::from(name), value);
        }

        let candidate_id = fields
            .get(CANDIDATE_ID)
            .and_then(form_text)
            .ok_or(RecordError::MissingField(CANDIDATE_ID))?;
        let disposition = fields
            .get(DISPOSITION)
            .and_then(form_text)
            .ok_or(RecordError::MissingField(DISPOSITION))?;

        if disposition.parse::<Disposition>().is_err() {
            tracing::warn!(
                candidate_id = %candidate_id,
                disposition = %disposition,
                "sample has an unrecognised disposition"
            );
        }

        Ok(Self {
            candidate_id,
            disposition,
            fields,
        })
    }
}

impl From<Sample> for IndexMap<String, Value> {
    fn from(sample: Sample) -> Self {
        sample
            .fields
            .into_iter()
            .map(|(name, value)| (name.as_str().to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn sample_preserves_key_order() {
        let sample = parse(json!({
            "candidate_id": "K001",
            "disposition": "PLANET",
            "feat_b": 2.5,
            "feat_a": 1.0
        }))
        .unwrap();

        let names: Vec<&str> = sample.field_names().map(FieldName::as_str).collect();
        assert_eq!(names, vec!["candidate_id", "disposition", "feat_b", "feat_a"]);
        assert_eq!(sample.candidate_id(), "K001");
        assert_eq!(sample.known_disposition(), Some(Disposition::Planet));
    }

    #[test]
    fn sample_numeric_candidate_id() {
        let sample = parse(json!({"candidate_id": 1234, "disposition": "PLANET"})).unwrap();
        assert_eq!(sample.candidate_id(), "1234");
    }

    #[test]
    fn sample_form_values() {
        let sample = parse(json!({
            "candidate_id": "K001",
            "disposition": "FALSE_POSITIVE",
            "feat_a": 1.0,
            "dataset": "kepler"
        }))
        .unwrap();

        assert_eq!(sample.form_value("feat_a").as_deref(), Some("1"));
        assert_eq!(sample.form_value("dataset").as_deref(), Some("kepler"));
        assert_eq!(sample.form_value("missing"), None);
        assert_eq!(sample.form_values().count(), 4);
    }

    #[test]
    fn sample_requires_candidate_id() {
        let err = parse(json!({"disposition": "PLANET"})).unwrap_err();
        assert!(err.to_string().contains("candidate_id"));
    }

    #[test]
    fn sample_requires_disposition() {
        let err = parse(json!({"candidate_id": "K001"})).unwrap_err();
        assert!(err.to_string().contains("disposition"));
    }

    #[test]
    fn sample_rejects_nested_values() {
        let err = parse(json!({
            "candidate_id": "K001",
            "disposition": "PLANET",
            "feat": [1, 2]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("feat"));
    }

    #[test]
    fn sample_accepts_unknown_disposition() {
        let sample = parse(json!({"candidate_id": "K002", "disposition": "CANDIDATE"})).unwrap();
        assert_eq!(sample.disposition(), "CANDIDATE");
        assert_eq!(sample.known_disposition(), None);
    }
}
