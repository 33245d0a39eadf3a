//! Form state
//!
//! [`FormState`] is the explicit container for what the form currently
//! shows: a fixed [`FormSchema`] and one text value per field. Handlers take
//! it in and hand it back; the UI shell only paints it.

use crate::error::FormError;
use crate::schema::FormSchema;
use exo_dataset::{FieldName, CANDIDATE_ID, DISPOSITION};
use serde::Serialize;

/// One rendered form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldSpec {
    /// Input name (and label)
    pub name: FieldName,
    /// True for `candidate_id` and `disposition`
    pub read_only: bool,
    /// Current text
    pub value: String,
}

/// How a prediction request will be routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// `candidate_id` is filled in: look the candidate up
    Lookup,
    /// `candidate_id` is empty: free-form entry
    Manual,
}

/// Current values of every form field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    schema: FormSchema,
    values: Vec<String>,
}

impl FormState {
    /// Empty form with the given shape
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        let values = vec![String::new(); schema.len()];
        Self { schema, values }
    }

    /// Shape of the form
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current text of a field
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.schema
            .position(name)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// `(name, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.schema
            .fields()
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Snapshot of every input for rendering
    #[must_use]
    pub fn fields(&self) -> Vec<FormFieldSpec> {
        self.iter()
            .map(|(name, value)| FormFieldSpec {
                name: name.clone(),
                read_only: name.is_read_only(),
                value: value.to_string(),
            })
            .collect()
    }

    /// Current `candidate_id` text, empty if absent
    #[inline]
    #[must_use]
    pub fn candidate_id(&self) -> &str {
        self.value(CANDIDATE_ID).unwrap_or_default()
    }

    /// Current `disposition` text, empty if absent
    #[inline]
    #[must_use]
    pub fn disposition(&self) -> &str {
        self.value(DISPOSITION).unwrap_or_default()
    }

    /// Routing mode implied by the `candidate_id` field
    #[inline]
    #[must_use]
    pub fn mode(&self) -> FormMode {
        if self.candidate_id().is_empty() {
            FormMode::Manual
        } else {
            FormMode::Lookup
        }
    }

    /// Manual edit of a single non-read-only field
    ///
    /// # Errors
    /// - [`FormError::UnknownField`] if the form has no such field
    /// - [`FormError::ReadOnlyField`] for `candidate_id` and `disposition`
    pub fn edit(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let i = self
            .schema
            .position(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if self.schema.fields()[i].is_read_only() {
            return Err(FormError::ReadOnlyField(name.to_string()));
        }
        self.values[i] = value.into();
        Ok(())
    }

    /// Adopt the values the shell currently displays
    ///
    /// Read-only fields may be set here: the shell reports exactly what is
    /// on screen. Fields not mentioned keep their value. Nothing is applied
    /// if any name is unknown.
    ///
    /// # Errors
    /// [`FormError::UnknownField`] for the first name outside the schema.
    pub fn sync<'a, I>(&mut self, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut updates = Vec::new();
        for (name, value) in values {
            let i = self
                .schema
                .position(name)
                .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
            updates.push((i, value));
        }
        for (i, value) in updates {
            self.values[i] = value.to_string();
        }
        Ok(())
    }

    /// Clear every field, read-only ones included
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    pub(crate) fn set_at(&mut self, index: usize, value: String) {
        self.values[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> FormState {
        FormState::new(FormSchema::new(
            ["candidate_id", "disposition", "feat_a", "dataset"].map(FieldName::from),
        ))
    }

    #[test]
    fn new_form_is_empty() {
        let form = form();
        assert!(form.iter().all(|(_, v)| v.is_empty()));
        assert_eq!(form.mode(), FormMode::Manual);
    }

    #[test]
    fn fields_mark_read_only() {
        let read_only: Vec<bool> = form().fields().iter().map(|f| f.read_only).collect();
        assert_eq!(read_only, vec![true, true, false, false]);
    }

    #[test]
    fn edit_sets_single_field() {
        let mut form = form();
        form.edit("feat_a", "3.5").unwrap();
        assert_eq!(form.value("feat_a"), Some("3.5"));
        assert_eq!(form.value("dataset"), Some(""));
    }

    #[test]
    fn edit_rejects_read_only() {
        let mut form = form();
        assert_eq!(
            form.edit("candidate_id", "K001"),
            Err(FormError::ReadOnlyField("candidate_id".to_string()))
        );
        assert_eq!(form.mode(), FormMode::Manual);
    }

    #[test]
    fn edit_rejects_unknown() {
        let mut form = form();
        assert_eq!(
            form.edit("feat_q", "1"),
            Err(FormError::UnknownField("feat_q".to_string()))
        );
    }

    #[test]
    fn sync_sets_read_only_fields() {
        let mut form = form();
        form.sync([("candidate_id", "UNKNOWN99"), ("feat_a", "1")]).unwrap();
        assert_eq!(form.candidate_id(), "UNKNOWN99");
        assert_eq!(form.mode(), FormMode::Lookup);
    }

    #[test]
    fn sync_is_all_or_nothing() {
        let mut form = form();
        let err = form.sync([("feat_a", "1"), ("nope", "2")]).unwrap_err();
        assert_eq!(err, FormError::UnknownField("nope".to_string()));
        assert_eq!(form.value("feat_a"), Some(""));
    }

    #[test]
    fn clear_empties_everything() {
        let mut form = form();
        form.sync([("candidate_id", "K001"), ("disposition", "PLANET"), ("feat_a", "1")])
            .unwrap();
        form.clear();
        assert!(form.iter().all(|(_, v)| v.is_empty()));
    }
}
