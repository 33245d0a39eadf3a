//! Field names and the scalar-to-form-text conversion
//!
//! Provides [`FieldName`], the well-known field constants, and
//! [`form_text`] which turns a sample's JSON scalar into the text a form
//! input would display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier field of every sample and synthesis record
pub const CANDIDATE_ID: &str = "candidate_id";

/// Ground-truth label field of every sample
pub const DISPOSITION: &str = "disposition";

/// Fields that are displayed but never typed into
pub const READ_ONLY_FIELDS: [&str; 2] = [CANDIDATE_ID, DISPOSITION];

/// Fields that carry text rather than numbers
pub const NUMERIC_EXEMPT_FIELDS: [&str; 3] = ["dataset", DISPOSITION, "tess_disp"];

/// Name of a sample field (and therefore of a form input)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Create field name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `candidate_id` and `disposition` are filled by selection only
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        READ_ONLY_FIELDS.contains(&self.0.as_str())
    }

    /// Whether this is the `candidate_id` field
    #[inline]
    #[must_use]
    pub fn is_candidate_id(&self) -> bool {
        self.0 == CANDIDATE_ID
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Text a form input shows for a scalar sample value
///
/// Strings are shown verbatim, numbers as [`number_text`], booleans and
/// null by their keyword. Arrays and objects never reach a form (samples
/// are flat) and yield `None`.
#[must_use]
pub fn form_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.as_f64().map_or_else(|| n.to_string(), number_text)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text of a number as a browser input shows it
///
/// Shortest round-trip digits; plain decimal for magnitudes in
/// `[1e-6, 1e21)`, exponent form (`1e+21`, `1.5e-7`) outside it. Integers
/// beyond 2^53 show their nearest `f64`.
#[must_use]
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        // also -0
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn read_only_fields() {
        assert!(FieldName::from(CANDIDATE_ID).is_read_only());
        assert!(FieldName::from(DISPOSITION).is_read_only());
        assert!(!FieldName::from("koi_period").is_read_only());
    }

    #[test]
    fn form_text_scalars() {
        assert_eq!(form_text(&json!("K001")).as_deref(), Some("K001"));
        assert_eq!(form_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(form_text(&json!(1.0)).as_deref(), Some("1"));
        assert_eq!(form_text(&json!(3.14)).as_deref(), Some("3.14"));
        assert_eq!(form_text(&json!(-0.5)).as_deref(), Some("-0.5"));
        assert_eq!(form_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(form_text(&json!(null)).as_deref(), Some("null"));
    }

    #[test]
    fn number_text_switches_to_exponent_form() {
        assert_eq!(number_text(1e21), "1e+21");
        assert_eq!(number_text(1.5e22), "1.5e+22");
        assert_eq!(number_text(1e20), "100000000000000000000");
        assert_eq!(number_text(1e-6), "0.000001");
        assert_eq!(number_text(1e-7), "1e-7");
        assert_eq!(number_text(-2.5e-8), "-2.5e-8");
        assert_eq!(number_text(-0.0), "0");
    }

    #[test]
    fn form_text_large_and_small_numbers() {
        let parsed: Value = serde_json::from_str("[1e21, 1e-7, 12345678901234567890]").unwrap();
        let texts: Vec<String> = parsed
            .as_array()
            .unwrap()
            .iter()
            .filter_map(form_text)
            .collect();
        assert_eq!(texts, vec!["1e+21", "1e-7", "12345678901234567000"]);
    }

    #[test]
    fn form_text_rejects_nested() {
        assert!(form_text(&json!([1, 2])).is_none());
        assert!(form_text(&json!({"a": 1})).is_none());
    }
}
