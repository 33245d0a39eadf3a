//! Manual-entry validation
//!
//! Checks the non-read-only fields of a [`FormState`] for completeness and
//! numeric well-formedness. Validation never changes field values.

use crate::state::FormState;
use exo_dataset::fields::NUMERIC_EXEMPT_FIELDS;
use exo_dataset::FieldName;
use indexmap::IndexSet;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Message shown when manual entry is rejected
pub const VALIDATION_MESSAGE: &str =
    "Please fill all fields correctly. Non-numeric values are not allowed in number fields.";

/// Per-field outcome of validating manual entry
///
/// Serializes as `{"invalid": [...], "message": ...}`; `message` is null
/// when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    invalid: IndexSet<FieldName>,
}

impl ValidationReport {
    /// Whether every checked field passed
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Fields to highlight, in form order
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldName> {
        self.invalid.iter()
    }

    /// Whether `name` failed validation
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.invalid.contains(name)
    }

    /// Number of invalid fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.invalid.len()
    }

    /// Whether no field failed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invalid.is_empty()
    }

    /// User-facing message, present only on failure
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        (!self.is_valid()).then_some(VALIDATION_MESSAGE)
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("invalid", &self.invalid)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Validator for manually entered feature values
#[derive(Debug, Clone)]
pub struct InputValidator {
    numeric_exempt: Vec<String>,
}

impl InputValidator {
    /// Validator with the default text-field set (`dataset`, `disposition`, `tess_disp`)
    #[must_use]
    pub fn new() -> Self {
        Self::with_numeric_exempt(NUMERIC_EXEMPT_FIELDS)
    }

    /// Validator with a custom set of fields that may hold text
    #[must_use]
    pub fn with_numeric_exempt<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            numeric_exempt: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` may hold non-numeric text
    #[inline]
    #[must_use]
    pub fn is_numeric_exempt(&self, name: &str) -> bool {
        self.numeric_exempt.iter().any(|f| f == name)
    }

    /// Check every non-read-only field
    ///
    /// A field is invalid if its trimmed text is empty, or if it is not
    /// numeric-exempt and does not parse as a number.
    #[must_use]
    pub fn validate(&self, form: &FormState) -> ValidationReport {
        let invalid: IndexSet<FieldName> = form
            .iter()
            .filter(|(name, _)| !name.is_read_only())
            .filter(|(name, value)| {
                value.trim().is_empty()
                    || (!self.is_numeric_exempt(name.as_str()) && parse_number(value).is_none())
            })
            .map(|(name, _)| name.clone())
            .collect();

        if !invalid.is_empty() {
            tracing::debug!(invalid = invalid.len(), "manual entry rejected");
        }

        ValidationReport { invalid }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse text the way a browser's `Number(text)` does
///
/// Accepts, after trimming: decimal literals with optional sign, fraction
/// and exponent; `Infinity` with optional sign; unsigned `0x`, `0o` and `0b`
/// integer literals. Blank text is zero. Everything else is `None`.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some((radix, digits)) = radix_literal(s) {
        return parse_radix(digits, radix);
    }

    // f64::from_str also knows "inf" and "NaN"; Number() does not
    let decimal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars {
        return None;
    }
    s.parse::<f64>().ok()
}

fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
