//! Error types for form editing

/// A form edit could not be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Field is not part of the form schema
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    /// Field is filled by sample selection only
    #[error("form field '{0}' is read-only")]
    ReadOnlyField(String),
}
