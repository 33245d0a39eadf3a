//! Exo Form
//!
//! The dynamic candidate form behind the vetting demo.
//!
//! # Core Concepts
//!
//! - [`FormSchema`]: field set captured once from the first sample
//! - [`FormState`]: current value of every field; the explicit state
//!   container handlers pass around
//! - [`Selection`]: sample picker changes mirrored into the form
//! - [`InputValidator`]: completeness and numeric checks for manual entry
//! - [`selector_options`]: the picker's option list
//!
//! # Example
//!
//! ```rust,ignore
//! use exo_form::{FormSchema, FormState, InputValidator, Selection};
//!
//! let schema = FormSchema::from_sample(registry.first_sample().unwrap());
//! let mut form = FormState::new(schema);
//!
//! form.apply_selection(&Selection::Candidate("K001".into()), &registry);
//! let report = InputValidator::new().validate(&form);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod schema;
mod selection;
mod selector;
mod state;
mod validator;

// Re-exports
pub use error::FormError;
pub use schema::{FormSchema, SchemaDiff};
pub use selection::{Selection, SelectionOutcome};
pub use selector::{selector_options, SelectorOption, PLACEHOLDER_LABEL};
pub use state::{FormFieldSpec, FormMode, FormState};
pub use validator::{parse_number, InputValidator, ValidationReport, VALIDATION_MESSAGE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
