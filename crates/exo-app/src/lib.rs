//! Exo App
//!
//! Event-driven session tying the dataset, form and prediction crates
//! together, plus the ambient pieces a runnable demo needs.
//!
//! # Core Concepts
//!
//! - [`Session`]: explicit state container reacting to load, selection,
//!   edit and predict events
//! - [`DemoConfig`]: TOML configuration with validation
//! - [`init_tracing`]: `tracing` subscriber setup honouring `RUST_LOG`
//!
//! # Example
//!
//! ```rust,ignore
//! use exo_app::{DemoConfig, PredictResponse, Session};
//! use exo_dataset::FileSource;
//!
//! let config = DemoConfig::new().with_seed(7);
//! let mut session = Session::from_config(&config);
//! session.load(&FileSource::default()).await?;
//! session.on_selection_changed(Some("K001"))?;
//! if let PredictResponse::Report(report) = session.on_predict_requested(std::iter::empty())? {
//!     println!("{report}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod logging;
mod session;

// Re-exports
pub use config::{DemoConfig, LogFormat, LoggingConfig};
pub use error::{ConfigError, SessionError};
pub use logging::init_tracing;
pub use session::{
    FormView, LoadFailureView, PredictResponse, Session, SessionStatus, LOAD_FAILURE_MESSAGE,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
