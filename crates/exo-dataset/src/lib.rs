//! Exo Dataset
//!
//! Static data behind the candidate vetting demo:
//! - [`Sample`]: one candidate's features and ground-truth label
//! - [`SynthesisRecord`]: precomputed expert probabilities for a candidate
//! - [`PredictionResult`]: expert probabilities plus the aggregate score
//! - [`SampleRegistry`]: immutable lookup of both datasets by candidate id
//! - [`DatasetSource`]: adapters that read and join the two JSON datasets
//!
//! # Example
//!
//! ```rust,ignore
//! use exo_dataset::{load_datasets, FileSource, SampleRegistry};
//!
//! let datasets = load_datasets(&FileSource::default()).await?;
//! let registry = SampleRegistry::load(datasets.samples, datasets.synthesis)?;
//!
//! if let Some(record) = registry.find_synthesis("K001") {
//!     println!("final score {}", record.result.final_score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod disposition;
mod error;
pub mod fields;
mod loader;
mod registry;
mod sample;
mod synthesis;

// Re-exports
pub use disposition::{Disposition, UnknownDisposition};
pub use error::{DatasetKind, LoadError, RecordError};
pub use fields::{form_text, number_text, FieldName, CANDIDATE_ID, DISPOSITION};
pub use loader::{
    load_datasets, parse_samples, parse_synthesis, DatasetSource, Datasets, FileSource,
    StaticSource, DEFAULT_SAMPLES_PATH, DEFAULT_SYNTHESIS_PATH,
};
pub use registry::SampleRegistry;
pub use sample::Sample;
pub use synthesis::{expert_key, is_expert_key, PredictionResult, SynthesisRecord, FINAL_SCORE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
