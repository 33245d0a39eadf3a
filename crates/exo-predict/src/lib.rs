//! Exo Predict
//!
//! Turns a form state into a displayed verdict.
//!
//! # Core Concepts
//!
//! - [`PredictionResolver`]: routes a request to a fixture lookup or a
//!   synthesized manual-entry result
//! - [`ManualSynthesizer`]: simulated expert probabilities (not a model)
//! - [`RandomSource`]: seedable draws behind the synthesizer
//! - [`ResultRenderer`]: deterministic report with optional verdict
//!
//! # Example
//!
//! ```rust,ignore
//! use exo_predict::{PredictionResolver, Resolution, ResultRenderer, RngSource};
//!
//! let mut resolver = PredictionResolver::new(RngSource::seeded(42));
//! match resolver.resolve(&form, &registry) {
//!     Resolution::Predicted { outcome, .. } => {
//!         println!("{}", ResultRenderer::new().render(&outcome));
//!     }
//!     Resolution::Rejected(report) => eprintln!("{:?}", report.message()),
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod outcome;
mod random;
mod render;
mod resolver;
mod synthesizer;

// Re-exports
pub use outcome::{GroundTruth, PredictionOutcome, Route, MANUAL_ENTRY_MARKER};
pub use random::{RandomSource, RngSource};
pub use render::{
    expert_display_name, to_fixed, Comparison, ExpertLine, RenderedReport, ResultRenderer,
    Verdict, DEFAULT_THRESHOLD, MANUAL_NOTICE,
};
pub use resolver::{PredictionResolver, Resolution};
pub use synthesizer::{ManualSynthesizer, SynthesisConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
