//! Workout-feedback dataset pipeline and classifier evaluation
//!
//! Turns raw user-submitted workout feedback into a cleaned, balanced,
//! statistically characterized dataset and scores binary success
//! predictions against it.

pub mod api;
pub mod core;
pub mod data;
pub mod eval;
pub mod pipeline;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use crate::api::{Pipeline, PreparedDataset};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{PipelineError, Result};
pub use crate::data::FeedbackDataset;
pub use crate::eval::{evaluate, ModelEvaluation};
pub use crate::report::PipelineReport;
pub use crate::stats::{profile, summarize, DatasetStatistics, Statistics};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
