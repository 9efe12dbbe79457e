//! Core types and traits for the feedback pipeline

pub mod error;
pub mod traits;
pub mod types;

pub use error::{PipelineError, Result};
pub use traits::*;
pub use types::*;
