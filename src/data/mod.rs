//! Feedback ingestion and tabular export
//!
//! File formats live here, at the boundary: lenient CSV/JSON decoding of
//! raw feedback records, CSV export of prepared samples, and loading of
//! outcome pairs for evaluation.

pub mod csv;

pub use csv::FeedbackDataset;
