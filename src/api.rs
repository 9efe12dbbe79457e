//! High-level API for dataset preparation
//!
//! This module provides a builder-style interface over the individual
//! pipeline stages for the common prepare-and-split workflow.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fitpipe::api::Pipeline;
//! use fitpipe::data::FeedbackDataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let feedback = FeedbackDataset::from_file("feedback.csv")?;
//!
//! let prepared = Pipeline::new()
//!     .with_seed(42)
//!     .with_test_ratio(0.2)
//!     .prepare(feedback.records())?;
//!
//! println!("train: {}, test: {}", prepared.train.len(), prepared.test.len());
//! # Ok(())
//! # }
//! ```

use crate::core::{RawFeedback, Result, TrainingSample};
use crate::pipeline::{balance, clean_and_normalize, remove_outliers, split, DEFAULT_TEST_RATIO};
use crate::report::{PipelineReport, StageCounts};
use crate::stats::{self, DatasetStatistics};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configurable preparation pipeline with builder pattern
#[derive(Debug, Clone)]
pub struct Pipeline {
    seed: Option<u64>,
    test_ratio: f64,
    balancing: bool,
    outlier_filtering: bool,
}

impl Pipeline {
    /// Create a pipeline with default settings: entropy-seeded shuffles,
    /// 0.2 test ratio, outlier filtering and balancing enabled.
    pub fn new() -> Self {
        Self {
            seed: None,
            test_ratio: DEFAULT_TEST_RATIO,
            balancing: true,
            outlier_filtering: true,
        }
    }

    /// Fix the RNG seed for reproducible balancing and splitting
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the fraction of samples reserved for the test set
    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    /// Enable or disable class balancing
    pub fn with_balancing(mut self, balancing: bool) -> Self {
        self.balancing = balancing;
        self
    }

    /// Enable or disable outlier filtering
    pub fn with_outlier_filtering(mut self, outlier_filtering: bool) -> Self {
        self.outlier_filtering = outlier_filtering;
        self
    }

    /// Run the full preparation flow over raw feedback records:
    /// validate -> filter outliers -> balance -> split.
    pub fn prepare(&self, feedback: &[RawFeedback]) -> Result<PreparedDataset> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut counts = StageCounts {
            raw: feedback.len(),
            ..StageCounts::default()
        };

        let validated = clean_and_normalize(feedback);
        counts.validated = validated.len();
        debug!("validated {} of {} records", counts.validated, counts.raw);

        let filtered = if self.outlier_filtering {
            remove_outliers(&validated)
        } else {
            validated
        };
        counts.filtered = filtered.len();

        let prepared = if self.balancing {
            balance(&filtered, &mut rng)
        } else {
            filtered
        };
        counts.balanced = prepared.len();

        let (train, test) = split(&prepared, self.test_ratio, &mut rng)?;
        counts.train = train.len();
        counts.test = test.len();
        debug!("split into {} train / {} test", counts.train, counts.test);

        Ok(PreparedDataset {
            train,
            test,
            stage_counts: counts,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a preparation run: disjoint train/test subsets plus the
/// sample counts observed at each stage.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub train: Vec<TrainingSample>,
    pub test: Vec<TrainingSample>,
    pub stage_counts: StageCounts,
}

impl PreparedDataset {
    /// All prepared samples, train then test
    pub fn samples(&self) -> Vec<TrainingSample> {
        self.train.iter().chain(self.test.iter()).cloned().collect()
    }

    /// Profile the prepared dataset
    pub fn profile(&self) -> Result<DatasetStatistics> {
        stats::profile(&self.samples())
    }

    /// Build a report snapshot for this run
    pub fn report(&self) -> Result<PipelineReport> {
        Ok(PipelineReport::new(
            self.profile()?,
            None,
            self.stage_counts.clone(),
        ))
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::data::{csv, FeedbackDataset};
    use crate::eval::{self, ModelEvaluation};
    use std::path::Path;

    /// Load a feedback CSV and run the default pipeline with a fixed seed
    pub fn prepare_csv<P: AsRef<Path>>(path: P, seed: u64) -> Result<PreparedDataset> {
        let dataset = FeedbackDataset::from_file(path)?;
        Pipeline::new().with_seed(seed).prepare(dataset.records())
    }

    /// Load a feedback CSV and profile the validated samples
    pub fn profile_csv<P: AsRef<Path>>(path: P) -> Result<DatasetStatistics> {
        let dataset = FeedbackDataset::from_file(path)?;
        let samples = clean_and_normalize(dataset.records());
        stats::profile(&samples)
    }

    /// Load an outcome-pair CSV and score it
    pub fn evaluate_outcomes_csv<P: AsRef<Path>>(path: P) -> Result<ModelEvaluation> {
        let outcomes = csv::read_outcomes_file(path)?;
        eval::evaluate(&outcomes)
    }
}
