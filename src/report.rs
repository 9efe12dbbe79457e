//! Report serialization and persistence
//!
//! A pipeline run can be snapshotted to JSON: dataset profile, per-stage
//! sample counts, and (when a model was scored) the evaluation metrics.

use crate::core::{PipelineError, Result};
use crate::eval::ModelEvaluation;
use crate::stats::DatasetStatistics;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Sample counts observed at each preparation stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    /// Raw records received
    pub raw: usize,
    /// Records surviving validation
    pub validated: usize,
    /// Samples surviving outlier filtering
    pub filtered: usize,
    /// Samples after class balancing
    pub balanced: usize,
    /// Training subset size
    pub train: usize,
    /// Test subset size
    pub test: usize,
}

/// Serializable snapshot of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Profile of the prepared dataset
    pub dataset: DatasetStatistics,
    /// Evaluation metrics, present when a model was scored
    pub evaluation: Option<ModelEvaluation>,
    /// Sample counts per stage
    pub stage_counts: StageCounts,
    /// Metadata for tracking
    pub metadata: ReportMetadata,
}

/// Report metadata for tracking and validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Library version used to produce the report
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
}

impl PipelineReport {
    pub fn new(
        dataset: DatasetStatistics,
        evaluation: Option<ModelEvaluation>,
        stage_counts: StageCounts,
    ) -> Self {
        Self {
            dataset,
            evaluation,
            stage_counts,
            metadata: ReportMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save the report as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(PipelineError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a report from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(PipelineError::IoError)?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader)?;
        Ok(report)
    }

    /// Print a short summary to stdout
    pub fn print_summary(&self) {
        println!("Pipeline Report (v{})", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
        println!(
            "Stages: raw {} -> validated {} -> filtered {} -> balanced {} -> train {} / test {}",
            self.stage_counts.raw,
            self.stage_counts.validated,
            self.stage_counts.filtered,
            self.stage_counts.balanced,
            self.stage_counts.train,
            self.stage_counts.test
        );
        println!("{}", self.dataset.summary());

        if let Some(eval) = &self.evaluation {
            println!("Accuracy:  {:.4}", eval.accuracy);
            println!("Precision: {:.4}", eval.precision);
            println!("Recall:    {:.4}", eval.recall);
            println!("F1 Score:  {:.4}", eval.f1_score);
        }
    }
}
