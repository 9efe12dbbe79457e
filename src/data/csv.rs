//! CSV and JSON feedback ingestion plus tabular export
//!
//! Feedback CSV files use the app's export column order:
//! `userId,age,weight,height,fitnessLevel,workoutDuration,completionRate,
//! difficultyRating,effectivenessRating,injuryOccurred,daysCompleted`.
//! A header row is detected automatically; blank lines and `#` comments
//! are skipped. Malformed field values take the same lenient defaults as
//! JSON decoding - substituting bad values is an ingestion policy, and the
//! validator stage decides afterwards what is actually usable.

use crate::core::types::{
    default_age, default_duration, default_fitness_level, default_height, default_rating,
    default_weight,
};
use crate::core::{
    EncodedTrainingSample, LabeledOutcome, PipelineError, RawFeedback, Result, TrainingSample,
};
use chrono::Utc;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const FEEDBACK_COLUMNS: usize = 11;

/// A collection of raw feedback records loaded from disk
#[derive(Debug, Clone)]
pub struct FeedbackDataset {
    records: Vec<RawFeedback>,
}

impl FeedbackDataset {
    /// Load feedback records from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(PipelineError::IoError)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load feedback records from a CSV reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        let mut first_data_line = true;

        for line in reader.lines() {
            let line = line.map_err(PipelineError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if first_data_line {
                first_data_line = false;
                if Self::is_header_line(line) {
                    continue;
                }
            }

            records.push(Self::parse_data_line(line)?);
        }

        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        Ok(Self { records })
    }

    /// Load feedback records from a JSON file holding an array of records
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(PipelineError::IoError)?;
        let records: Vec<RawFeedback> = serde_json::from_reader(BufReader::new(file))?;

        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        Ok(Self { records })
    }

    /// Number of records loaded
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the loaded records
    pub fn records(&self) -> &[RawFeedback] {
        &self.records
    }

    /// Consume the dataset, yielding the records
    pub fn into_records(self) -> Vec<RawFeedback> {
        self.records
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return false;
        }

        // Age is the second column; a header has a label there instead
        fields[1].trim().parse::<f64>().is_err()
    }

    /// Parse one CSV data line into a raw record.
    ///
    /// The column count must match; individual field values that fail to
    /// parse fall back to the ingestion defaults rather than erroring.
    fn parse_data_line(line: &str) -> Result<RawFeedback> {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

        if fields.len() != FEEDBACK_COLUMNS {
            return Err(PipelineError::ParseError(format!(
                "Expected {FEEDBACK_COLUMNS} fields, got {}: {line}",
                fields.len()
            )));
        }

        let fitness_level = if fields[4].is_empty() {
            default_fitness_level()
        } else {
            fields[4].to_string()
        };
        let workout_duration = if fields[5].is_empty() {
            default_duration()
        } else {
            fields[5].to_string()
        };

        Ok(RawFeedback {
            user_id: fields[0].to_string(),
            workout_plan_id: String::new(),
            user_age: fields[1].parse().unwrap_or_else(|_| default_age()),
            user_weight: fields[2].parse().unwrap_or_else(|_| default_weight()),
            user_height: fields[3].parse().unwrap_or_else(|_| default_height()),
            fitness_level,
            workout_duration,
            completion_rate: fields[6].parse().unwrap_or(0.0),
            difficulty_rating: fields[7].parse().unwrap_or_else(|_| default_rating()),
            effectiveness_rating: fields[8].parse().unwrap_or_else(|_| default_rating()),
            injury_occurred: parse_flag(fields[9]),
            days_completed: fields[10].parse().unwrap_or(0),
            feedback_text: String::new(),
            created_at: Utc::now(),
        })
    }
}

fn parse_flag(field: &str) -> bool {
    matches!(field.to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Write training samples as CSV: header row plus one row per sample,
/// booleans rendered as 0/1.
pub fn write_samples<W: Write>(writer: W, samples: &[TrainingSample]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(
        writer,
        "age,weight,height,fitnessLevel,workoutDuration,completionRate,difficultyRating,effectivenessRating,injuryOccurred"
    )?;

    for s in samples {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            s.age,
            s.weight,
            s.height,
            s.fitness_level.label(),
            s.workout_duration,
            s.completion_rate,
            s.difficulty_rating,
            s.effectiveness_rating,
            i32::from(s.injury_occurred)
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write training samples to a CSV file
pub fn write_samples_file<P: AsRef<Path>>(path: P, samples: &[TrainingSample]) -> Result<()> {
    let file = File::create(path).map_err(PipelineError::IoError)?;
    write_samples(file, samples)
}

/// Write encoded samples as an all-numeric CSV
pub fn write_encoded<W: Write>(writer: W, samples: &[EncodedTrainingSample]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(
        writer,
        "age,weight,height,fitnessLevelEncoded,durationEncoded,completionRate,difficultyRating,effectivenessRating,injuryOccurred"
    )?;

    for s in samples {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            s.age,
            s.weight,
            s.height,
            s.fitness_level_encoded,
            s.duration_encoded,
            s.completion_rate,
            s.difficulty_rating,
            s.effectiveness_rating,
            s.injury_occurred
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write encoded samples to a CSV file
pub fn write_encoded_file<P: AsRef<Path>>(
    path: P,
    samples: &[EncodedTrainingSample],
) -> Result<()> {
    let file = File::create(path).map_err(PipelineError::IoError)?;
    write_encoded(file, samples)
}

/// Read (actual, predicted) outcome pairs from a two-column CSV of 0/1 or
/// true/false flags. A header row is detected and skipped.
pub fn read_outcomes<R: BufRead>(reader: R) -> Result<Vec<LabeledOutcome>> {
    let mut outcomes = Vec::new();
    let mut first_data_line = true;

    for line in reader.lines() {
        let line = line.map_err(PipelineError::IoError)?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() != 2 {
            return Err(PipelineError::ParseError(format!(
                "Expected 2 fields, got {}: {line}",
                fields.len()
            )));
        }

        if first_data_line {
            first_data_line = false;
            if parse_outcome_flag(fields[0]).is_none() {
                continue; // header
            }
        }

        match (parse_outcome_flag(fields[0]), parse_outcome_flag(fields[1])) {
            (Some(actual), Some(predicted)) => {
                outcomes.push(LabeledOutcome::new(actual, predicted));
            }
            _ => {
                return Err(PipelineError::ParseError(format!(
                    "Invalid outcome flags: {line}"
                )));
            }
        }
    }

    if outcomes.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    Ok(outcomes)
}

/// Read outcome pairs from a CSV file
pub fn read_outcomes_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledOutcome>> {
    let file = File::open(path).map_err(PipelineError::IoError)?;
    read_outcomes(BufReader::new(file))
}

fn parse_outcome_flag(field: &str) -> Option<bool> {
    match field.to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
