//! Descriptive statistics and dataset profiling

use crate::core::{PipelineError, Result, TrainingSample};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive statistics over one numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    /// Element at index floor(n/2) of the sorted values (upper median for
    /// even-length input, not the average of the two middle elements)
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divide by n, not n - 1)
    pub std_dev: f64,
}

/// Dataset-wide profile: per-field statistics plus categorical counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub total_samples: usize,
    pub age_stats: Statistics,
    pub weight_stats: Statistics,
    pub height_stats: Statistics,
    pub completion_rate_stats: Statistics,
    pub injury_count: usize,
    pub fitness_level_distribution: HashMap<String, usize>,
    pub duration_distribution: HashMap<String, usize>,
}

impl DatasetStatistics {
    /// Short human-readable digest of the dataset
    pub fn summary(&self) -> String {
        let injury_rate = self.injury_count as f64 / self.total_samples as f64;
        let mut levels: Vec<_> = self.fitness_level_distribution.iter().collect();
        levels.sort_by_key(|(label, _)| label.as_str());
        let levels = levels
            .iter()
            .map(|(label, count)| format!("{label}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Total Samples: {}\nAverage Completion Rate: {:.2}\nInjury Rate: {:.2}%\nFitness Level Distribution: {{{levels}}}",
            self.total_samples,
            self.completion_rate_stats.mean,
            injury_rate * 100.0,
        )
    }
}

/// Compute descriptive statistics over a sequence of values.
///
/// The input must be non-empty; an empty sequence is a precondition
/// violation, not a zero-filled result.
pub fn summarize(values: &[f64]) -> Result<Statistics> {
    if values.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(Statistics {
        mean,
        median: sorted[sorted.len() / 2],
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: variance.sqrt(),
    })
}

/// Profile a sample collection: statistics for every numeric field plus
/// injury and categorical counts. Fails on empty input.
pub fn profile(samples: &[TrainingSample]) -> Result<DatasetStatistics> {
    let ages: Vec<f64> = samples.iter().map(|s| f64::from(s.age)).collect();
    let weights: Vec<f64> = samples.iter().map(|s| s.weight).collect();
    let heights: Vec<f64> = samples.iter().map(|s| s.height).collect();
    let completion_rates: Vec<f64> = samples.iter().map(|s| s.completion_rate).collect();

    let mut fitness_level_distribution = HashMap::new();
    let mut duration_distribution = HashMap::new();
    for sample in samples {
        *fitness_level_distribution
            .entry(sample.fitness_level.label().to_string())
            .or_insert(0) += 1;
        *duration_distribution
            .entry(sample.workout_duration.clone())
            .or_insert(0) += 1;
    }

    Ok(DatasetStatistics {
        total_samples: samples.len(),
        age_stats: summarize(&ages)?,
        weight_stats: summarize(&weights)?,
        height_stats: summarize(&heights)?,
        completion_rate_stats: summarize(&completion_rates)?,
        injury_count: samples.iter().filter(|s| s.injury_occurred).count(),
        fitness_level_distribution,
        duration_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FitnessLevel;
    use approx::assert_relative_eq;

    #[test]
    fn test_summarize_basic() {
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 3.0); // upper median, index 2 of sorted
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_relative_eq!(stats.std_dev, 1.25_f64.sqrt());
    }

    #[test]
    fn test_summarize_unsorted_input() {
        let stats = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_summarize_odd_length_median() {
        let stats = summarize(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_summarize_single_value() {
        let stats = summarize(&[7.0]).unwrap();
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_summarize_empty_is_error() {
        assert!(matches!(
            summarize(&[]),
            Err(PipelineError::EmptyDataset)
        ));
    }

    fn sample(age: i32, level: FitnessLevel, duration: &str, injury: bool) -> TrainingSample {
        TrainingSample {
            age,
            weight: 70.0,
            height: 175.0,
            fitness_level: level,
            workout_duration: duration.to_string(),
            completion_rate: 0.8,
            difficulty_rating: 3,
            effectiveness_rating: 4,
            injury_occurred: injury,
        }
    }

    #[test]
    fn test_profile_counts() {
        let samples = vec![
            sample(20, FitnessLevel::Beginner, "Week", false),
            sample(30, FitnessLevel::Beginner, "Month", true),
            sample(40, FitnessLevel::Advanced, "Week", false),
        ];

        let profile = profile(&samples).unwrap();
        assert_eq!(profile.total_samples, 3);
        assert_eq!(profile.injury_count, 1);
        assert_eq!(profile.fitness_level_distribution["Beginner"], 2);
        assert_eq!(profile.fitness_level_distribution["Advanced"], 1);
        assert_eq!(profile.duration_distribution["Week"], 2);
        assert_eq!(profile.duration_distribution["Month"], 1);
        assert_relative_eq!(profile.age_stats.mean, 30.0);
    }

    #[test]
    fn test_profile_empty_is_error() {
        assert!(matches!(profile(&[]), Err(PipelineError::EmptyDataset)));
    }

    #[test]
    fn test_summary_text() {
        let samples = vec![
            sample(20, FitnessLevel::Beginner, "Week", false),
            sample(30, FitnessLevel::Advanced, "Week", true),
        ];
        let text = profile(&samples).unwrap().summary();
        assert!(text.contains("Total Samples: 2"));
        assert!(text.contains("Injury Rate: 50.00%"));
        assert!(text.contains("Beginner: 1"));
    }
}
