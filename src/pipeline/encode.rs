//! Categorical field encoding
//!
//! Maps training samples to an all-numeric representation for export to
//! downstream consumers. Total: unmapped duration labels take the weekly
//! default rather than failing.

use crate::core::{EncodedTrainingSample, TrainingSample};

/// Encode the duration label as its length in days.
///
/// Unrecognized labels default to a week.
pub fn encode_duration(duration: &str) -> i32 {
    match duration {
        "Day" => 1,
        "Week" => 7,
        "Month" => 30,
        "Year" => 365,
        _ => 7,
    }
}

/// Map a training sample to its numeric representation
pub fn encode(sample: &TrainingSample) -> EncodedTrainingSample {
    EncodedTrainingSample {
        age: sample.age,
        weight: sample.weight,
        height: sample.height,
        fitness_level_encoded: sample.fitness_level.code(),
        duration_encoded: encode_duration(&sample.workout_duration),
        completion_rate: sample.completion_rate,
        difficulty_rating: sample.difficulty_rating,
        effectiveness_rating: sample.effectiveness_rating,
        injury_occurred: i32::from(sample.injury_occurred),
    }
}

/// Encode a batch of samples
pub fn encode_all(samples: &[TrainingSample]) -> Vec<EncodedTrainingSample> {
    samples.iter().map(encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FitnessLevel;

    fn sample(level: FitnessLevel, duration: &str, injury: bool) -> TrainingSample {
        TrainingSample {
            age: 30,
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
    fn test_encode_fitness_levels() {
        assert_eq!(
            encode(&sample(FitnessLevel::Beginner, "Week", false)).fitness_level_encoded,
            1
        );
        assert_eq!(
            encode(&sample(FitnessLevel::Professional, "Week", false)).fitness_level_encoded,
            4
        );
    }

    #[test]
    fn test_encode_durations() {
        assert_eq!(encode_duration("Day"), 1);
        assert_eq!(encode_duration("Week"), 7);
        assert_eq!(encode_duration("Month"), 30);
        assert_eq!(encode_duration("Year"), 365);
    }

    #[test]
    fn test_encode_unknown_duration_defaults_to_week() {
        assert_eq!(encode_duration("Fortnight"), 7);
        assert_eq!(encode_duration(""), 7);
    }

    #[test]
    fn test_encode_injury_flag() {
        assert_eq!(encode(&sample(FitnessLevel::Beginner, "Day", true)).injury_occurred, 1);
        assert_eq!(
            encode(&sample(FitnessLevel::Beginner, "Day", false)).injury_occurred,
            0
        );
    }

    #[test]
    fn test_encode_passes_numeric_fields_through() {
        let encoded = encode(&sample(FitnessLevel::Advanced, "Month", false));
        assert_eq!(encoded.age, 30);
        assert_eq!(encoded.weight, 70.0);
        assert_eq!(encoded.height, 175.0);
        assert_eq!(encoded.completion_rate, 0.8);
        assert_eq!(encoded.difficulty_rating, 3);
        assert_eq!(encoded.effectiveness_rating, 4);
    }

    #[test]
    fn test_encode_all_length() {
        let samples = vec![
            sample(FitnessLevel::Beginner, "Day", false),
            sample(FitnessLevel::Advanced, "Year", true),
        ];
        assert_eq!(encode_all(&samples).len(), 2);
    }
}
