//! Core type definitions for the feedback pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw feedback record as submitted through the app.
///
/// No invariants are enforced on construction; validity is established by
/// the validator stage. Deserialization is lenient: missing or malformed
/// fields fall back to the defaults the ingestion boundary has always used,
/// so one sloppy record never aborts a whole import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeedback {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub workout_plan_id: String,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default = "default_rating")]
    pub difficulty_rating: i32,
    #[serde(default = "default_rating")]
    pub effectiveness_rating: i32,
    #[serde(default)]
    pub injury_occurred: bool,
    #[serde(default)]
    pub days_completed: i32,
    #[serde(default)]
    pub feedback_text: String,
    #[serde(default = "default_age")]
    pub user_age: i32,
    #[serde(default = "default_weight")]
    pub user_weight: f64,
    #[serde(default = "default_height")]
    pub user_height: f64,
    #[serde(default = "default_fitness_level")]
    pub fitness_level: String,
    #[serde(default = "default_duration")]
    pub workout_duration: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

pub(crate) fn default_rating() -> i32 {
    3
}
pub(crate) fn default_age() -> i32 {
    25
}
pub(crate) fn default_weight() -> f64 {
    70.0
}
pub(crate) fn default_height() -> f64 {
    170.0
}
pub(crate) fn default_fitness_level() -> String {
    "Intermediate".to_string()
}
pub(crate) fn default_duration() -> String {
    "Week".to_string()
}

/// Canonical fitness level vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl FitnessLevel {
    /// Map a free-text label to a canonical level.
    ///
    /// Lower-cases and trims the input, then matches known synonyms.
    /// Anything unrecognized falls back to `Intermediate`; callers needing
    /// strictness should check membership before calling.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().trim() {
            "beginner" | "novice" => Self::Beginner,
            "intermediate" | "medium" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "professional" | "expert" => Self::Professional,
            _ => Self::Intermediate,
        }
    }

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Professional => "Professional",
        }
    }

    /// Fixed integer code used for numeric export
    pub fn code(&self) -> i32 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Professional => 4,
        }
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated, normalized training sample.
///
/// Produced only by the validator from a `RawFeedback` that passed
/// validation. Weight is clamped to [30, 200], height to [120, 230].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub fitness_level: FitnessLevel,
    pub workout_duration: String,
    pub completion_rate: f64,
    pub difficulty_rating: i32,
    pub effectiveness_rating: i32,
    pub injury_occurred: bool,
}

/// A training sample with categorical fields replaced by integer codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedTrainingSample {
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub fitness_level_encoded: i32,
    pub duration_encoded: i32,
    pub completion_rate: f64,
    pub difficulty_rating: i32,
    pub effectiveness_rating: i32,
    pub injury_occurred: i32,
}

/// One (actual, predicted) outcome pair for evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledOutcome {
    pub actual: bool,
    pub predicted: bool,
}

impl LabeledOutcome {
    pub fn new(actual: bool, predicted: bool) -> Self {
        Self { actual, predicted }
    }
}
