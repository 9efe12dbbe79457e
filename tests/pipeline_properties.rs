//! Behavioral properties of the pipeline stages
//!
//! Cross-stage guarantees that must hold for any seed: partition
//! disjointness, class balance, multiset-subset balancing, and the exact
//! metric conventions of the evaluation engine.

use approx::assert_relative_eq;
use fitpipe::core::{actual_success, FitnessLevel, LabeledOutcome, TrainingSample};
use fitpipe::pipeline::{balance, encode, remove_outliers, split};
use fitpipe::{evaluate, summarize};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample(age: i32, completion_rate: f64, injury: bool) -> TrainingSample {
    TrainingSample {
        age,
        weight: 70.0,
        height: 175.0,
        fitness_level: FitnessLevel::Intermediate,
        workout_duration: "Week".to_string(),
        completion_rate,
        difficulty_rating: 3,
        effectiveness_rating: 4,
        injury_occurred: injury,
    }
}

#[test]
fn balance_is_exact_and_subset_for_any_seed() {
    let mut samples: Vec<_> = (0..7).map(|i| sample(20 + i, 0.9, false)).collect();
    samples.extend((0..3).map(|i| sample(50 + i, 0.2, false)));

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let balanced = balance(&samples, &mut rng);

        assert_eq!(balanced.len(), 6, "seed {seed}");
        assert_eq!(
            balanced.iter().filter(|s| actual_success(s)).count(),
            3,
            "seed {seed}"
        );
        for s in &balanced {
            assert!(samples.contains(s), "seed {seed}: sample not from input");
        }
    }
}

#[test]
fn split_partitions_exactly_for_any_seed() {
    let samples: Vec<_> = (0..100)
        .map(|i| sample(13 + (i % 60), 0.01 * f64::from(i), false))
        .collect();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (train, test) = split(&samples, 0.2, &mut rng).unwrap();

        assert_eq!(test.len(), 20, "seed {seed}");
        assert_eq!(train.len(), 80, "seed {seed}");

        // Completion rates are unique, so they identify samples
        for t in &test {
            assert!(
                !train
                    .iter()
                    .any(|s| s.completion_rate == t.completion_rate),
                "seed {seed}: train and test overlap"
            );
        }
    }
}

#[test]
fn outlier_filter_tightens_validation_bounds() {
    // Both pass first-stage validation (age > 0), only one survives the
    // outlier filter's [13, 80] age bound.
    let samples = vec![sample(10, 0.8, false), sample(25, 0.8, false)];
    let kept = remove_outliers(&samples);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].age, 25);
}

#[test]
fn encode_is_total_over_arbitrary_duration_labels() {
    for duration in ["Day", "Week", "Month", "Year", "Decade", "", "  "] {
        let mut s = sample(30, 0.8, false);
        s.workout_duration = duration.to_string();
        let encoded = encode(&s);
        assert!(encoded.duration_encoded > 0);
        assert!((1..=4).contains(&encoded.fitness_level_encoded));
    }
}

#[test]
fn statistics_match_reference_values() {
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_relative_eq!(stats.mean, 2.5);
    assert_relative_eq!(stats.median, 3.0);
    assert_relative_eq!(stats.min, 1.0);
    assert_relative_eq!(stats.max, 4.0);
    assert_relative_eq!(stats.std_dev, 1.25_f64.sqrt());
}

#[test]
fn evaluation_reports_zero_precision_when_no_true_positives() {
    // TP = 0, FP = 2: the guard is keyed on TP, so this reports 0 rather
    // than failing on a zero denominator.
    let outcomes = vec![
        LabeledOutcome::new(false, true),
        LabeledOutcome::new(false, true),
        LabeledOutcome::new(true, false),
        LabeledOutcome::new(false, false),
    ];

    let eval = evaluate(&outcomes).unwrap();
    assert_eq!(eval.precision, 0.0);
    assert_eq!(eval.recall, 0.0);
    assert_eq!(eval.f1_score, 0.0);
    assert_eq!(eval.confusion_matrix, [[0, 2], [1, 1]]);
    assert_relative_eq!(eval.accuracy, 0.25);
}

#[test]
fn evaluation_counts_every_pair_exactly_once() {
    let outcomes: Vec<_> = (0..50)
        .map(|i| LabeledOutcome::new(i % 2 == 0, i % 3 == 0))
        .collect();

    let eval = evaluate(&outcomes).unwrap();
    let [[tp, fp], [fn_, tn]] = eval.confusion_matrix;
    assert_eq!(tp + fp + fn_ + tn, 50);
    assert_eq!(eval.total_samples, 50);
}
