//! Train/test partitioning

use crate::core::{PipelineError, Result, TrainingSample};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fraction of samples reserved for the test set when none is given
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Shuffle the samples and partition them into disjoint train and test
/// sets.
///
/// The test set receives `floor(n * test_ratio)` samples and the train set
/// the remainder; together they are exactly the input multiset. The ratio
/// must be within [0, 1] and is rejected before any shuffling occurs.
pub fn split<R: Rng>(
    samples: &[TrainingSample],
    test_ratio: f64,
    rng: &mut R,
) -> Result<(Vec<TrainingSample>, Vec<TrainingSample>)> {
    if !(0.0..=1.0).contains(&test_ratio) {
        return Err(PipelineError::InvalidParameter(format!(
            "Test ratio must be between 0 and 1, got: {test_ratio}"
        )));
    }

    let mut shuffled = samples.to_vec();
    shuffled.shuffle(rng);

    let test_size = (samples.len() as f64 * test_ratio) as usize;
    let test = shuffled.split_off(samples.len() - test_size);

    Ok((shuffled, test))
}
