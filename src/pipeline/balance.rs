//! Class balancing by random down-sampling
//!
//! Success is derived from the sample itself: completion rate >= 0.7 with
//! no injury. The majority class is down-sampled so both classes appear in
//! equal counts. The randomness source is caller-provided so shuffles stay
//! reproducible under a fixed seed.

use crate::core::{actual_success, TrainingSample};
use rand::seq::SliceRandom;
use rand::Rng;

/// Rebalance a sample set to equal counts of successful and unsuccessful
/// outcomes.
///
/// Returns a shuffled concatenation of `n` randomly chosen samples from
/// each class, where `n` is the size of the smaller class. The output is
/// always a multiset subset of the input; if either class is empty the
/// result is empty.
pub fn balance<R: Rng>(samples: &[TrainingSample], rng: &mut R) -> Vec<TrainingSample> {
    let (mut successful, mut unsuccessful): (Vec<_>, Vec<_>) =
        samples.iter().cloned().partition(actual_success);

    let min_count = successful.len().min(unsuccessful.len());

    successful.shuffle(rng);
    unsuccessful.shuffle(rng);
    successful.truncate(min_count);
    unsuccessful.truncate(min_count);

    let mut balanced = successful;
    balanced.append(&mut unsuccessful);
    balanced.shuffle(rng);
    balanced
}
