//! Dataset preparation stages
//!
//! Each stage is a pure function over an immutable input sequence: raw
//! records are validated and normalized, range outliers are dropped, the
//! two outcome classes are balanced by down-sampling, and the result is
//! split into disjoint train and test sets.

pub mod balance;
pub mod encode;
pub mod outliers;
pub mod split;
pub mod validate;

pub use balance::balance;
pub use encode::{encode, encode_all};
pub use outliers::remove_outliers;
pub use split::{split, DEFAULT_TEST_RATIO};
pub use validate::{clean_and_normalize, validate_and_normalize};
