//! Stateless random-number utility.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when the requested range is empty or inverted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("min must be less than max (got min={min}, max={max})")]
pub struct InvalidRangeError {
    /// Requested lower bound.
    pub min: i64,
    /// Requested upper bound.
    pub max: i64,
}

/// Request shape for a random number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RandomRequest {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

/// Response shape carrying the generated number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RandomResult {
    /// Value in `[min, max]`.
    pub random_number: i64,
}

/// Uniform integer in the inclusive range `[min, max]` from the thread-local RNG.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] unless `min < max`.
pub fn random_in_range(min: i64, max: i64) -> Result<i64, InvalidRangeError> {
    random_in_range_with(&mut rand::thread_rng(), min, max)
}

/// Same as [`random_in_range`] with a caller-supplied generator.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] unless `min < max`.
pub fn random_in_range_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<i64, InvalidRangeError> {
    if min >= max {
        return Err(InvalidRangeError { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn full_i64_span_is_accepted() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_in_range_with(&mut rng, i64::MIN, i64::MAX).is_ok());
    }

    #[test]
    fn both_endpoints_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 2];
        for _ in 0..1_000 {
            let v = random_in_range_with(&mut rng, 0, 1).unwrap();
            seen[usize::try_from(v).unwrap()] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn inverted_range_rejected() {
        let err = random_in_range(10, -10).unwrap_err();
        assert_eq!(err, InvalidRangeError { min: 10, max: -10 });
    }
}
