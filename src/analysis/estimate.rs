//! Monte Carlo tree-size estimates from random samples

use num_traits::{CheckedMul, FromPrimitive, One, ToPrimitive, Zero};

/// Estimate contributed by one sample
///
/// With `depth` of `None` the estimate is the product of all degrees, an
/// unbiased estimate of the number of leaves. With `Some(d)` the degree list
/// is cut or zero-padded to exactly `d` entries, estimating the number of
/// nodes at depth `d`. Returns `None` if the product overflows `T`.
pub fn path_estimate<T>(degrees: &[usize], depth: Option<usize>) -> Option<T>
where
    T: CheckedMul + FromPrimitive + One + Zero,
{
    let considered = match depth {
        Some(d) if d > degrees.len() => return Some(T::zero()),
        Some(d) => degrees.get(..d).unwrap_or(degrees),
        None => degrees,
    };

    considered.iter().try_fold(T::one(), |product, &degree| {
        T::from_usize(degree).and_then(|degree| product.checked_mul(&degree))
    })
}

/// Running average of sample estimates
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeEstimate {
    samples: u64,
    total: u128,
    saturated: bool,
}

impl TreeEstimate {
    /// Create an estimate with no samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample's degrees, truncated or padded to `depth` if given
    pub fn record(&mut self, degrees: &[usize], depth: Option<usize>) {
        let estimate = path_estimate::<u128>(degrees, depth).unwrap_or_else(|| {
            self.saturated = true;
            u128::MAX
        });
        self.record_value(estimate);
    }

    /// Add one precomputed estimate
    pub fn record_value(&mut self, estimate: u128) {
        self.samples += 1;
        self.total = self.total.checked_add(estimate).unwrap_or_else(|| {
            self.saturated = true;
            u128::MAX
        });
    }

    /// Number of samples recorded
    pub const fn samples(&self) -> u64 {
        self.samples
    }

    /// Sum of all estimates, saturating at `u128::MAX`
    pub const fn total(&self) -> u128 {
        self.total
    }

    /// True once any product or the running total overflowed
    pub const fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Mean estimate, zero before the first sample
    pub fn average(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        let total = self.total.to_f64().unwrap_or(f64::INFINITY);
        let samples = self.samples.to_f64().unwrap_or(1.0);
        total / samples
    }
}
