//! Collection-size sampling.
//!
//! Generated collections follow a real-world-like size profile: mostly
//! small, with a thin tail of large ones. A [`SizeDistribution`] is an
//! ordered list of weighted buckets; sampling picks a bucket by weight, then
//! a size uniformly within the bucket's inclusive bounds. Weights are
//! percentages and must sum to exactly 100, so a bucket's weight reads
//! directly as the fraction of collections it produces.

use rand::{Rng, rngs::StdRng};
use thiserror::Error;

// ////////////////////////////////////////////////////////////////////////////
// Buckets
// ////////////////////////////////////////////////////////////////////////////

/// One weighted bucket: `weight` percent of samples fall uniformly within
/// `lower..=upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBucket {
    /// Selection weight in percent.
    pub weight: u32,
    /// Smallest size this bucket produces.
    pub lower: usize,
    /// Largest size this bucket produces (inclusive).
    pub upper: usize,
}

impl SizeBucket {
    /// Create a bucket covering `lower..=upper` with `weight` percent of the
    /// samples.
    #[must_use]
    pub const fn new(weight: u32, lower: usize, upper: usize) -> Self {
        Self {
            weight,
            lower,
            upper,
        }
    }
}

/// Size profile for top-level collections.
const TOP_LEVEL: [SizeBucket; 4] = [
    SizeBucket::new(40, 0, 8),
    SizeBucket::new(35, 9, 64),
    SizeBucket::new(20, 65, 512),
    SizeBucket::new(5, 513, 4096),
];

/// Size profile for nested structure: how many inner collections an outer
/// slot owns.
const NESTED: [SizeBucket; 3] = [
    SizeBucket::new(60, 0, 4),
    SizeBucket::new(30, 5, 16),
    SizeBucket::new(10, 17, 64),
];

// ////////////////////////////////////////////////////////////////////////////
// Errors
// ////////////////////////////////////////////////////////////////////////////

/// Errors which can occur when creating a [`SizeDistribution`].
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeDistributionError {
    /// A bucket was configured with a weight of zero.
    #[error("bucket weight must be strictly positive")]
    ZeroWeight,
    /// A bucket's lower bound exceeds its upper bound.
    #[error("bucket bounds are inverted: lower {lower} > upper {upper}")]
    InvertedBounds {
        /// The offending lower bound.
        lower: usize,
        /// The offending upper bound.
        upper: usize,
    },
    /// The bucket weights do not sum to exactly 100.
    #[error("bucket weights must sum to exactly 100, got {total}")]
    WeightSum {
        /// The sum that was actually configured.
        total: u32,
    },
}

// ////////////////////////////////////////////////////////////////////////////
// SizeDistribution
// ////////////////////////////////////////////////////////////////////////////

/// A weighted piecewise-uniform sampler for collection sizes.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use seqbench::{SizeBucket, SizeDistribution};
///
/// let distribution = SizeDistribution::new([
///     SizeBucket::new(75, 0, 9),
///     SizeBucket::new(25, 10, 99),
/// ])?;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(distribution.sample(&mut rng) < 100);
/// # Ok::<(), seqbench::SizeDistributionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SizeDistribution {
    // Invariant: weights are strictly positive and sum to exactly 100, and
    // every bucket satisfies lower <= upper. Upheld by `new`; the preset
    // tables are vetted by `tests::presets_are_valid`.
    buckets: Box<[SizeBucket]>,
}

impl SizeDistribution {
    /// Create a distribution from ordered buckets.
    ///
    /// # Errors
    ///
    /// Fails if any bucket has a zero weight, any bucket's bounds are
    /// inverted, or the weights do not sum to exactly 100.
    pub fn new(
        buckets: impl IntoIterator<Item = SizeBucket>,
    ) -> Result<Self, SizeDistributionError> {
        let buckets: Vec<SizeBucket> = buckets.into_iter().collect();
        let mut total: u32 = 0;
        for bucket in &buckets {
            if bucket.weight == 0 {
                return Err(SizeDistributionError::ZeroWeight);
            }
            if bucket.lower > bucket.upper {
                return Err(SizeDistributionError::InvertedBounds {
                    lower: bucket.lower,
                    upper: bucket.upper,
                });
            }
            total += bucket.weight;
        }
        if total != 100 {
            return Err(SizeDistributionError::WeightSum { total });
        }
        Ok(Self {
            buckets: buckets.into_boxed_slice(),
        })
    }

    /// The profile for top-level collections: mostly small, a thin tail of
    /// large ones.
    #[must_use]
    pub fn top_level() -> Self {
        Self {
            buckets: Box::new(TOP_LEVEL),
        }
    }

    /// The profile for nested structure: the number of inner collections an
    /// outer slot owns.
    #[must_use]
    pub fn nested() -> Self {
        Self {
            buckets: Box::new(NESTED),
        }
    }

    /// The configured buckets, in selection order.
    #[must_use]
    pub fn buckets(&self) -> &[SizeBucket] {
        &self.buckets
    }

    /// Sample one size.
    ///
    /// Draws a selector uniformly from `$[0, 100)$`, walks the buckets
    /// accumulating weights until the cumulative weight exceeds the
    /// selector, then draws uniformly within the winning bucket's inclusive
    /// bounds. Exactly two draws from `rng` per call.
    #[must_use]
    pub fn sample(&self, rng: &mut StdRng) -> usize {
        let selector: u32 = rng.random_range(0..100);
        let mut cumulative = 0;
        for bucket in &self.buckets {
            cumulative += bucket.weight;
            if selector < cumulative {
                return rng.random_range(bucket.lower..=bucket.upper);
            }
        }
        unreachable!("bucket weights sum to exactly 100")
    }
}
