//! Selectivity-controlled value production.
//!
//! [`FilteredValues`] wraps a producer so that each produced value satisfies
//! the per-kind accept predicate with a configured probability. Benchmarks
//! over filtering and searching need this: how much work a predicate pass
//! does depends on how many elements match, so the match fraction has to be
//! a controlled input rather than an accident of the seed.
//!
//! The algorithm flips a coin weighted by the accept ratio to decide which
//! side of the median this value must land on, then redraws from the
//! underlying producer until a value on that side appears. The medians
//! split every value space exactly in half, so the redraw loop needs two
//! draws in expectation regardless of the configured ratio: the ratio only
//! decides how often each side is required, never how hard a single value
//! is to find.

use std::sync::Arc;

use rand::{Rng, rngs::StdRng};
use thiserror::Error;

use crate::producer::{
    RandomValues, ValueProducer, accept_bool, accept_byte, accept_char, accept_f32, accept_f64,
    accept_i16, accept_i32, accept_i64, accept_str,
};

/// Hard cap on redraws per produced value.
///
/// Unreachable for the shipped predicates, where the probability of missing
/// the decided side halves with every draw. A producer that can never reach
/// one side (for example a replay source whose captured values all sit on
/// the other) trips the cap instead of hanging the benchmark setup.
const MAX_DRAWS: u32 = 10_000;

/// Errors which can occur when configuring [`FilteredValues`].
#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum AcceptRatioError {
    /// The accept ratio lies outside the closed unit interval.
    #[error("accept ratio must lie within [0, 1], got {0}")]
    OutOfRange(f64),
}

/// A producer guaranteeing a configured fraction of accepted values.
///
/// Wraps an inner [`ValueProducer`]; each `next_*` call flips an
/// accept-ratio-weighted coin and then redraws from the inner producer
/// until the drawn value's predicate outcome matches the flip.
///
/// # Examples
///
/// ```
/// use seqbench::FilteredValues;
///
/// assert!(FilteredValues::random(0.25).is_ok());
/// assert!(FilteredValues::random(1.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FilteredValues<P = RandomValues> {
    accept_ratio: f64,
    inner: P,
}

impl FilteredValues<RandomValues> {
    /// A filtered producer over uniform random values.
    ///
    /// # Errors
    ///
    /// Fails if `accept_ratio` lies outside `$[0, 1]$`.
    pub fn random(accept_ratio: f64) -> Result<Self, AcceptRatioError> {
        Self::new(accept_ratio, RandomValues)
    }
}

impl<P: ValueProducer> FilteredValues<P> {
    /// Wrap `inner`, pinning the accepted fraction to `accept_ratio`.
    ///
    /// # Errors
    ///
    /// Fails if `accept_ratio` lies outside `$[0, 1]$`.
    pub fn new(accept_ratio: f64, inner: P) -> Result<Self, AcceptRatioError> {
        if !(0.0..=1.0).contains(&accept_ratio) {
            return Err(AcceptRatioError::OutOfRange(accept_ratio));
        }
        Ok(Self {
            accept_ratio,
            inner,
        })
    }

    /// The configured accept ratio.
    #[must_use]
    pub fn accept_ratio(&self) -> f64 {
        self.accept_ratio
    }

    /// Decide whether the next value must satisfy its accept predicate.
    fn decide(&self, rng: &mut StdRng) -> bool {
        rng.random::<f64>() < self.accept_ratio
    }
}

impl<P: ValueProducer> ValueProducer for FilteredValues<P> {
    fn start_collection(&mut self, len: usize) {
        self.inner.start_collection(len);
    }

    fn next_str(&mut self, index: usize, rng: &mut StdRng) -> Arc<str> {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_str(index, rng);
            if accept_str(&value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_bool(&mut self, index: usize, rng: &mut StdRng) -> bool {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_bool(index, rng);
            if accept_bool(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_byte(&mut self, index: usize, rng: &mut StdRng) -> u8 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_byte(index, rng);
            if accept_byte(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_char(&mut self, index: usize, rng: &mut StdRng) -> char {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_char(index, rng);
            if accept_char(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_i16(&mut self, index: usize, rng: &mut StdRng) -> i16 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_i16(index, rng);
            if accept_i16(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_i32(&mut self, index: usize, rng: &mut StdRng) -> i32 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_i32(index, rng);
            if accept_i32(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_f32(&mut self, index: usize, rng: &mut StdRng) -> f32 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_f32(index, rng);
            if accept_f32(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_i64(&mut self, index: usize, rng: &mut StdRng) -> i64 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_i64(index, rng);
            if accept_i64(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }

    fn next_f64(&mut self, index: usize, rng: &mut StdRng) -> f64 {
        let accept = self.decide(rng);
        for _ in 0..MAX_DRAWS {
            let value = self.inner.next_f64(index, rng);
            if accept_f64(value) == accept {
                return value;
            }
        }
        panic!("rejection sampling exceeded {MAX_DRAWS} draws without matching the accept decision")
    }
}
