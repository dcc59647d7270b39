//! Sequential value production.
//!
//! A [`ValueProducer`] supplies the elements of one collection under
//! construction: [`start_collection`](ValueProducer::start_collection)
//! announces the element count, then one `next_*` call per index, in order,
//! hands back the element for that position. Routing every element through
//! this interface is what lets a captured collection be replayed verbatim
//! into a sibling representation (see [`ReplayValues`](crate::replay::ReplayValues)).
//!
//! [`RandomValues`] is the uniform source: strings draw their length from
//! [`STR_LEN_MIN`]`..=`[`STR_LEN_MAX`] and their characters from
//! [`ALPHABET`], and the scalar kinds are uniform over their natural ranges.
//!
//! Every kind designates a threshold in [`median`] which splits its uniform
//! value space exactly in half. The accept predicates ([`accept_i32`] and
//! friends) encode the below-threshold test; selectivity-controlled
//! generation and predicate benchmarks share these, so a configured accept
//! ratio means the same thing on both sides.

use std::sync::Arc;

use rand::{Rng, rngs::StdRng};

/// Characters which may appear in generated strings and `char` elements.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Smallest length of a generated string.
pub const STR_LEN_MIN: usize = 4;

/// Largest length of a generated string (inclusive).
pub const STR_LEN_MAX: usize = 11;

/// Median thresholds splitting each kind's uniform value space in half.
///
/// The halving is exact, not approximate: a freshly drawn value lands below
/// its threshold with probability exactly 1/2. Rejection sampling against
/// these thresholds therefore needs two draws per value in expectation,
/// independent of the configured accept ratio.
pub mod median {
    /// Half of all byte values (`0..=127`) lie below.
    pub const BYTE: u8 = 128;
    /// 13 of the 26 alphabet letters lie below.
    pub const CHAR: char = 'n';
    /// Negative values are half of the `i16` space.
    pub const I16: i16 = 0;
    /// Negative values are half of the `i32` space.
    pub const I32: i32 = 0;
    /// Negative values are half of the `i64` space.
    pub const I64: i64 = 0;
    /// Splits the uniform `$[0, 1)$` range in half.
    pub const F32: f32 = 0.5;
    /// Splits the uniform `$[0, 1)$` range in half.
    pub const F64: f64 = 0.5;
    /// Generated lengths `4..=7` lie below, `8..=11` do not.
    pub const STR_LEN: usize = 8;
}

// ////////////////////////////////////////////////////////////////////////////
// Accept predicates
// ////////////////////////////////////////////////////////////////////////////

/// Whether `value` is shorter than the string length median.
#[must_use]
#[inline]
pub fn accept_str(value: &str) -> bool {
    value.len() < median::STR_LEN
}

/// Whether `value` falls on the accepted side of the boolean split.
#[must_use]
#[inline]
pub fn accept_bool(value: bool) -> bool {
    value
}

/// Whether `value` lies below the byte median.
#[must_use]
#[inline]
pub fn accept_byte(value: u8) -> bool {
    value < median::BYTE
}

/// Whether `value` lies below the character median.
#[must_use]
#[inline]
pub fn accept_char(value: char) -> bool {
    value < median::CHAR
}

/// Whether `value` lies below the `i16` median.
#[must_use]
#[inline]
pub fn accept_i16(value: i16) -> bool {
    value < median::I16
}

/// Whether `value` lies below the `i32` median.
#[must_use]
#[inline]
pub fn accept_i32(value: i32) -> bool {
    value < median::I32
}

/// Whether `value` lies below the `f32` median.
#[must_use]
#[inline]
pub fn accept_f32(value: f32) -> bool {
    value < median::F32
}

/// Whether `value` lies below the `i64` median.
#[must_use]
#[inline]
pub fn accept_i64(value: i64) -> bool {
    value < median::I64
}

/// Whether `value` lies below the `f64` median.
#[must_use]
#[inline]
pub fn accept_f64(value: f64) -> bool {
    value < median::F64
}

// ////////////////////////////////////////////////////////////////////////////
// ValueProducer
// ////////////////////////////////////////////////////////////////////////////

/// A source of elements for one collection at a time.
///
/// Callers announce each collection with
/// [`start_collection`](Self::start_collection) and then request exactly one
/// element per index, in ascending order. Producers may use `index` to look
/// up captured content, or ignore it and draw from `rng`.
pub trait ValueProducer {
    /// Announce that a collection of `len` elements is about to be
    /// requested. The default does nothing.
    fn start_collection(&mut self, _len: usize) {}

    /// The string element at `index`.
    fn next_str(&mut self, index: usize, rng: &mut StdRng) -> Arc<str>;

    /// The boolean element at `index`.
    fn next_bool(&mut self, index: usize, rng: &mut StdRng) -> bool;

    /// The byte element at `index`.
    fn next_byte(&mut self, index: usize, rng: &mut StdRng) -> u8;

    /// The character element at `index`.
    fn next_char(&mut self, index: usize, rng: &mut StdRng) -> char;

    /// The `i16` element at `index`.
    fn next_i16(&mut self, index: usize, rng: &mut StdRng) -> i16;

    /// The `i32` element at `index`.
    fn next_i32(&mut self, index: usize, rng: &mut StdRng) -> i32;

    /// The `f32` element at `index`.
    fn next_f32(&mut self, index: usize, rng: &mut StdRng) -> f32;

    /// The `i64` element at `index`.
    fn next_i64(&mut self, index: usize, rng: &mut StdRng) -> i64;

    /// The `f64` element at `index`.
    fn next_f64(&mut self, index: usize, rng: &mut StdRng) -> f64;
}

// ////////////////////////////////////////////////////////////////////////////
// RandomValues
// ////////////////////////////////////////////////////////////////////////////

/// The uniform random producer.
///
/// Stateless: every element is a fresh draw from `rng`, and the `index`
/// argument is ignored. Integers are uniform over their full ranges, floats
/// over `$[0, 1)$`, characters over [`ALPHABET`], and strings combine a
/// uniform length in [`STR_LEN_MIN`]`..=`[`STR_LEN_MAX`] with uniform
/// alphabet characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomValues;

impl ValueProducer for RandomValues {
    fn next_str(&mut self, index: usize, rng: &mut StdRng) -> Arc<str> {
        let len = rng.random_range(STR_LEN_MIN..=STR_LEN_MAX);
        let mut value = String::with_capacity(len);
        for _ in 0..len {
            value.push(self.next_char(index, rng));
        }
        Arc::from(value)
    }

    fn next_bool(&mut self, _index: usize, rng: &mut StdRng) -> bool {
        rng.random()
    }

    fn next_byte(&mut self, _index: usize, rng: &mut StdRng) -> u8 {
        rng.random()
    }

    fn next_char(&mut self, _index: usize, rng: &mut StdRng) -> char {
        char::from(ALPHABET[rng.random_range(0..ALPHABET.len())])
    }

    fn next_i16(&mut self, _index: usize, rng: &mut StdRng) -> i16 {
        rng.random()
    }

    fn next_i32(&mut self, _index: usize, rng: &mut StdRng) -> i32 {
        rng.random()
    }

    fn next_f32(&mut self, _index: usize, rng: &mut StdRng) -> f32 {
        rng.random()
    }

    fn next_i64(&mut self, _index: usize, rng: &mut StdRng) -> i64 {
        rng.random()
    }

    fn next_f64(&mut self, _index: usize, rng: &mut StdRng) -> f64 {
        rng.random()
    }
}
