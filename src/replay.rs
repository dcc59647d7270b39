//! Deterministic replay of captured content.
//!
//! [`ReplayValues`] adapts an already-materialized [`Subject`] into a
//! [`ValueProducer`]: `start_collection` asserts that the announced length
//! matches the captured one, and every `next_*` call ignores the random
//! source and hands back the captured element at the requested index.
//! Cloning a collection into its sibling representations goes through this
//! producer, so siblings can never diverge from the first materialization.

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::{
    producer::ValueProducer,
    subject::{Repr, Sequence, Subject},
};

/// A producer replaying a captured subject's elements by index.
///
/// Borrowing rather than owning: one captured subject commonly feeds two
/// sibling materializations, and shared string elements are cloned by
/// reference count, not by content.
#[derive(Debug)]
pub struct ReplayValues<'a, R: Repr> {
    source: &'a Subject<R>,
}

impl<'a, R: Repr> ReplayValues<'a, R> {
    /// Bind a replay producer to `source`.
    #[must_use]
    pub fn new(source: &'a Subject<R>) -> Self {
        Self { source }
    }
}

impl<R: Repr> ValueProducer for ReplayValues<'_, R> {
    /// Asserts that `len` matches the captured subject's element count. A
    /// mismatch means the caller is about to build a sibling that cannot
    /// hold the same content, which would silently break parity.
    fn start_collection(&mut self, len: usize) {
        assert_eq!(
            len,
            self.source.len(),
            "replay size mismatch: requested {len} elements, captured subject holds {}",
            self.source.len()
        );
    }

    fn next_str(&mut self, index: usize, _rng: &mut StdRng) -> Arc<str> {
        Arc::clone(self.source.strs().at(index))
    }

    fn next_bool(&mut self, index: usize, _rng: &mut StdRng) -> bool {
        *self.source.bools().at(index)
    }

    fn next_byte(&mut self, index: usize, _rng: &mut StdRng) -> u8 {
        *self.source.bytes().at(index)
    }

    fn next_char(&mut self, index: usize, _rng: &mut StdRng) -> char {
        *self.source.chars().at(index)
    }

    fn next_i16(&mut self, index: usize, _rng: &mut StdRng) -> i16 {
        *self.source.i16s().at(index)
    }

    fn next_i32(&mut self, index: usize, _rng: &mut StdRng) -> i32 {
        *self.source.i32s().at(index)
    }

    fn next_f32(&mut self, index: usize, _rng: &mut StdRng) -> f32 {
        *self.source.f32s().at(index)
    }

    fn next_i64(&mut self, index: usize, _rng: &mut StdRng) -> i64 {
        *self.source.i64s().at(index)
    }

    fn next_f64(&mut self, index: usize, _rng: &mut StdRng) -> f64 {
        *self.source.f64s().at(index)
    }
}
