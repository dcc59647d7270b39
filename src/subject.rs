//! Structural parity wrappers.
//!
//! A [`Subject`] is one logical collection materialized in one
//! representation. The three representations under comparison are
//! [`Growable`] (`Vec<T>`, built by incremental append), [`Fixed`]
//! (`Box<[T]>`, built by an exact-size indexed initializer) and
//! [`Immutable`] (`Arc<[T]>`, shared and never mutated). [`Values`] is a
//! closed tagged union keyed by [`DataKind`], so every subject populates
//! exactly one element kind and the wrapper's shape never depends on which.
//!
//! Subjects produced from the same producer output hold identical logical
//! content across representations. That parity is the point: a benchmark
//! touching the same data through all three wrappers can attribute measured
//! differences to the representation alone.

use std::{fmt, sync::Arc};

use rand::rngs::StdRng;

use crate::{
    element::{DataKind, Element},
    producer::ValueProducer,
    replay::ReplayValues,
};

// ////////////////////////////////////////////////////////////////////////////
// Sequence
// ////////////////////////////////////////////////////////////////////////////

/// The container contract shared by the three representations.
///
/// Construction from an index-generator function, a canonical empty value,
/// a length query and an indexed read. Deliberately narrow: benchmark
/// methods go through the concrete container types, this trait only has to
/// carry generation and replay.
pub trait Sequence<T: Element>: AsRef<[T]> + fmt::Debug {
    /// Build a sequence of `len` elements, `fill(i)` supplying the element
    /// at index `i`. `fill` is called once per index, in ascending order.
    #[must_use]
    fn from_fn(len: usize, fill: impl FnMut(usize) -> T) -> Self;

    /// The canonical empty sequence of this representation.
    #[must_use]
    fn empty() -> Self;

    /// The number of elements.
    #[must_use]
    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Whether the sequence holds no elements.
    #[must_use]
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    #[inline]
    fn at(&self, index: usize) -> &T {
        &self.as_ref()[index]
    }
}

impl<T: Element> Sequence<T> for Vec<T> {
    // Incremental append from empty: growth reallocations and capacity
    // slack are part of what the growable representation is.
    fn from_fn(len: usize, mut fill: impl FnMut(usize) -> T) -> Self {
        let mut values = Self::new();
        for index in 0..len {
            values.push(fill(index));
        }
        values
    }

    fn empty() -> Self {
        T::empty_growable()
    }
}

impl<T: Element> Sequence<T> for Box<[T]> {
    fn from_fn(len: usize, fill: impl FnMut(usize) -> T) -> Self {
        (0..len).map(fill).collect()
    }

    fn empty() -> Self {
        T::empty_fixed()
    }
}

impl<T: Element> Sequence<T> for Arc<[T]> {
    // Zero-length sequences share the canonical singleton; an empty
    // `Arc<[T]>` would otherwise allocate its reference-count header.
    fn from_fn(len: usize, fill: impl FnMut(usize) -> T) -> Self {
        if len == 0 {
            Self::empty()
        } else {
            (0..len).map(fill).collect()
        }
    }

    fn empty() -> Self {
        T::empty_immutable()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Representations
// ////////////////////////////////////////////////////////////////////////////

/// A sequence representation under comparison.
///
/// The associated container materializes collections for this
/// representation; [`LABEL`](Repr::LABEL) names it in benchmark ids.
pub trait Repr {
    /// The container family backing this representation.
    type Seq<T: Element>: Sequence<T>;

    /// Short name used in benchmark ids and reports.
    const LABEL: &'static str;
}

/// The growable representation: `Vec<T>` built by incremental append.
#[derive(Debug, Clone, Copy)]
pub struct Growable;

/// The fixed-array representation: `Box<[T]>` built by an exact-size
/// indexed initializer.
#[derive(Debug, Clone, Copy)]
pub struct Fixed;

/// The immutable-array representation: `Arc<[T]>`, with zero-length
/// sequences sharing canonical empty singletons.
#[derive(Debug, Clone, Copy)]
pub struct Immutable;

impl Repr for Growable {
    type Seq<T: Element> = Vec<T>;
    const LABEL: &'static str = "growable";
}

impl Repr for Fixed {
    type Seq<T: Element> = Box<[T]>;
    const LABEL: &'static str = "fixed";
}

impl Repr for Immutable {
    type Seq<T: Element> = Arc<[T]>;
    const LABEL: &'static str = "immutable";
}

// ////////////////////////////////////////////////////////////////////////////
// Values
// ////////////////////////////////////////////////////////////////////////////

/// The populated payload of a subject: one variant per element kind.
///
/// A closed tagged union rather than nine optional slots, so a subject can
/// never hold zero or two populated sequences and matching on the payload
/// is exhaustive by construction.
#[derive(Debug)]
pub enum Values<R: Repr> {
    /// Shared string elements.
    Str(R::Seq<Arc<str>>),
    /// Boolean elements.
    Bool(R::Seq<bool>),
    /// Byte elements.
    Byte(R::Seq<u8>),
    /// Character elements.
    Char(R::Seq<char>),
    /// 16-bit integer elements.
    I16(R::Seq<i16>),
    /// 32-bit integer elements.
    I32(R::Seq<i32>),
    /// 32-bit float elements.
    F32(R::Seq<f32>),
    /// 64-bit integer elements.
    I64(R::Seq<i64>),
    /// 64-bit float elements.
    F64(R::Seq<f64>),
}

impl<R: Repr> Values<R> {
    /// The element kind of the populated variant.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            Values::Str(_) => DataKind::Str,
            Values::Bool(_) => DataKind::Bool,
            Values::Byte(_) => DataKind::Byte,
            Values::Char(_) => DataKind::Char,
            Values::I16(_) => DataKind::I16,
            Values::I32(_) => DataKind::I32,
            Values::F32(_) => DataKind::F32,
            Values::I64(_) => DataKind::I64,
            Values::F64(_) => DataKind::F64,
        }
    }

    /// The number of populated elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Values::Str(values) => values.len(),
            Values::Bool(values) => values.len(),
            Values::Byte(values) => values.len(),
            Values::Char(values) => values.len(),
            Values::I16(values) => values.len(),
            Values::I32(values) => values.len(),
            Values::F32(values) => values.len(),
            Values::I64(values) => values.len(),
            Values::F64(values) => values.len(),
        }
    }

    /// Whether the populated sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Subject
// ////////////////////////////////////////////////////////////////////////////

/// One logical collection materialized in one representation.
///
/// Exactly one element kind is populated. The typed accessors ([`i32s`],
/// [`strs`] and friends) panic when the requested kind differs from the
/// populated one; a benchmark wired to the wrong kind measures nothing
/// meaningful, so that mistake fails loudly instead of skewing results.
///
/// [`i32s`]: Self::i32s
/// [`strs`]: Self::strs
#[derive(Debug)]
pub struct Subject<R: Repr> {
    // Invariant: `len` equals the populated sequence's element count.
    len: usize,
    values: Values<R>,
}

/// Materialize one sequence for representation `R`.
fn build<R, T, F>(len: usize, fill: F) -> R::Seq<T>
where
    R: Repr,
    T: Element,
    F: FnMut(usize) -> T,
{
    <R::Seq<T> as Sequence<T>>::from_fn(len, fill)
}

impl<R: Repr> Subject<R> {
    /// Generate a subject of `len` elements of `kind`.
    ///
    /// Announces the collection with `producer.start_collection(len)`, then
    /// populates the matching variant with one `next_*` call per index, in
    /// ascending order.
    #[must_use]
    pub fn generate<P: ValueProducer>(
        kind: DataKind,
        len: usize,
        producer: &mut P,
        rng: &mut StdRng,
    ) -> Self {
        producer.start_collection(len);
        let values = match kind {
            DataKind::Str => {
                Values::Str(build::<R, _, _>(len, |index| producer.next_str(index, rng)))
            },
            DataKind::Bool => {
                Values::Bool(build::<R, _, _>(len, |index| producer.next_bool(index, rng)))
            },
            DataKind::Byte => {
                Values::Byte(build::<R, _, _>(len, |index| producer.next_byte(index, rng)))
            },
            DataKind::Char => {
                Values::Char(build::<R, _, _>(len, |index| producer.next_char(index, rng)))
            },
            DataKind::I16 => {
                Values::I16(build::<R, _, _>(len, |index| producer.next_i16(index, rng)))
            },
            DataKind::I32 => {
                Values::I32(build::<R, _, _>(len, |index| producer.next_i32(index, rng)))
            },
            DataKind::F32 => {
                Values::F32(build::<R, _, _>(len, |index| producer.next_f32(index, rng)))
            },
            DataKind::I64 => {
                Values::I64(build::<R, _, _>(len, |index| producer.next_i64(index, rng)))
            },
            DataKind::F64 => {
                Values::F64(build::<R, _, _>(len, |index| producer.next_f64(index, rng)))
            },
        };
        debug_assert_eq!(values.len(), len);
        Self { len, values }
    }

    /// The number of elements.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the subject holds no elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The populated element kind.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        self.values.kind()
    }

    /// The populated payload.
    #[must_use]
    pub fn values(&self) -> &Values<R> {
        &self.values
    }

    /// A producer replaying this subject's content by index.
    ///
    /// Feeding the replay producer into [`Subject::generate`] for a sibling
    /// representation clones the content element by element.
    #[must_use]
    pub fn replay(&self) -> ReplayValues<'_, R> {
        ReplayValues::new(self)
    }

    /// Whether `other` holds the same element kind, length and element-wise
    /// content. Representations may differ.
    #[must_use]
    pub fn content_eq<S: Repr>(&self, other: &Subject<S>) -> bool {
        if self.len != other.len {
            return false;
        }
        match (&self.values, &other.values) {
            (Values::Str(a), Values::Str(b)) => a.as_ref() == b.as_ref(),
            (Values::Bool(a), Values::Bool(b)) => a.as_ref() == b.as_ref(),
            (Values::Byte(a), Values::Byte(b)) => a.as_ref() == b.as_ref(),
            (Values::Char(a), Values::Char(b)) => a.as_ref() == b.as_ref(),
            (Values::I16(a), Values::I16(b)) => a.as_ref() == b.as_ref(),
            (Values::I32(a), Values::I32(b)) => a.as_ref() == b.as_ref(),
            (Values::F32(a), Values::F32(b)) => a.as_ref() == b.as_ref(),
            (Values::I64(a), Values::I64(b)) => a.as_ref() == b.as_ref(),
            (Values::F64(a), Values::F64(b)) => a.as_ref() == b.as_ref(),
            _ => false,
        }
    }

    /// The populated string sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn strs(&self) -> &R::Seq<Arc<str>> {
        match &self.values {
            Values::Str(values) => values,
            other => panic!("subject holds {:?} values, not str", other.kind()),
        }
    }

    /// The populated boolean sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn bools(&self) -> &R::Seq<bool> {
        match &self.values {
            Values::Bool(values) => values,
            other => panic!("subject holds {:?} values, not bool", other.kind()),
        }
    }

    /// The populated byte sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn bytes(&self) -> &R::Seq<u8> {
        match &self.values {
            Values::Byte(values) => values,
            other => panic!("subject holds {:?} values, not byte", other.kind()),
        }
    }

    /// The populated character sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn chars(&self) -> &R::Seq<char> {
        match &self.values {
            Values::Char(values) => values,
            other => panic!("subject holds {:?} values, not char", other.kind()),
        }
    }

    /// The populated `i16` sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn i16s(&self) -> &R::Seq<i16> {
        match &self.values {
            Values::I16(values) => values,
            other => panic!("subject holds {:?} values, not i16", other.kind()),
        }
    }

    /// The populated `i32` sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn i32s(&self) -> &R::Seq<i32> {
        match &self.values {
            Values::I32(values) => values,
            other => panic!("subject holds {:?} values, not i32", other.kind()),
        }
    }

    /// The populated `f32` sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn f32s(&self) -> &R::Seq<f32> {
        match &self.values {
            Values::F32(values) => values,
            other => panic!("subject holds {:?} values, not f32", other.kind()),
        }
    }

    /// The populated `i64` sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn i64s(&self) -> &R::Seq<i64> {
        match &self.values {
            Values::I64(values) => values,
            other => panic!("subject holds {:?} values, not i64", other.kind()),
        }
    }

    /// The populated `f64` sequence.
    ///
    /// # Panics
    ///
    /// Panics if the subject holds a different element kind.
    #[must_use]
    pub fn f64s(&self) -> &R::Seq<f64> {
        match &self.values {
            Values::F64(values) => values,
            other => panic!("subject holds {:?} values, not f64", other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::{Fixed, Growable, Immutable, Sequence, Subject};
    use crate::{
        element::{DataKind, Element},
        producer::RandomValues,
    };

    #[rstest]
    fn generates_requested_kind_and_length(
        #[values(
            DataKind::Str,
            DataKind::Bool,
            DataKind::Byte,
            DataKind::Char,
            DataKind::I16,
            DataKind::I32,
            DataKind::F32,
            DataKind::I64,
            DataKind::F64
        )]
        kind: DataKind,
    ) {
        let mut rng = StdRng::seed_from_u64(2);
        let subject = Subject::<Fixed>::generate(kind, 10, &mut RandomValues, &mut rng);
        assert_eq!(subject.kind(), kind);
        assert_eq!(subject.len(), 10);
        assert_eq!(subject.values().len(), 10);
        assert_eq!(subject.values().kind(), kind);
        assert!(!subject.is_empty());
        assert!(!subject.values().is_empty());
    }

    #[test]
    fn canonical_empties_hold_nothing() {
        let growable: Vec<i32> = Sequence::empty();
        let fixed: Box<[i32]> = Sequence::empty();
        let immutable: Arc<[i32]> = Sequence::empty();
        assert!(growable.is_empty());
        assert!(fixed.is_empty());
        assert!(immutable.is_empty());
        assert_eq!(growable.capacity(), 0);
    }

    #[test]
    #[should_panic(expected = "subject holds Char values, not i32")]
    fn wrong_kind_accessor_panics() {
        let mut rng = StdRng::seed_from_u64(2);
        let subject = Subject::<Growable>::generate(DataKind::Char, 4, &mut RandomValues, &mut rng);
        let _ = subject.i32s();
    }

    #[test]
    fn empty_immutable_subjects_share_the_singleton() {
        let mut rng = StdRng::seed_from_u64(2);
        let first = Subject::<Immutable>::generate(DataKind::I32, 0, &mut RandomValues, &mut rng);
        let second = Subject::<Immutable>::generate(DataKind::I32, 0, &mut RandomValues, &mut rng);
        assert!(Arc::ptr_eq(first.i32s(), second.i32s()));
        assert!(Arc::ptr_eq(first.i32s(), &<i32 as Element>::empty_immutable()));
    }

    #[test]
    fn empty_growable_subject_has_no_capacity() {
        let mut rng = StdRng::seed_from_u64(2);
        let subject = Subject::<Growable>::generate(DataKind::I64, 0, &mut RandomValues, &mut rng);
        assert!(subject.is_empty());
        assert_eq!(subject.i64s().capacity(), 0);
    }

    #[test]
    fn fill_runs_in_index_order() {
        let seq: Box<[i32]> = Sequence::from_fn(5, |index| index as i32 * 10);
        assert_eq!(&seq[..], &[0, 10, 20, 30, 40]);

        let seq: Vec<i32> = Sequence::from_fn(3, |index| index as i32);
        assert_eq!(&seq[..], &[0, 1, 2]);
    }

    #[test]
    fn content_eq_spans_representations() {
        let mut rng = StdRng::seed_from_u64(6);
        let fixed = Subject::<Fixed>::generate(DataKind::Byte, 32, &mut RandomValues, &mut rng);
        let growable =
            Subject::<Growable>::generate(DataKind::Byte, 32, &mut fixed.replay(), &mut rng);
        assert!(fixed.content_eq(&growable));
        assert!(growable.content_eq(&fixed));
    }

    #[test]
    fn content_eq_rejects_kind_and_content_mismatches() {
        let mut rng = StdRng::seed_from_u64(6);
        let bytes = Subject::<Fixed>::generate(DataKind::Byte, 8, &mut RandomValues, &mut rng);
        let chars = Subject::<Fixed>::generate(DataKind::Char, 8, &mut RandomValues, &mut rng);
        let other_bytes = Subject::<Fixed>::generate(DataKind::Byte, 9, &mut RandomValues, &mut rng);
        assert!(!bytes.content_eq(&chars));
        assert!(!bytes.content_eq(&other_bytes));
    }
}
