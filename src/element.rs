//! Element kinds and their canonical empty sequences.
//!
//! Generated collections hold one of nine element kinds: a reference kind
//! (shared strings) and eight scalar kinds. [`DataKind`] names the kinds at
//! runtime, and [`Element`] ties each kind's Rust type to the process-wide
//! empty sequences that zero-length collections share. Sharing matters for
//! the immutable representation: an empty `Arc<[T]>` still allocates its
//! reference-count header, and per-instance allocations would show up as
//! noise in allocation-sensitive measurements.

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

// ////////////////////////////////////////////////////////////////////////////
// DataKind
// ////////////////////////////////////////////////////////////////////////////

/// The element kind held by a generated collection.
///
/// Exactly one kind is populated per [`Subject`](crate::subject::Subject);
/// benchmark parameters select the kind under test at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Shared strings (`Arc<str>`).
    Str,
    /// Booleans.
    Bool,
    /// Bytes (`u8`).
    Byte,
    /// Alphabet characters.
    Char,
    /// 16-bit signed integers.
    I16,
    /// 32-bit signed integers.
    I32,
    /// 32-bit floats in `$[0, 1)$`.
    F32,
    /// 64-bit signed integers.
    I64,
    /// 64-bit floats in `$[0, 1)$`.
    F64,
}

impl DataKind {
    /// Every kind, in a fixed order.
    pub const ALL: [Self; 9] = [
        Self::Str,
        Self::Bool,
        Self::Byte,
        Self::Char,
        Self::I16,
        Self::I32,
        Self::F32,
        Self::I64,
        Self::F64,
    ];

    /// Short name used in benchmark ids and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::F64 => "f64",
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Element
// ////////////////////////////////////////////////////////////////////////////

/// An element type storable in generated sequences.
///
/// The trait is a closed set: one implementation per [`DataKind`]. Its main
/// job is handing out the canonical empty sequences, so that emptiness never
/// costs a fresh allocation in any representation.
pub trait Element: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The canonical shared empty immutable sequence of this element type.
    ///
    /// Every call returns a clone of one process-wide singleton; clones only
    /// bump the reference count.
    #[must_use]
    fn empty_immutable() -> Arc<[Self]>;

    /// The canonical empty growable sequence. Allocation-free.
    #[must_use]
    fn empty_growable() -> Vec<Self> {
        Vec::new()
    }

    /// The canonical empty fixed sequence. Allocation-free.
    #[must_use]
    fn empty_fixed() -> Box<[Self]> {
        Box::default()
    }
}

impl Element for Arc<str> {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[Arc<str>]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for bool {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[bool]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for u8 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[u8]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for char {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[char]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for i16 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[i16]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for i32 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[i32]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for f32 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[f32]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for i64 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[i64]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}

impl Element for f64 {
    fn empty_immutable() -> Arc<[Self]> {
        static EMPTY: LazyLock<Arc<[f64]>> = LazyLock::new(|| Vec::new().into());
        Arc::clone(&EMPTY)
    }
}
