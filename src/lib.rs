//! Reproducible synthetic datasets for sequence-representation
//! micro-benchmarks.
//!
//! Three ways of materializing the same logical sequence are compared:
//!
//! - growable: `Vec<T>`, built by incremental append;
//! - fixed: `Box<[T]>`, built by an exact-size indexed initializer;
//! - immutable: `Arc<[T]>`, shared and never mutated.
//!
//! Measured differences should come from the representation, not from the
//! data. To that end dataset construction is deterministic and
//! content-identical across representations:
//!
//! ```text
//! SizeDistribution ------> per-collection size
//!                              |
//! RandomValues ----------> fixed subject          (fresh content)
//!   or FilteredValues          |
//!                        Subject::replay
//!                          |        |
//!                 growable subject  immutable subject   (cloned content)
//! ```
//!
//! [`Dataset::generate`] seeds its random source from [`DATASET_SEED`] on
//! every call, so repeated builds observe byte-identical datasets.
//! [`FilteredValues`] pins the fraction of values satisfying the per-kind
//! accept predicates, so predicate-driven benchmarks measure a controlled
//! amount of matching work.
//!
//! # Examples
//!
//! ```
//! use seqbench::{DataKind, Dataset, accept_i32};
//!
//! let dataset = Dataset::with_selectivity(16, DataKind::I32, 0.3)?;
//! assert!(dataset.parity_ok());
//!
//! let accepted: u64 = dataset
//!     .fixed()
//!     .iter()
//!     .map(|subject| subject.i32s().iter().filter(|&&value| accept_i32(value)).count() as u64)
//!     .sum();
//! assert!(accepted <= dataset.total_elements());
//! # Ok::<(), seqbench::AcceptRatioError>(())
//! ```

pub mod dataset;
pub mod distribution;
pub mod element;
pub mod producer;
pub mod replay;
pub mod selectivity;
pub mod subject;

pub use crate::dataset::{DATASET_SEED, Dataset, NestedDataset, NestedSlot};
pub use crate::distribution::{SizeBucket, SizeDistribution, SizeDistributionError};
pub use crate::element::{DataKind, Element};
pub use crate::producer::{
    ALPHABET, RandomValues, STR_LEN_MAX, STR_LEN_MIN, ValueProducer, accept_bool, accept_byte,
    accept_char, accept_f32, accept_f64, accept_i16, accept_i32, accept_i64, accept_str, median,
};
pub use crate::replay::ReplayValues;
pub use crate::selectivity::{AcceptRatioError, FilteredValues};
pub use crate::subject::{Fixed, Growable, Immutable, Repr, Sequence, Subject, Values};
