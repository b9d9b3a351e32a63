//! Ford-Johnson merge-insertion sort, run over contiguous and ring-buffer
//! containers so the two can be timed against each other.
//!
//! ```
//! use pmerge::{Contiguous, sort};
//!
//! let sorted = sort::<Contiguous, _>(vec![3, 5, 9, 7, 4]);
//! assert_eq!(sorted.values, vec![3, 4, 5, 7, 9]);
//! assert!(sorted.comparisons <= pmerge::max_comparisons(5));
//! ```

mod adapter;
mod bound;
mod insert;
mod jacobsthal;
mod sequence;
mod sort;

pub use adapter::{Comparison, Run, run, sort_both};
pub use bound::max_comparisons;
pub use insert::binary_insert;
pub use jacobsthal::{insertion_order, jacobsthal};
pub use sequence::{Backend, BackendKind, Contiguous, Deque, Sequence};
pub use sort::{Sorted, sort, sort_by};
