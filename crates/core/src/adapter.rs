use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::sequence::{Backend, Contiguous, Deque};
use crate::sort::sort;

/// One timed sort on a single backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<S> {
    pub sorted: S,
    pub comparisons: usize,
    /// Wall-clock time for copying the input into the backend and sorting it.
    pub elapsed: Duration,
}

/// The same input sorted once per backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T> {
    pub contiguous: Run<Vec<T>>,
    pub deque: Run<VecDeque<T>>,
}

impl<T: PartialEq> Comparison<T> {
    /// True when both backends produced the same sequence.
    #[must_use]
    pub fn agree(&self) -> bool {
        self.contiguous.sorted.iter().eq(self.deque.sorted.iter())
    }
}

/// Copies `values` into a fresh `B` container, sorts it and times the whole
/// thing.
#[must_use]
pub fn run<B, T>(values: &[T]) -> Run<B::Seq<T>>
where
    B: Backend,
    T: Ord + Clone,
{
    let start = Instant::now();
    let result = sort::<B, T>(values.to_vec());
    let elapsed = start.elapsed();

    debug!(
        backend = B::NAME,
        len = values.len(),
        comparisons = result.comparisons,
        elapsed_us = elapsed.as_secs_f64() * 1e6,
        "sorted"
    );

    Run {
        sorted: result.values,
        comparisons: result.comparisons,
        elapsed,
    }
}

/// Sorts independent copies of `values` on both backends.
#[must_use]
pub fn sort_both<T>(values: &[T]) -> Comparison<T>
where
    T: Ord + Clone,
{
    let comparison = Comparison {
        contiguous: run::<Contiguous, T>(values),
        deque: run::<Deque, T>(values),
    };
    debug_assert!(comparison.agree(), "backends disagree");
    comparison
}
