use tracing::trace;

use crate::insert::binary_insert;
use crate::jacobsthal::{insertion_order, jacobsthal};
use crate::sequence::{Backend, Sequence};

/// Output of one sort: the ordered values and how many times the comparator
/// was called to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorted<S> {
    pub values: S,
    pub comparisons: usize,
}

/// Sorts `values` in non-decreasing order with the Ford-Johnson
/// merge-insertion algorithm, running on backend `B`.
///
/// Debug builds also check every merged chain with `<=`; those checks are
/// not part of [`Sorted::comparisons`].
#[must_use]
pub fn sort<B, T>(values: Vec<T>) -> Sorted<B::Seq<T>>
where
    B: Backend,
    T: Ord,
{
    let in_order: fn(&T, &T) -> bool = |a, b| a <= b;
    merge_insertion::<B, T, _>(values, |a, b| a < b, Some(in_order))
}

/// Like [`sort`], ordering by `less` instead of `Ord`.
///
/// `less` is called exactly [`Sorted::comparisons`] times, in every build
/// profile.
///
/// # Comparator contract
///
/// `less(a, b)` must define a strict weak ordering over the values
/// (irreflexive, transitive, and consistent). Results are unspecified if
/// this contract is violated.
///
/// # Panics
///
/// Cannot panic: every input position appears exactly once in the sorted
/// index chain, so each value is moved out exactly once.
#[must_use]
pub fn sort_by<B, T, F>(values: Vec<T>, less: F) -> Sorted<B::Seq<T>>
where
    B: Backend,
    F: FnMut(&T, &T) -> bool,
{
    merge_insertion::<B, T, F>(values, less, None)
}

fn merge_insertion<B, T, F>(
    values: Vec<T>,
    less: F,
    in_order: Option<fn(&T, &T) -> bool>,
) -> Sorted<B::Seq<T>>
where
    B: Backend,
    F: FnMut(&T, &T) -> bool,
{
    let n = values.len();
    let mut sorter = MergeInsertion {
        items: &values,
        less,
        in_order,
        comparisons: 0,
    };
    let ids: B::Seq<usize> = (0..n).collect();
    let order = sorter.sort(ids);
    let comparisons = sorter.comparisons;

    let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
    let values = order
        .into_iter()
        .map(|i| slots[i].take().expect("sorted ids are a permutation"))
        .collect();

    Sorted {
        values,
        comparisons,
    }
}

/// Sorts indices into `items`, so pairs keep their identity through the
/// recursion no matter how the values compare.
struct MergeInsertion<'a, T, F> {
    items: &'a [T],
    less: F,
    /// Uncounted order check for debug assertions; never the caller's `less`.
    in_order: Option<fn(&T, &T) -> bool>,
    comparisons: usize,
}

impl<T, F> MergeInsertion<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn less(&mut self, a: usize, b: usize) -> bool {
        self.comparisons += 1;
        (self.less)(&self.items[a], &self.items[b])
    }

    fn is_sorted<S: Sequence<usize>>(&self, chain: &S) -> bool {
        let Some(in_order) = self.in_order else {
            return true;
        };
        (1..chain.len()).all(|i| {
            let (prev, next) = (*chain.get(i - 1), *chain.get(i));
            in_order(&self.items[prev], &self.items[next])
        })
    }

    fn sort<S: Sequence<usize>>(&mut self, ids: S) -> S {
        let n = ids.len();
        if n <= 1 {
            return ids;
        }

        // Pair up and compare. The larger of each pair goes into the
        // recursive step; the smaller waits in the pend list and later only
        // has to be searched for below its partner.
        let num_pairs = n / 2;
        let max_id = (0..n).map(|i| *ids.get(i)).max().unwrap_or(0);
        let mut mains = S::with_capacity(num_pairs);
        let mut partner_of = vec![0usize; max_id + 1];

        for i in 0..num_pairs {
            let (a, b) = (*ids.get(2 * i), *ids.get(2 * i + 1));
            if self.less(a, b) {
                mains.push_back(b);
                partner_of[b] = a;
            } else {
                mains.push_back(a);
                partner_of[a] = b;
            }
        }
        let straggler = (n % 2 == 1).then(|| *ids.get(n - 1));
        trace!(
            len = n,
            pairs = num_pairs,
            straggler = straggler.is_some(),
            "merge-insertion level"
        );

        let sorted_mains = self.sort(mains);
        debug_assert!(self.is_sorted(&sorted_mains), "main chain out of order");

        // The partner of the smallest main is no larger than anything in the
        // chain, so it goes at the front without a comparison.
        let mut chain = S::with_capacity(n);
        chain.push_back(partner_of[*sorted_mains.get(0)]);

        // pend[p] must land before the chain position in main_pos[p]; the
        // straggler has no partner and may land anywhere.
        let mut pend = Vec::with_capacity(num_pairs);
        let mut main_pos: Vec<Option<usize>> = Vec::with_capacity(num_pairs);
        for (i, main) in sorted_mains.into_iter().enumerate() {
            chain.push_back(main);
            if i > 0 {
                pend.push(partner_of[main]);
                main_pos.push(Some(i + 1));
            }
        }
        if let Some(s) = straggler {
            pend.push(s);
            main_pos.push(None);
        }

        for p in insertion_order(&jacobsthal(pend.len() + 1), pend.len()) {
            let bound = main_pos[p].unwrap_or(chain.len());
            let pos = binary_insert(&mut chain, pend[p], bound, |a, b| self.less(*a, *b));
            for slot in main_pos.iter_mut().flatten() {
                if *slot >= pos {
                    *slot += 1;
                }
            }
        }

        debug_assert!(self.is_sorted(&chain), "merged chain out of order");
        chain
    }
}
