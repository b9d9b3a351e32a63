use crate::sequence::Sequence;

/// Inserts `value` into the sorted prefix `seq[..bound]` and returns the
/// position it landed at.
///
/// Only positions below `bound` are compared against, so the search costs at
/// most `ceil(log2(bound + 1))` calls to `less`. The value goes after any
/// elements it compares equal to.
///
/// `less(a, b)` must return true when `a` orders strictly before `b`.
pub fn binary_insert<T, S, F>(seq: &mut S, value: T, bound: usize, mut less: F) -> usize
where
    S: Sequence<T>,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(bound <= seq.len(), "bound {bound} past end {}", seq.len());

    let (mut lo, mut hi) = (0usize, bound);
    while lo < hi {
        let mid = usize::midpoint(lo, hi);
        if less(&value, seq.get(mid)) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    seq.insert(lo, value);
    lo
}
