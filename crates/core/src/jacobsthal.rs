/// Returns the Jacobsthal numbers `0, 1, 1, 3, 5, 11, 21, ...` up to and
/// including the first term that is at least `n`.
///
/// `jacobsthal(0)` is `[0]` and `jacobsthal(1)` is `[0, 1]`. When no term
/// reaching `n` fits in a `usize`, the sequence stops at the largest one that
/// does.
#[must_use]
pub fn jacobsthal(n: usize) -> Vec<usize> {
    let mut terms = vec![0usize];
    let (mut prev, mut curr) = (0usize, 1usize);
    while terms.last().is_some_and(|&last| last < n) {
        terms.push(curr);
        let Some(next) = prev.checked_mul(2).and_then(|twice| curr.checked_add(twice)) else {
            break;
        };
        prev = curr;
        curr = next;
    }
    terms
}

/// Returns indices into a pend list of length `count`, ordered for
/// insertion.
///
/// Pend index `i` stands for `b(i + 2)` in the usual 1-based notation, where
/// `b(1)` is the partner of the smallest chain element and goes in for free.
/// The Jacobsthal terms from `J(2)` on (1, 3, 5, 11, ...) mark the group
/// boundaries: group `(J(k), J(k + 1)]` is emitted from its top down, so each
/// binary search in a group runs over at most `2^k - 1` elements.
/// Indices past the last supplied term are appended in descending order.
#[must_use]
pub fn insertion_order(jacobsthal: &[usize], count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(count);
    if count == 0 {
        return order;
    }

    let last_b = count + 1;
    let mut covered = 1usize;
    for bounds in jacobsthal.get(2..).unwrap_or_default().windows(2) {
        let top = bounds[1].min(last_b);
        if top <= covered {
            continue;
        }
        for b in (covered + 1..=top).rev() {
            order.push(b - 2);
        }
        covered = top;
        if covered == last_b {
            break;
        }
    }

    for b in (covered + 1..=last_b).rev() {
        order.push(b - 2);
    }

    debug_assert_eq!(order.len(), count);
    order
}
