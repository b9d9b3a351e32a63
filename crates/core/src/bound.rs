/// Returns the worst-case number of comparisons merge-insertion sort needs
/// for `n` elements: `F(n) = sum of ceil(log2(3k / 4)) for k in 1..=n`.
///
/// No run of [`sort`](crate::sort) on `n` elements exceeds this.
#[must_use]
pub fn max_comparisons(n: usize) -> usize {
    // ceil(log2(3k / 4)) is the smallest m with 2^(m + 2) >= 3k.
    (1..=n).map(|k| ceil_log2(3 * k) - 2).sum()
}

fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        return 0;
    }
    (value - 1).ilog2() as usize + 1
}
