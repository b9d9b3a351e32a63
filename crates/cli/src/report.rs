use std::fmt::Display;
use std::time::Duration;

/// Renders `label` followed by the first `show` values, ending in `[...]`
/// when some were left out. `show == 0` prints everything.
pub fn sequence_line<'a, T, I>(label: &str, values: I, show: usize) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let limit = if show == 0 { usize::MAX } else { show };
    let mut line = String::from(label);
    let mut values = values.into_iter();
    for value in values.by_ref().take(limit) {
        line.push_str(&format!(" {value}"));
    }
    if values.next().is_some() {
        line.push_str(" [...]");
    }
    line
}

pub fn timing_line(len: usize, backend: &str, width: usize, elapsed: Duration) -> String {
    format!(
        "Time to process a range of {len} elements with {backend:<width$} : {:.5} ms",
        elapsed.as_secs_f64() * 1e3
    )
}

pub fn comparisons_line(backend: &str, width: usize, comparisons: usize, bound: usize) -> String {
    format!("Comparisons with {backend:<width$} : {comparisons} (worst case {bound})")
}
