mod input;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use pmerge::{BackendKind, Contiguous, Deque, max_comparisons, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::input::parse_numbers;
use crate::report::{comparisons_line, sequence_line, timing_line};

/// Sorts positive integers with merge-insertion sort on `Vec` and
/// `VecDeque`, and reports how long each took.
#[derive(Debug, Parser)]
#[command(name = "pmergeme", version)]
struct Cli {
    /// How many values the Before/After lines print (0 prints all)
    #[arg(long, default_value_t = 5)]
    show: usize,

    /// Which container backends to run
    #[arg(long, value_enum, default_value_t = BackendChoice::Both)]
    backend: BackendChoice,

    /// Also print comparison counts next to the worst-case bound
    #[arg(long)]
    comparisons: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Positive integers; one argument may hold several, separated by spaces
    #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
    numbers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendChoice {
    Vec,
    Deque,
    Both,
}

impl BackendChoice {
    fn kinds(self) -> &'static [BackendKind] {
        match self {
            BackendChoice::Vec => &[BackendKind::Contiguous],
            BackendChoice::Deque => &[BackendKind::Deque],
            BackendChoice::Both => &BackendKind::ALL,
        }
    }
}

struct Outcome {
    kind: BackendKind,
    sorted: Vec<u32>,
    comparisons: usize,
    elapsed: Duration,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run_cli(&cli, &mut io::stdout().lock());
    ExitCode::from(exit_status(result, &mut io::stderr().lock()))
}

/// Reports a failed run on `err` as `Error: <message>` and returns the
/// process exit status.
fn exit_status(result: anyhow::Result<()>, err: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            writeln!(err, "Error: {error:#}").ok();
            1
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_cli(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let numbers = parse_numbers(&cli.numbers).context("invalid input")?;
    info!(count = numbers.len(), backend = ?cli.backend, "parsed input");

    let outcomes: Vec<Outcome> = cli
        .backend
        .kinds()
        .iter()
        .map(|&kind| sort_on(kind, &numbers))
        .collect();
    ensure_agreement(&outcomes)?;

    if let Some(first) = outcomes.first() {
        writeln!(out, "{}", sequence_line("Before:", &numbers, cli.show))?;
        writeln!(out, "{}", sequence_line("After: ", &first.sorted, cli.show))?;
    }

    let width = outcomes
        .iter()
        .map(|outcome| outcome.kind.name().len())
        .max()
        .unwrap_or(0);
    for outcome in &outcomes {
        writeln!(
            out,
            "{}",
            timing_line(numbers.len(), outcome.kind.name(), width, outcome.elapsed)
        )?;
    }
    if cli.comparisons {
        let bound = max_comparisons(numbers.len());
        for outcome in &outcomes {
            writeln!(
                out,
                "{}",
                comparisons_line(outcome.kind.name(), width, outcome.comparisons, bound)
            )?;
        }
    }

    Ok(())
}

fn ensure_agreement(outcomes: &[Outcome]) -> anyhow::Result<()> {
    if let [first, rest @ ..] = outcomes {
        for other in rest {
            if other.sorted != first.sorted {
                bail!("{} and {} produced different orders", first.kind, other.kind);
            }
        }
        debug!(backends = outcomes.len(), "backends agree");
    }
    Ok(())
}

fn sort_on(kind: BackendKind, numbers: &[u32]) -> Outcome {
    match kind {
        BackendKind::Contiguous => {
            let result = run::<Contiguous, _>(numbers);
            Outcome {
                kind,
                sorted: result.sorted,
                comparisons: result.comparisons,
                elapsed: result.elapsed,
            }
        }
        BackendKind::Deque => {
            let result = run::<Deque, _>(numbers);
            Outcome {
                kind,
                sorted: result.sorted.into(),
                comparisons: result.comparisons,
                elapsed: result.elapsed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BackendChoice, Cli, Outcome, ensure_agreement, exit_status, run_cli, sort_on};
    use clap::{CommandFactory, Parser};
    use pmerge::BackendKind;
    use rstest::rstest;
    use std::time::Duration;

    fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
        let cli = Cli::parse_from(std::iter::once("pmergeme").chain(args.iter().copied()));
        let mut out = Vec::new();
        let result = run_cli(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn options_come_before_numbers() {
        let cli = Cli::parse_from(["pmergeme", "--show", "0", "--backend", "deque", "3", "-1"]);
        assert_eq!(cli.show, 0);
        assert_eq!(cli.backend, BackendChoice::Deque);
        assert_eq!(cli.numbers, vec!["3", "-1"]);
    }

    #[test]
    fn numbers_are_required() {
        assert!(Cli::try_parse_from(["pmergeme"]).is_err());
    }

    #[rstest]
    #[case(BackendChoice::Vec, 1)]
    #[case(BackendChoice::Deque, 1)]
    #[case(BackendChoice::Both, 2)]
    fn choice_selects_backends(#[case] choice: BackendChoice, #[case] expected: usize) {
        assert_eq!(choice.kinds().len(), expected);
    }

    #[rstest]
    #[case(BackendKind::Contiguous)]
    #[case(BackendKind::Deque)]
    fn every_backend_sorts(#[case] kind: BackendKind) {
        let outcome = sort_on(kind, &[3, 5, 9, 7, 4]);
        assert_eq!(outcome.sorted, vec![3, 4, 5, 7, 9]);
        assert_eq!(outcome.kind, kind);
    }

    #[rstest]
    #[case(&["3", "5", "9", "7", "4"], "Before: 3 5 9 7 4", "After:  3 4 5 7 9", &["Vec     ", "VecDeque"])]
    #[case(&["--show", "2", "3 5 9", "7 4"], "Before: 3 5 [...]", "After:  3 4 [...]", &["Vec     ", "VecDeque"])]
    #[case(&["--backend", "vec", "2", "1"], "Before: 2 1", "After:  1 2", &["Vec"])]
    #[case(&["--backend", "deque", "1"], "Before: 1", "After:  1", &["VecDeque"])]
    fn prints_before_after_and_timings(
        #[case] args: &[&str],
        #[case] before: &str,
        #[case] after: &str,
        #[case] backends: &[&str],
    ) {
        let (result, output) = run_args(args);
        assert!(result.is_ok());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2 + backends.len());
        assert_eq!(lines[0], before);
        assert_eq!(lines[1], after);
        for (line, backend) in lines[2..].iter().zip(backends) {
            assert!(line.starts_with("Time to process a range of "), "{line}");
            assert!(line.contains(&format!(" elements with {backend} : ")), "{line}");
            assert!(line.ends_with(" ms"), "{line}");
        }
    }

    #[test]
    fn comparisons_flag_adds_counts_and_bound() {
        let (result, output) = run_args(&["--comparisons", "3", "5", "9", "7", "4"]);
        assert!(result.is_ok());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[4].starts_with("Comparisons with Vec      : "), "{}", lines[4]);
        assert!(lines[5].starts_with("Comparisons with VecDeque : "), "{}", lines[5]);
        assert!(lines[4..].iter().all(|line| line.ends_with("(worst case 7)")));
    }

    #[rstest]
    #[case(&["3", "abc"], "Error: invalid input: `abc` is not an integer\n")]
    #[case(&["0"], "Error: invalid input: `0` is not a positive integer\n")]
    #[case(&["--", "-4"], "Error: invalid input: `-4` is not a positive integer\n")]
    #[case(&["4294967296"], "Error: invalid input: `4294967296` does not fit in 32 bits\n")]
    #[case(&["  "], "Error: invalid input: no numbers given\n")]
    fn bad_input_fails_with_error_on_stderr(#[case] args: &[&str], #[case] expected: &str) {
        let (result, output) = run_args(args);
        assert!(output.is_empty());
        let mut err = Vec::new();
        assert_eq!(exit_status(result, &mut err), 1);
        assert_eq!(String::from_utf8(err).unwrap(), expected);
    }

    #[test]
    fn success_exits_zero_silently() {
        let mut err = Vec::new();
        assert_eq!(exit_status(Ok(()), &mut err), 0);
        assert!(err.is_empty());
    }

    fn outcome(kind: BackendKind, sorted: Vec<u32>) -> Outcome {
        Outcome {
            kind,
            sorted,
            comparisons: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn disagreeing_backends_fail() {
        let outcomes = [
            outcome(BackendKind::Contiguous, vec![1, 2, 3]),
            outcome(BackendKind::Deque, vec![1, 3, 2]),
        ];
        let err = ensure_agreement(&outcomes).unwrap_err();
        assert_eq!(err.to_string(), "Vec and VecDeque produced different orders");
    }

    #[test]
    fn agreeing_backends_pass() {
        let outcomes = [
            outcome(BackendKind::Contiguous, vec![1, 2, 3]),
            outcome(BackendKind::Deque, vec![1, 2, 3]),
        ];
        assert!(ensure_agreement(&outcomes).is_ok());
        assert!(ensure_agreement(&[]).is_ok());
    }
}
