use thiserror::Error;

/// Why a command-line token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no numbers given")]
    Empty,
    #[error("`{token}` is not an integer")]
    NotANumber { token: String },
    #[error("`{token}` is not a positive integer")]
    NotPositive { token: String },
    #[error("`{token}` does not fit in {} bits", u32::BITS)]
    OutOfRange { token: String },
}

/// Parses every whitespace-separated token in `args` as a positive integer.
///
/// An argument may hold several numbers, so both `pmergeme 3 5 9` and
/// `pmergeme "3 5 9"` are accepted.
///
/// # Errors
///
/// Returns the first offending token, or [`InputError::Empty`] when there is
/// nothing to parse.
pub fn parse_numbers<S: AsRef<str>>(args: &[S]) -> Result<Vec<u32>, InputError> {
    let numbers = args
        .iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(numbers)
}

fn parse_number(token: &str) -> Result<u32, InputError> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber {
            token: token.to_string(),
        });
    }
    if negative {
        return Err(InputError::NotPositive {
            token: token.to_string(),
        });
    }

    // Only overflow is left once the digits are checked.
    let value: u32 = digits.parse().map_err(|_| InputError::OutOfRange {
        token: token.to_string(),
    })?;
    if value == 0 {
        return Err(InputError::NotPositive {
            token: token.to_string(),
        });
    }
    Ok(value)
}
