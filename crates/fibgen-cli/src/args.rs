use std::num::IntErrorKind;

use clap::Parser;
use tracing::debug;

/// Count used when none is given or it cannot be parsed.
pub const DEFAULT_COUNT: i64 = 10;

/// Command-line arguments.
///
/// Any single non-integer `COUNT` falls back to [`DEFAULT_COUNT`], except the
/// tokens clap reserves: `-h`/`--help` and `-V`/`--version` print help or
/// version and exit, and `-v`/`--verbose` enables debug logging.
#[derive(Parser, Debug)]
#[command(name = "fibgen")]
#[command(about = "Print the first N Fibonacci numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// How many terms to print (falls back to 10 if not an integer)
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn count(&self) -> i64 {
        resolve_count(self.count.as_deref())
    }
}

/// Parses the raw argument, silently falling back to [`DEFAULT_COUNT`].
///
/// Negative numbers are returned as-is; rejecting them is the generator's job.
/// Integers outside the `i64` range saturate, so they still reach the
/// generator and fail there instead of falling back.
pub fn resolve_count(raw: Option<&str>) -> i64 {
    match raw {
        None => DEFAULT_COUNT,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(count) => count,
            Err(e) => match e.kind() {
                IntErrorKind::NegOverflow => i64::MIN,
                IntErrorKind::PosOverflow => i64::MAX,
                _ => {
                    debug!(raw, error = %e, "unparsable count, using default");
                    DEFAULT_COUNT
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing() {
        assert_eq!(resolve_count(None), 10);
    }

    #[test]
    fn test_resolve_numeric() {
        assert_eq!(resolve_count(Some("7")), 7);
        assert_eq!(resolve_count(Some("0")), 0);
    }

    #[test]
    fn test_resolve_garbage_falls_back() {
        assert_eq!(resolve_count(Some("abc")), DEFAULT_COUNT);
        assert_eq!(resolve_count(Some("3.5")), DEFAULT_COUNT);
        assert_eq!(resolve_count(Some("")), DEFAULT_COUNT);
    }

    #[test]
    fn test_resolve_out_of_range_saturates() {
        assert_eq!(resolve_count(Some("-99999999999999999999")), i64::MIN);
        assert_eq!(resolve_count(Some("99999999999999999999")), i64::MAX);
    }

    #[test]
    fn test_resolve_out_of_range_reaches_generator_errors() {
        assert!(matches!(
            fibonacci_rs::generate(resolve_count(Some("-99999999999999999999"))),
            Err(fibonacci_rs::FibonacciError::InvalidArgument { .. })
        ));
        assert!(matches!(
            fibonacci_rs::generate(resolve_count(Some("99999999999999999999"))),
            Err(fibonacci_rs::FibonacciError::Overflow { .. })
        ));
    }

    #[test]
    fn test_resolve_negative_passes_through() {
        assert_eq!(resolve_count(Some("-5")), -5);
    }

    #[test]
    fn test_cli_parses_negative_as_count() {
        let cli = Cli::try_parse_from(["fibgen", "-5"]).unwrap();
        assert_eq!(cli.count.as_deref(), Some("-5"));
        assert_eq!(cli.count(), -5);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["fibgen"]).unwrap();
        assert_eq!(cli.count, None);
        assert_eq!(cli.count(), DEFAULT_COUNT);
    }

    #[test]
    fn test_cli_reserved_flags_are_not_counts() {
        let help = Cli::try_parse_from(["fibgen", "-h"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        let version = Cli::try_parse_from(["fibgen", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["fibgen", "--verbose", "3"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.count(), 3);
    }
}
