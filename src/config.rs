//! Run configuration and command-line duration decoding

use std::time::Duration;

/// Size of one block in bytes (2^30, one gigabyte)
pub const BLOCK_BYTES: usize = 1 << 30;

/// Number of blocks a command-line run requests
pub const DEFAULT_BLOCK_COUNT: usize = 29;

/// Parameters of one pressure run
///
/// The command-line tool always runs with [`BLOCK_BYTES`]-sized blocks and
/// [`DEFAULT_BLOCK_COUNT`] of them. The struct exists so that library callers
/// and tests can pick sizes that do not starve the machine they run on.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalloonConfig {
    /// Size of each allocated block, in bytes
    pub block_bytes: usize,

    /// Number of blocks to request
    pub block_count: usize,

    /// How long the allocated blocks are held before release
    pub hold_time: Duration,
}
//
impl BalloonConfig {
    /// Standard run configuration with a caller-chosen hold duration
    pub fn with_hold_time(hold_time: Duration) -> Self {
        Self {
            block_bytes: BLOCK_BYTES,
            block_count: DEFAULT_BLOCK_COUNT,
            hold_time,
        }
    }
}

/// Decode the `<run_time_seconds>` command-line argument
///
/// This mirrors the C `atoi` call that historical versions of the tool used:
/// leading whitespace and an optional sign are skipped, leading decimal digits
/// are consumed, and anything after them is ignored. There is no error path.
/// Junk decodes to zero seconds, negative values clamp to zero (the hold
/// duration is non-negative) and oversized values saturate.
///
pub fn parse_run_time(arg: &str) -> u64 {
    let trimmed = arg.trim_start();
    let (negative, digits) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (trimmed.starts_with('-'), rest),
        None => (false, trimmed),
    };

    let mut seconds = 0u64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        seconds = seconds.saturating_mul(10).saturating_add(u64::from(digit));
    }
    if negative {
        0
    } else {
        seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_digits() {
        assert_eq!(parse_run_time("0"), 0);
        assert_eq!(parse_run_time("29"), 29);
        assert_eq!(parse_run_time("007"), 7);
    }

    #[test]
    fn atoi_oddities() {
        assert_eq!(parse_run_time(""), 0);
        assert_eq!(parse_run_time("soon"), 0);
        assert_eq!(parse_run_time("  42"), 42);
        assert_eq!(parse_run_time("+15"), 15);
        assert_eq!(parse_run_time("-15"), 0);
        assert_eq!(parse_run_time("12 monkeys"), 12);
        assert_eq!(parse_run_time("3.5"), 3);
        assert_eq!(parse_run_time("+"), 0);
        assert_eq!(parse_run_time("99999999999999999999999999"), u64::MAX);
    }

    proptest! {
        #[test]
        fn decodes_any_second_count(seconds: u64) {
            prop_assert_eq!(parse_run_time(&seconds.to_string()), seconds);
        }

        #[test]
        fn ignores_trailing_junk(seconds: u64, junk in "[^0-9+-].*") {
            prop_assert_eq!(parse_run_time(&format!("{seconds}{junk}")), seconds);
        }

        #[test]
        fn never_fails(arg in ".*") {
            parse_run_time(&arg);
        }
    }
}
