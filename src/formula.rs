use anyhow::Result;

use crate::{
    digits::{pow10, Digits},
    range::multiples_in_range,
};

const DEBUG: bool = false;
macro_rules! debug {
    ($($arg:tt)*) => {
        if DEBUG {
            eprint!("  ");
            eprintln!($($arg)*);
        }
    };
}

/// Per-digit running totals of the digit-position DP.
///
/// Entry `i` counts the multiples of `m` that sort before the first `i + 1`
/// digits of `n` and have at most `i + 1` digits, including the proper
/// prefixes of `n` themselves. The last entry is the answer.
pub fn prefix_table(digits: &Digits, m: u64) -> Vec<u64> {
    assert!(m > 0, "modulus must be positive");

    let length = digits.len();
    let mut dp = vec![0; length];

    // single-digit numbers below the leading digit
    dp[0] = multiples_in_range(1, digits.digit(0) as u64, m);
    debug!("dp[0] = {} (leading digit {})", dp[0], digits.digit(0));

    let mut to = digits.digit(0) as u64;
    for i in 1..length {
        let from = pow10(i);
        let before = to;
        to = to * 10 + digits.digit(i) as u64;

        dp[i] = dp[i - 1] + multiples_in_range(from, to, m);
        // the shorter prefix is itself a proper prefix of n, hence smaller
        if before % m == 0 {
            dp[i] += 1;
        }
        debug!(
            "dp[{}] = {} (range [{}, {}), prefix {})",
            i, dp[i], from, to, before
        );
    }

    dp
}

/// Count `i` in `[1, n - 1]` with `decimal(i) < decimal(n)` and `i % m == 0`
/// in `O(digits of n)`.
///
/// Agrees with [`crate::brute_count`] for every `n`. `m` must be positive.
pub fn formula_count(n: u64, m: u64) -> u64 {
    formula_count_digits(&Digits::from_u64(n), m)
}

pub fn formula_count_digits(digits: &Digits, m: u64) -> u64 {
    let dp = prefix_table(digits, m);
    dp[dp.len() - 1]
}

/// [`formula_count`] for `n` given as a decimal string.
pub fn formula_count_str(n: &str, m: u64) -> Result<u64> {
    let digits = Digits::parse(n)?;
    Ok(formula_count_digits(&digits, m))
}
