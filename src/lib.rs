//! Counting integers below `n` that sort before `n` as decimal strings and
//! are divisible by `m`.
//!
//! Two counters answer the same question:
//!
//! - [`brute_count`] walks every multiple of `m` below `n` and compares
//!   decimal strings byte by byte.
//! - [`formula_count`] runs a digit-position DP over the decimal digits of
//!   `n`, one [`multiples_in_range`] per digit.
//!
//! [`Sweep`] checks the two against each other over a finite domain.
//!
//! Note that the ordering is lexicographic, not numeric: `"10" < "9"`, so
//! `brute_count(100, 1) == 2` (only `1` and `10` sort before `100`).

mod brute;
mod digits;
mod formula;
mod range;
mod verify;

pub use brute::{brute_count, brute_count_all, sorts_before};
pub use digits::{pow10, Digits, MAX_DIGITS};
pub use formula::{formula_count, formula_count_digits, formula_count_str, prefix_table};
pub use range::multiples_in_range;
pub use verify::{check_pair, Mismatch, Sweep, SweepReport, DEFAULT_MAX_N};
