use std::fmt;

use crate::{brute::brute_count, formula::formula_count};

const DEBUG: bool = false;
macro_rules! debug {
    ($($arg:tt)*) => {
        if DEBUG {
            eprint!("  ");
            eprintln!($($arg)*);
        }
    };
}

/// Upper bound on `n` for the default sweep.
pub const DEFAULT_MAX_N: u64 = 99;

/// A pair where the two counters disagree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mismatch {
    pub n: u64,
    pub m: u64,
    pub brute: u64,
    pub formula: u64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed n = {} m = {} f(n, m) = {} my(n, m) = {}",
            self.n, self.m, self.brute, self.formula
        )
    }
}

/// Run both counters on `(n, m)`.
pub fn check_pair(n: u64, m: u64) -> Option<Mismatch> {
    let brute = brute_count(n, m);
    let formula = formula_count(n, m);
    if brute == formula {
        None
    } else {
        debug!("mismatch at n={} m={}: {} vs {}", n, m, brute, formula);
        Some(Mismatch {
            n,
            m,
            brute,
            formula,
        })
    }
}

/// Exhaustive check over `n` in `1..=max_n` and `m` in `1..=n`.
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    pub max_n: u64,
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep {
            max_n: DEFAULT_MAX_N,
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct SweepReport {
    /// Number of `(n, m)` pairs evaluated.
    pub checked: u64,
    pub mismatches: Vec<Mismatch>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl Sweep {
    pub fn new(max_n: u64) -> Self {
        Sweep { max_n }
    }

    /// Number of pairs the sweep visits, saturating at `u64::MAX`.
    pub fn num_pairs(&self) -> u64 {
        let n = self.max_n as u128;
        u64::try_from(n * (n + 1) / 2).unwrap_or(u64::MAX)
    }

    /// Run the sweep, calling `on_mismatch` as soon as each mismatch is found.
    pub fn run_with(&self, mut on_mismatch: impl FnMut(&Mismatch)) -> SweepReport {
        let mut report = SweepReport::default();
        for n in 1..=self.max_n {
            for m in 1..=n {
                report.checked += 1;
                if let Some(mm) = check_pair(n, m) {
                    on_mismatch(&mm);
                    report.mismatches.push(mm);
                }
            }
        }
        report
    }

    pub fn run(&self) -> SweepReport {
        self.run_with(|_| {})
    }
}
