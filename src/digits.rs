use std::fmt;

use anyhow::{bail, ensure, Result};

/// Decimal digits in `u64::MAX`.
pub const MAX_DIGITS: usize = 20;

const POW10: [u64; MAX_DIGITS] = precompute_powers();

/// Precompute 10^k for k from 0 to MAX_DIGITS-1
const fn precompute_powers() -> [u64; MAX_DIGITS] {
    let mut powers = [1; MAX_DIGITS];
    let mut i = 1;
    while i < MAX_DIGITS {
        powers[i] = powers[i - 1] * 10;
        i += 1;
    }
    powers
}

/// `10^i`; `i` must be below [`MAX_DIGITS`].
pub fn pow10(i: usize) -> u64 {
    POW10[i]
}

/// Decimal digits of a non-negative integer, most significant first.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Digits {
    digits: Vec<u8>,
}

impl Digits {
    pub fn from_u64(n: u64) -> Self {
        let mut digits = Vec::with_capacity(MAX_DIGITS);
        let mut rest = n;
        loop {
            digits.push((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        digits.reverse();
        Digits { digits }
    }

    /// Parse a decimal string, as a user would type `n`.
    ///
    /// Leading zeros are rejected, except for `"0"` itself.
    pub fn parse(s: &str) -> Result<Self> {
        ensure!(!s.is_empty(), "empty number");
        if let Some((pos, c)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            bail!("invalid digit {:?} at position {} in {:?}", c, pos, s);
        }
        ensure!(s.len() == 1 || !s.starts_with('0'), "leading zero in {:?}", s);
        ensure!(s.parse::<u64>().is_ok(), "{:?} does not fit in 64 bits", s);

        Ok(Digits {
            digits: s.bytes().map(|b| b - b'0').collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn digit(&self, i: usize) -> u8 {
        self.digits[i]
    }

    /// Integer formed by the first `k` digits; 0 for `k == 0`.
    pub fn prefix(&self, k: usize) -> u64 {
        self.digits[..k]
            .iter()
            .fold(0, |acc, &d| acc * 10 + d as u64)
    }

    pub fn value(&self) -> u64 {
        self.prefix(self.len())
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", (b'0' + d) as char)?;
        }
        Ok(())
    }
}
