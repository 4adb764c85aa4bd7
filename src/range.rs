/// Number of multiples of `m` in `[from, to - 1]`.
///
/// `from` is rounded up and `to - 1` rounded down to a multiple of `m`;
/// an empty or inverted range yields 0.
pub fn multiples_in_range(from: u64, to: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be positive");

    if to == 0 {
        return 0;
    }

    let mut lower = (from / m) * m;
    if from % m != 0 {
        lower = match lower.checked_add(m) {
            Some(l) => l,
            // next multiple is past u64::MAX, so past `to - 1` as well
            None => return 0,
        };
    }

    let upper = ((to - 1) / m) * m;

    if lower > upper {
        return 0;
    }

    (upper - lower) / m + 1
}
