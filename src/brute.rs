use std::fmt::Write;

/// Byte-wise comparison of the decimal strings of `a` and `b`.
///
/// This is string order, not numeric order: `sorts_before(10, 9)` holds.
pub fn sorts_before(a: u64, b: u64) -> bool {
    a.to_string() < b.to_string()
}

/// Count `i` in `[1, n - 1]` with `decimal(i) < decimal(n)` and `i % m == 0`.
///
/// Visits every multiple of `m` below `n`, so this is `O(n / m)` string
/// comparisons. `m` must be positive.
pub fn brute_count(n: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be positive");

    let key = n.to_string();
    let mut buf = String::with_capacity(key.len());
    let mut cnt = 0;

    let mut i = m;
    while i < n {
        buf.clear();
        write!(buf, "{}", i).unwrap();
        if buf.as_str() < key.as_str() {
            cnt += 1;
        }
        i = match i.checked_add(m) {
            Some(next) => next,
            None => break,
        };
    }

    cnt
}

/// [`brute_count`] with `m = 1`.
pub fn brute_count_all(n: u64) -> u64 {
    brute_count(n, 1)
}
