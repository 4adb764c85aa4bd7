use lexcount::{pow10, Digits, MAX_DIGITS};

fn check_parse(s: &str, value: u64) {
    let d = Digits::parse(s).unwrap();
    assert_eq!(d.value(), value);
    assert_eq!(d.len(), s.len());
    assert_eq!(d.to_string(), s);
    assert_eq!(d, Digits::from_u64(value));
}

fn check_bad(s: &str, msg: &str) {
    match Digits::parse(s) {
        Ok(d) => panic!("{:?} parsed as {}", s, d),
        Err(e) => {
            let e = e.to_string();
            if !e.contains(msg) {
                panic!("error for {:?} is {:?}, expected {:?}", s, e, msg);
            }
        }
    }
}

#[test]
fn test_parse() {
    check_parse("0", 0);
    check_parse("7", 7);
    check_parse("10", 10);
    check_parse("4321", 4321);
    check_parse("18446744073709551615", u64::MAX);

    check_bad("", "empty");
    check_bad("12x4", "invalid digit 'x' at position 2");
    check_bad("-5", "invalid digit");
    check_bad(" 5", "invalid digit");
    check_bad("1é", "invalid digit");
    check_bad("007", "leading zero");
    check_bad("18446744073709551616", "does not fit");
}

#[test]
fn test_prefixes() {
    let d = Digits::from_u64(4321);
    assert_eq!(d.len(), 4);
    assert_eq!(d.digit(0), 4);
    assert_eq!(d.digit(3), 1);
    assert_eq!(d.prefix(0), 0);
    assert_eq!(d.prefix(1), 4);
    assert_eq!(d.prefix(3), 432);
    assert_eq!(d.prefix(4), 4321);

    let d = Digits::from_u64(0);
    assert_eq!(d.len(), 1);
    assert!(!d.is_empty());
    assert_eq!(d.to_string(), "0");

    assert_eq!(Digits::from_u64(u64::MAX).len(), MAX_DIGITS);
}

#[test]
fn test_pow10() {
    assert_eq!(pow10(0), 1);
    assert_eq!(pow10(3), 1000);
    assert_eq!(pow10(MAX_DIGITS - 1), 10_000_000_000_000_000_000);
}
