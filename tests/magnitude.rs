//! 접두어 변환/역변환 회귀 테스트.
use num_bigint::BigInt;
use num_rational::BigRational;

use humanize_toolbox::{HumanizeError, Humanizer, LanguageRegistry};

fn humanizer(code: &str) -> Humanizer {
    Humanizer::new(&LanguageRegistry::new(), code).unwrap()
}

fn int(value: BigInt) -> BigRational {
    BigRational::from_integer(value)
}

#[test]
fn yotta_is_exact() {
    let h = humanizer("en");
    let parsed = h.parse_si_prefix("5yotta").unwrap();
    assert_eq!(parsed, int(BigInt::from(5) * BigInt::from(10).pow(24)));
}

#[test]
fn yobi_is_exact() {
    // 736 * 2^80 은 f64 로는 정확히 표현할 수 없는 크기다.
    let h = humanizer("en");
    let parsed = h.parse_bit_prefix("736 Yi").unwrap();
    assert_eq!(parsed, int(BigInt::from(736) << 80));
    assert_eq!(h.parse_prefix("736 Yi").unwrap(), parsed);
}

#[test]
fn comma_decimal_and_long_names() {
    let h = humanizer("en");
    assert_eq!(h.parse_si_prefix("2,5 k").unwrap(), int(BigInt::from(2500)));
    assert_eq!(h.parse_si_prefix("13.5 kilo").unwrap(), int(BigInt::from(13500)));
    assert_eq!(h.parse_bit_prefix("1.5 mebi").unwrap(), int(BigInt::from(1_572_864)));
}

#[test]
fn negative_values_keep_their_sign() {
    let h = humanizer("en");
    let text = h.si_prefix(-5000.0, 1, 1000, true);
    assert_eq!(text, "-5000");
    assert_eq!(h.parse_si_prefix(&text).unwrap(), int(BigInt::from(-5000)));
}

#[test]
fn unparsable_input_is_no_match() {
    let h = humanizer("en");
    for input in ["abc", "", "kilo", "1e5"] {
        assert!(
            matches!(h.parse_si_prefix(input), Err(HumanizeError::NoMatch(_))),
            "{input:?}"
        );
    }
}

#[test]
fn scaling_defaults() {
    let h = humanizer("en");
    assert_eq!(h.si_prefix_fast(2900.0), "2.9k");
    assert_eq!(h.si_prefix_fast_int(23_000_000), "23M");
    assert_eq!(h.si_prefix(23_000_000.0, 2, 1000, false), "23 mega");
    assert_eq!(h.bit_prefix(1_572_864.0, 2, 1024, false), "1.5 mebi");
    assert_eq!(h.si_prefix_fast(500.0), "500");
}

#[test]
fn polish_long_names() {
    let h = humanizer("pl");
    assert_eq!(h.si_prefix(5_300_000.0, 1, 1000, false), "5.3 mega");
    assert_eq!(h.parse_si_prefix("2 jotta").unwrap(), int(BigInt::from(2) * BigInt::from(10).pow(24)));
}
