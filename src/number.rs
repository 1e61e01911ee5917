//! 정확한 수 계산과 숫자 문자열 정리를 위한 공용 도우미.

use std::num::NonZeroU32;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// 소수점이 있는 경우에만 끝의 0과 남는 소수점을 제거한다.
///
/// `"3.30000"` → `"3.3"`, `"345."` → `"345"`, `"7seven"` → 그대로.
pub fn trim_zeroes(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

/// `base^exp` 를 제곱 반복법으로 정확하게 계산한다.
pub fn integer_pow(base: &BigInt, exp: u32) -> BigInt {
    let mut result = BigInt::one();
    let mut square = base.clone();
    let mut rest = exp;
    while rest > 0 {
        if rest & 1 == 1 {
            result *= &square;
        }
        rest >>= 1;
        if rest > 0 {
            square = &square * &square;
        }
    }
    result
}

/// 유리수 거듭제곱. 음의 지수는 역수로 돌려준다.
///
/// 밑이 0이 아니므로 역수는 항상 정의된다.
pub fn exact_pow(base: NonZeroU32, exp: i32) -> BigRational {
    let magnitude = integer_pow(&BigInt::from(base.get()), exp.unsigned_abs());
    if exp < 0 {
        BigRational::new(BigInt::one(), magnitude)
    } else {
        BigRational::from_integer(magnitude)
    }
}

/// 정수부/소수부 숫자열을 손실 없이 유리수로 바꾼다.
///
/// 두 문자열 모두 ASCII 숫자만 담고 있어야 하며, 빈 문자열은 0으로 본다.
pub fn parse_decimal_literal(int_digits: &str, frac_digits: &str) -> Option<BigRational> {
    let int_part = parse_digits(int_digits)?;
    if frac_digits.is_empty() {
        return Some(BigRational::from_integer(int_part));
    }
    let frac_part = parse_digits(frac_digits)?;
    let scale = integer_pow(&BigInt::from(10u32), u32::try_from(frac_digits.len()).ok()?);
    let numer = int_part * &scale + frac_part;
    Some(BigRational::new(numer, scale))
}

fn parse_digits(digits: &str) -> Option<BigInt> {
    if digits.is_empty() {
        return Some(BigInt::zero());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), 10)
}

/// 소수점 이하 `decimals` 자리로 고정 포맷한 뒤 끝의 0을 정리한다.
pub fn format_trimmed(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    trim_zeroes(&formatted).to_string()
}
