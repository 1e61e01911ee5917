//! 로케일에 맞춘 숫자 표시.

use num_format::{Locale, ToFormattedString};

use crate::number::trim_zeroes;

/// 숫자 표시를 맡는 외부 협력자. 최대 소수 자릿수만 받는다.
pub trait NumberFormatter: Send + Sync + std::fmt::Debug {
    fn format_decimal(&self, value: f64, max_fraction_digits: usize) -> String;
}

/// `num-format` 로케일로 자릿수 묶음과 소수점 기호를 고른다.
#[derive(Debug, Clone, Copy)]
pub struct LocaleNumberFormatter {
    locale: Locale,
}

impl LocaleNumberFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl NumberFormatter for LocaleNumberFormatter {
    fn format_decimal(&self, value: f64, max_fraction_digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let rounded = format!("{:.*}", max_fraction_digits, value.abs());
        let rounded = trim_zeroes(&rounded);
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded, ""));

        // u128 를 넘는 정수부는 묶음 없이 그대로 둔다.
        let grouped = int_part
            .parse::<u128>()
            .map(|n| n.to_formatted_string(&self.locale))
            .unwrap_or_else(|_| int_part.to_string());

        let negative = value < 0.0 && rounded.bytes().any(|b| b != b'0' && b != b'.');
        let mut out = String::with_capacity(grouped.len() + frac_part.len() + 4);
        if negative {
            out.push_str(self.locale.minus_sign());
        }
        out.push_str(&grouped);
        if !frac_part.is_empty() {
            out.push_str(self.locale.decimal());
            out.push_str(frac_part);
        }
        out
    }
}
