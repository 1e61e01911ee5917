use std::cmp::Ordering;
use std::sync::Arc;

use tracing::trace;

use crate::number::format_trimmed;
use crate::units::{MagnitudeTable, PrefixDef, ScaleFamily};

/// 접두어를 적용하지 않는 구간 계산에 쓰는 최소 임계값.
const MIN_THRESHOLD: i64 = 10;

/// 값에 알맞은 접두어를 골라 붙인다.
#[derive(Debug, Clone)]
pub struct MagnitudeScaler {
    table: Arc<MagnitudeTable>,
}

impl MagnitudeScaler {
    pub fn new(table: Arc<MagnitudeTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &MagnitudeTable {
        &self.table
    }

    /// 값을 접두어로 환산한 문자열을 만든다.
    ///
    /// - `decimals`: 환산 값의 소수 자릿수 (끝의 0은 제거)
    /// - `threshold`: 이 값 이하, `10/threshold` 이상이면 접두어 없이 그대로 쓴다.
    ///   10 미만은 10으로 올린다.
    /// - `short`: 짧은 기호(`k`) 또는 공백 + 긴 이름(` kilo`)
    pub fn scale(&self, value: f64, decimals: usize, threshold: i64, short: bool) -> String {
        let threshold = threshold.max(MIN_THRESHOLD) as f64;
        if value <= threshold && value >= MIN_THRESHOLD as f64 / threshold {
            return format_trimmed(value, decimals);
        }
        let Some(prefix) = self.select(value) else {
            trace!(value, "no prefix below value, formatting unscaled");
            return format_trimmed(value, decimals);
        };
        trace!(value, prefix = prefix.short, power = prefix.power, "prefix selected");

        let converted = format_trimmed(value / prefix.approx, decimals);
        if short {
            format!("{converted}{}", prefix.short)
        } else {
            format!("{converted} {}", prefix.long)
        }
    }

    /// 근사 배율이 값보다 작은 첫 접두어. 표는 내림차순이다.
    pub fn select(&self, value: f64) -> Option<&PrefixDef> {
        let prefixes = self.table.prefixes();
        // NaN 과의 비교는 None 이므로 어떤 접두어도 고르지 않는다.
        let idx = prefixes
            .partition_point(|p| p.approx.partial_cmp(&value) != Some(Ordering::Less));
        prefixes.get(idx)
    }

    /// 계열별 기본 설정으로 짧게 환산한다.
    /// SI: 소수 1자리, 임계값 1000. bit: 소수 2자리, 임계값 1024.
    pub fn scale_fast(&self, value: f64) -> String {
        match self.table.family() {
            ScaleFamily::Decimal => self.scale(value, 1, 1000, true),
            ScaleFamily::Binary => self.scale(value, 2, 1024, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::load_magnitude_table;

    fn si() -> MagnitudeScaler {
        MagnitudeScaler::new(Arc::new(load_magnitude_table(ScaleFamily::Decimal)))
    }

    fn bit() -> MagnitudeScaler {
        MagnitudeScaler::new(Arc::new(load_magnitude_table(ScaleFamily::Binary)))
    }

    #[test]
    fn si_prefix_cases() {
        let s = si();
        let cases = [
            ("2.9k", s.scale(2854.0, 1, 1000, true)),
            ("23 mega", s.scale(22_843_853.0, 0, 1000, false)),
            ("1.44M", s.scale(1_440_000.0, 2, 1000, true)),
            ("5.3µ", s.scale(0.00000534, 1, 100, true)),
            ("2345", s.scale(2345.0, 1, 10000, true)),
            ("1Y", s.scale(1_000_000_000_001_000_000_000_000.0, 1, 1000, true)),
            // 너무 낮은 임계값은 10으로 올린다.
            ("1", s.scale(1.0, 1, 1, true)),
        ];
        for (expected, actual) in cases {
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn si_fast_cases() {
        let s = si();
        assert_eq!(s.scale_fast(174_512.0), "174.5k");
        assert_eq!(s.scale_fast(28_000_000.0), "28M");
        assert_eq!(s.scale_fast(0.005123), "5.1m");
        assert_eq!(s.scale_fast(175.0), "175");
        assert_eq!(s.scale_fast(1024.0), "1k");
        assert_eq!(s.scale_fast(2000.0), "2k");
    }

    #[test]
    fn bit_fast_cases() {
        let b = bit();
        assert_eq!(b.scale_fast(2867.2), "2.8Ki");
        assert_eq!(b.scale_fast(1024.0), "1024");
        assert_eq!(b.scale_fast(1_572_864.0), "1.5Mi");
        assert_eq!(b.scale(1_572_864.0, 1, 1024, false), "1.5 mebi");
    }

    #[test]
    fn values_below_smallest_prefix_stay_unscaled() {
        let s = si();
        assert_eq!(s.scale(1e-30, 2, 1000, true), "0");
        assert_eq!(s.scale(0.0, 2, 1000, true), "0");
        assert_eq!(s.scale(-5000.0, 1, 1000, true), "-5000");
    }

    #[test]
    fn nan_selects_no_prefix() {
        let s = si();
        assert!(s.select(f64::NAN).is_none());
        assert_eq!(s.select(2900.0).map(|p| p.short), Some("k"));
        assert_eq!(s.select(1000.0).map(|p| p.short), Some("h"));
    }
}
