use std::sync::Arc;
use std::time::Duration;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use regex::Regex;
use tracing::trace;

use crate::error::{HumanizeError, HumanizeResult};
use crate::number::parse_decimal_literal;
use crate::units::TimeTable;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// 자유 문장에서 `<숫자> <단위>` 를 모두 찾아 합한다.
#[derive(Debug, Clone)]
pub struct DurationParser {
    table: Arc<TimeTable>,
    pattern: Regex,
}

impl DurationParser {
    pub fn new(table: Arc<TimeTable>) -> HumanizeResult<Self> {
        let mut units: Vec<&str> = table.units.keys().map(String::as_str).collect();
        units.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternatives = units
            .iter()
            .map(|u| regex::escape(u))
            .collect::<Vec<_>>()
            .join("|");
        // 숫자, 선택적 소수점(. 또는 ,), 선택적 소수부, 공백, 단위 이름(앞부분 일치)
        let pattern = Regex::new(&format!(r"([0-9]+)[.,]?([0-9]*?) ({alternatives})"))?;
        Ok(Self { table, pattern })
    }

    /// 예: `"2 days and 5 hours"` → 2일 5시간. 같은 단위가 반복되면 모두 더한다.
    pub fn parse(&self, input: &str) -> HumanizeResult<Duration> {
        let mut total = Duration::ZERO;
        let mut matched = 0usize;

        for caps in self.pattern.captures_iter(input) {
            let int_digits = caps.get(1).map_or("", |m| m.as_str());
            let frac_digits = caps.get(2).map_or("", |m| m.as_str());
            let unit = caps.get(3).map_or("", |m| m.as_str());

            let number = parse_decimal_literal(int_digits, frac_digits)
                .ok_or_else(|| HumanizeError::NoMatch(input.to_string()))?;
            let seconds = *self
                .table
                .units
                .get(unit)
                .ok_or_else(|| HumanizeError::UnknownSuffix(unit.to_string()))?;

            let nanos = number * BigRational::from_integer(BigInt::from(seconds) * NANOS_PER_SECOND);
            let nanos = nanos
                .to_integer()
                .to_u64()
                .ok_or_else(|| HumanizeError::OutOfRange(input.to_string()))?;
            trace!(unit, nanos, "duration part parsed");

            total = total
                .checked_add(Duration::from_nanos(nanos))
                .ok_or_else(|| HumanizeError::OutOfRange(input.to_string()))?;
            matched += 1;
        }

        if matched == 0 {
            return Err(HumanizeError::NoMatch(input.to_string()));
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LanguageRegistry;
    use crate::units::{DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};

    fn parser(code: &str) -> DurationParser {
        DurationParser::new(LanguageRegistry::new().load_time_table(code).unwrap()).unwrap()
    }

    fn secs(s: i64) -> Duration {
        Duration::from_secs(s as u64)
    }

    #[test]
    fn english_single_units() {
        let p = parser("en");
        let cases = [
            ("3 minutes", secs(3 * MINUTE)),
            ("2.5 hours", secs(5 * HOUR / 2)),
            ("70 days", secs(70 * DAY)),
            ("5 weeks", secs(5 * WEEK)),
            ("3.3 months", secs(33 * MONTH / 10)),
            ("10 years", secs(10 * YEAR)),
            ("1,5 minute", secs(90)),
        ];
        for (input, expected) in cases {
            assert_eq!(p.parse(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn compound_phrases_are_summed() {
        let p = parser("en");
        assert_eq!(p.parse("2 days and 5 hours").unwrap(), secs(2 * DAY + 5 * HOUR));
        assert_eq!(p.parse("2 days and then 2 days").unwrap(), secs(4 * DAY));
        assert_eq!(p.parse("in about 1 hour, 30 minutes").unwrap(), secs(HOUR + 30 * MINUTE));
    }

    #[test]
    fn polish_partial_unit_names() {
        let p = parser("pl");
        assert_eq!(p.parse("3 dni").unwrap(), secs(3 * DAY));
        assert_eq!(p.parse("1 dzień i 2 godziny").unwrap(), secs(DAY + 2 * HOUR));
        assert_eq!(p.parse("2 tygodnie").unwrap(), secs(2 * WEEK));
        assert_eq!(p.parse("5 lat").unwrap(), secs(5 * YEAR));
    }

    #[test]
    fn fractions_keep_sub_second_precision() {
        let p = parser("en");
        assert_eq!(p.parse("0.25 second").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn overflowing_total_is_out_of_range() {
        assert!(matches!(
            parser("en").parse("99999999999 years"),
            Err(HumanizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn no_match_is_an_error() {
        assert!(matches!(parser("en").parse("wrong duration"), Err(HumanizeError::NoMatch(_))));
        assert!(matches!(parser("en").parse("5 parsecs"), Err(HumanizeError::NoMatch(_))));
    }
}
