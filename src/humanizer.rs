use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use num_rational::BigRational;
use tracing::debug;

use crate::error::{HumanizeError, HumanizeResult};
use crate::format::{LocaleNumberFormatter, NumberFormatter};
use crate::lang::{LanguageProvider, LanguageRegistry};
use crate::magnitude::{MagnitudeParser, MagnitudeScaler};
use crate::parts;
use crate::time::{DurationHumanizer, DurationParser};
use crate::units::ScaleFamily;

/// 한 언어에 대한 모든 변환을 묶어 제공한다.
#[derive(Debug)]
pub struct Humanizer {
    provider: Arc<LanguageProvider>,
    formatter: Box<dyn NumberFormatter>,
    durations: DurationHumanizer,
    duration_parser: DurationParser,
    si: MagnitudeScaler,
    bit: MagnitudeScaler,
    si_parser: MagnitudeParser,
    bit_parser: MagnitudeParser,
}

impl Humanizer {
    /// 레지스트리에서 언어 표를 꺼내 변환기를 만든다.
    pub fn new(registry: &LanguageRegistry, code: &str) -> HumanizeResult<Self> {
        let provider = registry.provider(code)?;
        let formatter = LocaleNumberFormatter::new(provider.language.number_locale());
        Self::with_formatter(provider, Box::new(formatter))
    }

    /// 숫자 표시기를 직접 지정한다.
    pub fn with_formatter(
        provider: Arc<LanguageProvider>,
        formatter: Box<dyn NumberFormatter>,
    ) -> HumanizeResult<Self> {
        let si = provider.magnitude_table(ScaleFamily::Decimal);
        let bit = provider.magnitude_table(ScaleFamily::Binary);
        let humanizer = Self {
            durations: DurationHumanizer::new(Arc::clone(&provider.time)),
            duration_parser: DurationParser::new(Arc::clone(&provider.time))?,
            si_parser: MagnitudeParser::new(Arc::clone(&si))?,
            bit_parser: MagnitudeParser::new(Arc::clone(&bit))?,
            si: MagnitudeScaler::new(si),
            bit: MagnitudeScaler::new(bit),
            formatter,
            provider,
        };
        debug!(language = humanizer.language_code(), "humanizer ready");
        Ok(humanizer)
    }

    pub fn language_code(&self) -> &'static str {
        self.provider.language.as_code()
    }

    /// 두 시각(유닉스 초) 사이의 차이를 사람이 읽는 형태로 돌려준다.
    pub fn time_diff(&self, start: i64, end: i64, precise: bool) -> String {
        self.durations.humanize_diff(start, end, precise)
    }

    pub fn time_diff_system(&self, start: SystemTime, end: SystemTime, precise: bool) -> String {
        self.time_diff(unix_seconds(start), unix_seconds(end), precise)
    }

    /// 지금부터 `date` 까지의 차이.
    pub fn time_diff_now(&self, date: SystemTime, precise: bool) -> String {
        self.time_diff_system(SystemTime::now(), date, precise)
    }

    pub fn humanize_duration(&self, seconds: i64, precise: bool) -> String {
        self.durations.humanize_duration(seconds, precise)
    }

    pub fn parse_duration(&self, input: &str) -> HumanizeResult<Duration> {
        self.duration_parser.parse(input)
    }

    /// SI 접두어를 붙인다. 인자는 [`MagnitudeScaler::scale`] 참고.
    pub fn si_prefix(&self, value: f64, decimals: usize, threshold: i64, short: bool) -> String {
        self.si.scale(value, decimals, threshold, short)
    }

    /// 소수 1자리, 0.01 ~ 1000 은 그대로, 짧은 기호.
    pub fn si_prefix_fast(&self, value: f64) -> String {
        self.si.scale_fast(value)
    }

    pub fn si_prefix_fast_int(&self, value: i64) -> String {
        self.si_prefix_fast(value as f64)
    }

    /// bit 접두어를 붙인다. 값은 바이트 단위로 본다.
    pub fn bit_prefix(&self, value: f64, decimals: usize, threshold: i64, short: bool) -> String {
        self.bit.scale(value, decimals, threshold, short)
    }

    /// 소수 2자리, 임계값 1024, 짧은 기호.
    pub fn bit_prefix_fast(&self, value: f64) -> String {
        self.bit.scale_fast(value)
    }

    pub fn parse_si_prefix(&self, input: &str) -> HumanizeResult<BigRational> {
        self.si_parser.parse(input)
    }

    pub fn parse_bit_prefix(&self, input: &str) -> HumanizeResult<BigRational> {
        self.bit_parser.parse(input)
    }

    /// SI 접두어로 먼저 해석하고, 맞지 않으면 bit 접두어로 해석한다.
    pub fn parse_prefix(&self, input: &str) -> HumanizeResult<BigRational> {
        match self.si_parser.parse(input) {
            Err(HumanizeError::NoMatch(_)) => self.bit_parser.parse(input),
            other => other,
        }
    }

    /// 자릿수 구분자를 넣어 읽기 쉽게 만든다. `digits` 는 최대 소수 자릿수.
    pub fn humanize_number(&self, value: f64, digits: usize) -> String {
        self.formatter.format_decimal(value, digits)
    }

    /// 0.02 → "2%", 0.007 → "7‰".
    pub fn humanize_parts(&self, value: f64, allowed_zeroes: u32) -> String {
        parts::humanize_parts(value, allowed_zeroes, self.formatter.as_ref())
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}
