use std::sync::Arc;

use num_rational::BigRational;
use regex::Regex;
use tracing::trace;

use crate::error::{HumanizeError, HumanizeResult};
use crate::number::parse_decimal_literal;
use crate::units::MagnitudeTable;

/// 접두어가 붙은 문자열을 정확한 유리수로 되돌린다.
#[derive(Debug, Clone)]
pub struct MagnitudeParser {
    table: Arc<MagnitudeTable>,
    pattern: Regex,
}

impl MagnitudeParser {
    /// 표의 모든 기호/이름으로 입력 패턴을 만든다.
    pub fn new(table: Arc<MagnitudeTable>) -> HumanizeResult<Self> {
        let mut tokens: Vec<&str> = table
            .prefixes()
            .iter()
            .flat_map(|p| [p.short, p.long])
            .collect();
        // 긴 토큰이 먼저 오도록 해서 공통 접두를 가진 짧은 토큰에 가려지지 않게 한다.
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tokens.dedup();
        let alternatives = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        // 입력 전체: 선택적 부호, 숫자, 선택적 소수점(. 또는 ,), 선택적 소수부,
        // 선택적 공백, 선택적 접두어
        let pattern =
            Regex::new(&format!(r"^(-)?([0-9]+)[.,]?([0-9]*?) ?({alternatives})?$"))?;
        Ok(Self { table, pattern })
    }

    pub fn table(&self) -> &MagnitudeTable {
        &self.table
    }

    /// 문자열을 파싱해 정확한 값을 돌려준다. 예: `"13.5 kilo"` → 13500.
    pub fn parse(&self, input: &str) -> HumanizeResult<BigRational> {
        let caps = self
            .pattern
            .captures(input.trim())
            .ok_or_else(|| HumanizeError::NoMatch(input.to_string()))?;
        let negative = caps.get(1).is_some();
        let int_digits = caps.get(2).map_or("", |m| m.as_str());
        let frac_digits = caps.get(3).map_or("", |m| m.as_str());
        // 패턴이 숫자만 허용하므로 실패하면 패턴 쪽 문제다.
        let magnitude = parse_decimal_literal(int_digits, frac_digits)
            .ok_or_else(|| HumanizeError::NoMatch(input.to_string()))?;
        let number = if negative { -magnitude } else { magnitude };

        let Some(token) = caps.get(4).map(|m| m.as_str()) else {
            return Ok(number);
        };
        let prefix = self
            .table
            .find_token(token)
            .ok_or_else(|| HumanizeError::UnknownSuffix(token.to_string()))?;
        trace!(token, power = prefix.power, "prefix parsed");
        Ok(number * &prefix.exact)
    }
}
