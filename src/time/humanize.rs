use std::sync::Arc;

use tracing::{trace, warn};

use crate::search::{find_first, find_range};
use crate::units::time::fill_template;
use crate::units::{TimeTable, TimeUnitRange};

/// 시간 차이를 언어 표에 따라 문장으로 만든다.
#[derive(Debug, Clone)]
pub struct DurationHumanizer {
    table: Arc<TimeTable>,
}

impl DurationHumanizer {
    pub fn new(table: Arc<TimeTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TimeTable {
        &self.table
    }

    /// 두 시각(초) 사이의 차이를 미래/과거 표현으로 감싸 돌려준다.
    ///
    /// - `precise=false` → "3 months"
    /// - `precise=true`  → "2 months and 25 days"
    pub fn humanize_diff(&self, start: i64, end: i64, precise: bool) -> String {
        if end == start {
            return self.table.now.clone();
        }
        let diff = (i128::from(end) - i128::from(start)).unsigned_abs();
        let seconds = i64::try_from(diff).unwrap_or(i64::MAX);
        let humanized = self.humanize_duration(seconds, precise);
        if end > start {
            fill_template(&self.table.future, &humanized)
        } else {
            fill_template(&self.table.past, &humanized)
        }
    }

    /// 시간 길이(초)를 단위 조각으로 분해해 이어 붙인다. 부호는 무시한다.
    /// 0초는 구간 탐색 없이 `now` 문구를 돌려준다.
    pub fn humanize_duration(&self, seconds: i64, precise: bool) -> String {
        let mut seconds_left = seconds.saturating_abs();
        if seconds_left == 0 {
            return self.table.now.clone();
        }
        let mut parts: Vec<String> = Vec::new();

        while seconds_left > 0 {
            let Some(range) = self.select_range(seconds_left, precise) else {
                warn!(seconds_left, "no time range covers the remainder");
                break;
            };
            // 정수 나눗셈
            let amount = seconds_left / range.divide_by;
            if amount == 0 {
                warn!(seconds_left, divide_by = range.divide_by, "time range selected below its unit");
                break;
            }
            trace!(seconds_left, amount, divide_by = range.divide_by, "time range selected");
            parts.push(phrase(range, amount));

            if precise {
                seconds_left -= amount * range.divide_by;
            } else {
                // 대략 모드는 한 조각만 낸다.
                seconds_left = 0;
            }
        }

        join_parts(parts, &self.table.remainder_sep)
    }

    fn select_range(&self, seconds_left: i64, precise: bool) -> Option<&TimeUnitRange> {
        let ranges = &self.table.ranges;
        let idx = find_range(
            ranges,
            |r| r.exceeds(seconds_left),
            |r| precise && r.skip_when_precise,
        )?;
        ranges.get(idx)
    }
}

/// 개수에 맞는 어형으로 한 조각을 만든다.
fn phrase(range: &TimeUnitRange, amount: i64) -> String {
    if amount == 1 {
        return range.singular.clone();
    }
    let search_amount = if range.only_last_digit_after != 0 && amount > range.only_last_digit_after {
        amount % 10
    } else {
        amount
    };
    let Some(declension) = find_first(&range.declensions, |d| d.exceeds(search_amount))
        .and_then(|idx| range.declensions.get(idx))
    else {
        return amount.to_string();
    };
    if declension.format.contains("%d") {
        declension.format.replacen("%d", &amount.to_string(), 1)
    } else {
        declension.format.clone()
    }
}

/// "a, b and c" 형태로 잇는다.
fn join_parts(mut parts: Vec<String>, remainder_sep: &str) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts.remove(0),
        _ => {
            let last = parts.pop().unwrap_or_default();
            format!("{} {remainder_sep} {last}", parts.join(", "))
        }
    }
}
