use std::collections::BTreeMap;

/// 시간 단위(초). 달은 30일, 해는 12달로 고정 근사한다.
pub const SECOND: i64 = 1;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;
pub const MONTH: i64 = 30 * DAY;
pub const YEAR: i64 = 12 * MONTH;

/// 마지막 구간의 상한. 사실상 무한대.
pub const UNBOUNDED: i64 = i64::MAX;

/// 개수에 따른 어형 하나. `upper_limit` 은 해당 단위의 개수 기준이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declension {
    pub upper_limit: i64,
    /// `%d` 자리에 개수가 들어간다. 없으면 그대로 쓴다.
    pub format: String,
}

impl Declension {
    /// 개수가 이 어형의 상한 미만인지.
    pub fn exceeds(&self, count: i64) -> bool {
        self.upper_limit == UNBOUNDED || self.upper_limit > count
    }
}

/// 하나의 시간 단위 구간.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeUnitRange {
    /// 구간 끝(초). 이 값 미만의 시간이 이 구간에 속한다.
    pub upper_limit: i64,
    pub divide_by: i64,
    /// 정밀 모드에서 건너뛸 구간 (예: 주)
    pub skip_when_precise: bool,
    /// 이 개수를 넘으면 끝자리만으로 어형을 고른다. 0이면 끔.
    pub only_last_digit_after: i64,
    /// 개수가 1일 때 그대로 쓰는 문구.
    pub singular: String,
    pub declensions: Vec<Declension>,
}

impl TimeUnitRange {
    pub fn new(upper_limit: i64, divide_by: i64, singular: &str) -> Self {
        Self {
            upper_limit,
            divide_by,
            skip_when_precise: false,
            only_last_digit_after: 0,
            singular: singular.to_string(),
            declensions: Vec::new(),
        }
    }

    /// 주어진 초가 이 구간의 상한 미만인지. 무한 상한은 항상 참이다.
    pub fn exceeds(&self, seconds: i64) -> bool {
        self.upper_limit == UNBOUNDED || self.upper_limit > seconds
    }

    pub fn skip_when_precise(mut self) -> Self {
        self.skip_when_precise = true;
        self
    }

    pub fn only_last_digit_after(mut self, count: i64) -> Self {
        self.only_last_digit_after = count;
        self
    }

    pub fn declension(mut self, upper_limit: i64, format: &str) -> Self {
        self.declensions.push(Declension {
            upper_limit,
            format: format.to_string(),
        });
        self
    }
}

/// 언어별 시간 표현 표.
#[derive(Debug, Clone)]
pub struct TimeTable {
    /// 상한 기준 오름차순 구간 목록.
    pub ranges: Vec<TimeUnitRange>,
    /// 미래 표현 (`%s` 하나)
    pub future: String,
    /// 과거 표현 (`%s` 하나)
    pub past: String,
    pub now: String,
    /// 마지막 조각 앞에 붙는 접속어
    pub remainder_sep: String,
    /// 입력 파싱용 단위 이름(부분 일치) → 초
    pub units: BTreeMap<String, i64>,
}

impl TimeTable {
    /// 표의 정렬/범위 조건을 검사한다. 어긋난 항목을 설명하는 문자열을 돌려준다.
    pub fn validate(&self) -> Result<(), String> {
        if self.ranges.is_empty() {
            return Err("구간이 비어 있음".into());
        }
        if self.ranges.last().map(|r| r.upper_limit) != Some(UNBOUNDED) {
            return Err("마지막 구간의 상한이 무한대가 아님".into());
        }
        for pair in self.ranges.windows(2) {
            if pair[0].upper_limit >= pair[1].upper_limit {
                return Err(format!("구간 순서 오류: {}", pair[1].singular));
            }
        }
        for range in &self.ranges {
            if range.divide_by <= 0 {
                return Err(format!("divide_by 오류: {}", range.singular));
            }
            if range.declensions.is_empty() {
                return Err(format!("어형 없음: {}", range.singular));
            }
            if range.declensions.last().map(|d| d.upper_limit) != Some(UNBOUNDED) {
                return Err(format!("마지막 어형의 상한이 무한대가 아님: {}", range.singular));
            }
            for pair in range.declensions.windows(2) {
                if pair[0].upper_limit >= pair[1].upper_limit {
                    return Err(format!("어형 순서 오류: {}", pair[1].format));
                }
            }
        }
        Ok(())
    }
}

/// `%s` 자리 하나를 채운다.
pub(crate) fn fill_template(template: &str, value: &str) -> String {
    template.replacen("%s", value, 1)
}
