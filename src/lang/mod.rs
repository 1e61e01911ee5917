//! 언어별 데이터와 언어 코드 → 표 레지스트리.

mod en;
mod pl;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{HumanizeError, HumanizeResult};
use crate::units::{MagnitudeTable, ScaleFamily, TimeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Pl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pl];

    /// 언어 코드를 해석한다. `en-US`, `pl_PL` 처럼 지역이 붙어도 기본 코드로 본다.
    /// 알 수 없는 코드는 기본값으로 대체하지 않고 오류를 낸다.
    pub fn from_code(code: &str) -> HumanizeResult<Self> {
        let base = code
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match base.as_str() {
            "en" => Ok(Language::En),
            "pl" => Ok(Language::Pl),
            _ => Err(HumanizeError::UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }

    /// 숫자 구분자 선택에 쓰는 로케일.
    pub fn number_locale(&self) -> num_format::Locale {
        match self {
            Language::En => num_format::Locale::en,
            Language::Pl => num_format::Locale::pl,
        }
    }

    fn time_table(&self) -> TimeTable {
        match self {
            Language::En => en::time_table(),
            Language::Pl => pl::time_table(),
        }
    }

    fn prefix_names(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => en::PREFIX_NAMES,
            Language::Pl => pl::PREFIX_NAMES,
        }
    }
}

/// 한 언어의 모든 표. 생성 후 바뀌지 않는다.
#[derive(Debug)]
pub struct LanguageProvider {
    pub language: Language,
    pub time: Arc<TimeTable>,
    pub si: Arc<MagnitudeTable>,
    pub bit: Arc<MagnitudeTable>,
}

impl LanguageProvider {
    fn build(language: Language) -> Self {
        Self::from_tables(language, language.time_table(), language.prefix_names())
    }

    /// 표를 묶는다. 시간 표가 정렬/범위 조건을 어기면 디버그 빌드에서 바로 실패한다.
    fn from_tables(
        language: Language,
        time: TimeTable,
        names: &[(&'static str, &'static str)],
    ) -> Self {
        let checked = time.validate();
        if let Err(reason) = &checked {
            warn!(language = language.as_code(), %reason, "invalid time table");
        }
        debug_assert!(
            checked.is_ok(),
            "invalid time table for {}: {checked:?}",
            language.as_code()
        );
        Self {
            language,
            time: Arc::new(time),
            si: Arc::new(MagnitudeTable::build(ScaleFamily::Decimal, names)),
            bit: Arc::new(MagnitudeTable::build(ScaleFamily::Binary, names)),
        }
    }

    pub fn magnitude_table(&self, family: ScaleFamily) -> Arc<MagnitudeTable> {
        match family {
            ScaleFamily::Decimal => Arc::clone(&self.si),
            ScaleFamily::Binary => Arc::clone(&self.bit),
        }
    }
}

/// 언어 코드 → 표 레지스트리. 시작 시 한 번 만들어 `Arc` 로 공유한다.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    providers: HashMap<Language, Arc<LanguageProvider>>,
}

impl LanguageRegistry {
    /// 지원하는 모든 언어의 표를 미리 만든다.
    pub fn new() -> Self {
        let providers = Language::ALL
            .into_iter()
            .map(|lang| (lang, Arc::new(LanguageProvider::build(lang))))
            .collect();
        debug!(languages = Language::ALL.len(), "language registry built");
        Self { providers }
    }

    pub fn provider(&self, code: &str) -> HumanizeResult<Arc<LanguageProvider>> {
        let lang = Language::from_code(code)?;
        self.providers
            .get(&lang)
            .cloned()
            .ok_or_else(|| HumanizeError::UnsupportedLanguage(code.to_string()))
    }

    pub fn load_time_table(&self, code: &str) -> HumanizeResult<Arc<TimeTable>> {
        Ok(Arc::clone(&self.provider(code)?.time))
    }

    pub fn load_magnitude_table(
        &self,
        code: &str,
        family: ScaleFamily,
    ) -> HumanizeResult<Arc<MagnitudeTable>> {
        Ok(self.provider(code)?.magnitude_table(family))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_with_region_resolve() {
        assert_eq!(Language::from_code("en").unwrap(), Language::En);
        assert_eq!(Language::from_code("en-US").unwrap(), Language::En);
        assert_eq!(Language::from_code("PL_pl").unwrap(), Language::Pl);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let registry = LanguageRegistry::new();
        assert!(matches!(
            registry.load_time_table("xyz"),
            Err(HumanizeError::UnsupportedLanguage(code)) if code == "xyz"
        ));
        assert!(matches!(
            registry.load_magnitude_table("", ScaleFamily::Decimal),
            Err(HumanizeError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn shipped_time_tables_are_valid() {
        for lang in Language::ALL {
            let table = lang.time_table();
            assert_eq!(table.validate(), Ok(()), "{lang:?}");
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid time table")]
    fn broken_time_table_fails_at_construction() {
        let mut table = en::time_table();
        table.ranges.reverse();
        let _provider = LanguageProvider::from_tables(Language::En, table, en::PREFIX_NAMES);
    }

    #[test]
    fn polish_prefix_names_are_used() {
        let registry = LanguageRegistry::new();
        let si = registry.load_magnitude_table("pl", ScaleFamily::Decimal).unwrap();
        assert_eq!(si.find_token("Y").unwrap().long, "jotta");
        assert_eq!(si.find_token("µ").unwrap().long, "mikro");
    }
}
