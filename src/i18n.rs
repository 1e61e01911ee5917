use sys_locale::get_locale;
use tracing::debug;

use crate::error::HumanizeResult;
use crate::lang::Language;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const CONFIG_SAVED: &str = "config.saved";
    pub const DURATION_TOTAL: &str = "duration.total";
    pub const PREFIX_EXACT: &str = "prefix.exact";
}

/// CLI 출력용 문구를 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 폴란드어 번역이 없으면 영어 문자열을 쓴다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::Pl => pl(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그 → 설정 → 시스템 순으로 언어를 결정한다.
///
/// `auto` 나 빈 문자열일 때만 다음 단계로 넘어간다. 명시한 코드가 지원되지 않으면 오류다.
/// 시스템 로케일도 지원 언어가 아니면 영어를 쓴다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> HumanizeResult<Language> {
    if let Some(code) = cli_arg.and_then(explicit_code) {
        return Language::from_code(code);
    }
    if let Some(code) = explicit_code(config_lang) {
        return Language::from_code(code);
    }
    let lang = detect_system_language().unwrap_or(Language::En);
    debug!(language = lang.as_code(), "language taken from system locale");
    Ok(lang)
}

fn explicit_code(code: &str) -> Option<&str> {
    let c = code.trim();
    if c.is_empty() || c.eq_ignore_ascii_case("auto") {
        None
    } else {
        Some(c)
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(loc) = get_locale() {
        if let Ok(lang) = Language::from_code(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            if let Ok(lang) = Language::from_code(&value) {
                return Some(lang);
            }
        }
    }
    None
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        CONFIG_SAVED => "Configuration written to",
        DURATION_TOTAL => "Total seconds:",
        PREFIX_EXACT => "Exact value:",
        _ => "[missing translation]",
    }
}

fn pl(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Błąd",
        CONFIG_SAVED => "Zapisano konfigurację do",
        DURATION_TOTAL => "Łącznie sekund:",
        PREFIX_EXACT => "Dokładna wartość:",
        _ => return None,
    })
}
