use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "humanize.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드. `auto` 이면 시스템 로케일을 따른다.
    pub language: String,
    /// 시간 차이를 여러 단위로 나눠 정밀하게 표시할지 여부
    pub precise: bool,
    /// 접두어 변환 시 최대 소수 자릿수
    pub decimals: usize,
    /// 접두어 없이 표시할 범위의 기준값
    pub threshold: i64,
    /// 접두어를 기호(k, Mi)로 표시할지 여부
    pub short_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            precise: false,
            decimals: 2,
            threshold: 1000,
            short_prefix: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 돌려주며 파일은 만들지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        debug!(path = %path.display(), "config file missing, using defaults");
        Ok(Config::default())
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Config::from_toml("language = \"pl\"\nprecise = true\n").unwrap();
        assert_eq!(cfg.language, "pl");
        assert!(cfg.precise);
        assert_eq!(cfg.decimals, 2);
        assert_eq!(cfg.threshold, 1000);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            language: "en".into(),
            precise: true,
            decimals: 3,
            threshold: 100,
            short_prefix: false,
        };
        let text = cfg.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn bad_toml_is_reported() {
        assert!(matches!(
            Config::from_toml("decimals = \"many\""),
            Err(ConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("humanize-cfg-{}.toml", std::process::id()));
        let cfg = Config {
            language: "pl".into(),
            ..Config::default()
        };
        cfg.save(&path).unwrap();
        let loaded = load_or_default(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn absent_file_gives_defaults() {
        let path = Path::new("definitely/not/here/humanize.toml");
        assert_eq!(load_or_default(path).unwrap(), Config::default());
    }
}
