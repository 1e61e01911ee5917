use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{self, Config, ConfigError};
use crate::error::HumanizeError;
use crate::humanizer::Humanizer;
use crate::i18n::{self, keys, Translator};
use crate::lang::{Language, LanguageRegistry};
use crate::number::trim_zeroes;
use crate::ui_cli::{Cli, Command, PrefixOpts};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Humanize(#[from] HumanizeError),
}

/// 설정을 읽고 언어를 정한 뒤 명령 하나를 실행해 결과를 출력한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), &cfg.language)?;
    let tr = Translator::new(lang);
    let registry = LanguageRegistry::new();
    let humanizer = Humanizer::new(&registry, lang.as_code())?;
    info!(language = lang.as_code(), "running command");
    let output = execute(&cli.command, &humanizer, &cfg, &tr, &cli.config)?;
    println!("{output}");
    Ok(())
}

/// 오류 출력에 쓸 번역기. 설정이나 언어 코드가 잘못돼도 영어로 대체한다.
pub fn error_translator(cli: &Cli) -> Translator {
    let config_lang = config::load_or_default(&cli.config)
        .map(|cfg| cfg.language)
        .unwrap_or_default();
    let lang = i18n::resolve_language(cli.lang.as_deref(), &config_lang).unwrap_or(Language::En);
    Translator::new(lang)
}

/// 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn execute(
    command: &Command,
    humanizer: &Humanizer,
    cfg: &Config,
    tr: &Translator,
    config_path: &Path,
) -> Result<String, AppError> {
    debug!(?command, "execute");
    let out = match command {
        Command::Diff { seconds, precise } => {
            humanizer.time_diff(0, *seconds, *precise || cfg.precise)
        }
        Command::ParseDuration { text } => {
            let d = humanizer.parse_duration(text)?;
            format!("{} {}", tr.t(keys::DURATION_TOTAL), seconds_text(d))
        }
        Command::Si { value, opts } => {
            let (decimals, threshold, short) = prefix_args(opts, cfg);
            humanizer.si_prefix(*value, decimals, threshold, short)
        }
        Command::Bit { value, opts } => {
            let (decimals, threshold, short) = prefix_args(opts, cfg);
            humanizer.bit_prefix(*value, decimals, threshold, short)
        }
        Command::ParsePrefix { text } => {
            let exact = humanizer.parse_prefix(text)?;
            format!("{} {exact}", tr.t(keys::PREFIX_EXACT))
        }
        Command::Number { value, digits } => humanizer.humanize_number(*value, *digits),
        Command::Parts { value, zeroes } => humanizer.humanize_parts(*value, *zeroes),
        Command::InitConfig => {
            cfg.save(config_path)?;
            format!("{} {}", tr.t(keys::CONFIG_SAVED), config_path.display())
        }
    };
    Ok(out)
}

fn prefix_args(opts: &PrefixOpts, cfg: &Config) -> (usize, i64, bool) {
    (
        opts.decimals.unwrap_or(cfg.decimals),
        opts.threshold.unwrap_or(cfg.threshold),
        cfg.short_prefix && !opts.long,
    )
}

fn seconds_text(d: Duration) -> String {
    let text = format!("{}.{:09}", d.as_secs(), d.subsec_nanos());
    trim_zeroes(&text).to_string()
}
