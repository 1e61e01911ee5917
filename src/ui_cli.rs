use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// 명령행 인자를 표현한다.
#[derive(Debug, Parser)]
#[command(name = "humanize_toolbox", version, about = "Human-readable durations and magnitudes")]
pub struct Cli {
    /// 언어 코드 (en, pl, auto). 설정 파일보다 우선한다.
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

/// 하위 명령.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 초 단위 차이를 사람이 읽는 형태로 표시한다 (음수는 과거).
    Diff {
        #[arg(allow_hyphen_values = true)]
        seconds: i64,
        /// 여러 단위로 나눠 표시
        #[arg(long)]
        precise: bool,
    },
    /// "2 days and 5 hours" 같은 문장을 초로 바꾼다.
    ParseDuration { text: String },
    /// SI 접두어를 붙인다.
    Si {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[command(flatten)]
        opts: PrefixOpts,
    },
    /// bit 접두어를 붙인다.
    Bit {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[command(flatten)]
        opts: PrefixOpts,
    },
    /// "5.5 k", "736 Yi" 같은 값을 정확한 수로 바꾼다.
    ParsePrefix { text: String },
    /// 자릿수 구분자를 넣어 표시한다.
    Number {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long, default_value_t = 2)]
        digits: usize,
    },
    /// 작은 비율을 %, ‰, ppm 등으로 표시한다.
    Parts {
        value: f64,
        #[arg(long, default_value_t = 0)]
        zeroes: u32,
    },
    /// 현재 설정을 파일로 저장한다.
    InitConfig,
}

/// 접두어 변환 옵션. 지정하지 않은 값은 설정 파일을 따른다.
#[derive(Debug, Clone, clap::Args)]
pub struct PrefixOpts {
    #[arg(long)]
    pub decimals: Option<usize>,
    #[arg(long)]
    pub threshold: Option<i64>,
    /// 기호 대신 전체 이름(kilo, mebi) 사용
    #[arg(long)]
    pub long: bool,
}
