use clap::Parser;
use humanize_toolbox::i18n::keys;
use humanize_toolbox::{app, ui_cli::Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 명령 하나를 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tr = app::error_translator(&cli);
    if let Err(err) = app::run(cli) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}
