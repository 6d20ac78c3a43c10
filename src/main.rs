use std::process::ExitCode;

use clap::Parser;
use pipe_head_loss::{app, cli::Cli, config, i18n, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            let tr = i18n::Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    let stdout = std::io::stdout();
    app::run(cli, &mut cfg, &cli.config, &tr, &mut stdout.lock())
}
