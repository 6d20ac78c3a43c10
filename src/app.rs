use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::cli::{self, Cli, Command};
use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::Translator;
use crate::input::InputError;
use crate::report::ReportError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 단위 해석/변환 오류
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 재질/유체 조회 오류
    #[error(transparent)]
    Input(#[from] InputError),
    /// 결과 내보내기 오류
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// 파싱된 명령 하나를 실행한다. 결과는 `out`으로 쓴다.
pub fn run(
    cli: &Cli,
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match &cli.command {
        Command::Calc(args) => cli::handle_calc(args, config, tr, out),
        Command::Convert {
            quantity,
            value,
            from,
            to,
        } => cli::handle_convert(quantity, *value, from, to, out),
        Command::Units { system } => {
            let system = system.map(Into::into).unwrap_or(config.unit_system);
            cli::handle_units(system, tr, out)
        }
        Command::Materials => cli::handle_materials(tr, out),
        Command::Fluids => cli::handle_fluids(tr, out),
        Command::Config(cmd) => cli::handle_config(cmd, config, config_path, tr, out),
    }
}
