use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI용 로거를 초기화한다. `RUST_LOG`가 있으면 그 필터를 우선한다.
///
/// 로그는 stderr로 보내 결과 출력(stdout)과 섞이지 않게 한다.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "pipe_head_loss=debug,info"
    } else {
        "pipe_head_loss=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
