use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Lambda's own log level setting, honoured when `RUST_LOG` is not set.
pub const LAMBDA_LOG_LEVEL: &str = "AWS_LAMBDA_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single lines for terminals
    Compact,
    /// One JSON object per event for CloudWatch
    Json,
}

/// Default directive when `RUST_LOG` is absent. Debug also shows codec progress.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "efs_sheet_gateway=debug,lambda=debug,info"
    } else {
        "efs_sheet_gateway=info,lambda=info"
    }
}

fn build_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

pub fn init_logger(format: LogFormat, debug: bool) {
    let registry = tracing_subscriber::registry().with(build_filter(debug));

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .init(),
        // Lambda 已經為每一行加上時間戳
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .json()
                    .flatten_event(true),
            )
            .init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(LogFormat::Compact, verbose);
}

pub fn init_lambda_logger() {
    let debug = std::env::var(LAMBDA_LOG_LEVEL)
        .map(|level| lambda_level_is_debug(&level))
        .unwrap_or(false);
    init_logger(LogFormat::Json, debug);
}

fn lambda_level_is_debug(level: &str) -> bool {
    matches!(level.trim().to_ascii_uppercase().as_str(), "DEBUG" | "TRACE")
}
