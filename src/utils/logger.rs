use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    let default_directive = match (verbose, level) {
        (true, _) => "txt_compiler=debug,info".to_string(),
        (false, Some(level)) => format!("txt_compiler={}", level),
        (false, None) => "txt_compiler=info".to_string(),
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = build_filter(verbose, level);

    match format {
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false)
                        .json(),
                )
                .init();
        }
    }
}
