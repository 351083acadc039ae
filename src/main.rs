//! newsatlas binary entrypoint kept minimal. The full runtime lives in `newsatlas::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct NewsatlasTimer;

impl tracing_subscriber::fmt::time::FormatTime for NewsatlasTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config_dir>/logs/newsatlas.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is not set.
///
/// Details:
/// - Falls back to a stderr logger when the log file cannot be opened.
fn init_logging(level: &str) {
    let log_path = newsatlas::config::logs_dir().join("newsatlas.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NewsatlasTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NewsatlasTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = newsatlas::config::settings();
    args::apply_cli_overrides(&cli, &mut settings);

    if let Some(code) = args::process_args(&cli, &settings).await {
        std::process::exit(code);
    }

    tracing::info!(view = ?settings.start_view, "newsatlas starting");
    if let Err(err) = newsatlas::app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("newsatlas exited");
}
