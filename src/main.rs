//! API Keys GUI - Main Entry Point

use api_keys_gui::app::application::run_app;
use api_keys_gui::constants::{APP_NAME, CONFIG_FILE};
use api_keys_gui::domain::config::AppConfig;
use api_keys_gui::utils::config_store::{app_log_dir, load_config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // The guard flushes the log file on drop, so it lives until exit
    let _guard = init_tracing();

    tracing::info!("Starting API Keys GUI...");

    let config = match load_config::<AppConfig>(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load {}, using defaults: {:#}", CONFIG_FILE, e);
            AppConfig::default()
        }
    };
    tracing::info!("API base URL: {}", config.api.base_url);

    // Run the GPUI application
    run_app(config);
}

/// Stdout logging plus a daily log file when the data directory is usable
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = app_log_dir().ok().map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, format!("{APP_NAME}.log"));
        tracing_appender::non_blocking(appender)
    });

    match file {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .init();
            None
        }
    }
}
