use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Installs the global subscriber. Output goes to a daily log file because
/// the terminal itself is owned by the dashboard UI.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<(), AppError> {
    let filter = build_filter(config)?;
    let appender = tracing_appender::rolling::daily(&layout.log_dir, layout.log_file_name());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|error| AppError::LoggingInit(error.into())),
    }
}
