//! Logging bootstrap
//!
//! The library only emits `tracing` events. Hosts without their own
//! subscriber can install one here.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "content_type_permissions=info";

const LOG_FILE_PREFIX: &str = "permissions.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a stderr subscriber filtered by `RUST_LOG`
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Install a JSON subscriber writing to a daily rolling file in `dir`
///
/// Keep the returned guard alive for as long as logs should be flushed.
pub fn init_file_logging(dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(dir.as_ref(), LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize file logging: {}", e))?;

    tracing::info!("File logging initialized in {:?}", dir.as_ref());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_reads_rust_log() {
        std::env::set_var("RUST_LOG", "content_type_permissions=debug");
        let filter = env_filter().to_string();
        assert!(filter.contains("content_type_permissions=debug"), "{}", filter);

        std::env::remove_var("RUST_LOG");
        let filter = env_filter().to_string();
        assert!(filter.contains(DEFAULT_DIRECTIVE), "{}", filter);
    }
}
