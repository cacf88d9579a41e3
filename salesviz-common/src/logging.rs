//! Structured logging setup for salesviz

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to enable ANSI colors
    pub ansi: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            include_targets: false,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Uses `try_init` so a second call (e.g. from tests) is a no-op error
/// instead of a panic.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_ansi(config.ansi)
                .with_target(config.include_targets),
        )
        .try_init()?;

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.ansi);
        assert!(!config.include_targets);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // First init in the test binary may succeed, subsequent ones fail;
        // either way an invalid level must not panic.
        let _ = init_logging(LoggingConfig {
            level: "not-a-level!!".to_string(),
            ..LoggingConfig::default()
        });
    }
}
