use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Filter resolution order:
/// 1. `env_filter` (`env_logger` syntax, e.g. "gradia_engine=debug,warn")
/// 2. the `RUST_LOG` environment variable
/// 3. `default_level`
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Uses an explicit filter string instead of `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_default_level(mut self, level: LevelFilter) -> Self {
        self.default_level = level;
        self
    }

    /// Builds an `env_logger` builder, with `rust_log` standing in for the
    /// `RUST_LOG` environment variable.
    fn builder(&self, rust_log: Option<String>) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.env_filter.clone().or(rust_log) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(self.default_level);
            }
        }

        builder.write_style(self.write_style);
        builder
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = config.builder(std::env::var("RUST_LOG").ok());

        // Another logger may already be installed by the host application.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(config: &LoggingConfig, rust_log: Option<&str>) -> LevelFilter {
        config.builder(rust_log.map(str::to_owned)).build().filter()
    }

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::default().with_filter("debug");
        assert_eq!(level(&config, Some("error")), LevelFilter::Debug);
    }

    #[test]
    fn rust_log_used_without_explicit_filter() {
        let config = LoggingConfig::default().with_default_level(LevelFilter::Warn);
        assert_eq!(level(&config, Some("error")), LevelFilter::Error);
    }

    #[test]
    fn default_level_used_when_nothing_is_set() {
        let config = LoggingConfig::default().with_default_level(LevelFilter::Warn);
        assert_eq!(level(&config, None), LevelFilter::Warn);
        assert_eq!(level(&LoggingConfig::default(), None), LevelFilter::Info);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default().with_filter("warn"));
        init_logging(LoggingConfig::default().with_filter("trace"));
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }
}
