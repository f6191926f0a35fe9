//! Provides utilities to initialize logging.
//!
//! Logs go to stderr so that stdout carries nothing but rendered outputs.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_FILTER: &str = "info";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Directive applied when `RUST_LOG` is unset.
    default_filter: String,

    /// Include source file and line in each event.
    with_location: bool,
}

impl LoggerConfig {
    /// Creates a new instance with the given fallback filter.
    pub fn new(default_filter: impl Into<String>) -> Self {
        Self {
            default_filter: default_filter.into(),
            with_location: std::env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1"),
        }
    }

    pub fn default_filter(&self) -> &str {
        &self.default_filter
    }

    /// Sets whether events carry their source location.
    pub fn set_location(&mut self, enabled: bool) {
        self.with_location = enabled;
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER)
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// `RUST_LOG` wins over the configured filter when it is set and parses.
pub fn init(config: LoggerConfig) {
    let filt = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_sub = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_file(config.with_location)
        .with_line_number(config.with_location)
        .with_filter(filt);

    tracing_subscriber::registry().with(stderr_sub).init();

    tracing::debug!(filter = %config.default_filter, "logging initialized");
}
