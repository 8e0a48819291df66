//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Verbose for the blog crates, quiet for the ORM and template engine.
const DEFAULT_FILTER: &str = "info,blog_server=debug,blog_infra=debug,sea_orm=warn,tera=warn";

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// `EnvFilter` directives.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from `LOG_FORMAT` and `BLOG_LOG`, falling back to
    /// `RUST_LOG` for the filter.
    pub fn from_env() -> Self {
        let filter = std::env::var("BLOG_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        Self::from_vars(std::env::var("LOG_FORMAT").ok().as_deref(), filter.as_deref())
    }

    fn from_vars(log_format: Option<&str>, filter: Option<&str>) -> Self {
        Self {
            json_logs: log_format.is_some_and(|v| v.eq_ignore_ascii_case("json")),
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(DEFAULT_FILTER)
                .to_string(),
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?} ({}), using default", config.filter, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        json_logs = config.json_logs,
        filter = %config.filter,
        "Blog telemetry initialized"
    );
}
