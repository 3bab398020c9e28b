//! Compact timestamped logging with per-module levels.
//!
//! Levels come from the `logging` section of `settings.json`:
//!
//! ```json
//! "logging": { "default": "warn", "modules": { "share_math::presenter": "debug" } }
//! ```
//!
//! `RUST_LOG` takes precedence over the settings file.

use std::{
    collections::BTreeMap,
    sync::Once,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing_subscriber::{
    fmt::time::FormatTime,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

static INIT: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub default: String,
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { default: "warn".to_string(), modules: BTreeMap::new() }
    }
}

impl LoggingConfig {
    /// Filter directive string, e.g. `warn,share_math::presenter=debug`.
    pub fn directives(&self) -> String {
        let mut filter = self.default.clone();
        for (module, level) in &self.modules {
            filter.push_str(&format!(",{module}={level}"));
        }
        filter
    }
}

/// HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directives())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        if let Err(e) = tracing_subscriber::registry().with(fmt_layer).try_init() {
            eprintln!("Logging was already initialized: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.directives(), "warn");

        config.modules.insert("share_math::presenter".to_string(), "debug".to_string());
        config.modules.insert("share_math::gui".to_string(), "info".to_string());
        assert_eq!(
            config.directives(),
            "warn,share_math::gui=info,share_math::presenter=debug"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{ "modules": {} }"#).unwrap();
        assert_eq!(config.default, "warn");
    }
}
