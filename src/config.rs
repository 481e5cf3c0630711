use std::env;

use crate::render::charts::ChartStrategy;

/// Application-level constants
pub const APP_NAME: &str = "TutorBoard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/api";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CURRENCY_CODE: &str = "LKR";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the frontend listens on.
    pub bind_addr: String,
    /// Base URL of the platform backend, trailing slash tolerated.
    pub backend_url: String,
    /// Per-request timeout for backend calls, in seconds.
    pub backend_timeout_secs: u64,
    /// Which trend chart the dashboards draw.
    pub trend_chart: ChartStrategy,
    /// Currency code shown next to revenue figures.
    pub currency_code: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// suitable for local development. Bad values are logged and replaced
    /// rather than aborting startup.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
            backend_timeout_secs: parse_timeout(env::var("BACKEND_TIMEOUT_SECS").ok()),
            trend_chart: parse_chart(env::var("TREND_CHART").ok()),
            currency_code: env::var("CURRENCY_CODE")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_CODE.to_string()),
        }
    }
}

fn parse_timeout(raw: Option<String>) -> u64 {
    match raw {
        Some(val) => match val.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                log::warn!(
                    "Invalid BACKEND_TIMEOUT_SECS {val:?} — using {DEFAULT_BACKEND_TIMEOUT_SECS}"
                );
                DEFAULT_BACKEND_TIMEOUT_SECS
            }
        },
        None => DEFAULT_BACKEND_TIMEOUT_SECS,
    }
}

fn parse_chart(raw: Option<String>) -> ChartStrategy {
    match raw {
        Some(val) => match ChartStrategy::parse(&val) {
            Some(strategy) => strategy,
            None => {
                let fallback = ChartStrategy::default();
                log::warn!("Unknown TREND_CHART value {val:?} — using {}", fallback.as_str());
                fallback
            }
        },
        None => ChartStrategy::default(),
    }
}
