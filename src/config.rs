//! Process configuration
//!
//! Everything is read from the environment once at startup. Values that
//! fail to parse fall back to their defaults with a warning.

use std::str::FromStr;
use std::time::Duration;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3010;

/// Default recipe lookup service base URL
pub const DEFAULT_RECIPE_API_URL: &str = "http://localhost:3005";

/// Default lookup timeout
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default screen budget in characters
pub const DEFAULT_SCREEN_BUDGET: usize = 160;

/// Smallest budget that still leaves room for a header and an ellipsis
pub const MIN_SCREEN_BUDGET: usize = 16;

/// Default idle time before a subscriber session is evicted
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(300);

/// Default interval between eviction sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    /// Base URL of the recipe lookup service (without the `/api/recipes` path)
    pub recipe_api_url: String,
    pub lookup_timeout: Duration,
    pub screen_budget: usize,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            recipe_api_url: DEFAULT_RECIPE_API_URL.to_string(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            screen_budget: DEFAULT_SCREEN_BUDGET,
            session_ttl: DEFAULT_SESSION_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` is this with
    /// `std::env::var`; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let recipe_api_url = lookup("RECIPE_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.recipe_api_url);

        let screen_budget = parse_or(&lookup, "USSD_SCREEN_BUDGET", defaults.screen_budget);
        let screen_budget = if screen_budget < MIN_SCREEN_BUDGET {
            tracing::warn!(
                requested = screen_budget,
                minimum = MIN_SCREEN_BUDGET,
                "Screen budget too small, clamping"
            );
            MIN_SCREEN_BUDGET
        } else {
            screen_budget
        };

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            recipe_api_url,
            lookup_timeout: secs_or(&lookup, "RECIPE_API_TIMEOUT_SECS", defaults.lookup_timeout),
            screen_budget,
            session_ttl: secs_or(&lookup, "USSD_SESSION_TTL_SECS", defaults.session_ttl),
            sweep_interval: secs_or(&lookup, "USSD_SWEEP_INTERVAL_SECS", defaults.sweep_interval),
        }
    }

    /// Full URL of the recipe search endpoint
    pub fn recipes_endpoint(&self) -> String {
        format!("{}/api/recipes", self.recipe_api_url)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, ?default, "Invalid config value, using default");
            default
        }),
    }
}

/// Whole seconds; zero falls back to the default
fn secs_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Duration) -> Duration {
    match parse_or(lookup, key, default.as_secs()) {
        0 => {
            tracing::warn!(key, ?default, "Duration must be positive, using default");
            default
        }
        secs => Duration::from_secs(secs),
    }
}
