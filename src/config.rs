//! Environment-driven service configuration.

use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
}

/// Read a variable, falling back to `default` when unset or invalid.
fn env_or<T: FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Load from the process environment (after `.env`, if any).
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cache_capacity: env_or("ANALYSIS_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY),
            cache_ttl: Duration::from_secs(env_or("ANALYSIS_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("WATER_INSIGHTS_TEST_CAPACITY", "lots");
        assert_eq!(env_or("WATER_INSIGHTS_TEST_CAPACITY", 42_u64), 42);

        std::env::set_var("WATER_INSIGHTS_TEST_CAPACITY", " 7 ");
        assert_eq!(env_or("WATER_INSIGHTS_TEST_CAPACITY", 42_u64), 7);
    }

    #[test]
    fn test_env_or_unset() {
        assert_eq!(env_or("WATER_INSIGHTS_TEST_UNSET", 600_u64), 600);
    }
}
