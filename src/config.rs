//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment
//! variables.

use std::env;

use crate::cache::{DEFAULT_EVICTION_INTERVAL_MS, DEFAULT_OBJECT_LIFETIME_MS};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long entries are kept after creation, in milliseconds
    pub object_lifetime_ms: u64,
    /// How often the background eviction pass runs, in milliseconds
    pub eviction_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OBJECT_LIFETIME_MS` - Entry lifetime in milliseconds (default: 300000)
    /// - `EVICTION_INTERVAL_MS` - Eviction frequency in milliseconds (default: 300000)
    pub fn from_env() -> Self {
        Self {
            object_lifetime_ms: env::var("OBJECT_LIFETIME_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_OBJECT_LIFETIME_MS),
            eviction_interval_ms: env::var("EVICTION_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EVICTION_INTERVAL_MS),
        }
    }

    /// Checks that both durations are usable.
    ///
    /// A zero lifetime would expire entries the moment they are written and
    /// a zero interval would spin the eviction task, so both are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.object_lifetime_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "object_lifetime_ms must be greater than zero".to_string(),
            ));
        }
        if self.eviction_interval_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "eviction_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            object_lifetime_ms: DEFAULT_OBJECT_LIFETIME_MS,
            eviction_interval_ms: DEFAULT_EVICTION_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.object_lifetime_ms, 300_000);
        assert_eq!(config.eviction_interval_ms, 300_000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("OBJECT_LIFETIME_MS");
        env::remove_var("EVICTION_INTERVAL_MS");

        let config = Config::from_env();
        assert_eq!(config.object_lifetime_ms, 300_000);
        assert_eq!(config.eviction_interval_ms, 300_000);
    }

    #[test]
    fn test_config_validate_accepts_positive_durations() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_zero_lifetime() {
        let config = Config {
            object_lifetime_ms: 0,
            eviction_interval_ms: 1_000,
        };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_validate_rejects_zero_interval() {
        let config = Config {
            object_lifetime_ms: 1_000,
            eviction_interval_ms: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(CacheError::InvalidConfig(_))
        ));
    }
}
