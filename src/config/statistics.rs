// ABOUTME: Statistics engine configuration with environment variable overrides
// ABOUTME: Trend lookback windows behind a process-wide OnceLock global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Statistics Configuration Module
//!
//! Type-safe configuration for the statistics engine. Values come from
//! environment variables where set, otherwise from the policy defaults in
//! [`crate::constants::time_periods`].
//!
//! # Configuration
//!
//! ```bash
//! export FITTRACK_DAY_TREND_LOOKBACK_DAYS=60
//! export FITTRACK_WEEK_TREND_LOOKBACK_MONTHS=6
//! export FITTRACK_MONTH_TREND_LOOKBACK_MONTHS=24
//! ```

use crate::constants::time_periods;
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Lookback windows that bound trend result-set size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendLookbackConfig {
    /// Daily trends cover the last N days
    pub day_lookback_days: u32,
    /// Weekly trends cover the last N calendar months
    pub week_lookback_months: u32,
    /// Monthly trends cover the last N calendar months
    pub month_lookback_months: u32,
}

impl Default for TrendLookbackConfig {
    fn default() -> Self {
        Self {
            day_lookback_days: time_periods::DEFAULT_DAY_TREND_LOOKBACK_DAYS,
            week_lookback_months: time_periods::DEFAULT_WEEK_TREND_LOOKBACK_MONTHS,
            month_lookback_months: time_periods::DEFAULT_MONTH_TREND_LOOKBACK_MONTHS,
        }
    }
}

/// Top-level statistics engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Trend lookback windows
    pub trends: TrendLookbackConfig,
}

static STATISTICS_CONFIG: OnceLock<StatisticsConfig> = OnceLock::new();

impl StatisticsConfig {
    /// Get the global configuration instance
    ///
    /// Initialized from the environment on first access. Invalid environment
    /// values fall back to the defaults with a warning rather than aborting.
    pub fn global() -> &'static Self {
        STATISTICS_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid statistics configuration, using defaults");
                Self::default()
            })
        })
    }

    /// Build a configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable does not parse as a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            trends: TrendLookbackConfig {
                day_lookback_days: env_u32(
                    "FITTRACK_DAY_TREND_LOOKBACK_DAYS",
                    time_periods::DEFAULT_DAY_TREND_LOOKBACK_DAYS,
                )?,
                week_lookback_months: env_u32(
                    "FITTRACK_WEEK_TREND_LOOKBACK_MONTHS",
                    time_periods::DEFAULT_WEEK_TREND_LOOKBACK_MONTHS,
                )?,
                month_lookback_months: env_u32(
                    "FITTRACK_MONTH_TREND_LOOKBACK_MONTHS",
                    time_periods::DEFAULT_MONTH_TREND_LOOKBACK_MONTHS,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trends.day_lookback_days == 0 {
            return Err(ConfigError::InvalidRange(
                "day_lookback_days must be positive",
            ));
        }
        if self.trends.week_lookback_months == 0 {
            return Err(ConfigError::InvalidRange(
                "week_lookback_months must be positive",
            ));
        }
        if self.trends.month_lookback_months == 0 {
            return Err(ConfigError::InvalidRange(
                "month_lookback_months must be positive",
            ));
        }
        Ok(())
    }
}

fn env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookback_windows() {
        let config = StatisticsConfig::default();
        assert_eq!(config.trends.day_lookback_days, 30);
        assert_eq!(config.trends.week_lookback_months, 3);
        assert_eq!(config.trends.month_lookback_months, 12);
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let config = StatisticsConfig {
            trends: TrendLookbackConfig {
                day_lookback_days: 0,
                ..TrendLookbackConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_global_is_stable() {
        let first = StatisticsConfig::global();
        let second = StatisticsConfig::global();
        assert_eq!(first, second);
    }
}
