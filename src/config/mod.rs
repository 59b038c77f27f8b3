// ABOUTME: Configuration module for the statistics engine
// ABOUTME: Re-exports statistics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

/// Statistics engine configuration (trend lookback windows)
pub mod statistics;

pub use statistics::{ConfigError, StatisticsConfig, TrendLookbackConfig};
