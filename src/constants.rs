// ABOUTME: Application constants grouped by concern for the statistics engine
// ABOUTME: Time-period policy defaults, date formats, labels, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Application constants
//!
//! Grouped into small namespaces so call sites read as
//! `time_periods::DAYS_PER_WEEK` rather than bare numbers.

/// Calendar and lookback-window constants
pub mod time_periods {
    /// Days in a Monday-start week
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Offset from a week's Monday to its last calendar day (Sunday)
    pub const LAST_DAY_OF_WEEK_OFFSET: i64 = 6;

    /// Default lookback for daily trends.
    ///
    /// The lookback windows bound result-set size; they are policy defaults,
    /// not invariants, and can be overridden through
    /// [`crate::config::StatisticsConfig`].
    pub const DEFAULT_DAY_TREND_LOOKBACK_DAYS: u32 = 30;

    /// Default lookback for weekly trends, in calendar months
    pub const DEFAULT_WEEK_TREND_LOOKBACK_MONTHS: u32 = 3;

    /// Default lookback for monthly trends, in calendar months
    pub const DEFAULT_MONTH_TREND_LOOKBACK_MONTHS: u32 = 12;
}

/// Date and period label formats used in every computed DTO
pub mod formats {
    /// Calendar dates: `2025-07-14`
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Month labels: `2025-07`
    pub const MONTH_FORMAT: &str = "%Y-%m";

    /// Day-of-week names: `Monday`
    pub const DAY_NAME_FORMAT: &str = "%A";
}

/// Percent formatting rules
pub mod percent {
    /// All percentages in computed DTOs are rounded to this many places
    pub const PRECISION_DP: u32 = 2;
}

/// Fallback labels for unresolved references
pub mod labels {
    /// Distribution group label when an exercise type cannot be resolved
    pub const UNKNOWN_EXERCISE: &str = "Unknown";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// This crate's service name
    pub const FITTRACK_CORE: &str = "fittrack-core";
}
