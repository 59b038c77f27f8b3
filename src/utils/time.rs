// ABOUTME: Time-window utilities for week and month boundary calculation
// ABOUTME: Monday-start weeks, exclusive-end ranges, ISO-8601 week keys, injectable clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Time-window utilities
//!
//! Canonical period boundaries for every aggregation in this crate:
//!
//! - Weeks start on **Monday**.
//! - All range filters use the **exclusive-end** convention
//!   `[start, start + period)`, so boundary dates are never double-counted.
//! - Week numbering is **ISO-8601** (first day Monday, week 1 contains the
//!   first Thursday of the year), applied uniformly via [`Datelike::iso_week`].

use crate::constants::time_periods;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Injectable time source so "current week/month" defaults are testable
pub trait Clock: Send + Sync {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Monday of the week containing `date`
///
/// Idempotent: `week_start(week_start(d)) == week_start(d)`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_since_monday)
}

/// Exclusive upper bound of the week starting at `start`
#[must_use]
pub fn week_end_exclusive(start: NaiveDate) -> NaiveDate {
    start + Duration::days(time_periods::DAYS_PER_WEEK)
}

/// Last calendar day (Sunday) of the week starting at `start`, for display
#[must_use]
pub fn week_last_day(start: NaiveDate) -> NaiveDate {
    start + Duration::days(time_periods::LAST_DAY_OF_WEEK_OFFSET)
}

/// First calendar day of the given month
///
/// # Errors
///
/// Returns a validation error when `month` is not in `1..=12` or the year
/// is outside the supported calendar range.
pub fn month_start(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AppError::value_out_of_range(format!("invalid year/month: {year}-{month:02}"))
    })
}

/// First calendar day of the month after the given month
///
/// Handles the December to January rollover.
///
/// # Errors
///
/// Returns a validation error when the input month is invalid.
pub fn next_month_start(year: i32, month: u32) -> AppResult<NaiveDate> {
    // Validate the input month even though only the successor is returned
    month_start(year, month)?;
    if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    }
}

/// ISO week key for trend bucketing: `(iso_year, iso_week)`
///
/// The ISO year can differ from the calendar year near year boundaries.
#[must_use]
pub fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let week = date.iso_week();
    (week.year(), week.week())
}

/// ISO week label: `2025-W29`
#[must_use]
pub fn iso_week_label(date: NaiveDate) -> String {
    let (year, week) = iso_week_key(date);
    format!("{year}-W{week:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-07-16 is a Wednesday
        assert_eq!(week_start(date(2025, 7, 16)), date(2025, 7, 14));
        // Sunday belongs to the week that began the previous Monday
        assert_eq!(week_start(date(2025, 7, 20)), date(2025, 7, 14));
        // A Monday maps to itself
        assert_eq!(week_start(date(2025, 7, 14)), date(2025, 7, 14));
    }

    #[test]
    fn test_week_start_idempotent() {
        for offset in 0..14 {
            let d = date(2025, 7, 1) + Duration::days(offset);
            assert_eq!(week_start(week_start(d)), week_start(d));
        }
    }

    #[test]
    fn test_week_boundaries_contain_date() {
        for offset in 0..30 {
            let d = date(2025, 12, 15) + Duration::days(offset);
            let ws = week_start(d);
            assert!(ws <= d);
            assert!(d < week_end_exclusive(ws));
        }
    }

    #[test]
    fn test_week_start_across_year_boundary() {
        // 2026-01-01 is a Thursday; its week began Monday 2025-12-29
        assert_eq!(week_start(date(2026, 1, 1)), date(2025, 12, 29));
    }

    #[test]
    fn test_week_last_day() {
        assert_eq!(week_last_day(date(2025, 7, 14)), date(2025, 7, 20));
    }

    #[test]
    fn test_month_start_and_rollover() {
        assert_eq!(month_start(2025, 7).unwrap(), date(2025, 7, 1));
        assert_eq!(next_month_start(2025, 7).unwrap(), date(2025, 8, 1));
        assert_eq!(next_month_start(2025, 12).unwrap(), date(2026, 1, 1));
    }

    #[test]
    fn test_month_start_rejects_invalid_month() {
        assert!(month_start(2025, 0).is_err());
        assert!(month_start(2025, 13).is_err());
        assert!(next_month_start(2025, 13).is_err());
    }

    #[test]
    fn test_iso_week_key_mid_year() {
        // Monday 2025-07-14 opens ISO week 29 of 2025
        assert_eq!(iso_week_key(date(2025, 7, 14)), (2025, 29));
        assert_eq!(iso_week_key(date(2025, 7, 20)), (2025, 29));
    }

    #[test]
    fn test_iso_week_key_year_boundary() {
        // Monday 2025-12-29 belongs to ISO week 1 of 2026
        assert_eq!(iso_week_key(date(2025, 12, 29)), (2026, 1));
        // Friday 2021-01-01 belongs to ISO week 53 of 2020
        assert_eq!(iso_week_key(date(2021, 1, 1)), (2020, 53));
    }

    #[test]
    fn test_iso_week_label_zero_padded() {
        assert_eq!(iso_week_label(date(2025, 12, 29)), "2026-W01");
        assert_eq!(iso_week_label(date(2025, 7, 16)), "2025-W29");
    }
}
