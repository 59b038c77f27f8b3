// ABOUTME: Aggregation primitives over filtered workout-record slices
// ABOUTME: Fixed-point sums, distinct-day counts, and guarded percent math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Aggregation primitives
//!
//! All functions operate on already-fetched record slices and never touch
//! the store. Calorie sums use [`Decimal`] accumulation; percent results are
//! rounded to two places per the DTO formatting contract.

#![allow(clippy::cast_possible_truncation)] // counts bounded far below u32::MAX

use crate::constants::percent;
use crate::models::WorkoutRecord;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Drop soft-deleted records
///
/// Store backends already exclude deleted records; the engines filter again
/// so the invariant holds even against a backend that does not.
pub fn live(records: &[WorkoutRecord]) -> impl Iterator<Item = &WorkoutRecord> {
    records.iter().filter(|r| r.is_live())
}

/// Total duration in minutes
#[must_use]
pub fn total_duration_minutes(records: &[WorkoutRecord]) -> u32 {
    live(records).map(|r| r.duration_minutes).sum()
}

/// Total calories burned, fixed-point accumulation
#[must_use]
pub fn total_calories(records: &[WorkoutRecord]) -> Decimal {
    live(records).map(|r| r.calories_burned).sum()
}

/// Number of distinct calendar days with at least one record
#[must_use]
pub fn distinct_workout_days(records: &[WorkoutRecord]) -> u32 {
    let days: HashSet<NaiveDate> = live(records).map(|r| r.exercise_date).collect();
    days.len() as u32
}

/// Number of live records
#[must_use]
pub fn record_count(records: &[WorkoutRecord]) -> u32 {
    live(records).count() as u32
}

/// Percent change from `previous` to `current`, rounded to two places
///
/// A zero baseline cannot be divided by: any growth from zero reports a
/// full 100% gain, no change from zero reports 0%.
#[must_use]
pub fn percent_change(previous: Decimal, current: Decimal) -> Decimal {
    if previous == Decimal::ZERO {
        if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(percent::PRECISION_DP)
    }
}

/// `part` as a percentage of `total`, rounded to two places; 0 when `total`
/// is 0
#[must_use]
pub fn percent_of_total(part: u32, total: u32) -> Decimal {
    if total == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(part) / Decimal::from(total) * Decimal::ONE_HUNDRED)
            .round_dp(percent::PRECISION_DP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record_on;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(dec!(0), dec!(75)), dec!(100));
        assert_eq!(percent_change(dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn test_percent_change_decline() {
        assert_eq!(percent_change(dec!(200), dec!(150)), dec!(-25.00));
    }

    #[test]
    fn test_percent_change_rounds_to_two_places() {
        // (100 - 300) / 300 * 100 = -66.666...
        assert_eq!(percent_change(dec!(300), dec!(100)), dec!(-66.67));
    }

    #[test]
    fn test_decimal_sum_has_no_drift() {
        let user_id = Uuid::new_v4();
        let records: Vec<_> = (0..10)
            .map(|_| record_on(user_id, "2025-07-14", 10, dec!(0.1)))
            .collect();
        // 0.1 summed ten times is exactly 1.0 in fixed point
        assert_eq!(total_calories(&records), dec!(1.0));
    }

    #[test]
    fn test_distinct_workout_days() {
        let user_id = Uuid::new_v4();
        let records = vec![
            record_on(user_id, "2025-07-14", 30, dec!(200)),
            record_on(user_id, "2025-07-14", 15, dec!(90)),
            record_on(user_id, "2025-07-16", 45, dec!(300)),
        ];
        assert_eq!(distinct_workout_days(&records), 2);
        assert_eq!(record_count(&records), 3);
        assert_eq!(total_duration_minutes(&records), 90);
    }

    #[test]
    fn test_soft_deleted_records_contribute_nothing() {
        let user_id = Uuid::new_v4();
        let mut deleted = record_on(user_id, "2025-07-15", 60, dec!(400));
        deleted.is_deleted = true;
        let records = vec![record_on(user_id, "2025-07-14", 30, dec!(200)), deleted];

        assert_eq!(total_duration_minutes(&records), 30);
        assert_eq!(total_calories(&records), dec!(200));
        assert_eq!(distinct_workout_days(&records), 1);
        assert_eq!(record_count(&records), 1);
    }

    #[test]
    fn test_percent_of_total() {
        assert_eq!(percent_of_total(3, 4), dec!(75.00));
        assert_eq!(percent_of_total(1, 3), dec!(33.33));
        assert_eq!(percent_of_total(0, 0), dec!(0));
    }

    #[test]
    fn test_empty_slice_yields_zeroes() {
        let records: Vec<WorkoutRecord> = Vec::new();
        assert_eq!(total_duration_minutes(&records), 0);
        assert_eq!(total_calories(&records), Decimal::ZERO);
        assert_eq!(distinct_workout_days(&records), 0);
    }
}
