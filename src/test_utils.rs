// ABOUTME: Test utilities for creating consistent workout test data
// ABOUTME: Record and goal builders plus a pinned clock for deterministic windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Shared test builders
//!
//! Available to this crate's tests and, behind the `testing` feature, to
//! downstream crates that embed the engines.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::models::{WorkoutGoal, WorkoutRecord};
use crate::store::InMemoryStore;
use crate::utils::time::Clock;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock pinned to an RFC 3339 instant, e.g. `2025-07-16T12:00:00Z`
#[must_use]
pub fn fixed_clock(instant: &str) -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        instant
            .parse::<DateTime<Utc>>()
            .expect("valid RFC 3339 instant"),
    ))
}

/// Parse a `yyyy-MM-dd` calendar date
#[must_use]
pub fn naive_date(date: &str) -> NaiveDate {
    date.parse().expect("valid yyyy-MM-dd date")
}

/// A live workout record on the given date
#[must_use]
pub fn record_on(
    user_id: Uuid,
    date: &str,
    duration_minutes: u32,
    calories_burned: Decimal,
) -> WorkoutRecord {
    WorkoutRecord::new(
        user_id,
        naive_date(date),
        Uuid::new_v4(),
        duration_minutes,
        calories_burned,
    )
}

/// A live workout record with a resolved exercise-type name
#[must_use]
pub fn named_record_on(
    user_id: Uuid,
    date: &str,
    exercise_name: &str,
    duration_minutes: u32,
    calories_burned: Decimal,
) -> WorkoutRecord {
    record_on(user_id, date, duration_minutes, calories_burned).with_exercise_name(exercise_name)
}

/// An active goal starting on the given date
#[must_use]
pub fn goal_with_targets(
    user_id: Uuid,
    weekly_minutes: Option<u32>,
    weekly_calories: Option<Decimal>,
    start_date: &str,
) -> WorkoutGoal {
    WorkoutGoal::new(user_id, weekly_minutes, weekly_calories, naive_date(start_date))
}

/// An in-memory store pre-seeded with the given records
pub async fn seeded_store(records: Vec<WorkoutRecord>) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.insert_records(records).await;
    store
}
