// ABOUTME: Read-only data-access seam for workout records and goals
// ABOUTME: Trait abstraction over persistence with an in-memory reference backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Data-access abstraction for the statistics engines
//!
//! Persistence lives outside this crate; the engines only need the two read
//! operations below. Production backends wrap the real database, tests and
//! embedding callers use [`InMemoryStore`].

use crate::models::{WorkoutGoal, WorkoutRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

pub mod memory;

pub use memory::InMemoryStore;

/// Core read seam over workout data
///
/// All statistics are computed from the records this trait returns. Backends
/// must exclude soft-deleted records; the engines filter again defensively,
/// so a backend that fails to do so degrades performance, not correctness.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Non-deleted workout records for a user, optionally restricted to
    /// exercise dates in `[start, end)`. Ordering is not guaranteed;
    /// callers sort and group as needed.
    async fn workout_records(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<WorkoutRecord>>;

    /// The user's single active goal, if any
    async fn active_goal(&self, user_id: Uuid) -> Result<Option<WorkoutGoal>>;
}
