// ABOUTME: In-memory WorkoutStore backend over tokio RwLock-protected vectors
// ABOUTME: Reference implementation for tests and embedding callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

use super::WorkoutStore;
use crate::models::{WorkoutGoal, WorkoutRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<WorkoutRecord>,
    goals: Vec<WorkoutGoal>,
}

/// In-memory store backend
///
/// Cloning is cheap; clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single workout record
    pub async fn insert_record(&self, record: WorkoutRecord) {
        self.inner.write().await.records.push(record);
    }

    /// Insert a batch of workout records
    pub async fn insert_records(&self, records: Vec<WorkoutRecord>) {
        self.inner.write().await.records.extend(records);
    }

    /// Insert a goal
    pub async fn insert_goal(&self, goal: WorkoutGoal) {
        self.inner.write().await.goals.push(goal);
    }

    /// Number of stored records, deleted ones included
    pub async fn record_count(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

#[async_trait]
impl WorkoutStore for InMemoryStore {
    async fn workout_records(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<WorkoutRecord>> {
        let inner = self.inner.read().await;
        let records = inner
            .records
            .iter()
            .filter(|r| r.user_id == user_id && r.is_live())
            .filter(|r| start.is_none_or(|s| r.exercise_date >= s))
            .filter(|r| end.is_none_or(|e| r.exercise_date < e))
            .cloned()
            .collect();
        Ok(records)
    }

    async fn active_goal(&self, user_id: Uuid) -> Result<Option<WorkoutGoal>> {
        let inner = self.inner.read().await;
        Ok(inner
            .goals
            .iter()
            .find(|g| g.user_id == user_id && g.is_active)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record_on;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_date_range_filter_is_exclusive_end() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        store
            .insert_records(vec![
                record_on(user_id, "2025-07-13", 10, dec!(50)),
                record_on(user_id, "2025-07-14", 20, dec!(100)),
                record_on(user_id, "2025-07-20", 30, dec!(150)),
                record_on(user_id, "2025-07-21", 40, dec!(200)),
            ])
            .await;

        let start = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 7, 21).unwrap();
        let records = store
            .workout_records(user_id, Some(start), Some(end))
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = records.iter().map(|r| r.exercise_date).collect();
        assert_eq!(records.len(), 2);
        assert!(dates.contains(&start));
        assert!(!dates.contains(&end));
    }

    #[tokio::test]
    async fn test_deleted_records_are_not_returned() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let mut deleted = record_on(user_id, "2025-07-14", 20, dec!(100));
        deleted.is_deleted = true;
        store.insert_record(deleted).await;
        store
            .insert_record(record_on(user_id, "2025-07-14", 30, dec!(150)))
            .await;

        let records = store.workout_records(user_id, None, None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration_minutes, 30);
        assert_eq!(store.record_count().await, 2);
    }

    #[tokio::test]
    async fn test_records_are_scoped_to_user() {
        let store = InMemoryStore::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        store
            .insert_record(record_on(user_a, "2025-07-14", 20, dec!(100)))
            .await;
        store
            .insert_record(record_on(user_b, "2025-07-14", 45, dec!(300)))
            .await;

        let records = store.workout_records(user_a, None, None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, user_a);
    }

    #[tokio::test]
    async fn test_active_goal_lookup() {
        let store = InMemoryStore::new();
        let user_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let mut inactive = WorkoutGoal::new(user_id, Some(100), None, start);
        inactive.is_active = false;
        store.insert_goal(inactive).await;

        assert!(store.active_goal(user_id).await.unwrap().is_none());

        store
            .insert_goal(WorkoutGoal::new(user_id, Some(150), None, start))
            .await;
        let active = store.active_goal(user_id).await.unwrap().unwrap();
        assert_eq!(active.weekly_minutes, Some(150));
    }
}
