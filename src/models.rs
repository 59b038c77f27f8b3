// ABOUTME: Domain models for workout records and weekly goals
// ABOUTME: Read-only inputs to the statistics and goal-progress engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! Common data models for workout data
//!
//! Both types are created and mutated by external collaborators (the
//! workout-logging and goal-management services); the engines in this crate
//! only read them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Calendar date of the session (no time component)
    pub exercise_date: NaiveDate,
    /// Exercise type reference
    pub exercise_type_id: Uuid,
    /// Exercise type name as resolved by the store; `None` marks a
    /// referential inconsistency and aggregates under "Unknown"
    pub exercise_type_name: Option<String>,
    /// Optional equipment reference
    pub equipment_id: Option<Uuid>,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Calories burned, fixed-point
    pub calories_burned: Decimal,
    /// Body weight at session time, kilograms
    pub body_weight_kg: Option<Decimal>,
    /// Free-text note
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
    /// Soft-delete flag; deleted records never contribute to aggregations
    pub is_deleted: bool,
}

impl WorkoutRecord {
    /// Create a new record with generated id and current timestamps
    #[must_use]
    pub fn new(
        user_id: Uuid,
        exercise_date: NaiveDate,
        exercise_type_id: Uuid,
        duration_minutes: u32,
        calories_burned: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercise_date,
            exercise_type_id,
            exercise_type_name: None,
            equipment_id: None,
            duration_minutes,
            calories_burned,
            body_weight_kg: None,
            notes: None,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        }
    }

    /// Attach the resolved exercise-type name
    #[must_use]
    pub fn with_exercise_name(mut self, name: impl Into<String>) -> Self {
        self.exercise_type_name = Some(name.into());
        self
    }

    /// Attach an equipment reference
    #[must_use]
    pub fn with_equipment(mut self, equipment_id: Uuid) -> Self {
        self.equipment_id = Some(equipment_id);
        self
    }

    /// Whether this record participates in aggregations
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !self.is_deleted
    }
}

/// A user's weekly workout target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutGoal {
    /// Unique goal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Weekly minutes target, if set
    pub weekly_minutes: Option<u32>,
    /// Weekly calories target, if set
    pub weekly_calories: Option<Decimal>,
    /// When the goal takes effect
    pub start_date: NaiveDate,
    /// When the goal ends, if bounded
    pub end_date: Option<NaiveDate>,
    /// At most one goal per user is active at a time (enforced externally)
    pub is_active: bool,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// When the goal was last updated
    pub updated_at: DateTime<Utc>,
}

impl WorkoutGoal {
    /// Create a new active goal with generated id and current timestamps
    #[must_use]
    pub fn new(
        user_id: Uuid,
        weekly_minutes: Option<u32>,
        weekly_calories: Option<Decimal>,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            weekly_minutes,
            weekly_calories,
            start_date,
            end_date: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the goal defines at least one target
    #[must_use]
    pub const fn has_target(&self) -> bool {
        self.weekly_minutes.is_some() || self.weekly_calories.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_is_live() {
        let record = WorkoutRecord::new(
            Uuid::new_v4(),
            date(2025, 7, 14),
            Uuid::new_v4(),
            30,
            dec!(200),
        );
        assert!(record.is_live());
        assert!(record.exercise_type_name.is_none());
        assert!(record.equipment_id.is_none());
    }

    #[test]
    fn test_record_builder_attachments() {
        let equipment_id = Uuid::new_v4();
        let record = WorkoutRecord::new(
            Uuid::new_v4(),
            date(2025, 7, 14),
            Uuid::new_v4(),
            45,
            dec!(320.5),
        )
        .with_exercise_name("rowing")
        .with_equipment(equipment_id);

        assert_eq!(record.exercise_type_name.as_deref(), Some("rowing"));
        assert_eq!(record.equipment_id, Some(equipment_id));
    }

    #[test]
    fn test_deleted_record_is_not_live() {
        let mut record = WorkoutRecord::new(
            Uuid::new_v4(),
            date(2025, 7, 14),
            Uuid::new_v4(),
            30,
            dec!(200),
        );
        record.is_deleted = true;
        assert!(!record.is_live());
    }

    #[test]
    fn test_goal_has_target() {
        let user_id = Uuid::new_v4();
        let start = date(2025, 7, 1);

        let minutes_only = WorkoutGoal::new(user_id, Some(150), None, start);
        assert!(minutes_only.has_target());

        let no_target = WorkoutGoal::new(user_id, None, None, start);
        assert!(!no_target.has_target());
    }
}
