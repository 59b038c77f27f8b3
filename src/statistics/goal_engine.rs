// ABOUTME: Goal-progress engine computing live weekly achievement against targets
// ABOUTME: Always recomputed from the current week's records, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack
//! Weekly goal progress engine

use crate::constants::percent;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{WorkoutGoal, WorkoutRecord};
use crate::statistics::aggregates::{total_calories, total_duration_minutes};
use crate::store::WorkoutStore;
use crate::utils::time::{week_end_exclusive, week_start, Clock, SystemClock};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Trait for goal-progress computation
#[async_trait]
pub trait GoalProgressEngineTrait {
    /// Progress of a goal against the current wall-clock week
    ///
    /// The window is always the week containing "now", independent of the
    /// goal's own start and end dates.
    async fn compute_progress(&self, goal: &WorkoutGoal) -> AppResult<GoalProgress>;

    /// Progress of the user's active goal, `None` when no goal is active
    async fn active_goal_progress(&self, user_id: Uuid) -> AppResult<Option<GoalProgress>>;
}

/// Goal-progress engine over an injected store and clock
pub struct GoalProgressEngine<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: WorkoutStore> GoalProgressEngine<S> {
    /// Create an engine with the system clock
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create an engine with a custom clock
    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Achievement percent of `current` against an optional target
    fn achievement_percent(current: Decimal, target: Option<Decimal>) -> Decimal {
        match target {
            Some(t) if t > Decimal::ZERO => {
                (current / t * Decimal::ONE_HUNDRED).round_dp(percent::PRECISION_DP)
            }
            _ => Decimal::ZERO,
        }
    }
}

#[async_trait]
impl<S: WorkoutStore> GoalProgressEngineTrait for GoalProgressEngine<S> {
    async fn compute_progress(&self, goal: &WorkoutGoal) -> AppResult<GoalProgress> {
        let today = self.clock.now().date_naive();
        let start = week_start(today);
        let end = week_end_exclusive(start);

        let records: Vec<WorkoutRecord> = self
            .store
            .workout_records(goal.user_id, Some(start), Some(end))
            .await
            .map_err(AppError::from)?
            .into_iter()
            .filter(|r| r.is_live())
            .collect();

        let current_week_minutes = total_duration_minutes(&records);
        let current_week_calories = total_calories(&records);

        let minutes_achievement_percent = Self::achievement_percent(
            Decimal::from(current_week_minutes),
            goal.weekly_minutes.map(Decimal::from),
        );
        let calories_achievement_percent =
            Self::achievement_percent(current_week_calories, goal.weekly_calories);

        let is_minutes_achieved = goal
            .weekly_minutes
            .is_some_and(|target| current_week_minutes >= target);
        let is_calories_achieved = goal
            .weekly_calories
            .is_some_and(|target| current_week_calories >= target);

        AppLogger::log_goal_progress(
            &goal.user_id.to_string(),
            &goal.id.to_string(),
            is_minutes_achieved,
            is_calories_achieved,
        );

        Ok(GoalProgress {
            id: goal.id,
            user_id: goal.user_id,
            weekly_minutes: goal.weekly_minutes,
            weekly_calories: goal.weekly_calories,
            start_date: goal.start_date,
            end_date: goal.end_date,
            is_active: goal.is_active,
            current_week_minutes,
            current_week_calories,
            minutes_achievement_percent,
            calories_achievement_percent,
            is_minutes_achieved,
            is_calories_achieved,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        })
    }

    async fn active_goal_progress(&self, user_id: Uuid) -> AppResult<Option<GoalProgress>> {
        let goal = self
            .store
            .active_goal(user_id)
            .await
            .map_err(AppError::from)?;

        match goal {
            Some(goal) => Ok(Some(self.compute_progress(&goal).await?)),
            None => Ok(None),
        }
    }
}

/// Point-in-time goal progress snapshot
///
/// Combines the goal's static fields with values computed from the current
/// week's records. Recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weekly_minutes: Option<u32>,
    pub weekly_calories: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    /// Minutes logged in the current week
    pub current_week_minutes: u32,
    /// Calories logged in the current week
    pub current_week_calories: Decimal,
    /// Percent of the minutes target met, uncapped, 0 without a target
    pub minutes_achievement_percent: Decimal,
    /// Percent of the calories target met, uncapped, 0 without a target
    pub calories_achievement_percent: Decimal,
    /// True iff a minutes target exists and is met
    pub is_minutes_achieved: bool,
    /// True iff a calories target exists and is met
    pub is_calories_achieved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
