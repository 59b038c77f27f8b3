// ABOUTME: Statistics module grouping aggregation primitives and both engines
// ABOUTME: Re-exports the public engine traits and computed DTO types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

//! # Statistics Module
//!
//! Aggregation over a user's workout records. Two engines compose the
//! primitives in [`aggregates`] with the time-window utilities in
//! [`crate::utils::time`]:
//!
//! - [`StatisticsEngine`]: weekly/monthly summaries, daily breakdowns,
//!   trends, exercise distribution.
//! - [`GoalProgressEngine`]: live weekly goal-achievement progress.
//!
//! Every computation is a pure function of the fetched record set plus the
//! injected clock; nothing is cached or persisted.

/// Aggregation primitives over record slices
pub mod aggregates;

/// Weekly/monthly summaries, daily breakdowns, trends, and distribution
pub mod engine;

/// Weekly goal-achievement progress
pub mod goal_engine;

pub use engine::{
    DailyBreakdown, ExerciseDistributionEntry, MonthlySummary, StatisticsEngine,
    StatisticsEngineTrait, TrendPeriod, TrendPoint, WeeklySummary,
};
pub use goal_engine::{GoalProgress, GoalProgressEngine, GoalProgressEngineTrait};
