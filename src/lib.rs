// ABOUTME: Main library entry point for the FitTrack statistics engine
// ABOUTME: Exposes workout aggregation, trend bucketing, and goal-progress computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! The statistics aggregation and goal-progress engine behind the FitTrack
//! fitness tracker. Given a user's workout records it computes weekly and
//! monthly summaries, daily breakdowns, multi-granularity trends, exercise
//! distribution, and live goal-achievement progress.
//!
//! ## Architecture
//!
//! - **Store seam**: engines read records through the [`store::WorkoutStore`]
//!   trait; persistence lives outside this crate. [`store::InMemoryStore`]
//!   is the reference backend.
//! - **Engines**: [`statistics::StatisticsEngine`] for summaries, trends and
//!   distribution; [`statistics::GoalProgressEngine`] for weekly goal
//!   progress. Every computation is a pure function of the fetched records
//!   plus the injected [`utils::time::Clock`].
//! - **Conventions**: weeks start on Monday, all range filters are
//!   exclusive-end, week numbering is ISO-8601, calorie math is fixed-point
//!   [`rust_decimal::Decimal`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fittrack_core::statistics::{StatisticsEngine, StatisticsEngineTrait};
//! use fittrack_core::store::InMemoryStore;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> fittrack_core::errors::AppResult<()> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let engine = StatisticsEngine::new(store);
//!     let summary = engine.weekly_summary(Uuid::new_v4(), None).await?;
//!     println!("this week: {} min", summary.total_duration_minutes);
//!     Ok(())
//! }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Application constants grouped by concern
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Structured logging configuration and domain log helpers
pub mod logging;

/// Domain models for workout records and goals
pub mod models;

/// Statistics and goal-progress engines with their computed DTOs
pub mod statistics;

/// Read-only data-access seam and the in-memory reference backend
pub mod store;

/// Leaf utilities: time-window math and the injectable clock
pub mod utils;

/// Test builders for records, goals, and a pinned clock
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
