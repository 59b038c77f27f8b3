// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and engine construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Shared test utilities for `fittrack_core`

use fittrack_core::statistics::{GoalProgressEngine, StatisticsEngine};
use fittrack_core::store::InMemoryStore;
use fittrack_core::test_utils::fixed_clock;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default WARN keeps test output quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Statistics engine over `store` with the clock pinned to `now`
pub fn statistics_engine_at(
    store: Arc<InMemoryStore>,
    now: &str,
) -> StatisticsEngine<InMemoryStore> {
    init_test_logging();
    StatisticsEngine::with_clock(store, fixed_clock(now))
}

/// Goal-progress engine over `store` with the clock pinned to `now`
pub fn goal_engine_at(
    store: Arc<InMemoryStore>,
    now: &str,
) -> GoalProgressEngine<InMemoryStore> {
    init_test_logging();
    GoalProgressEngine::with_clock(store, fixed_clock(now))
}
