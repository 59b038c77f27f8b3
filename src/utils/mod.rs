// ABOUTME: Leaf utility modules shared by both engines
// ABOUTME: Time-window math and the injectable clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack

/// Time-window boundary calculation and the `Clock` abstraction
pub mod time;
