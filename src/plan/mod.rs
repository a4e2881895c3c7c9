// ABOUTME: Plan derivation module combining the segment table and the generator
// ABOUTME: Maps a validated profile to calories, meal and workout suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Plan derivation
//!
//! [`segments`] holds the static per-segment data (calorie multipliers and
//! prompt templates); [`generator`] drives the remote completions and
//! assembles the final plan and summary.

pub mod generator;
pub mod segments;

pub use generator::PlanGenerator;
