// ABOUTME: Static per-segment data table with calorie multipliers and prompt templates
// ABOUTME: Pure functions for base calorie estimates and goal adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! # Segment Table
//!
//! One row per situational segment: a per-kg calorie multiplier plus the
//! meal and workout prompt templates sent to the remote model. The four
//! rows are configuration data, not behavior, so they live in a static
//! table with pure lookup functions rather than a dispatch hierarchy.

use crate::models::{Goal, Segment};

/// Calorie intake reduction factor for weight loss
const WEIGHT_LOSS_FACTOR: f64 = 0.9;
/// Calorie intake increase factor for muscle gain
const MUSCLE_GAIN_FACTOR: f64 = 1.1;

/// Placeholder substituted with the weight in meal templates
const WEIGHT_PLACEHOLDER: &str = "{weight}";

/// One row of the segment table
#[derive(Debug, Clone, Copy)]
pub struct SegmentRow {
    /// The segment this row describes
    pub segment: Segment,
    /// Daily calories per kilogram of body weight
    pub calories_per_kg: f64,
    /// Meal prompt template with a `{weight}` placeholder
    meal_template: &'static str,
    /// Workout prompt sent verbatim
    workout_prompt: &'static str,
}

/// The full segment table, in form display order
pub const SEGMENT_TABLE: [SegmentRow; 4] = [
    SegmentRow {
        segment: Segment::StayHome,
        calories_per_kg: 22.0,
        meal_template: "Generate a meal plan for a person staying at home weighing {weight} kg.",
        workout_prompt: "Suggest a home-friendly workout routine.",
    },
    SegmentRow {
        segment: Segment::AwayFromFamily,
        calories_per_kg: 25.0,
        meal_template:
            "Generate a meal plan for a person who travels frequently and weighs {weight} kg.",
        workout_prompt: "Suggest a workout routine for someone who travels often.",
    },
    SegmentRow {
        segment: Segment::PostPartum,
        calories_per_kg: 28.0,
        meal_template: "Generate a meal plan for a postpartum woman weighing {weight} kg.",
        workout_prompt: "Suggest a workout routine for a postpartum woman.",
    },
    SegmentRow {
        segment: Segment::Recovering,
        calories_per_kg: 24.0,
        meal_template: "Generate a meal plan for a person in recovery weighing {weight} kg.",
        workout_prompt:
            "Suggest a light workout routine for a person recovering from an illness or injury.",
    },
];

/// Look up the table row for a segment
#[must_use]
pub fn row_for(segment: Segment) -> &'static SegmentRow {
    SEGMENT_TABLE
        .iter()
        .find(|row| row.segment == segment)
        .unwrap_or(&SEGMENT_TABLE[0])
}

/// Per-kg calorie multiplier for a segment
#[must_use]
pub fn calories_per_kg(segment: Segment) -> f64 {
    row_for(segment).calories_per_kg
}

/// Meal prompt for a segment, with the weight embedded
#[must_use]
pub fn meal_prompt(segment: Segment, weight: f64) -> String {
    row_for(segment)
        .meal_template
        .replace(WEIGHT_PLACEHOLDER, &format!("{weight}"))
}

/// Workout prompt for a segment
#[must_use]
pub fn workout_prompt(segment: Segment) -> &'static str {
    row_for(segment).workout_prompt
}

/// Base calorie estimate before goal adjustment: `round(weight x multiplier)`
#[must_use]
pub fn base_calories(weight: f64, segment: Segment) -> i64 {
    (weight * calories_per_kg(segment)).round() as i64
}

/// Apply the goal adjustment exactly once, truncating to an integer
#[must_use]
pub fn adjust_for_goal(base: i64, goal: Goal) -> i64 {
    match goal {
        Goal::WeightLoss => (base as f64 * WEIGHT_LOSS_FACTOR) as i64,
        Goal::MuscleGain => (base as f64 * MUSCLE_GAIN_FACTOR) as i64,
        Goal::Maintenance => base,
    }
}
