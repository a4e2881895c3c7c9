// ABOUTME: Common data models for user profiles and generated fitness plans
// ABOUTME: Defines segments, goals and the validated profile submitted through the form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Core domain models
//!
//! A [`Profile`] is what the form submits, validated once and immutable
//! afterwards. A [`GeneratedPlan`] is what the generator derives from it.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Minimum accepted age
pub const MIN_AGE: u32 = 16;
/// Maximum accepted age
pub const MAX_AGE: u32 = 100;
/// Minimum accepted weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Validation message shown when a required field is empty or zero
pub const FILL_IN_ALL_FIELDS: &str = "Please fill in all fields!";

/// Situational segment a user selects on the form
///
/// The four labels are fixed; [`Segment::from_label`] resolves anything
/// else to [`Segment::StayHome`]. That silent fallback mirrors the intake
/// form's historical behavior and is covered by tests rather than turned
/// into a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Person staying at home
    StayHome,
    /// Person staying away from family, travelling frequently
    AwayFromFamily,
    /// Post-partum women
    PostPartum,
    /// Persons recovering from an illness or injury
    Recovering,
}

impl Segment {
    /// All segments in form display order
    pub const ALL: [Self; 4] = [
        Self::StayHome,
        Self::AwayFromFamily,
        Self::PostPartum,
        Self::Recovering,
    ];

    /// Resolve a form label to a segment, falling back to [`Self::StayHome`]
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Person stay away from family" => Self::AwayFromFamily,
            "Post-partum women" => Self::PostPartum,
            "Recovering persons" => Self::Recovering,
            _ => Self::StayHome,
        }
    }

    /// The label shown on the form and stored with each record
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StayHome => "Person stay in the house",
            Self::AwayFromFamily => "Person stay away from family",
            Self::PostPartum => "Post-partum women",
            Self::Recovering => "Recovering persons",
        }
    }

    /// Decorative icon shown next to the segment
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::StayHome => "\u{1f3e1}",
            Self::AwayFromFamily => "\u{1f30d}",
            Self::PostPartum => "\u{1f476}",
            Self::Recovering => "\u{1f9b0}",
        }
    }
}

/// Fitness goal a user selects on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Reduce calorie intake
    WeightLoss,
    /// Increase calorie intake
    MuscleGain,
    /// Keep calorie intake unchanged
    Maintenance,
}

impl Goal {
    /// All goals in form display order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::MuscleGain, Self::Maintenance];

    /// Parse a form label
    ///
    /// # Errors
    ///
    /// Returns a validation error for anything other than the three fixed labels
    pub fn from_label(label: &str) -> AppResult<Self> {
        match label {
            "Weight Loss" => Ok(Self::WeightLoss),
            "Muscle Gain" => Ok(Self::MuscleGain),
            "Maintenance" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal: {other}"
            ))),
        }
    }

    /// The label shown on the form and stored with each record
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// A validated user profile, immutable once submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Situational segment
    pub segment: Segment,
    /// Fitness goal
    pub goal: Goal,
}

impl Profile {
    /// Build a profile from raw form fields, validating as the form does
    ///
    /// The empty/zero check runs before range validation: an all-zero
    /// submission reports "fill in all fields" rather than a range error,
    /// matching the form's own required-field handling.
    ///
    /// # Errors
    ///
    /// Returns a `MissingRequiredField` error for empty or zero-valued
    /// fields and a `ValueOutOfRange` error for out-of-range age or weight
    pub fn from_form(
        name: &str,
        age: u32,
        weight: f64,
        segment_label: &str,
        goal_label: &str,
    ) -> AppResult<Self> {
        if name.trim().is_empty()
            || age == 0
            || weight == 0.0
            || segment_label.is_empty()
            || goal_label.is_empty()
        {
            return Err(AppError::missing_field(FILL_IN_ALL_FIELDS));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }

        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
            )));
        }

        let goal = Goal::from_label(goal_label)?;

        Ok(Self {
            name: name.trim().to_owned(),
            age,
            weight,
            segment: Segment::from_label(segment_label),
            goal,
        })
    }
}

/// A plan derived from a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Goal-adjusted daily calorie estimate
    pub calories: i64,
    /// Meal plan text from the remote model
    pub meal: String,
    /// Workout routine text from the remote model
    pub workout: String,
}
