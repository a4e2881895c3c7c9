// ABOUTME: Plan generator driving the remote completions and calorie formula
// ABOUTME: Produces a goal-adjusted plan and human-readable summary from a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! # Plan Generator
//!
//! Turns a validated [`Profile`] into a [`GeneratedPlan`]: looks up the
//! segment row, requests the meal and workout texts from the remote model
//! (two sequential completions), computes the calorie estimate and applies
//! the goal adjustment. Failures keep their typed identity all the way to
//! the HTTP boundary; a remote error is never passed off as plan text.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::segments;
use crate::errors::AppResult;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{GeneratedPlan, Profile};

/// Generates plans by combining the segment table with remote completions
pub struct PlanGenerator {
    llm: Arc<dyn LlmProvider>,
    model: Option<String>,
}

impl PlanGenerator {
    /// Create a generator over the given provider
    ///
    /// `model` overrides the provider's default model when set.
    #[must_use]
    pub fn new(llm: Arc<dyn LlmProvider>, model: Option<String>) -> Self {
        Self { llm, model }
    }

    /// Build the plan for a profile
    ///
    /// The meal completion runs first, then the workout completion; the two
    /// calls are independent but sequential.
    ///
    /// # Errors
    ///
    /// Returns the underlying typed error when either remote completion fails
    #[instrument(skip(self, profile), fields(segment = profile.segment.label(), goal = profile.goal.label()))]
    pub async fn build(&self, profile: &Profile) -> AppResult<GeneratedPlan> {
        let meal = self
            .complete(segments::meal_prompt(profile.segment, profile.weight))
            .await?;
        let workout = self
            .complete(segments::workout_prompt(profile.segment).to_owned())
            .await?;

        let base = segments::base_calories(profile.weight, profile.segment);
        let calories = segments::adjust_for_goal(base, profile.goal);

        debug!(base, calories, "Calorie estimate computed");

        Ok(GeneratedPlan {
            calories,
            meal,
            workout,
        })
    }

    /// Render the summary shown to the user
    #[must_use]
    pub fn render_summary(profile: &Profile, plan: &GeneratedPlan) -> String {
        format!(
            "Hello {}! Here's your plan:\n- Age: {}\n- Weight: {} kg\n- Situation: {}\n- Goal: {}\n- Calories: {} kcal\n- Meal: {}\n- Workout: {}",
            profile.name,
            profile.age,
            profile.weight,
            profile.segment.label(),
            profile.goal.label(),
            plan.calories,
            plan.meal,
            plan.workout,
        )
    }

    /// Issue one completion with the prompt as a system message
    async fn complete(&self, prompt: String) -> AppResult<String> {
        let mut request = ChatRequest::new(vec![ChatMessage::system(prompt)]);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        let response = self.llm.complete(&request).await?;
        Ok(response.content)
    }
}
