// ABOUTME: Plan submission route handlers for the JSON API
// ABOUTME: Validates the profile, drives generation, persists and shapes the response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Plan submission routes
//!
//! `POST /api/plans` runs the full pipeline: validate the submitted fields
//! into a [`Profile`], generate the plan (two sequential remote
//! completions), persist the record, and return the summary together with
//! the chart data. Validation, remote and storage failures each keep their
//! own error code and HTTP status.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{GeneratedPlan, Profile};
use crate::plan::PlanGenerator;
use crate::server::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A plan submission, mirroring the form fields
///
/// Every field defaults to its empty value so that an absent field reaches
/// the profile validation as "missing" rather than failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Full name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Situational segment label
    #[serde(default)]
    pub segment: String,
    /// Fitness goal label
    #[serde(default)]
    pub goal: String,
}

/// Data for the two-bar weight/age chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    /// Bar labels
    pub categories: [&'static str; 2],
    /// Bar values (weight, age)
    pub values: [f64; 2],
}

/// Response for a successful submission
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Row id of the persisted record
    pub record_id: i64,
    /// Human-readable summary
    pub summary: String,
    /// Goal-adjusted calorie estimate
    pub calories: i64,
    /// Meal plan text
    pub meal: String,
    /// Workout routine text
    pub workout: String,
    /// Chart data for the weight/age visualization
    #[serde(skip_deserializing)]
    pub chart: Option<ChartData>,
}

/// Outcome of one processed submission, shared with the web routes
pub(crate) struct SubmissionOutcome {
    /// The validated profile
    pub profile: Profile,
    /// The generated plan
    pub plan: GeneratedPlan,
    /// The rendered summary
    pub summary: String,
    /// Row id of the persisted record
    pub record_id: i64,
}

/// Run the full submission pipeline: validate, generate, persist
pub(crate) async fn process_submission(
    resources: &ServerResources,
    request: &PlanRequest,
) -> Result<SubmissionOutcome, AppError> {
    let profile = Profile::from_form(
        &request.name,
        request.age,
        request.weight,
        &request.segment,
        &request.goal,
    )?;

    let plan = resources.generator().build(&profile).await?;
    let summary = PlanGenerator::render_summary(&profile, &plan);
    let record_id = resources.plans.save(&profile, &plan).await?;

    info!(
        record_id,
        segment = profile.segment.label(),
        goal = profile.goal.label(),
        calories = plan.calories,
        "Plan generated and saved"
    );

    Ok(SubmissionOutcome {
        profile,
        plan,
        summary,
        record_id,
    })
}

/// Plan submission routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan submission routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans", post(Self::handle_submit))
            .with_state(resources)
    }

    /// Handle a JSON plan submission
    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<PlanRequest>,
    ) -> Result<Response, AppError> {
        let outcome = process_submission(&resources, &request).await?;

        let response = PlanResponse {
            record_id: outcome.record_id,
            summary: outcome.summary,
            calories: outcome.plan.calories,
            meal: outcome.plan.meal,
            workout: outcome.plan.workout,
            chart: Some(ChartData {
                categories: ["Weight", "Age"],
                values: [outcome.profile.weight, f64::from(outcome.profile.age)],
            }),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
