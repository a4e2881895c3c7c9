// ABOUTME: Browser-facing routes serving the form, the result panel and decorative assets
// ABOUTME: Renders the summary, an inline SVG weight/age chart and proxied images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Web presentation routes
//!
//! `GET /` serves the submission form; `POST /submit` runs the same pipeline
//! as the JSON API and renders the success panel with the two-bar chart and
//! the motivational photo. The decorative images come from external sources
//! through `/assets/*` proxy routes that skip silently on failure.
//!
//! Everything user- or model-supplied is HTML-escaped before rendering.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use bytes::Bytes;

use super::plans::{process_submission, PlanRequest, SubmissionOutcome};
use crate::errors::AppError;
use crate::external::images::{HEADER_ICON_URL, MOTIVATION_IMAGE_URL};
use crate::models::{Goal, Segment};
use crate::server::ServerResources;

/// Form page template, interpolated at render time
const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

/// Result page template, interpolated at render time
const RESULT_TEMPLATE: &str = include_str!("templates/result.html");

/// Chart plot height in pixels
const CHART_BAR_MAX_HEIGHT: f64 = 200.0;

/// Web presentation routes
pub struct WebRoutes;

impl WebRoutes {
    /// Create all web routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/submit", post(Self::handle_submit))
            .route("/assets/header-icon", get(Self::handle_header_icon))
            .route("/assets/motivation", get(Self::handle_motivation))
            .with_state(resources)
    }

    /// Serve the submission form
    async fn handle_index() -> Html<String> {
        let page = INDEX_TEMPLATE
            .replace("<!--SEGMENT_OPTIONS-->", &segment_options())
            .replace("<!--GOAL_OPTIONS-->", &goal_options());
        Html(page)
    }

    /// Handle a form submission and render the result page
    ///
    /// Errors render as a styled page with the matching HTTP status; the
    /// typed code decides the status, the message is shown to the user.
    async fn handle_submit(
        State(resources): State<Arc<ServerResources>>,
        Form(request): Form<PlanRequest>,
    ) -> Response {
        match process_submission(&resources, &request).await {
            Ok(outcome) => Html(render_result(&outcome)).into_response(),
            Err(error) => render_error(&error),
        }
    }

    /// Proxy the gym equipment header icon
    async fn handle_header_icon(State(resources): State<Arc<ServerResources>>) -> Response {
        serve_image(resources.images.fetch(HEADER_ICON_URL).await)
    }

    /// Proxy the motivational workout photo
    async fn handle_motivation(State(resources): State<Arc<ServerResources>>) -> Response {
        serve_image(resources.images.fetch(MOTIVATION_IMAGE_URL).await)
    }
}

/// Render `<option>` elements for the four segments, icons included
fn segment_options() -> String {
    Segment::ALL
        .iter()
        .map(|segment| {
            format!(
                "      <option value=\"{label}\">{icon} {label}</option>\n",
                label = html_escape::encode_double_quoted_attribute(segment.label()),
                icon = segment.icon(),
            )
        })
        .collect()
}

/// Render `<option>` elements for the three goals
fn goal_options() -> String {
    Goal::ALL
        .iter()
        .map(|goal| {
            format!(
                "      <option value=\"{label}\">{label}</option>\n",
                label = html_escape::encode_double_quoted_attribute(goal.label()),
            )
        })
        .collect()
}

/// Render the success page for one submission
fn render_result(outcome: &SubmissionOutcome) -> String {
    let summary_html = html_escape::encode_text(&outcome.summary).replace('\n', "<br>");
    let chart = bar_chart_svg(outcome.profile.weight, outcome.profile.age);

    RESULT_TEMPLATE
        .replace("<!--SEGMENT_ICON-->", outcome.profile.segment.icon())
        .replace("<!--SUMMARY_HTML-->", &summary_html)
        .replace("<!--CHART_SVG-->", &chart)
}

/// Render an error page with the status mapped from the error code
fn render_error(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = html_escape::encode_text(&error.message);
    let page = format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Fyturisme</title></head><body style=\"font-family: sans-serif; \
         max-width: 720px; margin: 0 auto; padding: 16px;\">\
         <h1 style=\"text-align: center; color: #ff4b4b;\">&#10024; FYTURISME &#10024;</h1>\
         <div style=\"background-color: #ffecec; border: 2px solid #ff4b4b; \
         border-radius: 10px; padding: 15px; color: #b00020;\">{message}</div>\
         <a href=\"/\" style=\"color: #1e88e5;\">&larr; Back to the form</a></body></html>"
    );
    (status, Html(page)).into_response()
}

/// Serve a proxied image, or 404 when the upstream fetch was skipped
fn serve_image(fetched: Option<(Bytes, Option<String>)>) -> Response {
    fetched.map_or_else(
        || StatusCode::NOT_FOUND.into_response(),
        |(bytes, content_type)| {
            let content_type =
                content_type.unwrap_or_else(|| "application/octet-stream".to_owned());
            ([(http::header::CONTENT_TYPE, content_type)], bytes).into_response()
        },
    )
}

/// Render the two-bar weight/age chart as inline SVG
fn bar_chart_svg(weight: f64, age: u32) -> String {
    let age = f64::from(age);
    let max_value = weight.max(age).max(1.0);

    let weight_height = weight / max_value * CHART_BAR_MAX_HEIGHT;
    let age_height = age / max_value * CHART_BAR_MAX_HEIGHT;

    let baseline = 260.0;
    let weight_y = baseline - weight_height;
    let age_y = baseline - age_height;

    format!(
        r##"<svg class="chart" width="460" height="300" viewBox="0 0 460 300" role="img" aria-label="User data overview: weight {weight}, age {age}">
  <text x="230" y="24" text-anchor="middle" font-size="18" fill="#262730">User Data Overview</text>
  <line x1="40" y1="{baseline}" x2="420" y2="{baseline}" stroke="#cccccc"/>
  <rect x="110" y="{weight_y}" width="80" height="{weight_height}" fill="#ff4b4b" stroke="#1e88e5" stroke-width="2"/>
  <rect x="270" y="{age_y}" width="80" height="{age_height}" fill="#1e88e5" stroke="#1e88e5" stroke-width="2"/>
  <text x="150" y="{weight_label_y}" text-anchor="middle" font-size="14" fill="#262730">{weight}</text>
  <text x="310" y="{age_label_y}" text-anchor="middle" font-size="14" fill="#262730">{age}</text>
  <text x="150" y="282" text-anchor="middle" font-size="14" fill="#262730">Weight</text>
  <text x="310" y="282" text-anchor="middle" font-size="14" fill="#262730">Age</text>
</svg>"##,
        weight_label_y = weight_y - 6.0,
        age_label_y = age_y - 6.0,
    )
}
