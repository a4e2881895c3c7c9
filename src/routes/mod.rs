// ABOUTME: HTTP route assembly for the plan service
// ABOUTME: Combines health, plan submission and web presentation routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! HTTP routes
//!
//! Three route groups: service monitoring (`/health`, `/ready`), the JSON
//! submission API (`/api/plans`), and the browser-facing pages (`/`,
//! `/submit`, `/assets/*`).

pub mod health;
pub mod plans;
pub mod web;

use std::sync::Arc;

use axum::Router;

use crate::server::ServerResources;

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(plans::PlanRoutes::routes(Arc::clone(&resources)))
        .merge(web::WebRoutes::routes(resources))
}
