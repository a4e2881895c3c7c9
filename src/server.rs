// ABOUTME: Shared server resources and the HTTP server entry point
// ABOUTME: Wires config, plan store, LLM provider and image fetcher into the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! # Plan Server
//!
//! [`ServerResources`] bundles everything the route handlers need behind a
//! single `Arc` passed as axum state. [`PlanServer`] binds the router and
//! serves it until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::PlanStore;
use crate::external::ImageFetcher;
use crate::llm::LlmProvider;
use crate::plan::PlanGenerator;
use crate::routes;

/// Shared state for all route handlers
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Plan persistence
    pub plans: PlanStore,
    /// Remote completion provider
    pub llm: Arc<dyn LlmProvider>,
    /// Decorative image fetcher
    pub images: ImageFetcher,
}

impl ServerResources {
    /// Create server resources from the startup components
    #[must_use]
    pub fn new(config: ServerConfig, pool: SqlitePool, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            config,
            plans: PlanStore::new(pool),
            llm,
            images: ImageFetcher::new(),
        }
    }

    /// Build a plan generator over the configured provider and model
    #[must_use]
    pub fn generator(&self) -> PlanGenerator {
        PlanGenerator::new(Arc::clone(&self.llm), self.config.llm.model.clone())
    }
}

/// HTTP server over the plan routes
pub struct PlanServer {
    resources: Arc<ServerResources>,
}

impl PlanServer {
    /// Create a new server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let router = routes::router(self.resources).layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!("Listening on port {port}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
