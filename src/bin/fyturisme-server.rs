// ABOUTME: Server binary wiring configuration, logging, database and LLM provider
// ABOUTME: Starts the HTTP service for plan submission and presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! # Fyturisme Server Binary
//!
//! Starts the plan service: environment-driven configuration, structured
//! logging, SQLite pool with table creation, and the Groq completion
//! provider. Startup failures (missing API key, unreachable database)
//! propagate as errors and exit the process non-zero.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use fyturisme::{
    config::ServerConfig,
    database::{self, PlanStore},
    llm::{GroqProvider, LlmProvider},
    logging,
    server::{PlanServer, ServerResources},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fyturisme-server")]
#[command(about = "Fyturisme - personalized fitness plan service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Fyturisme plan service");
    info!("{}", config.summary());

    // Database pool and table creation
    let pool = database::connect(&config.database.url)
        .await
        .map_err(|e| anyhow::anyhow!("Database startup failed: {e}"))?;
    PlanStore::new(pool.clone()).migrate().await?;
    info!("Database initialized: {}", config.database.url);

    // Remote completion provider; the API key comes from the environment
    let llm = GroqProvider::from_env()?;
    info!(
        "LLM provider initialized: {} (default model {})",
        llm.display_name(),
        llm.default_model()
    );

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(config, pool, Arc::new(llm)));
    let server = PlanServer::new(resources);

    display_available_endpoints(http_port);
    info!("Ready to serve fitness plans!");

    if let Err(e) = server.run(http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available endpoints with their port
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available Endpoints ===");
    info!("   Form:            GET  http://{host}:{port}/");
    info!("   Submit (form):   POST http://{host}:{port}/submit");
    info!("   Submit (JSON):   POST http://{host}:{port}/api/plans");
    info!("   Header icon:     GET  http://{host}:{port}/assets/header-icon");
    info!("   Motivation:      GET  http://{host}:{port}/assets/motivation");
    info!("   Health Check:    GET  http://{host}:{port}/health");
    info!("   Readiness:       GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
