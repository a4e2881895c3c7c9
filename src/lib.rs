// ABOUTME: Main library entry point for the Fyturisme plan service
// ABOUTME: Collects a profile, derives an LLM-backed fitness plan and persists it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

#![deny(unsafe_code)]

//! # Fyturisme
//!
//! A personalized fitness plan service. A user submits a short profile
//! (name, age, weight, situational segment, fitness goal) through a web
//! form; the service derives prompts from a static segment table, requests
//! meal and workout suggestions from a hosted chat-completion API, applies
//! a fixed-point calorie formula with a goal adjustment, persists the
//! submission, and renders the summary with a weight/age bar chart.
//!
//! ## Architecture
//!
//! - **llm**: remote completion provider behind the [`llm::LlmProvider`] trait
//! - **plan**: segment data table and the plan generator
//! - **database**: SQLite-backed, write-only plan store
//! - **routes**: axum routes for the form, the JSON API and monitoring
//! - **config**: environment-driven configuration with redacted secrets
//!
//! ## Example
//!
//! ```rust,no_run
//! use fyturisme::config::ServerConfig;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Configured HTTP port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// SQLite persistence for plan submissions
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External clients for decorative page assets
pub mod external;

/// LLM provider abstraction and the Groq implementation
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for profiles and plans
pub mod models;

/// Segment table and plan generation
pub mod plan;

/// HTTP routes for submission, presentation and monitoring
pub mod routes;

/// Shared server resources and the HTTP server entry point
pub mod server;
