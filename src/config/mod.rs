// ABOUTME: Configuration management module for environment-driven settings
// ABOUTME: Exposes the server configuration types resolved at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Configuration management
//!
//! All runtime configuration is environment-driven; nothing is read from
//! files and no credential ever appears as a source literal.

pub mod environment;

pub use environment::{
    DatabaseConfig, DatabaseUrl, Environment, LlmConfig, LogLevel, ServerConfig,
};
