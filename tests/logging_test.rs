// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment variable handling and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fyturisme::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert!(matches!(config.format, LogFormat::Json));
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Production defaults to detailed output

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_default_logging_config() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
    env::remove_var("LOG_INCLUDE_LOCATION");
    env::remove_var("LOG_INCLUDE_THREAD");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert!(matches!(config.format, LogFormat::Pretty));
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "fyturisme");
    assert!(!config.include_location);
}

#[test]
fn test_default_struct_values() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert!(matches!(config.format, LogFormat::Pretty));
    assert_eq!(config.environment, "development");
}
