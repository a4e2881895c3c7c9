// ABOUTME: Unit tests for the unified error types
// ABOUTME: Validates status mapping, constructors and response serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fyturisme::errors::{AppError, ErrorCode, ErrorResponse};

#[test]
fn test_error_code_http_status() {
    assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
    assert_eq!(ErrorCode::ValueOutOfRange.http_status(), 400);
    assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
    assert_eq!(ErrorCode::ExternalAuthFailed.http_status(), 503);
    assert_eq!(ErrorCode::ExternalRateLimited.http_status(), 503);
    assert_eq!(ErrorCode::ConfigError.http_status(), 500);
    assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
}

#[test]
fn test_convenience_constructors() {
    assert_eq!(
        AppError::missing_field("Please fill in all fields!").code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(AppError::database("insert failed").code, ErrorCode::DatabaseError);
    assert_eq!(AppError::config("no API key").code, ErrorCode::ConfigError);

    let external = AppError::external_service("Groq", "connection refused");
    assert_eq!(external.code, ErrorCode::ExternalServiceError);
    assert_eq!(external.message, "Groq: connection refused");
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::out_of_range("Weight must be between 30 and 200 kg");
    let response = ErrorResponse::from(error);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("VALUE_OUT_OF_RANGE"));
    assert!(json.contains("Weight must be between 30 and 200 kg"));
}

#[test]
fn test_source_chaining() {
    let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = AppError::internal("startup failed").with_source(io_error);

    assert!(std::error::Error::source(&error).is_some());
}
