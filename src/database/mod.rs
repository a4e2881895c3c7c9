// ABOUTME: Database module providing the connection pool and the plan store
// ABOUTME: SQLite-backed persistence with per-operation handle acquisition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

//! Persistence layer
//!
//! A [`sqlx::SqlitePool`] is created once at startup and shared; individual
//! operations acquire and release handles from it rather than holding one
//! long-lived connection.

pub mod plans;

pub use plans::PlanStore;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};

/// Open a connection pool for the configured database
///
/// The database file is created if missing. In-memory databases are pinned
/// to a single pooled connection, since each SQLite memory connection is its
/// own database.
///
/// # Errors
///
/// Returns a `DatabaseError` if the URL cannot be parsed or the pool
/// cannot be opened
pub async fn connect(url: &DatabaseUrl) -> AppResult<SqlitePool> {
    if let DatabaseUrl::SQLite { path } = url {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
    }

    let options = SqliteConnectOptions::from_str(&url.to_connection_string())
        .map_err(|e| AppError::database(format!("Invalid database URL {url}: {e}")))?
        .create_if_missing(true);

    let pool_options = if url.is_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database {url}: {e}")))?;

    Ok(pool)
}
