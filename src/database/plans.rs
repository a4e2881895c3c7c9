// ABOUTME: Database operations for persisted plan submissions
// ABOUTME: Append-only writes to the user_data table, created on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fyturisme

use sqlx::SqlitePool;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{GeneratedPlan, Profile};

/// Plan persistence operations
///
/// Write-only from the service's perspective: rows are appended, never
/// read back, updated or deleted.
pub struct PlanStore {
    pool: SqlitePool,
}

impl PlanStore {
    /// Create a new plan store over a shared pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` if the DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                weight REAL NOT NULL,
                segment TEXT NOT NULL,
                goal TEXT NOT NULL,
                calories INTEGER NOT NULL,
                meal TEXT NOT NULL,
                workout TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user_data table: {e}")))?;

        Ok(())
    }

    /// Append one submission and return its row id
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` if the insert fails
    pub async fn save(&self, profile: &Profile, plan: &GeneratedPlan) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO user_data (name, age, weight, segment, goal, calories, meal, workout)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(profile.weight)
        .bind(profile.segment.label())
        .bind(profile.goal.label())
        .bind(plan.calories)
        .bind(&plan.meal)
        .bind(&plan.workout)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save plan: {e}")))?;

        let id = result.last_insert_rowid();
        debug!(id, "Plan submission saved");

        Ok(id)
    }
}
