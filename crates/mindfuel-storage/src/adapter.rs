// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the UserStore trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::OnceCell;
use tracing::debug;

use mindfuel_config::model::StorageConfig;
use mindfuel_core::types::{DailySummary, Frequency, Recipient, SendOutcome};
use mindfuel_core::{Collaborator, HealthStatus, MindfuelError, UserStore};

use crate::database::Database;
use crate::queries;

/// SQLite-backed user store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily opened on first use, so
/// `ensure_schema` stays idempotent: repeated calls reuse the same handle
/// and refinery skips already-applied migrations.
pub struct SqliteUserStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteUserStore {
    /// Create a new SqliteUserStore with the given configuration.
    ///
    /// The database connection is not opened until the first operation.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns the shared Database handle, opening and migrating it on first use.
    async fn db(&self) -> Result<&Database, MindfuelError> {
        self.db
            .get_or_try_init(|| Database::open(&self.config.database_path, self.config.wal_mode))
            .await
    }
}

#[async_trait]
impl Collaborator for SqliteUserStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MindfuelError> {
        let db = self.db().await?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MindfuelError> {
        // Checkpoint only if the DB was ever opened.
        if let Some(db) = self.db.get() {
            db.close().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn ensure_schema(&self) -> Result<(), MindfuelError> {
        self.db().await?;
        debug!(path = %self.config.database_path, "SQLite schema ensured");
        Ok(())
    }

    async fn insert_user(
        &self,
        email: &str,
        name: &str,
        frequency: Frequency,
    ) -> Result<(), MindfuelError> {
        queries::users::insert_user(self.db().await?, email, name, frequency).await
    }

    async fn select_active(&self, frequency: Frequency) -> Result<Vec<Recipient>, MindfuelError> {
        queries::users::select_active(self.db().await?, frequency).await
    }

    async fn record_outcome(&self, outcome: &SendOutcome) -> Result<(), MindfuelError> {
        queries::outcomes::record_outcome(self.db().await?, outcome).await
    }

    async fn sent_on(&self, user_id: i64, date: NaiveDate) -> Result<bool, MindfuelError> {
        queries::outcomes::sent_on(self.db().await?, user_id, date).await
    }

    async fn summarize(&self, date: NaiveDate) -> Result<DailySummary, MindfuelError> {
        queries::outcomes::summarize(self.db().await?, date).await
    }
}
