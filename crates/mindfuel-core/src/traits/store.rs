// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User store trait for persistence backends.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::MindfuelError;
use crate::traits::collaborator::Collaborator;
use crate::types::{DailySummary, Frequency, Recipient, SendOutcome};

/// Persists users and per-send outcome records, and supplies the recipient
/// selections and aggregate counts the orchestrator needs.
#[async_trait]
pub trait UserStore: Collaborator {
    /// Creates the persistent schema if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), MindfuelError>;

    /// Administrative insert of a subscriber. A duplicate email is a quiet
    /// no-op; the store enforces email uniqueness.
    async fn insert_user(
        &self,
        email: &str,
        name: &str,
        frequency: Frequency,
    ) -> Result<(), MindfuelError>;

    /// Returns the active users subscribed at `frequency`, in selection order.
    /// Empty when none match.
    async fn select_active(&self, frequency: Frequency) -> Result<Vec<Recipient>, MindfuelError>;

    /// Persists one delivery outcome. Callers must inspect the result: a
    /// failure here means the outcome record is lost unless retained elsewhere.
    async fn record_outcome(&self, outcome: &SendOutcome) -> Result<(), MindfuelError>;

    /// Whether a successful delivery to `user_id` is already recorded for
    /// `date`. Supports idempotent reruns.
    async fn sent_on(&self, user_id: i64, date: NaiveDate) -> Result<bool, MindfuelError>;

    /// Aggregates the outcomes recorded for `date`, grouped by status.
    /// Absent statuses count as zero.
    async fn summarize(&self, date: NaiveDate) -> Result<DailySummary, MindfuelError>;
}
