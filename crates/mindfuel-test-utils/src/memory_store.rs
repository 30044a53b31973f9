// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory user store with failure toggles.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use mindfuel_core::{
    Collaborator, DailySummary, Frequency, HealthStatus, MindfuelError, Recipient, SendOutcome,
    SendStatus, User, UserStore,
};

/// An in-memory [`UserStore`] for orchestrator tests.
///
/// Selections return users in insertion order, mirroring the SQLite store's
/// id ordering. `fail_selects` and `fail_records` inject storage failures
/// for the corresponding operations.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    outcomes: Mutex<Vec<SendOutcome>>,
    next_id: AtomicI64,
    schema_calls: AtomicUsize,
    fail_selects: AtomicBool,
    fail_records: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// Add an active user and return its id.
    pub async fn add_user(&self, email: &str, name: &str, frequency: Frequency) -> i64 {
        self.add(email, name, frequency, true).await
    }

    /// Add an inactive user and return its id.
    pub async fn add_inactive_user(&self, email: &str, name: &str, frequency: Frequency) -> i64 {
        self.add(email, name, frequency, false).await
    }

    async fn add(&self, email: &str, name: &str, frequency: Frequency, is_active: bool) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().await.push(User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            is_active,
            frequency,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        });
        id
    }

    /// Pre-seed an outcome, e.g. to simulate a partially completed prior run.
    pub async fn seed_outcome(&self, outcome: SendOutcome) {
        self.outcomes.lock().await.push(outcome);
    }

    /// Make `select_active` fail from now on.
    pub fn fail_selects(&self) {
        self.fail_selects.store(true, Ordering::SeqCst);
    }

    /// Make `record_outcome` fail from now on.
    pub fn fail_records(&self) {
        self.fail_records.store(true, Ordering::SeqCst);
    }

    /// All outcomes recorded so far.
    pub async fn outcomes(&self) -> Vec<SendOutcome> {
        self.outcomes.lock().await.clone()
    }

    /// How many times `ensure_schema` was called.
    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Collaborator for MemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MindfuelError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MindfuelError> {
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ensure_schema(&self) -> Result<(), MindfuelError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_user(
        &self,
        email: &str,
        name: &str,
        frequency: Frequency,
    ) -> Result<(), MindfuelError> {
        let exists = self
            .users
            .lock()
            .await
            .iter()
            .any(|u| u.email == email);
        if !exists {
            self.add(email, name, frequency, true).await;
        }
        Ok(())
    }

    async fn select_active(&self, frequency: Frequency) -> Result<Vec<Recipient>, MindfuelError> {
        if self.fail_selects.load(Ordering::SeqCst) {
            return Err(MindfuelError::Internal(
                "injected select_active failure".to_string(),
            ));
        }
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .filter(|u| u.is_active && u.frequency == frequency)
            .map(|u| Recipient {
                id: u.id,
                email: u.email.clone(),
                name: u.name.clone(),
            })
            .collect())
    }

    async fn record_outcome(&self, outcome: &SendOutcome) -> Result<(), MindfuelError> {
        if self.fail_records.load(Ordering::SeqCst) {
            return Err(MindfuelError::Internal(
                "injected record_outcome failure".to_string(),
            ));
        }
        self.outcomes.lock().await.push(outcome.clone());
        Ok(())
    }

    async fn sent_on(&self, user_id: i64, date: NaiveDate) -> Result<bool, MindfuelError> {
        Ok(self
            .outcomes
            .lock()
            .await
            .iter()
            .any(|o| o.user_id == user_id && o.date == date && o.status == SendStatus::Sent))
    }

    async fn summarize(&self, date: NaiveDate) -> Result<DailySummary, MindfuelError> {
        let outcomes = self.outcomes.lock().await;
        let mut summary = DailySummary::default();
        for outcome in outcomes.iter().filter(|o| o.date == date) {
            match outcome.status {
                SendStatus::Sent => summary.sent += 1,
                SendStatus::Failed => summary.failed += 1,
            }
        }
        Ok(summary)
    }
}
