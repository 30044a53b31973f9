// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the MindFuel workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How often a subscriber receives the quote email.
///
/// Rendered lowercase (`daily` / `weekly`) for storage and wire encodings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// A subscribed user as persisted in storage.
///
/// Users are created by an administrative insert and are read-only to the
/// delivery run. Email uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_active: bool,
    pub frequency: Frequency,
    pub created_at: String,
}

/// The projection of a user handed to the dispatch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// A quote of the day. Ephemeral: produced once per run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// The fixed quote substituted when the provider is unreachable or
    /// returns malformed data.
    pub fn fallback() -> Self {
        Self {
            text: "Keep pushing forward, even when it gets tough.".to_string(),
            author: "The MindFuel Team".to_string(),
        }
    }
}

/// Whether a single delivery attempt reached its recipient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Sent,
    Failed,
}

/// The persisted record of one delivery attempt for one recipient on one date.
///
/// Written exactly once per (user, run) after the attempt; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub user_id: i64,
    pub date: NaiveDate,
    pub status: SendStatus,
    pub error_detail: Option<String>,
}

impl SendOutcome {
    /// A successful delivery outcome.
    pub fn sent(user_id: i64, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            status: SendStatus::Sent,
            error_detail: None,
        }
    }

    /// A failed delivery outcome with a diagnostic detail.
    pub fn failed(user_id: i64, date: NaiveDate, detail: impl Into<String>) -> Self {
        Self {
            user_id,
            date,
            status: SendStatus::Failed,
            error_detail: Some(detail.into()),
        }
    }
}

/// Aggregate counts of today's outcomes, recomputed at the end of each run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailySummary {
    pub sent: i64,
    pub failed: i64,
}

/// One personalized quote message, ready for the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteEmail {
    pub to: String,
    pub greeting: String,
    pub quote: Quote,
    pub frequency: Frequency,
}

/// Health reported by collaborator health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Collaborator is fully operational.
    Healthy,
    /// Collaborator is operational but degraded (e.g. running on a fallback).
    Degraded(String),
    /// Collaborator is not operational.
    Unhealthy(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn frequency_renders_lowercase() {
        assert_eq!(Frequency::Daily.to_string(), "daily");
        assert_eq!(Frequency::Weekly.to_string(), "weekly");
    }

    #[test]
    fn frequency_parses_from_storage_encoding() {
        assert_eq!(Frequency::from_str("daily").unwrap(), Frequency::Daily);
        assert_eq!(Frequency::from_str("weekly").unwrap(), Frequency::Weekly);
        assert!(Frequency::from_str("fortnightly").is_err());
    }

    #[test]
    fn send_status_round_trips() {
        for status in [SendStatus::Sent, SendStatus::Failed] {
            let s = status.to_string();
            assert_eq!(SendStatus::from_str(&s).unwrap(), status);
        }
    }

    #[test]
    fn fallback_quote_is_never_empty() {
        let quote = Quote::fallback();
        assert!(!quote.text.is_empty());
        assert!(!quote.author.is_empty());
    }

    #[test]
    fn outcome_constructors_set_status_and_detail() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let ok = SendOutcome::sent(1, date);
        assert_eq!(ok.status, SendStatus::Sent);
        assert!(ok.error_detail.is_none());

        let bad = SendOutcome::failed(2, date, "Email failed to send");
        assert_eq!(bad.status, SendStatus::Failed);
        assert_eq!(bad.error_detail.as_deref(), Some("Email failed to send"));
    }

    #[test]
    fn summary_defaults_to_zero_counts() {
        let summary = DailySummary::default();
        assert_eq!(summary.sent, 0);
        assert_eq!(summary.failed, 0);
    }
}
