// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock mail transport with captured sends and failure injection.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use mindfuel_core::{
    Collaborator, DailySummary, HealthStatus, MailTransport, MindfuelError, QuoteEmail,
};

/// A summary report captured by the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEmail {
    pub summary: DailySummary,
    pub admin: String,
    pub date: NaiveDate,
}

/// A mail transport for testing.
///
/// Captures every quote email and summary for assertion, and fails on
/// demand: per-recipient for quote sends (`fail_recipient`) or globally
/// for summaries (`fail_summaries`).
#[derive(Default)]
pub struct MockMailTransport {
    sent: Mutex<Vec<QuoteEmail>>,
    summaries: Mutex<Vec<SummaryEmail>>,
    failing_recipients: Mutex<HashSet<String>>,
    fail_summaries: Mutex<bool>,
}

impl MockMailTransport {
    /// Create a transport where every send succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make quote sends to `email` fail from now on.
    pub async fn fail_recipient(&self, email: &str) {
        self.failing_recipients.lock().await.insert(email.to_string());
    }

    /// Make summary sends fail from now on.
    pub async fn fail_summaries(&self) {
        *self.fail_summaries.lock().await = true;
    }

    /// All quote emails that were sent successfully.
    pub async fn sent_emails(&self) -> Vec<QuoteEmail> {
        self.sent.lock().await.clone()
    }

    /// All summaries that were delivered successfully.
    pub async fn summaries(&self) -> Vec<SummaryEmail> {
        self.summaries.lock().await.clone()
    }
}

#[async_trait]
impl Collaborator for MockMailTransport {
    fn name(&self) -> &str {
        "mock-mail"
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
impl MailTransport for MockMailTransport {
    async fn send_quote(&self, email: &QuoteEmail) -> Result<(), MindfuelError> {
        if self.failing_recipients.lock().await.contains(&email.to) {
            return Err(MindfuelError::Mail {
                message: format!("injected failure for {}", email.to),
                source: None,
            });
        }
        self.sent.lock().await.push(email.clone());
        Ok(())
    }

    async fn send_summary(
        &self,
        summary: &DailySummary,
        admin: &str,
        date: NaiveDate,
    ) -> Result<(), MindfuelError> {
        if *self.fail_summaries.lock().await {
            return Err(MindfuelError::Mail {
                message: "injected summary failure".to_string(),
                source: None,
            });
        }
        self.summaries.lock().await.push(SummaryEmail {
            summary: *summary,
            admin: admin.to_string(),
            date,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindfuel_core::{Frequency, Quote};

    fn make_email(to: &str) -> QuoteEmail {
        QuoteEmail {
            to: to.to_string(),
            greeting: "there".to_string(),
            quote: Quote::fallback(),
            frequency: Frequency::Daily,
        }
    }

    #[tokio::test]
    async fn successful_sends_are_captured() {
        let mail = MockMailTransport::new();
        mail.send_quote(&make_email("a@example.com")).await.unwrap();
        mail.send_quote(&make_email("b@example.com")).await.unwrap();

        let sent = mail.sent_emails().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "a@example.com");
        assert_eq!(sent[1].to, "b@example.com");
    }

    #[tokio::test]
    async fn injected_recipient_failure_is_not_captured() {
        let mail = MockMailTransport::new();
        mail.fail_recipient("bad@example.com").await;

        assert!(mail.send_quote(&make_email("bad@example.com")).await.is_err());
        assert!(mail.send_quote(&make_email("good@example.com")).await.is_ok());
        assert_eq!(mail.sent_emails().await.len(), 1);
    }

    #[tokio::test]
    async fn summaries_are_captured_with_admin_and_date() {
        let mail = MockMailTransport::new();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        mail.send_summary(&DailySummary { sent: 2, failed: 0 }, "admin@example.com", date)
            .await
            .unwrap();

        let summaries = mail.summaries().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].admin, "admin@example.com");
        assert_eq!(summaries[0].summary.sent, 2);
        assert_eq!(summaries[0].date, date);
    }
}
