// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The delivery orchestrator: one linear pass over fetch, selection,
//! per-recipient dispatch, outcome recording, and the summary stage.
//!
//! Failure policy, per unit of work:
//! - quote source unusable: dispatch is skipped for the whole run
//! - one recipient's send or outcome recording fails: that recipient only
//! - recipient selection fails: the remaining dispatch is abandoned
//! - anything above: the summary stage still runs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info, warn};

use mindfuel_core::{
    Frequency, MailTransport, MindfuelError, Quote, QuoteEmail, QuoteSource, Recipient,
    SendOutcome, UserStore,
};

use crate::pacer::Pacer;
use crate::report::RunReport;
use crate::schedule;

/// Diagnostic detail recorded with every failed send.
pub const SEND_FAILURE_DETAIL: &str = "Email failed to send";

/// Greeting used when a subscriber has no usable display name.
pub const GENERIC_GREETING: &str = "there";

/// Derive the personalized greeting from a display name.
///
/// Takes the first whitespace-separated token; blank names fall back to the
/// generic greeting. Never empty, never panics.
pub fn greeting_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(GENERIC_GREETING)
}

/// Drives one end-to-end delivery run against the three collaborators.
pub struct DeliveryOrchestrator {
    quotes: Arc<dyn QuoteSource>,
    store: Arc<dyn UserStore>,
    mail: Arc<dyn MailTransport>,
    pacer: Pacer,
    admin_email: String,
}

impl DeliveryOrchestrator {
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        store: Arc<dyn UserStore>,
        mail: Arc<dyn MailTransport>,
        pacer: Pacer,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            quotes,
            store,
            mail,
            pacer,
            admin_email: admin_email.into(),
        }
    }

    /// Run one delivery job for the current UTC date.
    pub async fn run(&self) -> RunReport {
        self.run_on(Utc::now().date_naive()).await
    }

    /// Run one delivery job for an explicit date.
    ///
    /// Never errors: dispatch-phase failures are logged and the summary
    /// stage executes regardless of how far dispatch got.
    pub async fn run_on(&self, today: NaiveDate) -> RunReport {
        info!(date = %today, "delivery run started");
        let mut report = RunReport::new(today);

        if let Err(e) = self.dispatch_phase(today, &mut report).await {
            error!(error = %e, "delivery run aborted before completing dispatch");
        }

        // The summary stage runs no matter what happened above.
        self.summary_stage(today, &mut report).await;

        info!(
            sent = report.sent,
            failed = report.failed,
            skipped = report.skipped,
            "delivery run finished"
        );
        report
    }

    async fn dispatch_phase(
        &self,
        today: NaiveDate,
        report: &mut RunReport,
    ) -> Result<(), MindfuelError> {
        self.store.ensure_schema().await?;

        let Some(quote) = self.quotes.fetch().await else {
            error!("no usable quote available, skipping all dispatch for this run");
            return Ok(());
        };
        report.quote_available = true;
        info!(quote = %quote.text, author = %quote.author, "quote of the day");

        self.dispatch_tier(Frequency::Daily, &quote, today, report)
            .await?;

        if schedule::weekly_tier_due(today) {
            self.dispatch_tier(Frequency::Weekly, &quote, today, report)
                .await?;
        } else {
            debug!(date = %today, "weekly tier not due today");
        }

        Ok(())
    }

    async fn dispatch_tier(
        &self,
        frequency: Frequency,
        quote: &Quote,
        today: NaiveDate,
        report: &mut RunReport,
    ) -> Result<(), MindfuelError> {
        let recipients = self.store.select_active(frequency).await?;
        if recipients.is_empty() {
            warn!(frequency = %frequency, "no active recipients for this tier");
            return Ok(());
        }

        info!(frequency = %frequency, count = recipients.len(), "dispatching tier");
        for recipient in &recipients {
            self.dispatch_one(recipient, frequency, quote, today, report)
                .await;
        }
        Ok(())
    }

    /// Dispatch to a single recipient. Infallible by design: every failure
    /// inside is contained so the loop always reaches the next recipient.
    async fn dispatch_one(
        &self,
        recipient: &Recipient,
        frequency: Frequency,
        quote: &Quote,
        today: NaiveDate,
        report: &mut RunReport,
    ) {
        // Reruns converge instead of duplicating: a recipient with a
        // recorded successful delivery for today is skipped outright.
        match self.store.sent_on(recipient.id, today).await {
            Ok(true) => {
                debug!(email = %recipient.email, "already delivered today, skipping");
                report.skipped += 1;
                return;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(
                    email = %recipient.email,
                    error = %e,
                    "could not check prior deliveries, sending anyway"
                );
            }
        }

        self.pacer.pause().await;
        report.attempted += 1;

        let email = QuoteEmail {
            to: recipient.email.clone(),
            greeting: greeting_name(&recipient.name).to_string(),
            quote: quote.clone(),
            frequency,
        };

        let outcome = match self.mail.send_quote(&email).await {
            Ok(()) => {
                info!(email = %recipient.email, "quote delivered");
                report.sent += 1;
                SendOutcome::sent(recipient.id, today)
            }
            Err(e) => {
                error!(email = %recipient.email, error = %e, "quote delivery failed");
                report.failed += 1;
                SendOutcome::failed(recipient.id, today, SEND_FAILURE_DETAIL)
            }
        };

        if let Err(e) = self.store.record_outcome(&outcome).await {
            error!(
                user_id = recipient.id,
                error = %e,
                "failed to record delivery outcome"
            );
            report.unrecorded.push(outcome);
        }
    }

    async fn summary_stage(&self, today: NaiveDate, report: &mut RunReport) {
        report.summary = match self.store.summarize(today).await {
            Ok(summary) => summary,
            Err(e) => {
                // The notification still goes out, with zero counts, rather
                // than not at all.
                error!(error = %e, "failed to aggregate daily summary");
                Default::default()
            }
        };
        info!(
            sent = report.summary.sent,
            failed = report.summary.failed,
            "daily summary computed"
        );

        match self
            .mail
            .send_summary(&report.summary, &self.admin_email, today)
            .await
        {
            Ok(()) => {
                info!(admin = %self.admin_email, "summary delivered");
                report.summary_delivered = true;
            }
            Err(e) => {
                error!(admin = %self.admin_email, error = %e, "failed to deliver summary");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindfuel_core::{DailySummary, SendStatus};
    use mindfuel_test_utils::{MemoryUserStore, MockMailTransport, MockQuoteSource};

    const ADMIN: &str = "admin@mindfuel.app";

    // 2024-01-01 was a Monday; the 2nd a Tuesday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    struct Fixture {
        store: Arc<MemoryUserStore>,
        mail: Arc<MockMailTransport>,
        orchestrator: DeliveryOrchestrator,
    }

    fn fixture(quotes: MockQuoteSource) -> Fixture {
        let store = Arc::new(MemoryUserStore::new());
        let mail = Arc::new(MockMailTransport::new());
        let orchestrator = DeliveryOrchestrator::new(
            Arc::new(quotes),
            store.clone(),
            mail.clone(),
            Pacer::disabled(),
            ADMIN,
        );
        Fixture {
            store,
            mail,
            orchestrator,
        }
    }

    #[test]
    fn greeting_takes_the_first_name_token() {
        assert_eq!(greeting_name("Alice Smith"), "Alice");
        assert_eq!(greeting_name("Bob"), "Bob");
        assert_eq!(greeting_name("  Carol   de  Vries "), "Carol");
    }

    #[test]
    fn greeting_falls_back_for_blank_names() {
        assert_eq!(greeting_name(""), GENERIC_GREETING);
        assert_eq!(greeting_name("   "), GENERIC_GREETING);
        assert!(!greeting_name("").is_empty());
    }

    #[tokio::test]
    async fn two_daily_users_both_succeed() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("a@example.com", "Alice Smith", Frequency::Daily).await;
        f.store.add_user("b@example.com", "Bob Jones", Frequency::Daily).await;

        let report = f.orchestrator.run_on(tuesday()).await;

        assert!(report.quote_available);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 0);
        assert!(report.unrecorded.is_empty());

        let sent = f.mail.sent_emails().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "a@example.com");
        assert_eq!(sent[0].greeting, "Alice");
        assert_eq!(sent[0].quote.text, "Begin.");
        assert_eq!(sent[0].frequency, Frequency::Daily);

        // Exactly one outcome per recipient.
        let outcomes = f.store.outcomes().await;
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.status == SendStatus::Sent));

        // Summary reflects the recorded outcomes and reaches the admin.
        let summaries = f.mail.summaries().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].admin, ADMIN);
        assert_eq!(summaries[0].summary, DailySummary { sent: 2, failed: 0 });
        assert!(report.summary_delivered);
    }

    #[tokio::test]
    async fn one_failing_recipient_does_not_stop_the_others() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        let a = f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;
        let b = f.store.add_user("b@example.com", "Bob", Frequency::Daily).await;
        let c = f.store.add_user("c@example.com", "Carol", Frequency::Daily).await;
        f.mail.fail_recipient("b@example.com").await;

        let report = f.orchestrator.run_on(tuesday()).await;

        assert_eq!(report.attempted, 3);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 1);

        // Recipients 1 and 3 still got their mail.
        let delivered: Vec<String> =
            f.mail.sent_emails().await.into_iter().map(|m| m.to).collect();
        assert_eq!(delivered, vec!["a@example.com", "c@example.com"]);

        // Exactly one failed outcome, for recipient 2, with the fixed detail.
        let outcomes = f.store.outcomes().await;
        assert_eq!(outcomes.len(), 3);
        let failed: Vec<&SendOutcome> = outcomes
            .iter()
            .filter(|o| o.status == SendStatus::Failed)
            .collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].user_id, b);
        assert_eq!(failed[0].error_detail.as_deref(), Some(SEND_FAILURE_DETAIL));
        assert!(outcomes.iter().any(|o| o.user_id == a && o.status == SendStatus::Sent));
        assert!(outcomes.iter().any(|o| o.user_id == c && o.status == SendStatus::Sent));

        assert_eq!(
            f.mail.summaries().await[0].summary,
            DailySummary { sent: 2, failed: 1 }
        );
    }

    #[tokio::test]
    async fn weekly_tier_dispatches_only_on_monday() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("d@example.com", "Dora", Frequency::Daily).await;
        f.store.add_user("w@example.com", "Wally", Frequency::Weekly).await;

        let report = f.orchestrator.run_on(monday()).await;
        assert_eq!(report.sent, 2);

        let sent = f.mail.sent_emails().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, "w@example.com");
        assert_eq!(sent[1].frequency, Frequency::Weekly);
    }

    #[tokio::test]
    async fn weekly_tier_is_skipped_on_all_other_days() {
        for offset in 1..7 {
            let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
            f.store.add_user("w@example.com", "Wally", Frequency::Weekly).await;

            let date = monday() + chrono::Days::new(offset);
            let report = f.orchestrator.run_on(date).await;

            assert_eq!(report.sent, 0, "no weekly sends expected on {date}");
            assert!(f.mail.sent_emails().await.is_empty());
            // The summary still goes out on quiet days.
            assert!(report.summary_delivered);
        }
    }

    #[tokio::test]
    async fn unusable_quote_skips_dispatch_but_not_the_summary() {
        let f = fixture(MockQuoteSource::unavailable());
        f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;

        let report = f.orchestrator.run_on(monday()).await;

        assert!(!report.quote_available);
        assert_eq!(report.attempted, 0);
        assert!(f.mail.sent_emails().await.is_empty());
        assert!(f.store.outcomes().await.is_empty());

        // The summary stage still ran.
        let summaries = f.mail.summaries().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].summary, DailySummary::default());
    }

    #[tokio::test]
    async fn fallback_quote_still_dispatches_normally() {
        let f = fixture(MockQuoteSource::fallback());
        f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;

        let report = f.orchestrator.run_on(tuesday()).await;

        assert!(report.quote_available);
        assert_eq!(report.sent, 1);
        assert_eq!(f.mail.sent_emails().await[0].quote, Quote::fallback());
    }

    #[tokio::test]
    async fn empty_selection_is_not_an_error() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));

        let report = f.orchestrator.run_on(tuesday()).await;

        assert_eq!(report.attempted, 0);
        assert!(report.summary_delivered);
    }

    #[tokio::test]
    async fn selection_failure_aborts_dispatch_but_not_the_summary() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;
        f.store.fail_selects();

        let report = f.orchestrator.run_on(tuesday()).await;

        assert_eq!(report.attempted, 0);
        assert!(f.mail.sent_emails().await.is_empty());
        assert_eq!(f.mail.summaries().await.len(), 1);
    }

    #[tokio::test]
    async fn record_failure_keeps_the_loop_going_and_reports_the_loss() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        let a = f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;
        f.store.add_user("b@example.com", "Bob", Frequency::Daily).await;
        f.store.fail_records();

        let report = f.orchestrator.run_on(tuesday()).await;

        // Both sends happened despite the store refusing every record.
        assert_eq!(report.sent, 2);
        assert_eq!(f.mail.sent_emails().await.len(), 2);
        assert!(f.store.outcomes().await.is_empty());

        // The lost outcomes are handed back instead of vanishing.
        assert_eq!(report.unrecorded.len(), 2);
        assert_eq!(report.unrecorded[0].user_id, a);
        assert!(report.summary_delivered);
    }

    #[tokio::test]
    async fn summary_failure_is_contained() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;
        f.mail.fail_summaries().await;

        let report = f.orchestrator.run_on(tuesday()).await;

        // The run still completed and the counts are intact.
        assert_eq!(report.sent, 1);
        assert!(!report.summary_delivered);
        assert_eq!(report.summary, DailySummary { sent: 1, failed: 0 });
    }

    #[tokio::test]
    async fn rerun_on_the_same_day_converges_instead_of_duplicating() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("a@example.com", "Alice", Frequency::Daily).await;
        f.store.add_user("b@example.com", "Bob", Frequency::Daily).await;

        let first = f.orchestrator.run_on(tuesday()).await;
        assert_eq!(first.sent, 2);

        let second = f.orchestrator.run_on(tuesday()).await;
        assert_eq!(second.sent, 0);
        assert_eq!(second.skipped, 2);

        // Still exactly one outcome per recipient for the day.
        assert_eq!(f.store.outcomes().await.len(), 2);
        assert_eq!(f.mail.sent_emails().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_deliveries_are_retried_on_rerun() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        let b = f.store.add_user("b@example.com", "Bob", Frequency::Daily).await;
        f.store
            .seed_outcome(SendOutcome::failed(b, tuesday(), SEND_FAILURE_DETAIL))
            .await;

        // Only successful deliveries gate the rerun; a failed attempt is
        // tried again.
        let report = f.orchestrator.run_on(tuesday()).await;
        assert_eq!(report.skipped, 0);
        assert_eq!(report.sent, 1);
    }

    #[tokio::test]
    async fn schema_is_ensured_before_anything_else() {
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.orchestrator.run_on(tuesday()).await;
        assert_eq!(f.store.schema_calls(), 1);
    }

    #[tokio::test]
    async fn quotes_source_is_consulted_exactly_once_per_run() {
        // Both tiers dispatch on Monday yet share one fetched quote.
        let f = fixture(MockQuoteSource::with_quote("Begin.", "Anon"));
        f.store.add_user("d@example.com", "Dora", Frequency::Daily).await;
        f.store.add_user("w@example.com", "Wally", Frequency::Weekly).await;

        let report = f.orchestrator.run_on(monday()).await;
        assert_eq!(report.sent, 2);
        let sent = f.mail.sent_emails().await;
        assert!(sent.iter().all(|m| m.quote.text == "Begin."));
    }
}
