// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail transport trait for outbound delivery.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::MindfuelError;
use crate::traits::collaborator::Collaborator;
use crate::types::{DailySummary, QuoteEmail};

/// Delivers formatted messages to recipients over an authenticated connection.
#[async_trait]
pub trait MailTransport: Collaborator {
    /// Sends one personalized quote message to one recipient.
    async fn send_quote(&self, email: &QuoteEmail) -> Result<(), MindfuelError>;

    /// Sends the aggregate delivery report for `date` to the administrative
    /// recipient.
    async fn send_summary(
        &self,
        summary: &DailySummary,
        admin: &str,
        date: NaiveDate,
    ) -> Result<(), MindfuelError>;
}
