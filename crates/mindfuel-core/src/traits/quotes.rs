// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote source trait for quote-of-the-day providers.

use async_trait::async_trait;

use crate::traits::collaborator::Collaborator;
use crate::types::Quote;

/// A provider of one quote of the day per run.
///
/// `fetch` never errors: transport failures and malformed payloads collapse
/// to the fixed fallback quote inside the implementation. `None` is reserved
/// for "nothing usable at all" and tells the caller that dispatch cannot
/// proceed for this run.
#[async_trait]
pub trait QuoteSource: Collaborator {
    /// Retrieves the quote of the day, or `None` when no usable quote exists.
    async fn fetch(&self) -> Option<Quote>;
}
