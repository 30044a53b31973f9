// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-run accounting returned by the orchestrator.

use chrono::NaiveDate;
use mindfuel_core::{DailySummary, SendOutcome};

/// What one delivery run did.
///
/// `unrecorded` holds outcomes whose persistence failed; they never made it
/// into the store and would otherwise be lost silently, so the run hands
/// them back to the caller.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The calendar date the run executed for.
    pub date: NaiveDate,
    /// Whether the quote source produced anything usable. When false, all
    /// dispatch was skipped for the run.
    pub quote_available: bool,
    /// Recipients a send was attempted for.
    pub attempted: usize,
    /// Attempts that reached the transport successfully.
    pub sent: usize,
    /// Attempts the transport rejected.
    pub failed: usize,
    /// Recipients skipped because a successful delivery was already
    /// recorded for the date.
    pub skipped: usize,
    /// Outcomes that could not be persisted.
    pub unrecorded: Vec<SendOutcome>,
    /// The aggregate computed in the summary stage.
    pub summary: DailySummary,
    /// Whether the summary email reached the admin recipient.
    pub summary_delivered: bool,
}

impl RunReport {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            quote_available: false,
            attempted: 0,
            sent: 0,
            failed: 0,
            skipped: 0,
            unrecorded: Vec::new(),
            summary: DailySummary::default(),
            summary_delivered: false,
        }
    }
}
