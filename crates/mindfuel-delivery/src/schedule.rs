// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar rule for the weekly frequency tier.

use chrono::{Datelike, NaiveDate, Weekday};

/// Whether the weekly tier dispatches on `date`.
///
/// True exactly on the first day of the week (Monday). There is no
/// lookahead or catch-up: a run that does not execute on a Monday never
/// sends the weekly tier for that week.
pub fn weekly_tier_due(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}
