// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send outcome recording and aggregation.

use chrono::NaiveDate;
use mindfuel_core::MindfuelError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{DailySummary, SendOutcome};

/// Append one delivery outcome. Outcomes are immutable once written.
pub async fn record_outcome(db: &Database, outcome: &SendOutcome) -> Result<(), MindfuelError> {
    let outcome = outcome.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO send_outcomes (user_id, send_date, status, error_detail)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    outcome.user_id,
                    outcome.date.to_string(),
                    outcome.status.to_string(),
                    outcome.error_detail,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Whether a successful delivery to `user_id` is already recorded for `date`.
pub async fn sent_on(db: &Database, user_id: i64, date: NaiveDate) -> Result<bool, MindfuelError> {
    let date = date.to_string();
    db.connection()
        .call(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM send_outcomes
                 WHERE user_id = ?1 AND send_date = ?2 AND status = 'sent'",
                params![user_id, date],
                |row| row.get(0),
            )?;
            Ok(count > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Aggregate the outcomes recorded for `date`, grouped by status.
///
/// Statuses with no rows default to zero; the result always reflects the
/// store as of this call (no caching across runs).
pub async fn summarize(db: &Database, date: NaiveDate) -> Result<DailySummary, MindfuelError> {
    let date = date.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT status, COUNT(*) FROM send_outcomes
                 WHERE send_date = ?1 GROUP BY status",
            )?;
            let rows = stmt.query_map(params![date], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?;
            let mut summary = DailySummary::default();
            for row in rows {
                let (status, count) = row?;
                match status.as_str() {
                    "sent" => summary.sent = count,
                    "failed" => summary.failed = count,
                    _ => {}
                }
            }
            Ok(summary)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
