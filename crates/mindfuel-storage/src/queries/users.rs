// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User CRUD operations.

use std::str::FromStr;

use mindfuel_core::MindfuelError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{Frequency, Recipient, User};

/// Insert a new subscriber. A duplicate email is a quiet no-op.
pub async fn insert_user(
    db: &Database,
    email: &str,
    name: &str,
    frequency: Frequency,
) -> Result<(), MindfuelError> {
    let email = email.to_string();
    let name = name.to_string();
    let frequency = frequency.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO users (email, name, frequency) VALUES (?1, ?2, ?3)
                 ON CONFLICT(email) DO NOTHING",
                params![email, name, frequency],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Select the active users subscribed at `frequency`, ordered by id.
pub async fn select_active(
    db: &Database,
    frequency: Frequency,
) -> Result<Vec<Recipient>, MindfuelError> {
    let frequency = frequency.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, email, name FROM users
                 WHERE is_active = 1 AND frequency = ?1
                 ORDER BY id",
            )?;
            let rows = stmt.query_map(params![frequency], |row| {
                Ok(Recipient {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                })
            })?;
            let mut recipients = Vec::new();
            for row in rows {
                recipients.push(row?);
            }
            Ok(recipients)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up a user by email. Returns `None` when no such subscriber exists.
pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<User>, MindfuelError> {
    let email = email.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, email, name, is_active, frequency, created_at
                 FROM users WHERE email = ?1",
            )?;
            let result = stmt.query_row(params![email], |row| {
                let frequency: String = row.get(4)?;
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    name: row.get(2)?,
                    is_active: row.get(3)?,
                    frequency: Frequency::from_str(&frequency).unwrap_or(Frequency::Daily),
                    created_at: row.get(5)?,
                })
            });
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
