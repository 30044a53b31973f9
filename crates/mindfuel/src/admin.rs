// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mindfuel add-user` command implementation.
//!
//! Subscribes a user outside the delivery run. The store enforces email
//! uniqueness, so inserting an existing address is a quiet no-op.

use mindfuel_config::MindfuelConfig;
use mindfuel_core::{Collaborator, Frequency, MindfuelError, UserStore};
use mindfuel_storage::SqliteUserStore;
use tracing::info;

/// Inserts one subscriber into the store.
pub async fn add_user(
    config: &MindfuelConfig,
    email: &str,
    name: &str,
    frequency: Frequency,
) -> Result<(), MindfuelError> {
    let store = SqliteUserStore::new(config.storage.clone());
    store.ensure_schema().await?;
    store.insert_user(email, name, frequency).await?;
    info!(email, frequency = %frequency, "subscriber added");
    println!("Subscribed {email} ({frequency})");
    store.shutdown().await?;
    Ok(())
}
