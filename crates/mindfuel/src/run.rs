// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mindfuel run` command implementation.
//!
//! Builds the three collaborators from configuration and executes one
//! delivery run. The run itself never fails the process; only collaborator
//! construction problems (e.g. an unparseable from address) end the command
//! early, and those are logged rather than re-raised.

use std::sync::Arc;

use mindfuel_config::MindfuelConfig;
use mindfuel_core::Collaborator;
use mindfuel_delivery::{DeliveryOrchestrator, Pacer};
use mindfuel_mail::SmtpMailer;
use mindfuel_quotes::ZenQuotesSource;
use mindfuel_storage::SqliteUserStore;
use tracing::{error, info, warn};

/// Runs one delivery job.
pub async fn run_job(config: &MindfuelConfig) {
    info!("starting mindfuel delivery run");

    let quotes = match ZenQuotesSource::new(&config.quotes) {
        Ok(quotes) => Arc::new(quotes),
        Err(e) => {
            error!(error = %e, "failed to initialize quote source");
            return;
        }
    };

    let mail = match SmtpMailer::new(&config.mail, &config.job.environment) {
        Ok(mail) => Arc::new(mail),
        Err(e) => {
            error!(error = %e, "failed to initialize mail transport");
            return;
        }
    };

    let store = Arc::new(SqliteUserStore::new(config.storage.clone()));
    let pacer = Pacer::from_secs(config.job.send_interval_secs);

    let orchestrator = DeliveryOrchestrator::new(
        quotes,
        store.clone(),
        mail,
        pacer,
        config.job.admin_email.clone(),
    );

    let report = orchestrator.run().await;

    if !report.unrecorded.is_empty() {
        warn!(
            count = report.unrecorded.len(),
            "some delivery outcomes could not be recorded"
        );
    }

    if let Err(e) = store.shutdown().await {
        warn!(error = %e, "storage shutdown failed");
    }
}
