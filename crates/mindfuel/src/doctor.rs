// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mindfuel doctor` command implementation.
//!
//! Runs health checks against the three collaborators to identify
//! configuration and connectivity problems before the scheduled run hits
//! them. A degraded quote provider is a warning (the run would fall back
//! to the fixed quote); an unreachable store or SMTP server is a failure.

use mindfuel_config::MindfuelConfig;
use mindfuel_core::{Collaborator, HealthStatus};
use mindfuel_mail::SmtpMailer;
use mindfuel_quotes::ZenQuotesSource;
use mindfuel_storage::SqliteUserStore;

/// Outcome of a single diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
}

/// Run all health checks. Returns false when any check failed.
pub async fn run_doctor(config: &MindfuelConfig) -> bool {
    let mut results = Vec::new();

    results.push(check(&SqliteUserStore::new(config.storage.clone())).await);

    match ZenQuotesSource::new(&config.quotes) {
        Ok(quotes) => results.push(check(&quotes).await),
        Err(e) => results.push(CheckResult {
            name: "zenquotes".to_string(),
            status: CheckStatus::Fail,
            message: e.to_string(),
        }),
    }

    match SmtpMailer::new(&config.mail, &config.job.environment) {
        Ok(mail) => results.push(check(&mail).await),
        Err(e) => results.push(CheckResult {
            name: "smtp".to_string(),
            status: CheckStatus::Fail,
            message: e.to_string(),
        }),
    }

    let mut ok = true;
    for result in &results {
        let marker = match result.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Warn => "warn",
            CheckStatus::Fail => {
                ok = false;
                "FAIL"
            }
        };
        println!("[{marker}] {}: {}", result.name, result.message);
    }
    ok
}

async fn check(collaborator: &dyn Collaborator) -> CheckResult {
    let name = collaborator.name().to_string();
    match collaborator.health_check().await {
        Ok(HealthStatus::Healthy) => CheckResult {
            name,
            status: CheckStatus::Pass,
            message: "healthy".to_string(),
        },
        Ok(HealthStatus::Degraded(detail)) => CheckResult {
            name,
            status: CheckStatus::Warn,
            message: detail,
        },
        Ok(HealthStatus::Unhealthy(detail)) => CheckResult {
            name,
            status: CheckStatus::Fail,
            message: detail,
        },
        Err(e) => CheckResult {
            name,
            status: CheckStatus::Fail,
            message: e.to_string(),
        },
    }
}
