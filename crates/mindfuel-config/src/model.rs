// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the MindFuel delivery job.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level MindFuel configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MindfuelConfig {
    /// Delivery job behavior settings.
    #[serde(default)]
    pub job: JobConfig,

    /// Quote provider settings.
    #[serde(default)]
    pub quotes: QuotesConfig,

    /// SMTP transport settings.
    #[serde(default)]
    pub mail: MailConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Delivery job behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Recipient of the end-of-run summary report.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Environment label shown in the summary report subject.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Fixed pause between consecutive sends, in seconds. Pacing only, not
    /// a retry mechanism.
    #[serde(default = "default_send_interval_secs")]
    pub send_interval_secs: u64,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            admin_email: default_admin_email(),
            environment: default_environment(),
            send_interval_secs: default_send_interval_secs(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_admin_email() -> String {
    "admin@mindfuel.app".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_send_interval_secs() -> u64 {
    2
}

/// Quote provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuotesConfig {
    /// Base URL of the ZenQuotes-compatible API.
    #[serde(default = "default_quotes_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Exceeding it counts as a failed fetch,
    /// never as a failed run.
    #[serde(default = "default_quotes_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            base_url: default_quotes_base_url(),
            timeout_secs: default_quotes_timeout_secs(),
        }
    }
}

fn default_quotes_base_url() -> String {
    "https://zenquotes.io/api".to_string()
}

fn default_quotes_timeout_secs() -> u64 {
    5
}

/// SMTP transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    /// SMTP server hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP server port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username. `None` disables authentication.
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password. `None` disables authentication.
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender address placed on every outbound message.
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// TLS mode: "starttls", "tls", or "none".
    #[serde(default = "default_tls")]
    pub tls: String,

    /// Connection timeout in seconds.
    #[serde(default = "default_mail_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: None,
            smtp_password: None,
            from_address: default_from_address(),
            tls: default_tls(),
            timeout_secs: default_mail_timeout_secs(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "MindFuel <no-reply@mindfuel.app>".to_string()
}

fn default_tls() -> String {
    "starttls".to_string()
}

fn default_mail_timeout_secs() -> u64 {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("mindfuel").join("mindfuel.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("mindfuel.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}
