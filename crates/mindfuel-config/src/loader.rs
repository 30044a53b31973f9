// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./mindfuel.toml` > `~/.config/mindfuel/mindfuel.toml`
//! > `/etc/mindfuel/mindfuel.toml` with environment variable overrides via the
//! `MINDFUEL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MindfuelConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mindfuel/mindfuel.toml` (system-wide)
/// 3. `~/.config/mindfuel/mindfuel.toml` (user XDG config)
/// 4. `./mindfuel.toml` (local directory)
/// 5. `MINDFUEL_*` environment variables
pub fn load_config() -> Result<MindfuelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MindfuelConfig::default()))
        .merge(Toml::file("/etc/mindfuel/mindfuel.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("mindfuel/mindfuel.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("mindfuel.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MindfuelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MindfuelConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MindfuelConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MindfuelConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `MINDFUEL_MAIL_SMTP_HOST`
/// must map to `mail.smtp_host`, not `mail.smtp.host`.
fn env_provider() -> Env {
    Env::prefixed("MINDFUEL_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: MINDFUEL_JOB_ADMIN_EMAIL -> "job_admin_email"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("job_", "job.", 1)
            .replacen("quotes_", "quotes.", 1)
            .replacen("mail_", "mail.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
