// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all external collaborators must implement.

use async_trait::async_trait;

use crate::error::MindfuelError;
use crate::types::HealthStatus;

/// The base trait for all MindFuel collaborators.
///
/// Every collaborator (quote source, mail transport, user store) implements
/// this trait, which provides identity, health check, and shutdown hooks.
#[async_trait]
pub trait Collaborator: Send + Sync + 'static {
    /// Returns the human-readable name of this collaborator instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this collaborator.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the collaborator's current status.
    async fn health_check(&self) -> Result<HealthStatus, MindfuelError>;

    /// Gracefully shuts down the collaborator, releasing any held resources.
    async fn shutdown(&self) -> Result<(), MindfuelError>;
}
