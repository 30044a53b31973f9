// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions for the MindFuel delivery job.
//!
//! The orchestrator only ever talks to these traits; the concrete HTTP,
//! SMTP, and SQLite implementations live in their own crates. All traits
//! extend the [`Collaborator`] base trait and use `#[async_trait]` for
//! dynamic dispatch compatibility.

pub mod collaborator;
pub mod mail;
pub mod quotes;
pub mod store;

// Re-export all traits at the traits module level for convenience.
pub use collaborator::Collaborator;
pub use mail::MailTransport;
pub use quotes::QuoteSource;
pub use store::UserStore;
