// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the MindFuel delivery job.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the MindFuel workspace. The quote provider,
//! mail transport, and storage crates all implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::MindfuelError;
pub use types::{
    DailySummary, Frequency, HealthStatus, Quote, QuoteEmail, Recipient, SendOutcome, SendStatus,
    User,
};

// Re-export all collaborator traits at crate root.
pub use traits::{Collaborator, MailTransport, QuoteSource, UserStore};
