// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `mindfuel-core::types` for use across
//! collaborator trait boundaries. This module re-exports them for
//! convenience within the storage crate.

pub use mindfuel_core::types::{DailySummary, Frequency, Recipient, SendOutcome, SendStatus, User};
