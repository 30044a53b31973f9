// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock collaborators for deterministic testing.
//!
//! Each mock implements a core collaborator trait with injectable behavior
//! and captured calls for assertion in tests: scripted quotes, captured
//! outbound mail with per-recipient failure injection, and an in-memory
//! user store with failure toggles.

pub mod memory_store;
pub mod mock_mail;
pub mod mock_quotes;

pub use memory_store::MemoryUserStore;
pub use mock_mail::{MockMailTransport, SummaryEmail};
pub use mock_quotes::MockQuoteSource;
