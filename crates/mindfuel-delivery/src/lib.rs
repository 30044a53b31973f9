// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delivery orchestration for the MindFuel quote job.
//!
//! This crate owns the run's decision logic: fetch once, select recipients
//! per frequency tier, dispatch one message per recipient with per-recipient
//! failure isolation, record every outcome, and always finish with the
//! administrative summary. Everything it talks to is a `mindfuel-core`
//! collaborator trait, so the whole run is testable with in-memory fakes.

pub mod orchestrator;
pub mod pacer;
pub mod report;
pub mod schedule;

pub use orchestrator::{greeting_name, DeliveryOrchestrator, GENERIC_GREETING, SEND_FAILURE_DETAIL};
pub use pacer::Pacer;
pub use report::RunReport;
