// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quote-of-the-day client for the ZenQuotes API.
//!
//! Provides [`ZenQuotesSource`], the [`QuoteSource`] implementation used by
//! the delivery run. Every failure mode (transport error, bad status,
//! malformed payload, blank fields) collapses to the fixed fallback quote;
//! a fetch is a single bounded attempt, never retried.

pub mod client;

pub use client::ZenQuotesSource;
