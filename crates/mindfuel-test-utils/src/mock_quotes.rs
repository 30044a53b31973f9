// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock quote source with a scripted response.

use async_trait::async_trait;

use mindfuel_core::{Collaborator, HealthStatus, MindfuelError, Quote, QuoteSource};

/// A quote source that returns a fixed, pre-scripted response.
pub struct MockQuoteSource {
    quote: Option<Quote>,
}

impl MockQuoteSource {
    /// A source that yields the given quote.
    pub fn with_quote(text: &str, author: &str) -> Self {
        Self {
            quote: Some(Quote {
                text: text.to_string(),
                author: author.to_string(),
            }),
        }
    }

    /// A source that yields the fixed fallback quote, as the real client
    /// does when the provider is unreachable.
    pub fn fallback() -> Self {
        Self {
            quote: Some(Quote::fallback()),
        }
    }

    /// A source that yields nothing usable, triggering the abort-dispatch
    /// path in the orchestrator.
    pub fn unavailable() -> Self {
        Self { quote: None }
    }
}

#[async_trait]
impl Collaborator for MockQuoteSource {
    fn name(&self) -> &str {
        "mock-quotes"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MindfuelError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), MindfuelError> {
        Ok(())
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch(&self) -> Option<Quote> {
        self.quote.clone()
    }
}
