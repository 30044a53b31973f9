// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the ZenQuotes quote-of-the-day endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use mindfuel_config::model::QuotesConfig;
use mindfuel_core::{Collaborator, HealthStatus, MindfuelError, Quote, QuoteSource};

/// One entry of the ZenQuotes response payload.
///
/// The API returns a JSON array; only `q` (quote) and `a` (author) matter.
#[derive(Debug, Deserialize)]
struct ApiQuote {
    #[serde(rename = "q")]
    quote: String,
    #[serde(rename = "a")]
    author: String,
}

/// HTTP client for a ZenQuotes-compatible provider.
#[derive(Debug, Clone)]
pub struct ZenQuotesSource {
    client: reqwest::Client,
    base_url: String,
}

impl ZenQuotesSource {
    /// Creates a new quote client with the configured request timeout.
    pub fn new(config: &QuotesConfig) -> Result<Self, MindfuelError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MindfuelError::Quotes {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches today's quote, erroring on any transport or payload problem.
    ///
    /// Callers go through [`QuoteSource::fetch`], which maps every error to
    /// the fallback quote; this inner method keeps the failure reasons
    /// inspectable for health checks and logs.
    async fn fetch_today(&self) -> Result<Quote, MindfuelError> {
        let url = format!("{}/today", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MindfuelError::Quotes {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MindfuelError::Quotes {
                message: format!("quote provider returned {status}"),
                source: None,
            });
        }

        let payload: Vec<ApiQuote> =
            response.json().await.map_err(|e| MindfuelError::Quotes {
                message: format!("failed to parse quote payload: {e}"),
                source: Some(Box::new(e)),
            })?;

        payload
            .into_iter()
            .find(|q| !q.quote.trim().is_empty() && !q.author.trim().is_empty())
            .map(|q| Quote {
                text: q.quote,
                author: q.author,
            })
            .ok_or_else(|| MindfuelError::Quotes {
                message: "quote provider returned no usable entries".to_string(),
                source: None,
            })
    }
}

#[async_trait]
impl Collaborator for ZenQuotesSource {
    fn name(&self) -> &str {
        "zenquotes"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MindfuelError> {
        // The delivery run survives a provider outage on the fallback quote,
        // so an unreachable provider is degraded rather than unhealthy.
        match self.fetch_today().await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Degraded(format!(
                "{e}; deliveries would use the fallback quote"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), MindfuelError> {
        Ok(())
    }
}

#[async_trait]
impl QuoteSource for ZenQuotesSource {
    async fn fetch(&self) -> Option<Quote> {
        match self.fetch_today().await {
            Ok(quote) => {
                debug!(author = %quote.author, "quote of the day fetched");
                Some(quote)
            }
            Err(e) => {
                warn!(error = %e, "quote fetch failed, falling back to the fixed quote");
                Some(Quote::fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> ZenQuotesSource {
        ZenQuotesSource::new(&QuotesConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_first_usable_quote() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            {"q": "The obstacle is the way.", "a": "Marcus Aurelius", "h": "<blockquote>...</blockquote>"}
        ]);
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let quote = source_for(&server).fetch().await.unwrap();
        assert_eq!(quote.text, "The obstacle is the way.");
        assert_eq!(quote.author, "Marcus Aurelius");
    }

    #[tokio::test]
    async fn fetch_skips_blank_entries() {
        let server = MockServer::start().await;
        let body = serde_json::json!([
            {"q": "  ", "a": "Nobody"},
            {"q": "Fall seven times, stand up eight.", "a": "Japanese proverb"}
        ]);
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let quote = source_for(&server).fetch().await.unwrap();
        assert_eq!(quote.author, "Japanese proverb");
    }

    #[tokio::test]
    async fn server_error_falls_back_to_fixed_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1) // single attempt, no retries
            .mount(&server)
            .await;

        let quote = source_for(&server).fetch().await.unwrap();
        assert_eq!(quote, Quote::fallback());
    }

    #[tokio::test]
    async fn malformed_payload_falls_back_to_fixed_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let quote = source_for(&server).fetch().await.unwrap();
        assert_eq!(quote, Quote::fallback());
    }

    #[tokio::test]
    async fn empty_array_falls_back_to_fixed_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let quote = source_for(&server).fetch().await.unwrap();
        assert_eq!(quote, Quote::fallback());
    }

    #[tokio::test]
    async fn unreachable_provider_reports_degraded_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = source_for(&server);
        let status = source.health_check().await.unwrap();
        assert!(matches!(status, HealthStatus::Degraded(_)));
    }

    #[tokio::test]
    async fn reachable_provider_reports_healthy() {
        let server = MockServer::start().await;
        let body = serde_json::json!([{"q": "Begin.", "a": "Anon"}]);
        Mock::given(method("GET"))
            .and(path("/today"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let source = source_for(&server);
        assert_eq!(source.health_check().await.unwrap(), HealthStatus::Healthy);
    }
}
