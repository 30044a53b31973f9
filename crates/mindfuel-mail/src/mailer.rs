// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP implementation of the MailTransport trait, built on lettre.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use mindfuel_config::model::MailConfig;
use mindfuel_core::{
    Collaborator, DailySummary, HealthStatus, MailTransport, MindfuelError, QuoteEmail,
};

use crate::template;

/// SMTP-based mail transport.
///
/// One transport instance is shared for the whole run; lettre pools the
/// underlying connection. Each send is a single attempt bounded by the
/// configured connection timeout.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    environment: String,
}

impl SmtpMailer {
    /// Create a mailer from explicit configuration.
    ///
    /// `environment` labels the summary report subject (e.g. "production").
    pub fn new(config: &MailConfig, environment: &str) -> Result<Self, MindfuelError> {
        let from: Mailbox = config.from_address.parse().map_err(|e| MindfuelError::Mail {
            message: format!("invalid from address `{}`", config.from_address),
            source: Some(Box::new(e)),
        })?;

        let mut builder = match config.tls.as_str() {
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host),
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host).map_err(
                |e| MindfuelError::Mail {
                    message: format!("failed to set up TLS relay to {}", config.smtp_host),
                    source: Some(Box::new(e)),
                },
            )?,
            _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host).map_err(
                |e| MindfuelError::Mail {
                    message: format!("failed to set up STARTTLS relay to {}", config.smtp_host),
                    source: Some(Box::new(e)),
                },
            )?,
        };

        builder = builder
            .port(config.smtp_port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if let (Some(username), Some(password)) =
            (config.smtp_username.clone(), config.smtp_password.clone())
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            environment: environment.to_string(),
        })
    }

    fn parse_recipient(&self, to: &str) -> Result<Mailbox, MindfuelError> {
        to.parse().map_err(|e| MindfuelError::Mail {
            message: format!("invalid recipient address `{to}`"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl Collaborator for SmtpMailer {
    fn name(&self) -> &str {
        "smtp"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, MindfuelError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(HealthStatus::Healthy),
            Ok(false) => Ok(HealthStatus::Unhealthy(
                "SMTP server rejected the connection test".to_string(),
            )),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "SMTP connection failed: {e}"
            ))),
        }
    }

    async fn shutdown(&self) -> Result<(), MindfuelError> {
        Ok(())
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_quote(&self, email: &QuoteEmail) -> Result<(), MindfuelError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.parse_recipient(&email.to)?)
            .subject(template::quote_subject(email.frequency))
            .multipart(MultiPart::alternative_plain_html(
                template::quote_text(&email.greeting, &email.quote),
                template::quote_html(&email.greeting, &email.quote),
            ))
            .map_err(|e| MindfuelError::Mail {
                message: format!("failed to build quote message for {}", email.to),
                source: Some(Box::new(e)),
            })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MindfuelError::Mail {
                message: format!("failed to send quote to {}", email.to),
                source: Some(Box::new(e)),
            })?;

        debug!(to = %email.to, frequency = %email.frequency, "quote email sent");
        Ok(())
    }

    async fn send_summary(
        &self,
        summary: &DailySummary,
        admin: &str,
        date: NaiveDate,
    ) -> Result<(), MindfuelError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.parse_recipient(admin)?)
            .subject(template::summary_subject(&self.environment))
            .body(template::summary_text(summary, date))
            .map_err(|e| MindfuelError::Mail {
                message: format!("failed to build summary message for {admin}"),
                source: Some(Box::new(e)),
            })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MindfuelError::Mail {
                message: format!("failed to send summary to {admin}"),
                source: Some(Box::new(e)),
            })?;

        debug!(to = %admin, "summary email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MailConfig {
        MailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 2525,
            smtp_username: None,
            smtp_password: None,
            from_address: "MindFuel <no-reply@mindfuel.app>".to_string(),
            tls: "none".to_string(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn mailer_builds_from_valid_config() {
        let mailer = SmtpMailer::new(&test_config(), "test").unwrap();
        assert_eq!(mailer.name(), "smtp");
        assert_eq!(mailer.from.email.to_string(), "no-reply@mindfuel.app");
    }

    #[test]
    fn invalid_from_address_is_rejected() {
        let mut config = test_config();
        config.from_address = "not an address".to_string();
        let result = SmtpMailer::new(&config, "test");
        assert!(matches!(result, Err(MindfuelError::Mail { .. })));
    }

    #[test]
    fn invalid_recipient_is_rejected_before_any_network_io() {
        let mailer = SmtpMailer::new(&test_config(), "test").unwrap();
        assert!(mailer.parse_recipient("not an address").is_err());
        assert!(mailer.parse_recipient("alice@example.com").is_ok());
    }

    #[tokio::test]
    async fn send_to_unreachable_server_errors_rather_than_hanging() {
        // Port 2525 on localhost has no listener in the test environment, so
        // the bounded connection attempt must surface as a Mail error.
        let mailer = SmtpMailer::new(&test_config(), "test").unwrap();
        let email = QuoteEmail {
            to: "alice@example.com".to_string(),
            greeting: "Alice".to_string(),
            quote: mindfuel_core::Quote::fallback(),
            frequency: mindfuel_core::Frequency::Daily,
        };
        let result = mailer.send_quote(&email).await;
        assert!(matches!(result, Err(MindfuelError::Mail { .. })));
    }
}
