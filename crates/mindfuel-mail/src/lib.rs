// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP transport and message templates for the MindFuel delivery job.

pub mod mailer;
pub mod template;

pub use mailer::SmtpMailer;
