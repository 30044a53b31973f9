// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message bodies and subjects for quote and summary emails.
//!
//! Plain string formatting only; both the text and HTML variants of the
//! quote email are attached as a multipart alternative by the mailer.

use chrono::NaiveDate;
use mindfuel_core::{DailySummary, Frequency, Quote};

/// Subject line for a quote email.
pub fn quote_subject(frequency: Frequency) -> String {
    format!("Your {frequency} Dose of Wellness ✨")
}

/// Plain-text body of a quote email.
pub fn quote_text(greeting: &str, quote: &Quote) -> String {
    format!(
        "Hi {greeting},\n\
         \n\
         Here's your dose of calm and clarity for today:\n\
         \n\
         \u{201c}{}\u{201d}\n\
         \u{2014} {}\n\
         \n\
         Take a moment to breathe, stretch, or simply sit with this thought.\n\
         \n\
         Warmly,\n\
         The MindFuel Team\n",
        quote.text, quote.author
    )
}

/// HTML body of a quote email.
pub fn quote_html(greeting: &str, quote: &Quote) -> String {
    format!(
        r#"<html>
  <body style="font-family: Georgia, sans-serif; line-height: 1.6; color: #333;">
    <p>Hi <b>{greeting}</b>,</p>

    <p>Here's your dose of calm and clarity for today:</p>

    <blockquote style="font-style: italic; color: #333;">
      &ldquo;{}&rdquo;<br>
      &mdash; <b>{}</b>
    </blockquote>

    <p style="margin-top: 25px;">Warmly,<br>
    <b>The MindFuel Team</b><br>
    <a href="https://www.mindfuel.app" style="color:#388e3c; text-decoration:none;">www.mindfuel.app</a></p>
  </body>
</html>
"#,
        quote.text, quote.author
    )
}

/// Subject line for the administrative summary report.
pub fn summary_subject(environment: &str) -> String {
    format!("MindFuel Daily Summary \u{2014} {environment}")
}

/// Plain-text body of the administrative summary report.
pub fn summary_text(summary: &DailySummary, date: NaiveDate) -> String {
    format!(
        "Daily Email Summary \u{2014} {date}\n\
         {}\n\
         Sent:   {}\n\
         Failed: {}\n\
         \n\
         Stay inspired,\n\
         MindFuel Bot\n",
        "-".repeat(40),
        summary.sent,
        summary.failed
    )
}
