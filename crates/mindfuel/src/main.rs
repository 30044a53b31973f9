// SPDX-FileCopyrightText: 2026 MindFuel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MindFuel - a daily inspirational quote delivery job.
//!
//! This is the binary entry point. Running with no arguments executes one
//! delivery job; subcommands cover administrative inserts and diagnostics.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use mindfuel_core::Frequency;

mod admin;
mod doctor;
mod run;

/// MindFuel - a daily inspirational quote delivery job.
#[derive(Parser, Debug)]
#[command(name = "mindfuel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one delivery job (the default when no subcommand is given).
    Run,
    /// Subscribe a user (administrative; duplicate emails are a no-op).
    AddUser {
        /// Email address of the subscriber.
        email: String,
        /// Display name of the subscriber.
        name: String,
        /// Delivery frequency: daily or weekly.
        #[arg(long, default_value = "daily", value_parser = Frequency::from_str)]
        frequency: Frequency,
    },
    /// Check the health of the storage, quote provider, and mail transport.
    Doctor,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match mindfuel_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            mindfuel_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.job.log_level);

    match cli.command {
        // The delivery job never fails the process: internal errors are
        // logged and the run still produces its summary.
        None | Some(Commands::Run) => run::run_job(&config).await,
        Some(Commands::AddUser {
            email,
            name,
            frequency,
        }) => {
            if let Err(e) = admin::add_user(&config, &email, &name, frequency).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Doctor) => {
            if !doctor::run_doctor(&config).await {
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mindfuel={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
