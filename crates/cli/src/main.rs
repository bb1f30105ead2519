// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::correctness,
    clippy::style,
    clippy::perf,
    clippy::complexity,
    clippy::cargo,
    clippy::all,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod attachment;
mod commands;
mod error;
mod render;
mod session;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ticket_desk_api::TicketDesk;
use ticket_desk_backend::{BackendConfig, DEFAULT_BASE_URL, HttpBackend};
use ticket_desk_domain::ActingUser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{Command, run};
use crate::error::CliError;
use crate::session::load_session;

/// Ticket Desk command-line client
#[derive(Debug, Parser)]
#[command(name = "ticket-desk", version, about)]
struct Args {
    /// Base URL of the support backend
    #[arg(long, env = "TICKET_DESK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Session file holding the signed-in user
    #[arg(long, env = "TICKET_DESK_SESSION")]
    session: PathBuf,

    /// Request timeout in seconds
    #[arg(long, env = "TICKET_DESK_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn build_desk(args: &Args) -> Result<TicketDesk<HttpBackend>, CliError> {
    let config: BackendConfig = BackendConfig::new(args.base_url.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let backend: HttpBackend = HttpBackend::new(&config)?;
    Ok(TicketDesk::new(backend))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Args = Args::parse();
    let actor: ActingUser = load_session(&args.session)?;
    let desk: TicketDesk<HttpBackend> = build_desk(&args)?;
    info!(base_url = %args.base_url, emp_id = %actor.emp_id, "Ticket Desk client ready");

    let output: String = run(&desk, &actor, args.command, args.json).await?;
    println!("{output}");
    Ok(())
}
