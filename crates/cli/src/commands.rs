// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use ticket_desk::TicketState;
use ticket_desk_api::{
    RaiseTicketRequest, TicketDesk, TransitionRequest, TransitionResponse, build_ticket_view,
};
use ticket_desk_backend::TicketBackend;
use ticket_desk_domain::{ActingUser, Attachment, Category, Ticket, TicketId, TicketStatus};
use tracing::info;

use crate::attachment::read_attachment;
use crate::error::CliError;
use crate::render::{render_options, render_ticket_list, render_ticket_view};

/// Parses a status label given on the command line.
///
/// # Errors
///
/// Returns an error naming the label if it is not a known status.
pub fn parse_status(label: &str) -> Result<TicketStatus, String> {
    label.parse::<TicketStatus>().map_err(|err| err.to_string())
}

/// Parses a category given on the command line, ignoring case for the
/// known ones.
///
/// # Errors
///
/// Returns an error if the category is blank.
pub fn parse_category(label: &str) -> Result<Category, String> {
    let trimmed: &str = label.trim();
    if trimmed.is_empty() {
        return Err(String::from("category cannot be empty"));
    }
    let known: [Category; 3] = [Category::Hardware, Category::Software, Category::Erp365];
    Ok(known
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
        .unwrap_or_else(|| Category::Other(trimmed.to_string())))
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the tickets you can see
    List,
    /// Show a ticket with its update history
    Show {
        /// Ticket id
        id: String,
    },
    /// Show the status updates you may apply to a ticket
    Options {
        /// Ticket id
        id: String,
    },
    /// Move a ticket to a new status
    Update {
        /// Ticket id
        id: String,
        /// New status, e.g. "Resolved" or "Forward to L2"
        #[arg(long, value_parser = parse_status)]
        status: TicketStatus,
        /// Remark recorded with the update
        #[arg(long)]
        remark: String,
        /// Image to attach when forwarding to L2
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Raise a new ticket
    Raise {
        /// Hardware, Software, ERP365 or any other category
        #[arg(long, value_parser = parse_category)]
        category: Category,
        /// Description of the problem
        #[arg(long)]
        remark: String,
        /// Image to attach
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

fn read_optional(path: Option<&Path>) -> Result<Option<Attachment>, CliError> {
    path.map(read_attachment).transpose()
}

/// Runs one command and returns what to print.
///
/// # Errors
///
/// Returns an error if the command fails at any layer.
pub async fn run<B: TicketBackend>(
    desk: &TicketDesk<B>,
    actor: &ActingUser,
    command: Command,
    json: bool,
) -> Result<String, CliError> {
    match command {
        Command::List => {
            let tickets: Vec<Ticket> = desk.list_tickets(actor).await?;
            if json {
                return Ok(serde_json::to_string_pretty(&tickets)?);
            }
            Ok(render_ticket_list(&tickets))
        }
        Command::Show { id } => {
            let state: TicketState = desk.load_ticket(&TicketId::new(id), actor).await?;
            let view = build_ticket_view(&state, actor);
            if json {
                return Ok(serde_json::to_string_pretty(&view)?);
            }
            Ok(render_ticket_view(&view))
        }
        Command::Options { id } => {
            let state: TicketState = desk.load_ticket(&TicketId::new(id), actor).await?;
            let view = build_ticket_view(&state, actor);
            if json {
                return Ok(serde_json::to_string_pretty(&view.allowed)?);
            }
            Ok(render_options(&view))
        }
        Command::Update {
            id,
            status,
            remark,
            image,
        } => {
            let attachment: Option<Attachment> = read_optional(image.as_deref())?;
            let mut state: TicketState = desk.load_ticket(&TicketId::new(id), actor).await?;
            let request: TransitionRequest = TransitionRequest {
                status,
                remark,
                attachment,
            };
            let response: TransitionResponse =
                desk.apply_transition(&mut state, request, actor).await?;
            if json {
                return Ok(serde_json::to_string_pretty(&response)?);
            }
            Ok(response.message)
        }
        Command::Raise {
            category,
            remark,
            image,
        } => {
            let request: RaiseTicketRequest = RaiseTicketRequest {
                category,
                remark,
                image: read_optional(image.as_deref())?,
            };
            let response = desk.raise_ticket(request, actor).await?;
            info!(emp_id = %actor.emp_id, "Raise command completed");
            if json {
                return Ok(serde_json::to_string_pretty(&response)?);
            }
            Ok(response.message)
        }
    }
}
