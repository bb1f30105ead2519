// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{RaiseCommand, TransitionCommand};
use crate::error::CoreError;
use crate::policy::{allowed_transitions, is_transition_allowed};
use ticket_desk_domain::{
    ActingUser, Attachment, NewTicket, StatusUpdate, Ticket, TicketStatus, validate_attachment,
    validate_new_ticket, validate_remark,
};

/// The single backend write a validated transition turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePlan {
    /// A plain status update.
    Standard(StatusUpdate),
    /// `Forward to L2`, which goes through the sub-ticket endpoint and may
    /// carry an image.
    ForwardToL2 {
        update: StatusUpdate,
        attachment: Option<Attachment>,
    },
}

impl WritePlan {
    /// Returns the status update carried by the plan.
    #[must_use]
    pub const fn update(&self) -> &StatusUpdate {
        match self {
            Self::Standard(update) | Self::ForwardToL2 { update, .. } => update,
        }
    }
}

/// Validates a transition command against the policy and plans the write.
///
/// Checks run in a fixed order so the cheapest, most specific failure is
/// reported: the transition must be offered, then the remark must be
/// present, then any attachment must be an image. Nothing here performs
/// I/O.
///
/// # Arguments
///
/// * `ticket` - The ticket as currently displayed
/// * `command` - The requested transition
/// * `actor` - The acting user
///
/// # Errors
///
/// Returns an error if:
/// - The status is not offered to the actor (`InvalidTransition`)
/// - The remark is blank (`EmptyRemark`)
/// - The attachment is not an image (`DomainViolation`)
pub fn plan_transition(
    ticket: &Ticket,
    command: TransitionCommand,
    actor: &ActingUser,
) -> Result<WritePlan, CoreError> {
    if !is_transition_allowed(ticket, actor, &command.status) {
        return Err(CoreError::InvalidTransition {
            from: ticket.status.clone(),
            to: command.status,
            allowed: allowed_transitions(ticket, actor).into_iter().collect(),
        });
    }

    validate_remark(&command.remark)?;

    let update: StatusUpdate = StatusUpdate {
        ticket_id: ticket.id.clone(),
        status: command.status,
        remark: command.remark,
        update_by: actor.emp_id.clone(),
    };

    if update.status != TicketStatus::ForwardToL2 {
        return Ok(WritePlan::Standard(update));
    }

    if let Some(attachment) = &command.attachment {
        validate_attachment(attachment)?;
    }

    Ok(WritePlan::ForwardToL2 {
        update,
        attachment: command.attachment,
    })
}

/// Validates a raise command and builds the ticket to submit.
///
/// # Errors
///
/// Returns an error if the category or remark is blank or the image is not
/// acceptable.
pub fn plan_raise(command: RaiseCommand, actor: &ActingUser) -> Result<NewTicket, CoreError> {
    let new_ticket: NewTicket = NewTicket {
        emp_id: actor.emp_id.clone(),
        category: command.category,
        remark: command.remark,
        image: command.image,
    };
    validate_new_ticket(&new_ticket)?;
    Ok(new_ticket)
}
