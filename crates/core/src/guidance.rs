// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing text that accompanies the update form.

use ticket_desk_domain::{ActingUser, Role, Ticket, TicketStatus};

use crate::policy::allowed_transitions;

const REOPENED_NOTICE: &str = "This ticket has been reopened by the user. You can now resolve it again after addressing the concerns.";
const UAT_OFFERED_NOTICE: &str = "L2 has offered UAT for this ticket. You can accept or reject it based on your testing requirements.";
const UAT_ACCEPTED_L2_NOTICE: &str =
    "User has accepted UAT. You can mark it as deployed once testing is complete.";
const UAT_ACCEPTED_ERPADMIN_NOTICE: &str = "User has accepted UAT. You can resolve the ticket, forward to L2, or offer UAT again if needed.";
const UAT_REJECTED_ERPADMIN_NOTICE: &str = "User has rejected UAT. You can resolve the ticket, forward to L2, or offer UAT again after addressing concerns.";

/// Returns the notice shown above the update form, if any.
///
/// No notice is returned when the user has nothing to choose from.
#[must_use]
pub fn workflow_notice(ticket: &Ticket, actor: &ActingUser) -> Option<&'static str> {
    if allowed_transitions(ticket, actor).is_empty() {
        return None;
    }

    match (&ticket.status, &actor.role) {
        (TicketStatus::Reopen, Role::Admin) => Some(REOPENED_NOTICE),
        (TicketStatus::OfferUat, _) if actor.owns(ticket) => Some(UAT_OFFERED_NOTICE),
        (TicketStatus::AcceptUat, Role::L2) => Some(UAT_ACCEPTED_L2_NOTICE),
        (TicketStatus::AcceptUat, Role::ErpAdmin) => Some(UAT_ACCEPTED_ERPADMIN_NOTICE),
        (TicketStatus::RejectUat, Role::ErpAdmin) => Some(UAT_REJECTED_ERPADMIN_NOTICE),
        _ => None,
    }
}

/// Returns the prompt for the remark field given the selected status.
#[must_use]
pub const fn remark_prompt(selected: &TicketStatus, current: &TicketStatus) -> &'static str {
    match (selected, current) {
        (TicketStatus::AcceptUat, _) => "Confirm UAT acceptance and provide any testing notes...",
        (TicketStatus::RejectUat, _) => {
            "Explain the reasons for UAT rejection and what needs to be addressed..."
        }
        (TicketStatus::DeployedUat, _) => "Confirm deployment and provide deployment details...",
        (TicketStatus::Resolved, TicketStatus::Reopen) => {
            "Provide details on how the reopened issue has been resolved..."
        }
        _ => "Enter your remark here...",
    }
}

/// Label of the submit action for the selected status.
#[must_use]
pub const fn submit_label(selected: &TicketStatus) -> &'static str {
    match selected {
        TicketStatus::AcceptUat => "Accept UAT",
        TicketStatus::RejectUat => "Reject UAT",
        TicketStatus::DeployedUat => "Mark as Deployed",
        _ => "Update Ticket",
    }
}

/// Message reported after a transition was applied.
#[must_use]
pub fn success_message(status: &TicketStatus) -> String {
    format!("Ticket {} successfully.", status.as_str().to_lowercase())
}
