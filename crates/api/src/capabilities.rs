// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for the ticket detail view.
//!
//! Capabilities expose what a user may do with a ticket without leaking
//! policy internals. They are advisory only; `apply_transition` checks the
//! policy again.

use ticket_desk::guidance::workflow_notice;
use ticket_desk::{TicketState, allowed_transitions};
use ticket_desk_domain::{ActingUser, Ticket, TicketStatus};

use crate::request_response::{Capability, TicketCapabilities, TicketView};

/// Computes what `actor` may do with `ticket`.
#[must_use]
pub fn compute_ticket_capabilities(ticket: &Ticket, actor: &ActingUser) -> TicketCapabilities {
    let allowed = allowed_transitions(ticket, actor);

    TicketCapabilities {
        can_update: Capability::from(!allowed.is_empty()),
        can_attach_image: Capability::from(allowed.contains(&TicketStatus::ForwardToL2)),
        can_view_attachment: Capability::from(ticket.image.is_some()),
    }
}

/// Builds the detail view of a loaded ticket for `actor`.
#[must_use]
pub fn build_ticket_view(state: &TicketState, actor: &ActingUser) -> TicketView {
    TicketView {
        ticket: state.ticket.clone(),
        history: state.history.clone(),
        allowed: state.allowed_transitions(actor),
        capabilities: compute_ticket_capabilities(&state.ticket, actor),
        notice: workflow_notice(&state.ticket, actor).map(str::to_string),
    }
}
