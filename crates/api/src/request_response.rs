// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use std::collections::BTreeSet;

use serde::Serialize;
use ticket_desk_audit::{UpdateHistory, UpdateLogEntry};
use ticket_desk_domain::{Attachment, Category, Ticket, TicketStatus};

/// Whether an action is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    Allowed,
    Denied,
}

impl Capability {
    /// Returns true when the action is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl From<bool> for Capability {
    fn from(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }
}

/// What a user may do with one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketCapabilities {
    /// Any transition is offered.
    pub can_update: Capability,
    /// `Forward to L2` is offered, which is the only write taking an image.
    pub can_attach_image: Capability,
    /// The ticket has an attached file.
    pub can_view_attachment: Capability,
}

/// API request to move a ticket to a new status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub status: TicketStatus,
    pub remark: String,
    /// Only sent with `Forward to L2`.
    pub attachment: Option<Attachment>,
}

/// API response for a successful transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResponse {
    /// The log entry the transition produced.
    pub entry: UpdateLogEntry,
    /// A success message.
    pub message: String,
    /// What the backend said, if anything.
    pub backend_message: Option<String>,
}

/// API request to raise a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaiseTicketRequest {
    pub category: Category,
    pub remark: String,
    pub image: Option<Attachment>,
}

/// API response for a successfully raised ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaiseTicketResponse {
    /// A success message.
    pub message: String,
}

/// Everything the detail view shows for one ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    pub ticket: Ticket,
    pub history: UpdateHistory,
    /// Transitions offered to the viewer.
    pub allowed: BTreeSet<TicketStatus>,
    pub capabilities: TicketCapabilities,
    /// Workflow notice shown above the update form.
    pub notice: Option<String>,
}
