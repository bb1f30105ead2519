// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ticket_desk_domain::{Attachment, Category, TicketStatus};

/// A request to move a ticket to a new status, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCommand {
    /// The status requested.
    pub status: TicketStatus,
    /// The note accompanying the transition.
    pub remark: String,
    /// Optional image. Only carried by `Forward to L2`.
    pub attachment: Option<Attachment>,
}

impl TransitionCommand {
    /// Creates a transition command without an attachment.
    #[must_use]
    pub fn new(status: TicketStatus, remark: impl Into<String>) -> Self {
        Self {
            status,
            remark: remark.into(),
            attachment: None,
        }
    }

    /// Attaches an image to the command.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// A request to raise a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaiseCommand {
    pub category: Category,
    /// Problem description.
    pub remark: String,
    pub image: Option<Attachment>,
}
