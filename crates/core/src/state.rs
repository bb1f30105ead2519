// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use ticket_desk_audit::{UpdateHistory, UpdateLogEntry};
use ticket_desk_domain::{ActingUser, StatusUpdate, Ticket, TicketStatus};

use crate::policy::allowed_transitions;

/// A ticket together with its update history, as displayed to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketState {
    pub ticket: Ticket,
    pub history: UpdateHistory,
}

impl TicketState {
    /// Creates a new ticket state.
    #[must_use]
    pub const fn new(ticket: Ticket, history: UpdateHistory) -> Self {
        Self { ticket, history }
    }

    /// The transitions `actor` may choose from right now.
    #[must_use]
    pub fn allowed_transitions(&self, actor: &ActingUser) -> BTreeSet<TicketStatus> {
        allowed_transitions(&self.ticket, actor)
    }

    /// Records a write the backend has accepted.
    ///
    /// Updates the ticket's transition fields and appends the matching log
    /// entry. Must only be called after the write succeeded.
    pub fn commit(&mut self, update: &StatusUpdate, at: NaiveDateTime) -> UpdateLogEntry {
        self.ticket
            .record_transition(update.status.clone(), &update.remark, at);
        let entry: UpdateLogEntry = UpdateLogEntry::from_update(update, at);
        self.history.append(entry.clone());
        entry
    }

    /// Replaces the history with a freshly fetched one.
    pub fn replace_history(&mut self, history: UpdateHistory) {
        self.history = history;
    }
}
