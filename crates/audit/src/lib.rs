// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ticket_desk_domain::{EmpId, StatusUpdate, TicketId, TicketStatus};

#[cfg(test)]
mod tests;

/// One entry in a ticket's update history.
///
/// Every successful status transition produces exactly one entry. Entries
/// are immutable once recorded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLogEntry {
    /// Backend identifier. `None` for entries built locally that the
    /// backend has not echoed back yet.
    pub entry_id: Option<String>,
    /// The ticket this entry belongs to.
    pub ticket_id: TicketId,
    /// The status the ticket moved to.
    pub status: TicketStatus,
    /// The note accompanying the transition.
    pub remark: String,
    /// When the transition happened.
    pub date_time: NaiveDateTime,
    /// Who performed the transition.
    pub update_by: EmpId,
    /// Optional effort note.
    pub effort: Option<String>,
    /// Optional URL of a file attached to the transition.
    pub image: Option<String>,
}

impl UpdateLogEntry {
    /// Builds the entry a successful status write will produce.
    ///
    /// # Arguments
    ///
    /// * `update` - The write that was accepted
    /// * `at` - When it was accepted
    #[must_use]
    pub fn from_update(update: &StatusUpdate, at: NaiveDateTime) -> Self {
        Self {
            entry_id: None,
            ticket_id: update.ticket_id.clone(),
            status: update.status.clone(),
            remark: update.remark.clone(),
            date_time: at,
            update_by: update.update_by.clone(),
            effort: None,
            image: None,
        }
    }
}

/// The update history of a single ticket, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateHistory {
    entries: Vec<UpdateLogEntry>,
}

impl UpdateHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a history from entries in any order.
    ///
    /// The sort is stable, so entries sharing a timestamp keep the order
    /// the backend returned them in.
    #[must_use]
    pub fn from_entries(mut entries: Vec<UpdateLogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.date_time);
        Self { entries }
    }

    /// Appends an entry, keeping chronological order.
    pub fn append(&mut self, entry: UpdateLogEntry) {
        let position: usize = self
            .entries
            .partition_point(|existing| existing.date_time <= entry.date_time);
        self.entries.insert(position, entry);
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&UpdateLogEntry> {
        self.entries.last()
    }

    /// Returns the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[UpdateLogEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, UpdateLogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a UpdateHistory {
    type Item = &'a UpdateLogEntry;
    type IntoIter = std::slice::Iter<'a, UpdateLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
