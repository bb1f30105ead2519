// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket status labels.
//!
//! Status values travel over the wire as their human-readable labels
//! (`"Offer UAT"`, `"Forward to L2"`, ...). Labels the workflow does not
//! know about are kept verbatim so a ticket carrying one still loads.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// The workflow state of a support ticket.
///
/// Variant order is the order in which transitions are presented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    /// Freshly raised. Every ticket starts here.
    Open,
    /// Reopened by the owner after a resolution.
    Reopen,
    /// Marked resolved by the responsible role.
    Resolved,
    /// Second-line support offered a fix for user acceptance testing.
    OfferUat,
    /// The owner accepted the offered fix.
    AcceptUat,
    /// The owner rejected the offered fix.
    RejectUat,
    /// The accepted fix has been deployed.
    DeployedUat,
    /// Handed to the original equipment manufacturer.
    AssignToOem,
    /// Escalated to second-line support.
    ForwardToL2,
    /// A label outside the known workflow, preserved as received.
    Other(String),
}

impl TicketStatus {
    /// Every status the workflow itself can produce.
    pub const KNOWN: [Self; 9] = [
        Self::Open,
        Self::Reopen,
        Self::Resolved,
        Self::OfferUat,
        Self::AcceptUat,
        Self::RejectUat,
        Self::DeployedUat,
        Self::AssignToOem,
        Self::ForwardToL2,
    ];

    /// Returns the wire label of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "Open",
            Self::Reopen => "Reopen",
            Self::Resolved => "Resolved",
            Self::OfferUat => "Offer UAT",
            Self::AcceptUat => "Accept UAT",
            Self::RejectUat => "Reject UAT",
            Self::DeployedUat => "Deployed UAT",
            Self::AssignToOem => "Assign To OEM",
            Self::ForwardToL2 => "Forward to L2",
            Self::Other(label) => label,
        }
    }

    /// Maps a wire label onto a status, keeping unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str() == label)
            .unwrap_or_else(|| Self::Other(label.to_string()))
    }

    /// Returns true when the ticket is waiting on its responsible role
    /// (`Open` or `Reopen`).
    #[must_use]
    pub const fn is_awaiting_action(&self) -> bool {
        matches!(self, Self::Open | Self::Reopen)
    }
}

/// Strict parsing: only labels of the known workflow are accepted.
///
/// Use [`TicketStatus::from_label`] for data coming back from the backend.
impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TicketStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
