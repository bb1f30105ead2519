// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ticket_desk_domain::{DomainError, TicketStatus};

/// Errors that can occur while planning a ticket write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested status is not offered to the acting user.
    InvalidTransition {
        /// The ticket's current status.
        from: TicketStatus,
        /// The requested status.
        to: TicketStatus,
        /// What the acting user may choose from.
        allowed: Vec<TicketStatus>,
    },
    /// The remark is blank.
    EmptyRemark,
    /// Any other domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, to, allowed } => {
                if allowed.is_empty() {
                    write!(
                        f,
                        "Cannot move ticket from '{from}' to '{to}': no updates are available"
                    )
                } else {
                    let labels: Vec<&str> = allowed.iter().map(TicketStatus::as_str).collect();
                    write!(
                        f,
                        "Cannot move ticket from '{from}' to '{to}': allowed statuses are {}",
                        labels.join(", ")
                    )
                }
            }
            Self::EmptyRemark => write!(f, "Please provide a remark"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyRemark => Self::EmptyRemark,
            other => Self::DomainViolation(other),
        }
    }
}
