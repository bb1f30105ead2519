// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ticket_status::TicketStatus;

/// Opaque ticket identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Creates a new ticket identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent to the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employee identifier, used both for ticket owners and for actors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmpId(String);

impl EmpId {
    /// Creates a new employee identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ticket category. Decides which role owns the ticket's workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Hardware,
    Software,
    /// ERP tickets, owned by `ERPADMIN`.
    Erp365,
    /// Any other category, kept as received.
    Other(String),
}

impl Category {
    /// Returns the wire label of the category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Erp365 => "ERP365",
            Self::Other(label) => label,
        }
    }

    /// Maps a wire label onto a category.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Hardware" => Self::Hardware,
            "Software" => Self::Software,
            "ERP365" => Self::Erp365,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for the categories handled by the `Admin` role.
    #[must_use]
    pub const fn is_it_support(&self) -> bool {
        matches!(self, Self::Hardware | Self::Software)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// Role of the person acting on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// IT administrator. Owns `Hardware` and `Software` tickets.
    Admin,
    /// ERP administrator. Owns `ERP365` tickets.
    ErpAdmin,
    /// Second-line support.
    L2,
    /// Any other role; treated as a plain employee.
    Employee(String),
}

impl Role {
    /// Returns the wire label of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::ErpAdmin => "ERPADMIN",
            Self::L2 => "L2",
            Self::Employee(label) => label,
        }
    }

    /// Maps a wire label onto a role.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Admin" => Self::Admin,
            "ERPADMIN" => Self::ErpAdmin,
            "L2" => Self::L2,
            other => Self::Employee(other.to_string()),
        }
    }

    /// Returns true for roles that handle tickets raised by others.
    #[must_use]
    pub const fn is_support_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::ErpAdmin | Self::L2)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Employee(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

/// The person viewing or acting on tickets.
///
/// Always passed explicitly; nothing in the workflow reads it from
/// ambient storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingUser {
    pub emp_id: EmpId,
    pub role: Role,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ActingUser {
    /// Creates an acting user without display details.
    #[must_use]
    pub const fn new(emp_id: EmpId, role: Role) -> Self {
        Self {
            emp_id,
            role,
            name: None,
            email: None,
        }
    }

    /// Returns true when this user raised the given ticket.
    #[must_use]
    pub fn owns(&self, ticket: &Ticket) -> bool {
        self.emp_id == ticket.emp_id
    }
}

/// A support ticket as last seen from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    /// Employee who raised the ticket.
    pub emp_id: EmpId,
    pub category: Category,
    pub status: TicketStatus,
    /// The initial complaint. May contain rich-text markup.
    pub remark: String,
    /// Remark attached to the most recent transition.
    pub update_remark: Option<String>,
    pub date_time: NaiveDateTime,
    pub update_date_time: Option<NaiveDateTime>,
    /// URL of the file attached when the ticket was raised.
    pub image: Option<String>,
}

impl Ticket {
    /// Records a completed transition on the local copy of the ticket.
    ///
    /// Only `status`, `update_remark` and `update_date_time` change.
    pub fn record_transition(&mut self, status: TicketStatus, remark: &str, at: NaiveDateTime) {
        self.status = status;
        self.update_remark = Some(remark.to_string());
        self.update_date_time = Some(at);
    }
}

/// A file uploaded alongside a ticket or a transition.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Creates a new attachment.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Returns true if the content type is an image type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type
            .to_ascii_lowercase()
            .strip_prefix("image/")
            .is_some_and(|subtype| !subtype.is_empty())
    }
}

// Attachment bodies can be large; keep them out of debug output.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Payload of a status transition write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub remark: String,
    pub update_by: EmpId,
}

/// A ticket about to be raised. Tickets always start `Open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub emp_id: EmpId,
    pub category: Category,
    pub remark: String,
    pub image: Option<Attachment>,
}

impl NewTicket {
    /// The status every new ticket is raised with.
    #[must_use]
    pub const fn initial_status(&self) -> TicketStatus {
        TicketStatus::Open
    }
}
