// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session authentication and view authorization.

use serde::Deserialize;
use thiserror::Error;
use ticket_desk_domain::{ActingUser, EmpId, Role, Ticket};

use crate::error::AuthError;

/// Message shown when a user opens a ticket they may not see.
pub const VIEW_DENIED_MESSAGE: &str = "You are not authorized to view this ticket.";

/// The stored session of a signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "EmpId", default)]
    pub emp_id: Option<String>,
    #[serde(rename = "Role", default)]
    pub role: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

/// Why a session record could not be read.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("session record has no {0}")]
    MissingField(&'static str),
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        Self::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SessionError> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(SessionError::MissingField(field))
}

impl SessionRecord {
    /// Parses a session record from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Turns a stored session into the acting user.
///
/// A session is only accepted when it carries both an employee id and a
/// role.
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if either is missing or blank.
pub fn authenticate_session(record: SessionRecord) -> Result<ActingUser, AuthError> {
    let emp_id: String = required(record.emp_id, "EmpId")?;
    let role: String = required(record.role, "Role")?;

    Ok(ActingUser {
        emp_id: EmpId::new(emp_id),
        role: Role::from_label(&role),
        name: record.name,
        email: record.email,
    })
}

/// Authorization service for ticket visibility.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Returns true when the actor may see every ticket.
    #[must_use]
    pub const fn can_view_all(actor: &ActingUser) -> bool {
        actor.role.is_support_staff()
    }

    /// Checks whether an actor may view a ticket.
    ///
    /// Support staff see every ticket; everyone else only their own.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` otherwise.
    pub fn authorize_view_ticket(actor: &ActingUser, ticket: &Ticket) -> Result<(), AuthError> {
        if Self::can_view_all(actor) || actor.owns(ticket) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("view_ticket"),
            message: String::from(VIEW_DENIED_MESSAGE),
        })
    }

    /// Keeps only the tickets the actor may view.
    #[must_use]
    pub fn visible_tickets(actor: &ActingUser, tickets: Vec<Ticket>) -> Vec<Ticket> {
        if Self::can_view_all(actor) {
            return tickets;
        }
        tickets
            .into_iter()
            .filter(|ticket| actor.owns(ticket))
            .collect()
    }
}
