// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use ticket_desk::CoreError;
use ticket_desk_backend::BackendError;
use ticket_desk_domain::{DomainError, TicketId, TicketStatus};

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The session record does not identify a user.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The user may not perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable explanation.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain, core and backend errors and represent
/// the contract callers program against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
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
    /// The backend could not be reached or reported failure.
    RemoteFailure {
        /// The backend's message, or a fixed fallback.
        message: String,
    },
    /// The session record does not identify a user.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor may not perform the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable explanation.
        message: String,
    },
    /// Another transition of the same ticket has not finished yet.
    TransitionInFlight {
        /// The ticket being updated.
        ticket_id: TicketId,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
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
            Self::RemoteFailure { message } => write!(f, "{message}"),
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { message, .. } => write!(f, "{message}"),
            Self::TransitionInFlight { ticket_id } => {
                write!(f, "An update of ticket {ticket_id} is already in progress")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { action, message } => Self::Unauthorized { action, message },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyRemark => ApiError::EmptyRemark,
        DomainError::InvalidStatus(label) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown ticket status '{label}'"),
        },
        DomainError::InvalidCategory(msg) => ApiError::InvalidInput {
            field: String::from("category"),
            message: msg,
        },
        DomainError::InvalidEmpId(msg) => ApiError::InvalidInput {
            field: String::from("emp_id"),
            message: msg,
        },
        DomainError::InvalidTicketId(msg) => ApiError::InvalidInput {
            field: String::from("ticket_id"),
            message: msg,
        },
        DomainError::InvalidAttachment { file_name, reason } => ApiError::InvalidInput {
            field: String::from("attachment"),
            message: format!("'{file_name}' rejected: {reason}"),
        },
        DomainError::TimestampParseError { value } => ApiError::InvalidInput {
            field: String::from("timestamp"),
            message: format!("Failed to parse timestamp '{value}'"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidTransition { from, to, allowed } => {
            ApiError::InvalidTransition { from, to, allowed }
        }
        CoreError::EmptyRemark => ApiError::EmptyRemark,
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a backend error into `RemoteFailure`.
///
/// The backend's own message is passed through when it sent one; otherwise
/// `fallback` is used.
#[must_use]
pub fn translate_backend_error(err: &BackendError, fallback: &str) -> ApiError {
    ApiError::RemoteFailure {
        message: err.backend_message().unwrap_or(fallback).to_string(),
    }
}
