// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A status label is not part of the workflow.
    InvalidStatus(String),
    /// The remark is empty after trimming.
    EmptyRemark,
    /// The category is empty.
    InvalidCategory(String),
    /// An employee identifier is empty.
    InvalidEmpId(String),
    /// A ticket identifier is empty.
    InvalidTicketId(String),
    /// An uploaded file is not acceptable.
    InvalidAttachment {
        /// The attachment's file name.
        file_name: String,
        /// Why the attachment was rejected.
        reason: String,
    },
    /// A timestamp string could not be parsed.
    TimestampParseError {
        /// The invalid timestamp string.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(label) => write!(f, "Unknown ticket status: '{label}'"),
            Self::EmptyRemark => write!(f, "Remark cannot be empty"),
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidEmpId(msg) => write!(f, "Invalid employee id: {msg}"),
            Self::InvalidTicketId(msg) => write!(f, "Invalid ticket id: {msg}"),
            Self::InvalidAttachment { file_name, reason } => {
                write!(f, "Attachment '{file_name}' rejected: {reason}")
            }
            Self::TimestampParseError { value } => {
                write!(f, "Failed to parse timestamp '{value}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
