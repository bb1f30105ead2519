// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while talking to the support backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be sent or the response could not be read.
    #[error("Request to the support backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success HTTP status.
    #[error(
        "Support backend answered with HTTP {status}: {}",
        .message.as_deref().unwrap_or("no details")
    )]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// The backend reported `"success": false`.
    #[error(
        "Support backend rejected the request: {}",
        .message.as_deref().unwrap_or("no reason given")
    )]
    Rejected { message: Option<String> },
    /// The response body did not have the expected shape.
    #[error("Could not decode support backend response: {0}")]
    Decode(String),
    /// An endpoint URL could not be built.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl BackendError {
    /// The message the backend itself supplied, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidUrl(_) => None,
        }
    }
}
