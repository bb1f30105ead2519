// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;
use ticket_desk_api::{ApiError, AuthError, SessionError};
use ticket_desk_backend::BackendError;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session file {}: {source}", .path.display())]
    Session {
        path: PathBuf,
        #[source]
        source: SessionError,
    },
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("could not render output: {0}")]
    Render(#[from] serde_json::Error),
}
