// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading the signed-in user from a session file.
//!
//! The session file holds the same record the web console keeps after
//! login: `{"EmpId": ..., "Role": ..., "Name": ..., "Email": ...}`.

use std::path::Path;

use ticket_desk_api::{SessionRecord, authenticate_session};
use ticket_desk_domain::ActingUser;
use tracing::debug;

use crate::error::CliError;

/// Reads and authenticates the session stored at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a session record,
/// or lacks an employee id or role.
pub fn load_session(path: &Path) -> Result<ActingUser, CliError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let record: SessionRecord =
        SessionRecord::from_json(&json).map_err(|source| CliError::Session {
            path: path.to_path_buf(),
            source,
        })?;
    let actor: ActingUser = authenticate_session(record)?;
    debug!(emp_id = %actor.emp_id, role = %actor.role, "Session loaded");
    Ok(actor)
}
