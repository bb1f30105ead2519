// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;

use ticket_desk_domain::Attachment;

use crate::error::CliError;

/// Guesses a content type from a file extension.
#[must_use]
pub fn content_type_for(path: &Path) -> &'static str {
    let extension: String = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Reads a file to upload.
///
/// Whether the file is acceptable is decided by the workflow, not here.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let bytes: Vec<u8> = std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name: String = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("upload"));

    Ok(Attachment::new(file_name, content_type_for(path), bytes))
}
