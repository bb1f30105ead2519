// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Attachment, NewTicket};

/// Validates a transition or ticket remark.
///
/// Remarks may carry rich-text markup; only surrounding whitespace is
/// considered empty.
///
/// # Errors
///
/// Returns `DomainError::EmptyRemark` if the remark is blank.
pub fn validate_remark(remark: &str) -> Result<(), DomainError> {
    if remark.trim().is_empty() {
        return Err(DomainError::EmptyRemark);
    }
    Ok(())
}

/// Validates an uploaded file.
///
/// # Errors
///
/// Returns `DomainError::InvalidAttachment` if the file is empty or is not
/// an image.
pub fn validate_attachment(attachment: &Attachment) -> Result<(), DomainError> {
    if attachment.bytes.is_empty() {
        return Err(DomainError::InvalidAttachment {
            file_name: attachment.file_name.clone(),
            reason: String::from("file is empty"),
        });
    }

    if !attachment.is_image() {
        return Err(DomainError::InvalidAttachment {
            file_name: attachment.file_name.clone(),
            reason: format!("expected an image, got '{}'", attachment.content_type),
        });
    }

    Ok(())
}

/// Validates a ticket before it is raised.
///
/// # Errors
///
/// Returns an error if:
/// - The employee id is blank
/// - The category is blank
/// - The remark is blank
/// - The image is not an acceptable attachment
pub fn validate_new_ticket(ticket: &NewTicket) -> Result<(), DomainError> {
    if ticket.emp_id.as_str().trim().is_empty() {
        return Err(DomainError::InvalidEmpId(String::from(
            "Employee id cannot be empty",
        )));
    }

    if ticket.category.as_str().trim().is_empty() {
        return Err(DomainError::InvalidCategory(String::from(
            "Category cannot be empty",
        )));
    }

    validate_remark(&ticket.remark)?;

    if let Some(image) = &ticket.image {
        validate_attachment(image)?;
    }

    Ok(())
}
