// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidStatus(String::from("Closed"));
    assert_eq!(format!("{err}"), "Unknown ticket status: 'Closed'");

    let err: DomainError = DomainError::EmptyRemark;
    assert_eq!(format!("{err}"), "Remark cannot be empty");

    let err: DomainError = DomainError::InvalidCategory(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid category: test");

    let err: DomainError = DomainError::InvalidEmpId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid employee id: test");

    let err: DomainError = DomainError::InvalidTicketId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid ticket id: test");

    let err: DomainError = DomainError::InvalidAttachment {
        file_name: String::from("notes.txt"),
        reason: String::from("expected an image"),
    };
    assert_eq!(
        format!("{err}"),
        "Attachment 'notes.txt' rejected: expected an image"
    );

    let err: DomainError = DomainError::TimestampParseError {
        value: String::from("yesterday"),
    };
    assert_eq!(format!("{err}"), "Failed to parse timestamp 'yesterday'");
}
