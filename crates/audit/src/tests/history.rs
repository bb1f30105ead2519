// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{UpdateHistory, UpdateLogEntry};
use ticket_desk_domain::{EmpId, StatusUpdate, TicketId, TicketStatus, parse_timestamp};

fn create_entry(status: TicketStatus, remark: &str, at: &str) -> UpdateLogEntry {
    UpdateLogEntry {
        entry_id: None,
        ticket_id: TicketId::new("7"),
        status,
        remark: String::from(remark),
        date_time: parse_timestamp(at).unwrap(),
        update_by: EmpId::new("L2-01"),
        effort: None,
        image: None,
    }
}

#[test]
fn test_from_update_copies_write_fields() {
    let update = StatusUpdate {
        ticket_id: TicketId::new("7"),
        status: TicketStatus::OfferUat,
        remark: String::from("Patch ready for testing"),
        update_by: EmpId::new("L2-01"),
    };
    let at = parse_timestamp("2025-02-01 10:00:00").unwrap();

    let entry = UpdateLogEntry::from_update(&update, at);

    assert_eq!(entry.entry_id, None);
    assert_eq!(entry.ticket_id, update.ticket_id);
    assert_eq!(entry.status, TicketStatus::OfferUat);
    assert_eq!(entry.remark, "Patch ready for testing");
    assert_eq!(entry.date_time, at);
    assert_eq!(entry.update_by, update.update_by);
    assert_eq!(entry.image, None);
}

#[test]
fn test_from_entries_sorts_chronologically() {
    let history = UpdateHistory::from_entries(vec![
        create_entry(TicketStatus::Resolved, "third", "2025-02-03 08:00:00"),
        create_entry(TicketStatus::ForwardToL2, "first", "2025-02-01 08:00:00"),
        create_entry(TicketStatus::OfferUat, "second", "2025-02-02 08:00:00"),
    ]);

    let remarks: Vec<&str> = history.iter().map(|e| e.remark.as_str()).collect();
    assert_eq!(remarks, vec!["first", "second", "third"]);
    assert_eq!(history.latest().unwrap().status, TicketStatus::Resolved);
}

#[test]
fn test_from_entries_keeps_backend_order_for_equal_timestamps() {
    let history = UpdateHistory::from_entries(vec![
        create_entry(TicketStatus::AcceptUat, "a", "2025-02-01 08:00:00"),
        create_entry(TicketStatus::DeployedUat, "b", "2025-02-01 08:00:00"),
    ]);

    let remarks: Vec<&str> = history.iter().map(|e| e.remark.as_str()).collect();
    assert_eq!(remarks, vec!["a", "b"]);
}

#[test]
fn test_append_inserts_after_equal_or_older_entries() {
    let mut history = UpdateHistory::from_entries(vec![
        create_entry(TicketStatus::ForwardToL2, "first", "2025-02-01 08:00:00"),
        create_entry(TicketStatus::Resolved, "last", "2025-02-05 08:00:00"),
    ]);

    history.append(create_entry(
        TicketStatus::OfferUat,
        "middle",
        "2025-02-03 08:00:00",
    ));
    history.append(create_entry(
        TicketStatus::Reopen,
        "newest",
        "2025-02-05 08:00:00",
    ));

    let remarks: Vec<&str> = (&history).into_iter().map(|e| e.remark.as_str()).collect();
    assert_eq!(remarks, vec!["first", "middle", "last", "newest"]);
    assert_eq!(history.len(), 4);
}

#[test]
fn test_empty_history() {
    let history = UpdateHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.latest(), None);
    assert_eq!(history.entries().len(), 0);
}
