// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use ticket_desk_api::TicketDesk;
use ticket_desk_backend::InMemoryBackend;
use ticket_desk_domain::{ActingUser, Category, EmpId, Role, Ticket, TicketId, TicketStatus};

pub const OWNER_ID: &str = "EMP001";

pub fn create_test_time(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn create_test_ticket(id: &str, category: Category, status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId::new(id),
        emp_id: EmpId::new(OWNER_ID),
        category,
        status,
        remark: String::from("<p>Printer jams on <b>every</b> page</p>"),
        update_remark: None,
        date_time: create_test_time(9),
        update_date_time: None,
        image: None,
    }
}

pub fn create_test_owner() -> ActingUser {
    ActingUser::new(EmpId::new(OWNER_ID), Role::Employee(String::from("Employee")))
}

pub fn create_test_admin() -> ActingUser {
    ActingUser::new(EmpId::new("ADM001"), Role::Admin)
}

pub fn create_test_erp_admin() -> ActingUser {
    ActingUser::new(EmpId::new("ERP001"), Role::ErpAdmin)
}

pub fn create_test_desk(tickets: Vec<Ticket>) -> TicketDesk<InMemoryBackend> {
    TicketDesk::new(InMemoryBackend::with_tickets(tickets))
}

/// Writes `contents` to a file in a directory unique to this test run.
pub fn create_test_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir: PathBuf = std::env::temp_dir().join(format!("ticket-desk-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path: PathBuf = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
