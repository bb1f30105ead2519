// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveDateTime};
use ticket_desk_audit::UpdateLogEntry;
use ticket_desk_backend::InMemoryBackend;
use ticket_desk_domain::{
    ActingUser, Category, EmpId, Role, Ticket, TicketId, TicketStatus,
};

use crate::{TicketDesk, TransitionRequest};

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
        remark: String::from("Invoice screen freezes"),
        update_remark: None,
        date_time: create_test_time(9),
        update_date_time: None,
        image: None,
    }
}

pub fn create_test_entry(ticket_id: &str, id: &str, status: TicketStatus, hour: u32) -> UpdateLogEntry {
    UpdateLogEntry {
        entry_id: Some(id.to_string()),
        ticket_id: TicketId::new(ticket_id),
        status,
        remark: String::from("logged"),
        date_time: create_test_time(hour),
        update_by: EmpId::new("ERP001"),
        effort: None,
        image: None,
    }
}

pub fn create_test_owner() -> ActingUser {
    ActingUser::new(EmpId::new(OWNER_ID), Role::Employee(String::from("Employee")))
}

pub fn create_test_stranger() -> ActingUser {
    ActingUser::new(EmpId::new("EMP999"), Role::Employee(String::from("Employee")))
}

pub fn create_test_admin() -> ActingUser {
    ActingUser::new(EmpId::new("ADM001"), Role::Admin)
}

pub fn create_test_erp_admin() -> ActingUser {
    ActingUser::new(EmpId::new("ERP001"), Role::ErpAdmin)
}

pub fn create_test_l2() -> ActingUser {
    ActingUser::new(EmpId::new("L2001"), Role::L2)
}

pub fn create_test_desk(tickets: Vec<Ticket>) -> TicketDesk<InMemoryBackend> {
    TicketDesk::new(InMemoryBackend::with_tickets(tickets))
}

pub fn request(status: TicketStatus, remark: &str) -> TransitionRequest {
    TransitionRequest {
        status,
        remark: remark.to_string(),
        attachment: None,
    }
}
