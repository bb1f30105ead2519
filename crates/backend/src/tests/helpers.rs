// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveDateTime};
use ticket_desk_domain::{Category, EmpId, StatusUpdate, Ticket, TicketId, TicketStatus};

pub fn create_test_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

pub fn create_test_ticket(id: &str) -> Ticket {
    Ticket {
        id: TicketId::new(id),
        emp_id: EmpId::new("EMP001"),
        category: Category::Erp365,
        status: TicketStatus::Open,
        remark: String::from("<p>Invoice screen freezes</p>"),
        update_remark: None,
        date_time: create_test_time(),
        update_date_time: None,
        image: None,
    }
}

pub fn create_test_update(id: &str, status: TicketStatus) -> StatusUpdate {
    StatusUpdate {
        ticket_id: TicketId::new(id),
        status,
        remark: String::from("Looked into it"),
        update_by: EmpId::new("ERP001"),
    }
}
