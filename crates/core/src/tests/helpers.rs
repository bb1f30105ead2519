// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveDateTime};
use ticket_desk_domain::{ActingUser, Category, EmpId, Role, Ticket, TicketId, TicketStatus};

pub const OWNER_ID: &str = "EMP001";

pub fn create_test_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn create_test_ticket(category: Category, status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId::new("42"),
        emp_id: EmpId::new(OWNER_ID),
        category,
        status,
        remark: String::from("Laptop will not boot"),
        update_remark: None,
        date_time: create_test_time(9, 0),
        update_date_time: None,
        image: None,
    }
}

pub fn create_test_owner() -> ActingUser {
    ActingUser::new(EmpId::new(OWNER_ID), Role::Employee(String::from("Employee")))
}

pub fn create_test_user(emp_id: &str, role: Role) -> ActingUser {
    ActingUser::new(EmpId::new(emp_id), role)
}

pub fn create_test_admin() -> ActingUser {
    create_test_user("ADM001", Role::Admin)
}

pub fn create_test_erp_admin() -> ActingUser {
    create_test_user("ERP001", Role::ErpAdmin)
}

pub fn create_test_l2() -> ActingUser {
    create_test_user("L2001", Role::L2)
}
