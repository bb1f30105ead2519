// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_admin, create_test_erp_admin, create_test_owner, create_test_ticket,
};
use crate::{Capability, build_ticket_view, compute_ticket_capabilities};
use ticket_desk::TicketState;
use ticket_desk_audit::UpdateHistory;
use ticket_desk_domain::{Category, TicketStatus};

#[test]
fn test_erp_admin_may_attach_on_open_erp_ticket() {
    let ticket = create_test_ticket("42", Category::Erp365, TicketStatus::Open);

    let caps = compute_ticket_capabilities(&ticket, &create_test_erp_admin());

    assert_eq!(caps.can_update, Capability::Allowed);
    assert_eq!(caps.can_attach_image, Capability::Allowed);
    assert_eq!(caps.can_view_attachment, Capability::Denied);
}

#[test]
fn test_admin_may_update_but_not_attach() {
    let ticket = create_test_ticket("42", Category::Hardware, TicketStatus::Open);

    let caps = compute_ticket_capabilities(&ticket, &create_test_admin());

    assert!(caps.can_update.is_allowed());
    assert!(!caps.can_attach_image.is_allowed());
}

#[test]
fn test_owner_has_no_update_on_open_ticket() {
    let mut ticket = create_test_ticket("42", Category::Hardware, TicketStatus::Open);
    ticket.image = Some(String::from("https://example.test/a.png"));

    let caps = compute_ticket_capabilities(&ticket, &create_test_owner());

    assert_eq!(caps.can_update, Capability::Denied);
    assert_eq!(caps.can_view_attachment, Capability::Allowed);
}

#[test]
fn test_ticket_view_carries_notice_and_options() {
    let state = TicketState::new(
        create_test_ticket("42", Category::Erp365, TicketStatus::OfferUat),
        UpdateHistory::new(),
    );

    let view = build_ticket_view(&state, &create_test_owner());

    assert_eq!(
        view.allowed.into_iter().collect::<Vec<_>>(),
        vec![TicketStatus::AcceptUat, TicketStatus::RejectUat]
    );
    assert!(view.notice.unwrap().starts_with("L2 has offered UAT"));
}
