// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use chrono::Utc;

use crate::tests::helpers::{
    OWNER_ID, create_test_admin, create_test_desk, create_test_entry, create_test_erp_admin,
    create_test_l2, create_test_owner, create_test_ticket, request,
};
use crate::{ApiError, TransitionRequest};
use ticket_desk::TicketState;
use ticket_desk_audit::UpdateHistory;
use ticket_desk_backend::BackendCall;
use ticket_desk_domain::{Attachment, Category, TicketId, TicketStatus};

fn loaded(category: Category, status: TicketStatus) -> TicketState {
    TicketState::new(create_test_ticket("42", category, status), UpdateHistory::new())
}

#[tokio::test]
async fn test_disallowed_transition_makes_no_calls() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);

    let err = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::ForwardToL2, "escalate"),
            &create_test_admin(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::InvalidTransition {
            from: TicketStatus::Open,
            to: TicketStatus::ForwardToL2,
            allowed: vec![TicketStatus::Resolved],
        }
    );
    assert_eq!(desk.backend().call_count(), 0);
    assert_eq!(state.ticket.status, TicketStatus::Open);
}

#[tokio::test]
async fn test_empty_remark_makes_no_calls() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);

    let err = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, ""),
            &create_test_admin(),
        )
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::EmptyRemark);
    assert_eq!(desk.backend().call_count(), 0);
}

#[tokio::test]
async fn test_standard_transition_writes_once_then_refreshes_log() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    let admin = create_test_admin();

    let response = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "Replaced the SSD"),
            &admin,
        )
        .await
        .unwrap();

    let calls = desk.backend().calls();
    assert_eq!(calls.len(), 2);
    let BackendCall::UpdateStatus(sent) = &calls[0] else {
        panic!("expected a standard status write first");
    };
    assert_eq!(sent.status, TicketStatus::Resolved);
    assert_eq!(sent.update_by.as_str(), "ADM001");
    assert_eq!(calls[1], BackendCall::FetchUpdates(TicketId::new("42")));

    assert_eq!(response.message, "Ticket resolved successfully.");
    assert_eq!(response.entry.status, TicketStatus::Resolved);
    assert_eq!(state.ticket.status, TicketStatus::Resolved);
    assert_eq!(state.ticket.update_remark.as_deref(), Some("Replaced the SSD"));
    assert!(state.ticket.update_date_time.is_some());
    // History now mirrors the backend's log.
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history.latest().unwrap().entry_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_forward_to_l2_uses_subticket_endpoint_with_image() {
    let mut state = loaded(Category::Erp365, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    let image = Attachment::new("error.png", "image/png", vec![1, 2, 3]);

    desk.apply_transition(
        &mut state,
        TransitionRequest {
            status: TicketStatus::ForwardToL2,
            remark: String::from("Needs a developer"),
            attachment: Some(image.clone()),
        },
        &create_test_erp_admin(),
    )
    .await
    .unwrap();

    let writes: Vec<BackendCall> = desk
        .backend()
        .calls()
        .into_iter()
        .filter(BackendCall::is_write)
        .collect();
    assert_eq!(writes.len(), 1);
    let BackendCall::ForwardToL2 { update, attachment } = &writes[0] else {
        panic!("expected the sub-ticket endpoint");
    };
    assert_eq!(update.status, TicketStatus::ForwardToL2);
    assert_eq!(attachment.as_ref(), Some(&image));
    assert_eq!(state.ticket.status, TicketStatus::ForwardToL2);
}

#[tokio::test]
async fn test_attachment_on_other_status_is_not_sent() {
    let mut state = loaded(Category::Erp365, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);

    desk.apply_transition(
        &mut state,
        TransitionRequest {
            status: TicketStatus::Resolved,
            remark: String::from("Fixed"),
            attachment: Some(Attachment::new("error.png", "image/png", vec![1])),
        },
        &create_test_erp_admin(),
    )
    .await
    .unwrap();

    assert!(matches!(
        desk.backend().calls()[0],
        BackendCall::UpdateStatus(_)
    ));
}

#[tokio::test]
async fn test_remote_failure_leaves_state_unchanged() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    desk.backend()
        .fail_next_write(Some(String::from("Ticket is locked")));
    let before = state.clone();

    let err = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "Replaced the SSD"),
            &create_test_admin(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::RemoteFailure {
            message: String::from("Ticket is locked"),
        }
    );
    assert_eq!(state, before);
    // No log refresh after a failed write.
    assert_eq!(desk.backend().call_count(), 1);
}

#[tokio::test]
async fn test_remote_failure_without_message_uses_fallback() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    desk.backend().fail_next_write(None);

    let err = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "Replaced the SSD"),
            &create_test_admin(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to update the ticket.");
}

#[tokio::test]
async fn test_failed_refresh_keeps_local_entry() {
    let mut state = TicketState::new(
        create_test_ticket("42", Category::Hardware, TicketStatus::Open),
        UpdateHistory::from_entries(vec![create_test_entry("42", "1", TicketStatus::Open, 9)]),
    );
    let desk = create_test_desk(vec![state.ticket.clone()]);
    desk.backend().fail_update_fetches(true);

    let response = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "Replaced the SSD"),
            &create_test_admin(),
        )
        .await
        .unwrap();

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.latest(), Some(&response.entry));
    assert_eq!(response.entry.entry_id, None);
}

#[tokio::test]
async fn test_committed_entry_is_stamped_in_utc() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    desk.backend().fail_update_fetches(true);

    let before = Utc::now().naive_utc();
    let response = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "Replaced the SSD"),
            &create_test_admin(),
        )
        .await
        .unwrap();
    let after = Utc::now().naive_utc();

    assert!(response.entry.date_time >= before && response.entry.date_time <= after);
    assert_eq!(state.ticket.update_date_time, Some(response.entry.date_time));
}

#[tokio::test]
async fn test_owner_accepts_uat_then_l2_deploys() {
    let mut owner_state = loaded(Category::Erp365, TicketStatus::OfferUat);
    let desk = create_test_desk(vec![owner_state.ticket.clone()]);

    desk.apply_transition(
        &mut owner_state,
        request(TicketStatus::AcceptUat, "Works in UAT"),
        &create_test_owner(),
    )
    .await
    .unwrap();

    let l2 = create_test_l2();
    let mut l2_state = desk.load_ticket(&TicketId::new("42"), &l2).await.unwrap();
    assert!(l2_state.allowed_transitions(&l2).contains(&TicketStatus::DeployedUat));

    let response = desk
        .apply_transition(
            &mut l2_state,
            request(TicketStatus::DeployedUat, "Deployed to production"),
            &l2,
        )
        .await
        .unwrap();

    assert_eq!(response.message, "Ticket deployed uat successfully.");
    assert_eq!(l2_state.history.len(), 2);
    assert_eq!(
        desk.backend()
            .ticket(&TicketId::new("42"))
            .unwrap()
            .status,
        TicketStatus::DeployedUat
    );
    assert_eq!(owner_state.ticket.emp_id.as_str(), OWNER_ID);
}

#[tokio::test]
async fn test_second_transition_in_flight_is_rejected() {
    let state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = Arc::new(create_test_desk(vec![state.ticket.clone()]));
    desk.backend().pause_writes();

    let first = {
        let desk = Arc::clone(&desk);
        let mut state = state.clone();
        tokio::spawn(async move {
            desk.apply_transition(
                &mut state,
                request(TicketStatus::Resolved, "first"),
                &create_test_admin(),
            )
            .await
        })
    };
    while desk.backend().write_count() == 0 {
        tokio::task::yield_now().await;
    }

    let mut second_state = state.clone();
    let err = desk
        .apply_transition(
            &mut second_state,
            request(TicketStatus::Resolved, "second"),
            &create_test_admin(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::TransitionInFlight {
            ticket_id: TicketId::new("42"),
        }
    );
    assert_eq!(second_state, state);

    desk.backend().resume_writes();
    first.await.unwrap().unwrap();
    assert_eq!(desk.backend().write_count(), 1);
}

#[tokio::test]
async fn test_in_flight_marker_is_released_after_failure() {
    let mut state = loaded(Category::Hardware, TicketStatus::Open);
    let desk = create_test_desk(vec![state.ticket.clone()]);
    desk.backend().fail_next_write(None);

    let _ = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "first try"),
            &create_test_admin(),
        )
        .await;
    let retried = desk
        .apply_transition(
            &mut state,
            request(TicketStatus::Resolved, "second try"),
            &create_test_admin(),
        )
        .await;

    assert!(retried.is_ok());
}
