// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service layer for the Ticket Desk support console.
//!
//! [`TicketDesk`] sits between a front end and a [`TicketBackend`]. It
//! validates every write against the transition policy before any request
//! is sent, keeps at most one transition per ticket in flight, and refreshes
//! the update log only after the backend has answered a write.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod capabilities;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info, warn};

use ticket_desk::guidance::success_message;
use ticket_desk::{
    RaiseCommand, TicketState, TransitionCommand, WritePlan, plan_raise, plan_transition,
};
use ticket_desk_audit::{UpdateHistory, UpdateLogEntry};
use ticket_desk_backend::{BackendError, TicketBackend, WriteAck};
use ticket_desk_domain::{ActingUser, NewTicket, Ticket, TicketId};

pub use auth::{
    AuthorizationService, SessionError, SessionRecord, VIEW_DENIED_MESSAGE, authenticate_session,
};
pub use capabilities::{build_ticket_view, compute_ticket_capabilities};
pub use error::{
    ApiError, AuthError, translate_backend_error, translate_core_error, translate_domain_error,
};
pub use request_response::{
    Capability, RaiseTicketRequest, RaiseTicketResponse, TicketCapabilities, TicketView,
    TransitionRequest, TransitionResponse,
};

const FETCH_TICKET_FAILED: &str = "Error fetching ticket details";
const FETCH_TICKETS_FAILED: &str = "Error fetching tickets";
const FETCH_UPDATES_FAILED: &str = "Error fetching update logs";
const UPDATE_FAILED: &str = "Failed to update the ticket.";
const RAISE_FAILED: &str = "Error raising ticket";

/// Marks a ticket as having a transition in flight until dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<TicketId>>,
    ticket_id: TicketId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.ticket_id);
    }
}

/// The ticket workflow service.
#[derive(Debug)]
pub struct TicketDesk<B> {
    backend: B,
    in_flight: Mutex<HashSet<TicketId>>,
}

impl<B: TicketBackend> TicketDesk<B> {
    /// Creates a service on top of `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// The backend this service writes to.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Loads a ticket and its update history for `actor`.
    ///
    /// A failing update log fetch does not fail the load; the history is
    /// left empty instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket cannot be fetched (`RemoteFailure`)
    /// - The actor may not view the ticket (`Unauthorized`)
    pub async fn load_ticket(
        &self,
        id: &TicketId,
        actor: &ActingUser,
    ) -> Result<TicketState, ApiError> {
        let ticket: Ticket = self.backend.fetch_ticket(id).await.map_err(|err| {
            warn!(ticket_id = %id, error = %err, "Failed to fetch ticket");
            translate_backend_error(&err, FETCH_TICKET_FAILED)
        })?;

        if let Err(err) = AuthorizationService::authorize_view_ticket(actor, &ticket) {
            warn!(ticket_id = %id, emp_id = %actor.emp_id, "Ticket view denied");
            return Err(err.into());
        }

        let history: UpdateHistory = match self.backend.fetch_updates(id).await {
            Ok(entries) => UpdateHistory::from_entries(entries),
            Err(err) => {
                warn!(ticket_id = %id, error = %err, "Failed to fetch update log");
                UpdateHistory::new()
            }
        };

        debug!(ticket_id = %id, entries = history.len(), "Ticket loaded");
        Ok(TicketState::new(ticket, history))
    }

    /// Lists the tickets `actor` may see.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` if the tickets cannot be fetched.
    pub async fn list_tickets(&self, actor: &ActingUser) -> Result<Vec<Ticket>, ApiError> {
        let tickets: Vec<Ticket> = self
            .backend
            .list_tickets()
            .await
            .map_err(|err| translate_backend_error(&err, FETCH_TICKETS_FAILED))?;
        Ok(AuthorizationService::visible_tickets(actor, tickets))
    }

    /// Re-fetches the update log of a loaded ticket.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` if the log cannot be fetched. The state is
    /// left unchanged in that case.
    pub async fn refresh_history(&self, state: &mut TicketState) -> Result<(), ApiError> {
        let entries: Vec<UpdateLogEntry> = self
            .backend
            .fetch_updates(&state.ticket.id)
            .await
            .map_err(|err| translate_backend_error(&err, FETCH_UPDATES_FAILED))?;
        state.replace_history(UpdateHistory::from_entries(entries));
        Ok(())
    }

    /// Applies a status transition to a loaded ticket.
    ///
    /// Validation happens before any request is sent: the status must be
    /// offered to `actor`, the remark must not be blank, any attachment must
    /// be an image, and no other transition of this ticket may be in flight.
    /// Exactly one write is then issued. Once the backend accepts it the
    /// state is updated and the update log re-fetched; if that fetch fails
    /// the locally built entry is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The status is not offered (`InvalidTransition`)
    /// - The remark is blank (`EmptyRemark`)
    /// - The attachment is not an image (`InvalidInput`)
    /// - Another transition of the ticket is in flight (`TransitionInFlight`)
    /// - The write fails (`RemoteFailure`); the state is left unchanged
    pub async fn apply_transition(
        &self,
        state: &mut TicketState,
        request: TransitionRequest,
        actor: &ActingUser,
    ) -> Result<TransitionResponse, ApiError> {
        let command: TransitionCommand = TransitionCommand {
            status: request.status,
            remark: request.remark,
            attachment: request.attachment,
        };
        let plan: WritePlan =
            plan_transition(&state.ticket, command, actor).map_err(translate_core_error)?;

        let _guard: InFlightGuard<'_> = self.begin_transition(&state.ticket.id)?;

        let ack: WriteAck = self.send(&plan).await.map_err(|err| {
            warn!(
                ticket_id = %plan.update().ticket_id,
                status = %plan.update().status,
                error = %err,
                "Status update failed"
            );
            translate_backend_error(&err, UPDATE_FAILED)
        })?;

        let now: NaiveDateTime = Utc::now().naive_utc();
        let entry: UpdateLogEntry = state.commit(plan.update(), now);
        info!(
            ticket_id = %entry.ticket_id,
            status = %entry.status,
            update_by = %entry.update_by,
            "Ticket status updated"
        );

        match self.backend.fetch_updates(&state.ticket.id).await {
            Ok(entries) => state.replace_history(UpdateHistory::from_entries(entries)),
            Err(err) => {
                warn!(
                    ticket_id = %state.ticket.id,
                    error = %err,
                    "Update log refresh failed, keeping local entry"
                );
            }
        }

        Ok(TransitionResponse {
            message: success_message(&entry.status),
            entry,
            backend_message: ack.message,
        })
    }

    /// Raises a new ticket on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The category or remark is blank, or the image is not an image
    /// - The backend rejects the ticket (`RemoteFailure`)
    pub async fn raise_ticket(
        &self,
        request: RaiseTicketRequest,
        actor: &ActingUser,
    ) -> Result<RaiseTicketResponse, ApiError> {
        let command: RaiseCommand = RaiseCommand {
            category: request.category,
            remark: request.remark,
            image: request.image,
        };
        let new_ticket: NewTicket = plan_raise(command, actor).map_err(translate_core_error)?;

        let ack: WriteAck = self.backend.raise_ticket(&new_ticket).await.map_err(|err| {
            warn!(emp_id = %actor.emp_id, error = %err, "Raising ticket failed");
            translate_backend_error(&err, RAISE_FAILED)
        })?;

        info!(
            emp_id = %new_ticket.emp_id,
            category = %new_ticket.category,
            "Ticket raised"
        );
        Ok(RaiseTicketResponse {
            message: ack
                .message
                .unwrap_or_else(|| String::from("Ticket raised successfully")),
        })
    }

    fn begin_transition(&self, ticket_id: &TicketId) -> Result<InFlightGuard<'_>, ApiError> {
        let inserted: bool = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ticket_id.clone());
        if !inserted {
            warn!(ticket_id = %ticket_id, "Transition already in flight");
            return Err(ApiError::TransitionInFlight {
                ticket_id: ticket_id.clone(),
            });
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            ticket_id: ticket_id.clone(),
        })
    }

    async fn send(&self, plan: &WritePlan) -> Result<WriteAck, BackendError> {
        match plan {
            WritePlan::Standard(update) => self.backend.update_status(update).await,
            WritePlan::ForwardToL2 { update, attachment } => {
                self.backend
                    .forward_to_l2(update, attachment.as_ref())
                    .await
            }
        }
    }
}
