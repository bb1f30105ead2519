// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client for the Ticket Desk support backend.
//!
//! The support backend is a set of PHP endpoints that own ticket
//! persistence and sub-ticket creation. This crate exposes them behind the
//! [`TicketBackend`] trait so the service layer never deals with HTTP or
//! with the backend's wire field names.
//!
//! ## Implementations
//!
//! - [`HttpBackend`] talks to the real endpoints over HTTPS using `reqwest`.
//! - [`InMemoryBackend`] keeps tickets in memory, counts calls and can be
//!   told to fail. Used by tests and for offline demos.
//!
//! ## Write semantics
//!
//! Every write is a single request. A write fails when the HTTP status is
//! not 2xx or when the body reports `"success": false`; the backend's
//! `message` is kept on the error when present. Nothing is retried.

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

mod config;
mod error;
mod http;
mod memory;
mod records;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use ticket_desk_audit::UpdateLogEntry;
use ticket_desk_domain::{Attachment, NewTicket, StatusUpdate, Ticket, TicketId};

pub use config::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::BackendError;
pub use http::HttpBackend;
pub use memory::{BackendCall, InMemoryBackend};
pub use records::{TicketRecord, UpdateRecord, WriteAck};

/// The operations the support backend offers.
///
/// Implementations must not retry and must perform exactly one request per
/// call.
#[async_trait]
pub trait TicketBackend: Send + Sync {
    /// Fetches every ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, BackendError>;

    /// Fetches a single ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn fetch_ticket(&self, id: &TicketId) -> Result<Ticket, BackendError>;

    /// Fetches the update log of a ticket, in the order the backend returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn fetch_updates(&self, id: &TicketId) -> Result<Vec<UpdateLogEntry>, BackendError>;

    /// Applies a standard status transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the write.
    async fn update_status(&self, update: &StatusUpdate) -> Result<WriteAck, BackendError>;

    /// Applies the `Forward to L2` transition, which also creates a
    /// sub-ticket on the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the write.
    async fn forward_to_l2(
        &self,
        update: &StatusUpdate,
        attachment: Option<&Attachment>,
    ) -> Result<WriteAck, BackendError>;

    /// Raises a new ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the write.
    async fn raise_ticket(&self, ticket: &NewTicket) -> Result<WriteAck, BackendError>;
}
