// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use ticket_desk_audit::UpdateLogEntry;
use ticket_desk_domain::{Attachment, NewTicket, StatusUpdate, Ticket, TicketId};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::TicketBackend;
use crate::error::BackendError;
use crate::records::WriteAck;

/// One call received by an [`InMemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    ListTickets,
    FetchTicket(TicketId),
    FetchUpdates(TicketId),
    UpdateStatus(StatusUpdate),
    ForwardToL2 {
        update: StatusUpdate,
        attachment: Option<Attachment>,
    },
    RaiseTicket(NewTicket),
}

impl BackendCall {
    /// Returns true for calls that change backend state.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(
            self,
            Self::UpdateStatus(_) | Self::ForwardToL2 { .. } | Self::RaiseTicket(_)
        )
    }
}

#[derive(Debug, Default)]
struct Store {
    tickets: BTreeMap<TicketId, Ticket>,
    updates: BTreeMap<TicketId, Vec<UpdateLogEntry>>,
    calls: Vec<BackendCall>,
    /// Rejection to return from the next write, if any.
    next_write_failure: Option<Option<String>>,
    fail_update_fetches: bool,
}

/// A [`TicketBackend`] that keeps everything in memory.
///
/// Writes behave like the real backend: status writes update the stored
/// ticket and append a log entry, raises allocate the next numeric id. All
/// calls are recorded so tests can assert on exactly what was sent.
#[derive(Debug)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
    next_id: AtomicU64,
    write_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
            next_id: AtomicU64::new(1),
            write_gate: Mutex::new(None),
        }
    }

    /// Creates a backend pre-populated with tickets.
    #[must_use]
    pub fn with_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let backend: Self = Self::new();
        for ticket in tickets {
            backend.insert_ticket(ticket);
        }
        backend
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds or replaces a ticket.
    pub fn insert_ticket(&self, ticket: Ticket) {
        if let Ok(numeric) = ticket.id.as_str().parse::<u64>() {
            self.next_id.fetch_max(numeric.saturating_add(1), Ordering::SeqCst);
        }
        self.store().tickets.insert(ticket.id.clone(), ticket);
    }

    /// Adds a log entry to the ticket it references.
    pub fn insert_update(&self, entry: UpdateLogEntry) {
        self.store()
            .updates
            .entry(entry.ticket_id.clone())
            .or_default()
            .push(entry);
    }

    /// Returns the stored copy of a ticket.
    #[must_use]
    pub fn ticket(&self, id: &TicketId) -> Option<Ticket> {
        self.store().tickets.get(id).cloned()
    }

    /// Returns every ticket currently stored.
    #[must_use]
    pub fn tickets(&self) -> Vec<Ticket> {
        self.store().tickets.values().cloned().collect()
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.store().calls.clone()
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.store().calls.len()
    }

    /// Number of write calls received so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.store()
            .calls
            .iter()
            .filter(|call| call.is_write())
            .count()
    }

    /// Makes the next write fail with `"success": false` and `message`.
    pub fn fail_next_write(&self, message: Option<String>) {
        self.store().next_write_failure = Some(message);
    }

    /// Makes update log fetches fail until reset.
    pub fn fail_update_fetches(&self, fail: bool) {
        self.store().fail_update_fetches = fail;
    }

    /// Holds every write until [`InMemoryBackend::resume_writes`] is called.
    pub fn pause_writes(&self) {
        *self
            .write_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(Semaphore::new(0)));
    }

    /// Releases writes held by [`InMemoryBackend::pause_writes`].
    pub fn resume_writes(&self) {
        let gate: Option<Arc<Semaphore>> = self
            .write_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(gate) = gate {
            gate.close();
        }
    }

    async fn wait_for_gate(&self) {
        let gate: Option<Arc<Semaphore>> = self
            .write_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(gate) = gate {
            // Closing the semaphore is the release signal.
            let _ = gate.acquire().await;
        }
    }

    fn record(&self, call: BackendCall) {
        debug!(?call, "In-memory backend call");
        self.store().calls.push(call);
    }

    fn take_write_failure(&self) -> Result<(), BackendError> {
        match self.store().next_write_failure.take() {
            Some(message) => Err(BackendError::Rejected { message }),
            None => Ok(()),
        }
    }

    fn apply_update(&self, update: &StatusUpdate) -> Result<WriteAck, BackendError> {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let mut store: MutexGuard<'_, Store> = self.store();
        let Some(ticket) = store.tickets.get_mut(&update.ticket_id) else {
            return Err(not_found(&update.ticket_id));
        };
        ticket.record_transition(update.status.clone(), &update.remark, now);

        let mut entry: UpdateLogEntry = UpdateLogEntry::from_update(update, now);
        let log: &mut Vec<UpdateLogEntry> = store.updates.entry(update.ticket_id.clone()).or_default();
        entry.entry_id = Some((log.len() + 1).to_string());
        log.push(entry);

        Ok(WriteAck::accepted("Ticket updated successfully"))
    }
}

fn not_found(id: &TicketId) -> BackendError {
    BackendError::Status {
        status: 404,
        message: Some(format!("Ticket {id} not found")),
    }
}

#[async_trait]
impl TicketBackend for InMemoryBackend {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, BackendError> {
        self.record(BackendCall::ListTickets);
        Ok(self.tickets())
    }

    async fn fetch_ticket(&self, id: &TicketId) -> Result<Ticket, BackendError> {
        self.record(BackendCall::FetchTicket(id.clone()));
        self.ticket(id).ok_or_else(|| not_found(id))
    }

    async fn fetch_updates(&self, id: &TicketId) -> Result<Vec<UpdateLogEntry>, BackendError> {
        self.record(BackendCall::FetchUpdates(id.clone()));
        let store: MutexGuard<'_, Store> = self.store();
        if store.fail_update_fetches {
            return Err(BackendError::Status {
                status: 500,
                message: Some(String::from("Update log unavailable")),
            });
        }
        Ok(store.updates.get(id).cloned().unwrap_or_default())
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<WriteAck, BackendError> {
        self.record(BackendCall::UpdateStatus(update.clone()));
        self.wait_for_gate().await;
        self.take_write_failure()?;
        self.apply_update(update)
    }

    async fn forward_to_l2(
        &self,
        update: &StatusUpdate,
        attachment: Option<&Attachment>,
    ) -> Result<WriteAck, BackendError> {
        self.record(BackendCall::ForwardToL2 {
            update: update.clone(),
            attachment: attachment.cloned(),
        });
        self.wait_for_gate().await;
        self.take_write_failure()?;
        self.apply_update(update)
    }

    async fn raise_ticket(&self, ticket: &NewTicket) -> Result<WriteAck, BackendError> {
        self.record(BackendCall::RaiseTicket(ticket.clone()));
        self.wait_for_gate().await;
        self.take_write_failure()?;

        let id: TicketId = TicketId::new(self.next_id.fetch_add(1, Ordering::SeqCst).to_string());
        let stored: Ticket = Ticket {
            id: id.clone(),
            emp_id: ticket.emp_id.clone(),
            category: ticket.category.clone(),
            status: ticket.initial_status(),
            remark: ticket.remark.clone(),
            update_remark: None,
            date_time: Utc::now().naive_utc(),
            update_date_time: None,
            image: ticket
                .image
                .as_ref()
                .map(|image| format!("uploads/{}", image.file_name)),
        };
        self.store().tickets.insert(id.clone(), stored);

        Ok(WriteAck::accepted(format!("Ticket {id} raised successfully")))
    }
}
