// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod ticket_status;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use ticket_status::TicketStatus;
pub use timestamp::{BACKEND_TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};
pub use types::{
    ActingUser, Attachment, Category, EmpId, NewTicket, Role, StatusUpdate, Ticket, TicketId,
};
pub use validation::{validate_attachment, validate_new_ticket, validate_remark};
