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

mod apply;
mod command;
mod error;
pub mod guidance;
pub mod policy;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{WritePlan, plan_raise, plan_transition};
pub use command::{RaiseCommand, TransitionCommand};
pub use error::CoreError;
pub use policy::{RuleEffect, allowed_transitions, is_transition_allowed};
pub use state::TicketState;
