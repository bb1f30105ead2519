// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket status transition policy.
//!
//! The transitions offered to a user depend only on the ticket's status and
//! category, the user's role, and whether the user raised the ticket. Rules
//! are evaluated as a fixed pipeline of [`RuleEffect`]s:
//!
//! 1. Owner rules, each adding to the offered set.
//! 2. At most one role rule. Role branches are mutually exclusive; the
//!    `Admin` and `ERPADMIN` branches replace whatever the owner rules
//!    offered, the `L2` branch adds to it.
//!
//! An empty result means no update should be offered at all.

use std::collections::BTreeSet;

use ticket_desk_domain::{ActingUser, Category, Role, Ticket, TicketStatus};

/// How a rule's transitions combine with those offered by earlier rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEffect {
    /// Offer these transitions in addition to what is already offered.
    Add(BTreeSet<TicketStatus>),
    /// Offer exactly these transitions, discarding earlier results.
    Replace(BTreeSet<TicketStatus>),
}

impl RuleEffect {
    fn add<const N: usize>(statuses: [TicketStatus; N]) -> Self {
        Self::Add(statuses.into_iter().collect())
    }

    fn replace<const N: usize>(statuses: [TicketStatus; N]) -> Self {
        Self::Replace(statuses.into_iter().collect())
    }

    /// Folds this effect into the accumulated set.
    pub fn apply_to(self, offered: &mut BTreeSet<TicketStatus>) {
        match self {
            Self::Add(statuses) => offered.extend(statuses),
            Self::Replace(statuses) => *offered = statuses,
        }
    }
}

/// The facts the policy is allowed to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyInput<'a> {
    pub status: &'a TicketStatus,
    pub category: &'a Category,
    pub role: &'a Role,
    /// Whether the acting user raised the ticket.
    pub is_owner: bool,
}

impl<'a> PolicyInput<'a> {
    /// Extracts the policy facts from a ticket and the user viewing it.
    #[must_use]
    pub fn new(ticket: &'a Ticket, user: &'a ActingUser) -> Self {
        Self {
            status: &ticket.status,
            category: &ticket.category,
            role: &user.role,
            is_owner: user.owns(ticket),
        }
    }
}

/// Rules that apply to the user who raised the ticket, whatever their role.
fn owner_effects(input: &PolicyInput<'_>) -> Vec<RuleEffect> {
    if !input.is_owner {
        return Vec::new();
    }

    let mut effects: Vec<RuleEffect> = Vec::new();

    if *input.status == TicketStatus::Resolved {
        effects.push(RuleEffect::add([TicketStatus::Reopen]));
    }

    if *input.status == TicketStatus::OfferUat {
        effects.push(RuleEffect::add([
            TicketStatus::AcceptUat,
            TicketStatus::RejectUat,
        ]));
    }

    effects
}

/// The role branch. Only the first matching branch is considered.
fn role_effect(input: &PolicyInput<'_>) -> Option<RuleEffect> {
    match input.role {
        Role::Admin if input.category.is_it_support() => input
            .status
            .is_awaiting_action()
            .then(|| RuleEffect::replace([TicketStatus::Resolved])),
        Role::ErpAdmin if *input.category == Category::Erp365 => match input.status {
            TicketStatus::Open | TicketStatus::Reopen => Some(RuleEffect::replace([
                TicketStatus::Resolved,
                TicketStatus::ForwardToL2,
            ])),
            TicketStatus::AcceptUat | TicketStatus::RejectUat => Some(RuleEffect::replace([
                TicketStatus::Resolved,
                TicketStatus::ForwardToL2,
                TicketStatus::OfferUat,
            ])),
            _ => None,
        },
        Role::L2 => {
            let mut statuses: BTreeSet<TicketStatus> =
                BTreeSet::from([TicketStatus::Resolved, TicketStatus::OfferUat]);
            if *input.status != TicketStatus::AssignToOem {
                statuses.insert(TicketStatus::AssignToOem);
            }
            if *input.status == TicketStatus::AcceptUat {
                statuses.insert(TicketStatus::DeployedUat);
            }
            Some(RuleEffect::Add(statuses))
        }
        _ => None,
    }
}

/// Returns the effects of every rule that fires, in evaluation order.
#[must_use]
pub fn rule_effects(input: &PolicyInput<'_>) -> Vec<RuleEffect> {
    let mut effects: Vec<RuleEffect> = owner_effects(input);
    effects.extend(role_effect(input));
    effects
}

/// Computes the status transitions to offer `user` for `ticket`.
///
/// # Arguments
///
/// * `ticket` - The ticket being viewed
/// * `user` - The acting user
///
/// # Returns
///
/// The set of statuses the ticket may be moved to. Empty when the user
/// may not update the ticket.
#[must_use]
pub fn allowed_transitions(ticket: &Ticket, user: &ActingUser) -> BTreeSet<TicketStatus> {
    let input: PolicyInput<'_> = PolicyInput::new(ticket, user);
    let mut offered: BTreeSet<TicketStatus> = BTreeSet::new();
    for effect in rule_effects(&input) {
        effect.apply_to(&mut offered);
    }
    offered
}

/// Checks whether `user` may move `ticket` to `status`.
#[must_use]
pub fn is_transition_allowed(ticket: &Ticket, user: &ActingUser, status: &TicketStatus) -> bool {
    allowed_transitions(ticket, user).contains(status)
}
