// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session handling for the Hosteldesk client.
//!
//! [`SessionStore`] is the single owner of the persisted credential and
//! cached profile; [`guard`] holds the route-gate and 401 policies that
//! read it. Mutation happens only on login, logout, and the 401 policy, so
//! no locking is needed: reads and writes are atomic at the granularity of
//! the one session file.

pub mod guard;
pub mod store;

pub use guard::{GateDecision, RouteKind, UnauthorizedAction, evaluate, handle_unauthorized};
pub use store::SessionStore;
