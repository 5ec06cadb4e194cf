// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session gate and unauthorized-response policies.
//!
//! Both policies are plain functions over the [`SessionStore`] so they can
//! be unit-tested without a router: the caller owns the actual navigation
//! (or, in the CLI, the error message) that each decision maps to.

use tracing::{debug, warn};

use crate::store::SessionStore;

/// Whether a view requires an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires a session; unauthenticated access redirects to login.
    Protected,
    /// Login/signup views; authenticated access redirects away.
    Public,
}

/// Outcome of evaluating the gate for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested view.
    Render,
    /// No session: send the user to the login view.
    RedirectToLogin,
    /// Already authenticated: send the user to the default view.
    RedirectToDashboard,
}

/// Action the caller must take after an authorization-denied response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// The session was cleared; the user must log in again.
    RedirectToLogin,
}

/// Evaluates the gate for one navigation.
///
/// Consulted synchronously on every navigation, never cached: the store is
/// re-read each time so a logout in another code path takes effect
/// immediately.
pub fn evaluate(route: RouteKind, store: &SessionStore) -> GateDecision {
    let authenticated = store.is_authenticated();
    match (route, authenticated) {
        (RouteKind::Protected, false) => GateDecision::RedirectToLogin,
        (RouteKind::Public, true) => GateDecision::RedirectToDashboard,
        _ => GateDecision::Render,
    }
}

/// Global policy for a 401 response: destroy the session and tell the
/// caller to navigate to login.
///
/// Invoked by the request dispatcher for every authorized call; it is not
/// per-call opt-in. Clearing failure is logged but does not change the
/// action — the credential is invalid either way.
pub fn handle_unauthorized(store: &SessionStore) -> UnauthorizedAction {
    if let Err(e) = store.clear() {
        warn!(error = %e, "failed to clear session after 401");
    } else {
        debug!("session cleared after 401");
    }
    UnauthorizedAction::RedirectToLogin
}
