// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client layer for the hostel-management backend.
//!
//! [`ApiClient`] is the authorized request dispatcher; the domain modules
//! (`auth`, `complaints`, `qa`, `dashboard`, `users`, `ai`) hang their
//! typed endpoint wrappers off it so that header attachment and the
//! global 401 policy apply uniformly. [`classify`] holds the pure error
//! classifier used by the AI complaint path.

mod ai;
mod auth;
pub mod classify;
mod complaints;
mod dashboard;
mod http;
mod qa;
#[cfg(test)]
mod testutil;
mod users;

pub use complaints::{ImageAttachment, SearchFilter};
pub use http::ApiClient;
