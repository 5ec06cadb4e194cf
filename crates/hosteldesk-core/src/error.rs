// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Hosteldesk client.
//!
//! [`HosteldeskError`] is the primary error type returned by the session
//! store and every domain client. The AI complaint-generation path instead
//! surfaces [`ClassifiedError`], a closed set of user-facing categories so
//! the UI never shows raw transport errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The primary error type used across the Hosteldesk session store,
/// dispatcher, and domain clients.
#[derive(Debug, Error)]
pub enum HosteldeskError {
    /// Session store I/O errors (unreadable state dir, write failure).
    #[error("session store error: {source}")]
    Session {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Login was rejected by the backend.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend answered 401 on an authorized call. The dispatcher has
    /// already cleared the stored session; the caller must re-login.
    #[error("session expired: please log in again")]
    SessionExpired,

    /// The backend answered with a non-success status other than 401.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connection, timeout, body decode).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Stable machine-readable category for a classified failure.
///
/// Serialized names are the wire-stable codes (`VALIDATION_ERROR`, ...)
/// used for programmatic handling and testing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Client- or server-rejected input.
    ValidationError,
    /// Expired or invalid session.
    AuthError,
    /// DNS failure or connection refused; no response received.
    ConnectionError,
    /// The request timed out before a response arrived.
    TimeoutError,
    /// Any other transport failure without a response.
    NetworkError,
    /// The endpoint does not exist on the backend.
    NotFound,
    /// Backend AI configuration problem (missing API key).
    ConfigError,
    /// Backend AI model or endpoint problem.
    ModelError,
    /// Other backend-side failure (5xx).
    ServerError,
    /// Unclassified response status.
    ApiError,
}

/// A backend or transport failure translated into one of a fixed set of
/// user-facing categories.
///
/// Constructed only by the error classifier on the AI complaint path;
/// never persisted. Modeled as a tagged value rather than fields bolted
/// onto a generic error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{user_message}")]
pub struct ClassifiedError {
    /// Stable category for programmatic handling.
    pub code: ErrorCode,
    /// Message suitable for direct display to the user.
    pub user_message: String,
}

impl ClassifiedError {
    /// Creates a classified error with the given code and display message.
    pub fn new(code: ErrorCode, user_message: impl Into<String>) -> Self {
        Self {
            code,
            user_message: user_message.into(),
        }
    }
}
