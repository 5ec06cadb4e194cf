// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed credential store.
//!
//! Holds the logged-in user's encoded Basic credential and cached profile
//! between invocations, spanning login to logout. The store is the single
//! module with read/write access to the persisted session; everything else
//! receives a reconstructed [`Session`] value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hosteldesk_core::{HosteldeskError, Session, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// On-disk session record.
///
/// The profile is stored as a raw JSON string so that a blob written by an
/// older or newer client that no longer parses degrades to "no profile"
/// instead of invalidating the credential.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    username: String,
    credential: String,
    #[serde(default)]
    profile: Option<String>,
}

/// Process-wide holder of the persisted session.
///
/// Presence of the stored credential is the sole authentication predicate;
/// the client performs no expiry check.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at `state_dir`; the session file lives at
    /// `<state_dir>/session.json`.
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join("session.json"),
        }
    }

    /// Computes the Basic credential for a username/password pair.
    ///
    /// Base64 of `username:password`, computed once at login and never
    /// re-derived from a remembered password.
    pub fn encode_credential(username: &str, password: &str) -> String {
        BASE64.encode(format!("{username}:{password}"))
    }

    /// Persists the credential, username, and profile captured at login.
    pub fn persist(
        &self,
        username: &str,
        credential: &str,
        profile: &UserProfile,
    ) -> Result<(), HosteldeskError> {
        let record = PersistedSession {
            username: username.to_string(),
            credential: credential.to_string(),
            profile: serde_json::to_string(profile).ok(),
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| HosteldeskError::Session {
                source: Box::new(e),
            })?;
        }
        let body = serde_json::to_vec_pretty(&record).map_err(|e| HosteldeskError::Session {
            source: Box::new(e),
        })?;
        fs::write(&self.path, body).map_err(|e| HosteldeskError::Session {
            source: Box::new(e),
        })?;
        debug!(username, path = %self.path.display(), "session persisted");
        Ok(())
    }

    /// Clears the persisted session unconditionally. Idempotent: clearing
    /// when no session exists is not an error.
    pub fn clear(&self) -> Result<(), HosteldeskError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HosteldeskError::Session {
                source: Box::new(e),
            }),
        }
    }

    /// True iff an encoded credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Reconstructs the session from the persisted fields.
    ///
    /// Returns `None` when no credential is stored. A stored profile that
    /// fails to parse is treated as "no profile", not an error.
    pub fn current(&self) -> Option<Session> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return None;
            }
        };
        let record: PersistedSession = match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file corrupt");
                return None;
            }
        };
        if record.credential.is_empty() {
            return None;
        }
        let profile = record
            .profile
            .as_deref()
            .and_then(|raw| serde_json::from_str::<UserProfile>(raw).ok());
        Some(Session {
            username: record.username,
            encoded_credential: record.credential,
            profile,
        })
    }
}
