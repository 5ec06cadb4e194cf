// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Hosteldesk client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Hosteldesk configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HosteldeskConfig {
    /// Backend API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// CLI behavior settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Backend API endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the hostel-management backend, including the `/api` root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds for all backend calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Directory holding the persisted session file.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

fn default_state_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("hosteldesk"))
        .unwrap_or_else(|| std::path::PathBuf::from(".hosteldesk"))
        .to_string_lossy()
        .into_owned()
}

/// CLI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
