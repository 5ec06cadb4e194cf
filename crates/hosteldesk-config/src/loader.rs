// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hosteldesk.toml` > `~/.config/hosteldesk/hosteldesk.toml`
//! > `/etc/hosteldesk/hosteldesk.toml` with environment variable overrides
//! via `HOSTELDESK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::HosteldeskConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hosteldesk/hosteldesk.toml` (system-wide)
/// 3. `~/.config/hosteldesk/hosteldesk.toml` (user XDG config)
/// 4. `./hosteldesk.toml` (local directory)
/// 5. `HOSTELDESK_*` environment variables
pub fn load_config() -> Result<HosteldeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HosteldeskConfig::default()))
        .merge(Toml::file("/etc/hosteldesk/hosteldesk.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hosteldesk/hosteldesk.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hosteldesk.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<HosteldeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HosteldeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HosteldeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HosteldeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `HOSTELDESK_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("HOSTELDESK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: HOSTELDESK_API_BASE_URL -> "api_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("session_", "session.", 1)
            .replacen("client_", "client.", 1);
        mapped.into()
    })
}
