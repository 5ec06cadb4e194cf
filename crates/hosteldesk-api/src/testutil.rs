// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for the wiremock-backed tests in this crate.

use std::sync::Arc;

use hosteldesk_config::ApiConfig;
use hosteldesk_core::{Role, UserProfile};
use hosteldesk_session::SessionStore;

use crate::ApiClient;

pub(crate) fn test_store(dir: &std::path::Path) -> Arc<SessionStore> {
    Arc::new(SessionStore::new(dir))
}

/// Persists a logged-in client session and returns the encoded credential.
pub(crate) fn login_store(store: &SessionStore) -> String {
    let encoded = SessionStore::encode_credential("asha", "s3cret");
    store
        .persist(
            "asha",
            &encoded,
            &UserProfile {
                user_id: Some(42),
                username: "asha".into(),
                role: Role::Client,
                message: None,
            },
        )
        .unwrap();
    encoded
}

pub(crate) fn test_client(base_url: &str, store: Arc<SessionStore>) -> ApiClient {
    ApiClient::new(
        &ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        },
        store,
    )
    .unwrap()
}
