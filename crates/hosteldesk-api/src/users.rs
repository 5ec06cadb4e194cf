// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Users domain client.

use hosteldesk_core::{HosteldeskError, UserAccount};

use crate::http::ApiClient;

impl ApiClient {
    /// Lists all accounts known to the backend.
    pub async fn list_users(&self) -> Result<Vec<UserAccount>, HosteldeskError> {
        self.get_json("/users").await
    }

    /// Fetches one account by id.
    pub async fn get_user(&self, id: i64) -> Result<UserAccount, HosteldeskError> {
        self.get_json(&format!("/users/{id}")).await
    }
}
