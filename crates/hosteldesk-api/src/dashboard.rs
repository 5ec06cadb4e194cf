// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin dashboard domain client.

use hosteldesk_core::{DashboardStats, HosteldeskError};

use crate::http::ApiClient;

impl ApiClient {
    /// Fetches the admin dashboard counters. Admin-only on the backend;
    /// a non-admin caller gets a 403 `Api` error passed through.
    pub async fn admin_stats(&self) -> Result<DashboardStats, HosteldeskError> {
        self.get_json("/admin/dashboard/stats").await
    }
}
