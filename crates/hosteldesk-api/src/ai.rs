// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AI complaint generation.
//!
//! This is the one path whose failures surface as [`ClassifiedError`]
//! rather than [`HosteldeskError`](hosteldesk_core::HosteldeskError): the
//! form rendering the result shows `user_message` directly. Validation
//! runs before any network traffic, and an authorization-denied response
//! (401 or 403) destroys the session here just as 401 does on the
//! dispatcher.

use hosteldesk_core::{ClassifiedError, ErrorCode, GeneratedComplaint};
use hosteldesk_session::handle_unauthorized;
use serde::Serialize;
use tracing::debug;

use crate::classify::{TransportFailure, classify_status, classify_transport, validate_description};
use crate::http::{ApiClient, error_body_message};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    description: &'a str,
}

fn transport_failure(e: &reqwest::Error) -> TransportFailure {
    if e.is_timeout() {
        TransportFailure::TimedOut
    } else if e.is_connect() {
        TransportFailure::ConnectionRefused
    } else {
        TransportFailure::Other
    }
}

impl ApiClient {
    /// Generates a structured complaint from a free-text description.
    ///
    /// Every failure comes back classified: local validation, transport
    /// failures, and non-success statuses all map to a fixed category with
    /// a display-ready message.
    pub async fn generate_complaint(
        &self,
        description: &str,
    ) -> Result<GeneratedComplaint, ClassifiedError> {
        validate_description(description)?;

        let response = self
            .authorize(
                self.http()
                    .post(self.url("/ai/generate-complaint"))
                    .json(&GenerateRequest { description }),
            )
            .send()
            .await
            .map_err(|e| classify_transport(transport_failure(&e)))?;

        let status = response.status();
        debug!(status = %status, "generate-complaint response received");
        if status.as_u16() == 401 || status.as_u16() == 403 {
            let action = handle_unauthorized(self.store());
            debug!(?action, "authorization denied, session destroyed");
            return Err(classify_status(status.as_u16(), None));
        }
        if !status.is_success() {
            let message = error_body_message(response).await;
            return Err(classify_status(status.as_u16(), message.as_deref()));
        }

        let body = response.text().await.map_err(|_| {
            ClassifiedError::new(
                ErrorCode::ApiError,
                "Invalid response from server. Please try again.",
            )
        })?;
        serde_json::from_str(&body).map_err(|_| {
            ClassifiedError::new(
                ErrorCode::ApiError,
                "Invalid response from server. Please try again.",
            )
        })
    }
}
