// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authorized request dispatcher.
//!
//! [`ApiClient`] is the single point through which all backend calls flow:
//! it attaches the Basic authorization header from the session store and
//! applies the global 401 policy (clear the session, fail with
//! [`HosteldeskError::SessionExpired`]). Every other error status passes
//! through to the caller unmodified.
//!
//! There is no retry, no request queueing, and no cancellation: concurrent
//! calls resolve independently, and a superseded call's response is applied
//! by whatever still awaits it (latest-completion-wins). That race is an
//! accepted property of this client, not a defect to paper over here.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use hosteldesk_config::ApiConfig;
use hosteldesk_core::HosteldeskError;
use hosteldesk_session::{SessionStore, handle_unauthorized};
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Error body shape the backend uses for failure responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// HTTP client for the hostel-management backend.
///
/// Cheap to clone; all domain client functions hang off this type so that
/// auth-header attachment and 401 handling stay consistent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: &ApiConfig, store: Arc<SessionStore>) -> Result<Self, HosteldeskError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HosteldeskError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// The session store this client reads credentials from.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches `Authorization: Basic <credential>` when a session exists;
    /// otherwise the request goes out unauthenticated.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.store.current() {
            Some(session) => builder.header(
                AUTHORIZATION,
                format!("Basic {}", session.encoded_credential),
            ),
            None => builder,
        }
    }

    /// Sends an authorized request and applies the global response policy.
    ///
    /// 401 destroys the session via [`handle_unauthorized`] and fails with
    /// `SessionExpired`; other non-success statuses become `Api` errors
    /// with the backend's message when one is present.
    pub(crate) async fn dispatch(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response, HosteldeskError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        debug!(status = %status, "response received");

        if status == StatusCode::UNAUTHORIZED {
            let action = handle_unauthorized(&self.store);
            debug!(?action, "unauthorized response, session destroyed");
            return Err(HosteldeskError::SessionExpired);
        }
        if !status.is_success() {
            let message = read_error_message(response).await;
            return Err(HosteldeskError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, HosteldeskError> {
        let response = self.dispatch(self.http.get(self.url(path))).await?;
        decode_json(response).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HosteldeskError> {
        let response = self
            .dispatch(self.http.get(self.url(path)).query(query))
            .await?;
        decode_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HosteldeskError> {
        let response = self
            .dispatch(self.http.post(self.url(path)).json(body))
            .await?;
        decode_json(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HosteldeskError> {
        let response = self
            .dispatch(self.http.put(self.url(path)).json(body))
            .await?;
        decode_json(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, HosteldeskError> {
        let response = self
            .dispatch(self.http.post(self.url(path)).multipart(form))
            .await?;
        decode_json(response).await
    }

    /// Fetches an opaque binary body (complaint export). Not parsed.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes, HosteldeskError> {
        let response = self.dispatch(self.http.get(self.url(path))).await?;
        response.bytes().await.map_err(transport_error)
    }
}

pub(crate) fn transport_error(e: reqwest::Error) -> HosteldeskError {
    HosteldeskError::Transport {
        message: format!("HTTP request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
) -> Result<T, HosteldeskError> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| HosteldeskError::Transport {
        message: format!("failed to parse API response: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Extracts the backend's `message` field from a failure body, if any.
pub(crate) async fn error_body_message(response: Response) -> Option<String> {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
}

async fn read_error_message(response: Response) -> String {
    let status = response.status();
    error_body_message(response)
        .await
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{login_store, test_client, test_store};
    use hosteldesk_core::Complaint;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn attaches_basic_header_when_session_exists() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        let encoded = login_store(&store);

        Mock::given(method("GET"))
            .and(path("/complaints"))
            .and(header("authorization", format!("Basic {encoded}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store);
        let complaints: Vec<Complaint> = client.get_json("/complaints").await.unwrap();
        assert!(complaints.is_empty());
    }

    #[tokio::test]
    async fn sends_unauthenticated_without_session() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());

        // Fails the test if an authorization header shows up.
        Mock::given(method("GET"))
            .and(path("/complaints"))
            .and(wiremock::matchers::header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/complaints"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store);
        let _: Vec<Complaint> = client.get_json("/complaints").await.unwrap();
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_fails_with_session_expired() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        login_store(&store);

        Mock::given(method("GET"))
            .and(path("/complaints"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let result: Result<Vec<Complaint>, _> = client.get_json("/complaints").await;
        assert!(matches!(result, Err(HosteldeskError::SessionExpired)));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn other_error_statuses_pass_through_with_backend_message() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        login_store(&store);

        Mock::given(method("GET"))
            .and(path("/complaints/99"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Complaint not found"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let result: Result<Complaint, _> = client.get_json("/complaints/99").await;
        match result {
            Err(HosteldeskError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Complaint not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        // Only 401 is a session-destroying status.
        assert!(store.is_authenticated());
    }

    // The dispatcher has no cancellation: a superseded call's response is
    // applied by whatever still awaits it, in completion order. This pins
    // that property down so nobody "fixes" it with request tokens.
    #[tokio::test]
    async fn in_flight_responses_apply_in_completion_order() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        login_store(&store);

        Mock::given(method("GET"))
            .and(path("/complaints/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_millis(250))
                    .set_body_json(serde_json::json!({"id": 1, "status": "OPEN"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/complaints/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 2, "status": "OPEN"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store);
        let applied = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));

        let slow = tokio::spawn({
            let client = client.clone();
            let applied = applied.clone();
            async move {
                let complaint = client.get_complaint(1).await.unwrap();
                applied.lock().unwrap().push(complaint.id);
            }
        });
        let fast = tokio::spawn({
            let client = client.clone();
            let applied = applied.clone();
            async move {
                let complaint = client.get_complaint(2).await.unwrap();
                applied.lock().unwrap().push(complaint.id);
            }
        });
        slow.await.unwrap();
        fast.await.unwrap();

        // Issued 1 then 2; the delayed first call lands last and "wins".
        assert_eq!(*applied.lock().unwrap(), vec![2, 1]);
    }

    #[tokio::test]
    async fn forbidden_is_not_session_expired_on_the_dispatcher() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());
        login_store(&store);

        Mock::given(method("GET"))
            .and(path("/admin/dashboard/stats"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let result: Result<serde_json::Value, _> =
            client.get_json("/admin/dashboard/stats").await;
        assert!(matches!(result, Err(HosteldeskError::Api { status: 403, .. })));
        assert!(store.is_authenticated());
    }
}
