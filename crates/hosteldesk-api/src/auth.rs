// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Auth domain client: signup, login, logout.
//!
//! Login is the one call that does not ride the dispatcher's 401 policy:
//! it sends the credential being established, and a rejection means "bad
//! username or password", not "session expired" — there is no stored
//! session to destroy yet.

use hosteldesk_core::{HosteldeskError, SignupRequest, UserProfile};
use hosteldesk_session::SessionStore;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::http::{ApiClient, decode_json, error_body_message, transport_error};

impl ApiClient {
    /// Registers a new account. Unauthenticated.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, HosteldeskError> {
        self.post_json("/auth/signup", request).await
    }

    /// Authenticates against the backend and persists the session.
    ///
    /// Computes the Basic credential once, sends it on the login call
    /// itself, and on success stores credential, username, and the
    /// returned profile. The password is never kept.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, HosteldeskError> {
        let credential = SessionStore::encode_credential(username, password);
        let response = self
            .http()
            .post(self.url("/auth/login"))
            .header(AUTHORIZATION, format!("Basic {credential}"))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(status = %status, username, "login response received");
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(HosteldeskError::Auth(
                "invalid username or password".to_string(),
            ));
        }
        if !status.is_success() {
            let message = error_body_message(response)
                .await
                .unwrap_or_else(|| format!("login failed with status {status}"));
            return Err(HosteldeskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let profile: UserProfile = decode_json(response).await?;
        self.store().persist(username, &credential, &profile)?;
        Ok(profile)
    }

    /// Clears the persisted session. Idempotent.
    pub fn logout(&self) -> Result<(), HosteldeskError> {
        self.store().clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{test_client, test_store};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use hosteldesk_core::Role;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn login_persists_credential_and_profile() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());

        let expected = BASE64.encode("asha:s3cret");
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header("authorization", format!("Basic {expected}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "userId": 42,
                "username": "asha",
                "role": "CLIENT"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let profile = client.login("asha", "s3cret").await.unwrap();
        assert_eq!(profile.user_id, Some(42));
        assert_eq!(profile.role, Role::Client);

        let session = store.current().expect("session should be persisted");
        assert_eq!(session.username, "asha");
        // The stored credential decodes to exactly "username:password".
        assert_eq!(
            BASE64.decode(&session.encoded_credential).unwrap(),
            b"asha:s3cret"
        );
        assert_eq!(session.user_id(), Some(42));
    }

    #[tokio::test]
    async fn rejected_login_is_auth_error_and_persists_nothing() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let result = client.login("asha", "wrong").await;
        assert!(matches!(result, Err(HosteldeskError::Auth(_))));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn signup_posts_camel_case_body() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());

        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "username": "ravi",
                "fullName": "Ravi Kumar",
                "contactNumber": "5550002"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "User registered",
                "userId": 7,
                "username": "ravi",
                "role": "CLIENT"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), store.clone());
        let profile = client
            .signup(&SignupRequest {
                username: "ravi".into(),
                password: "pw".into(),
                full_name: Some("Ravi Kumar".into()),
                email: None,
                contact_number: Some("5550002".into()),
            })
            .await
            .unwrap();
        assert_eq!(profile.user_id, Some(7));
        // Signup does not log the user in.
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(dir.path());

        let client = test_client(&server.uri(), store);
        client.logout().unwrap();
        client.logout().unwrap();
        assert!(!client.store().is_authenticated());
    }
}
