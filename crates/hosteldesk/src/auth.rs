// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hosteldesk login`, `logout`, `signup`, and `whoami` commands.
//!
//! Passwords are always prompted, never taken as arguments, so they stay
//! out of shell history. The store keeps only the encoded credential.

use std::io::IsTerminal;

use hosteldesk_api::ApiClient;
use hosteldesk_core::{HosteldeskError, SignupRequest};
use hosteldesk_session::SessionStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct IdentityResponse {
    logged_in: bool,
    username: Option<String>,
    role: Option<String>,
    user_id: Option<i64>,
}

fn prompt_password(prompt: &str) -> Result<String, HosteldeskError> {
    rpassword::prompt_password(prompt)
        .map_err(|e| HosteldeskError::Internal(format!("failed to read password: {e}")))
}

/// Run the `hosteldesk login` command.
pub async fn run_login(
    client: &ApiClient,
    username: &str,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    let password = prompt_password("Password: ")?;
    let profile = client.login(username, &password).await?;

    if json {
        let resp = IdentityResponse {
            logged_in: true,
            username: Some(profile.username.clone()),
            role: Some(profile.role.to_string()),
            user_id: profile.user_id,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&resp).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        if use_color {
            use colored::Colorize;
            println!(
                "{} logged in as {} ({})",
                "✓".green(),
                profile.username.bold(),
                profile.role
            );
        } else {
            println!("logged in as {} ({})", profile.username, profile.role);
        }
    }
    Ok(())
}

/// Run the `hosteldesk logout` command. Idempotent.
pub fn run_logout(client: &ApiClient, json: bool, plain: bool) -> Result<(), HosteldeskError> {
    client.logout()?;

    if json {
        println!("{}", serde_json::json!({"logged_in": false}));
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        if use_color {
            use colored::Colorize;
            println!("{} logged out", "✓".green());
        } else {
            println!("logged out");
        }
    }
    Ok(())
}

/// Run the `hosteldesk signup` command. Does not log the new account in.
pub async fn run_signup(
    client: &ApiClient,
    username: &str,
    full_name: Option<String>,
    email: Option<String>,
    contact: Option<String>,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    let password = prompt_password("Password: ")?;
    let confirm = prompt_password("Confirm password: ")?;
    if password != confirm {
        return Err(HosteldeskError::Auth("passwords do not match".to_string()));
    }

    let profile = client
        .signup(&SignupRequest {
            username: username.to_string(),
            password,
            full_name,
            email,
            contact_number: contact,
        })
        .await?;

    if json {
        let resp = IdentityResponse {
            logged_in: false,
            username: Some(profile.username.clone()),
            role: Some(profile.role.to_string()),
            user_id: profile.user_id,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&resp).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        if use_color {
            use colored::Colorize;
            println!(
                "{} account {} created; run `hosteldesk login {}` to sign in",
                "✓".green(),
                profile.username.bold(),
                profile.username
            );
        } else {
            println!(
                "account {} created; run `hosteldesk login {}` to sign in",
                profile.username, profile.username
            );
        }
    }
    Ok(())
}

/// Run the `hosteldesk whoami` command. Reads only local state.
pub fn run_whoami(store: &SessionStore, json: bool, plain: bool) -> Result<(), HosteldeskError> {
    let session = store.current();

    if json {
        let resp = match &session {
            Some(s) => IdentityResponse {
                logged_in: true,
                username: Some(s.username.clone()),
                role: s.profile.as_ref().map(|p| p.role.to_string()),
                user_id: s.user_id(),
            },
            None => IdentityResponse {
                logged_in: false,
                username: None,
                role: None,
                user_id: None,
            },
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&resp).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    match session {
        Some(s) => {
            let role = s
                .profile
                .as_ref()
                .map(|p| p.role.to_string())
                .unwrap_or_else(|| "unknown role".to_string());
            let use_color = !plain && std::io::stdout().is_terminal();
            if use_color {
                use colored::Colorize;
                println!("{} ({})", s.username.bold(), role);
            } else {
                println!("{} ({})", s.username, role);
            }
        }
        None => println!("not logged in"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_response_serializes_logged_out() {
        let resp = IdentityResponse {
            logged_in: false,
            username: None,
            role: None,
            user_id: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"logged_in\":false"));
    }

    #[test]
    fn whoami_without_session_reports_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(run_whoami(&store, false, true).is_ok());
    }
}
