// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hosteldesk ask`, `history`, and `analytics` commands.
//!
//! `ask` picks the endpoint from the session's role. History and
//! analytics ride the soft-fail reads: a session without a user id shows
//! an empty view instead of an error.

use std::io::IsTerminal;

use hosteldesk_api::ApiClient;
use hosteldesk_core::{HosteldeskError, Role, Session};
use hosteldesk_session::SessionStore;

fn current_session(store: &SessionStore) -> Result<Session, HosteldeskError> {
    store.current().ok_or_else(|| {
        HosteldeskError::Auth("not logged in; run `hosteldesk login <username>` first".to_string())
    })
}

fn session_role(session: &Session) -> Role {
    session.profile.as_ref().map(|p| p.role).unwrap_or_default()
}

/// Run the `hosteldesk ask` command.
pub async fn run_ask(
    client: &ApiClient,
    store: &SessionStore,
    question: &str,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    let session = current_session(store)?;

    let answer = match session_role(&session) {
        Role::Admin => client.ask_as_admin(question, &session).await?,
        Role::Client => {
            let user_id = session.user_id().ok_or_else(|| {
                HosteldeskError::Internal(
                    "session has no user id; log in again to refresh it".to_string(),
                )
            })?;
            client.ask_as_client(question, user_id).await?
        }
    };

    if json {
        println!("{}", serde_json::json!({"answer": answer.answer}));
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        if use_color {
            use colored::Colorize;
            println!("{}", answer.answer.bold());
        } else {
            println!("{}", answer.answer);
        }
    }
    Ok(())
}

/// Run the `hosteldesk history` command.
pub async fn run_history(
    client: &ApiClient,
    store: &SessionStore,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    let session = current_session(store)?;
    let history = client.qa_history(&session).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&history).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }
    if history.is_empty() {
        println!("no questions yet");
        return Ok(());
    }
    let use_color = !plain && std::io::stdout().is_terminal();
    for entry in &history {
        if use_color {
            use colored::Colorize;
            println!("{} {}", "Q:".bold(), entry.question);
        } else {
            println!("Q: {}", entry.question);
        }
        println!("A: {}", entry.answer.as_deref().unwrap_or("(no answer)"));
        if let Some(asked_at) = entry.asked_at {
            println!("   {asked_at}");
        }
        println!();
    }
    Ok(())
}

/// Run the `hosteldesk analytics` command.
pub async fn run_analytics(
    client: &ApiClient,
    store: &SessionStore,
    global: bool,
    days: Option<u32>,
    json: bool,
    _plain: bool,
) -> Result<(), HosteldeskError> {
    let session = current_session(store)?;

    let summary = if global {
        Some(client.global_analytics().await?)
    } else {
        client.user_analytics(&session).await?
    };
    let daily = match days {
        Some(days) if global => Some(client.global_daily_counts(days).await?),
        Some(days) => Some(client.user_daily_counts(&session, days).await?),
        None => None,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "summary": summary,
                "daily": daily,
            }))
            .unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    match summary {
        Some(summary) => {
            println!("questions:  {}", summary.total_questions);
            println!("  admin:    {}", summary.total_admin_questions);
            println!("  user:     {}", summary.total_user_questions);
            println!("succeeded:  {}", summary.success_count);
            println!("failed:     {}", summary.error_count);
            if let (Some(first), Some(last)) =
                (summary.first_question_date, summary.last_question_date)
            {
                println!("active:     {first} to {last}");
            }
        }
        None => println!("no analytics available"),
    }

    if let Some(daily) = daily {
        println!();
        println!("{:<12}  {:>5}  {:>5}  {:>5}", "DATE", "TOTAL", "ADMIN", "USER");
        for day in daily {
            println!(
                "{:<12}  {:>5}  {:>5}  {:>5}",
                day.date.to_string(),
                day.total,
                day.admin,
                day.user
            );
        }
    }
    Ok(())
}
