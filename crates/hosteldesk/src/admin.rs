// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hosteldesk stats` and `users` commands.
//!
//! Both hit admin-only endpoints; a non-admin caller sees the backend's
//! 403 passed through, not a local permission check.

use hosteldesk_api::ApiClient;
use hosteldesk_core::{HosteldeskError, UserAccount};

/// Run the `hosteldesk stats` command.
pub async fn run_stats(
    client: &ApiClient,
    json: bool,
    _plain: bool,
) -> Result<(), HosteldeskError> {
    let stats = client.admin_stats().await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    println!("total:        {}", stats.total);
    println!("open:         {}", stats.open);
    println!("in progress:  {}", stats.in_progress);
    println!("resolved:     {}", stats.resolved);
    if !stats.category_counts.is_empty() {
        println!();
        let mut categories: Vec<_> = stats.category_counts.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (category, count) in categories {
            println!("{category:<12}  {count}");
        }
    }
    Ok(())
}

/// Run the `hosteldesk users` command.
pub async fn run_users(
    client: &ApiClient,
    id: Option<i64>,
    json: bool,
    _plain: bool,
) -> Result<(), HosteldeskError> {
    match id {
        Some(id) => {
            let user = client.get_user(id).await?;
            print_user(&user, json);
        }
        None => {
            let users = client.list_users().await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&users).unwrap_or_else(|_| "[]".to_string())
                );
                return Ok(());
            }
            if users.is_empty() {
                println!("no users");
                return Ok(());
            }
            println!("{:>5}  {:<16}  {:<8}  {}", "ID", "USERNAME", "ROLE", "NAME");
            for user in &users {
                println!(
                    "{:>5}  {:<16}  {:<8}  {}",
                    user.id,
                    user.username,
                    user.role,
                    user.full_name.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}

fn print_user(user: &UserAccount, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(user).unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }
    println!("id:       {}", user.id);
    println!("username: {}", user.username);
    println!("role:     {}", user.role);
    if let Some(ref name) = user.full_name {
        println!("name:     {name}");
    }
    if let Some(ref email) = user.email {
        println!("email:    {email}");
    }
    if let Some(ref contact) = user.contact_number {
        println!("contact:  {contact}");
    }
}
