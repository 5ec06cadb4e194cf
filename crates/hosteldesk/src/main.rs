// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hosteldesk - command-line client for the hostel-management service.
//!
//! This is the binary entry point. Every command loads configuration,
//! opens the session store, and runs the matching command module; the
//! session gate decides up front whether a command may run at all.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use hosteldesk_api::ApiClient;
use hosteldesk_core::HosteldeskError;
use hosteldesk_session::{GateDecision, RouteKind, SessionStore, evaluate};

mod admin;
mod auth;
mod complaints;
mod qa;

/// Hosteldesk - hostel complaint tracking from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hosteldesk", version, about, long_about = None)]
struct Cli {
    /// Output structured JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors even on a terminal.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and persist the session.
    Login {
        username: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Register a new account.
    Signup {
        username: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    /// Show the logged-in identity.
    Whoami,
    /// Work with complaints.
    Complaints {
        #[command(subcommand)]
        command: complaints::ComplaintsCommand,
    },
    /// Ask the assistant a question about your complaints.
    Ask {
        question: String,
    },
    /// Show your question history.
    History,
    /// Show assistant usage analytics.
    Analytics {
        /// System-wide analytics instead of your own.
        #[arg(long)]
        global: bool,
        /// Include daily counts for the last N days.
        #[arg(long)]
        days: Option<u32>,
    },
    /// Show the admin dashboard counters.
    Stats,
    /// List accounts, or show one by id.
    Users {
        id: Option<i64>,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hosteldesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Gate check for commands that need a session. Mirrors the route guard:
/// re-evaluated on every invocation, never cached.
fn require_login(store: &SessionStore) -> Result<(), HosteldeskError> {
    match evaluate(RouteKind::Protected, store) {
        GateDecision::Render => Ok(()),
        _ => Err(HosteldeskError::Auth(
            "not logged in; run `hosteldesk login <username>` first".to_string(),
        )),
    }
}

/// Gate check for login/signup: an authenticated user is sent away.
fn require_logged_out(store: &SessionStore) -> Result<(), HosteldeskError> {
    match evaluate(RouteKind::Public, store) {
        GateDecision::RedirectToDashboard => {
            let who = store
                .current()
                .map(|s| s.username)
                .unwrap_or_else(|| "someone".to_string());
            Err(HosteldeskError::Auth(format!(
                "already logged in as {who}; run `hosteldesk logout` first"
            )))
        }
        _ => Ok(()),
    }
}

async fn run(
    cli: Cli,
    store: &Arc<SessionStore>,
    client: &ApiClient,
) -> Result<(), HosteldeskError> {
    match cli.command {
        Commands::Login { username } => {
            require_logged_out(store)?;
            auth::run_login(client, &username, cli.json, cli.plain).await
        }
        Commands::Logout => auth::run_logout(client, cli.json, cli.plain),
        Commands::Signup {
            username,
            full_name,
            email,
            contact,
        } => {
            require_logged_out(store)?;
            auth::run_signup(client, &username, full_name, email, contact, cli.json, cli.plain)
                .await
        }
        Commands::Whoami => auth::run_whoami(store, cli.json, cli.plain),
        Commands::Complaints { command } => {
            require_login(store)?;
            complaints::run(client, command, cli.json, cli.plain).await
        }
        Commands::Ask { question } => {
            require_login(store)?;
            qa::run_ask(client, store, &question, cli.json, cli.plain).await
        }
        Commands::History => {
            require_login(store)?;
            qa::run_history(client, store, cli.json, cli.plain).await
        }
        Commands::Analytics { global, days } => {
            require_login(store)?;
            qa::run_analytics(client, store, global, days, cli.json, cli.plain).await
        }
        Commands::Stats => {
            require_login(store)?;
            admin::run_stats(client, cli.json, cli.plain).await
        }
        Commands::Users { id } => {
            require_login(store)?;
            admin::run_users(client, id, cli.json, cli.plain).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match hosteldesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            hosteldesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.client.log_level);

    let store = Arc::new(SessionStore::new(&config.session.state_dir));
    let client = match ApiClient::new(&config.api, store.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("hosteldesk: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &store, &client).await {
        eprintln!("hosteldesk: {e}");
        std::process::exit(1);
    }
}
