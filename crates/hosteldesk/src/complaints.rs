// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hosteldesk complaints` subcommands.
//!
//! Listing and search render a compact table; `show` renders the full
//! record. `generate` is the AI path: its failures are already classified
//! into display-ready messages, so they are printed verbatim rather than
//! wrapped.

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use hosteldesk_api::{ApiClient, ImageAttachment, SearchFilter};
use hosteldesk_core::{Category, Complaint, HosteldeskError, NewComplaint, Status};

#[derive(Subcommand, Debug)]
pub enum ComplaintsCommand {
    /// List complaints visible to you.
    List,
    /// Show one complaint in full.
    Show { id: i64 },
    /// File a new complaint.
    Create {
        description: String,
        #[arg(long, default_value = "COMPLAINT")]
        message_type: String,
        #[arg(long, default_value_t = Category::Plumbing)]
        category: Category,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        block: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        /// Attach an image file.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Update a complaint's status (OPEN, IN_PROGRESS, RESOLVED).
    SetStatus { id: i64, status: Status },
    /// Search complaints; all given filters must match.
    Search {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        agent: Option<String>,
    },
    /// Download the complaint export.
    Export {
        #[arg(long, default_value = "complaints.xlsx")]
        out: PathBuf,
    },
    /// Generate a structured complaint from a free-text description.
    Generate { description: String },
}

pub async fn run(
    client: &ApiClient,
    command: ComplaintsCommand,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    match command {
        ComplaintsCommand::List => {
            let complaints = client.list_complaints().await?;
            print_complaint_list(&complaints, json, plain);
            Ok(())
        }
        ComplaintsCommand::Show { id } => {
            let complaint = client.get_complaint(id).await?;
            print_complaint(&complaint, json);
            Ok(())
        }
        ComplaintsCommand::Create {
            description,
            message_type,
            category,
            sub_category,
            block,
            room,
            contact,
            image,
        } => {
            let new = NewComplaint {
                message_type,
                category,
                sub_category,
                block,
                room_no: room,
                contact_no: contact,
                description,
            };
            let attachment = image.map(read_attachment).transpose()?;
            let created = client.create_complaint(&new, attachment).await?;
            print_complaint(&created, json);
            Ok(())
        }
        ComplaintsCommand::SetStatus { id, status } => {
            let updated = client.update_complaint_status(id, status).await?;
            print_complaint(&updated, json);
            Ok(())
        }
        ComplaintsCommand::Search {
            query,
            category,
            from,
            to,
            agent,
        } => {
            let filter = SearchFilter {
                q: query,
                category,
                from_date: from,
                to_date: to,
                agent,
            };
            let hits = client.search_complaints(&filter).await?;
            print_complaint_list(&hits, json, plain);
            Ok(())
        }
        ComplaintsCommand::Export { out } => {
            let bytes = client.export_complaints().await?;
            std::fs::write(&out, &bytes).map_err(|e| {
                HosteldeskError::Internal(format!("failed to write {}: {e}", out.display()))
            })?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({"written": out.display().to_string(), "bytes": bytes.len()})
                );
            } else {
                println!("wrote {} ({} bytes)", out.display(), bytes.len());
            }
            Ok(())
        }
        ComplaintsCommand::Generate { description } => {
            run_generate(client, &description, json, plain).await
        }
    }
}

async fn run_generate(
    client: &ApiClient,
    description: &str,
    json: bool,
    plain: bool,
) -> Result<(), HosteldeskError> {
    match client.generate_complaint(description).await {
        Ok(generated) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&generated).unwrap_or_else(|_| "{}".to_string())
                );
            } else {
                println!("category:     {}", generated.category.as_deref().unwrap_or("-"));
                println!(
                    "sub-category: {}",
                    generated.sub_category.as_deref().unwrap_or("-")
                );
                println!("room:         {}", generated.room_no.as_deref().unwrap_or("-"));
                println!("priority:     {}", generated.priority.as_deref().unwrap_or("-"));
                println!("status:       {}", generated.status.as_deref().unwrap_or("-"));
                if let Some(ref desc) = generated.description {
                    println!("description:  {desc}");
                }
            }
            Ok(())
        }
        Err(classified) => {
            // Classified messages are display-ready; show them as-is.
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&classified).unwrap_or_else(|_| "{}".to_string())
                );
            } else {
                let use_color = !plain && std::io::stderr().is_terminal();
                if use_color {
                    use colored::Colorize;
                    eprintln!("{} {}", "✗".red(), classified.user_message.red());
                } else {
                    eprintln!("[{}] {}", classified.code, classified.user_message);
                }
            }
            std::process::exit(1);
        }
    }
}

fn read_attachment(path: PathBuf) -> Result<ImageAttachment, HosteldeskError> {
    let bytes = std::fs::read(&path).map_err(|e| {
        HosteldeskError::Internal(format!("failed to read {}: {e}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let mime_type = match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string();
    Ok(ImageAttachment {
        file_name,
        mime_type,
        bytes,
    })
}

fn status_cell(status: Status, use_color: bool) -> String {
    if !use_color {
        return status.to_string();
    }
    use colored::Colorize;
    match status {
        Status::Open => status.to_string().red().to_string(),
        Status::InProgress => status.to_string().yellow().to_string(),
        Status::Resolved => status.to_string().green().to_string(),
    }
}

fn print_complaint_list(complaints: &[Complaint], json: bool, plain: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(complaints).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }
    if complaints.is_empty() {
        println!("no complaints");
        return;
    }
    let use_color = !plain && std::io::stdout().is_terminal();
    println!("{:>5}  {:<12}  {:<12}  {}", "ID", "STATUS", "CATEGORY", "DESCRIPTION");
    for c in complaints {
        let category = c
            .category
            .map(|cat| cat.to_string())
            .unwrap_or_else(|| "-".to_string());
        let description = c.description.as_deref().unwrap_or("-");
        println!(
            "{:>5}  {:<12}  {:<12}  {}",
            c.id,
            status_cell(c.status, use_color),
            category,
            description
        );
    }
}

fn print_complaint(complaint: &Complaint, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(complaint).unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }
    println!("id:          {}", complaint.id);
    println!("status:      {}", complaint.status);
    if let Some(category) = complaint.category {
        println!("category:    {category}");
    }
    if let Some(ref sub) = complaint.sub_category {
        println!("sub:         {sub}");
    }
    if let Some(ref block) = complaint.block {
        println!("block:       {block}");
    }
    if let Some(ref room) = complaint.room_no {
        println!("room:        {room}");
    }
    if let Some(ref desc) = complaint.description {
        println!("description: {desc}");
    }
    if let Some(ref assigned) = complaint.assigned_to {
        println!("assigned:    {assigned}");
    }
    if let Some(created) = complaint.created_at {
        println!("created:     {created}");
    }
    if let Some(ref by) = complaint.raised_by {
        println!("raised by:   {}", by.username);
    }
    if let Some(ref url) = complaint.image_url {
        println!("image:       {url}");
    }
}
