//! Interactive terminal front-end for the document-extraction service.
//!
//! Owns all mutable session state and drives the pure core: upload a PDF,
//! author or import extraction fields, submit the request, review the rows.

mod editor;
mod render;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use docintel::{build, has_any_extracted_value, import_from_json, to_display_rows, ValidationError};
use docintel_client::DocintelClient;

use session::Session;

#[derive(Parser)]
#[command(
    name = "docintel",
    version,
    about = "Upload a PDF, define extraction fields, review structured results"
)]
struct Args {
    /// Backend base URL
    #[arg(long, env = "DOCINTEL_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// PDF to upload on startup
    #[arg(long)]
    document: Option<PathBuf>,

    /// Schema JSON file to import on startup
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let term = Term::stdout();
    term.clear_screen()?;
    render::banner();

    let client = DocintelClient::new(&args.api_url);
    println!("  {} {}", "backend".dimmed(), client.base_url());
    match client.health().await {
        Ok(status) => render::health(&status),
        Err(e) => render::health_error(&e.to_string()),
    }

    let mut session = Session::new();

    if let Some(path) = &args.schema {
        import_schema_file(&mut session, path);
    }
    if let Some(path) = &args.document {
        upload_document(&client, &mut session, path).await;
    }

    loop {
        println!();
        status_line(&session);

        let batch_label = if session.batch_extraction {
            "⚡ Batch extraction: on"
        } else {
            "⚡ Batch extraction: off"
        };
        let options = [
            "📄 Upload document",
            "🧩 Edit extraction fields",
            "📥 Import schema from JSON file",
            batch_label,
            "🔍 Start extraction",
            "📊 View results",
            "🔄 Reset session",
            "👋 Quit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => {
                let path = prompt_path("Path to PDF")?;
                upload_document(&client, &mut session, Path::new(&path)).await;
            }
            1 => editor::edit_fields(&mut session.fields)?,
            2 => {
                let path = prompt_path("Path to schema JSON")?;
                import_schema_file(&mut session, Path::new(&path));
            }
            3 => session.batch_extraction = !session.batch_extraction,
            4 => run_extraction(&client, &mut session).await,
            5 => view_results(&mut session)?,
            6 => {
                session.reset();
                render::notice("Session reset.");
            }
            7 => break,
            _ => unreachable!(),
        }
    }

    println!("{}", "👋 Goodbye!".bright_blue());
    Ok(())
}

fn status_line(session: &Session) {
    let document = session.document_name.as_deref().unwrap_or("none");
    let valid = session.fields.iter().filter(|f| f.is_valid()).count();
    println!(
        "  {} {}   {} {}/{} valid   {} {}   {} {}",
        "document:".dimmed(),
        document,
        "fields:".dimmed(),
        valid,
        session.fields.len(),
        "batch:".dimmed(),
        if session.batch_extraction { "on" } else { "off" },
        "results:".dimmed(),
        if session.result.is_some() { "ready" } else { "—" },
    );
}

fn prompt_path(prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

async fn upload_document(client: &DocintelClient, session: &mut Session, path: &Path) {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            render::error_banner(&format!("could not read {}: {e}", path.display()));
            return;
        }
    };

    println!("{}", "Uploading…".bright_blue());
    match client.upload_document(&file_name, bytes).await {
        Ok(upload) => {
            render::notice(&format!("Uploaded {file_name} (doc {})", upload.doc_id));
            session.set_document(file_name, upload.doc_id);
        }
        Err(e) => render::error_banner(&e.to_string()),
    }
}

fn import_schema_file(session: &mut Session, path: &Path) {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            render::error_banner(&format!("could not read {}: {e}", path.display()));
            return;
        }
    };

    // Import failures leave the current field list untouched.
    match import_from_json(&raw) {
        Ok(import) => {
            let count = import.fields.len();
            session.apply_import(import);
            render::notice(&format!("Imported {count} field(s) from {}", path.display()));
        }
        Err(e) => render::error_banner(&format!("schema import failed: {e}")),
    }
}

async fn run_extraction(client: &DocintelClient, session: &mut Session) {
    let Some(doc_id) = session.doc_id.clone() else {
        render::error_banner("Please upload a document first.");
        return;
    };

    let built = build(&session.fields);
    if built.is_empty() {
        render::error_banner(&ValidationError::NoValidFields.to_string());
        return;
    }

    println!("{}", "Analyzing document…".bright_blue());
    match client
        .extract(&doc_id, &built.schema, session.batch_extraction)
        .await
    {
        Ok(result) => {
            if !has_any_extracted_value(&result.extraction) {
                session.clear_result();
                render::soft_warning(
                    "The document was processed but no values were found. \
                     Refine the field descriptions and try again.",
                );
                return;
            }
            session.set_result(result);
            show_result(session);
        }
        Err(e) => render::error_banner(&e.to_string()),
    }
}

fn show_result(session: &Session) {
    if let Some(result) = &session.result {
        println!();
        render::metadata(&result.metadata);
        render::rows(&to_display_rows(result, &session.expanded));
    }
}

fn view_results(session: &mut Session) -> Result<()> {
    if session.result.is_none() {
        render::soft_warning("No extraction results yet. Upload a document and run an extraction first.");
        return Ok(());
    }

    loop {
        let (metadata, rows) = {
            let Some(result) = &session.result else { break };
            (
                result.metadata.clone(),
                to_display_rows(result, &session.expanded),
            )
        };
        println!();
        render::metadata(&metadata);
        render::rows(&rows);

        let long_rows: Vec<_> = rows.iter().filter(|r| r.is_long).collect();
        if long_rows.is_empty() {
            break;
        }

        let mut items: Vec<String> = long_rows
            .iter()
            .map(|row| {
                if row.expanded {
                    format!("▲ Collapse {}", row.key)
                } else {
                    format!("▼ Expand {}", row.key)
                }
            })
            .collect();
        items.push("⬅ Back".to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Long values")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;
        if selection == items.len() - 1 {
            break;
        }
        let key = long_rows[selection].key.clone();
        session.toggle_row(&key);
    }
    Ok(())
}
