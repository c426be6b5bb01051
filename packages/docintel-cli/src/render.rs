//! Terminal rendering of health, errors, metadata, and result rows.

use colored::Colorize;
use docintel::{ConfidenceTier, DisplayRow, ExtractionMetadata};
use docintel_client::HealthStatus;

/// Collapsed long values show at most this many characters of their first line.
pub const PREVIEW_WIDTH: usize = 100;

pub fn banner() {
    println!("{}", "╔══════════════════════════════════════╗".bright_cyan());
    println!("{}", "║        Document Intelligence         ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════╝".bright_cyan());
    println!();
}

pub fn health(status: &HealthStatus) {
    if status.is_ok() {
        println!("  {} backend is {}", "✓".bright_green(), status.status);
    } else {
        let detail = status.message.as_deref().unwrap_or("no detail");
        println!(
            "  {} backend status: {} ({})",
            "!".bright_yellow(),
            status.status,
            detail
        );
    }
}

pub fn health_error(message: &str) {
    println!("  {} backend unreachable: {}", "✗".bright_red(), message);
}

/// Red banner for a failed action, in the page's "Something went wrong" style.
pub fn error_banner(message: &str) {
    println!();
    println!("{}", "Something went wrong".bright_red().bold());
    println!("  {}", message.red());
}

pub fn notice(message: &str) {
    println!("{}", message.bright_green());
}

/// Guidance after a technically-successful action with nothing to show.
pub fn soft_warning(message: &str) {
    println!("{}", message.bright_yellow());
}

pub fn metadata(metadata: &ExtractionMetadata) {
    println!("{}", "Metadata".bold());
    println!(
        "  {:<18} {:.1}%",
        "Confidence".dimmed(),
        metadata.confidence * 100.0
    );
    println!("  {:<18} {}", "Fields found".dimmed(), metadata.fields_found);
    println!(
        "  {:<18} {:.1}s",
        "Processing time".dimmed(),
        metadata.processing_time
    );
    let review = if metadata.requires_review {
        "yes".bright_yellow().bold().to_string()
    } else {
        "no".bright_green().to_string()
    };
    println!("  {:<18} {}", "Review required".dimmed(), review);
    println!();
}

pub fn rows(rows: &[DisplayRow]) {
    println!("{}", "Extraction Results".bold());
    for row in rows {
        println!();
        println!(
            "  {}  {} {}   {} {}",
            row.key.bold(),
            "confidence:".dimmed(),
            tier_badge(row.confidence_tier),
            "source:".dimmed(),
            source_badge(row.source_page),
        );
        match &row.display_value {
            None => println!("    {}", "Not found".dimmed().italic()),
            Some(value) if row.is_long && !row.expanded => {
                println!("    {} {}", preview_line(value), "[+]".dimmed());
            }
            Some(value) => {
                for line in value.lines() {
                    println!("    {line}");
                }
            }
        }
    }
    println!();
}

fn tier_badge(tier: ConfidenceTier) -> String {
    match tier {
        ConfidenceTier::High => "high".bright_green().to_string(),
        ConfidenceTier::Medium => "medium".bright_yellow().to_string(),
        ConfidenceTier::Low => "low".bright_red().to_string(),
        ConfidenceTier::Unknown => "—".dimmed().to_string(),
    }
}

fn source_badge(page: Option<u64>) -> String {
    match page {
        Some(page) => format!("Page {page}"),
        None => "—".dimmed().to_string(),
    }
}

/// First line of a collapsed value, cut to [`PREVIEW_WIDTH`] characters,
/// with an ellipsis whenever anything was cut away.
pub fn preview_line(value: &str) -> String {
    let first_line = value.lines().next().unwrap_or_default();
    let preview: String = first_line.chars().take(PREVIEW_WIDTH).collect();
    if preview.chars().count() < value.chars().count() {
        format!("{preview}…")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_single_line() {
        assert_eq!(preview_line("short value"), "short value");
    }

    #[test]
    fn test_preview_truncates_long_line() {
        let long = "x".repeat(150);
        let preview = preview_line(&long);
        assert_eq!(preview.chars().count(), PREVIEW_WIDTH + 1);
        assert!(preview.ends_with('…'));
    }

    #[test]
    fn test_preview_marks_multiline_values() {
        let preview = preview_line("first line\nsecond line");
        assert_eq!(preview, "first line…");
    }
}
