//! Interactive field-list editor.
//!
//! Blank rows may sit in the list while the user is still typing; they are
//! only filtered out at build time, never here.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use docintel::{FieldDescriptor, FieldType};

pub fn edit_fields(fields: &mut Vec<FieldDescriptor>) -> Result<()> {
    loop {
        println!();
        print_fields(fields);

        let options = [
            "➕ Add field",
            "✏️  Edit field",
            "🗑  Remove field",
            "✅ Done",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Extraction fields")
            .items(&options)
            .default(3)
            .interact()?;

        match selection {
            0 => fields.push(prompt_field(&FieldDescriptor::blank())?),
            1 => {
                let idx = pick_field(fields, "Edit which field?")?;
                fields[idx] = prompt_field(&fields[idx].clone())?;
            }
            2 => {
                // The editor always keeps at least one row on screen.
                if fields.len() <= 1 {
                    println!("{}", "Keeping the last field row.".bright_yellow());
                } else {
                    let idx = pick_field(fields, "Remove which field?")?;
                    fields.remove(idx);
                }
            }
            3 => break,
            _ => unreachable!(),
        }
    }
    Ok(())
}

fn print_fields(fields: &[FieldDescriptor]) {
    println!("{}", "Fields".bold());
    for (idx, field) in fields.iter().enumerate() {
        let mark = if field.is_valid() {
            "✓".bright_green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        println!(
            "  {} {:>2}. {:<20} {:<14} {}",
            mark,
            idx + 1,
            display_or(&field.name, "(unnamed)"),
            field.field_type.label(),
            display_or(&field.description, "(no description)"),
        );
    }
}

fn display_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.dimmed().to_string()
    } else {
        value.to_string()
    }
}

fn pick_field(fields: &[FieldDescriptor], prompt: &str) -> Result<usize> {
    let labels: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(idx, f)| format!("{}. {}", idx + 1, display_or(&f.name, "(unnamed)")))
        .collect();
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?)
}

fn prompt_field(initial: &FieldDescriptor) -> Result<FieldDescriptor> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Field name (e.g. loan_amount)")
        .with_initial_text(&initial.name)
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Description (e.g. Total sanctioned loan amount)")
        .with_initial_text(&initial.description)
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = FieldType::ALL.iter().map(|t| t.label()).collect();
    let default = FieldType::ALL
        .iter()
        .position(|t| *t == initial.field_type)
        .unwrap_or(0);
    let type_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Value type")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(FieldDescriptor::new(name, description, FieldType::ALL[type_idx]))
}
