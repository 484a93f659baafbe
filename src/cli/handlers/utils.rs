use crate::model::{Note, Priority, Status};
use crate::query::{EXCERPT_LENGTH, excerpt};
use crate::validation;
use anyhow::Result;
use colored::Colorize;

/// Parse a note ID given on the command line
pub fn parse_id(input: &str) -> Result<u64> {
    Ok(validation::parse_id(input)?)
}

/// Format priority with color coding
pub fn format_priority(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "high".red().bold(),
        Priority::Medium => "medium".yellow(),
        Priority::Low => "low".dimmed(),
    }
}

/// Format status with color coding
pub fn format_status(status: Status) -> colored::ColoredString {
    match status {
        Status::Active => "active".green(),
        Status::Done => "done".blue(),
        Status::Archived => "archived".dimmed(),
    }
}

fn format_id(note: &Note) -> String {
    note.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One summary line: `[id] title | priority | status | date`
pub fn note_line(note: &Note) -> String {
    format!(
        "{} {} | {} | {} | {}",
        format!("[{}]", format_id(note)).cyan(),
        note.title.bold(),
        format_priority(note.priority),
        format_status(note.status),
        note.date().dimmed()
    )
}

/// Print a single note with details
pub fn print_note(note: &Note) {
    println!("{} {}", format!("[{}]", format_id(note)).cyan().bold(), note.title.bold());
    println!("Priority: {}", format_priority(note.priority));
    println!("Status:   {}", format_status(note.status));
    if !note.tags.is_empty() {
        println!("Tags:     {}", note.tags.join(", ").magenta());
    }
    println!("Created:  {}", note.created_at.dimmed());
    println!();
    println!("{}", note.content);
}

/// Print a list of notes (one line each)
pub fn print_note_list(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in notes {
        println!("{}", note_line(note));
    }
}

/// Print search hits with a content excerpt under each line
pub fn print_search_results(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for note in notes {
        println!("{}", note_line(note));
        let preview = excerpt(&note.content, EXCERPT_LENGTH).replace('\n', " ");
        println!("    {}", preview.dimmed());
    }
}
