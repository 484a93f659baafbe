use super::app::{App, FormField};
use super::ui_utils;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw_delete_confirm(f: &mut Frame, app: &App) {
    let area = ui_utils::centered_rect(50, 25, f.area());
    let t = &app.theme;

    let note_info = match app.selected_note() {
        Some(note) => format!(
            "[{}] {}",
            note.id.map(|id| id.to_string()).unwrap_or_default(),
            note.title
        ),
        None => "No note selected".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this note?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(note_info, Style::default().fg(t.id))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(t.status_active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/Enter = Yes    "),
            Span::styled(
                "n",
                Style::default()
                    .fg(t.modal_border_delete)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("/Esc = No"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Delete Confirmation ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_delete)),
        )
        .alignment(Alignment::Center);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_create_form(f: &mut Frame, app: &App) {
    let area = ui_utils::centered_rect(60, 50, f.area());
    let t = &app.theme;
    let form = &app.form;

    let field_line = |field: FormField, label: &'static str, value: Span<'static>| {
        let active = form.field == field;
        let label_style = if active {
            Style::default().fg(t.modal_cursor)
        } else {
            Style::default().fg(t.text)
        };
        let mut spans = vec![
            Span::styled(if active { "▶ " } else { "  " }, Style::default().fg(t.modal_cursor)),
            Span::styled(label, label_style.add_modifier(Modifier::BOLD)),
            value,
        ];
        if active && field.is_text() {
            spans.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
        }
        Line::from(spans)
    };

    let text_value = |value: &str, placeholder: &'static str| {
        if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(t.text_muted))
        } else {
            Span::raw(value.to_string())
        }
    };

    let mut content = vec![
        Line::from(""),
        field_line(
            FormField::Title,
            "Title:    ",
            text_value(&form.title, "Enter title..."),
        ),
        Line::from(""),
        field_line(
            FormField::Content,
            "Content:  ",
            text_value(&form.content, "Enter content..."),
        ),
        Line::from(""),
        field_line(
            FormField::Priority,
            "Priority: ",
            Span::styled(
                format!("< {} >", form.priority),
                Style::default().fg(t.priority_color(form.priority)),
            ),
        ),
        Line::from(""),
        field_line(
            FormField::Status,
            "Status:   ",
            Span::styled(
                format!("< {} >", form.status),
                Style::default().fg(t.status_color(form.status)),
            ),
        ),
        Line::from(""),
        field_line(
            FormField::Tags,
            "Tags:     ",
            text_value(&form.tags, "comma, separated"),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "  (use ←/→ to change priority and status)",
            Style::default().fg(t.text_muted),
        )),
    ];

    if let Some(ref msg) = app.message {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("  {}", msg),
            Style::default()
                .fg(t.modal_border_delete)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Add Note ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.modal_border_create)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

pub fn draw_help_popup(f: &mut Frame, app: &App) {
    let area = ui_utils::centered_rect(50, 60, f.area());
    let t = &app.theme;

    let bindings = [
        ("↑/k ↓/j", "Move selection"),
        ("g / G", "First / last note"),
        ("/", "Search title and content"),
        ("Esc", "Clear search"),
        ("Enter", "Open note"),
        ("a", "Add note"),
        ("d", "Delete note"),
        ("r", "Reload from disk"),
        ("?", "Toggle help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(bindings.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(
                format!("  {:<10}", key),
                Style::default().fg(t.help_key).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(t.text)),
        ])
    }));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(t.help_border)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
