use super::app::{App, InputMode};
use super::{ui_modals, ui_utils};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Table or detail
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    if app.input_mode == InputMode::DetailView {
        draw_detail_fullscreen(f, app, chunks[0]);
        draw_footer(f, app, chunks[1]);
        return;
    }

    draw_table(f, app, chunks[0]);
    draw_footer(f, app, chunks[1]);

    if app.show_help {
        ui_modals::draw_help_popup(f, app);
    }

    match app.input_mode {
        InputMode::CreateForm => ui_modals::draw_create_form(f, app),
        InputMode::DeleteConfirm => ui_modals::draw_delete_confirm(f, app),
        _ => {}
    }
}

fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    let t = &app.theme;
    let show_tags = app.settings.show_tags;

    let mut header_cells = vec!["ID", "Title", "Priority", "Status", "Date"];
    if show_tags {
        header_cells.push("Tags");
    }
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(t.text_muted)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .filtered_notes
        .iter()
        .map(|note| {
            let id = note.id.map(|id| id.to_string()).unwrap_or_default();
            let title = Line::from(ui_utils::highlight_search(
                &note.title,
                &app.search_query,
                Style::default().fg(t.text),
            ));
            let mut cells = vec![
                Cell::from(id).style(Style::default().fg(t.id)),
                Cell::from(title),
                Cell::from(note.priority.as_str())
                    .style(Style::default().fg(t.priority_color(note.priority))),
                Cell::from(note.status.as_str())
                    .style(Style::default().fg(t.status_color(note.status))),
                Cell::from(note.date()).style(Style::default().fg(t.timestamp)),
            ];
            if show_tags {
                cells.push(Cell::from(note.tags.join(", ")).style(Style::default().fg(t.tags)));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(10),
    ];
    if show_tags {
        widths.push(Constraint::Percentage(25));
    }

    let title = if app.search_query.is_empty() {
        format!(" {} ({}) ", app.settings.title, app.all_notes.len())
    } else {
        format!(
            " {} ({}/{}) ",
            app.settings.title,
            app.filtered_notes.len(),
            app.all_notes.len()
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(app.input_mode == InputMode::Normal)),
        )
        .row_highlight_style(t.row_highlight_style())
        .highlight_symbol("▶ ");

    if app.filtered_notes.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No notes found.",
            Style::default().fg(t.text_muted),
        )))
        .block(
            Block::default()
                .title(format!(" {} ", app.settings.title))
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(false)),
        );
        f.render_widget(empty, area);
        return;
    }

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_detail_fullscreen(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let Some(note) = app.selected_note() else {
        return;
    };

    let label = |name: &'static str| {
        Span::styled(
            format!("{:<10}", name),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            label("Priority"),
            Span::styled(
                note.priority.as_str(),
                Style::default().fg(t.priority_color(note.priority)),
            ),
        ]),
        Line::from(vec![
            label("Status"),
            Span::styled(
                note.status.as_str(),
                Style::default().fg(t.status_color(note.status)),
            ),
        ]),
    ];
    if !note.tags.is_empty() {
        lines.push(Line::from(vec![
            label("Tags"),
            Span::styled(note.tags.join(", "), Style::default().fg(t.tags)),
        ]));
    }
    lines.push(Line::from(vec![
        label("Created"),
        Span::styled(note.created_at.as_str(), Style::default().fg(t.timestamp)),
    ]));
    lines.push(Line::from(""));
    lines.extend(
        note.content
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(t.text)))),
    );

    let id = note.id.map(|id| id.to_string()).unwrap_or_default();
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" [{}] {} ", id, note.title))
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(true)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", t.mode_style(t.mode_normal)),
        InputMode::Filter => Span::styled(" SEARCH ", t.mode_style(t.mode_search)),
        InputMode::CreateForm => Span::styled(" ADD ", t.mode_style(t.mode_create)),
        InputMode::DeleteConfirm => Span::styled(" DELETE ", t.mode_style(t.mode_delete)),
        InputMode::DetailView => Span::styled(" DETAIL ", t.mode_style(t.mode_detail)),
    };

    let help_text = match app.input_mode {
        InputMode::Normal => " ↑↓:nav  /:search  Enter:open  a:add  d:delete  r:refresh  ?:help  q:quit ",
        InputMode::Filter => " Type to search, Enter:keep  Esc:clear ",
        InputMode::CreateForm => " Tab:next field  ←→:change  Enter:save  Esc:cancel ",
        InputMode::DeleteConfirm => " y/Enter:confirm  n/Esc:cancel ",
        InputMode::DetailView => " ↓/↑:scroll  d:delete  Esc/q:close ",
    };

    let mut footer_spans = vec![mode_indicator];

    if app.input_mode == InputMode::Filter || !app.search_query.is_empty() {
        footer_spans.push(Span::raw(" Search: "));
        footer_spans.push(Span::styled(
            app.search_query.as_str(),
            Style::default().fg(t.text_highlight),
        ));
        if app.input_mode == InputMode::Filter {
            footer_spans.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
        }
        footer_spans.push(Span::raw(" "));
    }

    if let Some(ref msg) = app.message {
        footer_spans.push(Span::raw(" "));
        footer_spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(t.message).add_modifier(Modifier::BOLD),
        ));
    }

    footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    f.render_widget(Paragraph::new(Line::from(footer_spans)), area);
}
