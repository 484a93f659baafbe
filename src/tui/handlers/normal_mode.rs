use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else if !app.search_query.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Home | KeyCode::Char('g') => app.first(),
        KeyCode::End | KeyCode::Char('G') => app.last(),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Filter;
        }
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_confirm(),
        KeyCode::Char('r') => {
            app.refresh();
            if app.message.is_none() {
                app.message = Some("Refreshed".to_string());
            }
        }
        _ => {}
    }

    false
}
