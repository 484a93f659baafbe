use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle CreateForm mode key events
pub fn handle_create_form(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.field = app.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.field = app.form.field.prev();
        }
        KeyCode::Left => app.form.cycle(false),
        KeyCode::Right => app.form.cycle(true),
        KeyCode::Char(' ') if !app.form.field.is_text() => app.form.cycle(true),
        KeyCode::Char(c) => app.form.push_char(c),
        KeyCode::Backspace => app.form.pop_char(),
        _ => {}
    }

    false
}
