use super::{handlers, theme::Theme, ui};
use crate::{
    config::{NotebookConfig, TuiSettings},
    error::{NotebookError, Result},
    model::{Note, Priority, Status},
    query,
    storage::NoteRepository,
};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::TableState};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
    CreateForm,
    DeleteConfirm,
    DetailView,
}

/// Fields of the add form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Content,
    Priority,
    Status,
    Tags,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Priority,
            FormField::Priority => FormField::Status,
            FormField::Status => FormField::Tags,
            FormField::Tags => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Tags,
            FormField::Content => FormField::Title,
            FormField::Priority => FormField::Content,
            FormField::Status => FormField::Priority,
            FormField::Tags => FormField::Status,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormField::Title | FormField::Content | FormField::Tags)
    }
}

/// Values typed into the add form
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub status: Status,
    pub tags: String,
    pub field: FormField,
}

impl CreateForm {
    pub fn new(priority: Priority, status: Status) -> Self {
        Self {
            priority,
            status,
            ..Self::default()
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Content => Some(&mut self.content),
            FormField::Tags => Some(&mut self.tags),
            FormField::Priority | FormField::Status => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(text) = self.active_text_mut() {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(text) = self.active_text_mut() {
            text.pop();
        }
    }

    /// Step the priority or status selector by one.
    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            FormField::Priority => {
                self.priority = step(&Priority::ALL, self.priority, forward);
            }
            FormField::Status => {
                self.status = step(&Status::ALL, self.status, forward);
            }
            _ => {}
        }
    }

    /// Comma-separated tags as typed, split into raw values.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split(',').collect()
    }
}

fn step<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let new_idx = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[new_idx]
}

pub struct App {
    pub repo: NoteRepository,
    pub theme: Theme,
    pub settings: TuiSettings,
    pub default_priority: Priority,
    pub default_status: Status,
    pub all_notes: Vec<Note>,
    pub filtered_notes: Vec<Note>,
    pub selected_index: usize,
    pub table_state: TableState,
    pub detail_scroll: u16,
    pub input_mode: InputMode,
    pub search_query: String,
    pub form: CreateForm,
    pub show_help: bool,
    pub message: Option<String>,
}

impl App {
    pub fn new(repo: NoteRepository, config: &NotebookConfig) -> Self {
        let defaults = &config.notebook;
        let mut app = Self {
            repo,
            theme: Theme::default(),
            settings: config.tui.clone(),
            default_priority: defaults.default_priority,
            default_status: defaults.default_status,
            all_notes: Vec::new(),
            filtered_notes: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            form: CreateForm::new(defaults.default_priority, defaults.default_status),
            show_help: false,
            message: None,
        };
        app.refresh();
        app
    }

    /// Reload every note from disk. When the file cannot be fully read, the
    /// readable notes are shown along with a message.
    pub fn refresh(&mut self) {
        match self.repo.load() {
            Ok(notes) => self.all_notes = notes,
            Err(e) => {
                self.all_notes = self.repo.get_all();
                self.message = Some(e.to_string());
            }
        }
        self.apply_filter();
    }

    pub fn apply_filter(&mut self) {
        self.filtered_notes = self
            .all_notes
            .iter()
            .filter(|n| query::matches_keyword(n, &self.search_query))
            .cloned()
            .collect();

        let count = self.filtered_notes.len();
        if count == 0 {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            if self.selected_index >= count {
                self.selected_index = count - 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.filtered_notes.get(self.selected_index)
    }

    pub fn next(&mut self) {
        let count = self.filtered_notes.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn previous(&mut self) {
        let count = self.filtered_notes.len();
        if count > 0 {
            self.selected_index = if self.selected_index == 0 {
                count - 1
            } else {
                self.selected_index - 1
            };
            self.table_state.select(Some(self.selected_index));
        }
    }

    pub fn first(&mut self) {
        if !self.filtered_notes.is_empty() {
            self.selected_index = 0;
            self.table_state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        if let Some(last) = self.filtered_notes.len().checked_sub(1) {
            self.selected_index = last;
            self.table_state.select(Some(last));
        }
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.apply_filter();
    }

    pub fn open_create_form(&mut self) {
        self.form = CreateForm::new(self.default_priority, self.default_status);
        self.input_mode = InputMode::CreateForm;
    }

    pub fn open_detail(&mut self) {
        if self.selected_note().is_some() {
            self.detail_scroll = 0;
            self.input_mode = InputMode::DetailView;
        }
    }

    pub fn open_delete_confirm(&mut self) {
        if self.selected_note().is_some() {
            self.input_mode = InputMode::DeleteConfirm;
        }
    }

    /// Save the add form as a new note. On failure the form stays open with a message.
    pub fn submit_form(&mut self) {
        if self.form.title.trim().is_empty() || self.form.content.trim().is_empty() {
            self.message = Some("Fill in title and content".to_string());
            return;
        }

        match self.create_from_form() {
            Ok(id) => {
                self.input_mode = InputMode::Normal;
                self.form = CreateForm::new(self.default_priority, self.default_status);
                self.message = Some(format!("Note added with ID: {}", id));
                self.refresh();
                self.select_id(id);
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn create_from_form(&self) -> Result<u64> {
        let mut note = Note::new(&self.form.title, &self.form.content)?
            .with_priority(self.form.priority)
            .with_status(self.form.status)
            .with_tags(self.form.tag_list());
        self.repo.save(&mut note)?;
        note.id
            .ok_or_else(|| NotebookError::StorageWrite("Saved note has no ID".to_string()))
    }

    /// Delete the selected note after confirmation.
    pub fn delete_selected(&mut self) {
        self.input_mode = InputMode::Normal;
        let Some(id) = self.selected_note().and_then(|n| n.id) else {
            return;
        };

        match self.repo.delete(id) {
            Ok(()) => {
                self.message = Some(format!("Deleted note {}", id));
                self.refresh();
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn select_id(&mut self, id: u64) {
        if let Some(pos) = self.filtered_notes.iter().position(|n| n.id == Some(id)) {
            self.selected_index = pos;
            self.table_state.select(Some(pos));
        }
    }
}

pub fn run_tui(config: NotebookConfig, repo: NoteRepository) -> Result<()> {
    enable_raw_mode()?;
    let res = run_in_terminal(config, repo);
    let restored = restore_terminal(&mut io::stdout());

    res?;
    restored?;
    Ok(())
}

fn run_in_terminal(config: NotebookConfig, repo: NoteRepository) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(repo, &config);
    run_app(&mut terminal, &mut app)?;
    Ok(())
}

/// Leave raw mode and the alternate screen and show the cursor. Safe to call
/// when setup stopped partway.
fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, Show)?;
    raw
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handlers::handle_key_event(app, key) {
                return Ok(());
            }
        }
    }
}
