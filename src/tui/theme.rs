//! Colors and styles for the TUI.
//!
//! The theme is owned by [`App`](super::app::App) and handed to the drawing
//! code, so every view reads the same palette.

use ratatui::style::{Color, Modifier, Style};

use crate::model::{Priority, Status};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Status colors
    pub status_active: Color,
    pub status_done: Color,
    pub status_archived: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    pub id: Color,
    pub tags: Color,
    pub timestamp: Color,

    // Modal colors
    pub modal_border_delete: Color,
    pub modal_border_create: Color,
    pub modal_cursor: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_search: (Color, Color),
    pub mode_create: (Color, Color),
    pub mode_delete: (Color, Color),
    pub mode_detail: (Color, Color),

    pub row_highlight_bg: Color,
    pub message: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai color scheme
        Self {
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),
            text_highlight: Color::Rgb(248, 248, 242),

            status_active: Color::Rgb(166, 226, 46),   // Green
            status_done: Color::Rgb(102, 217, 239),    // Blue
            status_archived: Color::Rgb(117, 113, 94), // Muted

            priority_high: Color::Rgb(249, 38, 114),    // Pink/red
            priority_medium: Color::Rgb(230, 219, 116), // Yellow
            priority_low: Color::Rgb(117, 113, 94),     // Muted

            id: Color::Rgb(166, 226, 46),
            tags: Color::Rgb(174, 129, 255),
            timestamp: Color::Rgb(117, 113, 94),

            modal_border_delete: Color::Rgb(249, 38, 114),
            modal_border_create: Color::Rgb(102, 217, 239),
            modal_cursor: Color::Rgb(102, 217, 239),

            mode_normal: (Color::Rgb(102, 217, 239), Color::Rgb(39, 40, 34)),
            mode_search: (Color::Rgb(230, 219, 116), Color::Rgb(39, 40, 34)),
            mode_create: (Color::Rgb(166, 226, 46), Color::Rgb(39, 40, 34)),
            mode_delete: (Color::Rgb(249, 38, 114), Color::Rgb(248, 248, 242)),
            mode_detail: (Color::Rgb(174, 129, 255), Color::Rgb(248, 248, 242)),

            row_highlight_bg: Color::Rgb(73, 72, 62),
            message: Color::Rgb(166, 226, 46),

            help_key: Color::Rgb(102, 217, 239),
            help_border: Color::Rgb(230, 219, 116),
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Active => self.status_active,
            Status::Done => self.status_done,
            Status::Archived => self.status_archived,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.priority_high,
            Priority::Medium => self.priority_medium,
            Priority::Low => self.priority_low,
        }
    }

    /// Style for the highlighted table row
    pub fn row_highlight_style(&self) -> Style {
        Style::default()
            .bg(self.row_highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Footer badge for a mode label
    pub fn mode_style(&self, colors: (Color, Color)) -> Style {
        Style::default()
            .bg(colors.0)
            .fg(colors.1)
            .add_modifier(Modifier::BOLD)
    }
}
