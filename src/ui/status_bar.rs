//! Status bar at the bottom of the screen
//!
//! Shows the command line while one is being typed, otherwise the most
//! recent notice, otherwise a key hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::line_with_cursor;
use crate::app::state::{AppState, Mode};
use crate::theme::Theme;

/// Draw the status bar
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = match state.mode {
        Mode::Command => {
            let text = format!(":{}", state.command.value);
            let style = Style::default().fg(theme.accent_primary);
            line_with_cursor(&text, state.command.cursor + 1, style, theme) // +1 for prefix
        }
        _ => {
            if let Some(ref msg) = state.notice.message {
                let style = if state.notice.is_error {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.success)
                };
                Line::from(Span::styled(msg.clone(), style))
            } else {
                let hint = if state.viewer.selection().is_some() {
                    "s send highlight · v/Esc clear selection"
                } else {
                    "v select · s send · : commands · ? help · q quit"
                };
                Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted)))
            }
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
