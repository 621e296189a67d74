//! Document viewer component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout;
use crate::app::state::AppState;
use crate::theme::Theme;

/// Draw the document viewer
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let title = state
        .document
        .path
        .file_name()
        .map(|name| format!(" {} ", name.to_string_lossy()))
        .unwrap_or_else(|| " marginalia ".to_string());

    let border_color =
        if state.viewer.selection().is_some() { theme.border_focused } else { theme.border };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Update visible height for scroll calculations
    state.viewer.visible_height = inner.height as usize;
    state.viewer.ensure_cursor_visible();

    if state.document.lines.is_empty() {
        layout::draw_empty_message(frame, inner, theme, "Empty document");
        return;
    }

    let selection = state.viewer.selection();
    let start = state.viewer.scroll_offset;
    let end = (start + inner.height as usize).min(state.document.line_count());

    let lines: Vec<Line> = (start..end)
        .map(|idx| {
            let selected = selection.map(|range| range.contains(idx)).unwrap_or(false);
            let is_cursor = idx == state.viewer.cursor_line;

            let mut style = Style::default().fg(theme.fg_primary);
            if selected {
                style = style.bg(theme.selection);
            }
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
                if !selected {
                    style = style.bg(theme.bg_secondary);
                }
            }

            Line::from(Span::styled(state.document.lines[idx].clone(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
