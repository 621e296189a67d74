//! Settings panel with the Readwise API token field

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{layout, line_with_cursor};
use crate::app::state::SettingsForm;
use crate::theme::Theme;

/// Draw the settings panel over the viewer
pub fn draw(frame: &mut Frame, form: &SettingsForm, theme: &Theme) {
    let area = layout::centered_rect(60, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary).fg(theme.fg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Readwise API token",
            Style::default().fg(theme.accent_primary),
        ))),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Saved as you type",
            Style::default().fg(theme.fg_muted),
        ))),
        rows[1],
    );

    let line = line_with_cursor(
        &form.token.value,
        form.token.cursor,
        Style::default().fg(theme.fg_primary),
        theme,
    );
    frame.render_widget(Paragraph::new(line), rows[3]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Esc close",
            Style::default().fg(theme.fg_muted),
        ))),
        rows[4],
    );
}
