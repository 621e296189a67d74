//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// A fixed-size rect centered in the given area, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw a message centered in the area
pub fn draw_empty_message(frame: &mut Frame, area: Rect, theme: &Theme, message: &str) {
    let style = Style::default().fg(theme.fg_muted).bg(theme.bg_primary);
    let placeholder = Paragraph::new(message).style(style).alignment(Alignment::Center);
    frame.render_widget(placeholder, area);
}

/// Draw the help overlay
pub fn draw_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(46, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary).fg(theme.fg_primary));

    let lines: Vec<Line> = [
        "",
        "  j/k        move cursor",
        "  g/G        first/last line",
        "  Ctrl-d/u   half page down/up",
        "  v          start/stop selection",
        "  s          send selection to Readwise",
        "  :send      same as s",
        "  :settings  configure API token",
        "  :q         quit",
        "",
        "  Press any key to close",
    ]
    .iter()
    .map(|s| Line::from(*s))
    .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
