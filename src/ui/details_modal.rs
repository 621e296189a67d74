//! Highlight details modal (the detail collector's rendering)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{layout, line_with_cursor};
use crate::app::state::{DetailField, DetailForm, TextInput};
use crate::theme::Theme;

/// Draw the details modal over the viewer
pub fn draw(frame: &mut Frame, form: &DetailForm, theme: &Theme) {
    let area = layout::centered_rect(54, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Highlight Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary).fg(theme.fg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .split(inner);

    draw_field(frame, rows[1], "Title", &form.title, form.focus == DetailField::Title, theme);
    draw_field(frame, rows[3], "Author", &form.author, form.focus == DetailField::Author, theme);
    draw_field(
        frame,
        rows[5],
        "Category (books, articles, tweets, podcasts)",
        &form.category,
        form.focus == DetailField::Category,
        theme,
    );

    let hint = Line::from(Span::styled(
        "Tab next field · Enter send · Esc cancel",
        Style::default().fg(theme.fg_muted),
    ));
    frame.render_widget(Paragraph::new(hint), rows[6]);
}

/// Draw one labeled input row
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let label_color = if focused { theme.accent_primary } else { theme.fg_muted };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(label_color),
        ))),
        rows[0],
    );

    let value_style = Style::default().fg(theme.fg_primary);
    let line = if focused {
        line_with_cursor(&input.value, input.cursor, value_style, theme)
    } else {
        Line::from(Span::styled(input.value.clone(), value_style))
    };
    frame.render_widget(Paragraph::new(line), rows[1]);
}
