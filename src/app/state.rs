//! Application state definitions

use crate::document::{Document, SelectionRange};
use crate::workflow::{HighlightDetails, SubmissionWorkflow};

/// Which input surface currently owns the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Reading/navigating the document
    #[default]
    Normal,
    /// Typing a : command
    Command,
    /// The highlight details modal is open
    Details,
    /// The settings panel is open
    Settings,
    /// The help overlay is open
    Help,
}

/// A single-line text input with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current value
    pub value: String,
    /// Cursor position as a character index
    pub cursor: usize,
}

impl TextInput {
    /// Create an input pre-filled with a value, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.value.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.value.len())
    }

    /// Get the number of characters in the value
    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    /// Delete the character at the cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.value.remove(byte_idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Which field of the details form is focused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailField {
    #[default]
    Title,
    Author,
    Category,
}

/// The highlight details form (the detail collector's state)
///
/// Three free-text fields, no validation; empty values pass through to the
/// submission unchanged. Consumed on submit via [`DetailForm::into_details`].
#[derive(Debug, Clone, Default)]
pub struct DetailForm {
    pub title: TextInput,
    pub author: TextInput,
    pub category: TextInput,
    pub focus: DetailField,
}

impl DetailForm {
    /// The currently focused input
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            DetailField::Title => &mut self.title,
            DetailField::Author => &mut self.author,
            DetailField::Category => &mut self.category,
        }
    }

    /// Move focus to the next field, wrapping
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            DetailField::Title => DetailField::Author,
            DetailField::Author => DetailField::Category,
            DetailField::Category => DetailField::Title,
        };
    }

    /// Move focus to the previous field, wrapping
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            DetailField::Title => DetailField::Category,
            DetailField::Author => DetailField::Title,
            DetailField::Category => DetailField::Author,
        };
    }

    /// Consume the form into the collected field values
    pub fn into_details(self) -> HighlightDetails {
        HighlightDetails {
            title: self.title.value,
            author: self.author.value,
            category: self.category.value,
        }
    }
}

/// The settings panel's state
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    /// API token field, bound to `Settings::api_token`
    pub token: TextInput,
}

/// Transient status message shown in the status bar
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    pub message: Option<String>,
    pub is_error: bool,
}

impl NoticeState {
    /// Set an informational notice
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error notice
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the notice
    pub fn clear(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

/// State for the document viewer
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Cursor line index
    pub cursor_line: usize,
    /// First visible line
    pub scroll_offset: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
    /// Anchor line of the active visual selection, if any
    pub visual_anchor: Option<usize>,
}

impl ViewerState {
    /// Start or restart a visual selection at the cursor
    pub fn start_selection(&mut self) {
        self.visual_anchor = Some(self.cursor_line);
    }

    /// Drop the visual selection
    pub fn clear_selection(&mut self) {
        self.visual_anchor = None;
    }

    /// The active selection range, if a visual selection is in progress
    pub fn selection(&self) -> Option<SelectionRange> {
        self.visual_anchor.map(|anchor| SelectionRange::new(anchor, self.cursor_line))
    }

    /// Move the cursor down, clamped to the document
    pub fn move_down(&mut self, line_count: usize, by: usize) {
        let max = line_count.saturating_sub(1);
        self.cursor_line = (self.cursor_line + by).min(max);
        self.ensure_cursor_visible();
    }

    /// Move the cursor up
    pub fn move_up(&mut self, by: usize) {
        self.cursor_line = self.cursor_line.saturating_sub(by);
        self.ensure_cursor_visible();
    }

    /// Jump to the first line
    pub fn move_top(&mut self) {
        self.cursor_line = 0;
        self.ensure_cursor_visible();
    }

    /// Jump to the last line
    pub fn move_bottom(&mut self, line_count: usize) {
        self.cursor_line = line_count.saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Adjust scroll so the cursor stays on screen
    pub fn ensure_cursor_visible(&mut self) {
        if self.cursor_line < self.scroll_offset {
            self.scroll_offset = self.cursor_line;
        }
        let visible = self.visible_height.saturating_sub(1);
        if visible > 0 && self.cursor_line > self.scroll_offset + visible {
            self.scroll_offset = self.cursor_line - visible;
        }
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input mode
    pub mode: Mode,

    /// The loaded document
    pub document: Document,

    /// Viewer cursor/scroll/selection state
    pub viewer: ViewerState,

    /// Details modal state, present while the modal is open
    pub details: Option<DetailForm>,

    /// Settings panel state, present while the panel is open
    pub settings_form: Option<SettingsForm>,

    /// Command line input (after the :)
    pub command: TextInput,

    /// Status bar notice
    pub notice: NoticeState,

    /// Per-invocation submission state machine
    pub workflow: SubmissionWorkflow,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::default();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value, "abc");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn text_input_handles_multibyte_characters() {
        let mut input = TextInput::with_value("héllo");
        input.move_start();
        input.move_right();
        input.delete_char_forward();
        assert_eq!(input.value, "hllo");
    }

    #[test]
    fn text_input_backspace_at_start_is_a_noop() {
        let mut input = TextInput::with_value("a");
        input.move_start();
        input.delete_char();
        assert_eq!(input.value, "a");
    }

    #[test]
    fn detail_form_focus_cycles_through_fields() {
        let mut form = DetailForm::default();
        assert_eq!(form.focus, DetailField::Title);
        form.focus_next();
        assert_eq!(form.focus, DetailField::Author);
        form.focus_next();
        assert_eq!(form.focus, DetailField::Category);
        form.focus_next();
        assert_eq!(form.focus, DetailField::Title);
        form.focus_prev();
        assert_eq!(form.focus, DetailField::Category);
    }

    #[test]
    fn detail_form_yields_field_values() {
        let mut form = DetailForm::default();
        form.title = TextInput::with_value("My Book");
        form.author = TextInput::with_value("Jane Doe");
        form.category = TextInput::with_value("books");

        let details = form.into_details();
        assert_eq!(details.title, "My Book");
        assert_eq!(details.author, "Jane Doe");
        assert_eq!(details.category, "books");
    }

    #[test]
    fn viewer_selection_spans_anchor_to_cursor() {
        let mut viewer = ViewerState { cursor_line: 4, ..Default::default() };
        viewer.start_selection();
        viewer.move_up(2);

        let range = viewer.selection().unwrap();
        assert_eq!(range.start(), 2);
        assert_eq!(range.end(), 4);
    }

    #[test]
    fn viewer_without_anchor_has_no_selection() {
        let viewer = ViewerState::default();
        assert!(viewer.selection().is_none());
    }

    #[test]
    fn cursor_movement_clamps_to_document() {
        let mut viewer = ViewerState::default();
        viewer.move_down(3, 10);
        assert_eq!(viewer.cursor_line, 2);
        viewer.move_up(10);
        assert_eq!(viewer.cursor_line, 0);
    }

    #[test]
    fn scroll_follows_the_cursor() {
        let mut viewer = ViewerState { visible_height: 5, ..Default::default() };
        viewer.move_down(100, 20);
        assert_eq!(viewer.cursor_line, 20);
        assert_eq!(viewer.scroll_offset, 16);
        viewer.move_up(20);
        assert_eq!(viewer.scroll_offset, 0);
    }
}
