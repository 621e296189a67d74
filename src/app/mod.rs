//! Application state and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::document::Document;
use crate::readwise::{Client, ReadwiseError};
use crate::theme::Theme;
use crate::ui;
use crate::workflow::{BeginAction, SubmissionOutcome, SubmissionWorkflow};
use command::{Command, ParseResult};
use input::Action;
use state::{AppState, DetailForm, Mode, SettingsForm, TextInput};

/// Events delivered back to the draw loop from spawned tasks
#[derive(Debug)]
pub enum AppEvent {
    /// An outbound submission resolved
    SubmissionFinished(Result<(), ReadwiseError>),
}

/// The main application
pub struct App {
    /// Persisted settings (the Readwise token lives here)
    settings: Settings,

    /// Current application state
    state: AppState,

    /// Active theme
    theme: Theme,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Sender handed to spawned submission tasks
    events_tx: mpsc::Sender<AppEvent>,

    /// Receiver drained by the draw loop
    events_rx: mpsc::Receiver<AppEvent>,
}

impl App {
    /// Create a new application instance
    pub fn new(settings: Settings, document: Document) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let (events_tx, events_rx) = mpsc::channel(16);

        Ok(Self {
            settings,
            state: AppState { document, ..Default::default() },
            theme: Theme::default(),
            terminal,
            events_tx,
            events_rx,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI
            let state = &mut self.state;
            let theme = &self.theme;
            self.terminal.draw(|frame| {
                ui::draw(frame, state, theme);
            })?;

            // Resolved submissions arrive over the channel
            while let Ok(app_event) = self.events_rx.try_recv() {
                self.handle_app_event(app_event);
            }

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                            }
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.state.mode {
            Mode::Normal => self.handle_viewer_key(key),
            Mode::Command => self.handle_command_key(key),
            Mode::Details => {
                self.handle_details_key(key);
                Ok(false)
            }
            Mode::Settings => {
                self.handle_settings_key(key);
                Ok(false)
            }
            Mode::Help => {
                // Any key closes the help overlay
                self.state.mode = Mode::Normal;
                Ok(false)
            }
        }
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) -> Result<bool> {
        let Some(action) = input::key_with_modifier_to_action(key.code, key.modifiers) else {
            return Ok(false);
        };

        let lines = self.state.document.line_count();
        match action {
            Action::Down => self.state.viewer.move_down(lines, 1),
            Action::Up => self.state.viewer.move_up(1),
            Action::Top => self.state.viewer.move_top(),
            Action::Bottom => self.state.viewer.move_bottom(lines),
            Action::HalfPageDown => {
                let by = (self.state.viewer.visible_height / 2).max(1);
                self.state.viewer.move_down(lines, by);
            }
            Action::HalfPageUp => {
                let by = (self.state.viewer.visible_height / 2).max(1);
                self.state.viewer.move_up(by);
            }
            Action::ToggleVisual => {
                self.state.notice.clear();
                if self.state.viewer.selection().is_some() {
                    self.state.viewer.clear_selection();
                } else {
                    self.state.viewer.start_selection();
                }
            }
            Action::ClearSelection => {
                self.state.viewer.clear_selection();
                self.state.notice.clear();
            }
            Action::SendHighlight => self.invoke_send(),
            Action::CommandMode => {
                self.state.notice.clear();
                self.state.command.clear();
                self.state.mode = Mode::Command;
            }
            Action::Help => self.state.mode = Mode::Help,
            Action::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Entry point for the highlight action, shared by `s` and `:send`
    ///
    /// Captures the selection as it stands right now; later edits to the
    /// selection do not affect a submission already in the details stage.
    fn invoke_send(&mut self) {
        let selection = self
            .state
            .viewer
            .selection()
            .map(|range| self.state.document.selection_text(range))
            .unwrap_or_default();

        // Fresh machine per invocation; an earlier in-flight submission
        // keeps running on its own task and reports through the channel.
        self.state.workflow = SubmissionWorkflow::new();
        match self.state.workflow.begin(&selection) {
            BeginAction::CollectDetails => {
                self.state.details = Some(DetailForm::default());
                self.state.mode = Mode::Details;
            }
            BeginAction::Reject(outcome) => {
                self.state.notice.set_error(outcome.notice());
            }
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Dismissal is silent: no request, no notice
                self.state.details = None;
                self.state.workflow.cancel();
                self.state.mode = Mode::Normal;
                return;
            }
            KeyCode::Enter => {
                self.submit_details();
                return;
            }
            _ => {}
        }

        let Some(form) = self.state.details.as_mut() else {
            self.state.mode = Mode::Normal;
            return;
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Char(c) => form.focused_input_mut().insert_char(c),
            KeyCode::Backspace => form.focused_input_mut().delete_char(),
            KeyCode::Delete => form.focused_input_mut().delete_char_forward(),
            KeyCode::Left => form.focused_input_mut().move_left(),
            KeyCode::Right => form.focused_input_mut().move_right(),
            KeyCode::Home => form.focused_input_mut().move_start(),
            KeyCode::End => form.focused_input_mut().move_end(),
            _ => {}
        }
    }

    /// The detail collector fired: build the draft and issue the request
    fn submit_details(&mut self) {
        let Some(form) = self.state.details.take() else {
            return;
        };
        self.state.mode = Mode::Normal;
        self.state.viewer.clear_selection();

        let Some(draft) = self.state.workflow.submit_details(form.into_details()) else {
            return;
        };

        let client = Client::new(self.settings.api_token.clone());
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.send(draft).await;
            let _ = tx.send(AppEvent::SubmissionFinished(result)).await;
        });
    }

    fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::SubmissionFinished(result) => {
                // A newer invocation may already own the machine; this
                // request's outcome is surfaced either way.
                let outcome = if self.state.workflow.is_submitting() {
                    self.state.workflow.complete(result)
                } else {
                    SubmissionOutcome::from_send_result(result)
                };

                if outcome.is_error() {
                    self.state.notice.set_error(outcome.notice());
                } else {
                    self.state.notice.set_message(outcome.notice());
                }
            }
        }
    }

    fn open_settings(&mut self) {
        self.state.settings_form =
            Some(SettingsForm { token: TextInput::with_value(self.settings.api_token.clone()) });
        self.state.mode = Mode::Settings;
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.state.settings_form = None;
            self.state.mode = Mode::Normal;
            return;
        }

        let Some(form) = self.state.settings_form.as_mut() else {
            self.state.mode = Mode::Normal;
            return;
        };

        let changed = match key.code {
            KeyCode::Char(c) => {
                form.token.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                form.token.delete_char();
                true
            }
            KeyCode::Delete => {
                form.token.delete_char_forward();
                true
            }
            KeyCode::Left => {
                form.token.move_left();
                false
            }
            KeyCode::Right => {
                form.token.move_right();
                false
            }
            KeyCode::Home => {
                form.token.move_start();
                false
            }
            KeyCode::End => {
                form.token.move_end();
                false
            }
            _ => false,
        };

        if changed {
            let value = form.token.value.clone();
            self.commit_token(value);
        }
    }

    /// Persist the token; the settings field commits on every change
    fn commit_token(&mut self, value: String) {
        self.settings.api_token = value;
        if let Err(e) = self.settings.save() {
            tracing::error!("Failed to save settings: {:#}", e);
            self.state.notice.set_error("Failed to save settings");
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc => {
                self.state.command.clear();
                self.state.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let line = self.state.command.value.clone();
                self.state.command.clear();
                self.state.mode = Mode::Normal;
                return Ok(self.execute_command(&line));
            }
            KeyCode::Char(c) => self.state.command.insert_char(c),
            KeyCode::Backspace => {
                if self.state.command.value.is_empty() {
                    self.state.mode = Mode::Normal;
                } else {
                    self.state.command.delete_char();
                }
            }
            KeyCode::Delete => self.state.command.delete_char_forward(),
            KeyCode::Left => self.state.command.move_left(),
            KeyCode::Right => self.state.command.move_right(),
            KeyCode::Home => self.state.command.move_start(),
            KeyCode::End => self.state.command.move_end(),
            _ => {}
        }
        Ok(false)
    }

    /// Execute a parsed command, returns true if should exit
    fn execute_command(&mut self, line: &str) -> bool {
        match command::parse_command(line) {
            ParseResult::Ok(Command::Send) => self.invoke_send(),
            ParseResult::Ok(Command::Settings) => self.open_settings(),
            ParseResult::Ok(Command::Help) => self.state.mode = Mode::Help,
            ParseResult::Ok(Command::Quit) => return true,
            ParseResult::Ok(Command::Nop) => self.state.notice.clear(),
            ParseResult::UnknownCommand(cmd) => {
                self.state.notice.set_error(format!("Unknown command: {}", cmd));
            }
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
