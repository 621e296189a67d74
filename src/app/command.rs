//! Command parsing for the command line

/// Parsed command from the command line (command-palette analogue)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the current selection to Readwise: :send
    Send,
    /// Open the settings panel: :settings
    Settings,
    /// Show help: :help or :h
    Help,
    /// Quit the application: :q or :quit
    Quit,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    match input.to_lowercase().as_str() {
        "send" => ParseResult::Ok(Command::Send),
        "settings" | "set" => ParseResult::Ok(Command::Settings),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        other => ParseResult::UnknownCommand(other.to_string()),
    }
}
