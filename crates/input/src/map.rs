//! Line mapping from console input to view actions.

use crate::types::ViewAction;

/// What a line of console input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Action(ViewAction),
    /// Nothing but whitespace.
    Blank,
    /// Neither a number nor a known command; carries the trimmed text.
    Invalid(String),
}

/// Map one line of console input.
///
/// Integers become attempts (range checks belong to the model), and the
/// commands `r`/`reset` and `q`/`quit`/`exit` are matched case-insensitively.
pub fn handle_line(line: &str) -> InputCommand {
    let text = line.trim();
    if text.is_empty() {
        return InputCommand::Blank;
    }
    if let Ok(guess) = text.parse::<i32>() {
        return InputCommand::Action(ViewAction::NewAttempt(guess));
    }
    match text.to_lowercase().as_str() {
        "r" | "reset" => InputCommand::Action(ViewAction::ResetGame),
        "q" | "quit" | "exit" => InputCommand::Action(ViewAction::Quit),
        _ => InputCommand::Invalid(text.to_string()),
    }
}
