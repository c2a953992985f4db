//! REPL command parsing.

use thiserror::Error;

/// Slash commands offered for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/add", "/name", "/type", "/serial", "/assignee", "/submit", "/form", "/search", "/list",
    "/delete", "/edit", "/save", "/cancel", "/help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Header action: show or hide the add form.
    ToggleForm,
    SetName(String),
    SetType(String),
    SetSerial(String),
    SetAssignee(String),
    Submit,
    ShowForm,
    /// Empty string clears the search.
    Search(String),
    List,
    Delete(String),
    Edit(String),
    Save,
    Cancel,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Usage: {0}")]
    MissingArgument(&'static str),
    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parses a command line. Returns `Ok(None)` for input that is not a
    /// command (no leading `/` and not `quit`/`exit`).
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let trimmed = line.trim();

        if trimmed == "quit" || trimmed == "exit" {
            return Ok(Some(Command::Quit));
        }

        let Some(body) = line.trim_start().strip_prefix('/') else {
            return Ok(None);
        };

        // Only the single separator is dropped; free-text values keep their
        // spacing.
        let (name, arg) = match body.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg),
            None => (body, ""),
        };

        let required = |usage: &'static str| -> Result<String, ParseError> {
            let value = arg.trim();
            if value.is_empty() {
                Err(ParseError::MissingArgument(usage))
            } else {
                Ok(value.to_string())
            }
        };

        let command = match name {
            "add" => Command::ToggleForm,
            "name" => Command::SetName(arg.to_string()),
            "type" => Command::SetType(required(
                "/type <laptop|smartphone|monitor|headphones|other>",
            )?),
            "serial" => Command::SetSerial(arg.to_string()),
            "assignee" => Command::SetAssignee(arg.to_string()),
            "submit" => Command::Submit,
            "form" => Command::ShowForm,
            "search" => Command::Search(arg.to_string()),
            "list" => Command::List,
            "delete" => Command::Delete(required("/delete <row|id>")?),
            "edit" => Command::Edit(required("/edit <row|id>")?),
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseError::Unknown(format!("/{}", name))),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(Command::parse("Jane Doe").unwrap(), None);
        assert_eq!(Command::parse("").unwrap(), None);
    }

    #[test]
    fn test_free_text_arguments_kept_as_typed() {
        assert_eq!(
            Command::parse("/name MacBook Pro 2023").unwrap(),
            Some(Command::SetName("MacBook Pro 2023".to_string()))
        );
        assert_eq!(
            Command::parse("/assignee  Jane Doe ").unwrap(),
            Some(Command::SetAssignee(" Jane Doe ".to_string()))
        );
        assert_eq!(
            Command::parse("/serial").unwrap(),
            Some(Command::SetSerial(String::new()))
        );
        assert_eq!(
            Command::parse("/search").unwrap(),
            Some(Command::Search(String::new()))
        );
    }

    #[test]
    fn test_required_arguments() {
        assert_eq!(
            Command::parse("/delete").unwrap_err(),
            ParseError::MissingArgument("/delete <row|id>")
        );
        assert_eq!(
            Command::parse("/edit  2 ").unwrap(),
            Some(Command::Edit("2".to_string()))
        );
    }

    #[test]
    fn test_quit_and_unknown() {
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("/quit").unwrap(), Some(Command::Quit));
        assert_eq!(
            Command::parse("/frobnicate now").unwrap_err(),
            ParseError::Unknown("/frobnicate".to_string())
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for command in COMMANDS {
            let line = format!("{} 1", command);
            assert!(Command::parse(&line).unwrap().is_some(), "{command}");
        }
    }
}
