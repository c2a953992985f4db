use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.commands.iter().filter(move |cmd| cmd.starts_with(prefix))
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .matching(line)
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            _ if !line.starts_with('/') => Borrowed(line),
            Some((command, rest)) => Owned(format!("{} {}", command.bright_cyan(), rest)),
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.matching(line)
                .find(|cmd| cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_prefix() {
        let helper = CliHelper::new();
        let matches: Vec<&String> = helper.matching("/s").collect();
        assert_eq!(matches, vec!["/serial", "/submit", "/search", "/save"]);
    }

    #[test]
    fn test_highlight_leaves_plain_text() {
        let helper = CliHelper::new();
        assert_eq!(helper.highlight("Jane Doe", 0), "Jane Doe");
    }
}
