//! User-interaction capability.
//!
//! Confirmations, free-text prompts and blocking notices go through [`UserPrompt`]
//! so the core never talks to a terminal or window directly.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Blocking questions the core can put to the user.
pub trait UserPrompt {
    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
    /// Asks for a line of text. `None` means the user cancelled.
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;
    /// Shows a message that needs no answer.
    fn notify(&mut self, message: &str);
}

/// Prompts on a line-oriented terminal.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. `None` on EOF or read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> UserPrompt for ConsolePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let _ = write!(self.output, "{} [y/N] ", message);
        let _ = self.output.flush();
        matches!(
            self.read_line().map(|l| l.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        )
    }

    /// An empty answer keeps `default`; a lone `.` cancels.
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String> {
        let _ = write!(self.output, "{} [{}] ", message, default);
        let _ = self.output.flush();
        let line = self.read_line()?;
        match line.as_str() {
            "." => None,
            "" => Some(default.to_string()),
            _ => Some(line),
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.output, "! {}", message);
        let _ = self.output.flush();
    }
}

/// Answers queued ahead of time. Unanswered confirmations are declined and
/// unanswered text prompts are cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    confirmations: VecDeque<bool>,
    texts: VecDeque<Option<String>>,
    pub notices: Vec<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirmation(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn with_text(mut self, answer: Option<&str>) -> Self {
        self.texts.push_back(answer.map(str::to_string));
        self
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn prompt_text(&mut self, message: &str, _default: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.texts.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
