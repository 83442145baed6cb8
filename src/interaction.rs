//! User-facing gates and acknowledgments.
//!
//! Deleting an entry waits on a [`Confirm`] answer, and every commit or
//! delete produces exactly one [`Notification`] through a [`Notifier`].

use std::fmt;
use std::io::{self, BufRead, Write};

/// A yes/no question put to the user.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Asks on a line-oriented terminal, re-asking until the answer is
/// recognisable. An empty answer takes `default`.
///
/// # Examples
///
/// ```
/// use moodlog::interaction::{Confirm, TerminalPrompt};
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut prompt = TerminalPrompt::new(Cursor::new("maybe\ny\n"), &mut out, false);
/// assert!(prompt.confirm("Delete?").unwrap());
/// ```
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    default: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, default: bool) -> Self {
        TerminalPrompt {
            input,
            output,
            default,
        }
    }
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(default: bool) -> Self {
        TerminalPrompt::new(io::stdin().lock(), io::stdout(), default)
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let suffix = if self.default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {} ", question, suffix)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                // Closed input never answers yes.
                return Ok(false);
            }

            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(self.default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }
}

/// Answers every question the same way, as `--yes` does.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A one-shot message about the outcome of a commit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order; the CLI prints them after the operation.
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}
