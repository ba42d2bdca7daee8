//! Shared styling helpers for CLI output.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Where styled text is written; color is used only when it is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn should_color(self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

pub fn success(stream: Stream, text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if stream.should_color() {
        format!("{}", text.green())
    } else {
        text.to_string()
    }
}

pub fn error(stream: Stream, text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if stream.should_color() {
        format!("{}", text.red().bold())
    } else {
        text.to_string()
    }
}

/// Styles a `file:line:column` location.
pub fn location(stream: Stream, text: impl AsRef<str>) -> String {
    let text = text.as_ref();
    if stream.should_color() {
        format!("{}", text.cyan())
    } else {
        text.to_string()
    }
}
