//! Injected console sink used by every component that talks to the user.
//!
//! The orchestrator, harness, and reporter never print directly. They emit
//! styled lines through the [`Console`] trait, so rendering is decoupled from
//! the logic producing it: production code uses [`TerminalConsole`], tests
//! capture output with [`BufferConsole`].

use owo_colors::{OwoColorize, Style};

/// Semantic style of an emitted line. The console decides how (and whether)
/// to colorize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Unstyled text.
    Plain,
    /// Positive results (passed tests, final success trailer).
    Ok,
    /// Recoverable problems (ignored tests, parse and count warnings).
    Warn,
    /// Failures, crashes, and timeouts.
    Error,
    /// INFO lines echoed from suite output.
    Info,
}

/// Line-oriented output sink.
///
/// Each `emit` call writes exactly one line; pass an empty string for a
/// blank line.
pub trait Console {
    fn emit(&mut self, text: &str, style: StyleKind);
}

/// Style table for terminal output.
///
/// All fields default to no-op styles; `colorize()` switches them on. This
/// keeps every call site free of `if colorized` branches.
#[derive(Debug, Default)]
struct Styles {
    ok: Style,
    warn: Style,
    error: Style,
    info: Style,
}

impl Styles {
    fn colorize(&mut self) {
        self.ok = Style::new().bright_green();
        self.warn = Style::new().bright_yellow();
        self.error = Style::new().bright_red();
        self.info = Style::new().bright_cyan();
    }

    fn for_kind(&self, kind: StyleKind) -> Style {
        match kind {
            StyleKind::Plain => Style::new(),
            StyleKind::Ok => self.ok,
            StyleKind::Warn => self.warn,
            StyleKind::Error => self.error,
            StyleKind::Info => self.info,
        }
    }
}

/// Console that prints to stdout, optionally with ANSI colors.
#[derive(Debug)]
pub struct TerminalConsole {
    styles: Styles,
}

impl TerminalConsole {
    /// Create a terminal console. `colorize` should be false when stdout is
    /// not a terminal or the user asked for plain output.
    pub fn new(colorize: bool) -> Self {
        let mut styles = Styles::default();
        if colorize {
            styles.colorize();
        }
        Self { styles }
    }
}

impl Console for TerminalConsole {
    fn emit(&mut self, text: &str, style: StyleKind) {
        println!("{}", text.style(self.styles.for_kind(style)));
    }
}

/// Console that records every emitted line, for tests and programmatic use.
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: Vec<(String, StyleKind)>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// All emitted lines with their styles, in emission order.
    pub fn lines(&self) -> &[(String, StyleKind)] {
        &self.lines
    }

    /// The emitted text joined with newlines, styles discarded.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (line, _) in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Console for BufferConsole {
    fn emit(&mut self, text: &str, style: StyleKind) {
        self.lines.push((text.to_string(), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_records_lines() {
        let mut console = BufferConsole::new();
        console.emit("hello", StyleKind::Plain);
        console.emit("bad", StyleKind::Error);
        console.emit("", StyleKind::Plain);

        assert_eq!(console.lines().len(), 3);
        assert_eq!(console.lines()[1], ("bad".to_string(), StyleKind::Error));
        assert_eq!(console.text(), "hello\nbad\n\n");
    }

    #[test]
    fn test_terminal_console_does_not_panic() {
        let mut console = TerminalConsole::new(true);
        console.emit("styled", StyleKind::Ok);
        let mut console = TerminalConsole::new(false);
        console.emit("plain", StyleKind::Warn);
    }
}
