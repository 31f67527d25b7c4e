/// User-facing console output.
///
/// Every step of the harness writes its status lines through a `Console`.
/// The binary echoes to stdout; tests use a capturing console and assert on
/// the collected lines.

#[derive(Debug, Default)]
pub struct Console {
    echo: bool,
    lines: Vec<String>,
}

impl Console {
    /// Console that prints each line to stdout as it is written.
    pub fn stdout() -> Self {
        Self {
            echo: true,
            lines: Vec::new(),
        }
    }

    /// Console that only records lines.
    pub fn capture() -> Self {
        Self::default()
    }

    /// Echoing consoles print and forget; capturing consoles record.
    pub fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.echo {
            println!("{}", text);
        } else {
            self.lines.push(text);
        }
    }

    /// Empty line, used to separate sections.
    pub fn blank(&mut self) {
        self.line("");
    }

    /// Recorded lines. Always empty for `Console::stdout()`.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}
