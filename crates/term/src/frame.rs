//! Minimal styled text buffer handed from the view to the renderer.

/// Semantic style of a line; the renderer picks the actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Plain,
    Title,
    Success,
    Error,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

/// A block of lines, rendered top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    lines: Vec<Line>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(Line {
            tone,
            text: text.into(),
        });
    }

    pub fn blank(&mut self) {
        self.push(Tone::Plain, "");
    }

    pub fn extend(&mut self, other: TextFrame) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text with one `\n` per line, for tests and logs.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}
