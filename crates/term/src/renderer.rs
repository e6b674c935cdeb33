//! ConsoleRenderer: writes text frames to a terminal or any writer.
//!
//! Styling goes through crossterm commands queued into a byte buffer, so the
//! same encoder works for stdout and for in-memory writers in tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::frame::{TextFrame, Tone};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    pub fn draw(&mut self, frame: &TextFrame) -> Result<()> {
        self.buf.clear();
        encode_into(frame, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write `text` with no trailing newline and flush, so input follows it.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame into `out`, one line per entry.
///
/// This builds a sequence of crossterm commands without writing anywhere.
pub fn encode_into(frame: &TextFrame, color: bool, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Tone> = None;
    for line in frame.lines() {
        if color && current != Some(line.tone) {
            apply_tone_into(out, line.tone)?;
            current = Some(line.tone);
        }
        out.queue(Print(&line.text))?;
        out.queue(Print("\n"))?;
    }

    if color && current.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match tone_color(tone) {
        Some(color) => out.queue(SetForegroundColor(color))?,
        None => out.queue(ResetColor)?,
    };
    if tone == Tone::Title {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Title => Some(Color::Cyan),
        Tone::Success => Some(Color::Green),
        Tone::Error => Some(Color::Red),
        Tone::Accent => Some(Color::Yellow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextFrame {
        let mut frame = TextFrame::new();
        frame.push(Tone::Title, "title");
        frame.push(Tone::Error, "oops");
        frame
    }

    #[test]
    fn plain_encoding_has_no_escape_codes() {
        let mut buf = Vec::new();
        encode_into(&sample(), false, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "title\noops\n");
    }

    #[test]
    fn colored_encoding_wraps_text_in_escape_codes() {
        let mut buf = Vec::new();
        encode_into(&sample(), true, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("title\n"));
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with('m'));
    }

    #[test]
    fn renderer_writes_prompt_without_newline() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), false);
        renderer.draw(&sample()).unwrap();
        renderer.prompt("> ").unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "title\noops\n> ");
    }

    #[test]
    fn tone_colors() {
        assert_eq!(tone_color(Tone::Plain), None);
        assert_eq!(tone_color(Tone::Error), Some(Color::Red));
    }
}
