//! TerminalRenderer: flushes animation frames to a real terminal.
//!
//! Every draw is a full redraw from the home position. Frames are encoded into
//! an owned buffer first and written with a single `write_all`, so a frame never
//! reaches the terminal half-finished.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Frame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        self.flush_buf()
    }

    /// Draw one frame, preceded by `prelude` when given.
    pub fn draw(&mut self, prelude: Option<&str>, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(prelude, frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Enter the alternate screen with the cursor hidden.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Undo everything [`encode_enter_into`] did.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

/// Encode a full frame: cursor home, the prelude verbatim, then one line per row.
pub fn encode_frame_into(prelude: Option<&str>, frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    if let Some(text) = prelude {
        out.queue(Print(text))?;
        out.queue(Print("\r\n"))?;
    }
    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout;
    use crate::types::LayoutParams;

    fn text(buf: &[u8]) -> String {
        String::from_utf8_lossy(buf).into_owned()
    }

    #[test]
    fn frame_starts_at_home_and_prints_rows() {
        let frame = layout("A\nB", 1000, 3, &LayoutParams::default());
        let mut buf = Vec::new();
        encode_frame_into(None, &frame, &mut buf).unwrap();
        assert_eq!(text(&buf), "\x1b[1;1HA  \r\nB  \r\n");
    }

    #[test]
    fn prelude_comes_before_rows() {
        let frame = layout("x", 1000, 2, &LayoutParams::default());
        let mut buf = Vec::new();
        encode_frame_into(Some("Hello"), &frame, &mut buf).unwrap();
        assert_eq!(text(&buf), "\x1b[1;1HHello\r\nx \r\n");
    }

    #[test]
    fn enter_and_restore_are_symmetric() {
        let mut enter = Vec::new();
        encode_enter_into(&mut enter).unwrap();
        let enter = text(&enter);
        assert!(enter.contains("\x1b[?1049h"));
        assert!(enter.contains("\x1b[?25l"));

        let mut restore = Vec::new();
        encode_restore_into(&mut restore).unwrap();
        let restore = text(&restore);
        assert!(restore.contains("\x1b[?25h"));
        assert!(restore.ends_with("\x1b[?1049l"));
    }

    #[test]
    fn clear_homes_then_clears() {
        let mut buf = Vec::new();
        encode_clear_into(&mut buf).unwrap();
        assert_eq!(text(&buf), "\x1b[1;1H\x1b[2J");
    }
}
