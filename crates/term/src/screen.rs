//! Screen: queued crossterm drawing for the round display.
//!
//! The drawing API is intentionally small and line-oriented. Commands are
//! queued into an internal buffer and flushed once per call, so each panel
//! appears atomically even on slow terminals.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, SetTitle},
    QueueableCommand,
};

use tui_reveal_core::GameSession;

pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Set the terminal window title.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetTitle(title))?;
        self.flush_buf()
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    /// Print one plain line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    /// The letters acted on so far, highlighted in yellow.
    pub fn reveal_log(&mut self, session: &GameSession) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetForegroundColor(Color::Yellow))?;
        self.buf
            .queue(Print(format!("Revealed: {}", session.reveal_log().join(" "))))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(Print("\r\n\r\n"))?;
        self.flush_buf()
    }

    /// All boards in order, completed ones in green.
    pub fn boards(&mut self, session: &GameSession) -> Result<()> {
        self.buf.clear();
        for view in session.views() {
            if view.complete {
                self.buf.queue(SetForegroundColor(Color::Green))?;
            }
            self.buf
                .queue(Print(format!("[{}] {}", view.index + 1, view.text)))?;
            if view.complete {
                self.buf.queue(ResetColor)?;
            }
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()
    }

    /// Reference panel with the full titles, for host/backend use.
    pub fn answers(&mut self, session: &GameSession) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("\r\nCorrect answers (for reference):\r\n"))?;
        for (i, secret) in session.secrets().iter().enumerate() {
            self.buf
                .queue(Print(format!("[{}] {}\r\n", i + 1, secret.title())))?;
        }
        self.flush_buf()
    }

    /// The per-round menu line, on the highlight background.
    pub fn menu(&mut self) -> Result<()> {
        self.highlighted("<single char> - reveal, :d <num> - complete a board, :q - quit")
    }

    /// Player feedback for an irregular round.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.line(text)
    }

    /// Final statistics, shown once the session has finished.
    pub fn stats(&mut self, rounds: u32, elapsed: Duration) -> Result<()> {
        self.highlighted(&format!(
            "Session statistics:\r\nTotal rounds: {rounds}\r\nTotal time: {}",
            format_elapsed(elapsed)
        ))?;
        self.line("Press any key to quit.")
    }

    fn highlighted(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetBackgroundColor(Color::DarkBlue))?;
        self.buf.queue(SetForegroundColor(Color::White))?;
        self.buf.queue(Print(text))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Format a duration as `h:mm:ss` for the statistics panel.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}
