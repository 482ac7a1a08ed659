//! Terminal control for the banner display.
//!
//! Control sequences (clear screen, window title) are only emitted when the
//! output is an interactive terminal; piped or redirected output receives
//! the plain text block.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;

/// A writer plus the capability to send it control sequences.
pub struct Screen<W: Write> {
    out: W,
    interactive: bool,
}

impl Screen<io::Stdout> {
    /// Screen over stdout. Interactive only when stdout is a tty.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_tty();
        Self { out, interactive }
    }
}

impl<W: Write> Screen<W> {
    #[cfg(test)]
    fn with_writer(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Clear the screen and home the cursor. No-op on non-interactive output.
    pub fn clear(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Set the window title. No-op on non-interactive output.
    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        // OSC 2: ESC ] 2 ; <title> BEL
        write!(self.out, "\x1b]2;{}\x07", title)?;
        self.out.flush()
    }

    /// Write the text block followed by a trailing newline.
    pub fn print_block(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}
