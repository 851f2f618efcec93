//! Console input/output seam for the menu controller.
//!
//! [`TerminalConsole`] talks to the real terminal and waits for a single key
//! press using crossterm raw mode. [`LineConsole`] works over any buffered
//! reader and writer, consuming one line per acknowledgement; the binary uses
//! it when stdin is piped and the tests use it with in-memory buffers.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

/// What the menu controller needs from a console.
pub trait Console {
    /// Read one line without its trailing newline; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Block until the user acknowledges a result.
    fn wait_for_key(&mut self) -> io::Result<()>;

    /// Clear the visible screen, if the console has one.
    fn clear(&mut self) -> io::Result<()>;

    /// Writer for all rendered output.
    fn out(&mut self) -> &mut dyn Write;
}

/// Strip a trailing `\n` or `\r\n`.
fn chomp(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

// ── TerminalConsole ───────────────────────────────────────────────────────────

/// Interactive console on the process's stdin/stdout.
pub struct TerminalConsole {
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(chomp(line)))
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        // Restore cooked mode even when reading the event fails.
        let result = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;
        result
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

// ── LineConsole ───────────────────────────────────────────────────────────────

/// Line-oriented console over arbitrary reader/writer pairs.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer, e.g. to inspect captured output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(chomp(line)))
    }

    /// Consume one line; end of input also counts as an acknowledgement.
    fn wait_for_key(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
