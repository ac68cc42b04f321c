//! Blocking stdin prompts for the interactive menu.
//!
//! End of input surfaces as `io::ErrorKind::UnexpectedEof` so the menu loop
//! can exit cleanly from any nested prompt.

use crate::ui::{settings, Renderer};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::ExecutableCommand;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Show `prompt` and read one trimmed line from stdin.
pub fn read_line(renderer: &Renderer, prompt: &str) -> io::Result<String> {
    renderer.prompt(prompt);
    io::stderr().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Interpret a y/n answer; anything else is `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question until a valid answer is given.
pub fn confirm(renderer: &Renderer, question: &str) -> io::Result<bool> {
    let prompt = format!("{question}{}", settings::PROMPT_YES_NO_SUFFIX.trim_end());
    loop {
        let answer = read_line(renderer, &prompt)?;
        if let Some(decision) = parse_yes_no(&answer) {
            return Ok(decision);
        }
        renderer.warn("Choose 'y' for yes, 'n' for no.");
    }
}

/// Block until a single key is pressed (or a line is entered off-TTY).
pub fn wait_any_key(renderer: &Renderer) -> io::Result<()> {
    renderer.detail(settings::PRESS_ANY_KEY);
    if !io::stdin().is_terminal() {
        return read_trimmed_line(&mut io::stdin().lock()).map(|_| ());
    }

    let _guard = RawModeGuard::acquire()?;
    loop {
        if !event::poll(Duration::from_millis(settings::KEY_EVENT_POLL_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Clear the terminal and home the cursor. No-op when stderr is not a TTY.
pub fn clear_screen() -> io::Result<()> {
    let mut stderr = io::stderr();
    if !stderr.is_terminal() {
        return Ok(());
    }
    stderr.execute(Clear(ClearType::All))?;
    stderr.execute(MoveTo(0, 0))?;
    Ok(())
}

/// Enables raw mode for its lifetime so single keystrokes are delivered.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
