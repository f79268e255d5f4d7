//! Alternate screen and bracketed paste for the lifetime of a run

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

pub fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableBracketedPaste)
}

pub fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
}

/// Pass `result` through, first leaving the alternate screen and raw mode
/// if it is an error.
///
/// Cleanup failures are ignored so the original error is the one reported.
pub fn rollback_on_err<T, W: Write>(result: io::Result<T>, out: &mut W) -> io::Result<T> {
    if result.is_err() {
        let _ = leave(out);
        let _ = disable_raw_mode();
    }
    result
}
