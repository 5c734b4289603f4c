//! Prints raw terminal events and the signal each one maps to.
//!
//! Handy for checking what a terminal actually sends for Esc, Ctrl-C and
//! Space. Quits on the first Quit signal.

use anyhow::Result;
use crossterm::{event, terminal};

use smudge::input::listen;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    print!("Press keys (Esc/q/Ctrl-C quits, Space/b reignites)\r\n");

    listen(
        |signal| {
            print!("  -> {}\r\n", signal.as_str());
            true
        },
        || {
            let ev = event::read()?;
            print!("{ev:?}\r\n");
            Ok(ev)
        },
    );

    terminal::disable_raw_mode()?;
    Ok(())
}
