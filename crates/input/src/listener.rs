//! Blocking input listener on its own OS thread.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event};
use tracing::{debug, warn};

use crate::map::map_event;
use crate::types::Signal;

/// Read events with `next_event` and hand mapped signals to `emit`.
///
/// Returns after emitting Quit, when `emit` reports that nobody is listening
/// any more, or after a read error (which is logged and turned into Quit).
pub fn listen<E, N>(mut emit: E, mut next_event: N)
where
    E: FnMut(Signal) -> bool,
    N: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match next_event() {
            Ok(event) => event,
            Err(error) => {
                warn!(%error, "terminal input failed, quitting");
                emit(Signal::Quit);
                return;
            }
        };

        let Some(signal) = map_event(&event) else {
            continue;
        };
        debug!(signal = signal.as_str(), "input");
        if !emit(signal) || signal == Signal::Quit {
            return;
        }
    }
}

/// Spawn [`listen`] over `crossterm::event::read` on a named thread.
pub fn spawn_listener<E>(emit: E) -> io::Result<JoinHandle<()>>
where
    E: FnMut(Signal) -> bool + Send + 'static,
{
    thread::Builder::new()
        .name("smudge-input".into())
        .spawn(move || listen(emit, event::read))
}
