//! Terminal event sources

use crossterm::event::{self, Event};
use std::collections::VecDeque;
use std::io;

/// Supplies terminal events to the event loop
pub trait EventSource {
    /// Block until the next event. `None` means the source is exhausted.
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        event::read().map(Some)
    }
}

/// Replays a fixed list of events, then reports exhaustion
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        ScriptedEvents {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}
