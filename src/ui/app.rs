//! Main TUI application state and logic

use super::events::EventSource;
use super::pane::Pane;
use super::panes::{render_pane, render_too_small};
use super::state::{PaneCreation, UiState};
use crate::config::Console;
use crate::error::ConfigError;
use crate::keys::KeyChord;
use crate::layout::{Dimensions, INPUT_PANE};
use crate::router::{self, Dispatch, KeyBindings};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use tracing::{debug, info, warn};

/// The main application state
pub struct App {
    /// Panes, focus and layout
    pub state: UiState,

    /// Key bindings, fixed for the run
    pub bindings: KeyBindings,

    /// Supplies per-pane heights before each layout
    console: Console,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the panes, fill the list and lay everything out for `dimensions`
    pub fn new(console: Console, dimensions: Dimensions) -> Result<Self, ConfigError> {
        let mut state = UiState::new(console.policy.clone(), dimensions);

        for spec in &console.panes {
            let mut pane = Pane::new(spec.name, spec.title, spec.color, spec.editable);
            pane.push_lines(spec.lines.iter().cloned());
            match state.create_pane(pane) {
                PaneCreation::Created => {}
                PaneCreation::AlreadyExists => debug!(pane = spec.name, "pane already exists"),
                PaneCreation::Failed(reason) => return Err(ConfigError::PaneCreation(reason)),
            }
        }

        let focus = state
            .panes()
            .iter()
            .find(|p| p.editable)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| INPUT_PANE.to_string());
        if let Err(e) = state.set_focus(&focus) {
            warn!(error = %e, "no pane to focus");
        }

        let mut app = App {
            state,
            bindings: console.bindings.clone(),
            console,
            should_quit: false,
        };
        app.resize(dimensions);
        Ok(app)
    }

    /// Run the TUI application until quit or the event source runs dry
    pub fn run<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match events.next_event()? {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        info!("event loop finished");
        Ok(())
    }

    /// Set grid heights for the new size, then recompute every rectangle
    pub fn resize(&mut self, dimensions: Dimensions) {
        for (name, height) in self.console.pane_heights(dimensions) {
            if let Err(e) = self.state.set_pane_height(name, height) {
                warn!(error = %e, "cannot size pane");
            }
        }
        // Failures are kept in the state and drawn as a notice
        let _ = self.state.resize(dimensions);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Resize(width, height) => self.resize(Dimensions::new(width, height)),
            Event::Paste(text) => {
                if let Some(pane) = self.state.focused_pane_mut().filter(|p| p.editable) {
                    pane.insert_str(&text);
                }
            }
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let chord = KeyChord::from(key);

        match router::dispatch(chord, &mut self.state, &self.bindings) {
            Ok(Dispatch::Quit) => {
                info!(key = %chord, "quit requested");
                self.should_quit = true;
            }
            Ok(Dispatch::Committed { target, lines }) => {
                debug!(%target, lines, "committed input");
            }
            Ok(Dispatch::Unbound) => self.edit(chord),
            Err(e) => {
                warn!(error = %e, key = %chord, "dropping key event");
            }
        }
    }

    /// Unbound keys edit the focused pane, if it is editable
    fn edit(&mut self, chord: KeyChord) {
        let Some(pane) = self.state.focused_pane_mut().filter(|p| p.editable) else {
            return;
        };
        if let Some(c) = chord.typed_char() {
            pane.insert_char(c);
        } else if chord.code == KeyCode::Backspace {
            pane.backspace();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Never draw rectangles computed for another size
        if Dimensions::from(area) != self.state.dimensions() {
            self.resize(Dimensions::from(area));
        }

        if let Some(err) = self.state.layout_error() {
            render_too_small(frame, area, err);
            return;
        }

        let focus = self.state.focus();
        for pane in self.state.panes() {
            let rect = pane.rect().intersection(area);
            render_pane(frame, rect, pane, focus == Some(pane.name()));
        }
    }
}
