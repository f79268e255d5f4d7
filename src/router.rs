//! Key-event router
//!
//! Bindings map a [`Scope`] and [`KeyChord`] to an [`Action`]. Global
//! bindings are consulted first, whatever pane has focus; pane bindings only
//! apply while their pane is focused. Keys with no binding are reported as
//! [`Dispatch::Unbound`] so the caller can treat them as text input.

use crate::error::{ConfigError, UnknownPaneError};
use crate::keys::KeyChord;
use crate::ui::state::UiState;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What a binding does when its chord is pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Stop the event loop
    Quit,
    /// Append the source pane's buffer to the target pane and clear the source
    CommitInput { source: String, target: String },
}

/// Where a binding applies
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Pane(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Pane(name) => write!(f, "pane '{}'", name),
        }
    }
}

/// Result of routing one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Quit,
    Committed { target: String, lines: usize },
    Unbound,
}

/// At most one action per scope and chord
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    global: FxHashMap<KeyChord, Action>,
    panes: FxHashMap<String, FxHashMap<KeyChord, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, scope: Scope, chord: KeyChord, action: Action) -> Result<(), ConfigError> {
        let table = match &scope {
            Scope::Global => &mut self.global,
            Scope::Pane(name) => self.panes.entry(name.clone()).or_default(),
        };
        if table.contains_key(&chord) {
            return Err(ConfigError::DuplicateBinding {
                scope: scope.to_string(),
                key: chord.to_string(),
            });
        }
        table.insert(chord, action);
        Ok(())
    }

    /// Find the action for a chord given the focused pane
    pub fn resolve(&self, chord: &KeyChord, focused: Option<&str>) -> Option<&Action> {
        self.global.get(chord).or_else(|| {
            focused
                .and_then(|name| self.panes.get(name))
                .and_then(|table| table.get(chord))
        })
    }

    pub fn len(&self) -> usize {
        self.global.len() + self.panes.values().map(|t| t.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Route a key chord and carry out the bound action against `state`.
///
/// An action naming a missing pane fails with [`UnknownPaneError`] and
/// leaves every buffer untouched.
pub fn dispatch(
    chord: KeyChord,
    state: &mut UiState,
    bindings: &KeyBindings,
) -> Result<Dispatch, UnknownPaneError> {
    let Some(action) = bindings.resolve(&chord, state.focus()) else {
        return Ok(Dispatch::Unbound);
    };
    debug!(key = %chord, ?action, "dispatching");

    match action {
        Action::Quit => Ok(Dispatch::Quit),
        Action::CommitInput { source, target } => {
            let lines = state.commit(source, target)?;
            Ok(Dispatch::Committed {
                target: target.clone(),
                lines,
            })
        }
    }
}
