//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`state`]**: [`UiState`], the panes, focus and current layout of one run
//! - **[`pane`]**: the pane model and its single-line editing buffer
//! - **[`app`]**: the event loop; resize events go to the layout engine and
//!   key presses to the router
//! - **[`events`]**: where events come from (the terminal, or a script in tests)
//! - **[`panes`]**: stateless render functions
//! - **[`screen`]**: entering and leaving the alternate screen
//! - **[`theme`]**: centralized color palette
//!
//! [`UiState`]: state::UiState

pub mod app;
pub mod events;
pub mod pane;
pub mod panes;
pub mod screen;
pub mod state;
pub mod theme;

pub use app::App;
pub use events::{CrosstermEvents, EventSource, ScriptedEvents};
