//! # Introduction
//!
//! termpanes is a minimal three-pane terminal console: a `list` pane, an
//! editable `input` pane and an `output` pane. Pressing Enter in the input
//! pane commits its text to the output pane.
//!
//! ## Event flow
//!
//! ```text
//! terminal event ─┬─ resize ──→ layout engine ──→ pane rectangles ─┐
//!                 └─ key ─────→ router ─────────→ pane buffers ────┴─→ redraw
//! ```
//!
//! 1. [`layout`]: maps terminal dimensions to pane rectangles under a
//!    12-column grid or a fixed-margin policy.
//! 2. [`keys`] and [`router`]: key chords, bindings and the actions they
//!    trigger.
//! 3. [`ui`]: explicit UI state, the event loop and rendering.
//! 4. [`config`]: defaults, TOML overrides and the two layout variants.
//! 5. [`error`]: the error taxonomy.

pub mod cli;
pub mod config;
pub mod error;
pub mod keys;
pub mod layout;
pub mod router;
pub mod ui;
