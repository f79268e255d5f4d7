//! Error types for layout, key routing and terminal setup
//!
//! Configuration and backend errors are fatal: `main` reports them once and
//! exits. [`UnknownPaneError`] is recoverable: the event loop logs it, drops
//! the event and keeps running.

use thiserror::Error;

/// Invalid configuration detected before any layout is computed.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A grid row whose column spans do not add up to the grid width.
    #[error("grid row {row} spans {total} columns, expected {expected}")]
    RowSpan {
        row: usize,
        total: u16,
        expected: u16,
    },

    /// A grid column with a zero span.
    #[error("grid row {row}, column {column} has a zero span")]
    ZeroSpan { row: usize, column: usize },

    /// A grid column with no panes assigned to it.
    #[error("grid row {row}, column {column} has no panes")]
    EmptyColumn { row: usize, column: usize },

    /// The same pane placed twice in a layout.
    #[error("pane '{0}' appears more than once in the layout")]
    DuplicatePane(String),

    /// A layout size parameter that must be positive.
    #[error("{name} must be greater than zero")]
    ZeroSize { name: &'static str },

    /// A pane could not be created at startup.
    #[error("cannot create pane: {0}")]
    PaneCreation(String),

    /// Two bindings for the same scope and key chord.
    #[error("duplicate binding for '{key}' in scope {scope}")]
    DuplicateBinding { scope: String, key: String },

    /// A key chord string that cannot be parsed.
    #[error("invalid key chord '{0}'")]
    InvalidKey(String),

    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The terminal cannot hold the layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Terminal dimensions below the policy minimum.
    #[error("terminal is {width}x{height}, layout needs at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// A grid pane laid out without a height set by the caller.
    #[error("no height set for grid pane '{0}'")]
    MissingHeight(String),
}

/// A key action referenced a pane that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pane '{0}'")]
pub struct UnknownPaneError(pub String);

/// The terminal could not be prepared for drawing.
#[derive(Error, Debug)]
#[error("failed to initialize terminal: {0}")]
pub struct BackendInitError(#[from] pub std::io::Error);

/// Top-level error for running the console.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendInitError),

    /// I/O failure while the event loop is running.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, Error>;
