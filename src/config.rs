//! Console configuration and the two layout variants
//!
//! Everything has a built-in default; an optional TOML file can override
//! sizes, the list contents and add key bindings:
//!
//! ```toml
//! list_width = 24
//! input_height = 4
//! list_items = ["alpha", "beta"]
//!
//! [[bindings]]
//! key = "ctrl+q"
//! action = "quit"
//!
//! [[bindings]]
//! scope = "input"
//! key = "ctrl+s"
//! action = "commit_input"
//! source = "input"
//! target = "output"
//! ```

use crate::error::ConfigError;
use crate::keys::KeyChord;
use crate::layout::{
    Dimensions, FixedMargins, GridColumn, GridRow, GridSpec, LayoutPolicy, INPUT_PANE, LIST_PANE,
    OUTPUT_PANE,
};
use crate::router::{Action, KeyBindings, Scope};
use crate::ui::theme::DEFAULT_THEME;
use clap::ValueEnum;
use crossterm::event::KeyCode;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default width of the list pane
pub const DEFAULT_LIST_WIDTH: u16 = 20;

/// Default height of the input pane
pub const DEFAULT_INPUT_HEIGHT: u16 = 3;

/// Grid spans of the list column and the output/input column
const GRID_SPLIT: (u16, u16) = (3, 9);

/// Which layout the console runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 12-column proportional grid
    Grid,
    /// Absolute layout with a fixed list width and input height
    Fixed,
}

/// One configured key binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Pane the binding applies to; global when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub key: KeyChord,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list_width: u16,
    pub input_height: u16,
    pub list_items: Vec<String>,
    /// Added on top of the default bindings
    pub bindings: Vec<BindingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            list_width: DEFAULT_LIST_WIDTH,
            input_height: DEFAULT_INPUT_HEIGHT,
            list_items: (1..=5).map(|i| format!("Line {}", i)).collect(),
            bindings: Vec::new(),
        }
    }
}

impl Config {
    /// Load from `path`, or use the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the validated layout, panes and bindings for a variant
    pub fn console(&self, variant: Variant) -> Result<Console, ConfigError> {
        let policy = match variant {
            Variant::Grid => {
                // list_width is unused by the grid but must still be valid
                FixedMargins::new(self.list_width, self.input_height)?;
                LayoutPolicy::Grid(GridSpec::new(vec![GridRow::new(vec![
                    GridColumn::new(GRID_SPLIT.0, [LIST_PANE]),
                    GridColumn::new(GRID_SPLIT.1, [OUTPUT_PANE, INPUT_PANE]),
                ])])?)
            }
            Variant::Fixed => {
                LayoutPolicy::FixedMargins(FixedMargins::new(self.list_width, self.input_height)?)
            }
        };

        Ok(Console {
            variant,
            policy,
            input_height: self.input_height,
            panes: pane_specs(variant, &self.list_items),
            bindings: self.key_bindings()?,
        })
    }

    /// Default bindings plus the configured ones
    pub fn key_bindings(&self) -> Result<KeyBindings, ConfigError> {
        let mut bindings = KeyBindings::new();
        bindings.bind(Scope::Global, KeyChord::ctrl('c'), Action::Quit)?;
        bindings.bind(Scope::Global, KeyChord::plain(KeyCode::Esc), Action::Quit)?;
        bindings.bind(
            Scope::Pane(INPUT_PANE.to_string()),
            KeyChord::plain(KeyCode::Enter),
            Action::CommitInput {
                source: INPUT_PANE.to_string(),
                target: OUTPUT_PANE.to_string(),
            },
        )?;

        for binding in &self.bindings {
            let scope = match &binding.scope {
                Some(pane) => Scope::Pane(pane.clone()),
                None => Scope::Global,
            };
            bindings.bind(scope, binding.key, binding.action.clone())?;
        }
        Ok(bindings)
    }
}

/// Initial description of one pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub color: Color,
    pub editable: bool,
    pub lines: Vec<String>,
}

fn pane_specs(variant: Variant, list_items: &[String]) -> Vec<PaneSpec> {
    let (list_color, output_color, input_color) = match variant {
        Variant::Grid => (
            DEFAULT_THEME.primary,
            DEFAULT_THEME.secondary,
            DEFAULT_THEME.success,
        ),
        Variant::Fixed => (
            DEFAULT_THEME.border_normal,
            DEFAULT_THEME.border_normal,
            DEFAULT_THEME.border_normal,
        ),
    };

    vec![
        PaneSpec {
            name: LIST_PANE,
            title: "List",
            color: list_color,
            editable: false,
            lines: list_items.to_vec(),
        },
        PaneSpec {
            name: OUTPUT_PANE,
            title: "Output",
            color: output_color,
            editable: false,
            lines: Vec::new(),
        },
        PaneSpec {
            name: INPUT_PANE,
            title: "Input",
            color: input_color,
            editable: true,
            lines: Vec::new(),
        },
    ]
}

/// A fully validated console setup, ready to become an [`crate::ui::App`]
#[derive(Debug, Clone)]
pub struct Console {
    pub variant: Variant,
    pub policy: LayoutPolicy,
    pub input_height: u16,
    pub panes: Vec<PaneSpec>,
    pub bindings: KeyBindings,
}

impl Console {
    /// Pane heights the grid needs before each layout. The grid does not
    /// size panes vertically on its own.
    pub fn pane_heights(&self, dims: Dimensions) -> Vec<(&'static str, u16)> {
        match self.variant {
            Variant::Grid => vec![
                (LIST_PANE, dims.height),
                (OUTPUT_PANE, dims.height.saturating_sub(self.input_height)),
                (INPUT_PANE, self.input_height),
            ],
            Variant::Fixed => Vec::new(),
        }
    }
}
