//! Pane layout engine
//!
//! Maps terminal dimensions to one rectangle per named pane. Two policies are
//! supported:
//!
//! - [`GridSpec`]: a 12-column proportional grid. Each row divides the width
//!   by column span; panes sharing a column stack vertically using heights
//!   supplied by the caller.
//! - [`FixedMargins`]: the three-pane console with a fixed-width `list` pane
//!   on the left and an `output` pane above a fixed-height `input` pane on
//!   the right, separated by a one-cell gutter.
//!
//! Layout is a pure function of `(policy, dimensions, heights)`. Dimensions
//! below the policy minimum are rejected with
//! [`LayoutError::TerminalTooSmall`] rather than producing clipped or
//! negative rectangles.

mod fixed;
mod grid;

pub use fixed::FixedMargins;
pub use grid::{GridColumn, GridRow, GridSpec, GRID_COLUMNS};

use crate::error::LayoutError;
use ratatui::layout::Rect;
use rustc_hash::FxHashMap;

/// Name of the item list pane
pub const LIST_PANE: &str = "list";
/// Name of the pane that receives committed input
pub const OUTPUT_PANE: &str = "output";
/// Name of the editable input pane
pub const INPUT_PANE: &str = "input";

/// Computed rectangles keyed by pane name
pub type PaneRects = FxHashMap<String, Rect>;

/// Explicit pane heights for the grid policy, keyed by pane name
pub type PaneHeights = FxHashMap<String, u16>;

/// Terminal size in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Dimensions { width, height }
    }
}

impl From<Rect> for Dimensions {
    fn from(area: Rect) -> Self {
        Dimensions {
            width: area.width,
            height: area.height,
        }
    }
}

/// Layout algorithm chosen once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutPolicy {
    Grid(GridSpec),
    FixedMargins(FixedMargins),
}

impl LayoutPolicy {
    /// Pane names in declaration order
    pub fn pane_names(&self) -> Vec<&str> {
        match self {
            LayoutPolicy::Grid(spec) => spec.pane_names().collect(),
            LayoutPolicy::FixedMargins(_) => vec![LIST_PANE, OUTPUT_PANE, INPUT_PANE],
        }
    }

    /// Smallest terminal that fits this policy with the given heights
    pub fn minimum_dimensions(&self, heights: &PaneHeights) -> Result<Dimensions, LayoutError> {
        match self {
            LayoutPolicy::Grid(spec) => spec.minimum_dimensions(heights),
            LayoutPolicy::FixedMargins(margins) => Ok(margins.minimum_dimensions()),
        }
    }
}

/// Compute a rectangle for every pane the policy names.
///
/// `heights` is only consulted by the grid policy; pass an empty map for
/// fixed margins.
pub fn compute_layout(
    policy: &LayoutPolicy,
    dimensions: Dimensions,
    heights: &PaneHeights,
) -> Result<PaneRects, LayoutError> {
    let min = policy.minimum_dimensions(heights)?;
    if dimensions.width < min.width || dimensions.height < min.height {
        return Err(LayoutError::TerminalTooSmall {
            width: dimensions.width,
            height: dimensions.height,
            min_width: min.width,
            min_height: min.height,
        });
    }

    let rects = match policy {
        LayoutPolicy::Grid(spec) => spec.layout(dimensions, heights)?,
        LayoutPolicy::FixedMargins(margins) => margins.layout(dimensions),
    };
    Ok(rects)
}
