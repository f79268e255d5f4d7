//! Fixed-margin console layout

use super::{Dimensions, PaneRects, INPUT_PANE, LIST_PANE, OUTPUT_PANE};
use crate::error::ConfigError;
use ratatui::layout::Rect;

/// Fixed list width and input height; everything else follows the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMargins {
    list_width: u16,
    input_height: u16,
}

impl FixedMargins {
    pub fn new(list_width: u16, input_height: u16) -> Result<Self, ConfigError> {
        if list_width == 0 {
            return Err(ConfigError::ZeroSize { name: "list_width" });
        }
        if input_height == 0 {
            return Err(ConfigError::ZeroSize {
                name: "input_height",
            });
        }
        Ok(FixedMargins {
            list_width,
            input_height,
        })
    }

    /// One gutter cell plus at least one cell for the right-hand panes
    pub(super) fn minimum_dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.list_width.saturating_add(2),
            height: self.input_height.saturating_add(2),
        }
    }

    /// Caller guarantees `dims` is at least [`Self::minimum_dimensions`].
    pub(super) fn layout(&self, dims: Dimensions) -> PaneRects {
        let right_x = self.list_width + 1;
        let right_width = dims.width - right_x;

        // Rect::new would shrink rectangles whose area overflows u16
        let mut rects = PaneRects::default();
        rects.insert(
            LIST_PANE.to_string(),
            Rect {
                x: 0,
                y: 0,
                width: self.list_width,
                height: dims.height - 1,
            },
        );
        rects.insert(
            OUTPUT_PANE.to_string(),
            Rect {
                x: right_x,
                y: 0,
                width: right_width,
                height: dims.height - self.input_height - 1,
            },
        );
        rects.insert(
            INPUT_PANE.to_string(),
            Rect {
                x: right_x,
                y: dims.height - self.input_height,
                width: right_width,
                height: self.input_height,
            },
        );
        rects
    }
}
