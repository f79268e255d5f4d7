//! Explicit UI state: the panes, focus and current layout for one run

use super::pane::{split_lines, Pane};
use crate::error::{LayoutError, UnknownPaneError};
use crate::layout::{compute_layout, Dimensions, LayoutPolicy, PaneHeights};
use tracing::{debug, warn};

/// Outcome of [`UiState::create_pane`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneCreation {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Everything the layout engine and key router operate on
#[derive(Debug)]
pub struct UiState {
    policy: LayoutPolicy,
    panes: Vec<Pane>,
    focus: Option<String>,
    dimensions: Dimensions,
    /// Set when the last resize could not be laid out
    layout_error: Option<LayoutError>,
}

impl UiState {
    pub fn new(policy: LayoutPolicy, dimensions: Dimensions) -> Self {
        UiState {
            policy,
            panes: Vec::new(),
            focus: None,
            dimensions,
            layout_error: None,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Register a pane. Panes must be named by the layout policy.
    pub fn create_pane(&mut self, pane: Pane) -> PaneCreation {
        if self.pane(pane.name()).is_some() {
            return PaneCreation::AlreadyExists;
        }
        if !self.policy.pane_names().contains(&pane.name()) {
            return PaneCreation::Failed(format!(
                "pane '{}' has no place in the layout",
                pane.name()
            ));
        }
        debug!(pane = pane.name(), "created pane");
        self.panes.push(pane);
        PaneCreation::Created
    }

    /// Panes in creation order
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane(&self, name: &str) -> Option<&Pane> {
        self.panes.iter().find(|p| p.name() == name)
    }

    pub fn pane_mut(&mut self, name: &str) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.name() == name)
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    pub fn set_focus(&mut self, name: &str) -> Result<(), UnknownPaneError> {
        if self.pane(name).is_none() {
            return Err(UnknownPaneError(name.to_string()));
        }
        self.focus = Some(name.to_string());
        Ok(())
    }

    pub fn focused_pane_mut(&mut self) -> Option<&mut Pane> {
        let name = self.focus.clone()?;
        self.pane_mut(&name)
    }

    pub fn set_pane_height(&mut self, name: &str, height: u16) -> Result<(), UnknownPaneError> {
        let pane = self
            .pane_mut(name)
            .ok_or_else(|| UnknownPaneError(name.to_string()))?;
        pane.height = Some(height);
        Ok(())
    }

    /// Recompute every pane rectangle for new terminal dimensions.
    ///
    /// On failure the previous rectangles are discarded: [`Self::layout_error`]
    /// reports why until a later resize succeeds.
    pub fn resize(&mut self, dimensions: Dimensions) -> Result<(), LayoutError> {
        self.dimensions = dimensions;

        let heights: PaneHeights = self
            .panes
            .iter()
            .filter_map(|p| p.height.map(|h| (p.name().to_string(), h)))
            .collect();

        match compute_layout(&self.policy, dimensions, &heights) {
            Ok(rects) => {
                for pane in &mut self.panes {
                    let rect = rects.get(pane.name()).copied().unwrap_or_default();
                    pane.set_rect(rect);
                }
                self.layout_error = None;
                debug!(
                    width = dimensions.width,
                    height = dimensions.height,
                    "layout recomputed"
                );
                Ok(())
            }
            Err(err) => {
                for pane in &mut self.panes {
                    pane.set_rect(Default::default());
                }
                warn!(%err, "layout failed");
                self.layout_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn layout_error(&self) -> Option<&LayoutError> {
        self.layout_error.as_ref()
    }

    /// Move the source pane's buffer to the end of the target pane.
    ///
    /// Both panes are checked before either buffer is touched. Returns the
    /// number of lines appended; a non-editable source commits nothing.
    pub fn commit(&mut self, source: &str, target: &str) -> Result<usize, UnknownPaneError> {
        let src_idx = self
            .index_of(source)
            .ok_or_else(|| UnknownPaneError(source.to_string()))?;
        let dst_idx = self
            .index_of(target)
            .ok_or_else(|| UnknownPaneError(target.to_string()))?;

        if !self.panes[src_idx].editable {
            return Ok(0);
        }

        let lines = split_lines(&self.panes[src_idx].take_text());
        let count = lines.len();
        self.panes[dst_idx].push_lines(lines);
        Ok(count)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.panes.iter().position(|p| p.name() == name)
    }
}
