//! Twelve-column proportional grid

use super::{Dimensions, PaneHeights, PaneRects};
use crate::error::{ConfigError, LayoutError};
use ratatui::layout::Rect;
use rustc_hash::FxHashSet;

/// Number of equal-width units the terminal width is divided into
pub const GRID_COLUMNS: u16 = 12;

/// A column of a grid row: its span and the panes stacked inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    span: u16,
    panes: Vec<String>,
}

impl GridColumn {
    pub fn new<I, S>(span: u16, panes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GridColumn {
            span,
            panes: panes.into_iter().map(Into::into).collect(),
        }
    }

    /// Stacked height of this column
    fn height(&self, heights: &PaneHeights) -> Result<u16, LayoutError> {
        self.panes.iter().try_fold(0u16, |total, pane| {
            let h = heights
                .get(pane)
                .copied()
                .ok_or_else(|| LayoutError::MissingHeight(pane.clone()))?;
            Ok(total.saturating_add(h))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    columns: Vec<GridColumn>,
}

impl GridRow {
    pub fn new(columns: Vec<GridColumn>) -> Self {
        GridRow { columns }
    }

    /// A row is as tall as its tallest column
    fn height(&self, heights: &PaneHeights) -> Result<u16, LayoutError> {
        self.columns.iter().try_fold(0u16, |tallest, column| {
            Ok(tallest.max(column.height(heights)?))
        })
    }
}

/// Validated grid: every row spans exactly [`GRID_COLUMNS`] and every pane
/// appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    rows: Vec<GridRow>,
}

impl GridSpec {
    pub fn new(rows: Vec<GridRow>) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();

        for (row_idx, row) in rows.iter().enumerate() {
            let mut total = 0u16;
            for (col_idx, column) in row.columns.iter().enumerate() {
                if column.span == 0 {
                    return Err(ConfigError::ZeroSpan {
                        row: row_idx,
                        column: col_idx,
                    });
                }
                if column.panes.is_empty() {
                    return Err(ConfigError::EmptyColumn {
                        row: row_idx,
                        column: col_idx,
                    });
                }
                for pane in &column.panes {
                    if !seen.insert(pane.as_str()) {
                        return Err(ConfigError::DuplicatePane(pane.clone()));
                    }
                }
                total = total.saturating_add(column.span);
            }
            if total != GRID_COLUMNS {
                return Err(ConfigError::RowSpan {
                    row: row_idx,
                    total,
                    expected: GRID_COLUMNS,
                });
            }
        }

        Ok(GridSpec { rows })
    }

    pub(super) fn pane_names(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.columns.iter())
            .flat_map(|column| column.panes.iter().map(String::as_str))
    }

    /// One cell per grid unit across; rows stacked at their tallest column
    pub(super) fn minimum_dimensions(&self, heights: &PaneHeights) -> Result<Dimensions, LayoutError> {
        let height = self.rows.iter().try_fold(0u16, |total, row| {
            Ok::<_, LayoutError>(total.saturating_add(row.height(heights)?))
        })?;
        Ok(Dimensions {
            width: GRID_COLUMNS,
            height,
        })
    }

    pub(super) fn layout(
        &self,
        dims: Dimensions,
        heights: &PaneHeights,
    ) -> Result<PaneRects, LayoutError> {
        let mut rects = PaneRects::default();
        let mut row_top = 0u16;

        for row in &self.rows {
            let mut units = 0u16;
            for column in &row.columns {
                let x = column_offset(dims.width, units);
                units += column.span;
                let width = column_offset(dims.width, units) - x;

                let mut y = row_top;
                for pane in &column.panes {
                    let height = heights
                        .get(pane)
                        .copied()
                        .ok_or_else(|| LayoutError::MissingHeight(pane.clone()))?;
                    rects.insert(
                        pane.clone(),
                        Rect {
                            x,
                            y,
                            width,
                            height,
                        },
                    );
                    y += height;
                }
            }
            row_top += row.height(heights)?;
        }

        Ok(rects)
    }
}

/// Left edge of the column starting `units` grid units in
fn column_offset(width: u16, units: u16) -> u16 {
    (width as u32 * units as u32 / GRID_COLUMNS as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute_layout, LayoutPolicy};

    fn heights(entries: &[(&str, u16)]) -> PaneHeights {
        entries
            .iter()
            .map(|(name, h)| (name.to_string(), *h))
            .collect()
    }

    #[test]
    fn test_row_must_span_twelve() {
        let err = GridSpec::new(vec![GridRow::new(vec![
            GridColumn::new(3, ["list"]),
            GridColumn::new(8, ["output"]),
        ])])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RowSpan {
                row: 0,
                total: 11,
                expected: 12
            }
        ));

        let err = GridSpec::new(vec![
            GridRow::new(vec![GridColumn::new(12, ["a"])]),
            GridRow::new(vec![
                GridColumn::new(6, ["b"]),
                GridColumn::new(7, ["c"]),
            ]),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::RowSpan { row: 1, total: 13, .. }));
    }

    #[test]
    fn test_invalid_columns_rejected() {
        let zero = GridSpec::new(vec![GridRow::new(vec![
            GridColumn::new(0, ["a"]),
            GridColumn::new(12, ["b"]),
        ])]);
        assert!(matches!(zero, Err(ConfigError::ZeroSpan { row: 0, column: 0 })));

        let empty = GridSpec::new(vec![GridRow::new(vec![GridColumn::new(
            12,
            Vec::<String>::new(),
        )])]);
        assert!(matches!(empty, Err(ConfigError::EmptyColumn { .. })));

        let dup = GridSpec::new(vec![GridRow::new(vec![
            GridColumn::new(6, ["a"]),
            GridColumn::new(6, ["a"]),
        ])]);
        assert!(matches!(dup, Err(ConfigError::DuplicatePane(name)) if name == "a"));
    }

    #[test]
    fn test_three_nine_split() {
        let spec = GridSpec::new(vec![GridRow::new(vec![
            GridColumn::new(3, ["list"]),
            GridColumn::new(9, ["output", "input"]),
        ])])
        .unwrap();
        let policy = LayoutPolicy::Grid(spec);
        let h = heights(&[("list", 25), ("output", 22), ("input", 3)]);

        let rects = compute_layout(&policy, Dimensions::new(101, 25), &h).unwrap();

        // floor(101 * 3 / 12) = 25; the right column takes the remainder
        assert_eq!(rects["list"], Rect::new(0, 0, 25, 25));
        assert_eq!(rects["output"], Rect::new(25, 0, 76, 22));
        assert_eq!(rects["input"], Rect::new(25, 22, 76, 3));
    }

    #[test]
    fn test_large_terminal_is_not_clamped() {
        let spec = GridSpec::new(vec![GridRow::new(vec![
            GridColumn::new(3, ["list"]),
            GridColumn::new(9, ["output", "input"]),
        ])])
        .unwrap();
        let policy = LayoutPolicy::Grid(spec);
        let h = heights(&[("list", 250), ("output", 247), ("input", 3)]);

        let rects = compute_layout(&policy, Dimensions::new(300, 250), &h).unwrap();

        let list = rects["list"];
        assert_eq!((list.x, list.y, list.width, list.height), (0, 0, 75, 250));
        let output = rects["output"];
        assert_eq!(
            (output.x, output.y, output.width, output.height),
            (75, 0, 225, 247)
        );
        let input = rects["input"];
        assert_eq!(input.y + input.height, 250);
    }

    #[test]
    fn test_rows_stack_at_tallest_column() {
        let spec = GridSpec::new(vec![
            GridRow::new(vec![
                GridColumn::new(4, ["a"]),
                GridColumn::new(4, ["b"]),
                GridColumn::new(4, ["c"]),
            ]),
            GridRow::new(vec![GridColumn::new(12, ["footer"])]),
        ])
        .unwrap();
        let policy = LayoutPolicy::Grid(spec);
        let h = heights(&[("a", 2), ("b", 5), ("c", 1), ("footer", 1)]);

        let rects = compute_layout(&policy, Dimensions::new(30, 6), &h).unwrap();

        assert_eq!(rects["a"], Rect::new(0, 0, 10, 2));
        assert_eq!(rects["b"], Rect::new(10, 0, 10, 5));
        assert_eq!(rects["c"], Rect::new(20, 0, 10, 1));
        assert_eq!(rects["footer"], Rect::new(0, 5, 30, 1));
    }

    #[test]
    fn test_missing_height_and_short_terminal() {
        let spec = GridSpec::new(vec![GridRow::new(vec![GridColumn::new(
            12,
            ["top", "bottom"],
        )])])
        .unwrap();
        let policy = LayoutPolicy::Grid(spec);

        let err = compute_layout(&policy, Dimensions::new(40, 10), &heights(&[("top", 4)]))
            .unwrap_err();
        assert_eq!(err, LayoutError::MissingHeight("bottom".to_string()));

        let err = compute_layout(
            &policy,
            Dimensions::new(40, 6),
            &heights(&[("top", 4), ("bottom", 4)]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::TerminalTooSmall { min_height: 8, .. }
        ));
    }
}
