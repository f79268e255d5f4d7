//! Pane rendering
//!
//! Each pane is drawn as a bordered block titled with the pane's title. The
//! focused pane gets the highlight border; an editable pane shows its buffer
//! as plain lines with the terminal cursor placed at the edit position.

use super::pane::Pane;
use crate::error::LayoutError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Render one pane into `area`, already clipped to the frame
pub fn render_pane(frame: &mut Frame, area: Rect, pane: &Pane, is_focused: bool) {
    if area.is_empty() {
        return;
    }

    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(pane.color)
    };

    let block = Block::default()
        .title(format!(" {} ", pane.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    let visible_height = inner.height.max(1) as usize;

    if pane.editable {
        let (row, col) = pane.cursor();
        // Keep the cursor row on screen
        let scroll = row.saturating_sub(visible_height - 1);
        let lines: Vec<Line> = pane
            .lines()
            .iter()
            .skip(scroll)
            .take(visible_height)
            .map(|l| Line::raw(l.as_str()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.fg));
        frame.render_widget(paragraph, area);

        if is_focused && !inner.is_empty() {
            let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + ((row - scroll) as u16).min(inner.height - 1);
            frame.set_cursor_position((x, y));
        }
        return;
    }

    // Read-only panes follow the end of their buffer
    let lines = pane.lines();
    let skip = lines.len().saturating_sub(visible_height);
    let items: Vec<ListItem> = lines
        .iter()
        .skip(skip)
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Shown instead of the panes while the terminal cannot hold the layout
pub fn render_too_small(frame: &mut Frame, area: Rect, err: &LayoutError) {
    let text = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(err.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
    ];
    let top = area.height.saturating_sub(text.len() as u16) / 2;
    let centered = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered);
}
