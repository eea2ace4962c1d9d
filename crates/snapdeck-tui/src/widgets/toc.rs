use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Fixed table of contents for the reader view. The active entry follows
/// the visibility tracker; clicking an entry jumps to its section.
pub struct TocWidget;

impl TocWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let block = Block::default()
            .title(" Contents ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim));
        let inner = block.inner(area);
        app.toc_inner = Some(inner);

        let active = app.visibility.active();
        let lines: Vec<Line> = app
            .deck
            .sections
            .iter()
            .enumerate()
            .take(inner.height as usize)
            .map(|(index, section)| {
                let style = if active == Some(index) {
                    Style::default()
                        .fg(app.theme.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.fg)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", app.deck.ordinal(index)),
                        Style::default().fg(app.theme.dim),
                    ),
                    Span::styled(section.label.clone(), style),
                ])
            })
            .collect();

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Entry under a mouse position, one entry per row from the top of the
/// panel's inner area.
pub fn entry_at(inner: Rect, column: u16, row: u16, count: usize) -> Option<usize> {
    if column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let index = (row - inner.y) as usize;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_at_maps_rows() {
        let inner = Rect::new(1, 1, 20, 10);
        assert_eq!(entry_at(inner, 5, 1, 4), Some(0));
        assert_eq!(entry_at(inner, 5, 4, 4), Some(3));
    }

    #[test]
    fn test_entry_at_rejects_outside_and_past_end() {
        let inner = Rect::new(1, 1, 20, 10);
        assert_eq!(entry_at(inner, 0, 2, 4), None);
        assert_eq!(entry_at(inner, 25, 2, 4), None);
        assert_eq!(entry_at(inner, 5, 0, 4), None);
        // row maps past the last section
        assert_eq!(entry_at(inner, 5, 6, 4), None);
    }
}
