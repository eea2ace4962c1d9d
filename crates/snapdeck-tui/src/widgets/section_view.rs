use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::Section;

use crate::app::App;
use crate::theme::Theme;
use crate::widgets::article_view::wrap_text;

/// Snap-scrolling deck content: each section occupies exactly one
/// viewport of rows, and the widget renders the window of virtual rows
/// starting at the scroller's offset. During a scroll animation two
/// sections are partially visible.
pub struct SectionViewWidget;

impl SectionViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let vh = area.height;
        if vh == 0 || app.deck.is_empty() {
            return;
        }

        let offset = app.deck_scroller.offset() as u32;
        let mut lines: Vec<Line> = Vec::with_capacity(vh as usize);
        let mut index = (offset / vh as u32) as usize;

        while lines.len() < vh as usize {
            let Some(section) = app.deck.sections.get(index) else {
                break;
            };
            let section_lines =
                section_lines(section, &app.deck.ordinal(index), area.width, vh, &app.theme);
            let start_row = index as u32 * vh as u32;
            let skip = offset.saturating_sub(start_row) as usize;
            let take = vh as usize - lines.len();
            lines.extend(section_lines.into_iter().skip(skip).take(take));
            index += 1;
        }
        while lines.len() < vh as usize {
            lines.push(Line::default());
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.bg));
        frame.render_widget(paragraph, area);
    }
}

/// Render one section into exactly `height` rows.
fn section_lines(
    section: &Section,
    ordinal: &str,
    width: u16,
    height: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let margin = "  ";
    let mut lines: Vec<Line> = Vec::with_capacity(height as usize);

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(margin),
        Span::styled(
            format!("{} ", ordinal),
            Style::default().fg(theme.dim),
        ),
        Span::styled(
            section.label.clone(),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    for body_line in wrap_text(&section.body, width.saturating_sub(4)) {
        if lines.len() >= height as usize {
            break;
        }
        lines.push(Line::from(vec![
            Span::raw(margin),
            Span::styled(body_line, Style::default().fg(theme.fg)),
        ]));
    }

    while lines.len() < height as usize {
        lines.push(Line::default());
    }
    lines.truncate(height as usize);
    lines
}
