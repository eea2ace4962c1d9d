use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::Deck;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::Theme;

/// Rows a section occupies beyond its wrapped body: header, the blank
/// under it, and the trailing blank.
const SECTION_CHROME_ROWS: u16 = 3;

/// Long-form reader content: all sections as one continuous document,
/// scrolled by row offset. Section heights here must agree with
/// [`section_heights`], which feeds the visibility tracker and the
/// table-of-contents jumps.
pub struct ArticleViewWidget;

impl ArticleViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }

        let active = app.visibility.active();
        let lines = document_lines(&app.deck, area.width, active, &app.theme);
        let offset = app.reader_scroller.offset() as usize;

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(area.height as usize)
            .collect();
        let paragraph = Paragraph::new(visible).style(Style::default().bg(app.theme.bg));
        frame.render_widget(paragraph, area);
    }
}

/// Greedy word wrap on display width. Explicit newlines are preserved;
/// a word wider than the line keeps a line of its own.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return text.lines().map(String::from).collect();
    }
    let width = width as usize;
    let mut out = Vec::new();

    for raw in text.lines() {
        let mut line = String::new();
        let mut line_width = 0usize;
        for word in raw.split_whitespace() {
            let word_width = word.width();
            if line_width == 0 {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            } else {
                out.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        out.push(line);
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Per-section heights in rows at the given content width, in document
/// order.
pub fn section_heights(deck: &Deck, width: u16) -> Vec<u16> {
    deck.sections
        .iter()
        .map(|section| {
            let body = wrap_text(&section.body, width.saturating_sub(4)).len();
            (body as u32 + SECTION_CHROME_ROWS as u32).min(u16::MAX as u32) as u16
        })
        .collect()
}

/// The full document as styled lines. Each section contributes exactly
/// the rows [`section_heights`] reports for it.
fn document_lines(
    deck: &Deck,
    width: u16,
    active: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let margin = "  ";
    let mut lines = Vec::new();

    for (index, section) in deck.sections.iter().enumerate() {
        let header_style = if active == Some(index) {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(margin),
            Span::styled(format!("{} ", deck.ordinal(index)), Style::default().fg(theme.dim)),
            Span::styled(section.label.clone(), header_style),
        ]));
        lines.push(Line::default());

        for body_line in wrap_text(&section.body, width.saturating_sub(4)) {
            lines.push(Line::from(vec![
                Span::raw(margin),
                Span::styled(body_line, Style::default().fg(theme.fg)),
            ]));
        }
        lines.push(Line::default());
    }

    lines
}
