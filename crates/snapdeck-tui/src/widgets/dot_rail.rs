use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Rows between adjacent indicators.
pub const INDICATOR_SPACING: u16 = 2;

/// Placement of the rail's indicators within its strip, used both for
/// rendering and for mouse hit-testing. Recorded on the App each draw;
/// `None` while the strip is too small to hold every indicator.
#[derive(Debug, Clone, Copy)]
pub struct RailGeometry {
    /// Terminal column of the indicator glyphs
    pub column: u16,
    /// Row of the first indicator
    pub top: u16,
    pub spacing: u16,
    pub count: usize,
}

impl RailGeometry {
    pub fn layout(area: Rect, count: usize) -> Option<Self> {
        if count == 0 || area.width == 0 {
            return None;
        }
        let needed = (count as u32 - 1) * INDICATOR_SPACING as u32 + 1;
        if (area.height as u32) < needed {
            return None;
        }
        let top = area.y + (area.height - needed as u16) / 2;
        Some(Self {
            column: area.x + area.width / 2,
            top,
            spacing: INDICATOR_SPACING,
            count,
        })
    }

    pub fn indicator_row(&self, index: usize) -> u16 {
        self.top + index as u16 * self.spacing
    }

    pub fn bottom(&self) -> u16 {
        self.indicator_row(self.count - 1)
    }

    /// Hit test for starting a press or drag: the indicator column plus
    /// one cell of slack either side, over the indicator span.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column + 1 >= self.column
            && column <= self.column + 1
            && row >= self.top
            && row <= self.bottom()
    }

    /// Nearest indicator to a terminal row, clamped to the valid range.
    /// Rows above the rail map to the first indicator, below to the last.
    pub fn index_at_row(&self, row: u16) -> usize {
        let rel = row.saturating_sub(self.top) as u32;
        let index = (rel + self.spacing as u32 / 2) / self.spacing as u32;
        (index as usize).min(self.count - 1)
    }
}

/// Vertical dot rail: one indicator per section, click-to-jump,
/// drag-to-scrub, hover labels, and the transient trail/ripple
/// animations.
pub struct DotRailWidget;

impl DotRailWidget {
    pub fn render(frame: &mut Frame, area: Rect, content: Rect, app: &mut App, now: Instant) {
        let geo = RailGeometry::layout(area, app.deck.len());
        app.rail_geometry = geo;
        let Some(geo) = geo else {
            return;
        };

        let theme = &app.theme;
        let current = app.nav.current();
        let ripple = app.nav.ripple_index(now);
        let trail_span = app
            .nav
            .trail_progress(now)
            .and_then(|(from, to, t)| trail_rows(&geo, from, to, t).map(|(lo, hi)| (lo, hi, t)));

        let pad = (geo.column - area.x) as usize;
        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        for row in area.y..area.y + area.height {
            let (symbol, style) = Self::row_symbol(&geo, row, current, ripple, trail_span, theme);
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(symbol, style),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), area);

        // hover label, floated at the content's right edge next to the dot
        if let Some(index) = app.hover_index {
            if let Some(section) = app.deck.sections.get(index) {
                Self::render_hover_label(frame, content, &geo, index, &section.label, theme);
            }
        }
    }

    fn row_symbol(
        geo: &RailGeometry,
        row: u16,
        current: usize,
        ripple: Option<usize>,
        trail_span: Option<(u16, u16, f64)>,
        theme: &crate::theme::Theme,
    ) -> (&'static str, Style) {
        // indicators sit on top of the trail line
        if row >= geo.top && row <= geo.bottom() && (row - geo.top) % geo.spacing == 0 {
            let index = ((row - geo.top) / geo.spacing) as usize;
            return if ripple == Some(index) {
                (
                    "◎",
                    Style::default().fg(theme.ripple).add_modifier(Modifier::BOLD),
                )
            } else if index == current {
                (
                    "●",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", Style::default().fg(theme.dim))
            };
        }

        if let Some((lo, hi, t)) = trail_span {
            if row >= lo && row <= hi {
                // draw-in bright, fade-out dim
                let style = if t < 0.5 {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.dim)
                };
                return ("│", style);
            }
        }

        (" ", Style::default())
    }

    fn render_hover_label(
        frame: &mut Frame,
        content: Rect,
        geo: &RailGeometry,
        index: usize,
        label: &str,
        theme: &crate::theme::Theme,
    ) {
        let row = geo.indicator_row(index);
        if row < content.y || row >= content.y + content.height {
            return;
        }
        let text = format!(" {} ", label);
        let width = (text.width() as u16).min(content.width);
        if width == 0 {
            return;
        }
        let label_area = Rect::new(content.x + content.width - width, row, width, 1);
        let line = Line::from(Span::styled(
            text,
            Style::default().fg(theme.status_fg).bg(theme.status_bg),
        ));
        frame.render_widget(Paragraph::new(line), label_area);
    }
}

/// Rows covered by the trail at progress `t`: the line grows from the
/// old indicator toward the new one during the first half, then holds
/// the full span while it fades.
fn trail_rows(geo: &RailGeometry, from: usize, to: usize, t: f64) -> Option<(u16, u16)> {
    let a = geo.indicator_row(from);
    let b = geo.indicator_row(to);
    if a == b {
        return None;
    }
    let full = a.abs_diff(b) as f64;
    if t < 0.5 {
        let len = (full * (t / 0.5)).round() as u16;
        Some(if a <= b { (a, a + len) } else { (a - len, a) })
    } else {
        Some((a.min(b), a.max(b)))
    }
}
