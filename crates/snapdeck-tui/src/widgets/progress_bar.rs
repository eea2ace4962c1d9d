use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Thin one-row scroll-completion bar. Stateless: each view passes its
/// own percentage, so the deck and reader bars cannot interfere.
pub struct ProgressBarWidget;

impl ProgressBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, pct: f64, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);

        let line = Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(theme.accent)),
            Span::styled("─".repeat(width - filled), Style::default().fg(theme.dim)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
