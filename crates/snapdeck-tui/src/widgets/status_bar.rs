use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let view_str = match app.view {
            View::Deck => "DECK",
            View::Reader => "READER",
        };

        let position = match app.view {
            View::Deck => format!(
                "{}/{}",
                app.nav.current() + 1,
                app.deck.len().max(1)
            ),
            View::Reader => {
                let label = app
                    .visibility
                    .active()
                    .and_then(|i| app.deck.sections.get(i))
                    .map(|s| s.label.as_str())
                    .unwrap_or("-");
                format!("{} ({:.0}%)", label, app.reader_progress)
            }
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(" {} | {} | {}", view_str, app.deck.title, position)
        };

        let help_hint = " q:quit tab:view j/k:move n/p:section g/G:ends ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.status_bg),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.dim).bg(app.theme.status_bg),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
