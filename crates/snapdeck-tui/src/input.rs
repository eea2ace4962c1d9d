use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, View};
use crate::widgets::toc;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,
    /// Wheel scroll (scaled by `wheel_lines`)
    WheelDown,
    WheelUp,
    /// Single-row keyboard scroll (reader)
    LineDown,
    LineUp,
    HalfPageDown,
    HalfPageUp,
    ToggleView,
    /// Mouse-down on the rail: jump and enter the drag
    RailPress { index: usize, row: u16 },
    /// Mouse-drag while scrubbing, delivered document-wide
    RailDrag { row: u16 },
    RailRelease,
    /// Mouse movement, for the hover label
    Hover { column: u16, row: u16 },
    /// Click on a table-of-contents entry
    TocJump { index: usize },
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Switch between deck and reader
        (KeyCode::Tab, KeyModifiers::NONE) => Action::ToggleView,

        // Section jumps
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PrevSection,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::FirstSection,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::LastSection,

        // Movement keys depend on the mounted view: the deck snaps
        // between sections, the reader scrolls by rows
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            match app.view {
                View::Deck => Action::NextSection,
                View::Reader => Action::LineDown,
            }
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            match app.view {
                View::Deck => Action::PrevSection,
                View::Reader => Action::LineUp,
            }
        }
        (KeyCode::Char(' '), KeyModifiers::NONE) | (KeyCode::Enter, KeyModifiers::NONE) => {
            match app.view {
                View::Deck => Action::NextSection,
                View::Reader => Action::HalfPageDown,
            }
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action.
///
/// Rail hits are resolved against the geometry recorded during the last
/// draw; before the first draw there is nothing to hit and the event is
/// ignored. Drag and release are matched document-wide, since a fast
/// scrub routinely leaves the narrow rail bounds.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.view {
            View::Deck => {
                if let Some(geo) = app.rail_geometry {
                    if geo.contains(mouse.column, mouse.row) {
                        return Action::RailPress {
                            index: geo.index_at_row(mouse.row),
                            row: mouse.row,
                        };
                    }
                }
                Action::None
            }
            View::Reader => {
                if let Some(inner) = app.toc_inner {
                    if let Some(index) = toc::entry_at(inner, mouse.column, mouse.row, app.deck.len())
                    {
                        return Action::TocJump { index };
                    }
                }
                Action::None
            }
        },
        MouseEventKind::Drag(MouseButton::Left) if app.drag.is_some() => {
            Action::RailDrag { row: mouse.row }
        }
        MouseEventKind::Up(MouseButton::Left) if app.drag.is_some() => Action::RailRelease,
        MouseEventKind::Moved => Action::Hover {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollDown => Action::WheelDown,
        MouseEventKind::ScrollUp => Action::WheelUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::widgets::dot_rail::RailGeometry;
    use ratatui::layout::Rect;
    use snapdeck_core::{AppConfig, Deck, Section};
    use std::sync::Arc;

    fn app() -> App {
        let deck = Deck {
            title: String::new(),
            sections: (0..4)
                .map(|i| Section {
                    id: format!("s{}", i),
                    label: format!("S{}", i),
                    body: String::new(),
                })
                .collect(),
        };
        let mut app = App::new(deck, Arc::new(AppConfig::default()), Theme::default());
        app.deck_viewport_rows = 40;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_movement_keys_depend_on_view() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::NextSection);

        app.toggle_view();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::LineDown);
    }

    #[test]
    fn test_rail_press_requires_recorded_geometry() {
        let mut app = app();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 77, 10);

        // no draw has happened yet: nothing to hit
        assert_eq!(handle_mouse_event(down, &app), Action::None);

        app.rail_geometry = RailGeometry::layout(Rect::new(76, 0, 4, 40), 4);
        let geo = app.rail_geometry.unwrap();
        let hit = mouse(
            MouseEventKind::Down(MouseButton::Left),
            geo.column,
            geo.indicator_row(2),
        );
        assert_eq!(
            handle_mouse_event(hit, &app),
            Action::RailPress {
                index: 2,
                row: geo.indicator_row(2)
            }
        );
    }

    #[test]
    fn test_drag_events_ignored_without_active_drag() {
        let app = app();
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 5, 5);
        assert_eq!(handle_mouse_event(drag, &app), Action::None);

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 5);
        assert_eq!(handle_mouse_event(up, &app), Action::None);
    }

    #[test]
    fn test_drag_matched_outside_rail_bounds() {
        let mut app = app();
        app.rail_geometry = RailGeometry::layout(Rect::new(76, 0, 4, 40), 4);
        let now = std::time::Instant::now();
        app.begin_rail_drag(0, 14, now);

        // far from the rail column, still a scrub
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 2, 20);
        assert_eq!(handle_mouse_event(drag, &app), Action::RailDrag { row: 20 });
    }
}
