use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use snapdeck_core::{AppConfig, Deck};
use snapdeck_tui::{
    app::{App, View},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    load_theme,
    widgets::{
        ArticleViewWidget, DotRailWidget, ProgressBarWidget, SectionViewWidget, StatusBarWidget,
        TocWidget,
    },
};

pub fn run(config: Arc<AppConfig>, deck_path: &Path, start: Option<String>) -> Result<()> {
    let deck = Deck::load(deck_path)?;

    // Resolve the start section before touching the terminal so an
    // unknown id fails with a plain error message
    let mut pending_start = match start {
        Some(id) => Some(deck.index_of(&id)?),
        None => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Snapdeck")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(deck, config.clone(), theme);

    // Event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    // Track whether the NEXT iteration needs the animation frame rate;
    // checked at the end of each iteration
    let mut needs_fast_update = false;

    // Main loop
    loop {
        let now = Instant::now();
        app.update(now);

        terminal.draw(|frame| draw(frame, &mut app, now))?;

        // layout exists after the first draw; the start jump can land now
        if let Some(index) = pending_start.take() {
            app.go_to_section(index, Instant::now());
        }

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // layout is re-derived on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let size = frame.area();

    // Main layout: content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    match app.view {
        View::Deck => draw_deck(frame, main_layout[0], app, now),
        View::Reader => draw_reader(frame, main_layout[0], app),
    }

    StatusBarWidget::render(frame, main_layout[1], app);
}

fn draw_deck(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    // Content on the left, dot rail strip at the right edge
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(area);

    // Thin progress bar above the snap-scrolled sections
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(columns[0]);

    app.set_deck_layout(rows[1]);

    SectionViewWidget::render(frame, rows[1], app);
    ProgressBarWidget::render(frame, rows[0], app.deck_progress, &app.theme);
    DotRailWidget::render(frame, columns[1], rows[1], app, now);
}

fn draw_reader(frame: &mut Frame, area: Rect, app: &mut App) {
    // Fixed table of contents on the left
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(columns[1]);

    app.set_reader_layout(rows[1]);

    TocWidget::render(frame, columns[0], app);
    ArticleViewWidget::render(frame, rows[1], app);
    ProgressBarWidget::render(frame, rows[0], app.reader_progress, &app.theme);
}

fn handle_action(app: &mut App, action: Action) {
    let now = Instant::now();
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ToggleView => app.toggle_view(),
        Action::NextSection => app.next_section(now),
        Action::PrevSection => app.prev_section(now),
        Action::FirstSection => app.first_section(now),
        Action::LastSection => app.last_section(now),
        Action::WheelDown => app.on_wheel(1, now),
        Action::WheelUp => app.on_wheel(-1, now),
        Action::LineDown => app.reader_line(1),
        Action::LineUp => app.reader_line(-1),
        Action::HalfPageDown => app.reader_half_page(1),
        Action::HalfPageUp => app.reader_half_page(-1),
        Action::RailPress { index, row } => app.begin_rail_drag(index, row, now),
        Action::RailDrag { row } => {
            if let Some(geo) = app.rail_geometry {
                app.rail_drag_to(geo.index_at_row(row), now);
            }
        }
        Action::RailRelease => app.end_rail_drag(now),
        Action::Hover { column, row } => app.set_hover(column, row),
        Action::TocJump { index } => app.reader_go_to(index, now),
        Action::None => {}
    }
}
