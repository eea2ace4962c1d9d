use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use snapdeck_core::{AppConfig, Deck, Section};

use crate::nav::{meter, tracker, SectionNav, SectionScroller, VisibilityTracker};
use crate::theme::Theme;
use crate::widgets::article_view;
use crate::widgets::dot_rail::RailGeometry;

/// Which presentation of the deck is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Snap-scrolling full-viewport sections with the dot rail
    Deck,
    /// Continuous long-form document with the table of contents
    Reader,
}

/// Exists only between mouse-down on the rail and mouse-up.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    pub origin_row: u16,
}

/// Application state.
///
/// The deck view and the reader view hold disjoint navigation state; a
/// view's state is recreated when it is entered and torn down when it is
/// left, so nothing transient survives a view switch.
pub struct App {
    pub config: Arc<AppConfig>,
    pub deck: Deck,
    pub theme: Theme,
    pub view: View,
    pub should_quit: bool,
    pub status_message: Option<String>,

    // Deck view
    pub nav: SectionNav,
    pub deck_scroller: SectionScroller,
    pub deck_viewport_rows: u16,
    pub deck_progress: f64,
    pub drag: Option<DragState>,
    pub hover_index: Option<usize>,
    pub rail_geometry: Option<RailGeometry>,
    last_wheel: Option<Instant>,

    // Reader view
    pub reader_scroller: SectionScroller,
    pub reader_viewport_rows: u16,
    pub reader_width: u16,
    pub reader_heights: Vec<u16>,
    pub reader_progress: f64,
    pub visibility: VisibilityTracker,
    pub toc_inner: Option<Rect>,
}

impl App {
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme) -> Self {
        let nav = Self::make_nav(&config, deck.len());
        let deck_scroller = SectionScroller::new(config.ui.scroll.clone());
        let reader_scroller = SectionScroller::new(config.ui.scroll.clone());
        let visibility = VisibilityTracker::new(&config.ui.reader);
        Self {
            config,
            deck,
            theme,
            view: View::Deck,
            should_quit: false,
            status_message: None,
            nav,
            deck_scroller,
            deck_viewport_rows: 0,
            deck_progress: 0.0,
            drag: None,
            hover_index: None,
            rail_geometry: None,
            last_wheel: None,
            reader_scroller,
            reader_viewport_rows: 0,
            reader_width: 0,
            reader_heights: Vec::new(),
            reader_progress: 0.0,
            visibility,
            toc_inner: None,
        }
    }

    fn make_nav(config: &AppConfig, count: usize) -> SectionNav {
        SectionNav::new(
            count,
            Duration::from_millis(config.ui.rail.trail_duration_ms),
            Duration::from_millis(config.ui.rail.ripple_duration_ms),
        )
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.deck.sections.get(self.nav.current())
    }

    fn deck_extent(&self) -> u16 {
        let extent = self.deck.len() as u32 * self.deck_viewport_rows as u32;
        extent.min(u16::MAX as u32) as u16
    }

    fn deck_max_offset(&self) -> u16 {
        tracker::max_offset(self.deck.len(), self.deck_viewport_rows)
    }

    /// Advance animations, derive the passive index, and expire timers.
    /// Call once per frame before drawing.
    pub fn update(&mut self, now: Instant) {
        match self.view {
            View::Deck => {
                let vh = self.deck_viewport_rows;
                let max = self.deck_max_offset();
                let offset = self.deck_scroller.update(now, max);

                // the scroll has settled; passive tracking may resume early
                if !self.deck_scroller.is_animating() {
                    self.nav.close_suppression();
                }

                if let Some(index) = tracker::section_at_offset(offset, vh, self.deck.len()) {
                    self.nav.observe_passive(index, now);
                }

                self.maybe_snap(now);
                self.deck_progress = meter::completion_pct(offset, self.deck_extent(), vh);
                self.nav.tick(now);
            }
            View::Reader => {
                let vh = self.reader_viewport_rows;
                let total = self.reader_total();
                let max = total.saturating_sub(vh);
                let offset = self.reader_scroller.update(now, max);

                self.visibility.observe(&self.reader_heights, offset, vh);
                self.reader_progress = meter::completion_pct(offset, total, vh);
            }
        }
    }

    /// Snap back to a section boundary once wheel input has been idle
    /// long enough.
    fn maybe_snap(&mut self, now: Instant) {
        let Some(last) = self.last_wheel else { return };
        let idle = Duration::from_millis(self.config.ui.scroll.snap_idle_ms);
        if now.saturating_duration_since(last) < idle {
            return;
        }
        self.last_wheel = None;

        let vh = self.deck_viewport_rows;
        if vh == 0 {
            return;
        }
        let aligned = tracker::offset_for_section(self.nav.current(), vh);
        if self.deck_scroller.offset() != aligned {
            self.go_to_section(self.nav.current(), now);
        }
    }

    /// Programmatic jump to a section: the single write path used by the
    /// rail, the keyboard, and the post-wheel snap. Out-of-range targets
    /// clamp.
    pub fn go_to_section(&mut self, index: usize, now: Instant) {
        let vh = self.deck_viewport_rows;
        if vh == 0 {
            return;
        }
        let window = self.deck_scroller.suppression_window();
        let target = self.nav.begin_programmatic(index, window, now);
        self.deck_scroller.go_to_offset(
            tracker::offset_for_section(target, vh),
            self.deck_max_offset(),
            now,
        );
    }

    pub fn next_section(&mut self, now: Instant) {
        match self.view {
            View::Deck => self.go_to_section(self.nav.current() + 1, now),
            View::Reader => {
                let next = self.visibility.active().map_or(0, |i| i + 1);
                self.reader_go_to(next, now);
            }
        }
    }

    pub fn prev_section(&mut self, now: Instant) {
        match self.view {
            View::Deck => self.go_to_section(self.nav.current().saturating_sub(1), now),
            View::Reader => {
                let prev = self.visibility.active().unwrap_or(0).saturating_sub(1);
                self.reader_go_to(prev, now);
            }
        }
    }

    pub fn first_section(&mut self, now: Instant) {
        match self.view {
            View::Deck => self.go_to_section(0, now),
            View::Reader => self.reader_go_to(0, now),
        }
    }

    pub fn last_section(&mut self, now: Instant) {
        let last = self.deck.len().saturating_sub(1);
        match self.view {
            View::Deck => self.go_to_section(last, now),
            View::Reader => self.reader_go_to(last, now),
        }
    }

    /// Rail press: ripple acknowledgment plus the programmatic jump.
    pub fn press_indicator(&mut self, index: usize, now: Instant) {
        self.nav.press(index, now);
        self.go_to_section(index, now);
    }

    pub fn begin_rail_drag(&mut self, index: usize, origin_row: u16, now: Instant) {
        if self.view != View::Deck {
            return;
        }
        self.drag = Some(DragState { origin_row });
        self.nav.begin_drag();
        self.nav.press(index, now);
        self.go_to_section(index, now);
    }

    /// Scrub: every crossed index fires the full navigation path.
    pub fn rail_drag_to(&mut self, index: usize, now: Instant) {
        if self.drag.is_none() || self.view != View::Deck {
            return;
        }
        if index != self.nav.current() {
            self.nav.press(index, now);
            self.go_to_section(index, now);
        }
    }

    pub fn end_rail_drag(&mut self, now: Instant) {
        if self.drag.take().is_some() {
            self.nav.end_drag(now);
        }
    }

    /// Wheel input scrolls the mounted view directly; the deck view
    /// snaps back to a boundary after `snap_idle_ms` of quiet.
    pub fn on_wheel(&mut self, delta: i32, now: Instant) {
        let lines = self.config.ui.scroll.wheel_lines as i32;
        match self.view {
            View::Deck => {
                if self.deck_viewport_rows == 0 {
                    return;
                }
                let max = self.deck_max_offset();
                self.deck_scroller.nudge(delta * lines, max);
                self.last_wheel = Some(now);
            }
            View::Reader => {
                let max = self.reader_total().saturating_sub(self.reader_viewport_rows);
                self.reader_scroller.nudge(delta * lines, max);
            }
        }
    }

    /// Keyboard line scroll in the reader view.
    pub fn reader_line(&mut self, delta: i32) {
        let max = self.reader_total().saturating_sub(self.reader_viewport_rows);
        self.reader_scroller.nudge(delta, max);
    }

    pub fn reader_half_page(&mut self, direction: i32) {
        let half = (self.reader_viewport_rows / 2).max(1) as i32;
        self.reader_line(direction * half);
    }

    /// TOC jump: smooth scroll to a section's start. No suppression is
    /// involved; the visibility tracker recovers once the destination
    /// section dominates the band.
    pub fn reader_go_to(&mut self, index: usize, now: Instant) {
        let index = index.min(self.deck.len().saturating_sub(1));
        let max = self.reader_total().saturating_sub(self.reader_viewport_rows);
        let start = self.reader_section_start(index);
        self.reader_scroller.go_to_offset(start.min(max), max, now);
    }

    fn reader_section_start(&self, index: usize) -> u16 {
        let start: u32 = self
            .reader_heights
            .iter()
            .take(index)
            .map(|&h| h as u32)
            .sum();
        start.min(u16::MAX as u32) as u16
    }

    pub fn reader_total(&self) -> u16 {
        let total: u32 = self.reader_heights.iter().map(|&h| h as u32).sum();
        total.min(u16::MAX as u32) as u16
    }

    /// Record the deck content area each frame; re-aligns the offset to
    /// the current section when the viewport height changes.
    pub fn set_deck_layout(&mut self, area: Rect) {
        if area.height != self.deck_viewport_rows {
            self.deck_viewport_rows = area.height;
            let max = self.deck_max_offset();
            self.deck_scroller
                .set_offset(tracker::offset_for_section(self.nav.current(), area.height), max);
        }
    }

    /// Record the reader content area; recomputes section heights when
    /// the width changes.
    pub fn set_reader_layout(&mut self, area: Rect) {
        self.reader_viewport_rows = area.height;
        if area.width != self.reader_width {
            self.reader_width = area.width;
            self.reader_heights = article_view::section_heights(&self.deck, area.width);
        }
    }

    pub fn set_hover(&mut self, column: u16, row: u16) {
        self.hover_index = match (self.view, self.rail_geometry) {
            (View::Deck, Some(geo)) if geo.contains(column, row) => Some(geo.index_at_row(row)),
            _ => None,
        };
    }

    /// Switch between deck and reader. The view being left is unmounted:
    /// its navigation state, animations and pending timers are discarded.
    pub fn toggle_view(&mut self) {
        tracing::debug!(from = ?self.view, "switching view");
        match self.view {
            View::Deck => {
                self.unmount_deck();
                self.view = View::Reader;
            }
            View::Reader => {
                self.unmount_reader();
                self.view = View::Deck;
            }
        }
    }

    fn unmount_deck(&mut self) {
        self.nav = Self::make_nav(&self.config, self.deck.len());
        self.deck_scroller.reset();
        self.deck_progress = 0.0;
        self.drag = None;
        self.hover_index = None;
        self.rail_geometry = None;
        self.last_wheel = None;
    }

    fn unmount_reader(&mut self) {
        self.reader_scroller.reset();
        self.reader_progress = 0.0;
        self.visibility.reset();
        self.toc_inner = None;
    }

    /// Whether the next frame should poll at the animation rate.
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        match self.view {
            View::Deck => {
                self.deck_scroller.is_animating()
                    || self.last_wheel.is_some()
                    || self.nav.trail_progress(now).is_some()
                    || self.nav.ripple_index(now).is_some()
            }
            View::Reader => self.reader_scroller.is_animating(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavPhase;

    const VH: u16 = 40;

    fn deck(n: usize) -> Deck {
        Deck {
            title: "test".to_string(),
            sections: (0..n)
                .map(|i| Section {
                    id: format!("s{}", i),
                    label: format!("Section {}", i),
                    body: "body".to_string(),
                })
                .collect(),
        }
    }

    fn app(n: usize) -> App {
        let mut app = App::new(deck(n), Arc::new(AppConfig::default()), Theme::default());
        app.deck_viewport_rows = VH;
        app
    }

    #[test]
    fn test_go_to_section_clamps() {
        let mut app = app(6);
        let now = Instant::now();

        app.go_to_section(99, now);
        assert_eq!(app.nav.current(), 5);

        app.go_to_section(0, now);
        assert_eq!(app.nav.current(), 0);
    }

    #[test]
    fn test_programmatic_jump_never_flickers_back() {
        let mut app = app(6);
        let now = Instant::now();

        app.go_to_section(5, now);
        assert_eq!(app.nav.current(), 5);

        // frames during the animation pass through intermediate offsets
        // corresponding to sections 1..=4
        for ms in [20, 60, 100, 140] {
            app.update(now + Duration::from_millis(ms));
            assert_eq!(app.nav.current(), 5, "flickered at {}ms", ms);
        }

        // after the animation and grace, passive tracking confirms 5
        app.update(now + Duration::from_millis(400));
        assert_eq!(app.nav.current(), 5);
        assert_eq!(app.nav.phase(), NavPhase::PassiveTracking);
    }

    #[test]
    fn test_drag_sweep_visits_every_index_in_order() {
        let mut app = app(6);
        let now = Instant::now();
        let geo = RailGeometry::layout(Rect::new(76, 0, 4, VH), 6).unwrap();
        app.rail_geometry = Some(geo);

        let top = geo.indicator_row(0);
        let bottom = geo.indicator_row(5);

        app.begin_rail_drag(geo.index_at_row(top), top, now);
        let mut visited = vec![app.nav.current()];
        for row in top + 1..=bottom {
            app.rail_drag_to(geo.index_at_row(row), now);
            if *visited.last().unwrap() != app.nav.current() {
                visited.push(app.nav.current());
            }
        }
        app.end_rail_drag(now);

        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
        assert!(app.drag.is_none());
    }

    #[test]
    fn test_wheel_then_snap_back_to_boundary() {
        let mut app = app(6);
        let now = Instant::now();

        app.on_wheel(1, now);
        app.update(now);

        // wheel moved the offset off the boundary without changing the index
        assert_eq!(app.deck_scroller.offset(), 3);
        assert_eq!(app.nav.current(), 0);

        // once wheel input has been idle, the view snaps back
        app.update(now + Duration::from_millis(200));
        assert!(app.deck_scroller.is_animating());
        assert_eq!(app.deck_scroller.target_offset(), 0);
    }

    #[test]
    fn test_view_switch_discards_deck_state() {
        let mut app = app(6);
        let now = Instant::now();

        app.go_to_section(4, now);
        app.begin_rail_drag(4, 10, now);
        app.toggle_view();

        // deck state was unmounted
        assert_eq!(app.view, View::Reader);
        assert!(app.drag.is_none());
        assert_eq!(app.nav.current(), 0);

        // stale rail events no longer mutate anything
        app.rail_drag_to(3, now);
        app.end_rail_drag(now);
        assert_eq!(app.nav.current(), 0);

        // wheel input now drives the reader, not the deck
        app.reader_heights = vec![50, 50, 50];
        app.reader_viewport_rows = VH;
        app.on_wheel(1, now);
        assert_eq!(app.deck_scroller.offset(), 0);
        assert!(app.reader_scroller.offset() > 0);
    }

    #[test]
    fn test_same_index_click_is_idempotent() {
        let mut app = app(6);
        let now = Instant::now();

        app.press_indicator(0, now);
        assert_eq!(app.nav.current(), 0);
        assert!(app.nav.trail_progress(now).is_none());
    }

    #[test]
    fn test_navigation_noop_before_layout() {
        let mut app = App::new(deck(6), Arc::new(AppConfig::default()), Theme::default());
        let now = Instant::now();

        // viewport height is still 0: jump requests are skipped safely
        app.go_to_section(3, now);
        assert_eq!(app.nav.current(), 0);

        app.on_wheel(1, now);
        assert_eq!(app.deck_scroller.offset(), 0);
    }

    #[test]
    fn test_reader_toc_jump_targets_section_start() {
        let mut app = app(3);
        app.toggle_view();
        app.reader_heights = vec![10, 20, 30];
        app.reader_viewport_rows = 20;
        let now = Instant::now();

        app.reader_go_to(2, now);
        assert_eq!(app.reader_scroller.target_offset(), 30);

        // out-of-range index clamps to the last section
        app.reader_go_to(99, now);
        assert_eq!(app.reader_scroller.target_offset(), 30);
    }
}
