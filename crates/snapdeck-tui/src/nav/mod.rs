//! Scroll-synchronized section navigation.
//!
//! One deck view owns a single [`SectionNav`]: the canonical current-index
//! state plus the phase machine that arbitrates between passive
//! scroll-derived updates and programmatic jumps. Everything else is a
//! satellite of that state:
//!
//! - `tracker` - pure offset -> index snapping for full-viewport sections
//! - `scroller` - eased scroll-to-offset animation and the suppression
//!   window that keeps the tracker from fighting it
//! - `visibility` - ratio-based active-section detection for the reader
//!   view's table of contents
//! - `meter` - stateless scroll-completion percentage
//!
//! All timestamps are passed in as [`std::time::Instant`] values so the
//! state machine is deterministic under test.
//!
//! ```ignore
//! let mut nav = SectionNav::new(deck.len(), trail, ripple);
//! let mut scroller = SectionScroller::new(config.ui.scroll.clone());
//!
//! // programmatic jump (rail click, next-section key)
//! let target = nav.begin_programmatic(3, scroller.suppression_window(), now);
//! scroller.go_to_offset(tracker::offset_for_section(target, rows), max, now);
//!
//! // each frame
//! let offset = scroller.update(now, max);
//! if let Some(idx) = tracker::section_at_offset(offset, rows, nav.count()) {
//!     nav.observe_passive(idx, now);
//! }
//! nav.tick(now);
//! ```

pub mod meter;
pub mod scroller;
pub mod state;
pub mod tracker;
pub mod visibility;

pub use scroller::SectionScroller;
pub use state::{NavPhase, SectionNav};
pub use visibility::VisibilityTracker;
