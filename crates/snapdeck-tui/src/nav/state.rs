//! Canonical navigation state and its phase machine.
//!
//! The phase machine replaces a shared "is programmatic scroll" flag:
//! passive writes are admitted in exactly one place, so the invariant
//! that a programmatic jump is never overwritten by a stale passive
//! observation is enforced structurally rather than by convention.

use std::time::{Duration, Instant};

/// Who currently drives the section index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    /// Mounted, no scroll activity observed yet
    Idle,
    /// Passive scroll observation drives the index
    PassiveTracking,
    /// A programmatic scroll is in flight; passive writes are suppressed
    ProgrammaticTransition,
    /// The user is scrubbing the rail; writes go through the
    /// programmatic path only
    Dragging,
}

/// Transient connecting-line animation between two indicators.
#[derive(Debug, Clone, Copy)]
struct Trail {
    from: usize,
    to: usize,
    started: Instant,
}

/// One-shot press acknowledgment on a single indicator.
#[derive(Debug, Clone, Copy)]
struct Ripple {
    index: usize,
    started: Instant,
}

/// Navigation state for one mounted view: current/previous index, phase,
/// and the transient trail/ripple timers.
///
/// Created when a view is entered (index 0) and dropped when it is left;
/// nothing here outlives its view.
#[derive(Debug, Clone)]
pub struct SectionNav {
    count: usize,
    current: usize,
    previous: usize,
    phase: NavPhase,
    suppress_until: Option<Instant>,
    trail: Option<Trail>,
    ripple: Option<Ripple>,
    trail_duration: Duration,
    ripple_duration: Duration,
}

impl SectionNav {
    pub fn new(count: usize, trail_duration: Duration, ripple_duration: Duration) -> Self {
        Self {
            count: count.max(1),
            current: 0,
            previous: 0,
            phase: NavPhase::Idle,
            suppress_until: None,
            trail: None,
            ripple: None,
            trail_duration,
            ripple_duration,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> usize {
        self.previous
    }

    #[inline]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    #[inline]
    fn clamp(&self, index: usize) -> usize {
        index.min(self.count - 1)
    }

    fn window_open(&self, now: Instant) -> bool {
        self.suppress_until.is_some_and(|until| now < until)
    }

    /// Move the index and start a trail when it actually changes.
    fn apply(&mut self, target: usize, now: Instant) {
        if target == self.current {
            return;
        }
        self.previous = self.current;
        self.current = target;
        // previous == current would be a zero-length trail; never started
        self.trail = Some(Trail {
            from: self.previous,
            to: self.current,
            started: now,
        });
    }

    /// Passive scroll observation. Returns whether the write was admitted.
    ///
    /// Ignored while dragging and while a programmatic suppression window
    /// is open; once the window has lapsed the observation is admitted and
    /// the phase returns to passive tracking.
    pub fn observe_passive(&mut self, index: usize, now: Instant) -> bool {
        match self.phase {
            NavPhase::Dragging => false,
            NavPhase::ProgrammaticTransition if self.window_open(now) => false,
            _ => {
                self.phase = NavPhase::PassiveTracking;
                self.suppress_until = None;
                self.apply(self.clamp(index), now);
                true
            }
        }
    }

    /// Programmatic jump: clamps the target, updates the index
    /// optimistically, and opens a suppression window of `window`.
    ///
    /// Returns the clamped target. A drag in progress stays in
    /// [`NavPhase::Dragging`]; the window still applies.
    pub fn begin_programmatic(&mut self, target: usize, window: Duration, now: Instant) -> usize {
        let target = self.clamp(target);
        self.apply(target, now);
        self.suppress_until = Some(now + window);
        if self.phase != NavPhase::Dragging {
            self.phase = NavPhase::ProgrammaticTransition;
        }
        target
    }

    pub fn begin_drag(&mut self) {
        self.phase = NavPhase::Dragging;
    }

    /// End a drag: fall back to the programmatic phase when the last
    /// scrub's window is still open, otherwise resume passive tracking.
    pub fn end_drag(&mut self, now: Instant) {
        if self.phase != NavPhase::Dragging {
            return;
        }
        self.phase = if self.window_open(now) {
            NavPhase::ProgrammaticTransition
        } else {
            NavPhase::PassiveTracking
        };
    }

    /// Close the suppression window early (the scroll has settled on its
    /// target). No-op while dragging or idle.
    pub fn close_suppression(&mut self) {
        if self.phase == NavPhase::ProgrammaticTransition {
            self.phase = NavPhase::PassiveTracking;
            self.suppress_until = None;
        }
    }

    /// Start (or replace) the press ripple on an indicator.
    pub fn press(&mut self, index: usize, now: Instant) {
        self.ripple = Some(Ripple {
            index: self.clamp(index),
            started: now,
        });
    }

    /// Expire the suppression window and any lapsed trail/ripple timers.
    /// Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.phase == NavPhase::ProgrammaticTransition && !self.window_open(now) {
            self.phase = NavPhase::PassiveTracking;
            self.suppress_until = None;
        }
        if let Some(trail) = self.trail {
            if now.duration_since(trail.started) >= self.trail_duration {
                self.trail = None;
                self.previous = self.current;
            }
        }
        if let Some(ripple) = self.ripple {
            if now.duration_since(ripple.started) >= self.ripple_duration {
                self.ripple = None;
            }
        }
    }

    /// Active trail with its animation progress in [0, 1].
    pub fn trail_progress(&self, now: Instant) -> Option<(usize, usize, f64)> {
        let trail = self.trail?;
        if self.trail_duration.is_zero() {
            return None;
        }
        let elapsed = now.duration_since(trail.started);
        if elapsed >= self.trail_duration {
            return None;
        }
        let t = elapsed.as_secs_f64() / self.trail_duration.as_secs_f64();
        Some((trail.from, trail.to, t))
    }

    /// Indicator currently showing a press ripple, if any.
    pub fn ripple_index(&self, now: Instant) -> Option<usize> {
        let ripple = self.ripple?;
        if now.duration_since(ripple.started) >= self.ripple_duration {
            return None;
        }
        Some(ripple.index)
    }
}
