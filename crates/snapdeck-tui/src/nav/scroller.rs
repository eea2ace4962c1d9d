//! Eased scroll-to-offset animation.
//!
//! Drives the offset of one scrollable view. Call `go_to_offset()` to
//! begin an animation, then `update()` each frame to get the current
//! interpolated position. Timestamps are passed in so tests control time.

use std::time::{Duration, Instant};

use snapdeck_core::{EasingType, ScrollConfig};

/// Active scroll animation state.
#[derive(Debug, Clone)]
struct ActiveScroll {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller for one view.
#[derive(Debug, Clone)]
pub struct SectionScroller {
    animation: Option<ActiveScroll>,
    config: ScrollConfig,
    /// Current interpolated offset in rows
    offset: u16,
}

impl SectionScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            offset: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Final offset once any active animation completes.
    pub fn target_offset(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    /// How long passive index derivation should stay suppressed after a
    /// programmatic scroll starts. Smooth-scroll completion has no
    /// reliable end event, so the window is the animation duration plus a
    /// settle grace.
    pub fn suppression_window(&self) -> Duration {
        let animation = if self.is_smooth() {
            self.config.animation_duration_ms
        } else {
            0
        };
        Duration::from_millis(animation + self.config.settle_grace_ms)
    }

    /// Set the offset immediately, cancelling any animation.
    pub fn set_offset(&mut self, offset: u16, max: u16) {
        self.animation = None;
        self.offset = offset.min(max);
    }

    /// Adjust the offset by a wheel delta (positive = down). Cancels any
    /// animation; the newest interaction wins.
    pub fn nudge(&mut self, delta: i32, max: u16) {
        let target = (self.offset as i32 + delta).clamp(0, max as i32) as u16;
        self.set_offset(target, max);
    }

    /// Begin an eased scroll toward `target`. Jumps immediately when
    /// smooth scrolling is disabled or the offset is already there.
    pub fn go_to_offset(&mut self, target: u16, max: u16, now: Instant) {
        let target = target.min(max);

        if !self.is_smooth() {
            self.offset = target;
            self.animation = None;
            return;
        }

        if self.offset == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveScroll {
            started: now,
            from: self.offset,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset. Call every
    /// frame.
    pub fn update(&mut self, now: Instant, max: u16) -> u16 {
        if let Some(ref anim) = self.animation {
            let elapsed = now.saturating_duration_since(anim.started);
            if elapsed >= anim.duration {
                self.offset = anim.to.min(max);
                self.animation = None;
            } else {
                let t = elapsed.as_secs_f64() / anim.duration.as_secs_f64();
                let eased = anim.easing.apply(t);
                self.offset = lerp_rows(anim.from, anim.to, eased).min(max);
            }
        } else if self.offset > max {
            // viewport shrank under us
            self.offset = max;
        }

        self.offset
    }

    pub fn cancel(&mut self) {
        self.animation = None;
    }

    pub fn reset(&mut self) {
        self.animation = None;
        self.offset = 0;
    }
}

#[inline]
fn lerp_rows(from: u16, to: u16, t: f64) -> u16 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth_config() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut scroller = SectionScroller::new(config);

        scroller.go_to_offset(120, 200, Instant::now());
        assert_eq!(scroller.offset(), 120);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_animation_starts_and_completes() {
        let mut scroller = SectionScroller::new(smooth_config());
        let now = Instant::now();

        scroller.go_to_offset(100, 200, now);
        assert!(scroller.is_animating());
        assert_eq!(scroller.target_offset(), 100);

        // midway the offset is strictly between the endpoints
        let mid = scroller.update(now + Duration::from_millis(50), 200);
        assert!(mid > 0 && mid < 100, "mid = {}", mid);

        let done = scroller.update(now + Duration::from_millis(100), 200);
        assert_eq!(done, 100);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut scroller = SectionScroller::new(smooth_config());
        let now = Instant::now();
        scroller.set_offset(50, 100);
        scroller.go_to_offset(300, 100, now);
        assert!(scroller.target_offset() <= 100);
    }

    #[test]
    fn test_same_target_is_a_noop() {
        let mut scroller = SectionScroller::new(smooth_config());
        scroller.set_offset(40, 100);
        scroller.go_to_offset(40, 100, Instant::now());
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_nudge_cancels_animation() {
        let mut scroller = SectionScroller::new(smooth_config());
        let now = Instant::now();
        scroller.go_to_offset(100, 200, now);
        assert!(scroller.is_animating());

        scroller.nudge(3, 200);
        assert!(!scroller.is_animating());
        assert_eq!(scroller.offset(), 3);
    }

    #[test]
    fn test_nudge_clamps_at_edges() {
        let mut scroller = SectionScroller::new(smooth_config());
        scroller.nudge(-10, 200);
        assert_eq!(scroller.offset(), 0);
        scroller.set_offset(195, 200);
        scroller.nudge(50, 200);
        assert_eq!(scroller.offset(), 200);
    }

    #[test]
    fn test_suppression_window_covers_animation_plus_grace() {
        let scroller = SectionScroller::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 150,
            settle_grace_ms: 100,
            ..Default::default()
        });
        assert_eq!(scroller.suppression_window(), Duration::from_millis(250));

        let instant = SectionScroller::new(ScrollConfig {
            smooth_enabled: false,
            animation_duration_ms: 150,
            settle_grace_ms: 100,
            ..Default::default()
        });
        assert_eq!(instant.suppression_window(), Duration::from_millis(100));
    }

    #[test]
    fn test_update_reclamps_when_max_shrinks() {
        let mut scroller = SectionScroller::new(smooth_config());
        scroller.set_offset(180, 200);
        assert_eq!(scroller.update(Instant::now(), 100), 100);
    }
}
