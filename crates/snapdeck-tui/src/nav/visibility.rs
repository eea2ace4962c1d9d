//! Visibility-ratio section detection for the reader view.
//!
//! Long-form sections vary in height, so snapping to viewport multiples
//! does not apply. Instead each section is scored by how much of it
//! intersects an observation band in the upper-middle of the viewport,
//! and the highest-ratio section becomes the active table-of-contents
//! entry. When nothing intersects the band (mid-scroll between very tall
//! sections, or past the end), the last active entry is retained.

use snapdeck_core::ReaderConfig;

/// Tracks the active section index for a list of variable-height
/// sections.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    band_top_pct: u16,
    band_bottom_pct: u16,
    active: Option<usize>,
}

impl VisibilityTracker {
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            band_top_pct: config.band_top_pct.min(100),
            band_bottom_pct: config.band_bottom_pct.min(100),
            active: None,
        }
    }

    /// Last resolved active section, if any.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Re-score sections against the current scroll position.
    ///
    /// `heights` are the per-section heights in rows, in document order.
    /// Returns the active index; unchanged when the viewport has no
    /// height or nothing intersects the band.
    pub fn observe(&mut self, heights: &[u16], offset: u16, viewport_rows: u16) -> Option<usize> {
        if viewport_rows == 0 || heights.is_empty() {
            return self.active;
        }

        let vh = viewport_rows as u32;
        let band_start = offset as u32 + vh * self.band_top_pct as u32 / 100;
        let band_end = (offset as u32 + vh * (100 - self.band_bottom_pct) as u32 / 100)
            .max(band_start + 1);

        let mut best: Option<(usize, f64)> = None;
        let mut start = 0u32;
        for (index, &height) in heights.iter().enumerate() {
            let ratio = intersection_ratio(start, height as u32, band_start, band_end);
            // strictly greater: earlier sections win ties
            if ratio > 0.0 && best.map_or(true, |(_, r)| ratio > r) {
                best = Some((index, ratio));
            }
            start += height as u32;
        }

        if let Some((index, _)) = best {
            self.active = Some(index);
        }
        self.active
    }
}

/// Fraction of a section (start, len) lying inside [band_start, band_end).
fn intersection_ratio(start: u32, len: u32, band_start: u32, band_end: u32) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let end = start + len;
    let overlap_start = start.max(band_start);
    let overlap_end = end.min(band_end);
    if overlap_end <= overlap_start {
        return 0.0;
    }
    (overlap_end - overlap_start) as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> VisibilityTracker {
        VisibilityTracker::new(&ReaderConfig::default())
    }

    #[test]
    fn test_intersection_ratio() {
        // section [10, 20) vs band [0, 15): 5 of 10 rows visible
        assert!((intersection_ratio(10, 10, 0, 15) - 0.5).abs() < 1e-9);
        // disjoint
        assert_eq!(intersection_ratio(0, 10, 20, 30), 0.0);
        // fully contained
        assert!((intersection_ratio(22, 5, 20, 30) - 1.0).abs() < 1e-9);
        // zero-height section
        assert_eq!(intersection_ratio(5, 0, 0, 30), 0.0);
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = tracker();
        // viewport 100 rows, band [20, 40) at offset 0.
        // section 0: rows [0, 30) -> 10/30 in band; section 1: rows
        // [30, 45) -> 10/15 in band. Section 1 has the higher ratio.
        assert_eq!(tracker.observe(&[30, 15, 200], 0, 100), Some(1));
    }

    #[test]
    fn test_earlier_section_wins_ties() {
        let mut tracker = tracker();
        // band [20, 40): sections [0, 30) and [30, 60) each have 10 of
        // 30 rows in the band; the earlier one wins
        assert_eq!(tracker.observe(&[30, 30], 0, 100), Some(0));
    }

    #[test]
    fn test_retains_last_active_when_nothing_intersects() {
        let mut tracker = tracker();
        assert_eq!(tracker.observe(&[30, 15, 200], 0, 100), Some(1));

        // deep into the long last section
        assert_eq!(tracker.observe(&[30, 15, 200], 100, 100), Some(2));

        // scrolled past the end: nothing intersects, the last value holds
        assert_eq!(tracker.observe(&[30, 15, 200], 5000, 100), Some(2));
    }

    #[test]
    fn test_no_active_before_first_observation() {
        let tracker = tracker();
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_zero_viewport_is_skipped() {
        let mut tracker = tracker();
        assert_eq!(tracker.observe(&[30, 15], 0, 0), None);

        tracker.observe(&[30, 15], 0, 100);
        let active = tracker.active();
        assert_eq!(tracker.observe(&[30, 15], 10, 0), active);
    }

    #[test]
    fn test_reset_clears_active() {
        let mut tracker = tracker();
        tracker.observe(&[30, 15], 0, 100);
        assert!(tracker.active().is_some());
        tracker.reset();
        assert_eq!(tracker.active(), None);
    }
}
