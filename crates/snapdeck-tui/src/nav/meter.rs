//! Scroll-completion percentage.
//!
//! Pure derivation from raw scroll metrics; holds no state, so the deck
//! and reader bars cannot interfere with each other.

/// Completion percentage in [0, 100].
///
/// Defined as 0 when the content does not overflow the viewport.
pub fn completion_pct(offset: u16, extent: u16, viewport_rows: u16) -> f64 {
    if extent <= viewport_rows {
        return 0.0;
    }
    let scrollable = (extent - viewport_rows) as f64;
    (offset as f64 / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_when_content_fits() {
        assert_eq!(completion_pct(0, 100, 100), 0.0);
        assert_eq!(completion_pct(50, 100, 100), 0.0);
        assert_eq!(completion_pct(0, 40, 100), 0.0);
    }

    #[test]
    fn test_bottom_is_exactly_100() {
        assert_eq!(completion_pct(100, 200, 100), 100.0);
    }

    #[test]
    fn test_top_is_exactly_0() {
        assert_eq!(completion_pct(0, 200, 100), 0.0);
    }

    #[test]
    fn test_midpoint() {
        assert!((completion_pct(50, 200, 100) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_overscroll_clamps_to_100() {
        assert_eq!(completion_pct(150, 200, 100), 100.0);
    }
}
