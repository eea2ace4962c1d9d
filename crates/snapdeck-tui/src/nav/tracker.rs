//! Offset -> index snapping for full-viewport sections.
//!
//! Deck-view sections are exactly one viewport tall, so the current
//! section is the nearest multiple of the viewport height. These are pure
//! functions; the phase machine decides whether a derived index is
//! actually applied.

/// Section index nearest to `offset`, or `None` when the viewport has no
/// height yet (layout not done; dividing would be meaningless).
pub fn section_at_offset(offset: u16, viewport_rows: u16, count: usize) -> Option<usize> {
    if viewport_rows == 0 || count == 0 {
        return None;
    }
    let index = (offset as u32 + viewport_rows as u32 / 2) / viewport_rows as u32;
    Some((index as usize).min(count - 1))
}

/// Scroll offset that puts section `index` exactly in view.
pub fn offset_for_section(index: usize, viewport_rows: u16) -> u16 {
    let offset = index as u32 * viewport_rows as u32;
    offset.min(u16::MAX as u32) as u16
}

/// Largest valid offset for a deck of `count` sections.
pub fn max_offset(count: usize, viewport_rows: u16) -> u16 {
    offset_for_section(count.saturating_sub(1), viewport_rows)
}
