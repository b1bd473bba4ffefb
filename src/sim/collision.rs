//! Overlap tests between axis-aligned rectangles
//!
//! Rectangles are half-open on their far edges, so two rects that only share
//! an edge or a corner do not overlap.

use super::rect::Rect;

/// True if the two rectangles share a region of non-zero area
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && b.x() < a.right() && a.y() < b.bottom() && b.y() < a.bottom()
}

/// True if `rect` overlaps any of `others`
pub fn overlaps_any<'a>(rect: &Rect, others: impl IntoIterator<Item = &'a Rect>) -> bool {
    others.into_iter().any(|other| rects_overlap(rect, other))
}

impl Rect {
    /// AABB overlap test (zero-area contact is not a collision)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self, other)
    }
}
