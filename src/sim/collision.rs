//! Axis-aligned footprint intersection
//!
//! Every entity anchors at center-x / bottom-y. A footprint of width `w`
//! and height `h` spans `[x - w/2, x + w/2] × [y - h, y]` in screen space
//! (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a footprint from a center-x / bottom-y anchor
    #[inline]
    pub fn from_anchor(anchor: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: anchor.x - w / 2.0,
            y: anchor.y - h,
            w,
            h,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Zero or negative extent on either axis
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Strict overlap on both axes; touching edges do not count
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_edge_touching_is_not_a_hit() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_degenerate_never_hits() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let flat = Rect::new(2.0, 2.0, 5.0, 0.0);
        let thin = Rect::new(2.0, 2.0, 0.0, 5.0);
        assert!(!a.intersects(&flat));
        assert!(!a.intersects(&thin));
        assert!(!flat.intersects(&flat));
    }

    #[test]
    fn test_from_anchor_is_center_bottom() {
        let r = Rect::from_anchor(Vec2::new(400.0, 500.0), 50.0, 80.0);
        assert_eq!(r.left(), 375.0);
        assert_eq!(r.right(), 425.0);
        assert_eq!(r.top(), 420.0);
        assert_eq!(r.bottom(), 500.0);
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_zero_width_never_hits(a in rect(), x in -500.0f32..500.0, y in -500.0f32..500.0, h in 0.0f32..200.0) {
            let flat = Rect::new(x, y, 0.0, h);
            prop_assert!(!flat.intersects(&a));
        }

        #[test]
        fn prop_solid_rect_hits_itself(x in -500.0f32..500.0, y in -500.0f32..500.0, w in 1.0f32..200.0, h in 1.0f32..200.0) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.intersects(&r));
        }
    }
}
