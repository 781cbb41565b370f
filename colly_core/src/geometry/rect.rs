// colly_core/src/geometry/rect.rs
use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units.
///
/// Width and height may be negative; intersection normalises both corners
/// before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Origin (top-left for positive extents).
    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// Copy of this rectangle moved to `position`.
    pub fn with_position(self, position: Vec2) -> Self {
        Self { x: position.x, y: position.y, ..self }
    }

    pub fn left(&self) -> f32 { self.x.min(self.x + self.width) }
    pub fn right(&self) -> f32 { self.x.max(self.x + self.width) }
    pub fn top(&self) -> f32 { self.y.min(self.y + self.height) }
    pub fn bottom(&self) -> f32 { self.y.max(self.y + self.height) }

    /// Returns the overlapping area of both rectangles, or `None` when they
    /// do not share a positive area. Rectangles that only touch along an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> Option<Rect> {
        let inter_left = self.left().max(other.left());
        let inter_top = self.top().max(other.top());
        let inter_right = self.right().min(other.right());
        let inter_bottom = self.bottom().min(other.bottom());

        if inter_left < inter_right && inter_top < inter_bottom {
            Some(Rect::new(
                inter_left,
                inter_top,
                inter_right - inter_left,
                inter_bottom - inter_top,
            ))
        } else {
            None
        }
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersects(other).is_some()
    }
}

impl From<[f32; 4]> for Rect {
    fn from([x, y, width, height]: [f32; 4]) -> Self {
        Rect::new(x, y, width, height)
    }
}

impl From<Rect> for [f32; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_report_the_shared_area() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 1.0, 4.0, 2.0);

        assert_eq!(a.intersects(&b), Some(Rect::new(2.0, 1.0, 2.0, 2.0)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let cases = [
            (Rect::new(0.0, 0.0, 3.0, 3.0), Rect::new(1.0, 2.0, 5.0, 5.0)),
            (Rect::new(-2.0, -2.0, 1.5, 8.0), Rect::new(-3.0, 0.0, 4.0, 1.0)),
            (Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(5.0, 5.0, 1.0, 1.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(2.0, 2.0, 1.0, 1.0)),
        ];

        for (a, b) in cases {
            assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);

        assert_eq!(a.intersects(&Rect::new(1.0, 0.0, 1.0, 1.0)), None);
        assert_eq!(a.intersects(&Rect::new(0.0, 1.0, 1.0, 1.0)), None);
        assert_eq!(a.intersects(&Rect::new(1.0, 1.0, 1.0, 1.0)), None);
    }

    #[test]
    fn negative_extents_are_normalised() {
        // Same area as (0, 0, 2, 2), described from the opposite corner
        let flipped = Rect::new(2.0, 2.0, -2.0, -2.0);
        let other = Rect::new(1.0, 1.0, 2.0, 2.0);

        assert_eq!(flipped.intersects(&other), Some(Rect::new(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn zero_area_rect_never_intersects() {
        let line = Rect::new(0.5, 0.0, 0.0, 4.0);

        assert!(!line.overlaps(&Rect::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn edges_follow_the_normalised_corners() {
        let r = Rect::new(3.0, 1.0, -2.0, 4.0);

        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (1.0, 3.0, 1.0, 5.0));
        assert_eq!(r.with_position(vec2(7.0, 8.0)), Rect::new(7.0, 8.0, -2.0, 4.0));
    }
}
