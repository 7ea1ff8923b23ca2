//! Geometry types shared by the placement engine and the renderer.

pub mod placement;
pub mod style;

use crate::tags::MoodTag;
use style::TagStyle;

/// Off-canvas position marking "computed but not displayable".
///
/// A tag that exhausts its attempt budget keeps its radius but sits here;
/// consumers treat it as "not visible", never as absent.
pub const SENTINEL_POS: (f32, f32) = (-999.0, -999.0);

/// Drawable area of the mood map, in panel-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Placement only proceeds on a canvas with positive extent.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// A circle, center-based.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn distance_to(&self, other: &Circle) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when the centers are closer than the two radii plus `padding`.
    pub fn overlaps(&self, other: &Circle, padding: f32) -> bool {
        self.distance_to(other) < self.radius + other.radius + padding
    }
}

/// A mood tag with its computed circle and presentational attributes.
#[derive(Clone, Debug)]
pub struct PlacedTag {
    pub tag: MoodTag,
    pub circle: Circle,
    pub style: TagStyle,
}

impl PlacedTag {
    /// False when placement fell back to the off-canvas sentinel.
    pub fn is_visible(&self) -> bool {
        (self.circle.x, self.circle.y) != SENTINEL_POS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_overlap_respects_padding() {
        let a = Circle { x: 0.0, y: 0.0, radius: 10.0 };
        let b = Circle { x: 25.0, y: 0.0, radius: 10.0 };
        // 25 apart: clear without padding, too close with padding 10
        assert!(!a.overlaps(&b, 0.0));
        assert!(a.overlaps(&b, 10.0));
    }

    #[test]
    fn canvas_validity() {
        assert!(Canvas::new(375.0, 450.0).is_valid());
        assert!(!Canvas::new(0.0, 450.0).is_valid());
        assert!(!Canvas::new(375.0, -1.0).is_valid());
    }
}
