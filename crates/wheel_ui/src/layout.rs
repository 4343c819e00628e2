//! Geometry primitives shared by the interaction layer.

use serde::{Deserialize, Serialize};

/// Clamps a value between an upper and lower bound.
///
/// NaN passes through unchanged, unlike `f32::clamp` it never panics on
/// inverted bounds.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A rectangle defined by position and size.
///
/// Used as the bounding box of a trackable region, in the same coordinate
/// space as incoming pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Express a pointer position relative to this rectangle.
    ///
    /// `left`/`top` are fractions clamped to `[0, 1]`; `x`/`y` are raw pixel
    /// offsets from the top-left corner and may fall outside the rectangle.
    pub fn relative_position(&self, pointer: Point) -> RelativePosition {
        let x = pointer.x - self.x;
        let y = pointer.y - self.y;
        RelativePosition {
            left: fraction(x, self.width),
            top: fraction(y, self.height),
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Degenerate extents collapse to the origin instead of producing NaN.
fn fraction(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        clamp(offset / extent, 0.0, 1.0)
    } else {
        0.0
    }
}

/// A pointer position normalized to a region's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativePosition {
    /// Horizontal fraction of the region width, clamped to `[0, 1]`
    pub left: f32,
    /// Vertical fraction of the region height, clamped to `[0, 1]`
    pub top: f32,
    /// Unclamped horizontal offset in pixels
    pub x: f32,
    /// Unclamped vertical offset in pixels
    pub y: f32,
    /// Region width at the time of the event
    pub width: f32,
    /// Region height at the time of the event
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_relative_position_inside() {
        let rect = Rectangle::new(10.0, 20.0, 200.0, 100.0);
        let pos = rect.relative_position(Point::new(60.0, 70.0));
        assert_eq!(pos.left, 0.25);
        assert_eq!(pos.top, 0.5);
        assert_eq!(pos.x, 50.0);
        assert_eq!(pos.y, 50.0);
        assert_eq!(pos.width, 200.0);
        assert_eq!(pos.height, 100.0);
    }

    #[test]
    fn test_relative_position_outside_keeps_raw_pixels() {
        let rect = Rectangle::new(10.0, 20.0, 200.0, 100.0);
        let pos = rect.relative_position(Point::new(-40.0, 500.0));
        assert_eq!(pos.left, 0.0);
        assert_eq!(pos.top, 1.0);
        assert_eq!(pos.x, -50.0);
        assert_eq!(pos.y, 480.0);
    }

    #[test]
    fn test_relative_position_zero_sized_region() {
        let rect = Rectangle::new(0.0, 0.0, 0.0, 0.0);
        let pos = rect.relative_position(Point::new(5.0, 5.0));
        assert_eq!(pos.left, 0.0);
        assert_eq!(pos.top, 0.0);
        assert_eq!((pos.x, pos.y), (5.0, 5.0));
    }
}
