//! Hue wheel geometry.
//!
//! Maps between polar positions on a ring and the hue/saturation pair of a
//! color. Angles follow one convention in both directions:
//! - the configured offset rotates the hue zero-point
//! - the direction selects the winding order
//! - every angle is normalized into `[0, 360)` with [`modulo`]
//!
//! All coordinates are in the wheel's own logical pixels, origin at the top
//! left of its bounding square. Any device pixel scaling happens outside.

use std::f32::consts::TAU;

use wheel_ui::Point;

use crate::color::Hsva;
use crate::config::{Direction, IndicatorPlacement, WheelConfig};

/// Fraction of the radius the indicator sits at with fixed-ring placement.
pub const INDICATOR_RING_RATIO: f32 = 0.9;

/// Diameter of the hollow center relative to the wheel.
pub const INNER_HOLE_RATIO: f32 = 0.8;

/// Hue stops from red around the ring and back.
const HUE_STOPS_FORWARD: [&str; 7] = [
    "#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff", "#ff0000",
];

/// The same stops wound the other way.
const HUE_STOPS_REVERSE: [&str; 7] = [
    "#ff0000", "#ff00ff", "#0000ff", "#00ffff", "#00ff00", "#ffff00", "#ff0000",
];

/// Euclidean modulo that is non-negative for any sign of `a`.
#[inline]
pub fn modulo(a: f32, n: f32) -> f32 {
    ((a % n) + n) % n
}

/// Hue and saturation picked from a wheel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSaturation {
    /// Degrees in `[0, 360)`
    pub hue: f32,
    /// Percent in `[0, 100]`
    pub saturation: f32,
}

/// Visual parameters handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelStyle {
    /// Conic gradient stops, starting at the ring's zero angle
    pub gradient: [&'static str; 7],
    /// Rotation applied to the gradient ring, in degrees
    pub rotation: f32,
    /// Diameter of the hollow center relative to the wheel
    pub inner_ratio: f32,
}

/// Geometry of one wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    width: f32,
    direction: Direction,
    angle_offset: f32,
    placement: IndicatorPlacement,
}

impl Wheel {
    /// A wheel of diameter `width` with default direction and no offset.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            direction: Direction::default(),
            angle_offset: 0.0,
            placement: IndicatorPlacement::default(),
        }
    }

    pub fn from_config(config: &WheelConfig) -> Self {
        Self {
            width: config.width,
            direction: config.direction,
            angle_offset: config.angle_offset,
            placement: config.placement,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_angle_offset(mut self, degrees: f32) -> Self {
        self.angle_offset = degrees;
        self
    }

    pub fn with_placement(mut self, placement: IndicatorPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn radius(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(r, r)
    }

    /// Apply the configured offset and direction to a raw angle.
    ///
    /// `invert` selects the color-to-position direction; the input handling
    /// direction passes `false`.
    pub fn angle_offset(&self, angle: f32, invert: bool) -> f32 {
        let offset = self.angle_offset;
        let angle = match (invert, self.direction) {
            (true, Direction::Clockwise) => offset + angle,
            (false, Direction::Clockwise) => 360.0 - offset + angle,
            (true, Direction::Anticlockwise) => offset + 180.0 - angle,
            (false, Direction::Anticlockwise) => offset - angle,
        };
        modulo(angle, 360.0)
    }

    /// Pixel position of the indicator for a color.
    ///
    /// With [`IndicatorPlacement::FixedRing`] only the hue matters: the
    /// indicator stays at 90% of the radius. Saturation therefore does not
    /// survive a trip through [`Wheel::position_to_value`].
    pub fn value_to_position(&self, hsva: &Hsva) -> Point {
        let center = self.center();
        let handle_angle = (180.0 + self.angle_offset(hsva.h, true)) * (TAU / 360.0);
        let distance = match self.placement {
            IndicatorPlacement::FixedRing => self.radius() * INDICATOR_RING_RATIO,
            IndicatorPlacement::Saturation => (hsva.s / 100.0) * self.radius(),
        };
        let sign = self.direction.sign();

        Point::new(
            center.x + distance * handle_angle.cos() * sign,
            center.y + distance * handle_angle.sin() * sign,
        )
    }

    /// Hue and saturation under a pixel position.
    ///
    /// Positions beyond the rim clamp to full saturation. At the exact center
    /// the hue is arbitrary and saturation is 0.
    pub fn position_to_value(&self, x: f32, y: f32) -> HueSaturation {
        let center = self.center();
        let radius = self.radius();
        let dx = center.x - x;
        let dy = center.y - y;

        let raw = (-dy).atan2(-dx) * (360.0 / TAU);
        let hue = modulo(self.angle_offset(raw, false).round(), 360.0);

        let distance = dx.hypot(dy).min(radius);
        let saturation = if radius > 0.0 {
            ((100.0 / radius) * distance).round()
        } else {
            0.0
        };

        HueSaturation { hue, saturation }
    }

    /// Rendering parameters for the gradient ring.
    pub fn style(&self) -> WheelStyle {
        let gradient = match self.direction {
            Direction::Anticlockwise => HUE_STOPS_FORWARD,
            Direction::Clockwise => HUE_STOPS_REVERSE,
        };
        WheelStyle {
            gradient,
            rotation: self.angle_offset + 90.0,
            inner_ratio: INNER_HOLE_RATIO,
        }
    }
}
