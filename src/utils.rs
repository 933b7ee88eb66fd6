// utils.rs
// Scalar and vector helpers shared by the force law, collisions and the renderer

use ultraviolet::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).mag()
}

/// A vector stored as magnitude and angle (radians, measured from +x).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Polar {
    pub magnitude: f32,
    pub angle: f32,
}

impl Polar {
    pub fn new(magnitude: f32, angle: f32) -> Self {
        Self { magnitude, angle }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Convert a Cartesian vector into polar form. `(0, 0)` maps to a zero
    /// magnitude with angle 0.
    pub fn from_cartesian(v: Vec2) -> Self {
        Self {
            magnitude: v.x.hypot(v.y),
            angle: v.y.atan2(v.x),
        }
    }

    pub fn to_cartesian(self) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        Vec2::new(self.magnitude * cos, self.magnitude * sin)
    }
}
