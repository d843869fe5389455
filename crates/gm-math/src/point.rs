// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Planar `(x, y)` pair.
///
/// Consumed by [`crate::Vec3::orbit_shift`], where `x` is a rotation angle in
/// radians and `y` a fractional height offset, and returned by
/// [`crate::Vec3::point`] as the XY projection of a vector.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// First component.
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Second component.
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}
