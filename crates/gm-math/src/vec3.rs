// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{LengthPolicy, Mat4, MathError, Point};

/// Three-component `f32` vector used for joint directions and offsets.
///
/// * Any finite triple is valid; there is no implicit normalization.
/// * Mutating operations (`normalize`, `set_length`, `flip_height`,
///   `orbit_shift`) return `&mut Self` for chaining. Each has a
///   value-returning counterpart that leaves the receiver untouched.
/// * `normalize`, `normalized`, `set_length`, `with_length`, `orbit_shift`
///   and `orbit_shifted` divide by the current length without checking it.
///   On a zero vector they produce NaN/infinite components. Use the `try_*`
///   forms with [`LengthPolicy::Reject`] to get an error instead.
///
/// # Examples
/// ```
/// use gm_math::Vec3;
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.to_string(), "{ 3.000000f, 4.000000f, 0.000000f }");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component (the height axis in the Z-up convention).
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Projection onto the XY plane.
    pub const fn point(&self) -> Point {
        Point::new(self.data[0], self.data[1])
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Rescales in place so that `length()` becomes `length`.
    ///
    /// Negative `length` flips the direction. Unchecked on a zero vector.
    pub fn set_length(&mut self, length: f32) -> &mut Self {
        *self *= length / self.length();
        self
    }

    /// Returns a copy rescaled to `length`. Unchecked on a zero vector.
    pub fn with_length(&self, length: f32) -> Self {
        *self * length / self.length()
    }

    /// Rescales in place to unit length. Unchecked on a zero vector.
    pub fn normalize(&mut self) -> &mut Self {
        *self *= 1.0 / self.length();
        self
    }

    /// Returns a unit-length copy. Unchecked on a zero vector.
    pub fn normalized(&self) -> Self {
        let mut result = *self;
        result.normalize();
        result
    }

    /// Returns the length, reporting degenerate values under `policy`.
    ///
    /// With [`LengthPolicy::Propagate`] this is [`Vec3::length`] wrapped in
    /// `Ok`. With [`LengthPolicy::Reject`] a non-finite vector or length is
    /// [`MathError::NonFinite`] and a zero length is [`MathError::ZeroLength`].
    pub fn checked_length(&self, policy: LengthPolicy) -> Result<f32, MathError> {
        let length = self.length();
        if !policy.is_strict() {
            return Ok(length);
        }
        if !self.is_finite() || !length.is_finite() {
            return Err(MathError::NonFinite);
        }
        if length <= 0.0 {
            return Err(MathError::ZeroLength);
        }
        Ok(length)
    }

    /// Checked form of [`Vec3::normalized`].
    pub fn try_normalized(&self, policy: LengthPolicy) -> Result<Self, MathError> {
        self.checked_length(policy)?;
        Ok(self.normalized())
    }

    /// Checked form of [`Vec3::with_length`].
    pub fn try_with_length(&self, length: f32, policy: LengthPolicy) -> Result<Self, MathError> {
        self.checked_length(policy)?;
        Ok(self.with_length(length))
    }

    /// Copy with `x` replaced.
    pub fn with_x(&self, x: f32) -> Self {
        Self::new(x, self.data[1], self.data[2])
    }

    /// Copy with `y` replaced.
    pub fn with_y(&self, y: f32) -> Self {
        Self::new(self.data[0], y, self.data[2])
    }

    /// Copy with `z` replaced.
    pub fn with_z(&self, z: f32) -> Self {
        Self::new(self.data[0], self.data[1], z)
    }

    /// Copy with `x` incremented by `dx`.
    pub fn adding_x(&self, dx: f32) -> Self {
        self.with_x(self.data[0] + dx)
    }

    /// Copy with `y` incremented by `dy`.
    pub fn adding_y(&self, dy: f32) -> Self {
        self.with_y(self.data[1] + dy)
    }

    /// Copy with `z` incremented by `dz`.
    pub fn adding_z(&self, dz: f32) -> Self {
        self.with_z(self.data[2] + dz)
    }

    /// Rotated about the X axis by `angle` radians.
    pub fn rotated_x(&self, angle: f32) -> Self {
        Mat4::rotation_x(angle) * *self
    }

    /// Rotated about the Y axis by `angle` radians.
    pub fn rotated_y(&self, angle: f32) -> Self {
        Mat4::rotation_y(angle) * *self
    }

    /// Rotated about the Z axis by `angle` radians.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use gm_math::Vec3;
    /// let v = Vec3::UNIT_X.rotated_z(FRAC_PI_2);
    /// assert!((v.y() - 1.0).abs() < 1e-6 && v.x().abs() < 1e-6);
    /// ```
    pub fn rotated_z(&self, angle: f32) -> Self {
        Mat4::rotation_z(angle) * *self
    }

    /// Angle in the XY plane, `atan2(y, x)`, in `(-π, π]`. Zero for the zero
    /// vector.
    pub fn xy_angle(&self) -> f32 {
        self.data[1].atan2(self.data[0])
    }

    /// Angle in the XZ plane, `atan2(z, x)`, in `(-π, π]`. Zero for the zero
    /// vector.
    pub fn xz_angle(&self) -> f32 {
        self.data[2].atan2(self.data[0])
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Swaps `y` and `z` in place, converting between Y-up and Z-up.
    /// Applying it twice restores the original vector.
    pub fn flip_height(&mut self) -> &mut Self {
        self.data.swap(1, 2);
        self
    }

    /// Swings the vector around the Z axis and shifts it along the height
    /// axis while keeping its length.
    ///
    /// `shift.x()` is the rotation angle in radians. `shift.y()` is a
    /// fractional height offset: the Z component grows by
    /// `shift.y() * 2 * length()`, after which the vector is rescaled back
    /// to its original length. Unchecked on a zero vector.
    ///
    /// ```
    /// use gm_math::{Point, Vec3};
    /// let mut v = Vec3::new(2.0, 0.0, 0.0);
    /// v.orbit_shift(Point::new(0.0, 0.5));
    /// assert!((v.length() - 2.0).abs() < 1e-5);
    /// assert!(v.z() > 0.0);
    /// ```
    pub fn orbit_shift(&mut self, shift: Point) -> &mut Self {
        *self = self.rotated_z(shift.x());
        let length = self.length();
        self.data[2] += shift.y() * length * 2.0;
        self.set_length(length)
    }

    /// Value-returning form of [`Vec3::orbit_shift`].
    pub fn orbit_shifted(&self, shift: Point) -> Self {
        let mut result = *self;
        result.orbit_shift(shift);
        result
    }

    /// Checked form of [`Vec3::orbit_shifted`].
    ///
    /// Under [`LengthPolicy::Reject`] both the receiver and the height-shifted
    /// intermediate must have a non-zero finite length.
    pub fn try_orbit_shifted(&self, shift: Point, policy: LengthPolicy) -> Result<Self, MathError> {
        let mut result = self.rotated_z(shift.x());
        let length = result.checked_length(policy)?;
        result.data[2] += shift.y() * length * 2.0;
        result.checked_length(policy)?;
        result.set_length(length);
        Ok(result)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

/// Renders `{ X f, Y f, Z f }` with six fractional digits per component,
/// e.g. `{ 1.500000f, -2.000000f, 0.000000f }`.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.data;
        write!(f, "{{ {x:.6}f, {y:.6}f, {z:.6}f }}")
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

macro_rules! impl_component_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident => $sym:tt;)*) => {
        $(
            impl $op for Vec3 {
                type Output = Self;
                fn $method(self, rhs: Self) -> Self {
                    self.zip(rhs, |a, b| a $sym b)
                }
            }

            impl $op<f32> for Vec3 {
                type Output = Self;
                fn $method(self, rhs: f32) -> Self {
                    self.map(|a| a $sym rhs)
                }
            }

            impl $assign for Vec3 {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $sym rhs;
                }
            }

            impl $assign<f32> for Vec3 {
                fn $assign_method(&mut self, rhs: f32) {
                    *self = *self $sym rhs;
                }
            }
        )*
    };
}

impl_component_ops! {
    Add::add, AddAssign::add_assign => +;
    Sub::sub, SubAssign::sub_assign => -;
    Mul::mul, MulAssign::mul_assign => *;
    Div::div, DivAssign::div_assign => /;
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}
