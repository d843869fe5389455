// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Vector algebra for the gm kinematics toolkit.

This crate provides:
- A three-component `f32` vector (`Vec3`) with arithmetic, normalization,
  axis rotations, planar angles, and the length-preserving `orbit_shift`.
- A two-component `Point` used as the orbit shift argument and as the planar
  projection of a `Vec3`.
- A column-major `Mat4` exposing the axis rotation constructors that `Vec3`
  rotations are built from.
- `LengthPolicy`, a flag that upgrades the unchecked zero-length division of
  `normalize`/`set_length`/`orbit_shift` into a reported `MathError`.

Conventions:
- Angles are radians; rotations are right-handed and applied as
  matrix-times-vector.
- Length-dependent operations do not guard against zero-length receivers.
  Callers must not invoke them on a zero vector unless they use the `try_*`
  forms with `LengthPolicy::Reject`; otherwise the result is non-finite.
"]

mod error;
mod mat4;
mod point;
mod policy;
mod vec3;

pub use error::MathError;
pub use mat4::Mat4;
pub use point::Point;
pub use policy::LengthPolicy;
pub use vec3::Vec3;

use std::f32::consts::TAU;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
