// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_3, FRAC_PI_4};
use gm_math::{deg_to_rad, rad_to_deg, Mat4, Vec3};

const EPS: f32 = 1e-6;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn mat4_mul_operator_matches_method() {
    let r = Mat4::rotation_x(FRAC_PI_4);
    let s = Mat4::scale(2.0, 3.0, 4.0);
    approx_eq16((r * s).to_array(), r.multiply(&s).to_array());
    approx_eq16((s * r).to_array(), s.multiply(&r).to_array());
    approx_eq16(
        (Mat4::identity() * s).to_array(),
        s.to_array(),
    );
}

#[test]
fn composed_rotations_match_sequential_vector_rotations() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let composed = Mat4::rotation_z(FRAC_PI_3) * Mat4::rotation_x(FRAC_PI_4);
    let expected = v.rotated_x(FRAC_PI_4).rotated_z(FRAC_PI_3).to_array();
    let got = (composed * v).to_array();
    for i in 0..3 {
        assert!((got[i] - expected[i]).abs() <= 1e-5, "{got:?} vs {expected:?}");
    }
}

#[test]
fn rotation_matches_direction_transform() {
    let v = Vec3::new(-2.0, 0.5, 1.0);
    let r = Mat4::rotation_y(1.1);
    assert_eq!(r * v, r.transform_direction(&v));
}

#[test]
fn default_is_identity() {
    assert_eq!(Mat4::default(), Mat4::identity());
    assert_eq!(Mat4::from(Mat4::identity().to_array()), Mat4::identity());
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0f32, 45.0, 90.0, 180.0, -90.0] {
        let back = rad_to_deg(deg_to_rad(deg));
        assert!((back - deg).abs() <= 1e-4, "expected {deg}, got {back}");
    }
}
