// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use gm_math::{Point, Vec3};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-6, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        approx_eq(a[i], b[i]);
    }
}

#[test]
fn length_of_three_four_five() {
    assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    assert_eq!(Vec3::ZERO.length(), 0.0);
    assert_eq!(Vec3::new(-3.0, 0.0, -4.0).length(), 5.0);
}

#[test]
fn rotated_z_quarter_turn_maps_x_to_y() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotated_z(FRAC_PI_2);
    approx_eq3(v.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn axis_rotations_are_right_handed() {
    approx_eq3(Vec3::UNIT_Y.rotated_x(FRAC_PI_2).to_array(), [0.0, 0.0, 1.0]);
    approx_eq3(Vec3::UNIT_Z.rotated_y(FRAC_PI_2).to_array(), [1.0, 0.0, 0.0]);
    approx_eq3(Vec3::UNIT_X.rotated_z(PI).to_array(), [-1.0, 0.0, 0.0]);
    // Rotation about an axis leaves that axis' component untouched.
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.rotated_x(0.7).x(), 1.0);
    assert_eq!(v.rotated_y(0.7).y(), 2.0);
    assert_eq!(v.rotated_z(0.7).z(), 3.0);
}

#[test]
fn planar_angles_use_atan2() {
    assert_eq!(Vec3::ZERO.xy_angle(), 0.0);
    assert_eq!(Vec3::ZERO.xz_angle(), 0.0);
    approx_eq(Vec3::new(1.0, 1.0, 0.0).xy_angle(), FRAC_PI_4);
    approx_eq(Vec3::new(1.0, 0.0, -1.0).xz_angle(), -FRAC_PI_4);
    approx_eq(Vec3::new(-1.0, 0.0, 0.0).xy_angle(), PI);
}

#[test]
fn component_replacement_leaves_others_untouched() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.with_x(9.0).to_array(), [9.0, 2.0, 3.0]);
    assert_eq!(v.with_y(9.0).to_array(), [1.0, 9.0, 3.0]);
    assert_eq!(v.with_z(9.0).to_array(), [1.0, 2.0, 9.0]);
    assert_eq!(v.adding_x(0.5).to_array(), [1.5, 2.0, 3.0]);
    assert_eq!(v.adding_y(-2.0).to_array(), [1.0, 0.0, 3.0]);
    assert_eq!(v.adding_z(1.0).to_array(), [1.0, 2.0, 4.0]);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn cross_follows_right_hand_rule() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(Vec3::UNIT_Z.cross(&Vec3::UNIT_X), Vec3::UNIT_Y);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), -Vec3::UNIT_Z);
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(&Vec3::new(4.0, -5.0, 6.0)), 12.0);
}

#[test]
fn flip_height_swaps_y_and_z() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    v.flip_height();
    assert_eq!(v.to_array(), [1.0, 3.0, 2.0]);
    v.flip_height();
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn mutating_and_value_forms_agree() {
    let v = Vec3::new(2.0, -1.0, 2.0);
    let mut n = v;
    n.normalize();
    assert_eq!(n, v.normalized());
    approx_eq(n.length(), 1.0);

    let mut l = v;
    l.set_length(6.0);
    approx_eq3(l.to_array(), [4.0, -2.0, 4.0]);
    approx_eq3(v.with_length(6.0).to_array(), [4.0, -2.0, 4.0]);
    // value forms leave the receiver alone
    assert_eq!(v.to_array(), [2.0, -1.0, 2.0]);

    let shift = Point::new(0.4, -0.2);
    let mut o = v;
    o.orbit_shift(shift);
    assert_eq!(o, v.orbit_shifted(shift));
}

#[test]
fn scalar_operators_apply_to_every_component() {
    let v = Vec3::new(4.0, 8.0, -2.0);
    assert_eq!((v + 1.0).to_array(), [5.0, 9.0, -1.0]);
    assert_eq!((v - 1.0).to_array(), [3.0, 7.0, -3.0]);
    assert_eq!((v * 0.5).to_array(), [2.0, 4.0, -1.0]);
    assert_eq!((v / 2.0).to_array(), [2.0, 4.0, -1.0]);

    let mut w = v;
    w -= 4.0;
    assert_eq!(w.to_array(), [0.0, 4.0, -6.0]);
}

#[test]
fn vector_operators_are_component_wise() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!((a + b).to_array(), [5.0, 7.0, 9.0]);
    assert_eq!((b - a).to_array(), [3.0, 3.0, 3.0]);
    assert_eq!((a * b).to_array(), [4.0, 10.0, 18.0]);
    assert_eq!((b / a).to_array(), [4.0, 2.5, 2.0]);
}

#[test]
fn orbit_shift_with_zero_shift_is_identity() {
    let v = Vec3::new(1.0, 2.0, 2.0);
    approx_eq3(v.orbit_shifted(Point::ZERO).to_array(), v.to_array());
}

#[test]
fn orbit_shift_rotates_then_lifts_height() {
    // Quarter turn about Z with no height shift is a pure rotation.
    let v = Vec3::new(2.0, 0.0, 0.0);
    approx_eq3(
        v.orbit_shifted(Point::new(FRAC_PI_2, 0.0)).to_array(),
        [0.0, 2.0, 0.0],
    );

    // Height shift of 0.5 adds one full length to z before rescaling, so a
    // horizontal vector ends up at 45° elevation.
    let lifted = v.orbit_shifted(Point::new(0.0, 0.5));
    approx_eq(lifted.length(), 2.0);
    approx_eq(lifted.xz_angle(), FRAC_PI_4);
}

#[test]
fn point_projects_xy() {
    let p = Vec3::new(1.5, -2.5, 7.0).point();
    assert_eq!(p.to_array(), [1.5, -2.5]);
}

#[test]
fn display_uses_float_literal_style() {
    assert_eq!(
        Vec3::new(3.0, 4.0, 0.0).to_string(),
        "{ 3.000000f, 4.000000f, 0.000000f }"
    );
    assert_eq!(
        Vec3::new(-1.5, 0.25, 100.0).to_string(),
        "{ -1.500000f, 0.250000f, 100.000000f }"
    );
}

#[test]
fn array_conversions() {
    let v = Vec3::from([1.0, 2.0, 3.0]);
    let arr: [f32; 3] = v.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);
    assert_eq!(Vec3::default(), Vec3::ZERO);
}
