//! Angle utilities and tolerance-based comparisons.
//!
//! These helpers are used by the test suites and the command line tool to compare
//! rotations and Lie-algebra vectors; none of them are on the numerical path of the
//! exponential or logarithmic maps.

use nalgebra::{Matrix3, Vector3, Vector6};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// 2π
pub const TWO_PI: f64 = TAU;

/// π/2
pub const PI_DIV_TWO: f64 = FRAC_PI_2;

/// π/180
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// 180/π
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Tolerance used when callers have no better estimate of the error they expect.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Wrap an angle in radians into the half-open range (-π, π].
pub fn wrap_angle(radians: f64) -> f64 {
    let wrapped = radians % TWO_PI;
    if wrapped > PI {
        wrapped - TWO_PI
    } else if wrapped <= -PI {
        wrapped + TWO_PI
    } else {
        wrapped
    }
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Absolute-tolerance equality.
///
/// Vector and matrix implementations compare element-wise, so two values are equal
/// when every pair of entries is within `tolerance`.
pub trait NearEqual {
    fn near_equal(&self, other: &Self, tolerance: f64) -> bool;
}

impl NearEqual for f64 {
    fn near_equal(&self, other: &Self, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl NearEqual for Vector3<f64> {
    fn near_equal(&self, other: &Self, tolerance: f64) -> bool {
        element_wise_near(self.iter(), other.iter(), tolerance)
    }
}

impl NearEqual for Vector6<f64> {
    fn near_equal(&self, other: &Self, tolerance: f64) -> bool {
        element_wise_near(self.iter(), other.iter(), tolerance)
    }
}

impl NearEqual for Matrix3<f64> {
    fn near_equal(&self, other: &Self, tolerance: f64) -> bool {
        element_wise_near(self.iter(), other.iter(), tolerance)
    }
}

fn element_wise_near<'a>(
    lhs: impl Iterator<Item = &'a f64>,
    rhs: impl Iterator<Item = &'a f64>,
    tolerance: f64,
) -> bool {
    lhs.zip(rhs).all(|(a, b)| a.near_equal(b, tolerance))
}

/// Compare two angles in radians, treating values that differ by a multiple of 2π
/// as equal.
pub fn near_equal_angle(rad_a: f64, rad_b: f64, tolerance: f64) -> bool {
    wrap_angle(rad_a - rad_b).abs() <= tolerance
}

/// Compare two axis-angle vectors as rotations.
///
/// Angles must agree. Two near-zero rotations are always equal regardless of axis,
/// and two rotations by π are equal when their axes are parallel or antipodal.
pub fn near_equal_axis_angle(
    aaxis_1: &Vector3<f64>,
    aaxis_2: &Vector3<f64>,
    tolerance: f64,
) -> bool {
    let angle_1 = aaxis_1.norm();
    let angle_2 = aaxis_2.norm();

    if !near_equal_angle(angle_1, angle_2, tolerance) {
        return false;
    }
    if near_equal_angle(angle_1, 0.0, tolerance) {
        return true;
    }

    let axis_1 = aaxis_1 / angle_1;
    let axis_2 = aaxis_2 / angle_2;
    if axis_1.near_equal(&axis_2, tolerance) {
        return true;
    }

    near_equal_angle(angle_1, PI, tolerance) && axis_1.near_equal(&(-axis_2), tolerance)
}

/// Compare two se(3)-style 6-vectors `[ρ; φ]`.
///
/// The translational half is compared element-wise and the rotational half with
/// [`near_equal_axis_angle`].
pub fn near_equal_lie_alg(vec_1: &Vector6<f64>, vec_2: &Vector6<f64>, tolerance: f64) -> bool {
    let rho_1 = Vector3::new(vec_1[0], vec_1[1], vec_1[2]);
    let rho_2 = Vector3::new(vec_2[0], vec_2[1], vec_2[2]);
    let aaxis_1 = Vector3::new(vec_1[3], vec_1[4], vec_1[5]);
    let aaxis_2 = Vector3::new(vec_2[3], vec_2[4], vec_2[5]);

    rho_1.near_equal(&rho_2, tolerance) && near_equal_axis_angle(&aaxis_1, &aaxis_2, tolerance)
}
