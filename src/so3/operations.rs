//! Exponential and logarithmic maps between so(3) and SO(3).
//!
//! The maps work directly on 3x3 rotation matrices and 3x1 axis-angle vectors:
//!
//! ```text
//! exp: φ = θ·â  ↦  C = cos θ·I + (1 − cos θ)·â·âᵀ + sin θ·â^
//! log: C        ↦  φ  with θ ∈ [0, π]
//! ```
//!
//! # Numerical Conditioning
//!
//! Both maps have removable singularities where sin θ ≈ 0. The exponential map
//! short-circuits to the identity below [`EXP_MAP_ZERO_TOLERANCE`]. The logarithmic map
//! recovers θ with `atan2`, which stays accurate over the whole range, and then takes
//! one of three branches (see [`LogMapBranch`]):
//!
//! | Branch     | Region              | Axis source                                |
//! |------------|---------------------|--------------------------------------------|
//! | `NearZero` | θ < tol             | first order: vex(C − Cᵀ)/2                 |
//! | `Generic`  | tol ≤ θ ≤ π − tol   | θ/(2 sin θ)·vex(C − Cᵀ)                    |
//! | `NearPi`   | θ > π − tol         | dominant column of (C + Cᵀ)/2 − cos θ·I    |
//!
//! where tol is [`LOG_MAP_TOLERANCE`].

use super::{AxisAngle, RotationMatrix};
use nalgebra::{Matrix3, Vector3};
use std::f64::consts::PI;
use tracing::trace;

/// Below this angle the exponential map returns the identity.
pub const EXP_MAP_ZERO_TOLERANCE: f64 = 1e-12;

/// Distance from 0 and from π at which the logarithmic map leaves its generic branch.
pub const LOG_MAP_TOLERANCE: f64 = 1e-6;

/// Largest tolerated `|1 − det C|` before a conditional reprojection fires.
pub const DETERMINANT_DRIFT_TOLERANCE: f64 = 1e-6;

/// Algorithm used to evaluate the exponential map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpMapMethod {
    /// Rodrigues' rotation formula. Orthonormal to floating-point precision.
    #[default]
    ClosedForm,
    /// `I + φ^ + (φ^)²/2! + … + (φ^)ⁿ/n!`.
    ///
    /// The result is not reprojected and is generally not orthonormal.
    TruncatedSeries(u32),
}

/// Region of the logarithmic map an angle falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMapBranch {
    NearZero,
    Generic,
    NearPi,
}

impl LogMapBranch {
    /// Classify a rotation angle in [0, π].
    pub fn classify(angle: f64) -> Self {
        if angle < LOG_MAP_TOLERANCE {
            LogMapBranch::NearZero
        } else if PI - angle < LOG_MAP_TOLERANCE {
            LogMapBranch::NearPi
        } else {
            LogMapBranch::Generic
        }
    }
}

/// Hat operator: builds the skew-symmetric matrix φ^ such that `φ^ · u = φ × u`.
///
/// ```text
/// φ^ = |  0   -φ₃   φ₂ |
///      |  φ₃   0   -φ₁ |
///      | -φ₂   φ₁   0  |
/// ```
#[inline]
pub fn hat(aaxis: &AxisAngle) -> Matrix3<f64> {
    Matrix3::new(
        0.0,
        -aaxis.z,
        aaxis.y,
        aaxis.z,
        0.0,
        -aaxis.x,
        -aaxis.y,
        aaxis.x,
        0.0,
    )
}

/// Vex operator, the inverse of [`hat`]. Only meaningful for skew-symmetric input.
#[inline]
pub fn vex(skew: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(skew[(2, 1)], skew[(0, 2)], skew[(1, 0)])
}

/// Exponential map using the closed form.
pub fn exponential_map(aaxis: &AxisAngle) -> RotationMatrix {
    exponential_map_with(aaxis, ExpMapMethod::ClosedForm)
}

/// Exponential map with an explicit choice of algorithm.
pub fn exponential_map_with(aaxis: &AxisAngle, method: ExpMapMethod) -> RotationMatrix {
    match method {
        ExpMapMethod::ClosedForm => rodrigues(aaxis),
        ExpMapMethod::TruncatedSeries(num_terms) => truncated_series(aaxis, num_terms),
    }
}

fn rodrigues(aaxis: &AxisAngle) -> RotationMatrix {
    let angle = aaxis.norm();
    if angle < EXP_MAP_ZERO_TOLERANCE {
        return Matrix3::identity();
    }

    let axis = aaxis / angle;
    let (sin_angle, cos_angle) = angle.sin_cos();

    cos_angle * Matrix3::identity()
        + (1.0 - cos_angle) * (axis * axis.transpose())
        + sin_angle * hat(&axis)
}

fn truncated_series(aaxis: &AxisAngle, num_terms: u32) -> RotationMatrix {
    let skew = hat(aaxis);
    let mut term = Matrix3::identity();
    let mut result = Matrix3::identity();

    for n in 1..=num_terms {
        term = term * skew / f64::from(n);
        result += term;
    }

    result
}

/// Logarithmic map, returning φ with ‖φ‖ ∈ [0, π].
///
/// At exactly θ = π both ±â describe the same rotation; the axis is then reported
/// with its dominant component positive. When two diagonal entries tie for dominant,
/// the lower index wins.
///
/// `matrix` must be a rotation or close to one. Singular or reflective matrices are
/// not rejected but give meaningless results.
pub fn logarithmic_map(matrix: &RotationMatrix) -> AxisAngle {
    // vex(C − Cᵀ) = 2·sin θ·â
    let skew_axis = vex(&(matrix - matrix.transpose()));
    let cos_angle = ((matrix.trace() - 1.0) * 0.5).clamp(-1.0, 1.0);
    let sin_angle = 0.5 * skew_axis.norm();
    let angle = sin_angle.atan2(cos_angle);

    match LogMapBranch::classify(angle) {
        LogMapBranch::NearZero => 0.5 * skew_axis,
        LogMapBranch::Generic => (angle / (2.0 * sin_angle)) * skew_axis,
        LogMapBranch::NearPi => angle * near_pi_axis(matrix, cos_angle, &skew_axis),
    }
}

/// Unit axis of a rotation whose angle is close to π.
fn near_pi_axis(matrix: &RotationMatrix, cos_angle: f64, skew_axis: &Vector3<f64>) -> Vector3<f64> {
    // (C + Cᵀ)/2 − cos θ·I = (1 − cos θ)·â·âᵀ
    let outer = 0.5 * (matrix + matrix.transpose()) - cos_angle * Matrix3::identity();

    let mut dominant = 0;
    for i in 1..3 {
        if outer[(i, i)] > outer[(dominant, dominant)] {
            dominant = i;
        }
    }

    // Column `dominant` is (1 − cos θ)·â_d·â, so normalizing it makes â_d positive.
    let axis = outer.column(dominant).into_owned().normalize();

    if axis.dot(skew_axis) < 0.0 {
        -axis
    } else {
        axis
    }
}

/// Whether the determinant of `matrix` has drifted away from +1.
pub fn has_drifted(matrix: &RotationMatrix) -> bool {
    (1.0 - matrix.determinant()).abs() > DETERMINANT_DRIFT_TOLERANCE
}

/// Project `matrix` back onto SO(3) by a round trip through the Lie algebra.
///
/// Without `force`, the matrix is returned unchanged unless [`has_drifted`] reports
/// drift.
pub fn reproject_matrix(matrix: &RotationMatrix, force: bool) -> RotationMatrix {
    if !force && !has_drifted(matrix) {
        return *matrix;
    }

    trace!(
        forced = force,
        determinant = matrix.determinant(),
        "reprojecting rotation matrix onto SO(3)"
    );
    exponential_map(&logarithmic_map(matrix))
}
