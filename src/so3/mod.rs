//! SO(3) - Special Orthogonal Group in 3D
//!
//! Rotations are stored as 3x3 matrices `C_ba`, which rotate points expressed in
//! frame `a` into frame `b`. The minimal representation is the axis-angle vector
//! `φ = θ·â` of the Lie algebra so(3), where `â` is the unit rotation axis and `θ`
//! the right-hand-rule angle from `a` to `b`.
//!
//! Lie group | size | dim | X ∈ M | Constraint        | Tangent     | Exp          | Comp. | Action
//! --------- | ---- | --- | ----- | ----------------- | ----------- | ------------ | ----- | ------
//! SO(3)     | 9    | 3   | C     | CᵀC = I, det C = 1 | φ ∈ R³      | C = exp(φ^)  | C₁C₂  | Cp
//!
//! - [`operations`]: the hat/vex operators, the exponential and logarithmic maps and
//!   the reprojection policy.
//! - [`rotation`]: the [`Rotation`] value type built on top of them.
//!
//! # Example
//!
//! ```
//! use lie_rotation::so3::Rotation;
//! use nalgebra::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let c_ba = Rotation::from_axis_angle(&Vector3::new(0.0, 0.0, FRAC_PI_2));
//! let p_b = c_ba * Vector3::new(1.0, 0.0, 0.0);
//! assert!((p_b - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
//! ```

use nalgebra::{Matrix3, Vector3};

pub mod operations;
pub mod rotation;

pub use operations::{
    DETERMINANT_DRIFT_TOLERANCE, EXP_MAP_ZERO_TOLERANCE, ExpMapMethod, LOG_MAP_TOLERANCE,
    LogMapBranch, exponential_map, exponential_map_with, has_drifted, hat, logarithmic_map,
    reproject_matrix, vex,
};
pub use rotation::Rotation;

/// Axis-angle vector `φ = θ·â`. The norm is the rotation angle in radians.
pub type AxisAngle = Vector3<f64>;

/// Rotation matrix `C_ba`, rotating points from frame `a` to frame `b`.
pub type RotationMatrix = Matrix3<f64>;
