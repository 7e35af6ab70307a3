//! Rotation value type.
//!
//! A [`Rotation`] owns one rotation matrix `C_ba`. Every operation that multiplies
//! matrices (construction from a raw matrix, inversion, composition) finishes with a
//! conditional reprojection, so drift from repeated floating-point products is
//! corrected once the determinant leaves `1 ± DETERMINANT_DRIFT_TOLERANCE`.

use super::operations::{ExpMapMethod, exponential_map_with, logarithmic_map, reproject_matrix};
use super::{AxisAngle, RotationMatrix};
use crate::error::{RotationError, RotationResult};
use nalgebra::{DVector, Matrix3, Vector3};
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

/// A rotation in SO(3), stored as the matrix `C_ba`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    matrix: RotationMatrix,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::identity()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rotation(C_ba:")?;
        for row in self.matrix.row_iter() {
            let (x, y, z) = (row[0], row[1], row[2]);
            writeln!(f, "  [{x:>10.6}, {y:>10.6}, {z:>10.6}]")?;
        }
        write!(f, ")")
    }
}

impl Rotation {
    /// Number of components in an axis-angle vector.
    pub const DOF: usize = 3;

    pub fn identity() -> Self {
        Rotation {
            matrix: Matrix3::identity(),
        }
    }

    /// Create a rotation from a matrix that is expected to be (close to) orthonormal.
    ///
    /// The matrix is reprojected onto SO(3) only if its determinant has drifted, so
    /// slightly-off input read from elsewhere is accepted without always paying for
    /// the round trip. Singular or reflective matrices (det ≤ 0) are not supported.
    pub fn from_matrix(matrix: RotationMatrix) -> Self {
        let mut rotation = Rotation { matrix };
        rotation.reproject(false);
        rotation
    }

    /// Create the rotation `C_ba = exp(aaxis_ab^)` with the closed-form exponential map.
    pub fn from_axis_angle(aaxis_ab: &AxisAngle) -> Self {
        Rotation::from_axis_angle_with(aaxis_ab, ExpMapMethod::ClosedForm)
    }

    /// Create the rotation `C_ba = exp(aaxis_ab^)` with an explicit algorithm.
    ///
    /// `ExpMapMethod::TruncatedSeries` results are stored as computed; call
    /// [`Rotation::reproject`] with `force = true` if a valid rotation is required.
    pub fn from_axis_angle_with(aaxis_ab: &AxisAngle, method: ExpMapMethod) -> Self {
        Rotation {
            matrix: exponential_map_with(aaxis_ab, method),
        }
    }

    /// Create a rotation from an axis-angle vector of unchecked length.
    ///
    /// # Errors
    /// [`RotationError::InvalidDimension`] if `values` does not hold exactly three
    /// components.
    pub fn from_slice(values: &[f64]) -> RotationResult<Self> {
        if values.len() != Self::DOF {
            return Err(RotationError::InvalidDimension {
                expected: Self::DOF,
                actual: values.len(),
            });
        }
        let aaxis_ab = Vector3::from_column_slice(values);
        Ok(Rotation::from_axis_angle(&aaxis_ab))
    }

    /// Random rotation with each axis-angle component drawn from [-1, 1).
    pub fn random() -> Self {
        Rotation::from_axis_angle(&Vector3::new(
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
            rand::random::<f64>() * 2.0 - 1.0,
        ))
    }

    pub fn matrix(&self) -> &RotationMatrix {
        &self.matrix
    }

    /// Axis-angle vector of this rotation via the logarithmic map, with angle in [0, π].
    pub fn to_axis_angle(&self) -> AxisAngle {
        logarithmic_map(&self.matrix)
    }

    /// Rotation angle in [0, π].
    pub fn angle(&self) -> f64 {
        self.to_axis_angle().norm()
    }

    /// Inverse rotation `C_ab = C_baᵀ`.
    pub fn inverse(&self) -> Rotation {
        let mut inverse = Rotation {
            matrix: self.matrix.transpose(),
        };
        inverse.reproject(false);
        inverse
    }

    /// Project the matrix back onto SO(3).
    ///
    /// With `force = false` this only acts when the determinant has drifted from +1
    /// and is otherwise a no-op.
    pub fn reproject(&mut self, force: bool) {
        self.matrix = reproject_matrix(&self.matrix, force);
    }

    /// `C_ca = C_cb · C_ba`, i.e. `rhs` is applied first.
    pub fn compose(&self, rhs: &Rotation) -> Rotation {
        let mut result = *self;
        result.compose_in_place(rhs);
        result
    }

    pub fn compose_in_place(&mut self, rhs: &Rotation) {
        self.matrix = self.matrix * rhs.matrix;
        self.reproject(false);
    }

    /// `self · rhs⁻¹`, computed with a transpose instead of a separate inversion.
    pub fn compose_inverse(&self, rhs: &Rotation) -> Rotation {
        let mut result = *self;
        result.compose_inverse_in_place(rhs);
        result
    }

    pub fn compose_inverse_in_place(&mut self, rhs: &Rotation) {
        self.matrix = self.matrix * rhs.matrix.transpose();
        self.reproject(false);
    }

    /// Rotate a point: `p_b = C_ba · p_a`.
    pub fn apply_to(&self, point_a: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * point_a
    }

    /// Whether the matrix is orthonormal with determinant +1, within `tolerance`.
    pub fn is_valid(&self, tolerance: f64) -> bool {
        let orthonormality = (self.matrix.transpose() * self.matrix - Matrix3::identity()).amax();
        orthonormality <= tolerance && (self.matrix.determinant() - 1.0).abs() <= tolerance
    }
}

impl TryFrom<&[f64]> for Rotation {
    type Error = RotationError;

    fn try_from(values: &[f64]) -> RotationResult<Self> {
        Rotation::from_slice(values)
    }
}

impl TryFrom<&DVector<f64>> for Rotation {
    type Error = RotationError;

    fn try_from(aaxis_ab: &DVector<f64>) -> RotationResult<Self> {
        Rotation::from_slice(aaxis_ab.as_slice())
    }
}

impl From<RotationMatrix> for Rotation {
    fn from(matrix: RotationMatrix) -> Self {
        Rotation::from_matrix(matrix)
    }
}

// Composition: `a * b` == `a.compose(&b)`

impl Mul<&Rotation> for &Rotation {
    type Output = Rotation;

    fn mul(self, rhs: &Rotation) -> Rotation {
        self.compose(rhs)
    }
}

impl Mul<Rotation> for Rotation {
    type Output = Rotation;

    fn mul(self, rhs: Rotation) -> Rotation {
        self.compose(&rhs)
    }
}

impl MulAssign<&Rotation> for Rotation {
    fn mul_assign(&mut self, rhs: &Rotation) {
        self.compose_in_place(rhs);
    }
}

impl MulAssign<Rotation> for Rotation {
    fn mul_assign(&mut self, rhs: Rotation) {
        self.compose_in_place(&rhs);
    }
}

// Composition with inverse: `a / b` == `a.compose_inverse(&b)`

impl Div<&Rotation> for &Rotation {
    type Output = Rotation;

    fn div(self, rhs: &Rotation) -> Rotation {
        self.compose_inverse(rhs)
    }
}

impl Div<Rotation> for Rotation {
    type Output = Rotation;

    fn div(self, rhs: Rotation) -> Rotation {
        self.compose_inverse(&rhs)
    }
}

impl DivAssign<&Rotation> for Rotation {
    fn div_assign(&mut self, rhs: &Rotation) {
        self.compose_inverse_in_place(rhs);
    }
}

impl DivAssign<Rotation> for Rotation {
    fn div_assign(&mut self, rhs: Rotation) {
        self.compose_inverse_in_place(&rhs);
    }
}

// Point action

impl Mul<&Vector3<f64>> for &Rotation {
    type Output = Vector3<f64>;

    fn mul(self, point_a: &Vector3<f64>) -> Vector3<f64> {
        self.apply_to(point_a)
    }
}

impl Mul<Vector3<f64>> for Rotation {
    type Output = Vector3<f64>;

    fn mul(self, point_a: Vector3<f64>) -> Vector3<f64> {
        self.apply_to(&point_a)
    }
}
