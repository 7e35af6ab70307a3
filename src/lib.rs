//! # Lie Rotation
//!
//! Rotations in 3D as elements of the Lie group SO(3), with conversions to and from
//! the minimal axis-angle representation in so(3).
//!
//! ## Features
//!
//! - **Closed-form exponential map**: Rodrigues' formula, plus a truncated power series
//!   for validation and controllable-accuracy approximations
//! - **Stable logarithmic map**: explicit near-zero, generic and near-π branches
//! - **Rotation value type**: composition, composition with inverse, inversion and point
//!   rotation through the usual operators
//! - **Lazy reprojection**: matrices are pulled back onto SO(3) only when their
//!   determinant has drifted
//!
//! ## Example
//!
//! ```
//! use lie_rotation::Rotation;
//! use nalgebra::Vector3;
//!
//! let a = Rotation::from_axis_angle(&Vector3::new(0.1, 0.2, 0.3));
//! let b = Rotation::from_slice(&[0.0, 0.0, 1.0])?;
//!
//! let relative = &a / &b;
//! let recovered = relative * b;
//! assert!(recovered.is_valid(1e-9));
//! assert!((recovered.to_axis_angle() - a.to_axis_angle()).norm() < 1e-9);
//! # Ok::<(), lie_rotation::RotationError>(())
//! ```

pub mod common;
pub mod error;
pub mod logger;
pub mod so3;

pub use error::{RotationError, RotationResult};
pub use logger::{init_logger, init_logger_with_level};
pub use so3::{AxisAngle, ExpMapMethod, Rotation, RotationMatrix};
