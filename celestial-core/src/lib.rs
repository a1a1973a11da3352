//! Numerical foundation for the celestial crates.
//!
//! `celestial-core` holds the pieces the domain crates share: constants,
//! the [`AstroError`] type, degree-exact trigonometry and small fixed-size
//! matrices for building Jacobian chains.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Angle and unit conversion constants |
//! | [`errors`] | [`AstroError`] and [`MathErrorKind`] |
//! | [`math`] | `libm` wrappers, [`sin_cos_degrees`](math::sin_cos_degrees) |
//! | [`matrix`] | [`SquareMatrix`] with [`Matrix4`] / [`Matrix6`] aliases |
//! | [`test_helpers`] | ULP and tolerance assertions |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//! use celestial_core::{Matrix4, Matrix6, SquareMatrix};
//! ```

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;

pub use errors::{AstroError, MathErrorKind};
pub use matrix::{Matrix4, Matrix6, SquareMatrix};

pub mod test_helpers;
