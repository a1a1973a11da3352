//! Analytic Jacobian of the ICRS → Galactic space-velocity transformation.
//!
//! # Axes
//!
//! The full Jacobian maps the differential of
//! `(α, δ, ϖ, μ_α*, μ_δ, v_r)` onto `(l, b, ϖ, U, V, W)`. Entry `(i, j)` is
//! the derivative of output `i` with respect to input `j`.
//!
//! The reduced Jacobian leaves the position out and maps
//! `(ϖ, μ_α*, μ_δ, v_r)` onto `(ϖ, U, V, W)`.
//!
//! # Units
//!
//! Outputs `l`, `b` are radians, ϖ mas, U/V/W km/s. The α and δ columns of
//! the full Jacobian are per arcsecond of input angle; the others are per
//! catalog unit (mas, mas/yr, km/s).
//!
//! # Composition
//!
//! ```text
//! J_full    = S4  · S3  · S2 · S1
//! J_reduced = S4' · S3' · S1'
//! ```
//!
//! See [`stages`] for the individual factors. Propagating a covariance is
//! then `J · Σ · Jᵀ`.
//!
//! # Singularities
//!
//! Nothing here validates its input. At `δ = ±90°`, `b = ±90°`, `cos(α - α_node) = 0`
//! or zero parallax the affected entries become infinite or NaN. Use
//! [`try_full_jacobian`] / [`try_reduced_jacobian`] to reject such input up front.

pub mod stages;
mod terms;

pub use terms::ChainTerms;

use crate::{KinematicsResult, Observation};
use celestial_core::{AstroError, MathErrorKind, Matrix4, Matrix6, SquareMatrix};

/// 6x6 Jacobian of `(l, b, ϖ, U, V, W)` with respect to
/// `(α, δ, ϖ, μ_α*, μ_δ, v_r)`.
///
/// ```
/// use celestial_kinematics::{full_jacobian, Observation};
///
/// let obs = Observation::new(120.0, 30.0, 5.0, 10.0, -5.0, 20.0);
/// let jac = full_jacobian(&obs);
/// // ∂W/∂v_r = sin(b)
/// assert!((jac[(5, 5)] - 0.455).abs() < 1e-3);
/// ```
pub fn full_jacobian(obs: &Observation) -> Matrix6 {
    let t = ChainTerms::new(obs);

    let s1 = stages::unit_conversion();
    let s2 = stages::equatorial_angle_partials(&t);
    let s3 = stages::proper_motion_partials(&t);
    let s4 = stages::velocity_partials(&t);

    s4 * (s3 * (s2 * s1))
}

/// 4x4 Jacobian of `(ϖ, U, V, W)` with respect to `(ϖ, μ_α*, μ_δ, v_r)`.
pub fn reduced_jacobian(obs: &Observation) -> Matrix4 {
    let t = ChainTerms::new(obs);

    let s1 = stages::unit_conversion_reduced();
    let s3 = stages::proper_motion_partials_reduced(&t);
    let s4 = stages::velocity_partials_reduced(&t);

    s4 * (s3 * s1)
}

/// [`full_jacobian`] after [`Observation::validate`].
///
/// Also fails if a valid observation still overflows, for example a parallax
/// so small that its square underflows to zero.
pub fn try_full_jacobian(obs: &Observation) -> KinematicsResult<Matrix6> {
    obs.validate()?;
    ensure_finite(full_jacobian(obs), obs, "full_jacobian")
}

/// [`reduced_jacobian`] after [`Observation::validate`], with the same
/// overflow check as [`try_full_jacobian`].
pub fn try_reduced_jacobian(obs: &Observation) -> KinematicsResult<Matrix4> {
    obs.validate()?;
    ensure_finite(reduced_jacobian(obs), obs, "reduced_jacobian")
}

fn ensure_finite<const N: usize>(
    jac: SquareMatrix<N>,
    obs: &Observation,
    operation: &str,
) -> KinematicsResult<SquareMatrix<N>> {
    if jac.is_finite() {
        return Ok(jac);
    }
    // The parallax partials divide by ϖ².
    let (kind, message) = if obs.parallax_mas * obs.parallax_mas == 0.0 {
        (MathErrorKind::DivisionByZero, "parallax squared underflows to zero")
    } else {
        (MathErrorKind::NotFinite, "jacobian has non-finite entries")
    };
    tracing::debug!(operation, ?kind, "rejected jacobian");
    Err(AstroError::math_error(operation, kind, message).into())
}
