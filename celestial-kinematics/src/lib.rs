//! Galactic space velocities and their analytic Jacobians.
//!
//! Converts catalog astrometry (ICRS position, parallax, proper motion, radial
//! velocity) into Galactic coordinates and heliocentric Cartesian velocity
//! `(U, V, W)`, and provides the closed-form Jacobian of that conversion for
//! propagating catalog covariances.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`observation`] | Input vector and its validation |
//! | [`frame`] | Fixed Galactic frame angles and velocity factor |
//! | [`galactic`] | Position and proper-motion rotation into Galactic axes |
//! | [`velocity`] | `(U, V, W)` space velocity |
//! | [`jacobian`] | Full 6x6 and reduced 4x4 Jacobians, plus their stages |
//! | [`batch`] | Jacobians over slices of observations |
//! | [`errors`] | Error type for the validating entry points |
//!
//! # Quick Start
//!
//! ```
//! use celestial_kinematics::{full_jacobian, reduced_jacobian, space_velocity, Observation};
//!
//! // ra, dec (deg), parallax (mas), pm_ra*, pm_dec (mas/yr), rv (km/s)
//! let obs = Observation::new(120.0, 30.0, 5.0, 10.0, -5.0, 20.0);
//!
//! let uvw = space_velocity(&obs);
//! assert!((uvw.w - 15.9158).abs() < 1e-3);
//!
//! let full = full_jacobian(&obs);
//! let reduced = reduced_jacobian(&obs);
//! assert!((full[(3, 5)] - reduced[(1, 3)]).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for observations, velocities, the frame and matrices
//! - `parallel`: rayon-backed [`batch`] functions

pub mod batch;
pub mod errors;
pub mod frame;
pub mod galactic;
pub mod jacobian;
pub mod observation;
pub mod velocity;

pub use batch::{full_jacobians, reduced_jacobians};
pub use errors::{KinematicsError, KinematicsResult};
pub use frame::{GalacticFrame, TRANSVERSE_VELOCITY_FACTOR};
pub use galactic::{equatorial_to_galactic, proper_motion_to_galactic};
pub use jacobian::{full_jacobian, reduced_jacobian, try_full_jacobian, try_reduced_jacobian};
pub use observation::{Observation, OBSERVATION_DIM};
pub use velocity::{galactic_state, space_velocity, SpaceVelocity};

pub use celestial_core::{Matrix4, Matrix6};
