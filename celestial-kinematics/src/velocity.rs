//! Galactic Cartesian space velocity (U, V, W) of a source.
//!
//! U points to the Galactic centre, V along Galactic rotation, W to the North
//! Galactic Pole. Velocities are heliocentric, in km/s; no solar motion is
//! removed.

use crate::frame::TRANSVERSE_VELOCITY_FACTOR;
use crate::galactic::{position_from_trig, proper_motion_from_trig};
use crate::Observation;
use celestial_core::math::sin_cos_degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaceVelocity {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl SpaceVelocity {
    pub fn speed(&self) -> f64 {
        libm::sqrt(self.u * self.u + self.v * self.v + self.w * self.w)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.u, self.v, self.w]
    }
}

/// Galactic position and proper motion of an observation.
///
/// `l`, `b` in radians; `mu_l`, `mu_b` in mas/yr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GalacticKinematics {
    pub l: f64,
    pub b: f64,
    pub mu_l: f64,
    pub mu_b: f64,
}

impl GalacticKinematics {
    /// Declination trig is taken in degrees, so `dec = ±90°` has
    /// `cos(dec) == 0` and the proper motions come out non-finite.
    pub fn of(obs: &Observation) -> Self {
        let ra = obs.ra_rad();
        let (sin_dec, cos_dec) = sin_cos_degrees(obs.dec_deg);
        let (l, b) = position_from_trig(ra, sin_dec, cos_dec);
        let (mu_l, mu_b) = proper_motion_from_trig(
            ra,
            sin_dec,
            cos_dec,
            b,
            obs.pm_ra_mas_yr,
            obs.pm_dec_mas_yr,
        );
        Self { l, b, mu_l, mu_b }
    }
}

/// Heliocentric `(U, V, W)` of an observation.
///
/// ```
/// use celestial_kinematics::{space_velocity, Observation};
///
/// // Pure radial motion toward the Galactic centre direction
/// let obs = Observation::new(266.40499, -28.93617, 1.0, 0.0, 0.0, 30.0);
/// let uvw = space_velocity(&obs);
/// assert!((uvw.u - 30.0).abs() < 1e-3);
/// assert!(uvw.v.abs() < 0.01 && uvw.w.abs() < 0.01);
/// ```
pub fn space_velocity(obs: &Observation) -> SpaceVelocity {
    velocity_from(&GalacticKinematics::of(obs), obs)
}

/// The output vector `[l, b, parallax, U, V, W]` whose derivative with respect
/// to the observation is [`full_jacobian`](crate::full_jacobian).
///
/// `l`, `b` in radians, parallax in mas, U/V/W in km/s.
pub fn galactic_state(obs: &Observation) -> [f64; 6] {
    let gal = GalacticKinematics::of(obs);
    let uvw = velocity_from(&gal, obs);
    [gal.l, gal.b, obs.parallax_mas, uvw.u, uvw.v, uvw.w]
}

fn velocity_from(gal: &GalacticKinematics, obs: &Observation) -> SpaceVelocity {
    let k = TRANSVERSE_VELOCITY_FACTOR;
    let plx = obs.parallax_mas;
    let vr = obs.radial_velocity_km_s;
    let (sb, cb) = libm::sincos(gal.b);
    let (sl, cl) = libm::sincos(gal.l);

    // Transverse velocities along l and b
    let v_l = k * gal.mu_l / plx;
    let v_b = k * gal.mu_b / plx;

    SpaceVelocity {
        u: vr * cb * cl - v_l * sl - v_b * sb * cl,
        v: vr * cb * sl + v_l * cl - v_b * sb * sl,
        w: vr * sb + v_b * cb,
    }
}
