//! Definition of the Galactic frame used by every conversion in this crate.
//!
//! The frame is fixed: six angles describing where the Galactic plane and pole
//! sit in ICRS, plus the factor turning `mas/yr / mas` into km/s. Their sines
//! and cosines are evaluated once per process and shared read-only.

use celestial_core::constants::DEG_TO_RAD;
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transverse velocity in km/s of a source with 1 mas/yr proper motion at
/// 1 mas parallax (one AU per Julian year).
pub const TRANSVERSE_VELOCITY_FACTOR: f64 = 4.7404705;

/// Orientation of the Galactic frame relative to ICRS. All angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticFrame {
    /// Inclination of the Galactic plane to the equator.
    pub inclination: f64,
    /// Right ascension of the ascending node of the Galactic plane.
    pub node_ra: f64,
    /// Galactic longitude of that ascending node.
    pub node_longitude: f64,
    /// Declination of the North Galactic Pole.
    pub pole_dec: f64,
    /// Right ascension of the North Galactic Pole.
    pub pole_ra: f64,
    /// Galactic longitude of the North Celestial Pole.
    pub ncp_longitude: f64,
}

impl GalacticFrame {
    pub const J2000: Self = Self {
        inclination: 62.87124882 * DEG_TO_RAD,
        node_ra: 282.8594813 * DEG_TO_RAD,
        node_longitude: 32.93680516 * DEG_TO_RAD,
        pole_dec: 27.12825111 * DEG_TO_RAD,
        pole_ra: 192.8594813 * DEG_TO_RAD,
        ncp_longitude: 122.93680516 * DEG_TO_RAD,
    };
}

/// Sines and cosines of the frame angles that appear in the partials.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameTrig {
    pub sin_incl: f64,
    pub cos_incl: f64,
    pub sin_pole_dec: f64,
    pub cos_pole_dec: f64,
}

impl FrameTrig {
    fn new(frame: &GalacticFrame) -> Self {
        let (sin_incl, cos_incl) = libm::sincos(frame.inclination);
        let (sin_pole_dec, cos_pole_dec) = libm::sincos(frame.pole_dec);
        Self {
            sin_incl,
            cos_incl,
            sin_pole_dec,
            cos_pole_dec,
        }
    }
}

pub(crate) static J2000_TRIG: Lazy<FrameTrig> =
    Lazy::new(|| FrameTrig::new(&GalacticFrame::J2000));

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::{HALF_PI, RAD_TO_DEG};

    #[test]
    fn test_pole_and_node_are_quarter_turn_apart() {
        let f = GalacticFrame::J2000;
        assert!(((f.node_ra - f.pole_ra) - HALF_PI).abs() < 1e-12);
        assert!(((f.ncp_longitude - f.node_longitude) - HALF_PI).abs() < 1e-12);
    }

    #[test]
    fn test_pole_dec_close_to_complement_of_inclination() {
        // The published constants differ by ~5e-4 degrees.
        let f = GalacticFrame::J2000;
        let gap = (HALF_PI - f.inclination - f.pole_dec) * RAD_TO_DEG;
        assert!(gap.abs() < 1e-3, "gap = {}", gap);
    }

    #[test]
    fn test_trig_table() {
        let t = *J2000_TRIG;
        let f = GalacticFrame::J2000;
        assert!((t.sin_incl - f.inclination.sin()).abs() < 1e-15);
        assert!((t.cos_pole_dec - f.pole_dec.cos()).abs() < 1e-15);
        assert!((t.sin_incl.powi(2) + t.cos_incl.powi(2) - 1.0).abs() < 1e-15);
        assert!((t.sin_pole_dec.powi(2) + t.cos_pole_dec.powi(2) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_transverse_velocity_factor_is_au_per_julian_year() {
        use celestial_core::constants::{AU_KM, DAYS_PER_JULIAN_YEAR, SECONDS_PER_DAY_F64};

        let km_s = AU_KM / (DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY_F64);
        assert!((km_s - 4.740470464).abs() < 1e-9);
        // Rounded to seven decimals
        assert!((TRANSVERSE_VELOCITY_FACTOR - km_s).abs() < 1e-7);
    }
}
