//! Astrometric input vector for a single source.

use crate::{KinematicsError, KinematicsResult};
use celestial_core::constants::DEG_TO_RAD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of components in an [`Observation`].
pub const OBSERVATION_DIM: usize = 6;

/// Catalog astrometry and radial velocity of one source, in catalog units.
///
/// Component order matches the columns of the Jacobians:
///
/// | Index | Field | Unit |
/// |-------|-------|------|
/// | 0 | `ra_deg` | degrees |
/// | 1 | `dec_deg` | degrees |
/// | 2 | `parallax_mas` | mas |
/// | 3 | `pm_ra_mas_yr` (μ_α*, includes cos δ) | mas/yr |
/// | 4 | `pm_dec_mas_yr` | mas/yr |
/// | 5 | `radial_velocity_km_s` | km/s |
///
/// Construction does not validate. The Jacobians require `dec_deg` strictly
/// inside (-90°, 90°) and a non-zero parallax; call [`validate`](Self::validate)
/// or use the `try_` entry points to enforce that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub parallax_mas: f64,
    pub pm_ra_mas_yr: f64,
    pub pm_dec_mas_yr: f64,
    pub radial_velocity_km_s: f64,
}

impl Observation {
    pub fn new(
        ra_deg: f64,
        dec_deg: f64,
        parallax_mas: f64,
        pm_ra_mas_yr: f64,
        pm_dec_mas_yr: f64,
        radial_velocity_km_s: f64,
    ) -> Self {
        Self {
            ra_deg,
            dec_deg,
            parallax_mas,
            pm_ra_mas_yr,
            pm_dec_mas_yr,
            radial_velocity_km_s,
        }
    }

    pub fn from_array(values: [f64; OBSERVATION_DIM]) -> Self {
        let [ra, dec, plx, pmra, pmdec, rv] = values;
        Self::new(ra, dec, plx, pmra, pmdec, rv)
    }

    /// Builds an observation from a slice holding exactly six values.
    pub fn from_slice(values: &[f64]) -> KinematicsResult<Self> {
        let array = <[f64; OBSERVATION_DIM]>::try_from(values).map_err(|_| {
            KinematicsError::DimensionMismatch {
                expected: OBSERVATION_DIM,
                actual: values.len(),
            }
        })?;
        Ok(Self::from_array(array))
    }

    pub fn to_array(&self) -> [f64; OBSERVATION_DIM] {
        [
            self.ra_deg,
            self.dec_deg,
            self.parallax_mas,
            self.pm_ra_mas_yr,
            self.pm_dec_mas_yr,
            self.radial_velocity_km_s,
        ]
    }

    pub fn ra_rad(&self) -> f64 {
        self.ra_deg * DEG_TO_RAD
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_deg * DEG_TO_RAD
    }

    /// Checks the preconditions of the Jacobian formulas.
    ///
    /// Rejects non-finite components, declinations at or beyond the poles and
    /// non-positive parallaxes.
    pub fn validate(&self) -> KinematicsResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::debug!(observation = ?self, %err, "rejected observation");
        }
        result
    }

    fn check(&self) -> KinematicsResult<()> {
        if !self.ra_deg.is_finite() {
            return Err(KinematicsError::not_finite("ra_deg"));
        }
        if !self.dec_deg.is_finite() {
            return Err(KinematicsError::not_finite("dec_deg"));
        }
        if !self.parallax_mas.is_finite() {
            return Err(KinematicsError::not_finite("parallax_mas"));
        }
        if !self.pm_ra_mas_yr.is_finite() {
            return Err(KinematicsError::not_finite("pm_ra_mas_yr"));
        }
        if !self.pm_dec_mas_yr.is_finite() {
            return Err(KinematicsError::not_finite("pm_dec_mas_yr"));
        }
        if !self.radial_velocity_km_s.is_finite() {
            return Err(KinematicsError::not_finite("radial_velocity_km_s"));
        }

        if self.dec_deg.abs() >= 90.0 {
            return Err(KinematicsError::domain(
                "dec_deg",
                self.dec_deg,
                "declination must lie strictly between -90 and +90 degrees",
            ));
        }
        if self.parallax_mas <= 0.0 {
            return Err(KinematicsError::domain(
                "parallax_mas",
                self.parallax_mas,
                "parallax must be strictly positive",
            ));
        }

        Ok(())
    }
}

impl From<[f64; OBSERVATION_DIM]> for Observation {
    fn from(values: [f64; OBSERVATION_DIM]) -> Self {
        Self::from_array(values)
    }
}

impl From<Observation> for [f64; OBSERVATION_DIM] {
    fn from(obs: Observation) -> Self {
        obs.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Observation {
        Observation::new(120.0, 30.0, 5.0, 10.0, -5.0, 20.0)
    }

    #[test]
    fn test_array_order() {
        let obs = sample();
        assert_eq!(obs.to_array(), [120.0, 30.0, 5.0, 10.0, -5.0, 20.0]);
        assert_eq!(Observation::from_array(obs.to_array()), obs);
        let arr: [f64; 6] = obs.into();
        assert_eq!(Observation::from(arr), obs);
    }

    #[test]
    fn test_from_slice() {
        let obs = Observation::from_slice(&[120.0, 30.0, 5.0, 10.0, -5.0, 20.0]).unwrap();
        assert_eq!(obs, sample());

        let err = Observation::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            KinematicsError::DimensionMismatch {
                expected: 6,
                actual: 3
            }
        );
        assert!(Observation::from_slice(&[0.0; 7]).is_err());
    }

    #[test]
    fn test_radians() {
        let obs = Observation::new(180.0, -45.0, 1.0, 0.0, 0.0, 0.0);
        assert!((obs.ra_rad() - std::f64::consts::PI).abs() < 1e-15);
        assert!((obs.dec_rad() + std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn test_validate_accepts_regular_source() {
        assert!(sample().validate().is_ok());
        assert!(Observation::new(0.0, -89.999, 0.01, 0.0, 0.0, 0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_poles() {
        for dec in [90.0, -90.0, 91.0] {
            let obs = Observation::new(10.0, dec, 1.0, 0.0, 0.0, 0.0);
            let err = obs.validate().unwrap_err();
            assert!(err.is_domain(), "dec {}", dec);
            assert!(err.to_string().starts_with("dec_deg"));
        }
    }

    #[test]
    fn test_validate_rejects_parallax() {
        for plx in [0.0, -0.5] {
            let obs = Observation::new(10.0, 10.0, plx, 0.0, 0.0, 0.0);
            match obs.validate() {
                Err(KinematicsError::Domain { quantity, value, .. }) => {
                    assert_eq!(quantity, "parallax_mas");
                    assert_eq!(value, plx);
                }
                other => panic!("expected domain error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut obs = sample();
        obs.radial_velocity_km_s = f64::NAN;
        assert_eq!(
            obs.validate(),
            Err(KinematicsError::not_finite("radial_velocity_km_s"))
        );

        let mut obs = sample();
        obs.ra_deg = f64::INFINITY;
        assert_eq!(obs.validate(), Err(KinematicsError::not_finite("ra_deg")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"parallax_mas\":5.0"));
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
