//! Equatorial to Galactic conversion of positions and proper motions.
//!
//! Both functions take radians and follow the fixed [`GalacticFrame::J2000`]
//! orientation. Neither validates its input: at `dec = ±90°` or `b = ±90°` the
//! divisions by `cos(dec)` / `cos(b)` let IEEE-754 infinities and NaNs through
//! to the caller.

use crate::frame::{GalacticFrame, J2000_TRIG};
use celestial_core::constants::TWOPI;

/// Galactic longitude and latitude `(l, b)` of an ICRS direction.
///
/// Inputs and outputs are in radians. `l` is in `[0, 2π)` and `b` in
/// `[-π/2, π/2]`.
///
/// ```
/// use celestial_kinematics::equatorial_to_galactic;
///
/// let (l, b) = equatorial_to_galactic(0.0, 0.0);
/// assert!((l.to_degrees() - 96.3425).abs() < 1e-3);
/// assert!((b.to_degrees() + 60.1881).abs() < 1e-3);
/// ```
pub fn equatorial_to_galactic(ra: f64, dec: f64) -> (f64, f64) {
    let (sin_dec, cos_dec) = libm::sincos(dec);
    position_from_trig(ra, sin_dec, cos_dec)
}

/// [`equatorial_to_galactic`] with the declination already reduced to its
/// sine and cosine.
pub(crate) fn position_from_trig(ra: f64, sin_dec: f64, cos_dec: f64) -> (f64, f64) {
    let frame = &GalacticFrame::J2000;
    let trig = &*J2000_TRIG;

    let (sin_node, cos_node) = libm::sincos(ra - frame.node_ra);

    let sin_b = sin_dec * trig.cos_incl - cos_dec * trig.sin_incl * sin_node;
    let b = libm::asin(sin_b);

    // Both arguments of atan2 carry a common cos(dec); only the sine side divides it out.
    let sin_l = (sin_dec * trig.sin_incl + cos_dec * trig.cos_incl * sin_node) / cos_dec;
    let cos_l = cos_node;
    let mut l = libm::atan2(sin_l, cos_l) + frame.node_longitude;
    if l < 0.0 {
        l += TWOPI;
    }
    // -1e-17 + 2π rounds to 2π
    if l >= TWOPI {
        l -= TWOPI;
    }

    (l, b)
}

/// Rotates an equatorial proper motion `(μ_α*, μ_δ)` into Galactic axes,
/// returning `(μ_l*, μ_b)` in the input units.
///
/// `ra`, `dec`, `l`, `b` are radians; `(l, b)` must be the Galactic position of
/// `(ra, dec)`, normally from [`equatorial_to_galactic`]. The rotation angle is
/// the position angle of the North Galactic Pole at the source, which needs
/// only `b` from the Galactic pair.
pub fn proper_motion_to_galactic(
    ra: f64,
    dec: f64,
    _l: f64,
    b: f64,
    pm_ra: f64,
    pm_dec: f64,
) -> (f64, f64) {
    let (sin_dec, cos_dec) = libm::sincos(dec);
    proper_motion_from_trig(ra, sin_dec, cos_dec, b, pm_ra, pm_dec)
}

/// [`proper_motion_to_galactic`] with the declination already reduced to its
/// sine and cosine.
pub(crate) fn proper_motion_from_trig(
    ra: f64,
    sin_dec: f64,
    cos_dec: f64,
    b: f64,
    pm_ra: f64,
    pm_dec: f64,
) -> (f64, f64) {
    let frame = &GalacticFrame::J2000;
    let trig = &*J2000_TRIG;

    let (sin_b, cos_b) = libm::sincos(b);

    let sin_phi = trig.cos_pole_dec * libm::sin(ra - frame.pole_ra) / cos_b;
    let cos_phi = (trig.sin_pole_dec - sin_dec * sin_b) / (cos_dec * cos_b);

    let mu_l = pm_ra * cos_phi + pm_dec * sin_phi;
    let mu_b = -pm_ra * sin_phi + pm_dec * cos_phi;

    (mu_l, mu_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::{DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG};

    #[test]
    fn test_longitude_range() {
        for ra_deg in (0..360).step_by(15) {
            for dec_deg in [-89.5, -60.0, -30.0, -1.0, 0.0, 1.0, 30.0, 60.0, 89.5] {
                let ra = ra_deg as f64 * DEG_TO_RAD;
                let (l, b) = equatorial_to_galactic(ra, dec_deg * DEG_TO_RAD);
                assert!((0.0..TWOPI).contains(&l), "l={} at {}, {}", l, ra_deg, dec_deg);
                assert!((-HALF_PI..=HALF_PI).contains(&b), "b={} at {}", b, dec_deg);
            }
        }
    }

    #[test]
    fn test_longitude_wraps_below_two_pi() {
        // atan2 + node longitude lands a rounding error below zero here
        let (ra, dec): (f64, f64) = (5.477952328789094, -0.726056968829641);
        let mut bits = ra.to_bits() - 8;
        while bits <= ra.to_bits() + 8 {
            let (l, _) = equatorial_to_galactic(f64::from_bits(bits), dec);
            assert!((0.0..TWOPI).contains(&l), "l = {} at ra bits {:x}", l, bits);
            bits += 1;
        }
        let (l, _) = equatorial_to_galactic(ra, dec);
        assert!(l < 1e-12 || TWOPI - l < 1e-12, "l = {}", l);
    }

    #[test]
    fn test_exact_pole_trig_gives_non_finite_motion() {
        let ra = 120.0 * DEG_TO_RAD;
        let (l, b) = position_from_trig(ra, 1.0, 0.0);
        assert!(l.is_finite() && b.is_finite());
        let (mu_l, mu_b) = proper_motion_from_trig(ra, 1.0, 0.0, b, 10.0, -5.0);
        assert!(!mu_l.is_finite());
        assert!(!mu_b.is_finite());
    }

    #[test]
    fn test_north_galactic_pole() {
        let frame = GalacticFrame::J2000;
        let (l, b) = equatorial_to_galactic(frame.pole_ra, frame.pole_dec);
        assert!((b - HALF_PI).abs() < 1e-5, "b = {}", b);
        // Degenerate longitude settles three quarters of a turn past the node.
        assert!((l - (frame.node_longitude + 1.5 * PI)).abs() < 1e-9, "l = {}", l);
    }

    #[test]
    fn test_galactic_center() {
        let (l, b) = equatorial_to_galactic(266.40499 * DEG_TO_RAD, -28.93617 * DEG_TO_RAD);
        let l_deg = l * RAD_TO_DEG;
        assert!(l_deg < 0.01 || l_deg > 359.99, "l = {}", l_deg);
        assert!((b * RAD_TO_DEG).abs() < 0.01, "b = {}", b * RAD_TO_DEG);
    }

    #[test]
    fn test_matches_full_quotient_form() {
        // cos(l - lom) written without cancelling cos(dec)
        let frame = GalacticFrame::J2000;
        let (ra, dec) = (120.0 * DEG_TO_RAD, 30.0 * DEG_TO_RAD);
        let cos_l_full = dec.cos() * (ra - frame.node_ra).cos() / dec.cos();
        let sin_l = (dec.sin() * frame.inclination.sin()
            + dec.cos() * frame.inclination.cos() * (ra - frame.node_ra).sin())
            / dec.cos();
        let l_full = sin_l.atan2(cos_l_full) + frame.node_longitude;
        let (l, _) = equatorial_to_galactic(ra, dec);
        assert!((l - l_full).abs() < 1e-14);
    }

    #[test]
    fn test_galactic_pole_blows_up() {
        let (mu_l, mu_b) = proper_motion_to_galactic(0.3, 0.2, 1.0, HALF_PI, 1.0, 1.0);
        assert!(!mu_l.is_finite() || mu_l.abs() > 1e10);
        assert!(!mu_b.is_finite() || mu_b.abs() > 1e10);
    }

    #[test]
    fn test_proper_motion_rotation_preserves_magnitude() {
        for (ra_deg, dec_deg) in [(120.0, 30.0), (45.0, -60.0), (300.0, 10.0), (10.0, 5.0)] {
            let (ra, dec) = (ra_deg * DEG_TO_RAD, dec_deg * DEG_TO_RAD);
            let (l, b) = equatorial_to_galactic(ra, dec);
            let (mu_l, mu_b) = proper_motion_to_galactic(ra, dec, l, b, 3.0, -4.0);
            let total = (mu_l * mu_l + mu_b * mu_b).sqrt();
            // Published pole declination is 5e-4 degrees off the plane inclination.
            assert!((total - 5.0).abs() < 1e-3, "|mu| = {} at {}", total, ra_deg);
        }
    }

    #[test]
    fn test_proper_motion_zero_stays_zero() {
        let (ra, dec) = (2.0, -0.4);
        let (l, b) = equatorial_to_galactic(ra, dec);
        assert_eq!(proper_motion_to_galactic(ra, dec, l, b, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_proper_motion_linear_in_input() {
        let (ra, dec) = (1.1, 0.6);
        let (l, b) = equatorial_to_galactic(ra, dec);
        let (a_l, a_b) = proper_motion_to_galactic(ra, dec, l, b, 1.0, 0.0);
        let (c_l, c_b) = proper_motion_to_galactic(ra, dec, l, b, 0.0, 1.0);
        let (s_l, s_b) = proper_motion_to_galactic(ra, dec, l, b, 2.5, -1.5);
        assert!((s_l - (2.5 * a_l - 1.5 * c_l)).abs() < 1e-13);
        assert!((s_b - (2.5 * a_b - 1.5 * c_b)).abs() < 1e-13);
    }
}
