use crate::constants::DEG_TO_RAD;

/// Sine and cosine of an angle given in degrees.
///
/// The argument is reduced to the nearest multiple of 90° before converting to
/// radians, so the quadrant points are exact: `sin_cos_degrees(90.0)` is
/// `(1.0, -0.0)` rather than `(1.0, 6.1e-17)`. Elsewhere the result agrees with
/// `sin`/`cos` of the converted angle to within a few ULP.
///
/// ```
/// use celestial_core::math::sin_cos_degrees;
///
/// let (s, c) = sin_cos_degrees(-90.0);
/// assert_eq!(s, -1.0);
/// assert_eq!(c, 0.0);
/// ```
#[inline]
pub fn sin_cos_degrees(deg: f64) -> (f64, f64) {
    let quadrant = libm::round(deg / 90.0);
    let reduced = (deg - 90.0 * quadrant) * DEG_TO_RAD;
    let (s, c) = libm::sincos(reduced);

    match (quadrant as i64).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}
