//! Float assertions for tests in this and downstream crates.
//!
//! Two flavours: ULP distance for results that should agree to rounding, and a
//! mixed relative/absolute tolerance for results that only agree to a
//! truncation error (finite differences, series).

/// Maps an `f64` onto `u64` so that ordering is preserved across the sign bit.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Passes when `|actual - expected| <= rel * |expected| + abs`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, rel: f64, abs: f64, ctx: &str) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "non-finite value in {}: actual={} expected={}",
        ctx,
        actual,
        expected
    );
    let err = (actual - expected).abs();
    let allowed = rel * expected.abs() + abs;
    assert!(
        err <= allowed,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        actual,
        expected,
        err,
        allowed
    );
}
