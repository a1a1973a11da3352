//! The four stage matrices of the ICRS → Galactic UVW Jacobian.
//!
//! Each stage starts from the zero matrix; only the entries written below are
//! non-zero. Row and column meaning per stage (full 6x6 form):
//!
//! | Stage | Columns (input) | Rows (output) |
//! |-------|-----------------|---------------|
//! | 1 units | α, δ, ϖ, μ_α*, μ_δ, v_r (catalog units) | same, α/δ in radians |
//! | 2 angles | α, δ, ϖ, μ_α*, μ_δ, v_r | l, b, ϖ, μ_α*, μ_δ, v_r |
//! | 3 proper motion | l, b, ϖ, μ_α*, μ_δ, v_r | l, b, ϖ, μ_l*, μ_b, v_r |
//! | 4 velocity | l, b, ϖ, μ_l*, μ_b, v_r | l, b, ϖ, U, V, W |
//!
//! The reduced 4x4 forms drop the two positional axes and skip stage 2.

use super::terms::ChainTerms;
use crate::frame::{J2000_TRIG, TRANSVERSE_VELOCITY_FACTOR};
use celestial_core::constants::ARCSEC_TO_RAD;
use celestial_core::{Matrix4, Matrix6};

/// Stage 1: scales the α, δ axes from arcseconds to radians.
pub fn unit_conversion() -> Matrix6 {
    Matrix6::from_diagonal([ARCSEC_TO_RAD, ARCSEC_TO_RAD, 1.0, 1.0, 1.0, 1.0])
}

/// Stage 1 without positional axes: identity on (ϖ, μ_α*, μ_δ, v_r).
pub fn unit_conversion_reduced() -> Matrix4 {
    Matrix4::identity()
}

/// Stage 2: ∂(l, b)/∂(α, δ), identity on the remaining axes.
pub fn equatorial_angle_partials(t: &ChainTerms) -> Matrix6 {
    let trig = &*J2000_TRIG;
    let (sincl, cincl) = (trig.sin_incl, trig.cos_incl);
    let (calom, salom, talom) = (t.calom, t.salom, t.talom);
    let (cd, sd, tand) = (t.cd, t.sd, t.tand);

    let mut jac = Matrix6::zeros();

    // tan(l - lom) and its derivative denominator
    let tan_l = cincl * talom + sincl / calom * tand;
    let atan_den = 1.0 + tan_l * tan_l;
    // cos(b) written through sin(b)
    let cos_b = libm::sqrt(1.0 - (cincl * sd - cd * salom * sincl).powi(2));

    jac[(0, 0)] = (cincl / (calom * calom) + sincl / calom * talom * tand) / atan_den;
    jac[(0, 1)] = (sincl / (calom * cd * cd)) / atan_den;
    jac[(1, 0)] = -(calom * cd * sincl) / cos_b;
    jac[(1, 1)] = (cd * cincl + salom * sd * sincl) / cos_b;

    for i in 2..6 {
        jac[(i, i)] = 1.0;
    }

    jac
}

/// Terms of the Galactic-pole position angle expressed in (l, b).
///
/// `x` is sin(δ) rebuilt from l and b, `y = ∂x/∂b`, `n` the numerator of
/// cos(φ)·cos(b)·cos(δ).
struct PoleAngle {
    x: f64,
    y: f64,
    n: f64,
    root: f64,
    root3: f64,
}

impl PoleAngle {
    fn new(t: &ChainTerms) -> Self {
        let trig = &*J2000_TRIG;
        let (cdeo, sdeo) = (trig.cos_pole_dec, trig.sin_pole_dec);

        let x = t.cb * cdeo * t.clt + t.sb * sdeo;
        let y = -(cdeo * t.clt * t.sb) + t.cb * sdeo;
        let n = sdeo - t.sb * x;
        let one_minus = 1.0 - x * x;

        Self {
            x,
            y,
            n,
            root: libm::sqrt(one_minus),
            root3: libm::pow(one_minus, 1.5),
        }
    }

    /// ∂μ_l*/∂μ_α* = ∂μ_b/∂μ_δ = cos(φ)
    fn cos_phi(&self, t: &ChainTerms) -> f64 {
        (self.n / t.cb) / self.root
    }

    /// ∂μ_b/∂μ_α* = -∂μ_l*/∂μ_δ = -sin(φ)
    fn neg_sin_phi(&self, t: &ChainTerms) -> f64 {
        (J2000_TRIG.cos_pole_dec * t.slt) / self.root
    }
}

/// Stage 3: ∂(μ_l*, μ_b)/∂(l, b, μ_α*, μ_δ), identity on l, b, ϖ, v_r.
///
/// The position columns carry the proper motion itself because the rotation
/// angle between the two frames varies across the sky.
pub fn proper_motion_partials(t: &ChainTerms) -> Matrix6 {
    let cdeo = J2000_TRIG.cos_pole_dec;
    let p = PoleAngle::new(t);
    let (mua, mud) = (t.pm_ra, t.pm_dec);
    let (cb, sb, tanb, clt, slt) = (t.cb, t.sb, t.tanb, t.clt, t.slt);
    let (x, y, n, root, root3) = (p.x, p.y, p.n, p.root, p.root3);

    let mut jac = Matrix6::zeros();

    jac[(0, 0)] = 1.0;
    jac[(1, 1)] = 1.0;
    jac[(2, 2)] = 1.0;

    // μ_l*
    jac[(3, 0)] = -(mud * cdeo * clt) / root - (mua * cdeo * x * n * slt) / root3
        + (mua * cdeo * sb * slt) / root
        + (mud * cb * cdeo * cdeo * x * slt * slt) / root3;
    jac[(3, 1)] = (mua / cb * y * x * n) / root3 + (mua / cb * (-(sb * y) - cb * x)) / root
        - (mud * cdeo * y * x * slt) / root3
        + (mua / cb * n * tanb) / root;
    jac[(3, 3)] = p.cos_phi(t);
    jac[(3, 4)] = -p.neg_sin_phi(t);

    // μ_b
    jac[(4, 0)] = (mua * cdeo * clt) / root - (mud * cdeo * x * n * slt) / root3
        + (mud * cdeo * sb * slt) / root
        - (mua * cb * cdeo * cdeo * x * slt * slt) / root3;
    jac[(4, 1)] = (mud / cb * y * x * n) / root3 + (mud / cb * (-(sb * y) - cb * x)) / root
        + (mua * cdeo * y * x * slt) / root3
        + (mud / cb * n * tanb) / root;
    jac[(4, 3)] = p.neg_sin_phi(t);
    jac[(4, 4)] = p.cos_phi(t);

    jac[(5, 5)] = 1.0;

    jac
}

/// Stage 3 on (ϖ, μ_α*, μ_δ, v_r): the rotation sub-block only.
pub fn proper_motion_partials_reduced(t: &ChainTerms) -> Matrix4 {
    let p = PoleAngle::new(t);
    let mut jac = Matrix4::zeros();

    jac[(0, 0)] = 1.0;
    jac[(1, 1)] = p.cos_phi(t);
    jac[(1, 2)] = -p.neg_sin_phi(t);
    jac[(2, 1)] = p.neg_sin_phi(t);
    jac[(2, 2)] = p.cos_phi(t);
    jac[(3, 3)] = 1.0;

    jac
}

/// Partials of U, V, W, indexed `[component][axis]` over
/// (l, b, ϖ, μ_l*, μ_b, v_r).
fn uvw_partials(t: &ChainTerms) -> [[f64; 6]; 3] {
    let k = TRANSVERSE_VELOCITY_FACTOR;
    let w = t.parallax;
    let w2 = w * w;
    let vrad = t.radial_velocity;
    let (ml, mb) = (t.mu_l, t.mu_b);
    let (cb, sb, cl, sl) = (t.cb, t.sb, t.cl, t.sl);

    let u = [
        -((k * ml * cl) / w) - vrad * cb * sl + (k * mb * sb * sl) / w,
        -((k * mb * cb * cl) / w) - vrad * cl * sb,
        (k * mb * cl * sb) / w2 + (k * ml * sl) / w2,
        -((k * sl) / w),
        -((k * cl * sb) / w),
        cb * cl,
    ];
    let v = [
        vrad * cb * cl - (k * mb * cl * sb) / w - (k * ml * sl) / w,
        -((k * mb * cb * sl) / w) - vrad * sb * sl,
        -((k * ml * cl) / w2) + (k * mb * sb * sl) / w2,
        (k * cl) / w,
        -((k * sb * sl) / w),
        cb * sl,
    ];
    // W does not depend on l or μ_l*.
    let w_row = [
        0.0,
        vrad * cb - (k * mb * sb) / w,
        -((k * mb * cb) / w2),
        0.0,
        (k * cb) / w,
        sb,
    ];

    [u, v, w_row]
}

/// Stage 4: ∂(U, V, W)/∂(l, b, ϖ, μ_l*, μ_b, v_r), identity on l, b, ϖ.
pub fn velocity_partials(t: &ChainTerms) -> Matrix6 {
    let mut jac = Matrix6::zeros();

    jac[(0, 0)] = 1.0;
    jac[(1, 1)] = 1.0;
    jac[(2, 2)] = 1.0;

    for (r, row) in uvw_partials(t).iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            jac[(3 + r, c)] = *value;
        }
    }

    jac
}

/// Stage 4 on (ϖ, μ_l*, μ_b, v_r) → (ϖ, U, V, W).
pub fn velocity_partials_reduced(t: &ChainTerms) -> Matrix4 {
    let mut jac = Matrix4::zeros();

    jac[(0, 0)] = 1.0;

    for (r, row) in uvw_partials(t).iter().enumerate() {
        for (c, value) in row[2..].iter().enumerate() {
            jac[(1 + r, c)] = *value;
        }
    }

    jac
}
