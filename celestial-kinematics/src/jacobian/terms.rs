use crate::frame::GalacticFrame;
use crate::velocity::GalacticKinematics;
use crate::Observation;
use celestial_core::math::sin_cos_degrees;

/// Values shared by the stage matrices of one Jacobian evaluation.
///
/// Every sine, cosine and tangent is taken once here; the stages only combine
/// them. Angles are radians, proper motions mas/yr, parallax mas, radial
/// velocity km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainTerms {
    pub parallax: f64,
    pub pm_ra: f64,
    pub pm_dec: f64,
    pub radial_velocity: f64,

    /// Galactic proper motions μ_l*, μ_b.
    pub mu_l: f64,
    pub mu_b: f64,

    pub sd: f64,
    pub cd: f64,
    pub tand: f64,

    /// Trig of `ra - node_ra`.
    pub salom: f64,
    pub calom: f64,
    pub talom: f64,

    pub sb: f64,
    pub cb: f64,
    pub tanb: f64,
    pub sl: f64,
    pub cl: f64,

    /// Trig of `l - ncp_longitude`.
    pub slt: f64,
    pub clt: f64,
}

impl ChainTerms {
    pub fn new(obs: &Observation) -> Self {
        let frame = &GalacticFrame::J2000;
        let gal = GalacticKinematics::of(obs);

        // Exact at the poles, so dec = ±90° gives cd == 0 rather than 6e-17,
        // matching the trig GalacticKinematics::of uses.
        let (sd, cd) = sin_cos_degrees(obs.dec_deg);
        let (salom, calom) = libm::sincos(obs.ra_rad() - frame.node_ra);
        let (sb, cb) = libm::sincos(gal.b);
        let (sl, cl) = libm::sincos(gal.l);
        let (slt, clt) = libm::sincos(gal.l - frame.ncp_longitude);

        Self {
            parallax: obs.parallax_mas,
            pm_ra: obs.pm_ra_mas_yr,
            pm_dec: obs.pm_dec_mas_yr,
            radial_velocity: obs.radial_velocity_km_s,
            mu_l: gal.mu_l,
            mu_b: gal.mu_b,
            sd,
            cd,
            tand: sd / cd,
            salom,
            calom,
            talom: salom / calom,
            sb,
            cb,
            tanb: sb / cb,
            sl,
            cl,
            slt,
            clt,
        }
    }
}
