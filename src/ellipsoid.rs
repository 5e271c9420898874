use lazy_static::lazy_static;

use crate::{constants::{GRS80_A, GRS80_F, WGS84_A, WGS84_F}, utility::polyval};

// ================================
// Series coefficients
// ================================

// Meridian distance from latitude.
//
// Deakin, R. E. (2006): Meridian Distance, RMIT University, March 2006.
#[allow(clippy::unreadable_literal)]
const M_COEFF: [f64; 27] = [
    // M1, polynomial in e2 of order 5
    -441., -700., -1280., -3072., -16384., 65536., 65536.,
    // M2/e2, polynomial in e2 of order 4
    2205., 3360., 5760., 12288., 49152., 131072.,
    // M3/e2^2, polynomial in e2 of order 3
    1575., 2100., 2880., 3840., 65536.,
    // M4/e2^3, polynomial in e2 of order 2
    11025., 11200., 8960., 786432.,
    // M5/e2^4, polynomial in e2 of order 1
    2205., 1260., 524288.,
    // M6/e2^5, polynomial in e2 of order 0
    693., 1310720.,
];  // count = 27

// Latitude from meridian distance, expanded in e1 = (1 - sqrt(1 - e2)) / (1 + sqrt(1 - e2)).
//
// Deakin, R. E. (2012): Great Elliptic Arc Distance, RMIT University, January 2012.
#[allow(clippy::unreadable_literal)]
const P_COEFF: [f64; 14] = [
    // P2/e1, polynomial in e1^2 of order 2
    269., -432., 768., 512.,
    // P3/e1^2, polynomial in e1^2 of order 1
    -55., 42., 32.,
    // P4/e1^3, polynomial in e1^2 of order 1
    -1251., 604., 384.,
    // P5/e1^4, polynomial in e1^2 of order 0
    1097., 512.,
    // P6/e1^5, polynomial in e1^2 of order 0
    8011., 2560.,
];  // count = 14

const P_ORDER: [usize; 5] = [2, 1, 1, 0, 0];

#[cfg(not(feature = "wgs84"))]
const A: f64 = GRS80_A;
#[cfg(not(feature = "wgs84"))]
const F: f64 = GRS80_F;

#[cfg(feature = "wgs84")]
const A: f64 = WGS84_A;
#[cfg(feature = "wgs84")]
const F: f64 = WGS84_F;

lazy_static! {
    /// Constants of the ellipsoid every projection in this crate runs on.
    /// GRS80 unless the `wgs84` feature is enabled.
    pub static ref ELLIPSOID: EllipsoidConstants = EllipsoidConstants::new(A, F);
}

/// Fixed parameters of a reference ellipsoid together with the truncated
/// series coefficients used by the forward and inverse projections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidConstants {
    pub(crate) r: f64,
    pub(crate) f: f64,
    /// First eccentricity squared
    pub(crate) e: f64,
    /// Second eccentricity squared
    pub(crate) e_p2: f64,
    pub(crate) e1: f64,
    /// `M1..M6`
    pub(crate) m: [f64; 6],
    /// `P2..P6`
    pub(crate) p: [f64; 5],
}

impl EllipsoidConstants {
    /// Derives every coefficient from the semi-major axis `r` (meters) and
    /// the flattening `f`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::EllipsoidConstants;
    ///
    /// let grs80 = EllipsoidConstants::grs80();
    /// assert_eq!(grs80.semi_major_axis(), 6_378_137.0);
    /// assert!((grs80.eccentricity_squared() - 0.006_694_380_022_9).abs() < 1e-12);
    /// ```
    pub fn new(r: f64, f: f64) -> EllipsoidConstants {
        let e = 2. * f - f.powi(2);
        let e_p2 = e / (1. - e);

        let sqrt_e = (1. - e).sqrt();
        let e1 = (1. - sqrt_e) / (1. + sqrt_e);

        let mut m = [0_f64; 6];
        let mut o = 0;
        let mut d = 1.;
        for (l, coeff) in m.iter_mut().enumerate() {
            let order = 5 - l;
            *coeff = d * polyval(&M_COEFF[o..=o + order], e) / M_COEFF[o + order + 1];
            o += order + 2;
            d *= e;
        }

        let mut p = [0_f64; 5];
        let mut o = 0;
        let mut d = e1;
        for (coeff, order) in p.iter_mut().zip(P_ORDER) {
            *coeff = d * polyval(&P_COEFF[o..=o + order], e1.powi(2)) / P_COEFF[o + order + 1];
            o += order + 2;
            d *= e1;
        }

        Self {
            r,
            f,
            e,
            e_p2,
            e1,
            m,
            p,
        }
    }

    pub fn grs80() -> EllipsoidConstants {
        Self::new(GRS80_A, GRS80_F)
    }

    pub fn wgs84() -> EllipsoidConstants {
        Self::new(WGS84_A, WGS84_F)
    }

    /// Returns the semi-major axis in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Returns `e^2 = 2f - f^2`.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.e
    }

    /// Returns `e'^2 = e^2 / (1 - e^2)`.
    #[inline]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.e_p2
    }

    /// Meridian distance in meters from the equator to latitude `lat` (radians).
    pub(crate) fn meridian_arc(&self, lat: f64) -> f64 {
        let [m1, m2, m3, m4, m5, m6] = self.m;

        self.r * (m1 * lat
            - m2 * (2. * lat).sin()
            + m3 * (4. * lat).sin()
            - m4 * (6. * lat).sin()
            + m5 * (8. * lat).sin()
            - m6 * (10. * lat).sin())
    }

    /// Footpoint latitude (radians) for the rectifying latitude `mu`.
    pub(crate) fn footpoint_latitude(&self, mu: f64) -> f64 {
        self.p
            .iter()
            .zip(1_i32..)
            .fold(mu, |acc, (coeff, k)| acc + coeff * (f64::from(2 * k) * mu).sin())
    }
}
