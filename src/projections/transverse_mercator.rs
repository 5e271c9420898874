use crate::{constants::UTM_K0, ellipsoid::{EllipsoidConstants, ELLIPSOID}, latlon::LatLon, utility::GeoMath};

// Both directions follow
//
// Kelly, Kevin M. (1986): Coordinate Transformations - Universal Transverse
//   Mercator/Geographic. Ontario Ministry of Natural Resources.
// Snyder, John P. (1987): Map Projections - A Working Manual, USGS
//   Professional Paper 1395, p.60ff.
// Hofmann-Wellenhof, B.; Kienast, G.; Lichtenegger, H. (1994): GPS in der
//   Praxis, Springer, p.97ff.
//
// truncated at a^8 (forward) and d^8 (inverse).

pub(crate) struct TransverseMercator {
    ellipsoid: &'static EllipsoidConstants,
    k0: f64,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        Self {
            ellipsoid: &*ELLIPSOID,
            k0: UTM_K0,
        }
    }

    /// Projects `lat`/`lon` (degrees) relative to the central meridian
    /// `lon0`. Returns `(x, y)` in meters without false easting/northing.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn forward(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let EllipsoidConstants { r, e, e_p2, .. } = *self.ellipsoid;

        let lat_rad = lat.to_radians();
        let (lat_sin, lat_cos) = lat_rad.sin_cos();

        let t = lat_rad.tan();
        let t2 = t.powi(2);
        let t4 = t2.powi(2);
        let t6 = t4 * t2;

        let n = r / (1. - e * lat_sin.powi(2)).sqrt();
        let c = e_p2 * lat_cos.powi(2);
        let c2 = c.powi(2);
        let c3 = c2 * c;
        let c4 = c3 * c;

        let a = lat_cos * (lon - lon0).ang_normalize().to_radians();
        let a2 = a.powi(2);
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;
        let a7 = a6 * a;
        let a8 = a7 * a;

        let m = self.ellipsoid.meridian_arc(lat_rad);

        let x = self.k0 * n * (a
            + a3 / 6. * (1. - t2 + c)
            + a5 / 120. * (5. - 18. * t2 + t4 + 14. * c + 13. * c2 + 4. * c3
                - 58. * c * t2 - 64. * c2 * t2 - 24. * t2 * c3)
            + a7 / 5040. * (61. - 479. * t2 + 179. * t4 - t6));

        let y = self.k0 * (m + n * t * (a2 / 2.
            + a4 / 24. * (5. - t2 + 9. * c + 4. * c2)
            + a6 / 720. * (61. - 58. * t2 + t4 + 270. * c + 445. * c2 + 324. * c3 + 88. * c4
                - 330. * c * t2 - 680. * t2 * c2 - 600. * t2 * c3 - 192. * t2 * c4)
            + a8 / 40320. * (1385. - 3111. * t2 + 543. * t4 - t6)));

        (x, y)
    }

    /// Inverse of [`TransverseMercator::forward`]: `x`/`y` are offsets
    /// in meters from the origin of the zone centred on `lon0`.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn reverse(&self, lon0: f64, x: f64, y: f64) -> LatLon {
        let EllipsoidConstants { r, e, e_p2, m: [m1, ..], .. } = *self.ellipsoid;

        let mu = y / self.k0 / (r * m1);
        let p = self.ellipsoid.footpoint_latitude(mu);

        let (p_sin, p_cos) = p.sin_cos();
        let p_sin2 = p_sin.powi(2);

        let t = p.tan();
        let t2 = t.powi(2);
        let t4 = t2.powi(2);
        let t6 = t4 * t2;

        let n = r / (1. - e * p_sin2).sqrt();
        let ratio = (1. - e) / (1. - e * p_sin2);

        // Second eccentricity, not e1; the e1 form is about 1e-6 deg off
        let c = e_p2 * p_cos.powi(2);
        let c2 = c.powi(2);
        let c3 = c2 * c;
        let c4 = c3 * c;

        let d = x / (n * self.k0);
        let d2 = d.powi(2);
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;
        let d7 = d6 * d;
        let d8 = d7 * d;

        let lat = p - (t / ratio) * (d2 / 2.
            - d4 / 24. * (5. + 3. * t2 + c - 4. * c2 - 9. * t2 * c)
            + d6 / 720. * (61. + 90. * t2 + 45. * t4 + 46. * c - 3. * c2 + 100. * c3 + 88. * c4
                - 252. * t2 * c - 66. * t2 * c2 + 84. * t4 * c3 - 192. * t2 * c4
                - 90. * t4 * c + 225. * t4 * c2)
            - d8 / 40320. * (1385. + 3633. * t2 + 4095. * t4 + 1575. * t6));

        let lon = (d
            - d3 / 6. * (1. + 2. * t2 + c)
            + d5 / 120. * (5. + 28. * t2 + 24. * t4 + 6. * c - 3. * c2 - 4. * c3
                + 8. * t2 * c + 4. * t2 * c2 + 24. * t2 * c3)
            - d7 / 5040. * (61. + 662. * t2 + 1320. * t4 + 720. * t6)) / p_cos;

        LatLon::new(lat.to_degrees(), (lon.to_degrees() + lon0).ang_normalize())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn central_meridian_is_true_scale_origin() {
        let tm = TransverseMercator::utm();
        let (x, y) = tm.forward(9., 0., 9.);
        assert_relative_eq!(x, 0., epsilon = 1e-9);
        assert_relative_eq!(y, 0., epsilon = 1e-9);

        // Along the central meridian y is the scaled meridian arc
        let (x, y) = tm.forward(9., 45., 9.);
        assert_relative_eq!(x, 0., epsilon = 1e-9);
        assert_relative_eq!(y, UTM_K0 * ELLIPSOID.meridian_arc(45_f64.to_radians()), epsilon = 1e-6);
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let tm = TransverseMercator::utm();
        let (xe, ye) = tm.forward(-75., 40., -73.);
        let (xw, yw) = tm.forward(-75., 40., -77.);
        assert_relative_eq!(xe, -xw, epsilon = 1e-6);
        assert_relative_eq!(ye, yw, epsilon = 1e-6);
    }

    #[test]
    fn wraps_across_antimeridian() {
        let tm = TransverseMercator::utm();
        let (x_near, y_near) = tm.forward(-177., 10., -179.);
        let (x_far, y_far) = tm.forward(-177., 10., 181.);
        assert_relative_eq!(x_near, x_far, epsilon = 1e-6);
        assert_relative_eq!(y_near, y_far, epsilon = 1e-6);
    }

    #[test]
    fn inverse_undoes_forward() {
        let tm = TransverseMercator::utm();
        for (lat, dlon) in [(0., 0.), (10., 2.5), (-35., -3.), (60., 1.), (83.9, -2.9)] {
            let (x, y) = tm.forward(15., lat, 15. + dlon);
            let back = tm.reverse(15., x, y);
            assert_relative_eq!(back.latitude(), lat, epsilon = 1e-9);
            assert_relative_eq!(back.longitude(), 15. + dlon, epsilon = 1e-9);
        }
    }
}
