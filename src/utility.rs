pub(crate) mod dms {
    /// Degrees per half turn
    pub const HD: i32 = 180;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

/// Evaluate a polynomial
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

pub(crate) trait GeoMath {
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn remainder(&self, denom: Self) -> Self;
}

impl GeoMath for f64 {
    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Reduce an angle in degrees to the range `[-180, 180]`, keeping the
    /// sign of the input on the boundary.
    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(f64::from(dms::TD));
        let hd = f64::from(dms::HD);

        if value.abs().eps_eq(hd) {
            hd.copysign(*self)
        }
        else {
            value
        }
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn polyval_horner() {
        // 2x^2 - 3x + 1
        assert_relative_eq!(polyval(&[2., -3., 1.], 2.), 3.);
        assert_relative_eq!(polyval(&[], 5.), 0.);
    }

    #[test]
    fn normalize_wraps() {
        assert_relative_eq!(357_f64.ang_normalize(), -3.);
        assert_relative_eq!((-357_f64).ang_normalize(), 3.);
        assert_relative_eq!(12.5_f64.ang_normalize(), 12.5);
        assert_relative_eq!(180_f64.ang_normalize(), 180.);
        assert_relative_eq!((-180_f64).ang_normalize(), -180.);
        assert_relative_eq!(540_f64.ang_normalize(), 180.);
    }
}
