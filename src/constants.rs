// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// WGS84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// WGS84 flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
// Applied in the southern hemisphere only
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;

pub(crate) const MIN_LATITUDE: f64 = -80.;
pub(crate) const MAX_LATITUDE: f64 = 84.;

pub(crate) const MIN_EASTING: f64 = 100_000.;
pub(crate) const MAX_EASTING: f64 = 1_000_000.;
pub(crate) const MIN_NORTHING: f64 = 0.;
pub(crate) const MAX_NORTHING: f64 = 10_000_000.;

/// Widening applied to easting/northing bounds outside strict mode (one 100km square)
pub(crate) const GRID_SLOP: f64 = 100_000.;
/// Widening applied to latitude/longitude bounds outside strict mode, in degrees
pub(crate) const DEGREE_SLOP: f64 = 1e-3;
