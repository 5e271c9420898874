//! Bidirectional conversion between geographic coordinates and
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system),
//! including zone lookup with the Norway and Svalbard exceptions.
//!
//! ```
//! use utmconvert::{from_latlon, to_latlon, HemisphereSpec};
//!
//! let utm = from_latlon(50.77534556, 6.08388667, None).unwrap();
//! assert_eq!(utm.zone_number(), 32);
//! assert_eq!(utm.zone_letter(), 'U');
//! assert!((utm.easting() - 294_408.663).abs() < 1e-3);
//!
//! let back = to_latlon(
//!     utm.easting(),
//!     utm.northing(),
//!     utm.zone_number(),
//!     HemisphereSpec::Letter(utm.zone_letter()),
//!     true,
//! ).unwrap();
//! assert!((back.latitude() - 50.77534556).abs() < 1e-5);
//! assert!((back.longitude() - 6.08388667).abs() < 1e-5);
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use std::fmt::Display;

use thiserror::Error;

pub mod ellipsoid;
pub mod latlon;
pub mod utm;
pub mod zone;

pub use ellipsoid::EllipsoidConstants;
pub use latlon::LatLon;
pub use utm::{from_latlon, from_latlon_with, to_latlon, ForwardOptions, HemisphereSpec, Utm};
pub use zone::{
    is_northern_from_letter,
    lat_lon_to_zone_number,
    latitude_to_zone_letter,
    validate_zone_letter,
    validate_zone_number,
    zone_number_to_central_longitude,
};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

/// The input that violated its bound in an [`Error::OutOfRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    Latitude,
    Longitude,
    ZoneNumber,
    ZoneLetter,
    Easting,
    Northing,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Parameter::Latitude => "latitude",
            Parameter::Longitude => "longitude",
            Parameter::ZoneNumber => "zone number",
            Parameter::ZoneLetter => "zone letter",
            Parameter::Easting => "easting",
            Parameter::Northing => "northing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{parameter} out of range: {msg}")]
    OutOfRange {
        parameter: Parameter,
        msg: String,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Coordinate string is invalid: {0}")]
    Parse(String),
}

impl Error {
    /// The offending parameter, if this is a range error.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            Error::OutOfRange { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

pub trait ParseCoord {
    /// Parses a coordinate from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed text, or the range error of the
    /// coordinate's constructor.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type.
///
/// ```
/// use utmconvert::{LatLon, Utm};
///
/// let coord: LatLon = utmconvert::from_str("40.71435 -74.00597").unwrap();
/// assert_eq!(coord.latitude(), 40.71435);
///
/// let utm: Utm = utmconvert::from_str("18T 583959.96 4507523.09").unwrap();
/// assert_eq!(utm.zone_number(), 18);
/// ```
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
