use std::fmt::Display;

use crate::{Error, Parameter, ParseCoord, utm::{self, Utm}};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A latitude/longitude point in degrees. Can be converted to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// Only `[-80, 84]` of that latitude range can be projected to UTM; see
    /// [`LatLon::to_utm`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(40.71435, -74.00597).unwrap();
    /// assert_eq!(coord.latitude(), 40.71435);
    /// assert_eq!(coord.longitude(), -74.00597);
    ///
    /// assert!(LatLon::create(100.0, 0.0).is_err());
    /// assert!(LatLon::create(0.0, -200.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::OutOfRange {
                parameter: Parameter::Latitude,
                msg: format!("{lat} outside of valid range [-90, 90]"),
            })
        } else if !(-180_f64..=180_f64).contains(&lon) {
            Err(Error::OutOfRange {
                parameter: Parameter::Longitude,
                msg: format!("{lon} outside of valid range [-180, 180]"),
            })
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`LatLon`] to [`Utm`] in the point's natural zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the latitude is outside `[-80, 84]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(-41.28646, 174.77623611).unwrap();
    /// let utm = coord.to_utm().unwrap();
    ///
    /// assert_eq!(utm.zone_number(), 60);
    /// assert_eq!(utm.zone_letter(), 'G');
    /// assert!(!utm.is_north());
    /// assert!((utm.easting() - 313_783.980).abs() < 1e-3);
    /// assert!((utm.northing() - 5_427_057.314).abs() < 1e-3);
    ///
    /// assert!(LatLon::create(85.0, 0.0).unwrap().to_utm().is_err());
    /// ```
    pub fn to_utm(&self) -> Result<Utm, Error> {
        utm::from_latlon(self.latitude, self.longitude, None)
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Errors
    ///
    /// See [`Utm::to_latlon`].
    pub fn from_utm(value: &Utm) -> Result<LatLon, Error> {
        value.to_latlon()
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"`; a comma may separate the two values.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let mut next_value = |name: &str| -> Result<f64, Error> {
            let piece = pieces
                .next()
                .ok_or_else(|| Error::Parse(format!("{value:?} is missing the {name}")))?;
            piece
                .parse()
                .map_err(|_| Error::Parse(format!("{name} {piece:?} is not a number")))
        };

        let lat = next_value("latitude")?;
        let lon = next_value("longitude")?;

        if pieces.next().is_some() {
            return Err(Error::Parse(format!("{value:?} has trailing input")));
        }

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
