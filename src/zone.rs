use tracing::trace;

use crate::{constants::{MAX_LATITUDE, MIN_LATITUDE}, utility::{dms, GeoMath}, Error, Parameter};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: i32 = 1;
    pub(crate) const MAXUTMZONE: i32 = 60;
}

/// Latitude bands, 8 degrees each starting at 80S. The last band (X) is
/// 12 degrees tall so it appears twice.
const ZONE_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWXX";

/// Returns the UTM zone number a lat/lon point falls into, applying the
/// irregular zones of southwest Norway (32V) and Svalbard (31X, 33X, 35X, 37X).
///
/// The longitude is wrapped into `[-180, 180)` first, so 180 is treated as
/// -180 and a point a hair west of -180 lands in zone 60.
///
/// # Usage
///
/// ```
/// use utmconvert::lat_lon_to_zone_number;
///
/// assert_eq!(lat_lon_to_zone_number(50.77, 6.08), 32);
/// // Norway
/// assert_eq!(lat_lon_to_zone_number(60.0, 4.0), 32);
/// // Svalbard
/// assert_eq!(lat_lon_to_zone_number(78.0, 15.0), 33);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn lat_lon_to_zone_number(latitude: f64, longitude: f64) -> i32 {
    let hd = f64::from(dms::HD);
    let longitude = longitude.ang_normalize();
    let longitude = if longitude >= hd { longitude - f64::from(dms::TD) } else { longitude };

    // The Norway exception
    if (56_f64..64.).contains(&latitude) && (3_f64..12.).contains(&longitude) {
        trace!(latitude, longitude, "norway exception, zone 32");
        return 32;
    }

    // The Svalbard exception
    if (72_f64..=84.).contains(&latitude) && longitude >= 0. {
        let zone = if longitude <= 9. {
            Some(31)
        } else if longitude <= 21. {
            Some(33)
        } else if longitude <= 33. {
            Some(35)
        } else if longitude <= 42. {
            Some(37)
        } else {
            None
        };

        if let Some(zone) = zone {
            trace!(latitude, longitude, zone, "svalbard exception");
            return zone;
        }
    }

    ((longitude + hd) / 6.).floor() as i32 + 1
}

/// Returns the latitude band letter, or `None` if the latitude is outside
/// the UTM range `[-80, 84]`.
///
/// # Usage
///
/// ```
/// use utmconvert::latitude_to_zone_letter;
///
/// assert_eq!(latitude_to_zone_letter(50.77), Some('U'));
/// assert_eq!(latitude_to_zone_letter(-33.9), Some('H'));
/// assert_eq!(latitude_to_zone_letter(83.5), Some('X'));
/// assert_eq!(latitude_to_zone_letter(85.0), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn latitude_to_zone_letter(latitude: f64) -> Option<char> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        let band = (latitude - MIN_LATITUDE) as usize >> 3;
        ZONE_LETTERS.as_bytes().get(band).copied().map(char::from)
    } else {
        None
    }
}

/// Longitude in degrees of the central meridian of `zone_number`.
///
/// ```
/// use utmconvert::zone_number_to_central_longitude;
///
/// assert_eq!(zone_number_to_central_longitude(1), -177.0);
/// assert_eq!(zone_number_to_central_longitude(32), 9.0);
/// assert_eq!(zone_number_to_central_longitude(60), 177.0);
/// ```
pub fn zone_number_to_central_longitude(zone_number: i32) -> f64 {
    (f64::from(zone_number) - 1.) * 6. - f64::from(dms::HD) + 3.
}

/// Whether a zone letter designates the northern hemisphere. Every letter
/// from `N` onwards is north; this is a grid convention and does not look at
/// the equator.
///
/// ```
/// use utmconvert::is_northern_from_letter;
///
/// assert!(is_northern_from_letter('N'));
/// assert!(is_northern_from_letter('u'));
/// assert!(!is_northern_from_letter('M'));
/// ```
pub fn is_northern_from_letter(letter: char) -> bool {
    letter.to_ascii_uppercase() >= 'N'
}

/// Checks that `letter` is a UTM latitude band (`C`-`X` without `I` and
/// `O`, either case) and returns it uppercased.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for [`Parameter::ZoneLetter`] otherwise.
pub fn validate_zone_letter(letter: char) -> Result<char, Error> {
    let upper = letter.to_ascii_uppercase();

    if ('C'..='X').contains(&upper) && upper != 'I' && upper != 'O' {
        Ok(upper)
    } else {
        Err(Error::OutOfRange {
            parameter: Parameter::ZoneLetter,
            msg: format!("{letter:?} not in C..X (excluding I and O)"),
        })
    }
}

/// Checks that `zone_number` is in `[1, 60]`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for [`Parameter::ZoneNumber`] otherwise.
pub fn validate_zone_number(zone_number: i32) -> Result<i32, Error> {
    if (zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone_number) {
        Ok(zone_number)
    } else {
        Err(Error::OutOfRange {
            parameter: Parameter::ZoneNumber,
            msg: format!(
                "{zone_number} not in range [{}, {}]",
                zonespec::MINUTMZONE,
                zonespec::MAXUTMZONE,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_zones() {
        assert_eq!(lat_lon_to_zone_number(0., -180.), 1);
        assert_eq!(lat_lon_to_zone_number(0., -174.000_001), 1);
        assert_eq!(lat_lon_to_zone_number(0., -174.), 2);
        assert_eq!(lat_lon_to_zone_number(0., 0.), 31);
        assert_eq!(lat_lon_to_zone_number(0., -0.000_001), 30);
        assert_eq!(lat_lon_to_zone_number(0., 179.999_999), 60);
        assert_eq!(lat_lon_to_zone_number(-45., -74.), 18);
    }

    #[test]
    fn antimeridian_stays_in_range() {
        assert_eq!(lat_lon_to_zone_number(0., 180.), 1);
        assert_eq!(lat_lon_to_zone_number(-79., 180.), 1);
        assert_eq!(lat_lon_to_zone_number(0., 180.000_5), 1);
        assert_eq!(lat_lon_to_zone_number(10., -180.000_5), 60);
        assert_eq!(lat_lon_to_zone_number(10., -180.), 1);
    }

    #[test]
    fn norway_band_edges() {
        assert_eq!(lat_lon_to_zone_number(55.999_999, 3.), 31);
        assert_eq!(lat_lon_to_zone_number(56., 3.), 32);
        assert_eq!(lat_lon_to_zone_number(63.999_999, 3.), 32);
        assert_eq!(lat_lon_to_zone_number(64., 3.), 31);
        assert_eq!(lat_lon_to_zone_number(60., 2.999_999), 31);
        assert_eq!(lat_lon_to_zone_number(60., 11.999_999), 32);
        assert_eq!(lat_lon_to_zone_number(60., 12.), 33);
    }

    #[test]
    fn svalbard_skips_even_zones() {
        for lat in [72., 75.5, 80., 84.] {
            for tenth in 0_i32..=480 {
                let lon = f64::from(tenth) / 10.;
                let zone = lat_lon_to_zone_number(lat, lon);
                assert!(![32, 34, 36].contains(&zone), "{lat} {lon} -> {zone}");
            }
        }

        assert_eq!(lat_lon_to_zone_number(71.999_999, 9.5), 32);
        assert_eq!(lat_lon_to_zone_number(72., -0.5), 30);
    }

    #[test]
    fn letters() {
        assert_eq!(latitude_to_zone_letter(-80.), Some('C'));
        assert_eq!(latitude_to_zone_letter(-72.000_001), Some('C'));
        assert_eq!(latitude_to_zone_letter(-72.), Some('D'));
        assert_eq!(latitude_to_zone_letter(-0.000_001), Some('M'));
        assert_eq!(latitude_to_zone_letter(0.), Some('N'));
        assert_eq!(latitude_to_zone_letter(71.999_999), Some('W'));
        assert_eq!(latitude_to_zone_letter(84.), Some('X'));
        assert_eq!(latitude_to_zone_letter(-80.000_001), None);
        assert_eq!(latitude_to_zone_letter(84.000_001), None);
    }

    #[test]
    fn letter_validation() {
        assert_eq!(validate_zone_letter('u').unwrap(), 'U');
        assert_eq!(validate_zone_letter('X').unwrap(), 'X');
        for bad in ['A', 'B', 'I', 'O', 'Y', 'Z', 'i', '1', ' '] {
            assert!(
                matches!(
                    validate_zone_letter(bad),
                    Err(Error::OutOfRange { parameter: Parameter::ZoneLetter, .. })
                ),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn zone_number_validation() {
        assert!(validate_zone_number(1).is_ok());
        assert!(validate_zone_number(60).is_ok());
        assert!(validate_zone_number(0).is_err());
        assert!(validate_zone_number(61).is_err());
        assert!(validate_zone_number(-1).is_err());
    }
}
