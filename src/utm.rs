use std::fmt::Display;

use tracing::debug;

use crate::{
    constants::{
        DEGREE_SLOP, FALSE_EASTING, FALSE_NORTHING, GRID_SLOP, MAX_EASTING, MAX_LATITUDE,
        MAX_NORTHING, MIN_EASTING, MIN_LATITUDE, MIN_NORTHING,
    },
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    utility::dms,
    zone::{
        is_northern_from_letter, lat_lon_to_zone_number, latitude_to_zone_letter,
        validate_zone_letter, validate_zone_number, zone_number_to_central_longitude,
    },
    Error, Parameter, ParseCoord, ThisOrThat,
};

/// How the hemisphere of a UTM coordinate is given to [`to_latlon`]:
/// either through the zone letter or as an explicit flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HemisphereSpec {
    /// Latitude band letter; `N` and above are north.
    Letter(char),
    /// `true` for the northern hemisphere.
    Northern(bool),
}

impl HemisphereSpec {
    /// Builds a [`HemisphereSpec`] from an optional zone letter and an
    /// optional northern flag, exactly one of which must be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when both or neither are given.
    ///
    /// ```
    /// use utmconvert::HemisphereSpec;
    ///
    /// assert_eq!(HemisphereSpec::from_parts(Some('U'), None).unwrap(), HemisphereSpec::Letter('U'));
    /// assert_eq!(HemisphereSpec::from_parts(None, Some(false)).unwrap(), HemisphereSpec::Northern(false));
    /// assert!(HemisphereSpec::from_parts(None, None).is_err());
    /// assert!(HemisphereSpec::from_parts(Some('U'), Some(true)).is_err());
    /// ```
    pub fn from_parts(zone_letter: Option<char>, northern: Option<bool>) -> Result<HemisphereSpec, Error> {
        match (zone_letter, northern) {
            (Some(letter), None) => Ok(HemisphereSpec::Letter(letter)),
            (None, Some(northern)) => Ok(HemisphereSpec::Northern(northern)),
            (None, None) => Err(Error::InvalidArgument(
                "either zone letter or northern needs to be set".to_string(),
            )),
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "set either zone letter or northern, but not both".to_string(),
            )),
        }
    }

    /// Resolves to `true` for the northern hemisphere, validating the letter
    /// if one was given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid zone letter.
    pub fn is_northern(self) -> Result<bool, Error> {
        match self {
            HemisphereSpec::Letter(letter) => validate_zone_letter(letter).map(is_northern_from_letter),
            HemisphereSpec::Northern(northern) => Ok(northern),
        }
    }
}

impl From<char> for HemisphereSpec {
    fn from(letter: char) -> Self {
        HemisphereSpec::Letter(letter)
    }
}

/// Options for [`from_latlon_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardOptions {
    /// Project into this zone instead of the point's natural one. Not
    /// validated; useful to keep a point set spanning a zone boundary in a
    /// single zone.
    pub force_zone_number: Option<i32>,
    /// With `false`, latitude/longitude a hair outside the UTM range are
    /// accepted.
    pub strict: bool,
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self {
            force_zone_number: None,
            strict: true,
        }
    }
}

/// A UTM point: easting/northing in meters plus the zone number and
/// latitude band letter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "zone"))]
    pub(crate) zone_number: i32,
    #[cfg_attr(feature = "serde", serde(alias = "letter"))]
    pub(crate) zone_letter: char,
}

impl Utm {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(easting: f64, northing: f64, zone_number: i32, zone_letter: char) -> Utm {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
        }
    }

    /// Tries to create a UTM point from its constituent parts, applying the
    /// same checks as a strict [`to_latlon`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] naming the first invalid part.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Utm;
    ///
    /// let coord = Utm::create(583_959.959, 4_507_523.087, 18, 't').unwrap();
    /// assert_eq!(coord.zone_number(), 18);
    /// assert_eq!(coord.zone_letter(), 'T');
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::create(583_959.959, 4_507_523.087, 61, 'T').is_err());
    /// assert!(Utm::create(583_959.959, 4_507_523.087, 18, 'I').is_err());
    /// assert!(Utm::create(1_000_000.0, 4_507_523.087, 18, 'T').is_err());
    /// ```
    pub fn create(easting: f64, northing: f64, zone_number: i32, zone_letter: char) -> Result<Utm, Error> {
        check_coords(easting, northing, true)?;
        validate_zone_number(zone_number)?;
        let zone_letter = validate_zone_letter(zone_letter)?;

        Ok(Utm::new(easting, northing, zone_number, zone_letter))
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    #[inline]
    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }

    #[inline]
    pub fn zone_letter(&self) -> char {
        self.zone_letter
    }

    /// Returns whether the zone letter designates the northern hemisphere.
    pub fn is_north(&self) -> bool {
        is_northern_from_letter(self.zone_letter)
    }

    /// Converts from [`LatLon`] to [`Utm`]
    ///
    /// # Errors
    ///
    /// See [`from_latlon`].
    pub fn from_latlon(value: &LatLon) -> Result<Utm, Error> {
        from_latlon(value.latitude, value.longitude, None)
    }

    /// Converts from [`Utm`] to [`LatLon`]. Easting and northing are checked
    /// with the relaxed bounds, since a forced zone may legitimately put
    /// them outside the nominal band.
    ///
    /// # Errors
    ///
    /// See [`to_latlon`].
    pub fn to_latlon(&self) -> Result<LatLon, Error> {
        to_latlon(
            self.easting,
            self.northing,
            self.zone_number,
            HemisphereSpec::Letter(self.zone_letter),
            false,
        )
    }
}

/// Projects a lat/lon point (degrees) into UTM.
///
/// The zone is the point's natural zone unless `force_zone_number` is set,
/// in which case that zone's central meridian is used as-is.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the latitude is outside `[-80, 84]` or
/// the longitude is outside `[-180, 180]`.
///
/// # Usage
///
/// ```
/// use utmconvert::from_latlon;
///
/// let utm = from_latlon(40.71435, -74.00597, None).unwrap();
/// assert_eq!((utm.zone_number(), utm.zone_letter()), (18, 'T'));
/// assert!((utm.easting() - 583_959.959).abs() < 1e-3);
/// assert!((utm.northing() - 4_507_523.087).abs() < 1e-3);
///
/// // Same point in the neighbouring zone
/// let forced = from_latlon(40.71435, -74.00597, Some(19)).unwrap();
/// assert_eq!(forced.zone_number(), 19);
/// assert!(forced.easting() < 100_000.0);
///
/// assert!(from_latlon(84.1, 0.0, None).is_err());
/// ```
pub fn from_latlon(latitude: f64, longitude: f64, force_zone_number: Option<i32>) -> Result<Utm, Error> {
    from_latlon_with(
        latitude,
        longitude,
        ForwardOptions {
            force_zone_number,
            ..ForwardOptions::default()
        },
    )
}

/// [`from_latlon`] with every option exposed.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the latitude or longitude is outside
/// the UTM range, widened by a thousandth of a degree when
/// `options.strict` is `false`.
pub fn from_latlon_with(latitude: f64, longitude: f64, options: ForwardOptions) -> Result<Utm, Error> {
    check_latlon(latitude, longitude, options.strict)?;

    // Relaxed input a hair past 84N still belongs to band X and Svalbard
    let band_latitude = latitude.clamp(MIN_LATITUDE, MAX_LATITUDE);

    let zone_number = match options.force_zone_number {
        Some(zone) => {
            debug!(zone, latitude, longitude, "projecting into forced zone");
            zone
        }
        None => lat_lon_to_zone_number(band_latitude, longitude),
    };

    let zone_letter = latitude_to_zone_letter(band_latitude).ok_or_else(|| Error::OutOfRange {
        parameter: Parameter::Latitude,
        msg: format!("{latitude} has no latitude band"),
    })?;

    let lon0 = zone_number_to_central_longitude(zone_number);
    let (x, y) = TransverseMercator::utm().forward(lon0, latitude, longitude);

    let northp = latitude >= 0.;
    let easting = x + FALSE_EASTING;
    let northing = y + northp.ternary(0., FALSE_NORTHING);

    Ok(Utm::new(easting, northing, zone_number, zone_letter))
}

/// Converts a UTM coordinate back to lat/lon (degrees).
///
/// With `strict` set, easting must be in `[100 000, 1 000 000)` and
/// northing in `[0, 10 000 000]`; without it both bounds are widened by
/// 100km. The zone number is always checked against `[1, 60]`.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming the easting, northing, zone number
/// or zone letter that failed its check.
///
/// # Usage
///
/// ```
/// use utmconvert::{to_latlon, HemisphereSpec};
///
/// let coord = to_latlon(500_000.0, 100_000.0, 32, HemisphereSpec::Northern(true), true).unwrap();
/// assert!((coord.latitude() - 0.904_730_614_584).abs() < 1e-9);
/// assert!((coord.longitude() - 9.0).abs() < 1e-12);
///
/// let south = to_latlon(313_783.980_049, 5_427_057.313_755, 60, 'G'.into(), true).unwrap();
/// assert!((south.latitude() + 41.286_46).abs() < 1e-6);
/// assert!((south.longitude() - 174.776_236_11).abs() < 1e-6);
///
/// assert!(to_latlon(500_000.0, 100_000.0, 32, 'I'.into(), true).is_err());
/// ```
pub fn to_latlon(
    easting: f64,
    northing: f64,
    zone_number: i32,
    hemisphere: HemisphereSpec,
    strict: bool,
) -> Result<LatLon, Error> {
    check_coords(easting, northing, strict)?;
    validate_zone_number(zone_number)?;
    let northp = hemisphere.is_northern()?;

    let x = easting - FALSE_EASTING;
    let y = northing - northp.ternary(0., FALSE_NORTHING);

    let lon0 = zone_number_to_central_longitude(zone_number);

    Ok(TransverseMercator::utm().reverse(lon0, x, y))
}

fn check_latlon(lat: f64, lon: f64, strict: bool) -> Result<(), Error> {
    let slop = strict.ternary(0., DEGREE_SLOP);
    let hd = f64::from(dms::HD);

    if !(MIN_LATITUDE - slop..=MAX_LATITUDE + slop).contains(&lat) {
        return Err(Error::OutOfRange {
            parameter: Parameter::Latitude,
            msg: format!(
                "{lat} not in [{}, {}] (must be between 80 deg S and 84 deg N)",
                MIN_LATITUDE - slop,
                MAX_LATITUDE + slop,
            ),
        });
    }

    if !(-hd - slop..=hd + slop).contains(&lon) {
        return Err(Error::OutOfRange {
            parameter: Parameter::Longitude,
            msg: format!(
                "{lon} not in [{}, {}] (must be between 180 deg W and 180 deg E)",
                -hd - slop,
                hd + slop,
            ),
        });
    }

    if !strict && !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        debug!(lat, "accepting latitude outside the UTM range in relaxed mode");
    }

    Ok(())
}

pub(crate) fn check_coords(x: f64, y: f64, strict: bool) -> Result<(), Error> {
    // Strict easting excludes its upper bound, relaxed bounds are closed
    let easting_ok = if strict {
        (MIN_EASTING..MAX_EASTING).contains(&x)
    } else {
        (MIN_EASTING - GRID_SLOP..=MAX_EASTING + GRID_SLOP).contains(&x)
    };

    if !easting_ok {
        return Err(Error::OutOfRange {
            parameter: Parameter::Easting,
            msg: format!(
                "{:.2}km not in {} range [{:.2}km, {:.2}km{}",
                x / 1000.0,
                strict.ternary("strict", "relaxed"),
                (MIN_EASTING - strict.ternary(0., GRID_SLOP)) / 1000.0,
                (MAX_EASTING + strict.ternary(0., GRID_SLOP)) / 1000.0,
                strict.ternary(")", "]"),
            ),
        });
    }

    let slop = strict.ternary(0., GRID_SLOP);
    if !(MIN_NORTHING - slop..=MAX_NORTHING + slop).contains(&y) {
        return Err(Error::OutOfRange {
            parameter: Parameter::Northing,
            msg: format!(
                "{:.2}km not in {} range [{:.2}km, {:.2}km]",
                y / 1000.0,
                strict.ternary("strict", "relaxed"),
                (MIN_NORTHING - slop) / 1000.0,
                (MAX_NORTHING + slop) / 1000.0,
            ),
        });
    }

    Ok(())
}

impl ParseCoord for Utm {
    /// Parses `"<zone><letter> <easting> <northing>"`, with or without a
    /// space between zone number and letter, e.g. `"32U 294408.66 5628897.51"`.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value.split_whitespace();

        let zone = pieces
            .next()
            .ok_or_else(|| Error::Parse("UTM string is empty".to_string()))?;

        let (zone_number, zone_letter) = match zone.char_indices().find(|(_, c)| c.is_ascii_alphabetic()) {
            Some((idx, _)) => zone.split_at(idx),
            None => {
                let letter = pieces
                    .next()
                    .ok_or_else(|| Error::Parse(format!("{value:?} is missing the zone letter")))?;
                (zone, letter)
            }
        };

        let zone_number: i32 = zone_number
            .parse()
            .map_err(|_| Error::Parse(format!("zone number {zone_number:?} is not an integer")))?;

        let mut letters = zone_letter.chars();
        let zone_letter = match (letters.next(), letters.next()) {
            (Some(letter), None) => letter,
            _ => return Err(Error::Parse(format!("zone letter {zone_letter:?} is not a single letter"))),
        };

        let mut next_value = |name: &str| -> Result<f64, Error> {
            let piece = pieces
                .next()
                .ok_or_else(|| Error::Parse(format!("{value:?} is missing the {name}")))?;
            piece
                .parse()
                .map_err(|_| Error::Parse(format!("{name} {piece:?} is not a number")))
        };

        let easting = next_value("easting")?;
        let northing = next_value("northing")?;

        if pieces.next().is_some() {
            return Err(Error::Parse(format!("{value:?} has trailing input")));
        }

        Utm::create(easting, northing, zone_number, zone_letter)
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{}{} {easting} {northing}",
            self.zone_number,
            self.zone_letter,
        )
    }
}
