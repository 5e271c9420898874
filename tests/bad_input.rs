use utmconvert::{from_latlon, to_latlon, Error, HemisphereSpec, Parameter};

fn out_of_range<T: std::fmt::Debug>(result: Result<T, Error>) -> Parameter {
    match result {
        Err(Error::OutOfRange { parameter, .. }) => parameter,
        other => panic!("expected an out of range error, got {other:?}"),
    }
}

#[test]
fn from_latlon_range_checks() {
    assert_eq!(out_of_range(from_latlon(-100., 0., None)), Parameter::Latitude);
    assert_eq!(out_of_range(from_latlon(-80.1, 0., None)), Parameter::Latitude);
    assert_eq!(out_of_range(from_latlon(84.1, 0., None)), Parameter::Latitude);
    assert_eq!(out_of_range(from_latlon(100., 0., None)), Parameter::Latitude);

    for i in -8000_i32..=8400 {
        assert!(from_latlon(f64::from(i) / 100., 0., None).is_ok(), "latitude {i}");
    }

    assert_eq!(out_of_range(from_latlon(0., -300., None)), Parameter::Longitude);
    assert_eq!(out_of_range(from_latlon(0., -180.1, None)), Parameter::Longitude);
    assert_eq!(out_of_range(from_latlon(0., 180.1, None)), Parameter::Longitude);
    assert_eq!(out_of_range(from_latlon(0., 300., None)), Parameter::Longitude);

    for i in -18000_i32..=18000 {
        assert!(from_latlon(0., f64::from(i) / 100., None).is_ok(), "longitude {i}");
    }

    for (lat, lon) in [(-100., -300.), (100., -300.), (-100., 300.), (100., 300.)] {
        assert!(from_latlon(lat, lon, None).is_err());
    }

    assert!(from_latlon(f64::NAN, 0., None).is_err());
    assert!(from_latlon(84., -5.006_01, None).is_ok());
}

#[test]
fn hemisphere_exclusivity() {
    assert!(matches!(HemisphereSpec::from_parts(None, None), Err(Error::InvalidArgument(_))));
    assert!(matches!(HemisphereSpec::from_parts(Some('U'), Some(true)), Err(Error::InvalidArgument(_))));

    let spec = HemisphereSpec::from_parts(None, Some(true)).unwrap();
    let coord = to_latlon(500_000., 100_000., 32, spec, true).unwrap();
    assert!((coord.latitude() - 0.904_730_614_584).abs() < 1e-5);
    assert!((coord.longitude() - 9.).abs() < 1e-5);
}

#[test]
fn easting_range() {
    for easting in [0., 99_999., 1_000_000., 100_000_000_000.] {
        assert_eq!(
            out_of_range(to_latlon(easting, 5_000_000., 32, 'U'.into(), true)),
            Parameter::Easting
        );
    }

    for easting in (100_000_i32..999_999).step_by(1000) {
        assert!(to_latlon(f64::from(easting), 5_000_000., 32, 'U'.into(), true).is_ok());
    }
}

#[test]
fn northing_range() {
    for northing in [-100_000., -1., 10_000_001., 50_000_000.] {
        assert_eq!(
            out_of_range(to_latlon(500_000., northing, 32, 'U'.into(), true)),
            Parameter::Northing
        );
    }

    for northing in (10_i32..10_000_000).step_by(1000) {
        assert!(to_latlon(500_000., f64::from(northing), 32, 'U'.into(), true).is_ok());
    }
    assert!(to_latlon(500_000., 0., 32, 'U'.into(), true).is_ok());
    assert!(to_latlon(500_000., 10_000_000., 32, 'U'.into(), true).is_ok());
}

#[test]
fn zone_number_range() {
    for zone in [-1, 0, 61, 1000] {
        assert_eq!(
            out_of_range(to_latlon(500_000., 5_000_000., zone, 'U'.into(), true)),
            Parameter::ZoneNumber
        );
        assert_eq!(
            out_of_range(to_latlon(500_000., 5_000_000., zone, 'U'.into(), false)),
            Parameter::ZoneNumber
        );
    }

    for zone in 1..=60 {
        assert!(to_latlon(500_000., 5_000_000., zone, 'U'.into(), true).is_ok());
    }
}

#[test]
fn zone_letters() {
    for bad in ['A', 'B', 'I', 'O', 'Y', 'Z', 'a', 'o', '?'] {
        assert_eq!(
            out_of_range(to_latlon(500_000., 5_000_000., 32, HemisphereSpec::Letter(bad), true)),
            Parameter::ZoneLetter
        );
    }

    for letter in 'C'..='X' {
        if letter == 'I' || letter == 'O' {
            continue;
        }
        assert!(to_latlon(500_000., 5_000_000., 32, HemisphereSpec::Letter(letter), true).is_ok());
        assert!(to_latlon(500_000., 5_000_000., 32, letter.to_ascii_lowercase().into(), true).is_ok());
    }
}

#[test]
fn error_messages_name_the_parameter() {
    let err = from_latlon(84.1, 0., None).unwrap_err();
    assert_eq!(err.parameter(), Some(Parameter::Latitude));
    assert!(err.to_string().starts_with("latitude out of range"));

    let err = to_latlon(500_000., 5_000_000., 32, 'I'.into(), true).unwrap_err();
    assert!(err.to_string().starts_with("zone letter out of range"));

    let err = HemisphereSpec::from_parts(None, None).unwrap_err();
    assert_eq!(err.parameter(), None);
}
