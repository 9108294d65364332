#[cfg(test)]
mod tests {
    use crate::parsing::coordinates::{parse_declination, parse_right_ascension};
    use crate::parsing::error::{InputField, ParseError, SexagesimalComponent};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    // ==================== Right ascension ====================

    /// Decimal degrees are taken as they are
    #[test]
    fn test_ra_decimal_degrees() {
        assert_close(parse_right_ascension("0").unwrap().degrees(), 0.0);
        assert_close(parse_right_ascension("123.456").unwrap().degrees(), 123.456);
        assert_close(parse_right_ascension(" 359.999 ").unwrap().degrees(), 359.999);
        assert!(parse_right_ascension("123.456").unwrap().sexagesimal().is_none());
    }

    /// HH:MM:SS converts with 15 * (h + m/60 + s/3600)
    #[test]
    fn test_ra_sexagesimal_conversion() {
        let ra = parse_right_ascension("20:34:12").unwrap();
        assert_close(ra.degrees(), 15.0 * (20.0 + 34.0 / 60.0 + 12.0 / 3600.0));

        let parts = ra.sexagesimal().unwrap();
        assert_eq!((parts.major, parts.minutes, parts.seconds), (20.0, 34.0, 12.0));

        assert_close(parse_right_ascension("00:00:00").unwrap().degrees(), 0.0);
        assert_close(parse_right_ascension("12:00:00.5").unwrap().degrees(), 180.0 + 0.5 / 240.0);
    }

    #[test]
    fn test_ra_decimal_out_of_range() {
        for value in ["360", "-0.5", "400", "1e3"] {
            let message = parse_right_ascension(value).unwrap_err().to_string();
            assert!(
                message.contains("between 0 and 360 degrees"),
                "{} gave {}",
                value,
                message
            );
        }
    }

    #[test]
    fn test_ra_hours_out_of_range() {
        let err = parse_right_ascension("25:22:11").unwrap_err();
        assert_eq!(
            err,
            ParseError::ComponentOutOfRange {
                field: InputField::RightAscension,
                component: SexagesimalComponent::Hours,
                value: "25".to_string(),
                limit: 24,
            }
        );
        assert!(err.to_string().contains("hours: 25"));

        assert!(parse_right_ascension("24:00:00").unwrap_err().to_string().contains("hours: 24"));
        assert!(parse_right_ascension("-1:00:00").unwrap_err().to_string().contains("hours: -1"));
    }

    #[test]
    fn test_ra_minutes_and_seconds_out_of_range() {
        let message = parse_right_ascension("10:70:00").unwrap_err().to_string();
        assert!(message.contains("minutes: 70"), "{}", message);

        let message = parse_right_ascension("10:10:60").unwrap_err().to_string();
        assert!(message.contains("seconds: 60"), "{}", message);
    }

    #[test]
    fn test_ra_invalid_formats() {
        for value in ["20:34", "20:34:12:00", "abc", "1.2.3", "12h30m", "20;34;12", "20:a:12", "$12", ""] {
            let err = parse_right_ascension(value).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidFormat { field: InputField::RightAscension, .. }),
                "{:?} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_ra_fractional_hours_cannot_exceed_full_circle() {
        let message = parse_right_ascension("23.99:59:59").unwrap_err().to_string();
        assert!(message.contains("between 0 and 360 degrees"));
    }

    // ==================== Declination ====================

    #[test]
    fn test_dec_decimal_degrees() {
        assert_close(parse_declination("-45.5").unwrap().degrees(), -45.5);
        assert_close(parse_declination("90").unwrap().degrees(), 90.0);
        assert_close(parse_declination("-90").unwrap().degrees(), -90.0);
    }

    /// Any non-digit separator between degrees, arcminutes and arcseconds
    #[test]
    fn test_dec_sexagesimal_separators() {
        let expected = 20.0 + 34.0 / 60.0 + 12.0 / 3600.0;
        for value in ["20:34:12", "20 34 12", "20D34M12S", "20d34m12s", "20°34'12\"", "+20:34:12"] {
            let dec = parse_declination(value).unwrap_or_else(|e| panic!("{}: {}", value, e));
            assert_close(dec.degrees(), expected);
        }
    }

    /// The sign applies to the whole value, including "-00"
    #[test]
    fn test_dec_negative_sexagesimal() {
        assert_close(
            parse_declination("-20:30:00").unwrap().degrees(),
            -20.5,
        );
        let dec = parse_declination("-00:30:00").unwrap();
        assert_close(dec.degrees(), -0.5);
        assert_eq!(dec.sexagesimal().unwrap().major, -0.0);
    }

    #[test]
    fn test_dec_fractional_arcseconds() {
        assert_close(
            parse_declination("10:00:36.5").unwrap().degrees(),
            10.0 + 36.5 / 3600.0,
        );
    }

    #[test]
    fn test_dec_out_of_range() {
        for value in ["370", "-90.001", "91:00:00", "-95"] {
            let message = parse_declination(value).unwrap_err().to_string();
            assert!(
                message.contains("between -90 and 90 degrees"),
                "{} gave {}",
                value,
                message
            );
        }
    }

    #[test]
    fn test_dec_arc_components_out_of_range() {
        for value in ["10:60:00", "10:00:75", "10D61M00S"] {
            let message = parse_declination(value).unwrap_err().to_string();
            assert!(
                message.contains("minutes and seconds should be between 0 and 59"),
                "{} gave {}",
                value,
                message
            );
        }
    }

    #[test]
    fn test_dec_invalid_formats() {
        for value in ["north", "10:20", "1.2.3", "10:-20:30", "", "--10"] {
            let err = parse_declination(value).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidFormat { field: InputField::Declination, .. }),
                "{:?} gave {:?}",
                value,
                err
            );
        }
    }
}
