// Solver, facade and coordinate tests.
//
// Expected times follow the almanac procedure with four-digit half-to-even
// rounding; each was cross-checked against published sunrise tables within a
// minute or two.

#[cfg(test)]
mod coordinate_tests {
    use crate::error::SolarError;
    use crate::solar::Coordinate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors_agree() {
        let from_strings = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        let from_doubles = Coordinate::from_degrees(39.742043, -104.991531).unwrap();
        let from_decimals = Coordinate::new(dec!(39.742043), dec!(-104.991531)).unwrap();

        assert_eq!(from_strings.latitude(), dec!(39.742043));
        assert_eq!(from_strings.longitude(), dec!(-104.991531));
        assert_eq!(from_strings, from_decimals);
        assert_eq!(from_doubles.latitude().round_dp(6), dec!(39.742043));
        assert_eq!(from_doubles.longitude().round_dp(6), dec!(-104.991531));
    }

    #[test]
    fn test_malformed_input_is_an_invalid_coordinate() {
        let err = Coordinate::from_strs("north", "-104.99").unwrap_err();
        assert!(err.is_invalid_coordinate());
        assert_eq!(
            err,
            SolarError::MalformedCoordinate {
                field: "latitude",
                input: "north".to_string()
            }
        );

        let err = Coordinate::from_strs("39.7", "").unwrap_err();
        assert!(matches!(err, SolarError::MalformedCoordinate { field: "longitude", .. }));

        let err = Coordinate::from_degrees(f64::NAN, 0.0).unwrap_err();
        assert!(err.is_invalid_coordinate());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        // Latitude 100.123 appears in older fixtures but is not a place on Earth
        let err = Coordinate::from_strs("100.123", "-34.5678").unwrap_err();
        assert_eq!(
            err,
            SolarError::CoordinateOutOfRange {
                field: "latitude",
                value: dec!(100.123),
                min: -90,
                max: 90
            }
        );
        assert!(err.is_invalid_coordinate());

        assert!(Coordinate::from_degrees(0.0, 180.5).is_err());
        assert!(Coordinate::from_degrees(-90.0, -180.0).is_ok());
        assert!(Coordinate::from_degrees(90.0, 180.0).is_ok());
    }

    #[test]
    fn test_set_location_replaces_both_or_nothing() {
        let mut location = Coordinate::from_degrees(10.0, 20.0).unwrap();

        location.set_location_strs("51.5074", "-0.1278").unwrap();
        assert_eq!(location.latitude(), dec!(51.5074));
        assert_eq!(location.longitude(), dec!(-0.1278));

        // Valid latitude, invalid longitude: neither field changes
        assert!(location.set_location_degrees(1.0, 200.0).is_err());
        assert_eq!(location.latitude(), dec!(51.5074));
        assert_eq!(location.longitude(), dec!(-0.1278));

        location.set_location(dec!(-33.9249), dec!(18.4241)).unwrap();
        assert_eq!(location.latitude(), dec!(-33.9249));
    }

    #[test]
    fn test_parse_pair() {
        let location: Coordinate = "35.6762, 139.6503".parse().unwrap();
        assert_eq!(location.latitude(), dec!(35.6762));
        assert_eq!(location.longitude(), dec!(139.6503));
        assert!("35.6762".parse::<Coordinate>().is_err());
        assert_eq!(location.to_string(), "35.6762°, 139.6503°");
    }
}

#[cfg(test)]
mod zenith_tests {
    use crate::solar::Zenith;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zenith_degrees() {
        assert_eq!(Zenith::Astronomical.degrees(), dec!(108));
        assert_eq!(Zenith::Nautical.degrees(), dec!(102));
        assert_eq!(Zenith::Civil.degrees(), dec!(96));
        assert_eq!(Zenith::Official.degrees(), dec!(90.8333));
    }

    #[test]
    fn test_zenith_names_round_trip() {
        for zenith in Zenith::ALL {
            assert_eq!(zenith.name().parse::<Zenith>().unwrap(), zenith);
        }
        assert_eq!(" Civil ".parse::<Zenith>().unwrap(), Zenith::Civil);
        assert!("golden".parse::<Zenith>().is_err());
    }
}

#[cfg(test)]
mod quadrant_tests {
    use crate::solar::right_ascension_in_quadrant;
    use rust_decimal_macros::dec;

    // atan(0.91764 * tan(L)) is ±42.5407° for L at 45° past each axis;
    // negative results arrive here already shifted by +360°.

    #[test]
    fn test_first_quadrant_unchanged() {
        assert_eq!(right_ascension_in_quadrant(dec!(45), dec!(42.5407)), dec!(42.5407));
    }

    #[test]
    fn test_second_quadrant() {
        assert_eq!(right_ascension_in_quadrant(dec!(135), dec!(317.4593)), dec!(137.4593));
    }

    #[test]
    fn test_third_quadrant() {
        assert_eq!(right_ascension_in_quadrant(dec!(225), dec!(42.5407)), dec!(222.5407));
    }

    #[test]
    fn test_fourth_quadrant_unchanged() {
        assert_eq!(right_ascension_in_quadrant(dec!(315), dec!(317.4593)), dec!(317.4593));
    }

    #[test]
    fn test_quadrant_edges() {
        assert_eq!(right_ascension_in_quadrant(dec!(0), dec!(0)), dec!(0));
        assert_eq!(right_ascension_in_quadrant(dec!(90), dec!(270)), dec!(90));
        assert_eq!(right_ascension_in_quadrant(dec!(359.9), dec!(359.9)), dec!(359.9));
    }
}

#[cfg(test)]
mod calculator_tests {
    use crate::solar::*;
    use chrono::{NaiveDate, TimeZone, Timelike};
    use chrono_tz::Tz;
    use rust_decimal_macros::dec;

    fn denver() -> SolarEventCalculator {
        let location = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        SolarEventCalculator::new(location, Tz::America__Denver)
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_denver_official_sunrise_and_sunset() {
        let calculator = denver();
        let day = date(2021, 3, 1);
        assert_eq!(calculator.compute_sunrise_time(Zenith::Official, day), "06:33");
        assert_eq!(calculator.compute_sunset_time(Zenith::Official, day), "17:52");
    }

    #[test]
    fn test_denver_all_zeniths() {
        let calculator = denver();
        let day = date(2021, 3, 1);
        let expected = [
            (Zenith::Astronomical, "05:04", "19:22"),
            (Zenith::Nautical, "05:35", "18:50"),
            (Zenith::Civil, "06:06", "18:19"),
            (Zenith::Official, "06:33", "17:52"),
        ];
        for (zenith, sunrise, sunset) in expected {
            assert_eq!(calculator.compute_sunrise_time(zenith, day), sunrise, "{zenith} sunrise");
            assert_eq!(calculator.compute_sunset_time(zenith, day), sunset, "{zenith} sunset");
        }
    }

    #[test]
    fn test_leap_year_last_day() {
        let calculator = denver();
        let day = date(2020, 12, 31);
        assert_eq!(calculator.compute_sunrise_time(Zenith::Official, day), "07:21");
        assert_eq!(calculator.compute_sunset_time(Zenith::Official, day), "16:46");
    }

    #[test]
    fn test_fractional_zone_offset() {
        let location = Coordinate::from_strs("22.5726", "88.3639").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::Asia__Kolkata);
        let day = date(2020, 1, 1);
        assert_eq!(calculator.compute_sunrise_time(Zenith::Official, day), "06:17");
        assert_eq!(calculator.compute_sunset_time(Zenith::Official, day), "17:03");
        assert_eq!(calculator.compute_sunrise_time(Zenith::Civil, day), "05:52");
    }

    #[test]
    fn test_intermediate_values() {
        let trace = denver().trace(Zenith::Official, date(2021, 3, 1), SolarEvent::Sunrise);
        assert_eq!(trace.day_of_year, 60);
        assert_eq!(trace.base_longitude_hour, dec!(-6.9994));
        assert_eq!(trace.longitude_hour, dec!(60.5416));
        assert_eq!(trace.utc_time.map(|utc| utc + dec!(-7)), trace.local_time.map(|t| t.hours()));
        assert!(!trace.zone_rules.daylight_saving);
    }

    #[test]
    fn test_daylight_saving_adds_exactly_one_hour() {
        let location = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        let with_dst = SolarEventCalculator::new(location, Tz::America__Denver);
        // Etc/GMT+7 is UTC-7 all year
        let without_dst = SolarEventCalculator::new(location, Tz::Etc__GMTPlus7);
        let day = date(2021, 7, 1);

        for zenith in Zenith::ALL {
            for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
                let summer = with_dst.compute_event(zenith, day, event).unwrap();
                let standard = without_dst.compute_event(zenith, day, event).unwrap();
                let mut shifted = standard.hours() + dec!(1);
                if shifted >= dec!(24) {
                    shifted -= dec!(24);
                }
                assert_eq!(summer.hours(), shifted, "{zenith} {event}");
            }
        }

        assert_eq!(with_dst.compute_sunrise_time(Zenith::Official, day), "05:36");
        assert_eq!(without_dst.compute_sunrise_time(Zenith::Official, day), "04:36");
        assert_eq!(with_dst.compute_sunset_time(Zenith::Civil, day), "21:04");
        assert_eq!(without_dst.compute_sunset_time(Zenith::Civil, day), "20:04");
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        let location = Coordinate::from_strs("78.2232", "15.6267").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::Arctic__Longyearbyen);
        let day = date(2020, 12, 21);

        assert_eq!(calculator.compute_sunrise_time(Zenith::Official, day), "99:99");
        assert_eq!(calculator.compute_sunset_time(Zenith::Official, day), "99:99");
        assert_eq!(calculator.compute_sunrise_time(Zenith::Civil, day), "99:99");
        // The sun still climbs above -12°
        assert_eq!(calculator.compute_sunset_time(Zenith::Nautical, day), "12:53");

        let midwinter = Tz::Arctic__Longyearbyen.with_ymd_and_hms(2020, 12, 21, 9, 0, 0).unwrap();
        assert_eq!(calculator.compute_sunrise_calendar(Zenith::Official, &midwinter), None);
        assert_eq!(calculator.compute_event(Zenith::Official, day, SolarEvent::Sunrise), None);
    }

    #[test]
    fn test_polar_day_has_no_sunset() {
        let location = Coordinate::from_strs("78.2232", "15.6267").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::Arctic__Longyearbyen);
        let day = date(2020, 6, 21);
        for zenith in Zenith::ALL {
            assert_eq!(calculator.compute_sunrise_time(zenith, day), "99:99");
            assert_eq!(calculator.compute_sunset_time(zenith, day), "99:99");
        }
    }

    #[test]
    fn test_near_south_pole_winter() {
        let location = Coordinate::from_strs("-89.5", "0").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::UTC);
        let day = date(2020, 6, 21);
        let trace = calculator.trace(Zenith::Official, day, SolarEvent::Sunrise);
        assert!(trace.cos_local_hour.is_some());
        assert_eq!(trace.local_time, None);
        assert_eq!(calculator.compute_sunrise_time(Zenith::Astronomical, day), "99:99");
    }

    #[test]
    fn test_exact_poles_do_not_panic() {
        for latitude in ["90", "-90"] {
            let location = Coordinate::from_strs(latitude, "0").unwrap();
            let calculator = SolarEventCalculator::new(location, Tz::UTC);
            for day in [date(2021, 3, 20), date(2021, 6, 21), date(2021, 12, 21)] {
                let _ = calculator.compute_sunrise_time(Zenith::Official, day);
                let _ = calculator.compute_sunset_time(Zenith::Official, day);
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let calculator = denver();
        let day = date(2021, 3, 1);
        let first = calculator.trace(Zenith::Civil, day, SolarEvent::Sunset);
        for _ in 0..10 {
            assert_eq!(calculator.trace(Zenith::Civil, day, SolarEvent::Sunset), first);
        }
    }

    #[test]
    fn test_calendar_does_not_touch_the_input() {
        let calculator = denver();
        let input = Tz::America__Denver.with_ymd_and_hms(2021, 3, 1, 15, 45, 30).unwrap();
        let before = input.timestamp_millis();

        let sunrise = calculator.compute_sunrise_calendar(Zenith::Official, &input).unwrap();

        assert_eq!(input.timestamp_millis(), before);
        assert_eq!(input.hour(), 15);
        assert_eq!(sunrise.date_naive(), date(2021, 3, 1));
        assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (6, 33, 0));
        assert_eq!(sunrise.nanosecond(), 0);
    }

    #[test]
    fn test_calendar_reads_date_in_calculator_zone() {
        let calculator = denver();
        // 03:00 UTC on March 2 is still March 1 in Denver
        let input = chrono::Utc.with_ymd_and_hms(2021, 3, 2, 3, 0, 0).unwrap();
        let sunset = calculator.compute_sunset_calendar(Zenith::Official, &input).unwrap();
        assert_eq!(sunset.date_naive(), date(2021, 3, 1));
        assert_eq!(sunset.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(sunset.format("%H:%M").to_string(), "17:52");
    }

    #[test]
    fn test_calendar_rolls_back_across_midnight() {
        // Tokyo's sunrise happens before midnight UTC
        let location = Coordinate::from_strs("35.6762", "139.6503").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::UTC);
        let day = date(2021, 3, 1);

        assert_eq!(calculator.compute_sunrise_time(Zenith::Official, day), "21:13");
        let event = calculator.compute_event(Zenith::Official, day, SolarEvent::Sunrise).unwrap();
        assert_eq!(event.day_offset(), -1);

        let input = Tz::UTC.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap();
        let sunrise = calculator.compute_sunrise_calendar(Zenith::Official, &input).unwrap();
        assert_eq!(sunrise.date_naive(), date(2021, 2, 28));
        assert_eq!((sunrise.hour(), sunrise.minute()), (21, 13));

        // Sunset stays on the same day
        let sunset = calculator.compute_sunset_calendar(Zenith::Official, &input).unwrap();
        assert_eq!(sunset.date_naive(), day);
        assert_eq!((sunset.hour(), sunset.minute()), (8, 36));

        // The same instant, seen from Tokyo
        let tokyo = SolarEventCalculator::new(location, Tz::Asia__Tokyo);
        assert_eq!(tokyo.compute_sunrise_time(Zenith::Official, day), "06:13");
        assert_eq!(tokyo.compute_sunset_time(Zenith::Official, day), "17:36");
    }

    #[test]
    fn test_string_and_calendar_agree() {
        let calculator = denver();
        let input = Tz::America__Denver.with_ymd_and_hms(2021, 7, 1, 0, 0, 0).unwrap();
        let day = input.date_naive();
        for zenith in Zenith::ALL {
            let sunrise = calculator.compute_sunrise_calendar(zenith, &input).unwrap();
            assert_eq!(sunrise.format("%H:%M").to_string(), calculator.compute_sunrise_time(zenith, day));
            let sunset = calculator.compute_sunset_calendar(zenith, &input).unwrap();
            assert_eq!(sunset.format("%H:%M").to_string(), calculator.compute_sunset_time(zenith, day));
        }
    }

    #[test]
    fn test_calendar_inside_spring_forward_gap() {
        // Clocks in Oslo jump from 02:00 to 03:00 on this date
        let location = Coordinate::from_strs("65", "30").unwrap();
        let calculator = SolarEventCalculator::new(location, Tz::Europe__Oslo);
        let day = date(2021, 3, 28);
        assert!(Tz::Europe__Oslo.with_ymd_and_hms(2021, 3, 28, 2, 17, 0).single().is_none());

        assert_eq!(calculator.compute_sunrise_time(Zenith::Astronomical, day), "02:17");
        let input = Tz::Europe__Oslo.with_ymd_and_hms(2021, 3, 28, 12, 0, 0).unwrap();
        let sunrise = calculator.compute_sunrise_calendar(Zenith::Astronomical, &input).unwrap();

        assert_eq!(sunrise.date_naive(), day);
        assert_eq!(sunrise.format("%H:%M").to_string(), "02:17");
        assert_eq!(sunrise.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(
            sunrise.with_timezone(&chrono::Utc).format("%H:%M").to_string(),
            "00:17"
        );
    }

    #[test]
    fn test_free_solve_matches_calculator() {
        let location = Coordinate::from_strs("51.5074", "-0.1278").unwrap();
        let day = date(2021, 6, 21);
        let time = solve(&location, Zenith::Official, day, SolarEvent::Sunset, Tz::Europe__London).unwrap();
        assert_eq!(time.to_string(), "21:21");
        assert_eq!(
            solve(&location, Zenith::Astronomical, day, SolarEvent::Sunrise, Tz::Europe__London),
            None
        );
    }

    #[test]
    fn test_calculator_is_shareable_across_threads() {
        let calculator = std::sync::Arc::new(denver());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let calculator = calculator.clone();
                std::thread::spawn(move || calculator.compute_sunrise_time(Zenith::Official, date(2021, 3, 1)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "06:33");
        }
    }
}

#[cfg(test)]
mod facade_tests {
    use crate::error::SolarError;
    use crate::solar::*;
    use chrono::{NaiveDate, TimeZone, Timelike};
    use chrono_tz::Tz;

    fn denver() -> SunriseSunsetCalculator {
        let location = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        SunriseSunsetCalculator::with_time_zone_name(location, "America/Denver").unwrap()
    }

    #[test]
    fn test_named_string_accessors() {
        let calculator = denver();
        let day = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();

        assert_eq!(calculator.astronomical_sunrise_for_date(day), "05:04");
        assert_eq!(calculator.astronomical_sunset_for_date(day), "19:22");
        assert_eq!(calculator.nautical_sunrise_for_date(day), "05:35");
        assert_eq!(calculator.nautical_sunset_for_date(day), "18:50");
        assert_eq!(calculator.civil_sunrise_for_date(day), "06:06");
        assert_eq!(calculator.civil_sunset_for_date(day), "18:19");
        assert_eq!(calculator.official_sunrise_for_date(day), "06:33");
        assert_eq!(calculator.official_sunset_for_date(day), "17:52");
    }

    #[test]
    fn test_named_calendar_accessors() {
        let calculator = denver();
        let input = Tz::America__Denver.with_ymd_and_hms(2021, 3, 1, 8, 0, 0).unwrap();
        let hm = |value: Option<chrono::DateTime<chrono::FixedOffset>>| {
            let value = value.unwrap();
            (value.hour(), value.minute())
        };

        assert_eq!(hm(calculator.astronomical_sunrise_calendar_for_date(&input)), (5, 4));
        assert_eq!(hm(calculator.astronomical_sunset_calendar_for_date(&input)), (19, 22));
        assert_eq!(hm(calculator.nautical_sunrise_calendar_for_date(&input)), (5, 35));
        assert_eq!(hm(calculator.nautical_sunset_calendar_for_date(&input)), (18, 50));
        assert_eq!(hm(calculator.civil_sunrise_calendar_for_date(&input)), (6, 6));
        assert_eq!(hm(calculator.civil_sunset_calendar_for_date(&input)), (18, 19));
        assert_eq!(hm(calculator.official_sunrise_calendar_for_date(&input)), (6, 33));
        assert_eq!(hm(calculator.official_sunset_calendar_for_date(&input)), (17, 52));
    }

    #[test]
    fn test_events_for_date_keeps_order() {
        let calculator = denver();
        let day = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let rows = calculator.events_for_date(&[Zenith::Official, Zenith::Civil], day);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].zenith, Zenith::Official);
        assert_eq!(rows[0].sunrise, "06:33");
        assert_eq!(rows[1].sunset, "18:19");
        assert_eq!(
            calculator.event_for_date(Zenith::Nautical, SolarEvent::Sunset, day),
            "18:50"
        );
        assert_eq!(
            display::format_row(&rows[1]),
            "civil         sunrise 06:06   sunset 18:19"
        );
    }

    #[test]
    fn test_unknown_zone_fails_at_construction() {
        let location = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        let err = SunriseSunsetCalculator::with_time_zone_name(location, "America/Atlantis").unwrap_err();
        assert_eq!(err, SolarError::UnknownTimeZone("America/Atlantis".to_string()));
    }

    #[test]
    fn test_location_accessor() {
        let calculator = denver();
        assert_eq!(calculator.location().to_string(), "39.742043°, -104.991531°");
        assert_eq!(calculator.time_zone(), Tz::America__Denver);
        assert_eq!(calculator.calculator().time_zone(), Tz::America__Denver);
    }

    #[test]
    fn test_for_location_detects_zone() {
        let location = Coordinate::from_strs("39.742043", "-104.991531").unwrap();
        let calculator = SunriseSunsetCalculator::for_location(location);
        assert_eq!(calculator.time_zone(), Tz::America__Denver);
    }

    #[test]
    fn test_static_entry_points() {
        let input = Tz::America__Denver.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap();

        let sunrise = SunriseSunsetCalculator::sunrise(
            39.742043,
            -104.991531,
            Tz::America__Denver,
            &input,
            -0.8333,
        )
        .unwrap()
        .unwrap();
        assert_eq!((sunrise.hour(), sunrise.minute()), (6, 33));

        // Six degrees below the horizon is civil twilight
        let dusk = SunriseSunsetCalculator::sunset(39.742043, -104.991531, Tz::America__Denver, &input, -6.0)
            .unwrap()
            .unwrap();
        assert_eq!((dusk.hour(), dusk.minute()), (18, 19));
    }

    #[test]
    fn test_static_entry_points_validate_coordinates() {
        let input = Tz::America__Denver.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let err = SunriseSunsetCalculator::sunrise(100.123, -34.5678, Tz::America__Denver, &input, -0.8333)
            .unwrap_err();
        assert!(err.is_invalid_coordinate());
    }

    #[test]
    fn test_static_entry_points_reject_non_finite_elevation() {
        let input = Tz::America__Denver.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap();
        for degrees in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = SunriseSunsetCalculator::sunrise(39.742043, -104.991531, Tz::America__Denver, &input, degrees)
                .unwrap_err();
            assert!(matches!(err, SolarError::MalformedElevation { .. }));
            assert!(!err.is_invalid_coordinate());
        }
        let err = SunriseSunsetCalculator::sunset(39.742043, -104.991531, Tz::America__Denver, &input, f64::NAN)
            .unwrap_err();
        assert_eq!(err, SolarError::MalformedElevation { input: "NaN".to_string() });
    }

    #[test]
    fn test_static_entry_point_polar_night() {
        let input = Tz::UTC.with_ymd_and_hms(2020, 12, 21, 0, 0, 0).unwrap();
        let sunrise = SunriseSunsetCalculator::sunrise(89.9, 0.0, Tz::UTC, &input, -0.8333).unwrap();
        assert_eq!(sunrise, None);
    }
}
