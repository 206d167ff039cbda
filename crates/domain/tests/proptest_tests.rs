//! Property-based tests for domain value objects and forecast grouping
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{ForecastByDate, ForecastPeriod, GeoLocation, GridLocation};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// GridLocation Property Tests
// ============================================================================

mod grid_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn display_round_trips_components(
            id in "[A-Z]{3}",
            x in 0u32..1000,
            y in 0u32..1000
        ) {
            let grid = GridLocation::new(id.clone(), x, y).unwrap();
            prop_assert_eq!(grid.to_string(), format!("{id}/{x},{y}"));
        }
    }
}

// ============================================================================
// ForecastByDate Property Tests
// ============================================================================

mod forecast_grouping_tests {
    use super::*;

    fn period_strategy() -> impl Strategy<Value = ForecastPeriod> {
        (1u32..=28, 0u32..24, "[A-Za-z ]{1,12}").prop_map(|(day, hour, name)| {
            ForecastPeriod::new(
                format!("2026-10-{day:02}T{hour:02}:00:00-05:00"),
                name,
                "Forecast text.",
            )
        })
    }

    proptest! {
        #[test]
        fn grouping_keeps_every_sentence(periods in prop::collection::vec(period_strategy(), 0..20)) {
            let grouped = ForecastByDate::group(&periods, |p| p.name.clone());
            let total: usize = grouped.iter().map(|(_, s)| s.len()).sum();
            prop_assert_eq!(total, periods.len());
        }

        #[test]
        fn per_date_order_matches_input(periods in prop::collection::vec(period_strategy(), 0..20)) {
            let grouped = ForecastByDate::group(&periods, |p| p.name.clone());
            for (date, sentences) in grouped.iter() {
                let expected: Vec<String> = periods
                    .iter()
                    .filter(|p| p.date_key() == date)
                    .map(|p| p.name.clone())
                    .collect();
                prop_assert_eq!(sentences.to_vec(), expected);
            }
        }

        #[test]
        fn dates_are_strictly_ascending(periods in prop::collection::vec(period_strategy(), 0..20)) {
            let grouped = ForecastByDate::group(&periods, |p| p.name.clone());
            let dates: Vec<&str> = grouped.dates().collect();
            prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
