use std::sync::Arc;

use cambio::{Cambio, RawIndexPoint, RawRatePoint};
use cambio_mock::MockConnector;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
}

fn day(offset: u64) -> String {
    (base() + Days::new(offset)).format("%Y-%m-%d").to_string()
}

fn arb_source() -> impl Strategy<Value = Vec<(u64, f64)>> {
    prop::collection::vec((0u64..120, 1.0f64..2000.0), 0..40)
}

fn load(rates: &[(u64, f64)], index: &[(u64, f64)]) -> cambio::DailySeries {
    let mock = MockConnector::new()
        .with_rates(rates.iter().map(|&(o, v)| RawRatePoint::new(day(o), v)).collect())
        .with_index(index.iter().map(|&(o, v)| RawIndexPoint::new(day(o), v)).collect());
    let cambio = Cambio::builder().with_connector(Arc::new(mock)).build().unwrap();
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(cambio.load())
        .unwrap()
}

proptest! {
    #[test]
    fn loads_are_reproducible(rates in arb_source(), index in arb_source()) {
        let a = load(&rates, &index);
        let b = load(&rates, &index);
        prop_assert_eq!(a.points.len(), b.points.len());
        for (x, y) in a.points.iter().zip(&b.points) {
            prop_assert_eq!(x.date, y.date);
            prop_assert_eq!(x.rate_value.to_bits(), y.rate_value.to_bits());
            prop_assert_eq!(x.index_value.to_bits(), y.index_value.to_bits());
            prop_assert_eq!(x.derived_value.to_bits(), y.derived_value.to_bits());
        }
        prop_assert_eq!(a.report, b.report);
    }

    #[test]
    fn loaded_points_are_ascending_and_positive(rates in arb_source(), index in arb_source()) {
        let s = load(&rates, &index);
        for pair in s.points.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        // A lone merged day is returned as is; longer series are sanitized.
        if s.points.len() >= 2 {
            prop_assert!(s.points.iter().all(|p| p.is_complete()));
        }
        prop_assert_eq!(s.report.rates.total(), rates.len());
        prop_assert_eq!(s.report.index.total(), index.len());
    }
}
