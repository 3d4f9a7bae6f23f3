#![allow(dead_code)]

use cambio_core::DailyPoint;
use chrono::NaiveDate;

/// Calendar day from components for readability in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("invalid date")
}

/// Day `offset` days after 2024-01-01.
pub fn day(offset: i64) -> NaiveDate {
    d(2024, 1, 1) + chrono::Days::new(u64::try_from(offset).expect("negative offset"))
}

/// Point whose three fields all carry `v`.
pub fn flat(date: NaiveDate, v: f64) -> DailyPoint {
    DailyPoint::new(date, v, v, v)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
