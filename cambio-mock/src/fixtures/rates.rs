use cambio_core::RawRatePoint;

// (date, buy, sell) for the "bolsa" market; weekends are absent.
const ROWS: &[(&str, f64, f64)] = &[
    ("2024-01-02", 975.10, 1010.40),
    ("2024-01-03", 980.00, 1012.75),
    ("2024-01-04", 985.30, 1018.20),
    ("2024-01-05", 990.55, 1021.00),
    ("2024-01-08", 996.20, 1027.80),
    ("2024-01-09", 1001.00, 1030.15),
    ("2024-01-10", 1004.40, 1034.90),
    ("2024-01-11", 1010.75, 1040.05),
    ("2024-01-12", 1012.00, 1043.60),
    ("2024-01-15", 1018.30, 1049.25),
    ("2024-01-16", 1022.10, 1052.00),
    ("2024-01-17", 1025.80, 1056.70),
    ("2024-01-18", 1030.00, 1060.30),
    ("2024-01-19", 1033.45, 1064.10),
];

pub fn all() -> Vec<RawRatePoint> {
    let mut out: Vec<RawRatePoint> = ROWS
        .iter()
        .map(|&(date, buy, sell)| RawRatePoint {
            date: Some(date.to_string()),
            buy: Some(buy),
            sell: Some(sell),
            source_id: Some("bolsa".to_string()),
        })
        .collect();
    // Two malformed rows the normalizer is expected to drop.
    out.push(RawRatePoint {
        date: Some("2024-01-20".to_string()),
        buy: Some(1035.0),
        sell: None,
        source_id: Some("bolsa".to_string()),
    });
    out.push(RawRatePoint {
        date: Some("not-a-date".to_string()),
        buy: None,
        sell: Some(1000.0),
        source_id: Some("bolsa".to_string()),
    });
    out
}
