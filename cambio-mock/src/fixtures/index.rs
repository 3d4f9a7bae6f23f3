use cambio_core::RawIndexPoint;

const ROWS: &[(&str, f64)] = &[
    ("2024-01-02", 467.92),
    ("2024-01-03", 468.69),
    ("2024-01-04", 469.46),
    ("2024-01-05", 470.23),
    ("2024-01-08", 472.55),
    ("2024-01-09", 473.33),
    ("2024-01-10", 474.11),
    ("2024-01-11", 475.26),
    ("2024-01-12", 476.41),
    ("2024-01-15", 479.87),
    ("2024-01-16", 481.03),
    ("2024-01-17", 482.19),
    ("2024-01-18", 483.35),
    ("2024-01-19", 484.51),
];

pub fn all() -> Vec<RawIndexPoint> {
    let mut out: Vec<RawIndexPoint> = ROWS
        .iter()
        .map(|&(date, value)| RawIndexPoint::new(date, value))
        .collect();
    out.push(RawIndexPoint::new("2024-01-13", 0.0));
    out
}
