use cambio::Cambio;
use cambio_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cambio = Cambio::builder().with_connector(get_connector()?).build()?;
    let (rates_src, index_src) = cambio.sources();
    println!("rates from {rates_src}, index from {index_src}");

    let series = cambio.load().await?;
    let report = series.report;
    println!(
        "rates: {} kept / {} dropped; index: {} kept / {} dropped",
        report.rates.kept, report.rates.dropped, report.index.kept, report.index.dropped
    );

    let Some((first, last)) = series.date_bounds() else {
        println!("no overlapping data");
        return Ok(());
    };
    println!("{} days from {first} to {last}", series.len());

    println!("{:<12} {:>12} {:>12} {:>14}", "date", "rate", "index", "adjusted");
    let tail = series.points.len().saturating_sub(10);
    for p in &series.points[tail..] {
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>14.2}",
            p.date.to_string(),
            p.rate_value,
            p.index_value,
            p.derived_value
        );
    }

    if let Some(change) = series.latest_change() {
        let arrow = if change.increased { "up" } else { "down" };
        println!(
            "latest: {arrow} {:.2} ({:+.2}%)",
            change.absolute.abs(),
            change.percentage
        );
    }
    Ok(())
}
