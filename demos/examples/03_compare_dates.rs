use cambio::Cambio;
use cambio_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cambio = Cambio::builder().with_connector(get_connector()?).build()?;
    let series = cambio.load().await?;

    // Walk back in weekly steps from the latest day, like a date picker would.
    let Some((first, last)) = series.date_bounds() else {
        println!("empty series");
        return Ok(());
    };
    let mut day = last;
    while day >= first {
        if let Some(cmp) = series.compare_to_latest(day) {
            println!(
                "{}: rate {:.2}, adjusted {:.2}, to latest {:+.2} ({:+.2}%)",
                cmp.point.date,
                cmp.point.rate_value,
                cmp.point.derived_value,
                cmp.change.absolute,
                cmp.change.percentage
            );
        }
        match day.checked_sub_days(chrono::Days::new(7)) {
            Some(prev) => day = prev,
            None => break,
        }
    }
    Ok(())
}
