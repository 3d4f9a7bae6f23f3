use cambio::{Cambio, Window};
use cambio_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,cambio=trace,cambio_core=debug,cambio_argentinadatos=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create connector (mock in CI when CAMBIO_DEMOS_USE_MOCK is set) and build orchestrator
    let cambio = Cambio::builder().with_connector(get_connector()?).build()?;

    let series = cambio.load().await?;
    println!(
        "loaded {} days ({} entries dropped)",
        series.len(),
        series.report.dropped()
    );

    let last_year = series.window_today(Window::Y1);
    println!("{}: {} days", Window::Y1, last_year.len());

    let smoothed = cambio.default_smoothing(&series)?;
    if let Some(last) = smoothed.last() {
        println!(
            "{} SMA {}: {:.2}",
            last.point.date,
            cambio.config().moving_average_period,
            last.average
        );
    }

    Ok(())
}
