use cambio::{Cambio, CambioConfig, Window};
use cambio_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cambio = Cambio::builder()
        .with_connector(get_connector()?)
        .default_window(Window::Y1)
        .build()?;
    let series = cambio.load().await?;

    // Anchor windows at the last available day so the mock data stays in range.
    let Some(today) = series.latest().map(|p| p.date) else {
        println!("empty series");
        return Ok(());
    };

    for w in Window::ALL_WINDOWS {
        let view = series.window(w, today);
        println!("{w:>4}: {} days", view.len());
    }

    for period in CambioConfig::SMA_PRESETS {
        let smoothed = series.smoothed(period)?;
        if let Some(last) = smoothed.last() {
            println!(
                "SMA {period:>2}: {:.2} (adjusted {:.2})",
                last.average, last.point.derived_value
            );
        }
    }

    let view = cambio.default_view(&series, today);
    println!("default window {}: {} days", cambio.config().default_window, view.len());
    Ok(())
}
