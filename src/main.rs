//! # Weather Matrix Application Entry Point
//!
//! Boots the 5x5 LED matrix weather station: loads configuration, fetches
//! the latest BOM forecast (with a scrolling status message while the
//! network is busy), then hands the display to the button-driven view loop.
//!
//! ## Usage Modes
//!
//! - **Development**: `matrix-weather --stdout` renders the matrix in the
//!   terminal with ANSI colors and walks through the four views.
//! - **Hardware**: `matrix-weather` (requires the `hardware` feature and a
//!   Raspberry Pi with a WS2812 strip on SPI plus two GPIO buttons).

// Hardware bindings only exist with the hardware feature on Linux
#[cfg(all(target_os = "linux", feature = "hardware"))]
mod hardware;

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use std::thread;
use std::time::Duration;

use matrix_weather_lib::color;
use matrix_weather_lib::config::Config;
use matrix_weather_lib::display::DisplayController;
use matrix_weather_lib::state::{Button, InputState, PowerAction, WeatherStation};
use matrix_weather_lib::surface::PixelSink;
use matrix_weather_lib::terminal::TerminalSink;
use matrix_weather_lib::weather::BomClient;
use matrix_weather_lib::WeatherSnapshot;
use tracing_subscriber::EnvFilter;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Development mode: render to the terminal for testing without hardware
    let development_mode = env::args().any(|arg| arg == "--stdout");
    let config = Config::load();

    if development_mode {
        tracing::info!("running in development mode (terminal output)");
        return run_demo(&config);
    }

    #[cfg(all(target_os = "linux", feature = "hardware"))]
    {
        return run_hardware(&config);
    }

    #[cfg(all(target_os = "linux", not(feature = "hardware")))]
    {
        tracing::warn!("hardware support not enabled; rebuild with --features hardware");
        tracing::warn!("showing the terminal demo instead");
        return run_demo(&config);
    }

    #[cfg(not(target_os = "linux"))]
    {
        return Err(anyhow::anyhow!(
            "hardware mode is only available on Linux; use --stdout for development mode"
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// Fetch the current snapshot while a status message scrolls on the matrix.
///
/// The status guard clears the display on every exit path. A failed fetch
/// degrades to the placeholder snapshot rather than aborting: a display
/// showing dashes beats a display showing nothing.
fn fetch_snapshot<S: PixelSink + 'static>(
    config: &Config,
    display: &DisplayController<S>,
) -> anyhow::Result<WeatherSnapshot> {
    let client = BomClient::new(
        config.station.geohash.as_str(),
        config.display.cache_dir.as_str(),
        config.cache_ttl_secs(),
    );
    let runtime = tokio::runtime::Runtime::new()?;

    let _status = display.scroll_status("bom...", color::GREEN, config.display.scroll_delay_ms, 1);
    let snapshot = runtime.block_on(client.snapshot()).unwrap_or_else(|error| {
        tracing::error!(%error, "weather fetch failed, showing placeholder");
        WeatherSnapshot::placeholder()
    });
    tracing::info!(
        station = %config.station.name,
        temp_min = snapshot.temp_min,
        temp_max = snapshot.temp_max,
        icon = %snapshot.icon,
        rain = snapshot.rain,
        "snapshot ready"
    );
    Ok(snapshot)
}

/// Scripted walk through the four views on the terminal renderer.
///
/// Drives the same state machine the hardware uses, feeding it synthetic
/// button presses instead of GPIO interrupts.
fn run_demo(config: &Config) -> anyhow::Result<()> {
    let display = DisplayController::new(TerminalSink::new());
    let snapshot = fetch_snapshot(config, &display)?;

    let input = InputState::new();
    let mut station = WeatherStation::new(
        display.clone(),
        input.clone(),
        snapshot,
        config.display.scroll_delay_ms,
        config.display.idle_timeout_ms,
    );

    // Forecast icon first, as on boot.
    station.step();
    thread::sleep(Duration::from_secs(2));

    // Temperature scroll, then let it decay back to the icon.
    input.press(Button::A);
    drive_until_idle(&mut station);

    // Two presses of A step past the temperature view to the rain view.
    input.press(Button::A);
    thread::sleep(Duration::from_millis(150));
    input.press(Button::A);
    drive_until_idle(&mut station);

    // Finish on the rainbow.
    input.press(Button::B);
    station.step();
    thread::sleep(Duration::from_secs(2));

    display.shutdown();
    Ok(())
}

/// Step the station until nothing is animating and no new view is pending.
fn drive_until_idle(station: &mut WeatherStation<TerminalSink>) {
    loop {
        match station.step() {
            None => continue,
            Some(PowerAction::Nap(pause)) => thread::sleep(pause),
            Some(_) => break,
        }
    }
}

#[cfg(all(target_os = "linux", feature = "hardware"))]
fn run_hardware(config: &Config) -> anyhow::Result<()> {
    use std::sync::Arc;

    use matrix_weather_lib::power::HostPower;

    let sink = hardware::NeopixelSink::new(&config.hardware.spi_device)?;
    let display = DisplayController::new(sink);
    let snapshot = fetch_snapshot(config, &display)?;

    let input = InputState::new();
    let power = HostPower::new();
    let _buttons = hardware::init_buttons(&config.hardware, Arc::clone(&input), Arc::clone(&power))?;

    let mut station = WeatherStation::new(
        display,
        input,
        snapshot,
        config.display.scroll_delay_ms,
        config.display.idle_timeout_ms,
    );
    station.run(power.as_ref())
}
