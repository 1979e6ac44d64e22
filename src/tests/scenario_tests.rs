//! Walks the station through realistic button-driven sessions and checks
//! the frames that reach the strip.

use std::thread;
use std::time::{Duration, Instant};

use matrix_weather_lib::color;
use matrix_weather_lib::display::DisplayController;
use matrix_weather_lib::glyphs::glyph_for;
use matrix_weather_lib::icons::{icon_for, DEFAULT_ICON, RAINBOW};
use matrix_weather_lib::state::{
    Button, InputState, PowerAction, ViewState, WeatherStation,
};
use matrix_weather_lib::surface::CELLS;
use matrix_weather_lib::{Pixel, WeatherSnapshot};

use super::RecordingSink;

/// A mild Melbourne day.
fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        temp_min: 10,
        temp_max: 22,
        icon: "sunny".to_string(),
        rain: 2,
    }
}

fn station_with(
    snapshot: WeatherSnapshot,
) -> (WeatherStation<RecordingSink>, DisplayController<RecordingSink>, std::sync::Arc<InputState>, RecordingSink) {
    let sink = RecordingSink::new();
    let display = DisplayController::new(sink.clone());
    let input = InputState::new();
    let station = WeatherStation::new(display.clone(), input.clone(), snapshot, 1, 10_000);
    (station, display, input, sink)
}

/// What an image looks like after the wiring remap, as transmitted.
fn rendered(image: &[Pixel; CELLS]) -> [Pixel; CELLS] {
    let sink = RecordingSink::new();
    let display = DisplayController::new(sink.clone());
    display.set_image(image);
    sink.last().expect("set_image transmits a frame")
}

/// Step the station until it asks for a timed or indefinite sleep, meaning
/// nothing is animating and no view change is pending.
fn drive_until_settled(station: &mut WeatherStation<RecordingSink>) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        assert!(Instant::now() < deadline, "station never settled");
        match station.step() {
            None => continue,
            Some(PowerAction::Nap(pause)) => thread::sleep(pause),
            Some(_) => return,
        }
    }
}

/// Presses are debounced against the boot instant too, so tests wait out
/// the window before the first synthetic press.
fn settle_debounce() {
    thread::sleep(Duration::from_millis(110));
}

#[test]
fn boot_shows_the_forecast_icon() {
    let (mut station, _display, _input, sink) = station_with(sample_snapshot());

    station.step();

    assert_eq!(sink.last(), Some(rendered(icon_for("sunny"))));
}

#[test]
fn unknown_icon_name_falls_back_to_the_default_pattern() {
    let mut snapshot = sample_snapshot();
    snapshot.icon = "tornado_funnel".to_string();
    let (mut station, _display, _input, sink) = station_with(snapshot);

    station.step();

    assert_eq!(sink.last(), Some(rendered(&DEFAULT_ICON)));
}

#[test]
fn button_a_scrolls_the_temperature_then_decays_to_the_icon() {
    let (mut station, display, input, sink) = station_with(sample_snapshot());

    station.step();
    settle_debounce();
    input.press(Button::A);
    drive_until_settled(&mut station);

    // The scroll opened with a whole red 'T', ran to completion, and the
    // station came back to the icon view on its own.
    let opening: [Pixel; CELLS] = glyph_for('T', color::RED)[..CELLS]
        .try_into()
        .unwrap();
    assert!(
        sink.frames().contains(&opening),
        "temperature scroll should open with a whole 'T'"
    );
    assert_eq!(input.view(), ViewState::Icon);
    assert!(!display.is_scrolling());
    assert_eq!(sink.last(), Some(rendered(icon_for("sunny"))));
}

#[test]
fn button_b_jumps_to_the_rainbow_from_any_view() {
    let (mut station, _display, input, sink) = station_with(sample_snapshot());

    station.step();
    settle_debounce();
    input.press(Button::B);
    station.step();

    assert_eq!(input.view(), ViewState::Rainbow);
    assert_eq!(sink.last(), Some(rendered(&RAINBOW)));
}

#[test]
fn two_presses_of_a_reach_the_rain_view() {
    let (mut station, _display, input, sink) = station_with(sample_snapshot());

    station.step();
    settle_debounce();
    input.press(Button::A);
    settle_debounce();
    input.press(Button::A);
    drive_until_settled(&mut station);

    // Rain text opens with a whole blue 'R'.
    let opening: [Pixel; CELLS] = glyph_for('R', color::BLUE)[..CELLS]
        .try_into()
        .unwrap();
    assert!(
        sink.frames().contains(&opening),
        "rain scroll should open with a whole 'R'"
    );
    assert_eq!(input.view(), ViewState::Icon);
}
