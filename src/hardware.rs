//! Raspberry Pi hardware bindings: WS2812 strip over SPI and GPIO buttons.
//!
//! The 25-pixel strip hangs off the hardware SPI bus (the WS2812 one-wire
//! protocol is bit-banged through SPI at 3 MHz), and the two buttons are
//! pulled-up GPIO inputs that fire async interrupts on the falling edge.

use std::sync::Arc;

use anyhow::Context;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::SpidevBus;
use matrix_weather_lib::config::HardwareConfig;
use matrix_weather_lib::power::HostPower;
use matrix_weather_lib::state::{Button, InputState};
use matrix_weather_lib::surface::{PixelSink, SinkError, CELLS};
use matrix_weather_lib::Pixel;
use rppal::gpio::{Gpio, InputPin, Trigger};
use smart_leds::{SmartLedsWrite, RGB8};
use ws2812_spi::Ws2812;

/// WS2812 timing is encoded in SPI bit patterns; 3 MHz puts one strip bit
/// at three SPI bits, which is what the `ws2812-spi` driver expects.
const SPI_CLOCK_HZ: u32 = 3_000_000;

/// Pixel sink backed by the physical strip.
pub struct NeopixelSink {
    strip: Ws2812<SpidevBus>,
}

impl NeopixelSink {
    pub fn new(device: &str) -> anyhow::Result<Self> {
        let mut bus = SpidevBus::open(device)
            .with_context(|| format!("open SPI device {}", device))?;
        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(SPI_CLOCK_HZ)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        bus.0
            .configure(&options)
            .with_context(|| format!("configure SPI device {}", device))?;
        tracing::info!(device, "neopixel strip attached");
        Ok(Self {
            strip: Ws2812::new(bus),
        })
    }
}

impl PixelSink for NeopixelSink {
    fn write(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError> {
        // Channel values are already capped well below full brightness, so
        // they go to the strip untouched.
        let colors = frame.iter().map(|p| RGB8::new(p.r, p.g, p.b));
        self.strip
            .write(colors)
            .map_err(|error| SinkError(format!("spi write: {:?}", error)))
    }
}

/// Keeps the interrupt-bound pins alive; dropping this disarms the buttons.
pub struct Buttons {
    _button_a: InputPin,
    _button_b: InputPin,
}

/// Claim both button pins and bind their interrupts to the shared input
/// state. Each press also wakes the power control so a dozing or suspended
/// control loop notices immediately.
pub fn init_buttons(
    config: &HardwareConfig,
    input: Arc<InputState>,
    power: Arc<HostPower>,
) -> anyhow::Result<Buttons> {
    let gpio = Gpio::new().context("open GPIO controller")?;

    let mut button_a = gpio
        .get(config.button_a_pin)
        .with_context(|| format!("claim button A on GPIO {}", config.button_a_pin))?
        .into_input_pullup();
    let mut button_b = gpio
        .get(config.button_b_pin)
        .with_context(|| format!("claim button B on GPIO {}", config.button_b_pin))?
        .into_input_pullup();

    let (pressed, waker) = (Arc::clone(&input), Arc::clone(&power));
    button_a
        .set_async_interrupt(Trigger::FallingEdge, move |_level| {
            pressed.press(Button::A);
            waker.wake();
        })
        .context("bind button A interrupt")?;

    button_b
        .set_async_interrupt(Trigger::FallingEdge, move |_level| {
            input.press(Button::B);
            power.wake();
        })
        .context("bind button B interrupt")?;

    tracing::info!("buttons armed");
    Ok(Buttons {
        _button_a: button_a,
        _button_b: button_b,
    })
}
