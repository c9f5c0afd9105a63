//! Bus and GPIO handles on a Linux host.

use anyhow::{Context, Result};
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions};
use linux_embedded_hal::{CdevPin, SpidevDevice};

use crate::config::Config;
use crate::st7789::{ST7789, ThreadTimer};

pub const SPI_SPEED_HZ: u32 = 32_000_000;
const CONSUMER: &str = "raspi-mon";

pub type Panel<'b> = ST7789<'b, SpidevDevice, CdevPin, CdevPin, ThreadTimer>;

/// The four GPIO lines the monitor drives or reads.
pub struct Lines {
    /// Active-low user button
    pub button: CdevPin,
    pub backlight: CdevPin,
    pub reset: CdevPin,
    /// Data/command select
    pub data: CdevPin,
}

pub fn open_spi(path: &str) -> Result<SpidevDevice> {
    let mut spi = Spidev::open(path).with_context(|| format!("opening SPI device {}", path))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(SPI_SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options)
        .with_context(|| format!("configuring SPI device {}", path))?;
    Ok(SpidevDevice(spi))
}

/// Request every line from the configured chip. Outputs start high, so the
/// backlight is on and the panel is out of reset.
pub fn open_lines(config: &Config) -> Result<Lines> {
    let mut chip = Chip::new(&config.gpio_chip)
        .with_context(|| format!("opening GPIO chip {}", config.gpio_chip))?;

    let button = request(&mut chip, config.user_button_pin, LineRequestFlags::INPUT, 0, "user button")?;
    let backlight = request(&mut chip, config.backlight_pin, LineRequestFlags::OUTPUT, 1, "backlight")?;
    let reset = request(&mut chip, config.reset_pin, LineRequestFlags::OUTPUT, 1, "reset")?;
    let data = request(&mut chip, config.data_pin, LineRequestFlags::OUTPUT, 1, "data")?;

    Ok(Lines {
        button,
        backlight,
        reset,
        data,
    })
}

fn request(chip: &mut Chip, offset: u32, flags: LineRequestFlags, default: u8, what: &str) -> Result<CdevPin> {
    let handle = chip
        .get_line(offset)
        .and_then(|line| line.request(flags, default, CONSUMER))
        .with_context(|| format!("requesting {} line {}", what, offset))?;
    CdevPin::new(handle).with_context(|| format!("wrapping {} line {}", what, offset))
}
