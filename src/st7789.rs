use core::fmt;

use embedded_hal::digital::OutputPin;
#[cfg(not(feature = "async"))]
use embedded_hal::spi::SpiDevice;
#[cfg(feature = "async")]
use embedded_hal_async::spi::SpiDevice;

use crate::layout::{Region, encode_window};

/// Largest single bus transfer accepted by the SPI device.
pub const MAX_TRANSFER: usize = 4096;
/// Size of the scratch buffer handed to [`ST7789::new`].
pub const BUF_SIZE: usize = MAX_TRANSFER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Sleep Out (11h) - Exit low-power mode
    SleepOut = 0x11,
    /// Display Inversion On (21h)
    DisplayInversionOn = 0x21,
    /// Display On (29h) - Enable panel output
    DisplayOn = 0x29,
    /// Column Address Set (2Ah) - Horizontal addressing bounds
    ColumnAddressSet = 0x2A,
    /// Row Address Set (2Bh) - Vertical addressing bounds
    RowAddressSet = 0x2B,
    /// Memory Write (2Ch) - Write to memory
    MemoryWrite = 0x2C,

    /// Memory Data Access Control (36h) - GRAM orientation/order
    MemoryAccessControl = 0x36,
    /// Interface Pixel Format (3Ah) - Color depth configuration
    PixelFormatSet = 0x3A,

    /// Porch Setting (B2h)
    PorchControl = 0xB2,
    /// Gate Control (B7h) - VGH/VGL levels
    GateControl = 0xB7,
    /// VCOMS Setting (BBh)
    VcomsSetting = 0xBB,

    /// LCM Control (C0h)
    LcmControl = 0xC0,
    /// VDV and VRH Command Enable (C2h)
    VdvVrhEnable = 0xC2,
    /// VRH Set (C3h)
    VrhSet = 0xC3,
    /// VDV Set (C4h)
    VdvSet = 0xC4,
    /// Frame Rate Control in Normal Mode (C6h)
    FrameRateControl2 = 0xC6,

    /// Power Control 1 (D0h)
    PowerControl1 = 0xD0,

    /// Positive Voltage Gamma Control (E0h)
    PositiveGamma = 0xE0,
    /// Negative Voltage Gamma Control (E1h)
    NegativeGamma = 0xE1,
}

/// Memory Data Access Control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// MY | MV, 320 columns by 240 rows
    LandscapeSwapped = 0xA0,
}

/// Power-on register programming, applied in order after the hardware reset.
/// The orientation register is written last from [`Config::orientation`].
pub const INIT_SEQUENCE: &[(Instruction, &[u8])] = &[
    (Instruction::SleepOut, &[]),
    // RGB565
    (Instruction::PixelFormatSet, &[0x05]),
    (Instruction::PorchControl, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    (Instruction::GateControl, &[0x35]),
    (Instruction::VcomsSetting, &[0x19]),
    (Instruction::LcmControl, &[0x2C]),
    (Instruction::VdvVrhEnable, &[0x01, 0xFF]),
    (Instruction::VrhSet, &[0x12]),
    (Instruction::VdvSet, &[0x20]),
    // 60 Hz
    (Instruction::FrameRateControl2, &[0x0F]),
    (Instruction::PowerControl1, &[0xA4, 0xA1]),
    (
        Instruction::PositiveGamma,
        &[
            0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
        ],
    ),
    (
        Instruction::NegativeGamma,
        &[
            0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
        ],
    ),
    (Instruction::DisplayInversionOn, &[0x0E]),
    (Instruction::DisplayOn, &[0x00]),
];

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub orientation: Orientation,
    /// Time the reset line is held low, then high, in milliseconds
    pub reset_hold_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::LandscapeSwapped,
            reset_hold_ms: 120,
        }
    }
}

#[derive(Debug)]
pub enum Error<SpiE = (), PinE = ()> {
    /// Communication error
    Comm(SpiE),
    /// Pin setting error
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Comm(e) => write!(f, "SPI transfer failed: {:?}", e),
            Error::Pin(e) => write!(f, "GPIO line update failed: {:?}", e),
        }
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> std::error::Error for Error<SpiE, PinE> {}

pub struct ST7789<'b, SPI, DC, RST, TIMER>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    TIMER: Timer,
{
    spi: SPI,
    dc: DC,
    rst: RST,
    config: Config,
    buffer: &'b mut [u8],
    _timer: core::marker::PhantomData<TIMER>,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "ST7789",),
    async(feature = "async", keep_self)
)]
impl<'b, SPI, DC, RST, E, PE, TIMER> ST7789<'b, SPI, DC, RST, TIMER>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin<Error = PE>,
    RST: OutputPin<Error = PE>,
    TIMER: Timer,
{
    /// `buffer` stages pixel data for each bus transfer; transfers are
    /// capped at its length and at [`MAX_TRANSFER`]. It must hold at least
    /// one pixel (two bytes).
    ///
    /// # Panics
    ///
    /// If `buffer` is shorter than two bytes.
    pub fn new(config: Config, spi: SPI, dc: DC, rst: RST, buffer: &'b mut [u8]) -> Self {
        assert!(buffer.len() >= 2, "pixel buffer must hold at least one pixel");
        Self {
            spi,
            dc,
            rst,
            config,
            buffer,
            _timer: core::marker::PhantomData,
        }
    }

    /// Hardware reset followed by the power-on sequence. Stops at the first
    /// failing step.
    pub async fn init(&mut self) -> Result<(), Error<E, PE>> {
        self.reset().await?;

        for (instruction, params) in INIT_SEQUENCE {
            if let Err(e) = self.write_command(*instruction, params).await {
                log::error!("panel init step {:?} failed", instruction);
                return Err(e);
            }
        }

        self.set_orientation(self.config.orientation).await?;
        log::debug!("panel initialized, orientation {:?}", self.config.orientation);
        Ok(())
    }

    pub async fn reset(&mut self) -> Result<(), Error<E, PE>> {
        self.rst.set_low().map_err(Error::Pin)?;
        TIMER::delay_ms(self.config.reset_hold_ms).await;
        self.rst.set_high().map_err(Error::Pin)?;
        TIMER::delay_ms(self.config.reset_hold_ms).await;

        Ok(())
    }

    pub async fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<E, PE>> {
        self.write_command(Instruction::MemoryAccessControl, &[orientation as u8])
            .await?;
        self.config.orientation = orientation;
        Ok(())
    }

    /// Write command with optional parameters
    async fn write_command(&mut self, cmd: Instruction, params: &[u8]) -> Result<(), Error<E, PE>> {
        // Set DC low for command
        self.dc.set_low().map_err(Error::Pin)?;
        self.spi.write(&[cmd as u8]).await.map_err(Error::Comm)?;

        // Write parameters if any
        if !params.is_empty() {
            self.dc.set_high().map_err(Error::Pin)?;
            self.spi.write(params).await.map_err(Error::Comm)?;
        }
        Ok(())
    }

    /// Sets the addressing window to columns `x1..x2` and rows `y1..y2`
    /// (end exclusive).
    pub async fn set_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Result<(), Error<E, PE>> {
        self.write_command(Instruction::ColumnAddressSet, &encode_window(x1, x2))
            .await?;
        self.write_command(Instruction::RowAddressSet, &encode_window(y1, y2))
            .await
    }

    /// Issue Memory Write and stream `pixels` in transfers of at most
    /// [`MAX_TRANSFER`] bytes, each word low byte first.
    pub async fn write_pixels(&mut self, pixels: &[u16]) -> Result<(), Error<E, PE>> {
        self.write_command(Instruction::MemoryWrite, &[]).await?;
        self.dc.set_high().map_err(Error::Pin)?;

        let chunk_pixels = self.buffer.len().min(MAX_TRANSFER) / 2;
        for chunk in pixels.chunks(chunk_pixels) {
            for (bytes, pixel) in self.buffer.chunks_exact_mut(2).zip(chunk) {
                bytes.copy_from_slice(&pixel.to_le_bytes());
            }
            self.spi
                .write(&self.buffer[..chunk.len() * 2])
                .await
                .map_err(Error::Comm)?;
        }
        Ok(())
    }

    /// Window plus pixel stream for one region.
    pub async fn draw_region(&mut self, region: Region, pixels: &[u16]) -> Result<(), Error<E, PE>> {
        self.set_window(region.x1, region.y1, region.x2, region.y2)
            .await?;
        self.write_pixels(pixels).await
    }

    /// Give the bus and control lines back so they can be closed.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Timer",),
    async(feature = "async", keep_self)
)]
/// Simplified timer trait for delay operations.
pub trait Timer {
    /// Delay for the specified number of milliseconds.
    async fn delay_ms(milliseconds: u64);
}

/// Blocking delay on the calling thread.
#[cfg(not(feature = "async"))]
pub struct ThreadTimer;

#[cfg(not(feature = "async"))]
impl Timer for ThreadTimer {
    fn delay_ms(milliseconds: u64) {
        std::thread::sleep(std::time::Duration::from_millis(milliseconds));
    }
}
