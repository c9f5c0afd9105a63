//! Host telemetry monitor for a 320x240 ST7789 panel on a Raspberry Pi.
//!
//! The panel driver in [`st7789`] is generic over `embedded-hal` and builds
//! either blocking or, with the `async` feature, against
//! `embedded-hal-async`. Everything above it ([`monitor`], [`input`]) runs
//! on the blocking driver.

pub mod cadence;
pub mod config;
pub mod font;
pub mod format;
pub mod framebuffer;
#[cfg(all(target_os = "linux", not(feature = "async")))]
pub mod hardware;
pub mod input;
pub mod layout;
pub mod logger;
pub mod monitor;
pub mod power;
pub mod st7789;
pub mod telemetry;
