//! `key = value` configuration file.
//!
//! Every key is optional. Lines that do not parse are ignored and the
//! built-in default stays in effect. Loading any file disables both network
//! interfaces unless the file names them.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::pixelcolor::raw::RawU16;

/// The five configured colours, as panel-order RGB565 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Volatile values
    pub data: Rgb565,
    /// Host name, addresses, capacities
    pub fixed: Rgb565,
    pub label: Rgb565,
    pub window: Rgb565,
    pub background: Rgb565,
}

impl Palette {
    pub fn from_words(words: [u16; 5]) -> Self {
        let [data, fixed, label, window, background] = words.map(|w| Rgb565::from(RawU16::new(w)));
        Self {
            data,
            fixed,
            label,
            window,
            background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_words([0xFFFF, 0x1CA5, 0x5FCE, 0x8E11, 0x0D00])
    }
}

/// A monitored network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetDevice {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub spi_device: String,
    pub gpio_chip: String,
    pub user_button_pin: u32,
    pub backlight_pin: u32,
    pub reset_pin: u32,
    pub data_pin: u32,
    pub net_devices: [NetDevice; 2],
    /// Empty paths are never probed.
    pub filesystems: [String; 2],
    pub palette: Palette,
    pub update_fs_time: Duration,
    pub sleep_after: Duration,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_device: "/dev/spidev0.0".into(),
            gpio_chip: "/dev/gpiochip0".into(),
            user_button_pin: 20,
            backlight_pin: 18,
            reset_pin: 27,
            data_pin: 25,
            net_devices: [
                NetDevice {
                    name: "eth0".into(),
                    enabled: true,
                },
                NetDevice {
                    name: "wlan0".into(),
                    enabled: false,
                },
            ],
            filesystems: ["/".into(), String::new()],
            palette: Palette::default(),
            update_fs_time: Duration::from_secs(300),
            sleep_after: Duration::from_secs(3600),
            log_file: PathBuf::from("raspi-mon.log"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "reading {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();
        for device in &mut config.net_devices {
            device.enabled = false;
        }
        for line in text.lines() {
            config.apply_line(line);
        }
        config
    }

    fn apply_line(&mut self, line: &str) {
        let Some((key, value)) = line.split_once('=') else {
            return;
        };
        let mut words = value.split_whitespace();
        let Some(first) = words.next() else {
            return;
        };

        match key.trim() {
            "spi_device" => self.spi_device = first.into(),
            "gpio_chip" => self.gpio_chip = first.into(),
            "user_button_pin" => set_number(&mut self.user_button_pin, first),
            "backlight_pin_id" => set_number(&mut self.backlight_pin, first),
            "reset_pin_id" => set_number(&mut self.reset_pin, first),
            "data_pin_id" => set_number(&mut self.data_pin, first),
            "net_device1" => {
                self.net_devices[0] = NetDevice {
                    name: first.into(),
                    enabled: true,
                }
            }
            "net_device2" => {
                self.net_devices[1] = NetDevice {
                    name: first.into(),
                    enabled: true,
                }
            }
            "filesystem1" => self.filesystems[0] = first.into(),
            "filesystem2" => self.filesystems[1] = first.into(),
            "colors" => {
                if let Some(words) = parse_colors(first, words) {
                    self.palette = Palette::from_words(words);
                }
            }
            "update_fs_time" => {
                if let Ok(secs) = first.parse() {
                    self.update_fs_time = Duration::from_secs(secs);
                }
            }
            "sleep_after" => {
                if let Ok(secs) = first.parse() {
                    self.sleep_after = Duration::from_secs(secs);
                }
            }
            "log_file" => self.log_file = PathBuf::from(first),
            _ => {}
        }
    }
}

fn set_number(slot: &mut u32, text: &str) {
    if let Ok(value) = text.parse() {
        *slot = value;
    }
}

/// Five hex words of at most four digits each. Anything after the fifth
/// word is ignored.
fn parse_colors<'a>(first: &'a str, rest: impl Iterator<Item = &'a str>) -> Option<[u16; 5]> {
    let mut words = [0u16; 5];
    let mut count = 0;
    for text in core::iter::once(first).chain(rest).take(words.len()) {
        if text.len() > 4 {
            return None;
        }
        words[count] = u16::from_str_radix(text, 16).ok()?;
        count += 1;
    }
    (count == words.len()).then_some(words)
}
