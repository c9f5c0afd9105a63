//! Screen geometry for the 320x240 landscape layout.
//!
//! Every volatile value on screen lives in a [`Region`] one glyph high and a
//! fixed number of glyphs wide. Regions are compile-time constants; the
//! addressing-window parameter bytes are derived from them on demand.

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};

pub const SCREEN_WIDTH: u16 = 320;
pub const SCREEN_HEIGHT: u16 = 240;

/// Number of whole glyphs that fit on one screen line.
pub const MAX_CHARS_IN_LINE: u16 = SCREEN_WIDTH / GLYPH_WIDTH as u16;

const GW: u16 = GLYPH_WIDTH as u16;
const GH: u16 = GLYPH_HEIGHT as u16;

/// A rectangle of display memory. `x2`/`y2` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
    /// Field capacity in glyphs
    pub len: u16,
}

impl Region {
    /// A one-line text region of `len` glyphs starting at (`x`, `y`).
    pub const fn text(x: u16, y: u16, len: u16) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + len * GW,
            y2: y + GH,
            len,
        }
    }

    pub const fn full_screen() -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: SCREEN_WIDTH,
            y2: SCREEN_HEIGHT,
            len: MAX_CHARS_IN_LINE,
        }
    }

    pub const fn width(&self) -> u16 {
        self.x2 - self.x1
    }

    pub const fn height(&self) -> u16 {
        self.y2 - self.y1
    }

    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Column Address Set parameters.
    pub const fn column_window(&self) -> [u8; 4] {
        encode_window(self.x1, self.x2)
    }

    /// Row Address Set parameters.
    pub const fn row_window(&self) -> [u8; 4] {
        encode_window(self.y1, self.y2)
    }
}

/// Encode a start/exclusive-end pair as the controller's big-endian
/// inclusive window. The high byte of the end is taken from the exclusive
/// value and the low byte from `end - 1`, so an end on a multiple of 256
/// is not representable.
pub const fn encode_window(start: u16, end: u16) -> [u8; 4] {
    [
        (start >> 8) as u8,
        (start & 0xFF) as u8,
        (end >> 8) as u8,
        (end.wrapping_sub(1) & 0xFF) as u8,
    ]
}

/// Volatile on-screen values, refreshed by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Clock,
    Net1Rx,
    Net1Tx,
    Net2Rx,
    Net2Tx,
    Cpu,
    Ram,
    Temperature,
    Uptime,
    Fs1,
    Fs2,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Clock,
        Field::Net1Rx,
        Field::Net1Tx,
        Field::Net2Rx,
        Field::Net2Tx,
        Field::Cpu,
        Field::Ram,
        Field::Temperature,
        Field::Uptime,
        Field::Fs1,
        Field::Fs2,
    ];

    pub const fn region(self) -> Region {
        match self {
            Field::Clock => Region::text(58, 38, 19),
            Field::Net1Rx => Region::text(126, NET1_LABEL_Y, NET_DATA_LEN),
            Field::Net1Tx => Region::text(232, NET1_LABEL_Y, NET_DATA_LEN),
            Field::Net2Rx => Region::text(126, NET2_LABEL_Y, NET_DATA_LEN),
            Field::Net2Tx => Region::text(232, NET2_LABEL_Y, NET_DATA_LEN),
            Field::Cpu => Region::text(65, CPU_Y, 4),
            Field::Ram => Region::text(65, RAM_Y, 4),
            Field::Temperature => Region::text(76, TEMP_Y, 2),
            Field::Uptime => Region::text(188, UPTIME_Y, 10),
            Field::Fs1 => Region::text(254, FS1_Y, 4),
            Field::Fs2 => Region::text(254, FS2_Y, 4),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

const NET_DATA_LEN: u16 = 4;

pub const NAME_Y: u16 = 16;

pub const NET1_LABEL_Y: u16 = 69;
pub const NET1_DATA_Y: u16 = 91;
pub const NET2_LABEL_Y: u16 = 113;
pub const NET2_DATA_Y: u16 = 135;
pub const NET_LABEL_X: u16 = 22;
pub const NET_RX_LABEL_X: u16 = 170;
pub const NET_TX_LABEL_X: u16 = 276;

pub const CPU_Y: u16 = 166;
pub const RAM_Y: u16 = 188;
pub const TEMP_Y: u16 = 210;
pub const UPTIME_Y: u16 = 166;
pub const FS1_Y: u16 = 188;
pub const FS2_Y: u16 = 210;

pub const LEFT_LABEL_X: u16 = 22;
pub const RIGHT_LABEL_X: u16 = 140;
pub const DEGREE_X: u16 = 99;
pub const FS_CAPACITY_X: u16 = 187;

/// A fixed label drawn once by the static layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub x: u16,
    pub y: u16,
    pub text: &'static str,
}

pub const LABELS: [Label; 6] = [
    Label { x: LEFT_LABEL_X, y: CPU_Y, text: "CPU" },
    Label { x: LEFT_LABEL_X, y: RAM_Y, text: "RAM" },
    Label { x: LEFT_LABEL_X, y: TEMP_Y, text: "Temp" },
    Label { x: RIGHT_LABEL_X, y: UPTIME_Y, text: "UpT" },
    Label { x: RIGHT_LABEL_X, y: FS1_Y, text: "FS1" },
    Label { x: RIGHT_LABEL_X, y: FS2_Y, text: "FS2" },
];

/// Window rectangle outline as (x, y, width, height).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub const FRAMES: [Frame; 4] = [
    Frame { x: 10, y: 11, w: 300, h: 46 },
    Frame { x: 10, y: 64, w: 300, h: 90 },
    Frame { x: 10, y: 161, w: 111, h: 68 },
    Frame { x: 128, y: 161, w: 182, h: 68 },
];

/// Left edge that centres `text_width` pixels on a screen line.
pub const fn centered_x(text_width: u16) -> u16 {
    let line = GW * MAX_CHARS_IN_LINE;
    (line / 2).saturating_sub(text_width / 2)
}
