//! Screen colors
//!
//! Cells carry an index into a fixed 16-entry foreground palette. The wire
//! format spends one byte per color and the reference renderer never
//! validates it, so indices above 15 are stored verbatim and only wrap
//! against the palette when resolved for display.

use serde::{Deserialize, Serialize};

/// Raw palette index as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Default cell color.
    pub const BLACK: ColorIndex = ColorIndex(0);

    pub const fn new(index: u8) -> Self {
        ColorIndex(index)
    }

    /// The byte as decoded from the stream.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Resolve against the 16-entry palette.
    pub fn named(self) -> NamedColor {
        NamedColor::from_index(self.0)
    }
}

/// The standard 16-color foreground palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl NamedColor {
    /// Resolve a palette index. Indices above 15 wrap around the palette.
    pub fn from_index(index: u8) -> Self {
        match index % 16 {
            0 => NamedColor::Black,
            1 => NamedColor::Red,
            2 => NamedColor::Green,
            3 => NamedColor::Yellow,
            4 => NamedColor::Blue,
            5 => NamedColor::Magenta,
            6 => NamedColor::Cyan,
            7 => NamedColor::White,
            8 => NamedColor::BrightBlack,
            9 => NamedColor::BrightRed,
            10 => NamedColor::BrightGreen,
            11 => NamedColor::BrightYellow,
            12 => NamedColor::BrightBlue,
            13 => NamedColor::BrightMagenta,
            14 => NamedColor::BrightCyan,
            _ => NamedColor::BrightWhite,
        }
    }

    /// Position in the 16-entry palette.
    pub fn to_index(self) -> u8 {
        self as u8
    }
}
