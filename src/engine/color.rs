//! Display colors keyed to moneyness

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::Moneyness;

/// An opaque sRGB color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    /// Deep ITM
    pub const VIOLET: DisplayColor = DisplayColor::rgb(0x7a, 0x46, 0xff);
    /// ITM
    pub const BLUE: DisplayColor = DisplayColor::rgb(0x44, 0x76, 0xff);
    /// ATM
    pub const AMBER: DisplayColor = DisplayColor::rgb(0xf5, 0xca, 0x27);
    /// OTM
    pub const GRAY: DisplayColor = DisplayColor::rgb(0xcc, 0xcc, 0xcc);

    /// Payoff curve stroke
    pub const PAYOFF_LINE: DisplayColor = DisplayColor::rgb(0x63, 0x66, 0xf1);
    /// Highlighted spot marker
    pub const SPOT_MARKER: DisplayColor = DisplayColor::rgb(0xea, 0x79, 0x2d);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for DisplayColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Accent color for a moneyness class
pub fn color_for(moneyness: Moneyness) -> DisplayColor {
    match moneyness {
        Moneyness::DeepItm => DisplayColor::VIOLET,
        Moneyness::Itm => DisplayColor::BLUE,
        Moneyness::Atm => DisplayColor::AMBER,
        Moneyness::Otm => DisplayColor::GRAY,
    }
}
