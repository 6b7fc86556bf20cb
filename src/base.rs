//! Base symbols and the fixed base to color table.
//!
//! Genotype characters outside of ACGT (no-calls, indels, malformed data) are
//! not an error for rendering purposes, callers that do not want to handle
//! [`BaseError`] use [`color_or_fallback`] which maps them to
//! [`NO_CALL_COLOR`].
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Character used when a genotype is missing an allele.
pub const NO_CALL: char = '-';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BaseError {
    #[error("Unknown base symbol {0:?}, expected one of A, C, G, T")]
    UnknownBaseSymbol(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    C,
    G,
}

impl Base {
    pub fn from_symbol(symbol: char) -> Result<Self, BaseError> {
        match symbol {
            'A' => Ok(Base::A),
            'T' => Ok(Base::T),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            _ => Err(BaseError::UnknownBaseSymbol(symbol)),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::C => 'C',
            Base::G => 'G',
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Base::A => RED,
            Base::T => BLUE,
            Base::C => GREEN,
            Base::G => YELLOW,
        }
    }
}

/// 8-bit RGB color, serialized as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
pub const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
pub const YELLOW: Rgb = Rgb::new(0xFF, 0xFF, 0x00);

/// Neutral gray used for anything that is not one of the four bases.
pub const NO_CALL_COLOR: Rgb = Rgb::new(0x80, 0x80, 0x80);

/// Legend order used by renderers.
pub const COLOR_TABLE: [(Base, Rgb); 4] = [
    (Base::A, RED),
    (Base::T, BLUE),
    (Base::C, GREEN),
    (Base::G, YELLOW),
];

pub fn color_for_base(symbol: char) -> Result<Rgb, BaseError> {
    Base::from_symbol(symbol).map(|b| b.color())
}

/// Like [`color_for_base`] but recovers from unknown symbols with
/// [`NO_CALL_COLOR`].
pub fn color_or_fallback(symbol: char) -> Rgb {
    match color_for_base(symbol) {
        Ok(color) => color,
        Err(e) => {
            log::debug!("{e}, using fallback color");
            NO_CALL_COLOR
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_color_table() {
        assert_eq!(color_for_base('A'), Ok(RED));
        assert_eq!(color_for_base('T'), Ok(BLUE));
        assert_eq!(color_for_base('C'), Ok(GREEN));
        assert_eq!(color_for_base('G'), Ok(YELLOW));
        for (base, color) in COLOR_TABLE {
            assert_eq!(color_for_base(base.symbol()), Ok(color));
        }
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in ['-', '0', 'I', 'D', 'a', 'N', ' '] {
            assert_eq!(
                color_for_base(symbol),
                Err(BaseError::UnknownBaseSymbol(symbol)),
                "{symbol:?}"
            );
            assert_eq!(color_or_fallback(symbol), NO_CALL_COLOR, "{symbol:?}");
        }
        assert_eq!(color_or_fallback('G'), YELLOW);
    }

    #[test]
    fn test_hex() {
        assert_eq!(RED.hex(), "#FF0000");
        assert_eq!(YELLOW.to_string(), "#FFFF00");
        assert_eq!(NO_CALL_COLOR.hex(), "#808080");
        assert_eq!(serde_json::to_string(&BLUE).unwrap(), "\"#0000FF\"");
    }
}
