use std::fmt;
use std::str::FromStr;

use crate::error::{MeshTagError, OperationError};

/// RGB colour with channels in `[0, 1]`, used to paint tagged faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Creates a colour, clamping each channel to `[0, 1]`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Decodes a packed `0xRRGGBB` value. Bits above the low 24 are ignored.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xff) / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Packs the colour into `0xRRGGBB`, rounding each channel to the nearest byte.
    #[must_use]
    pub fn to_hex(&self) -> u32 {
        (to_byte(self.r) << 16) | (to_byte(self.g) << 8) | to_byte(self.b)
    }

    /// Parses an `RRGGBB` string (no leading `#`).
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the string is not exactly six
    /// hexadecimal digits.
    pub fn from_html(html: &str) -> Result<Self, OperationError> {
        if html.len() != 6 || !html.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OperationError::InvalidInput(format!(
                "{html:?} is not in RRGGBB format"
            )));
        }
        u32::from_str_radix(html, 16)
            .map(Self::from_hex)
            .map_err(|e| OperationError::InvalidInput(format!("{html:?}: {e}")))
    }

    /// Formats the colour as a lowercase `rrggbb` string.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("{:06x}", self.to_hex())
    }
}

impl Default for Colour {
    /// Navy, the colour new face tags are painted with.
    fn default() -> Self {
        Self::from_hex(0x00_0080)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_html())
    }
}

impl FromStr for Colour {
    type Err = MeshTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self::from_html(s)?)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(channel: f64) -> u32 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u32
}
