// Copyright 2025 the hexglobe authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hex color parsing and RGB decoding.

use std::fmt;

use crate::error::Error;

/// A decoded RGB triple, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A validated 24-bit color in `#RRGGBB` form.
///
/// Construction goes through [`HexColor::parse`], so a value of this type
/// always holds a 7-character string matching `^#[0-9A-Fa-f]{6}$`. The
/// original text (including its case) is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#RRGGBB` string, accepting upper- or lowercase hex digits.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(text.to_owned()))?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(text.to_owned()));
        }

        Ok(Self(text.to_owned()))
    }

    /// Decode the hex digit pairs into an RGB triple.
    ///
    /// Bits 16-23 are red, 8-15 green, 0-7 blue.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        // The constructor guarantees 6 valid hex digits after '#'.
        let value = u32::from_str_radix(&self.0[1..], 16).unwrap_or(0);
        Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// The original `#RRGGBB` text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
