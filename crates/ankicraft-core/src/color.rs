// Copyright 2025 Fernando Borretti
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

use std::fmt::Display;
use std::fmt::Formatter;

/// An opaque color decoded from hex notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// What malformed color text decodes to.
pub const FALLBACK: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

impl Rgb {
    /// Decode `#rgb` or `#rrggbb` notation.
    ///
    /// Color text comes straight from input controls and may be half-typed,
    /// so anything that is not one of those two forms decodes to opaque white
    /// instead of failing.
    pub fn from_hex(hex: &str) -> Rgb {
        let Some(digits) = hex.strip_prefix('#') else {
            return FALLBACK;
        };
        let digits = digits.as_bytes();
        let channels = match digits.len() {
            3 => [
                short_channel(digits[0]),
                short_channel(digits[1]),
                short_channel(digits[2]),
            ],
            6 => [
                long_channel(digits[0], digits[1]),
                long_channel(digits[2], digits[3]),
                long_channel(digits[4], digits[5]),
            ],
            _ => return FALLBACK,
        };
        match channels {
            [Some(r), Some(g), Some(b)] => Rgb { r, g, b },
            _ => FALLBACK,
        }
    }

    /// Format as an `rgba(...)` color with the given alpha. The alpha is not
    /// clamped.
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    /// Format as `#rrggbb`, the only form a color picker accepts.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Decode a hex color and give it an explicit alpha.
pub fn composite_with_opacity(hex: &str, opacity: f64) -> String {
    Rgb::from_hex(hex).with_alpha(opacity)
}

fn nibble(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

// `#abc` means `#aabbcc`.
fn short_channel(c: u8) -> Option<u8> {
    nibble(c).map(|n| n * 17)
}

fn long_channel(hi: u8, lo: u8) -> Option<u8> {
    Some(nibble(hi)? * 16 + nibble(lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    #[test]
    fn test_decode_full_hex() {
        assert_eq!(Rgb::from_hex("#0a84ff"), rgb(10, 132, 255));
        assert_eq!(Rgb::from_hex("#0b1220"), rgb(11, 18, 32));
        assert_eq!(Rgb::from_hex("#000000"), rgb(0, 0, 0));
        assert_eq!(Rgb::from_hex("#FFF7ED"), rgb(255, 247, 237));
    }

    #[test]
    fn test_decode_shorthand() {
        assert_eq!(Rgb::from_hex("#abc"), rgb(170, 187, 204));
        assert_eq!(Rgb::from_hex("#f00"), rgb(255, 0, 0));
        assert_eq!(Rgb::from_hex("#000"), rgb(0, 0, 0));
    }

    #[test]
    fn test_decode_without_hash_is_white() {
        assert_eq!(Rgb::from_hex(""), FALLBACK);
        assert_eq!(Rgb::from_hex("0a84ff"), FALLBACK);
        assert_eq!(Rgb::from_hex("red"), FALLBACK);
        assert_eq!(Rgb::from_hex("rgba(0,0,0,0.12)"), FALLBACK);
    }

    #[test]
    fn test_decode_half_typed_is_white() {
        assert_eq!(Rgb::from_hex("#"), FALLBACK);
        assert_eq!(Rgb::from_hex("#0a8"), rgb(0, 170, 136));
        assert_eq!(Rgb::from_hex("#0a84"), FALLBACK);
        assert_eq!(Rgb::from_hex("#0a84f"), FALLBACK);
        assert_eq!(Rgb::from_hex("#zzzzzz"), FALLBACK);
        assert_eq!(Rgb::from_hex("#é1234"), FALLBACK);
    }

    #[test]
    fn test_composite_with_opacity() {
        assert_eq!(composite_with_opacity("#0b1220", 0.98), "rgba(11,18,32,0.98)");
        assert_eq!(composite_with_opacity("#ffffff", 1.0), "rgba(255,255,255,1)");
        assert_eq!(composite_with_opacity("#ffffff", 0.5), "rgba(255,255,255,0.5)");
    }

    #[test]
    fn test_composite_does_not_clamp() {
        assert_eq!(composite_with_opacity("#000", 1.5), "rgba(0,0,0,1.5)");
        assert_eq!(composite_with_opacity("bogus", -1.0), "rgba(255,255,255,-1)");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::from_hex("#abc").to_hex(), "#aabbcc");
        assert_eq!(Rgb::from_hex("#0A84FF").to_hex(), "#0a84ff");
        assert_eq!(Rgb::from_hex("#12345").to_hex(), "#ffffff");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::from_hex("#0a84ff").to_string(), "rgb(10,132,255)");
    }
}
