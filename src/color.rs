//! Colors, the cyclic property palette, and color specifications.

use crate::error::{PlotvecError, Result};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black, used for reference lines.
    pub const BLACK: Self = Self(0, 0, 0);

    /// Linearly blend `self` over `background` with opacity `alpha`.
    pub fn blend(self, background: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f64 * alpha + bg as f64 * (1.0 - alpha)).round() as u8;
        Rgb(
            mix(self.0, background.0),
            mix(self.1, background.1),
            mix(self.2, background.2),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.0, c.1, c.2)
    }
}

/// The ten-color cycle addressed as `C0`..`C9`.
pub const CYCLE: [Rgb; 10] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0x17, 0xbe, 0xcf),
];

/// A color as given by a caller: a cycle index or a concrete RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Entry `n mod 10` of the color cycle.
    Cycle(usize),
    /// A concrete color.
    Rgb(Rgb),
}

impl ColorSpec {
    /// Resolve to a concrete color.
    pub fn rgb(self) -> Rgb {
        match self {
            Self::Cycle(n) => CYCLE[n % CYCLE.len()],
            Self::Rgb(c) => c,
        }
    }
}

impl From<Rgb> for ColorSpec {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle(n) => write!(f, "C{}", n),
            Self::Rgb(c) => write!(f, "{}", c),
        }
    }
}

/// Parses `C<n>`, `#rrggbb`, or one of a few basic color names.
impl FromStr for ColorSpec {
    type Err = PlotvecError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || PlotvecError::InvalidColor(s.to_string());

        if let Some(index) = s.strip_prefix('C') {
            return index.parse().map(Self::Cycle).map_err(|_| invalid());
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Self::Rgb(Rgb(channel(0)?, channel(2)?, channel(4)?)));
        }

        let rgb = match s.to_ascii_lowercase().as_str() {
            "k" | "black" => Rgb(0, 0, 0),
            "w" | "white" => Rgb(255, 255, 255),
            "r" | "red" => Rgb(255, 0, 0),
            "g" | "green" => Rgb(0, 128, 0),
            "b" | "blue" => Rgb(0, 0, 255),
            "c" | "cyan" => Rgb(0, 191, 191),
            "m" | "magenta" => Rgb(191, 0, 191),
            "y" | "yellow" => Rgb(191, 191, 0),
            "orange" => Rgb(255, 165, 0),
            "purple" => Rgb(128, 0, 128),
            "gray" | "grey" => Rgb(128, 128, 128),
            _ => return Err(invalid()),
        };
        Ok(Self::Rgb(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_around() {
        assert_eq!(ColorSpec::Cycle(0).rgb(), CYCLE[0]);
        assert_eq!(ColorSpec::Cycle(13).rgb(), CYCLE[3]);
    }

    #[test]
    fn parses_specs() {
        assert_eq!("C4".parse::<ColorSpec>().unwrap(), ColorSpec::Cycle(4));
        assert_eq!(
            "#ff8000".parse::<ColorSpec>().unwrap(),
            ColorSpec::Rgb(Rgb(255, 128, 0))
        );
        assert_eq!("k".parse::<ColorSpec>().unwrap(), ColorSpec::Rgb(Rgb::BLACK));
        assert!("#ff80".parse::<ColorSpec>().is_err());
        assert!("chartreuse-ish".parse::<ColorSpec>().is_err());
        assert!("Cx".parse::<ColorSpec>().is_err());
    }

    #[test]
    fn blend_toward_background() {
        let white = Rgb(255, 255, 255);
        assert_eq!(Rgb::BLACK.blend(white, 1.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.blend(white, 0.0), white);
        assert_eq!(Rgb::BLACK.blend(white, 0.5), Rgb(128, 128, 128));
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(CYCLE[0].to_string(), "#1f77b4");
        assert_eq!(ColorSpec::Cycle(2).to_string(), "C2");
    }
}
