//! Legend placement.

use crate::error::{PlotvecError, Result};
use std::fmt;
use std::str::FromStr;

/// Where a legend is placed inside its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendLoc {
    /// Corner with the fewest plotted points.
    #[default]
    Best,
    /// Top right corner.
    UpperRight,
    /// Top left corner.
    UpperLeft,
    /// Bottom left corner.
    LowerLeft,
    /// Bottom right corner.
    LowerRight,
    /// Right edge, vertically centered.
    Right,
    /// Left edge, vertically centered.
    CenterLeft,
    /// Right edge, vertically centered.
    CenterRight,
    /// Bottom edge, horizontally centered.
    LowerCenter,
    /// Top edge, horizontally centered.
    UpperCenter,
    /// Middle of the panel.
    Center,
}

impl LegendLoc {
    const NAMES: [(&'static str, LegendLoc); 11] = [
        ("best", Self::Best),
        ("upper right", Self::UpperRight),
        ("upper left", Self::UpperLeft),
        ("lower left", Self::LowerLeft),
        ("lower right", Self::LowerRight),
        ("right", Self::Right),
        ("center left", Self::CenterLeft),
        ("center right", Self::CenterRight),
        ("lower center", Self::LowerCenter),
        ("upper center", Self::UpperCenter),
        ("center", Self::Center),
    ];

    /// Location name.
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, loc)| *loc == self)
            .map(|(name, _)| *name)
            .unwrap_or("best")
    }

    /// Location from its numeric code (0 = best, ..., 10 = center).
    pub fn from_code(code: usize) -> Option<Self> {
        Self::NAMES.get(code).map(|(_, loc)| *loc)
    }

    /// Horizontal and vertical placement as fractions of the free space
    /// (0 = left/bottom, 1 = right/top). `Best` has no fixed placement.
    pub fn anchor(self) -> Option<(f64, f64)> {
        match self {
            Self::Best => None,
            Self::UpperRight => Some((1.0, 1.0)),
            Self::UpperLeft => Some((0.0, 1.0)),
            Self::LowerLeft => Some((0.0, 0.0)),
            Self::LowerRight => Some((1.0, 0.0)),
            Self::Right | Self::CenterRight => Some((1.0, 0.5)),
            Self::CenterLeft => Some((0.0, 0.5)),
            Self::LowerCenter => Some((0.5, 0.0)),
            Self::UpperCenter => Some((0.5, 1.0)),
            Self::Center => Some((0.5, 0.5)),
        }
    }
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts names like `"upper left"` (also `upper-left`, `upper_left`) or
/// numeric codes.
impl FromStr for LegendLoc {
    type Err = PlotvecError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        if let Ok(code) = normalized.parse::<usize>() {
            return Self::from_code(code).ok_or_else(|| PlotvecError::InvalidLegendLoc(s.into()));
        }
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, loc)| *loc)
            .ok_or_else(|| PlotvecError::InvalidLegendLoc(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes() {
        assert_eq!("best".parse::<LegendLoc>().unwrap(), LegendLoc::Best);
        assert_eq!("upper-left".parse::<LegendLoc>().unwrap(), LegendLoc::UpperLeft);
        assert_eq!("Lower Right".parse::<LegendLoc>().unwrap(), LegendLoc::LowerRight);
        assert_eq!("10".parse::<LegendLoc>().unwrap(), LegendLoc::Center);
        assert!("11".parse::<LegendLoc>().is_err());
        assert!("somewhere".parse::<LegendLoc>().is_err());
    }

    #[test]
    fn name_round_trip() {
        for code in 0..11 {
            let loc = LegendLoc::from_code(code).unwrap();
            assert_eq!(loc.name().parse::<LegendLoc>().unwrap(), loc);
        }
    }
}
