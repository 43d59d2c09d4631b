//! Named color gradients used to color samples by angle.

use crate::color::Rgb;
use crate::error::{PlotvecError, Result};
use std::str::FromStr;

/// Color gradient mapping a normalized value in `[0, 1]` to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Plasma colormap (perceptually uniform).
    #[default]
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
    /// Twilight colormap (cyclic, so angles 0 and 2π share a color).
    Twilight,
}

impl Colormap {
    /// All known colormaps.
    pub const ALL: [Colormap; 5] = [
        Self::Viridis,
        Self::Plasma,
        Self::Rainbow,
        Self::BlueRed,
        Self::Twilight,
    ];

    /// Look up a colormap by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Self::Viridis),
            "plasma" => Ok(Self::Plasma),
            "rainbow" | "spectral" => Ok(Self::Rainbow),
            "bluered" | "bwr" => Ok(Self::BlueRed),
            "twilight" => Ok(Self::Twilight),
            _ => Err(PlotvecError::UnknownColormap(name.to_string())),
        }
    }

    /// Get colormap name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Rainbow => "rainbow",
            Self::BlueRed => "bluered",
            Self::Twilight => "twilight",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
            Self::Twilight => twilight_color(t),
        }
    }
}

impl FromStr for Colormap {
    type Err = PlotvecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Piecewise linear interpolation between `lo` (t = 0) and `hi` (t = 1).
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    lo + t * (hi - lo)
}

/// Two-segment gradient through `start`, `mid`, `end`.
fn three_stop(start: [f64; 3], mid: [f64; 3], end: [f64; 3], t: f64) -> Rgb {
    let channel = |i: usize| {
        if t < 0.5 {
            lerp(start[i], mid[i], t * 2.0)
        } else {
            lerp(mid[i], end[i], (t - 0.5) * 2.0)
        }
    };
    Rgb(channel(0) as u8, channel(1) as u8, channel(2) as u8)
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Rgb {
    three_stop([68.0, 1.0, 84.0], [33.0, 104.0, 109.0], [253.0, 231.0, 37.0], t)
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Rgb {
    three_stop([13.0, 8.0, 135.0], [180.0, 54.0, 121.0], [240.0, 175.0, 12.0], t)
}

/// Rainbow/Spectral colormap.
fn rainbow_color(t: f64) -> Rgb {
    // HSV to RGB conversion with H varying from 240° (blue) to 0° (red)
    let h = (1.0 - t) * 240.0;
    let c = 1.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else {
        (0.0, x, c)
    };

    Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Rgb {
    if t < 0.5 {
        // Blue to white
        let t2 = t * 2.0;
        Rgb((t2 * 255.0) as u8, (t2 * 255.0) as u8, 255)
    } else {
        // White to red
        let t2 = (t - 0.5) * 2.0;
        Rgb(255, ((1.0 - t2) * 255.0) as u8, ((1.0 - t2) * 255.0) as u8)
    }
}

/// Twilight colormap approximation: light, blue, dark, red, light.
fn twilight_color(t: f64) -> Rgb {
    const STOPS: [[f64; 3]; 5] = [
        [226.0, 217.0, 226.0],
        [94.0, 129.0, 181.0],
        [47.0, 20.0, 54.0],
        [180.0, 90.0, 75.0],
        [226.0, 217.0, 226.0],
    ];
    let scaled = t * (STOPS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(STOPS.len() - 2);
    let frac = scaled - i as f64;
    let channel = |c: usize| lerp(STOPS[i][c], STOPS[i + 1][c], frac) as u8;
    Rgb(channel(0), channel(1), channel(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Colormap::from_name("plasma").unwrap(), Colormap::Plasma);
        assert_eq!(Colormap::from_name("Viridis").unwrap(), Colormap::Viridis);
        assert_eq!(Colormap::from_name("bwr").unwrap(), Colormap::BlueRed);
        for cmap in Colormap::ALL {
            assert_eq!(Colormap::from_name(cmap.name()).unwrap(), cmap);
        }
    }

    #[test]
    fn unknown_name_fails() {
        let err = Colormap::from_name("jet-ish").unwrap_err();
        assert!(matches!(err, PlotvecError::UnknownColormap(ref n) if n == "jet-ish"));
    }

    #[test]
    fn endpoints() {
        assert_eq!(Colormap::Plasma.color(0.0), Rgb(13, 8, 135));
        assert_eq!(Colormap::Plasma.color(1.0), Rgb(240, 175, 12));
        assert_eq!(Colormap::BlueRed.color(0.0), Rgb(0, 0, 255));
        assert_eq!(Colormap::BlueRed.color(1.0), Rgb(255, 0, 0));
        assert_eq!(Colormap::Rainbow.color(0.0), Rgb(0, 0, 255));
        // out-of-range values clamp
        assert_eq!(Colormap::Viridis.color(-3.0), Colormap::Viridis.color(0.0));
    }

    #[test]
    fn twilight_is_cyclic() {
        assert_eq!(Colormap::Twilight.color(0.0), Colormap::Twilight.color(1.0));
    }
}
