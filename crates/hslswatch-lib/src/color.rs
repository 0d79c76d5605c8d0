//! HSL ↔ RGB conversion.
//!
//! Hue is in degrees, every other component is a fraction in `[0, 1]`.
//! The conversions are total: out-of-range input is not clamped and flows
//! through the arithmetic, NaN propagates as NaN.

use serde::{Deserialize, Serialize};

/// A color in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees.
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Build a normalized value: hue reduced modulo 360, saturation and
    /// lightness clamped to `[0, 1]`.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Hsl {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

/// A normalized RGB color, one fraction per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Rgb { red, green, blue }
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.red, self.green, self.blue)
    }

    /// Format as `#RRGGBB`. Channels are clamped to `[0, 1]` first.
    pub fn to_hex(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }
}

/// Convert HSL to RGB.
///
/// A hue outside `[0, 360)` (or NaN) selects no sector and yields the
/// achromatic offset only.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match hue {
        0.0..60.0 => (c, x, 0.0),
        60.0..120.0 => (x, c, 0.0),
        120.0..180.0 => (0.0, c, x),
        180.0..240.0 => (0.0, x, c),
        240.0..300.0 => (x, 0.0, c),
        300.0..360.0 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    Rgb {
        red: r + m,
        green: g + m,
        blue: b + m,
    }
}

/// Convert RGB to HSL. Hue is rounded to whole degrees.
///
/// When several channels share the maximum, red wins over green and green
/// over blue.
pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> Hsl {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
        };
    }

    let saturation = d / (1.0 - (2.0 * lightness - 1.0).abs());
    let sector = if max == red {
        ((green - blue) / d) % 6.0
    } else if max == green {
        (blue - red) / d + 2.0
    } else if max == blue {
        (red - green) / d + 4.0
    } else {
        f64::NAN
    };

    // Halves round up, toward positive infinity.
    let mut hue = (sector * 60.0 + 0.5).floor();
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsl {
        hue,
        saturation,
        lightness,
    }
}
