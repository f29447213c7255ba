//! RGB colors, HSL conversion and color interpolation.
//!
//! Colors are stored as 8-bit RGB triples. HSL values use the unit range for
//! all three components, hue included (`0.0..1.0` covers the whole wheel).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PixeditError, Result};

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Pure black.
pub const BLACK: Color = Color::new(0, 0, 0);
/// Mid gray.
pub const GRAY: Color = Color::new(127, 127, 127);
/// Pure white, the background of every new canvas.
pub const WHITE: Color = Color::new(255, 255, 255);
/// Pure red.
pub const RED: Color = Color::new(255, 0, 0);
/// Pure yellow.
pub const YELLOW: Color = Color::new(255, 255, 0);
/// Pure green.
pub const GREEN: Color = Color::new(0, 255, 0);
/// Pure cyan.
pub const CYAN: Color = Color::new(0, 255, 255);
/// Pure blue.
pub const BLUE: Color = Color::new(0, 0, 255);
/// Pure magenta.
pub const MAGENTA: Color = Color::new(255, 0, 255);

/// A color in hue/saturation/lightness space, every component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue, wrapping around at 1.0.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Color {
    /// Creates a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from wide channel values, rejecting anything outside
    /// `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first out-of-range channel.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                PixeditError::validation(format!("{name} channel out of range: {value}"))
            })
        };
        Ok(Self::new(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Parses a `#rrggbb` (or `0xrrggbb`, or bare `rrggbb`) hex string.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PixeditError::validation(format!(
                "invalid hex color: {hex}"
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| PixeditError::validation(format!("invalid hex color {hex}: {e}")))?;
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Self::new(r, g, b))
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the channels as a tuple.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Converts the color to hue/saturation/lightness.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (min + max) / 2.0;
        #[allow(clippy::float_cmp)]
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let span = max - min;
        let s = if l <= 0.5 {
            span / (max + min)
        } else {
            span / (2.0 - max - min)
        };
        let rc = (max - r) / span;
        let gc = (max - g) / span;
        let bc = (max - b) / span;
        #[allow(clippy::float_cmp)]
        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        Hsl {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            l,
        }
    }

    /// Builds a color from hue/saturation/lightness, rounding each channel.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;
        if s <= 0.0 {
            let v = unit_to_channel(l);
            return Self::new(v, v, v);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Self::new(
            unit_to_channel(hue_to_unit(m1, m2, h + 1.0 / 3.0)),
            unit_to_channel(hue_to_unit(m1, m2, h)),
            unit_to_channel(hue_to_unit(m1, m2, h - 1.0 / 3.0)),
        )
    }

    /// Adds signed offsets to each channel, saturating at the channel bounds.
    #[must_use]
    pub fn add_rgb(&self, red: i32, green: i32, blue: i32) -> Self {
        let shift = |channel: u8, delta: i32| {
            let shifted = (i32::from(channel) + delta).clamp(0, 255);
            u8::try_from(shifted).unwrap_or(u8::MAX)
        };
        Self::new(shift(self.r, red), shift(self.g, green), shift(self.b, blue))
    }

    /// Shifts the color in HSL space. Hue wraps around; saturation and
    /// lightness saturate at `[0, 1]`.
    #[must_use]
    pub fn add_hsl(&self, hue: f64, saturation: f64, lightness: f64) -> Self {
        let hsl = self.hsl();
        Self::from_hsl(Hsl {
            h: wrap_unit(hsl.h + hue),
            s: (hsl.s + saturation).clamp(0.0, 1.0),
            l: (hsl.l + lightness).clamp(0.0, 1.0),
        })
    }
}

impl Hsl {
    /// Interpolates between two HSL colors.
    ///
    /// Saturation and lightness move linearly; hue follows the shorter arc
    /// around the color wheel and is wrapped back into `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `t` is outside `[0, 1]`.
    pub fn lerp(from: Self, to: Self, t: f64) -> Result<Self> {
        check_t(t)?;
        let mut dh = to.h - from.h;
        if dh > 0.5 {
            dh -= 1.0;
        } else if dh < -0.5 {
            dh += 1.0;
        }
        Ok(Self {
            h: wrap_unit(from.h + dh * t),
            s: from.s + (to.s - from.s) * t,
            l: from.l + (to.l - from.l) * t,
        })
    }
}

/// Interpolates two colors channel by channel in RGB space.
///
/// # Errors
///
/// Returns a validation error if `t` is outside `[0, 1]`.
pub fn lerp_rgb(from: Color, to: Color, t: f64) -> Result<Color> {
    check_t(t)?;
    let mix = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        unit_to_channel((a + (b - a) * t) / 255.0)
    };
    Ok(Color::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b)))
}

/// Interpolates two colors in HSL space, taking the shorter way around the
/// hue wheel.
///
/// # Errors
///
/// Returns a validation error if `t` is outside `[0, 1]`.
pub fn lerp_hsl(from: Color, to: Color, t: f64) -> Result<Color> {
    Hsl::lerp(from.hsl(), to.hsl(), t).map(Color::from_hsl)
}

fn check_t(t: f64) -> Result<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(PixeditError::validation(format!(
            "interpolation parameter out of range: {t}"
        )))
    }
}

fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn hue_to_unit(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl TryFrom<String> for Color {
    type Error = PixeditError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}
