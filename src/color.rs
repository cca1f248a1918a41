use std::ops::{ Add, Mul };

use crate::feq;

/// A color in linear RGB.
///
/// Components conventionally range from 0.0 to 1.0, but nothing clamps
/// them until quantization; shading regularly pushes channels past 1.0
/// when several lights or a strong highlight pile up.
///
/// # Examples
///
/// Scale a color by a shading factor:
///
/// ```
/// # #![allow(unused)]
/// # use whitted_tracer::color::Color;
/// let half_red = Color::rgb(1.0, 0.0, 0.0) * 0.5;
/// assert_eq!(half_red, Color::rgb(0.5, 0.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Partial equality on two colors.
///
/// Similar to the `PartialEq` implementation on `Vector3`, `Color`s are
/// compared component-wise, accounting for possible floating point error
/// in comparisons.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

/// Conversion from a channel list to a `Color`.
///
/// Takes the first `n` elements of a vector, and assigns them to the `r`,
/// `g` and `b` fields of the `Color`, in that order. If there aren't
/// enough elements in the vector (e.g. `n == 2`), fields are assigned
/// defaults in place.
impl From<&Vec<f64>> for Color {
    fn from(v: &Vec<f64>) -> Color {
        match v.len() {
            0 => Default::default(),
            1 => Color { r: v[0], ..Default::default() },
            2 => Color { r: v[0], g: v[1], ..Default::default() },
            _ => Color { r: v[0], g: v[1], b: v[2] }
        }
    }
}

impl Color {
    /// Creates a color with red, green and blue values.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// The color black.
    pub fn black() -> Color {
        Color {
            r: 0.0,
            g: 0.0,
            b: 0.0
        }
    }

    /// The color white.
    pub fn white() -> Color {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0
        }
    }

    /// Quantizes a linear color into 8-bit RGBA channel values.
    ///
    /// Each channel is scaled by 255, clamped to the displayable range and
    /// truncated; out-of-range linear values are clamped, not tone-mapped.
    /// Alpha is always fully opaque.
    pub fn to_rgba(&self) -> [u8; 4] {
        [
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
            255,
        ]
    }
}

fn quantize_channel(channel: f64) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0) as u8
}

/// Adds two colors together.
///
/// Components are added together individually.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, other: Color) -> Self::Output {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

/// Multiplies a color by a scalar.
///
/// Each component is multiplied by the scalar.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, other: f64) -> Self::Output {
        Color {
            r: self.r * other,
            g: self.g * other,
            b: self.b * other,
        }
    }
}

/// Multiplies a scalar by a color.
///
/// Returns a color with each component multiplied by the scalar.
///
/// ```
/// # use whitted_tracer::color::Color;
/// let c = Color::rgb(0.2, 0.4, 0.6);
/// assert_eq!(0.5 * c, c * 0.5);
/// ```
impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, other: Color) -> Self::Output {
        Color {
            r: self * other.r,
            g: self * other.g,
            b: self * other.b,
        }
    }
}

#[test]
fn add_colors() {
    let c1 = Color::rgb(0.9, 0.6, 0.75);
    let c2 = Color::rgb(0.7, 0.1, 0.25);
    let c3 = Color { r: 1.6, g: 0.7, b: 1.0 };

    assert_eq!(c1 + c2, c3);
}

#[test]
fn scale_color() {
    let c1 = Color::rgb(0.2, 0.3, 0.4);
    let c2 = Color { r: 0.4, g: 0.6, b: 0.8 };

    assert_eq!(c1 * 2.0, c2);
}

#[test]
fn quantize_in_range() {
    let c = Color::rgb(0.5, 1.0, 0.0);

    // 0.5 * 255 truncates down to 127.
    assert_eq!(c.to_rgba(), [127, 255, 0, 255]);
}

#[test]
fn quantize_clamps_out_of_range() {
    let c = Color::rgb(1.5, -0.25, 2.0);

    assert_eq!(c.to_rgba(), [255, 0, 255, 255]);
}

#[test]
fn color_from_channel_list() {
    let full = vec![0.2, 0.7, 0.8];
    let short = vec![0.2];

    assert_eq!(Color::from(&full), Color::rgb(0.2, 0.7, 0.8));
    assert_eq!(Color::from(&short), Color::rgb(0.2, 0.0, 0.0));
}
