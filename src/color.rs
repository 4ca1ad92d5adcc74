//! Scalar to color mapping.
//!
//! Temperatures are swept through hue `[0, 240]` degrees: red below
//! [`MIN_SUPPLY`], then yellow, green, cyan and blue at [`MAX_SUPPLY`] and above.

use cgmath::{vec3, Vector3};

/// Linear RGB, each channel in `[0, 1]`.
pub type Rgb = Vector3<f64>;

/// Value of a cold source.
pub const MIN_SUPPLY: f64 = -10.0;
/// Value of a hot source.
pub const MAX_SUPPLY: f64 = 10.0;
pub const D_SUPPLY: f64 = MAX_SUPPLY - MIN_SUPPLY;

pub const BLACK: Rgb = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};

pub fn color_of(value: f64) -> Rgb {
    let hue = ((value - MIN_SUPPLY) / D_SUPPLY) * 240.0;

    if hue < 0.0 {
        vec3(1.0, 0.0, 0.0)
    } else if hue < 60.0 {
        vec3(1.0, hue / 60.0, 0.0)
    } else if hue < 120.0 {
        vec3((120.0 - hue) / 60.0, 1.0, 0.0)
    } else if hue < 180.0 {
        vec3(0.0, 1.0, (hue - 120.0) / 60.0)
    } else if hue < 240.0 {
        vec3(0.0, (240.0 - hue) / 60.0, 1.0)
    } else {
        // also NaN
        vec3(0.0, 0.0, 1.0)
    }
}

/// Quantize to 8 bits per channel.
pub fn to_rgb8(c: Rgb) -> [u8; 3] {
    let q = |v: f64| (v * 255.0).round().max(0.0).min(255.0) as u8;
    [q(c.x), q(c.y), q(c.z)]
}
