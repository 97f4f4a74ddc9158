use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color with normalized channels.
///
/// Channels are expected to lie in `[0, 1]`. This is a precondition, not
/// something the type enforces: out-of-range values are stored as given,
/// extrapolated by [`Color::blend`] and wrapped by the packed conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from the three color channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Packs the color as `0xAARRGGBB`.
    pub fn to_int(&self) -> u32 {
        (lane(self.a) << 24) | (lane(self.r) << 16) | (lane(self.g) << 8) | lane(self.b)
    }

    /// Formats the color as a lowercase `#aarrggbb` string.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            lane(self.a),
            lane(self.r),
            lane(self.g),
            lane(self.b)
        )
    }

    pub fn to_float_array4(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The channels repeated once per vertex of an 8-vertex primitive.
    pub fn to_float_array32(&self) -> [f32; 32] {
        let channels = self.to_float_array4();
        let mut out = [0.0; 32];
        for vertex in out.chunks_exact_mut(4) {
            vertex.copy_from_slice(&channels);
        }
        out
    }

    /// Linear interpolation towards `other`, channel by channel.
    ///
    /// `weight` is not clamped, so weights outside `[0, 1]` extrapolate.
    pub fn blend(&self, other: &Color, weight: f32) -> Color {
        let mix = |from: f32, to: f32| from * (1.0 - weight) + to * weight;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

// Out-of-range channels wrap into the low byte.
fn lane(channel: f32) -> u32 {
    ((channel * 255.0).round() as i32 as u32) & 0xFF
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_float_array4()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(r={}, g={}, b={}, a={})", self.r, self.g, self.b, self.a)
    }
}
