/// An 8-bit RGBA pixel as written to a [`PixelBuffer`](crate::core::data::pixel_buffer::PixelBuffer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Unclamped colour produced by a colour map.
///
/// Channels may fall outside `[0, 255]` at extreme contrast or brightness settings.
/// `a` is `None` unless the colour map supplies its own alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl ColourSample {
    #[must_use]
    pub const fn grey(value: f64) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
            a: None,
        }
    }
}

impl Colour {
    pub const OPAQUE: u8 = u8::MAX;

    /// Clamps each channel to `[0, 255]`, rounding half to even. NaN becomes 0.
    #[must_use]
    pub fn from_sample(sample: ColourSample) -> Self {
        Self {
            r: clamp_channel(sample.r),
            g: clamp_channel(sample.g),
            b: clamp_channel(sample.b),
            a: sample.a.map_or(Self::OPAQUE, clamp_channel),
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 255.0).round_ties_even() as u8
}
