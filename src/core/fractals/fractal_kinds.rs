use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    JuliaN,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::JuliaN];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::JuliaN => "Julia (power n)",
        }
    }

    /// Whether the recurrence reads the Julia constant.
    #[must_use]
    pub const fn uses_julia_constant(self) -> bool {
        matches!(self, Self::Julia | Self::JuliaN)
    }

    #[must_use]
    pub const fn uses_exponent(self) -> bool {
        matches!(self, Self::JuliaN)
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
