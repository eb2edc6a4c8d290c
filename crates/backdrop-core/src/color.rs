//! Colors with a separate opacity channel.

/// Primary brand blue, used for particles, dots and half of the waves.
pub const PRIMARY_BLUE: Rgba = Rgba::rgb(0, 161, 255);

/// Cyan accent, used for link lines and the other half of the waves.
pub const CYAN: Rgba = Rgba::rgb(0, 214, 251);

/// An RGB color with an opacity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Same color with a different opacity.
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Composite this color over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let a = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f64 * a + bg as f64 * (1.0 - a)).round() as u8;
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}
