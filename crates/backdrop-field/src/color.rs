//! Mapping animation colors onto terminal colors.

use backdrop_core::Rgba;
use ratatui::style::Color;

/// Terminal color for `color` composited over `background`.
///
/// Terminals have no alpha channel, so translucent strokes are pre-blended
/// against the page background.
pub fn blend_to_terminal(color: Rgba, background: Rgba) -> Color {
    to_terminal(color.over(background))
}

/// Terminal color for an opaque color, ignoring its alpha.
pub fn to_terminal(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
