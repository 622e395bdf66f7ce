//! Flat colors used by the icon artwork.

use image::Rgba;

/// A grid cell color. Opaque entries carry alpha 255; only [`TRANSPARENT`]
/// carries alpha 0.
pub type Color = Rgba<u8>;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

/// Hot pink background, `#e84393`
pub const BG: Color = rgb(232, 67, 147);
pub const LIGHT_GRAY: Color = rgb(220, 220, 230);
pub const MID_GRAY: Color = rgb(180, 180, 195);
pub const DARK_GRAY: Color = rgb(100, 100, 115);
/// Almost black, used for the monitor bezel and the base shadow
pub const VERY_DARK: Color = rgb(60, 60, 75);
pub const RIBBON_PINK: Color = rgb(255, 130, 180);
pub const RIBBON_DARK: Color = rgb(220, 80, 140);
pub const SCREEN_GREEN: Color = rgb(100, 220, 160);
pub const SCREEN_BG: Color = rgb(50, 100, 80);

pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

/// CSS form of [`BG`], used as the web theme color
pub const BG_HEX: &str = "#e84393";

pub fn is_transparent(color: Color) -> bool {
    color[3] == 0
}
