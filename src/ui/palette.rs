//! Classic tile palette

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// ANSI 24-bit background escape
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// ANSI 24-bit foreground escape
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Board frame / score box background
pub const FRAME: Rgb = Rgb(0xbb, 0xad, 0xa0);
/// Empty cell background, also used for tiles past the palette
pub const EMPTY_CELL: Rgb = Rgb(0xcd, 0xc1, 0xb4);

const DARK_TEXT: Rgb = Rgb(0x00, 0x00, 0x00);
const LIGHT_TEXT: Rgb = Rgb(0xff, 0xff, 0xff);

/// Background color for a tile value
pub fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb(0xee, 0xe4, 0xda),
        4 => Rgb(0xed, 0xe0, 0xc8),
        8 => Rgb(0xf2, 0xb1, 0x79),
        16 => Rgb(0xf5, 0x95, 0x63),
        32 => Rgb(0xf6, 0x7c, 0x5f),
        64 => Rgb(0xf6, 0x5e, 0x3b),
        128 => Rgb(0xed, 0xcf, 0x72),
        256 => Rgb(0xed, 0xcc, 0x61),
        512 => Rgb(0xed, 0xc8, 0x50),
        1024 => Rgb(0xed, 0xc5, 0x3f),
        2048 => Rgb(0xed, 0xc2, 0x2e),
        _ => EMPTY_CELL,
    }
}

/// Text color for a tile value (dark on the two lightest tiles)
pub fn text_color(value: u32) -> Rgb {
    if value <= 4 { DARK_TEXT } else { LIGHT_TEXT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_classic_colors() {
        assert_eq!(tile_color(0), Rgb(0xcd, 0xc1, 0xb4));
        assert_eq!(tile_color(2), Rgb(0xee, 0xe4, 0xda));
        assert_eq!(tile_color(2048), Rgb(0xed, 0xc2, 0x2e));
        assert_eq!(tile_color(4096), EMPTY_CELL);
    }

    #[test]
    fn test_text_color_switches_after_four() {
        assert_eq!(text_color(4), DARK_TEXT);
        assert_eq!(text_color(8), LIGHT_TEXT);
    }

    #[test]
    fn test_ansi_escapes() {
        assert_eq!(FRAME.ansi_bg(), "\x1b[48;2;187;173;160m");
        assert_eq!(LIGHT_TEXT.ansi_fg(), "\x1b[38;2;255;255;255m");
    }
}
