mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    ParseColorError, add_colors, add_colors_wrapping, blend_colors, hsv2rgb, parse_rgb,
    scale_color, sub_colors, sub_colors_wrapping,
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full intensity
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
