//! Test images and constants.

/// 2x2 image: one white pixel, three black
pub const CHECKER_2X2: &str = "P3\n2 2\n255\n255 255 255\n0 0 0\n0 0 0\n0 0 0\n";

/// 2x2 image with mixed colors
pub const COLORS_2X2: &str = "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n200 100 50\n";

/// Single pixel, too small to dither
pub const DOT_1X1: &str = "P3\n1 1\n255\n255 255 255\n";

/// Binary PPM magic, rejected by the parser
pub const BINARY_HEADER: &str = "P6\n1 1\n255\n";

/// Uniform P3 image of `width` x `height` samples set to `value`
pub fn uniform(width: usize, height: usize, value: u16) -> String {
    let mut text = format!("P3\n{width} {height}\n255\n");
    for _ in 0..width * height {
        text.push_str(&format!("{value} {value} {value}\n"));
    }
    text
}
