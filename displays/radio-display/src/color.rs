//! RGB565 palette used by the radio screens

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const RED: Rgb565 = Rgb565::RED;
pub const GREEN: Rgb565 = Rgb565::GREEN;
pub const BLUE: Rgb565 = Rgb565::BLUE;
pub const YELLOW: Rgb565 = Rgb565::YELLOW;
pub const CYAN: Rgb565 = Rgb565::CYAN;
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

/// Color the screen is cleared to
pub const BACKGROUND: Rgb565 = BLACK;
