//! Clock display
//!
//! Shows an 8-character time string ("hh:mm:ss") in the top right corner.
//! To prevent flicker only the characters that differ from the previous call
//! are repainted; every changed cell is cleared first because glyphs differ
//! in width.

use embedded_graphics::pixelcolor::Rgb565;

use crate::backend::TftBackend;
use crate::color::BACKGROUND;
use crate::font::{FontSelect, CELL_HEIGHT, CELL_WIDTH};
use crate::tft::TftDisplay;

/// Number of characters in the time string
pub const TIME_LEN: usize = 8;

/// Clock x offset from the right screen edge (negative)
pub const TIME_POS: i32 = -52;

/// Cache content that differs from any real time string
pub const TIME_PLACEHOLDER: [u8; TIME_LEN] = *b"........";

/// Normalize a time string to exactly `TIME_LEN` bytes
///
/// Longer input is cut, shorter input padded with spaces.
fn time_bytes(text: &str) -> [u8; TIME_LEN] {
    let mut out = [b' '; TIME_LEN];
    for (dst, src) in out.iter_mut().zip(text.bytes()) {
        *dst = src;
    }
    out
}

impl<D: TftBackend> TftDisplay<D> {
    /// Show the time at its fixed position in the given color
    ///
    /// An empty string forgets what is on screen, so the next call repaints
    /// all eight characters.
    pub fn display_time(&mut self, text: &str, color: Rgb565) {
        if text.is_empty() {
            self.time = TIME_PLACEHOLDER;
            return;
        }
        if self.panel.is_none() {
            return;
        }

        self.select_font(FontSelect::Default);
        self.set_text_color(color);

        let new = time_bytes(text);
        let mut x = self.width() as i32 + TIME_POS;

        for (i, &byte) in new.iter().enumerate() {
            if byte != self.time[i] {
                self.fill_rect(x, 0, CELL_WIDTH, CELL_HEIGHT, BACKGROUND);
                self.set_cursor(x, 0);
                let ch = if byte.is_ascii() { byte as char } else { '?' };
                self.print_char(ch);
                self.time[i] = byte;
            }
            x += CELL_WIDTH as i32;
        }
    }

    /// Time string as last drawn
    ///
    /// Positions that were never drawn hold `'.'`.
    pub fn shown_time(&self) -> &[u8; TIME_LEN] {
        &self.time
    }
}
