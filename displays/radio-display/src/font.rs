//! Font selection
//!
//! The radio uses three fonts: the classic 6x8 cell font for the top line and
//! the clock, a regular sans for the scrolling info and a bold sans for the
//! status line.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use u8g2_fonts::{fonts, U8g2TextStyle};

/// Width of one classic font cell in pixels (5 pixel glyph + 1 spacing)
pub const CELL_WIDTH: u32 = 6;

/// Height of one classic font cell in pixels
pub const CELL_HEIGHT: u32 = 8;

/// Selected text font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSelect {
    /// Classic fixed 6x8 cell font, positioned by its top-left corner
    #[default]
    Default,
    /// Regular sans, roughly FreeSans 9pt
    Sans,
    /// Bold sans, roughly FreeSansBold 12pt
    SansBold,
}

impl FontSelect {
    /// Map a preference font number to a font
    ///
    /// Unknown numbers fall back to the classic font.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Sans,
            2 => Self::SansBold,
            _ => Self::Default,
        }
    }

    /// Font number as used in the segment table
    pub const fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Sans => 1,
            Self::SansBold => 2,
        }
    }

    /// Distance between consecutive text lines in pixels
    pub const fn line_height(self) -> u32 {
        match self {
            Self::Default => CELL_HEIGHT,
            Self::Sans => 16,
            Self::SansBold => 22,
        }
    }

    /// Proportional fonts are positioned by their baseline, the classic
    /// font by its top edge.
    pub const fn is_proportional(self) -> bool {
        !matches!(self, Self::Default)
    }

    /// Horizontal advance of `text` in pixels
    pub(crate) fn advance(self, text: &str) -> u32 {
        let metrics = match self {
            Self::Default => return CELL_WIDTH * text.chars().count() as u32,
            Self::Sans => U8g2TextStyle::new(fonts::u8g2_font_helvR10_tf, Rgb565::WHITE)
                .measure_string(text, Point::zero(), Baseline::Alphabetic),
            Self::SansBold => U8g2TextStyle::new(fonts::u8g2_font_helvB14_tf, Rgb565::WHITE)
                .measure_string(text, Point::zero(), Baseline::Alphabetic),
        };
        metrics.next_position.x.max(0) as u32
    }

    /// Draw `text` at `at` and return the position following the last glyph
    pub(crate) fn draw<D>(
        self,
        text: &str,
        at: Point,
        color: Rgb565,
        target: &mut D,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Default => {
                let style = MonoTextStyle::new(&FONT_5X8, color);
                Text::with_baseline(text, at, style, Baseline::Top).draw(target)
            }
            Self::Sans => {
                let style = U8g2TextStyle::new(fonts::u8g2_font_helvR10_tf, color);
                Text::with_baseline(text, at, style, Baseline::Alphabetic).draw(target)
            }
            Self::SansBold => {
                let style = U8g2TextStyle::new(fonts::u8g2_font_helvB14_tf, color);
                Text::with_baseline(text, at, style, Baseline::Alphabetic).draw(target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_codes() {
        assert_eq!(FontSelect::from_code(0), FontSelect::Default);
        assert_eq!(FontSelect::from_code(1), FontSelect::Sans);
        assert_eq!(FontSelect::from_code(2), FontSelect::SansBold);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        for code in 3..=u8::MAX {
            assert_eq!(FontSelect::from_code(code), FontSelect::Default);
        }
    }

    #[test]
    fn test_code_matches_from_code() {
        for font in [FontSelect::Default, FontSelect::Sans, FontSelect::SansBold] {
            assert_eq!(FontSelect::from_code(font.code()), font);
        }
    }

    #[test]
    fn test_line_heights_grow_with_size() {
        assert_eq!(FontSelect::Default.line_height(), 8);
        assert!(FontSelect::Sans.line_height() > FontSelect::Default.line_height());
        assert!(FontSelect::SansBold.line_height() > FontSelect::Sans.line_height());
    }

    #[test]
    fn test_advance() {
        assert_eq!(FontSelect::Default.advance("abc"), 18);
        assert_eq!(FontSelect::Sans.advance(""), 0);

        let narrow = FontSelect::Sans.advance("i");
        let wide = FontSelect::Sans.advance("W");
        assert!(narrow > 0);
        assert!(wide > narrow);
        assert!(FontSelect::SansBold.advance("W") > wide);
    }
}
