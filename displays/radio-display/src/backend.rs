//! Display backend
//!
//! The panel seam: any RGB565 `DrawTarget` can back a `TftDisplay`.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel (SPI bus or control pin)
    Communication,
    /// Controller initialization sequence failed
    Init,
}

/// Panel backend trait
///
/// Shorthand bound for the panels a `TftDisplay` can drive. Implemented for
/// every RGB565 draw target, so the `mipidsi` ILI9341 display and host-side
/// test doubles qualify alike.
pub trait TftBackend: DrawTarget<Color = Rgb565> {}

impl<T> TftBackend for T where T: DrawTarget<Color = Rgb565> {}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;
    use std::vec::Vec;

    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics::pixelcolor::Rgb565;

    /// Panel double that records every rectangle fill
    pub struct RecordingPanel {
        pub fills: Vec<(Rectangle, Rgb565)>,
        /// Individually drawn pixels (glyphs)
        pub pixels: usize,
        size: Size,
    }

    impl RecordingPanel {
        pub fn new() -> Self {
            Self::with_size(320, 240)
        }

        pub fn with_size(width: u32, height: u32) -> Self {
            Self {
                fills: Vec::new(),
                pixels: 0,
                size: Size::new(width, height),
            }
        }

        pub fn reset_log(&mut self) {
            self.fills.clear();
            self.pixels = 0;
        }

        /// Fills of exactly this size and color
        pub fn count_fills(&self, size: Size, color: Rgb565) -> usize {
            self.fills
                .iter()
                .filter(|(r, c)| r.size == size && *c == color)
                .count()
        }
    }

    impl OriginDimensions for RecordingPanel {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for RecordingPanel {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.pixels += pixels.into_iter().count();
            Ok(())
        }

        fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
            self.fills.push((*area, color));
            Ok(())
        }
    }
}
