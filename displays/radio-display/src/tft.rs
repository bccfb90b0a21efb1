//! Display context
//!
//! `TftDisplay` owns the panel handle together with the text state (font,
//! color, cursor) and the previous-frame caches of the indicators and the
//! clock. Every drawing routine is a no-op until `begin` has attached a panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::backend::{DisplayError, TftBackend};
use crate::clock::{TIME_LEN, TIME_PLACEHOLDER};
use crate::color::{BACKGROUND, WHITE};
use crate::font::{FontSelect, CELL_HEIGHT, CELL_WIDTH};
use crate::segment::Segment;

/// Panel width in landscape orientation
pub const SCREEN_WIDTH: u32 = 320;

/// Panel height in landscape orientation
pub const SCREEN_HEIGHT: u32 = 240;

/// Display context for the radio screen
pub struct TftDisplay<D> {
    pub(crate) panel: Option<D>,
    pub(crate) font: FontSelect,
    pub(crate) text_color: Rgb565,
    pub(crate) cursor: Point,
    /// Last drawn battery bar length, `None` until first drawn
    pub(crate) battery_pos: Option<u16>,
    /// Last drawn volume, `None` until first drawn
    pub(crate) volume: Option<u8>,
    /// Last drawn clock text
    pub(crate) time: [u8; TIME_LEN],
}

impl<D> Default for TftDisplay<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> TftDisplay<D> {
    /// Create a context without a panel
    pub const fn new() -> Self {
        Self {
            panel: None,
            font: FontSelect::Default,
            text_color: WHITE,
            cursor: Point::zero(),
            battery_pos: None,
            volume: None,
            time: TIME_PLACEHOLDER,
        }
    }

    /// Check if a panel is attached
    pub fn is_ready(&self) -> bool {
        self.panel.is_some()
    }

    /// Borrow the attached panel
    pub fn panel(&self) -> Option<&D> {
        self.panel.as_ref()
    }

    /// Mutably borrow the attached panel, for drawing beyond this crate
    pub fn panel_mut(&mut self) -> Option<&mut D> {
        self.panel.as_mut()
    }

    /// Select a font by preference number (1 = sans, 2 = bold sans,
    /// anything else = classic 6x8)
    pub fn set_font(&mut self, code: u8) {
        self.font = FontSelect::from_code(code);
    }

    /// Select a font
    pub fn select_font(&mut self, font: FontSelect) {
        self.font = font;
    }

    /// Currently selected font
    pub fn font(&self) -> FontSelect {
        self.font
    }

    /// Set the color used by subsequent text output
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    /// Move the text cursor
    ///
    /// For the classic font this is the top-left corner of the next cell, for
    /// proportional fonts the left end of the baseline.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

impl<D: TftBackend> TftDisplay<D> {
    /// Attach an initialized panel and clear it
    ///
    /// Returns `true` when a panel is now attached. On failure the context
    /// stays without a panel and all drawing remains a no-op.
    pub fn begin(&mut self, panel: Result<D, DisplayError>) -> bool {
        match panel {
            Ok(mut panel) => {
                panel.clear(BACKGROUND).ok();
                self.panel = Some(panel);
                self.cursor = Point::zero();
                #[cfg(feature = "defmt")]
                defmt::info!("display initialized");
                true
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("display init failed: {:?}", _e);
                false
            }
        }
    }

    /// Width of the screen in pixels
    pub fn width(&self) -> u32 {
        self.panel
            .as_ref()
            .map_or(SCREEN_WIDTH, |p| p.bounding_box().size.width)
    }

    /// Height of the screen in pixels
    pub fn height(&self) -> u32 {
        self.panel
            .as_ref()
            .map_or(SCREEN_HEIGHT, |p| p.bounding_box().size.height)
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb565) {
        if let Some(panel) = self.panel.as_mut() {
            let area = Rectangle::new(Point::new(x, y), Size::new(width, height));
            panel.fill_solid(&area, color).ok();
        }
    }

    /// Clear the whole screen to the background color
    pub fn erase(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            panel.clear(BACKGROUND).ok();
        }
    }

    /// Draw one character at the cursor and advance it
    ///
    /// A glyph that would cross the right edge wraps to the start of the next
    /// line, one cell row down for the classic font and one line height down
    /// for proportional fonts.
    pub fn print_char(&mut self, ch: char) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };

        match ch {
            '\n' => {
                self.cursor = Point::new(0, self.cursor.y + self.font.line_height() as i32);
                return;
            }
            '\r' => return,
            _ => {}
        }

        let mut buf = [0u8; 4];
        let glyph = ch.encode_utf8(&mut buf);

        if self.font.is_proportional() {
            let width = panel.bounding_box().size.width as i32;
            let advance = self.font.advance(glyph) as i32;
            if self.cursor.x > 0 && self.cursor.x + advance > width {
                self.cursor = Point::new(0, self.cursor.y + self.font.line_height() as i32);
            }
            if let Ok(next) = self.font.draw(glyph, self.cursor, self.text_color, panel) {
                self.cursor.x = next.x;
            }
        } else {
            let width = panel.bounding_box().size.width as i32;
            if self.cursor.x + CELL_WIDTH as i32 > width {
                self.cursor = Point::new(0, self.cursor.y + CELL_HEIGHT as i32);
            }
            self.font
                .draw(glyph, self.cursor, self.text_color, panel)
                .ok();
            self.cursor.x += CELL_WIDTH as i32;
        }
    }

    /// Draw text at the cursor
    pub fn print(&mut self, text: &str) {
        if self.panel.is_none() {
            return;
        }
        for ch in text.chars() {
            self.print_char(ch);
        }
    }

    /// Redraw a segment if it is marked as changed
    ///
    /// Clears the band, draws the text in the segment's font and color and
    /// clears the `changed` flag.
    pub fn show_segment(&mut self, segment: &mut Segment) {
        if !segment.changed || self.panel.is_none() {
            return;
        }

        let layout = segment.layout;
        let width = self.width();
        self.fill_rect(0, layout.y as i32, width, layout.height as u32, BACKGROUND);
        self.select_font(layout.font);
        self.set_text_color(layout.color);
        self.set_cursor(0, layout.y as i32 + layout.line_spacing as i32);
        self.print(segment.text());
        segment.changed = false;

        #[cfg(feature = "defmt")]
        defmt::trace!("segment at y={} redrawn", layout.y);
    }
}
