//! Screen segments
//!
//! The 320x240 screen is divided into horizontal bands, one per category of
//! text. The layout is static; the text and the `changed` flag belong to the
//! display manager that fills them in.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::color::{GREEN, WHITE, YELLOW};
use crate::font::FontSelect;

/// Number of segments on the screen
pub const SEGMENT_COUNT: usize = 4;

/// Maximum text length of a segment in bytes
pub const SEGMENT_TEXT_LEN: usize = 64;

/// Index of the top line (station name, clock)
pub const SEG_TOP: usize = 0;
/// Index of the scrolling info band
pub const SEG_INFO: usize = 1;
/// Index of the bottom status band
pub const SEG_STATUS: usize = 2;
/// Index of the rotary encoder overlay (shares the status band)
pub const SEG_ENCODER: usize = 3;

/// Static placement and styling of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    /// Foreground color
    pub color: Rgb565,
    /// Top of the band in pixels
    pub y: u16,
    /// Height of the band in pixels
    pub height: u16,
    /// Font used for the text
    pub font: FontSelect,
    /// Offset from the band top to the first text line
    pub line_spacing: u8,
}

impl SegmentLayout {
    pub const fn new(
        color: Rgb565,
        y: u16,
        height: u16,
        font: FontSelect,
        line_spacing: u8,
    ) -> Self {
        Self {
            color,
            y,
            height,
            font,
            line_spacing,
        }
    }
}

/// Segment table of the ILI9341 screen (one text line is 8 pixels)
pub const DEFAULT_LAYOUT: [SegmentLayout; SEGMENT_COUNT] = [
    // 1 top line
    SegmentLayout::new(WHITE, 0, 8, FontSelect::Default, 0),
    // 8 lines in the middle
    SegmentLayout::new(WHITE, 20, 64, FontSelect::Sans, 10),
    // 4 lines at the bottom
    SegmentLayout::new(YELLOW, 160, 32, FontSelect::SansBold, 18),
    // 4 lines at the bottom for the rotary encoder
    SegmentLayout::new(GREEN, 160, 32, FontSelect::Default, 0),
];

/// One screen segment with its current text
#[derive(Debug, Clone)]
pub struct Segment {
    pub layout: SegmentLayout,
    /// Set when the text must be redrawn
    pub changed: bool,
    text: String<SEGMENT_TEXT_LEN>,
}

impl Segment {
    /// Create an empty, unchanged segment
    pub const fn new(layout: SegmentLayout) -> Self {
        Self {
            layout,
            changed: false,
            text: String::new(),
        }
    }

    /// Replace the text and mark the segment for redraw
    ///
    /// Text longer than the segment capacity is truncated at a character
    /// boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
        self.changed = true;
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.text.as_str()
    }
}

/// Build the segment table from `DEFAULT_LAYOUT`
pub fn default_segments() -> [Segment; SEGMENT_COUNT] {
    DEFAULT_LAYOUT.map(Segment::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_segments() {
        let segments = default_segments();
        assert_eq!(segments.len(), SEGMENT_COUNT);
        assert!(segments.iter().all(|s| !s.changed && s.text().is_empty()));
        assert_eq!(segments[SEG_INFO].layout.y, 20);
        assert_eq!(segments[SEG_STATUS].layout.color, YELLOW);
        assert_eq!(segments[SEG_ENCODER].layout.y, segments[SEG_STATUS].layout.y);
    }

    #[test]
    fn test_set_text_marks_changed() {
        let mut seg = Segment::new(DEFAULT_LAYOUT[SEG_TOP]);
        seg.set_text("Radio 538");
        assert!(seg.changed);
        assert_eq!(seg.text(), "Radio 538");
    }

    #[test]
    fn test_set_text_truncates_on_char_boundary() {
        let mut seg = Segment::new(DEFAULT_LAYOUT[SEG_INFO]);
        let mut long: String<128> = String::new();
        for _ in 0..40 {
            long.push('é').unwrap();
        }
        seg.set_text(&long);
        // 'é' is two bytes, 32 of them fill 64 bytes exactly
        assert_eq!(seg.text().chars().count(), 32);
        assert_eq!(seg.text().len(), SEGMENT_TEXT_LEN);
    }

    #[test]
    fn test_set_text_replaces_previous() {
        let mut seg = Segment::new(DEFAULT_LAYOUT[SEG_STATUS]);
        seg.set_text("first");
        seg.changed = false;
        seg.set_text("2nd");
        assert_eq!(seg.text(), "2nd");
        assert!(seg.changed);
    }
}
