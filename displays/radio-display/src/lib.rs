//! TFT status display renderer for the web radio
//!
//! This crate provides:
//! - `TftDisplay`, the display context that owns the panel handle and the
//!   previous-frame caches used for differential redraw
//! - Font selection between the classic 6x8 cell font and two proportional fonts
//! - Battery and volume indicator bars
//! - A flicker-free 8-character clock
//! - The screen segment table and segment rendering
//! - Parsing of the display-related radio preferences
//!
//! # Architecture
//!
//! The panel itself is any `embedded_graphics::DrawTarget<Color = Rgb565>`.
//! On hardware that is an ILI9341 driven by `mipidsi` (see the
//! `radio-display-ili9341` crate); in tests it is a recording mock.
//!
//! All routines are called synchronously from the caller's update loop. A
//! context that was never successfully initialized turns every drawing call
//! into a no-op.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod clock;
pub mod color;
pub mod config;
pub mod font;
pub mod indicator;
pub mod segment;
pub mod tft;

// Re-export key types
pub use backend::{DisplayError, TftBackend};
pub use config::{parse_preferences, DisplayConfig, ParseError};
pub use font::FontSelect;
pub use indicator::{map_range, BatteryCalibration};
pub use segment::{default_segments, Segment, SegmentLayout, DEFAULT_LAYOUT, SEGMENT_COUNT};
pub use tft::TftDisplay;
