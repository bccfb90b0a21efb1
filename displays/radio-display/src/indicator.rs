//! Battery and volume indicator bars
//!
//! Both indicators are 2 pixel high bars across the full screen width, split
//! into two colors at a position proportional to the value. A bar is only
//! repainted when its split position changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::backend::TftBackend;
use crate::color::{GREEN, RED};
use crate::segment::{DEFAULT_LAYOUT, SEG_INFO};
use crate::tft::TftDisplay;

/// Height of both indicator bars
pub const BAR_HEIGHT: u32 = 2;

/// Battery bar row, just above the divider of the info segment
pub const BATTERY_BAR_Y: i32 = DEFAULT_LAYOUT[SEG_INFO].y as i32 - 5;

/// Highest volume the bar can show
pub const MAX_VOLUME: u8 = 100;

/// Re-map a number from one range to another
///
/// Integer math with truncating division. Values outside the input range are
/// extrapolated, not clamped, but the result saturates at the `i32` bounds.
/// A degenerate input range maps to `out_min`.
pub const fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scaled = (x as i128 - in_min as i128) * (out_max as i128 - out_min as i128)
        / (in_max as i128 - in_min as i128);
    let mapped = scaled + out_min as i128;
    if mapped > i32::MAX as i128 {
        i32::MAX
    } else if mapped < i32::MIN as i128 {
        i32::MIN
    } else {
        mapped as i32
    }
}

/// Bar length in pixels, saturating for screens wider than `u16::MAX`
fn bar_length(pos: i32) -> u16 {
    u16::try_from(pos.max(0)).unwrap_or(u16::MAX)
}

/// Raw ADC readings at empty and full battery
///
/// The battery bar is disabled unless `bat0 < bat100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatteryCalibration {
    /// Reading at 0% charge
    pub bat0: u16,
    /// Reading at 100% charge
    pub bat100: u16,
}

impl BatteryCalibration {
    pub const fn new(bat0: u16, bat100: u16) -> Self {
        Self { bat0, bat100 }
    }

    /// Check if the calibration describes a usable range
    pub const fn is_enabled(&self) -> bool {
        self.bat0 < self.bat100
    }

    /// Length of the charged part of a bar `width` pixels wide
    ///
    /// Readings outside the calibrated range clamp to the nearest bound.
    /// Returns `None` when the calibration is disabled.
    pub fn bar_position(&self, adc: u16, width: u32) -> Option<u16> {
        if !self.is_enabled() {
            return None;
        }
        let v = adc.clamp(self.bat0, self.bat100);
        let pos = map_range(
            v as i32,
            self.bat0 as i32,
            self.bat100 as i32,
            0,
            width as i32,
        );
        Some(bar_length(pos))
    }
}

/// Length of the volume bar for a `width` pixel wide screen
pub fn volume_length(volume: u8, width: u32) -> u16 {
    let volume = volume.min(MAX_VOLUME);
    bar_length(map_range(volume as i32, 0, MAX_VOLUME as i32, 0, width as i32))
}

impl<D: TftBackend> TftDisplay<D> {
    /// Show the battery charge level
    ///
    /// Overwrites the divider above the info segment. No action if the
    /// calibration bounds are not set up (`bat0 >= bat100`).
    pub fn display_battery(&mut self, bat0: u16, bat100: u16, adc: u16) {
        self.display_battery_cal(&BatteryCalibration::new(bat0, bat100), adc);
    }

    /// Show the battery charge level using a stored calibration
    pub fn display_battery_cal(&mut self, calibration: &BatteryCalibration, adc: u16) {
        if self.panel.is_none() {
            return;
        }

        let width = self.width();
        let Some(pos) = calibration.bar_position(adc, width) else {
            return;
        };
        if self.battery_pos == Some(pos) {
            return;
        }
        self.battery_pos = Some(pos);

        self.fill_rect(0, BATTERY_BAR_Y, pos as u32, BAR_HEIGHT, GREEN);
        self.fill_rect(
            pos as i32,
            BATTERY_BAR_Y,
            width.saturating_sub(pos as u32),
            BAR_HEIGHT,
            RED,
        );

        #[cfg(feature = "defmt")]
        defmt::trace!("battery bar at {}", pos);
    }

    /// Show the volume as a bar along the bottom edge
    ///
    /// Volumes above 100 are shown as 100.
    pub fn display_volume(&mut self, volume: u8) {
        if self.panel.is_none() {
            return;
        }

        let volume = volume.min(MAX_VOLUME);
        if self.volume == Some(volume) {
            return;
        }
        self.volume = Some(volume);

        let width = self.width();
        let y = self.height() as i32 - BAR_HEIGHT as i32;
        let len = volume_length(volume, width);

        self.fill_rect(0, y, len as u32, BAR_HEIGHT, RED);
        self.fill_rect(
            len as i32,
            y,
            width.saturating_sub(len as u32),
            BAR_HEIGHT,
            GREEN,
        );

        #[cfg(feature = "defmt")]
        defmt::trace!("volume bar at {}", len);
    }
}
