//! Display preferences
//!
//! The radio stores its settings as `key = value` lines. This module picks
//! out the keys the display needs:
//!
//! ```text
//! # TFT wiring
//! pin_tft_cs = 15
//! pin_tft_dc = gpio2
//! # Battery ADC calibration, disabled unless bat0 < bat100
//! bat0 = 2178
//! bat100 = 3256
//! ```
//!
//! Other keys are ignored. A pin value of `-1` means "not connected".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::indicator::BatteryCalibration;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line has no `=` separator
    MissingEquals,
    /// Value is not a valid number
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
}

/// Display-related configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// TFT chip-select GPIO
    pub pin_cs: Option<u8>,
    /// TFT data/command GPIO
    pub pin_dc: Option<u8>,
    /// Battery ADC calibration
    pub battery: BatteryCalibration,
}

impl DisplayConfig {
    /// Both control pins are assigned
    pub const fn is_display_configured(&self) -> bool {
        self.pin_cs.is_some() && self.pin_dc.is_some()
    }
}

/// Parse the display keys out of a preferences text
pub fn parse_preferences(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();

    for line in input.lines() {
        // Strip trailing comment
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::MissingEquals)?;
        let key = key.trim();
        let value = value.trim();

        match key {
            "pin_tft_cs" => config.pin_cs = parse_pin(value)?,
            "pin_tft_dc" => config.pin_dc = parse_pin(value)?,
            "bat0" => config.battery.bat0 = parse_u16(value)?,
            "bat100" => config.battery.bat100 = parse_u16(value)?,
            _ => {}
        }
    }

    Ok(config)
}

/// Parse a pin value: `15`, `gpio15`, `"gpio15"` or `-1` for unassigned
fn parse_pin(value: &str) -> Result<Option<u8>, ParseError> {
    let value = value.trim_matches('"');

    if value == "-1" {
        return Ok(None);
    }

    let num = value.strip_prefix("gpio").unwrap_or(value);
    num.parse::<u8>()
        .map(Some)
        .map_err(|_| ParseError::InvalidPin)
}

fn parse_u16(value: &str) -> Result<u16, ParseError> {
    value
        .trim_matches('"')
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidValue)
}
