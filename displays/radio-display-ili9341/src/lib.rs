//! ILI9341 panel bring-up
//!
//! Builds the 320x240 landscape ILI9341 display used by the radio from an SPI
//! bus and the two control pins (chip-select and data/command), and attaches
//! it to a `radio_display::TftDisplay`.
//!
//! The controller protocol itself (init sequence, addressing, pixel
//! transfer) is handled by `mipidsi`.
//!
//! ```ignore
//! let mut buffer = [0u8; BUFFER_SIZE];
//! let mut display = TftDisplay::new();
//! if !radio_display_ili9341::attach(&mut display, spi, cs, dc, &mut delay, &mut buffer) {
//!     // No display; all drawing calls are no-ops
//! }
//! display.display_volume(72);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation, Rotation};
use mipidsi::{Builder, Display, NoResetPin};

use radio_display::{DisplayError, TftDisplay};

/// Panel rotation: landscape with the connector on the left
pub const ROTATION: Rotation = Rotation::Deg270;

/// Suggested size of the pixel batching buffer
pub const BUFFER_SIZE: usize = 512;

/// The radio's ILI9341 display
pub type Ili9341<'a, SPI, CS, DC> =
    Display<SpiInterface<'a, ExclusiveDevice<SPI, CS, NoDelay>, DC>, ILI9341Rgb565, NoResetPin>;

/// Construct and initialize the panel
///
/// - `spi`: SPI bus shared by nothing else
/// - `cs`: chip-select pin
/// - `dc`: data/command pin
/// - `buffer`: pixel batching buffer, must outlive the display
pub fn begin<'a, SPI, CS, DC, DELAY>(
    spi: SPI,
    cs: CS,
    dc: DC,
    delay: &mut DELAY,
    buffer: &'a mut [u8],
) -> Result<Ili9341<'a, SPI, CS, DC>, DisplayError>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    DELAY: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("initializing ILI9341");

    let device =
        ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| DisplayError::Communication)?;
    let interface = SpiInterface::new(device, dc, buffer);

    Builder::new(ILI9341Rgb565, interface)
        .color_order(ColorOrder::Bgr)
        .orientation(Orientation::new().rotate(ROTATION))
        .init(delay)
        .map_err(|_| DisplayError::Init)
}

/// Initialize the panel and attach it to `display`
///
/// Returns whether the display is usable. On failure `display` keeps working
/// as a no-op.
pub fn attach<'a, SPI, CS, DC, DELAY>(
    display: &mut TftDisplay<Ili9341<'a, SPI, CS, DC>>,
    spi: SPI,
    cs: CS,
    dc: DC,
    delay: &mut DELAY,
    buffer: &'a mut [u8],
) -> bool
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    DELAY: DelayNs,
{
    display.begin(begin(spi, cs, dc, delay, buffer))
}
