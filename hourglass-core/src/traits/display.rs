//! Display sink trait for the LED matrix pair

use crate::display::PixelPlane;

/// Highest intensity level accepted by the matrix driver
pub const MAX_INTENSITY: u8 = 15;

/// Errors that can occur while writing to the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Bus transfer failed
    Bus,
    /// Matrix not initialized
    NotInitialized,
}

/// Trait for the serial-attached 8x8 matrix pair
///
/// The sink receives both planes of a frame. Rows whose dirty byte is zero
/// may be skipped; the arbiter clears the dirty planes after a successful
/// transfer.
pub trait DisplaySink {
    /// Redraw the matrices from two pixel planes
    fn show(&mut self, planes: [&PixelPlane; 2]) -> Result<(), SinkError>;

    /// Set matrix intensity (0-15)
    fn set_intensity(&mut self, level: u8) -> Result<(), SinkError>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show(&mut self, planes: [&PixelPlane; 2]) -> Result<(), SinkError> {
        (**self).show(planes)
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), SinkError> {
        (**self).set_intensity(level)
    }
}
