//! Motion source trait for the accelerometer

/// Errors that can occur while reading the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transfer failed
    Bus,
    /// Sensor did not answer in time
    Timeout,
}

/// Trait for a 3-axis accelerometer
///
/// Readings are returned in raw sensor units and sensor axes. Mounting
/// offsets and axis mapping are applied by [`crate::motion::Mounting`].
pub trait MotionSource {
    /// Read one acceleration sample
    fn acceleration(&mut self) -> Result<[i16; 3], SensorError>;
}

impl<T: MotionSource + ?Sized> MotionSource for &mut T {
    fn acceleration(&mut self) -> Result<[i16; 3], SensorError> {
        (**self).acceleration()
    }
}
