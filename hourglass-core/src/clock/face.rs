//! Clock face rendering

use super::TimeOfDay;
use crate::config::ClockConfig;
use crate::display::{glyph, PixelPlane};

/// Brightness the clock uses at a given hour
///
/// The configured brightness inside the bright-hours window, dark outside.
/// A window whose start is past its end wraps around midnight.
pub fn brightness_for(hour: u8, config: &ClockConfig, brightness: u8) -> u8 {
    let (start, end) = config.bright_hours;
    let lit = if start <= end {
        (start..end).contains(&hour)
    } else {
        hour >= start || hour < end
    };
    if lit {
        brightness
    } else {
        0
    }
}

/// Clock planes and the last rendered time
#[derive(Debug, Clone, Default)]
pub struct ClockFace {
    planes: [PixelPlane; 2],
    shown: Option<TimeOfDay>,
}

impl ClockFace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render on the next update even if the time did not change
    pub fn redraw(&mut self) {
        self.shown = None;
    }

    /// Render the time if it differs from the one shown
    ///
    /// Returns whether the planes changed.
    pub fn update(&mut self, now: TimeOfDay) -> bool {
        if self.shown == Some(now) {
            return false;
        }
        self.shown = Some(now);
        self.planes[0].blit(&glyph::number(now.hour as u32, false), 0, 0);
        self.planes[1].blit(&glyph::number(now.minute as u32, true), 0, 0);
        true
    }

    pub fn planes(&self) -> &[PixelPlane; 2] {
        &self.planes
    }

    pub fn planes_mut(&mut self) -> [&mut PixelPlane; 2] {
        let [a, b] = &mut self.planes;
        [a, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_window() {
        let config = ClockConfig::default();
        assert_eq!(brightness_for(6, &config, 3), 0);
        assert_eq!(brightness_for(7, &config, 3), 3);
        assert_eq!(brightness_for(19, &config, 3), 3);
        assert_eq!(brightness_for(20, &config, 3), 0);
    }

    #[test]
    fn test_bright_window_over_midnight() {
        let config = ClockConfig {
            bright_hours: (22, 6),
            ..ClockConfig::default()
        };
        assert_eq!(brightness_for(23, &config, 1), 1);
        assert_eq!(brightness_for(2, &config, 1), 1);
        assert_eq!(brightness_for(12, &config, 1), 0);
    }

    #[test]
    fn test_update_only_on_change() {
        let mut face = ClockFace::new();
        let t = TimeOfDay { hour: 9, minute: 5 };
        assert!(face.update(t));
        assert!(!face.update(t));

        face.redraw();
        assert!(face.update(t));
        assert!(face.update(TimeOfDay { hour: 9, minute: 6 }));
    }

    #[test]
    fn test_render_layout() {
        let mut face = ClockFace::new();
        face.update(TimeOfDay { hour: 9, minute: 5 });
        assert_eq!(face.planes()[0].rows(), &glyph::number(9, false));
        assert_eq!(face.planes()[1].rows(), &glyph::number(5, true));

        // Shrinking from two hour digits to one clears the tens
        face.update(TimeOfDay { hour: 10, minute: 0 });
        face.update(TimeOfDay { hour: 1, minute: 0 });
        assert_eq!(face.planes()[0].rows(), &glyph::number(1, false));
    }
}
