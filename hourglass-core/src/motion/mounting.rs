//! Sensor mounting correction

use super::GravityVector;
use crate::config::MotionConfig;

/// Offset compensation and axis mapping of the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mounting {
    offsets: [i16; 3],
    source: [usize; 3],
    negate: [bool; 3],
}

impl Default for Mounting {
    fn default() -> Self {
        Self::new(&MotionConfig::default())
    }
}

impl Mounting {
    /// Build the correction from configuration
    ///
    /// Out of range transform entries are clamped to a valid axis; use
    /// [`MotionConfig::is_valid`] to reject them up front.
    pub fn new(config: &MotionConfig) -> Self {
        let mut source = [0; 3];
        let mut negate = [false; 3];
        for (i, t) in config.transform.iter().enumerate() {
            source[i] = (t.unsigned_abs() as usize).clamp(1, 3) - 1;
            negate[i] = *t < 0;
        }
        Self {
            offsets: config.offsets,
            source,
            negate,
        }
    }

    /// Correct one raw sample
    pub fn apply(&self, raw: [i16; 3]) -> GravityVector {
        let mut compensated = [0i16; 3];
        for (c, (r, o)) in compensated.iter_mut().zip(raw.iter().zip(self.offsets)) {
            *c = r.saturating_add(o);
        }

        let mut out = [0i16; 3];
        for (i, v) in out.iter_mut().enumerate() {
            let value = compensated[self.source[i]];
            *v = if self.negate[i] {
                value.saturating_neg()
            } else {
                value
            };
        }
        GravityVector(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transform() {
        let mounting = Mounting::new(&MotionConfig {
            offsets: [0, 0, 0],
            ..MotionConfig::default()
        });
        // (2, -1, -3): x <- y, y <- -x, z <- -z
        assert_eq!(mounting.apply([1, 2, 3]), GravityVector([2, -1, -3]));
    }

    #[test]
    fn test_offsets_applied_before_mapping() {
        let mounting = Mounting::default();
        // Raw reading cancelling the offsets
        assert_eq!(mounting.apply([10, -29, -69]), GravityVector([0, 0, 0]));
        assert_eq!(mounting.apply([10, 0, -69]), GravityVector([29, 0, 0]));
    }

    #[test]
    fn test_identity() {
        let mounting = Mounting::new(&MotionConfig {
            offsets: [0, 0, 0],
            transform: [1, 2, 3],
            ..MotionConfig::default()
        });
        assert_eq!(mounting.apply([-5, 7, 9]), GravityVector([-5, 7, 9]));
    }

    #[test]
    fn test_saturates() {
        let mounting = Mounting::new(&MotionConfig {
            offsets: [0, 0, 0],
            transform: [-1, 2, 3],
            ..MotionConfig::default()
        });
        assert_eq!(mounting.apply([i16::MIN, 0, 0]).x(), i16::MAX);
    }
}
