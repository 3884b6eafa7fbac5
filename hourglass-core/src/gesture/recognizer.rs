//! Gesture state machine
//!
//! Every gesture starts with the device lying face up. From there:
//!
//! - tilt onto an edge and back to face up within the window: UP or DOWN
//!   depending on the edge sign
//! - hold the edge for the whole window: SELECT (standing the device up
//!   to run the timer looks exactly like this)
//! - roll onto a side, then alternate edge and side following
//!   [`ESCAPE_PATTERN`]: LEFT or RIGHT once the first side step matches,
//!   ESCAPE when the pattern completes
//!
//! Timing is counted in orientation samples, not wall time.

use super::Gesture;
use crate::motion::{Category, Orientation, Sign};

/// Samples allowed per gesture step
pub const GESTURE_WINDOW: u8 = 5;

/// Categories the side escape must follow after the initial side roll
pub const ESCAPE_PATTERN: [Category; 5] = [
    Category::Edge,
    Category::Side,
    Category::Edge,
    Category::Side,
    Category::Edge,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    Idle,
    Selecting,
    EdgeHold {
        sign: Sign,
        remaining: u8,
    },
    SideEscape {
        side: Sign,
        step: u8,
        remaining: u8,
        announced: bool,
    },
}

/// Outcome of feeding one orientation sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Orientation differs from the previous sample
    pub orientation_changed: bool,
    /// User interaction started; the display should be kept alive
    pub activity: bool,
    /// Recognized gesture
    pub gesture: Option<Gesture>,
}

/// Gesture recognizer
#[derive(Debug, Clone)]
pub struct Recognizer {
    phase: Phase,
    last: Option<Orientation>,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last: None,
        }
    }

    /// Check if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Feed one orientation sample
    pub fn feed(&mut self, orientation: Orientation) -> Step {
        let mut step = Step {
            orientation_changed: self.last != Some(orientation),
            ..Step::default()
        };
        self.last = Some(orientation);

        self.phase = match self.phase {
            Phase::Idle => {
                if orientation == Orientation::FACE_UP {
                    step.activity = true;
                    Phase::Selecting
                } else {
                    Phase::Idle
                }
            }

            Phase::Selecting => match orientation.category {
                Category::Side => {
                    step.activity = true;
                    Phase::SideEscape {
                        side: orientation.sign,
                        step: 0,
                        remaining: GESTURE_WINDOW,
                        announced: false,
                    }
                }
                Category::Edge => {
                    step.activity = true;
                    Phase::EdgeHold {
                        sign: orientation.sign,
                        remaining: GESTURE_WINDOW,
                    }
                }
                Category::Face => Phase::Selecting,
            },

            Phase::EdgeHold { sign, remaining } => {
                if orientation.is(Category::Face) {
                    step.gesture = Some(if sign.is_positive() {
                        Gesture::Up
                    } else {
                        Gesture::Down
                    });
                    Phase::Idle
                } else if remaining <= 1 {
                    step.gesture = Some(Gesture::Select);
                    Phase::Idle
                } else {
                    Phase::EdgeHold {
                        sign,
                        remaining: remaining - 1,
                    }
                }
            }

            Phase::SideEscape {
                mut side,
                step: index,
                remaining,
                mut announced,
            } => {
                let expected = ESCAPE_PATTERN[index as usize];
                if orientation.is(Category::Face) {
                    Phase::Idle
                } else if orientation.category == expected {
                    if expected == Category::Side && !announced {
                        announced = true;
                        step.gesture = Some(if side.is_positive() {
                            Gesture::Right
                        } else {
                            Gesture::Left
                        });
                    }
                    if index as usize + 1 == ESCAPE_PATTERN.len() {
                        step.gesture = Some(Gesture::Escape);
                        Phase::Idle
                    } else {
                        Phase::SideEscape {
                            side,
                            step: index + 1,
                            remaining: GESTURE_WINDOW,
                            announced,
                        }
                    }
                } else if remaining <= 1 {
                    Phase::Idle
                } else {
                    if orientation.is(Category::Side) && !announced {
                        side = orientation.sign;
                    }
                    Phase::SideEscape {
                        side,
                        step: index,
                        remaining: remaining - 1,
                        announced,
                    }
                }
            }
        };

        step
    }
}
