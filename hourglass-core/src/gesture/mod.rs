//! Gesture recognition and routing
//!
//! The recognizer turns the orientation stream into gesture symbols; the
//! router delivers them to the display owner's queue. Orientation changes
//! reach every subscriber.

pub mod recognizer;
pub mod router;
pub mod symbol;

pub use recognizer::{Recognizer, Step, GESTURE_WINDOW};
pub use router::{GestureQueue, GestureRouter, GESTURE_QUEUE_CAPACITY};
pub use symbol::{Gesture, GestureError, GestureSet};
