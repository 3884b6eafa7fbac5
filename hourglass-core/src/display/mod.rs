//! Display model
//!
//! - [`PixelPlane`]: dirty-tracked 8x8 frame with draft/publish double buffering
//! - [`DisplayArbiter`]: ownership, brightness and idle handling
//! - [`ScreenSaver`]: idle animation
//! - [`glyph`]: 3x5 font

pub mod arbiter;
pub mod glyph;
pub mod plane;
pub mod saver;

pub use arbiter::{DisplayArbiter, IdleTick};
pub use glyph::Bitmap;
pub use plane::{Draft, PixelPlane, HEIGHT, WIDTH};
pub use saver::ScreenSaver;
