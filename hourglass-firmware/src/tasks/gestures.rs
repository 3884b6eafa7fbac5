//! Gesture task
//!
//! Feeds every published orientation through the recognizer and routes
//! what it produces. Any motion counts as activity for the display.

use core::convert::Infallible;

use defmt::*;
use hourglass_core::gesture::{Gesture, Recognizer};
use hourglass_core::task::{Fault, TaskId};

use crate::context::AppContext;
use crate::supervisor::supervise;

/// Gesture recognition task
#[embassy_executor::task]
pub async fn gesture_task(ctx: &'static AppContext) {
    supervise(ctx, TaskId::Gestures, run(ctx)).await
}

async fn run(ctx: &AppContext) -> Result<Infallible, Fault> {
    let mut samples = ctx.gravity.listen()?;
    let mut recognizer = Recognizer::new();

    loop {
        let sample = samples.next().await;
        let step = recognizer.feed(sample.orientation);

        if step.activity {
            ctx.keep_alive(None)?;
        }
        if step.orientation_changed {
            dispatch(ctx, Gesture::OrientationChanged)?;
        }
        if let Some(gesture) = step.gesture {
            info!("Gesture: {}", gesture);
            dispatch(ctx, gesture)?;
        }
    }
}

fn dispatch(ctx: &AppContext, gesture: Gesture) -> Result<(), Fault> {
    let owner = ctx.with_display(|display| {
        display.keep_alive(None)?;
        Ok::<_, Fault>(display.owner())
    })?;
    let delivered = ctx.gestures.route(gesture, Some(owner));
    trace!("{} delivered to {} queues", gesture, delivered);
    Ok(())
}
