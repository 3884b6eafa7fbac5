//! Accelerometer task
//!
//! Samples the sensor every 100 ms, maps the reading into the hourglass
//! frame and publishes it together with the classified orientation.

use core::convert::Infallible;

use defmt::*;
use embassy_time::{Duration, Ticker};
use hourglass_core::config::{MotionConfig, SAMPLE_PERIOD_MS};
use hourglass_core::motion::{MotionClassifier, MotionSample, Mounting};
use hourglass_core::task::{Fault, TaskId};
use hourglass_core::traits::MotionSource;

use crate::context::AppContext;
use crate::supervisor::supervise;

/// Accelerometer sampling task
#[embassy_executor::task]
pub async fn accel_task(ctx: &'static AppContext, motion: &'static mut (dyn MotionSource + Send)) {
    supervise(ctx, TaskId::Accel, run(ctx, motion)).await
}

async fn run(ctx: &AppContext, motion: &mut dyn MotionSource) -> Result<Infallible, Fault> {
    let config = if ctx.config.motion.is_valid() {
        ctx.config.motion
    } else {
        warn!("Invalid motion config, using defaults");
        MotionConfig::default()
    };
    let mounting = Mounting::new(&config);
    let mut classifier = MotionClassifier::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        let gravity = mounting.apply(motion.acceleration()?);
        let classified = classifier.classify(gravity);
        if classified.changed {
            debug!("Orientation: {}", classified.orientation);
        }

        ctx.gravity.publish(MotionSample {
            gravity,
            tilt: gravity.tilt45(),
            orientation: classified.orientation,
        });

        ticker.next().await;
    }
}
