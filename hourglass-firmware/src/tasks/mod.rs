//! Embassy async tasks
//!
//! Each task runs independently and communicates through the shared
//! [`AppContext`] and the signals in [`crate::channels`].

pub mod accel;
pub mod clock;
pub mod dispman;
pub mod gestures;
pub mod hourglass;
pub mod settings;

pub use accel::accel_task;
pub use clock::clock_task;
pub use dispman::dispman_task;
pub use gestures::gesture_task;
pub use hourglass::hourglass_task;
pub use settings::settings_task;

use defmt::*;
use embassy_executor::{SpawnError, Spawner};
use hourglass_core::task::TaskId;
use hourglass_core::traits::MotionSource;

use crate::context::AppContext;

/// Register every task and spawn it
///
/// All identities enter the task table before the first body runs, so
/// display hand-overs between peers resolve regardless of start order.
pub fn spawn_all(
    spawner: Spawner,
    ctx: &'static AppContext,
    motion: &'static mut (dyn MotionSource + Send),
) -> Result<(), SpawnError> {
    for id in TaskId::ALL {
        ctx.tasks.register(id);
    }

    spawner.spawn(accel_task(ctx, motion)?);
    spawner.spawn(gesture_task(ctx)?);
    spawner.spawn(dispman_task(ctx)?);
    spawner.spawn(hourglass_task(ctx)?);
    spawner.spawn(clock_task(ctx)?);
    spawner.spawn(settings_task(ctx)?);

    info!("All tasks spawned");
    Ok(())
}
