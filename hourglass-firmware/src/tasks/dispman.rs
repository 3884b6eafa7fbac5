//! Display manager task
//!
//! Counts idle seconds, dims the display and runs the screen saver until
//! some activity ends it.

use core::convert::Infallible;

use defmt::*;
use embassy_time::{Duration, Instant, Ticker, Timer};
use hourglass_core::config::SECOND_TICK_MS;
use hourglass_core::display::{IdleTick, ScreenSaver};
use hourglass_core::task::{Fault, TaskId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::context::AppContext;
use crate::supervisor::supervise;

/// Idle timer and screen saver task
#[embassy_executor::task]
pub async fn dispman_task(ctx: &'static AppContext) {
    supervise(ctx, TaskId::Display, run(ctx)).await
}

async fn run(ctx: &AppContext) -> Result<Infallible, Fault> {
    let mut saver = ScreenSaver::new();
    let mut rng = SmallRng::seed_from_u64(Instant::now().as_ticks() ^ 0x5eed_da7a);
    let mut ticker = Ticker::every(Duration::from_millis(SECOND_TICK_MS));

    loop {
        ticker.next().await;

        match ctx.with_display(|display| display.tick())? {
            IdleTick::Counting => {}
            IdleTick::Dimmed => info!("Display dimmed"),
            IdleTick::SaverStarted => {
                info!("Screen saver started");
                run_saver(ctx, &mut saver, &mut rng).await?;
                info!("Screen saver stopped");
                // Skip the ticks missed while the saver ran
                ticker.reset();
            }
        }
    }
}

async fn run_saver(
    ctx: &AppContext,
    saver: &mut ScreenSaver,
    rng: &mut SmallRng,
) -> Result<(), Fault> {
    saver.reset();
    if !ctx.with_display(|display| display.show_saver(saver.planes_mut()))? {
        return Ok(());
    }

    loop {
        let hold_ms = saver.light(rng);
        Timer::after_millis(hold_ms).await;
        let shown = ctx.with_display(|display| display.show_saver(saver.planes_mut()))?;
        saver.clear_lit();
        if !shown {
            return Ok(());
        }
    }
}
