//! Settings task
//!
//! Opened by the hourglass on an escape gesture. Up and down step the
//! drain time along the ladder, another escape restarts running sand, and
//! holding an edge hands the display back to the hourglass.

use core::convert::Infallible;

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Timer;
use hourglass_core::config::{DrainLadder, ANIMATION_PERIOD_MS};
use hourglass_core::gesture::{Gesture, GestureSet};
use hourglass_core::sand::{PulseRamp, RESTART_PULSE_CYCLES};
use hourglass_core::settings::DrainScreen;
use hourglass_core::task::{Fault, TaskId};

use crate::channels::{RESTART_PULSE, SAND_RESTART, SETTINGS_OPEN};
use crate::context::AppContext;
use crate::supervisor::supervise;

const SETTINGS_GESTURES: GestureSet = GestureSet::EMPTY
    .with(Gesture::Up)
    .with(Gesture::Down)
    .with(Gesture::Escape)
    .with(Gesture::Select);

/// Drain time settings task
#[embassy_executor::task]
pub async fn settings_task(ctx: &'static AppContext) {
    supervise(ctx, TaskId::Settings, run(ctx)).await
}

async fn run(ctx: &AppContext) -> Result<Infallible, Fault> {
    ctx.set_brightness(TaskId::Settings, ctx.config.settings_brightness)?;

    match select(sessions(ctx), restart_pulse(ctx)).await {
        Either::First(result) | Either::Second(result) => result,
    }
}

async fn sessions(ctx: &AppContext) -> Result<Infallible, Fault> {
    let gestures = ctx.gestures.register(TaskId::Settings, SETTINGS_GESTURES);
    let mut screen = DrainScreen::new();

    loop {
        SETTINGS_OPEN.wait().await;
        info!("Settings opened");
        while gestures.try_receive().is_some() {}
        slide(ctx, &mut screen, ctx.drain_time_s(), true).await?;

        loop {
            let current = ctx.drain_time_s();
            let (next, upward) = match gestures.receive().await {
                Gesture::Up => (DrainLadder::step_up(current), true),
                Gesture::Down => (DrainLadder::step_down(current), false),
                Gesture::Escape => {
                    SAND_RESTART.signal(());
                    continue;
                }
                Gesture::Select => break,
                _ => continue,
            };
            ctx.keep_alive(Some(TaskId::Settings))?;

            if next != current {
                info!("Drain time set to {} s", next);
                ctx.set_drain_time_s(next);
            }
            slide(ctx, &mut screen, next, upward).await?;
        }

        info!("Settings closed");
        ctx.hand_over(TaskId::Hourglass)?;
    }
}

async fn slide(
    ctx: &AppContext,
    screen: &mut DrainScreen,
    drain_time_s: u32,
    upward: bool,
) -> Result<(), Fault> {
    let mut slide = screen.show(drain_time_s, upward);
    while screen.render(&mut slide) {
        ctx.with_display(|display| display.draw(TaskId::Settings, screen.planes_mut()))?;
        Timer::after_millis(ANIMATION_PERIOD_MS).await;
    }
    Ok(())
}

async fn restart_pulse(ctx: &AppContext) -> Result<Infallible, Fault> {
    loop {
        RESTART_PULSE.wait().await;
        for step in PulseRamp::new(RESTART_PULSE_CYCLES, ctx.config.settings_brightness) {
            ctx.set_brightness(TaskId::Settings, step.level)?;
            Timer::after_millis(step.hold_ms).await;
        }
    }
}
