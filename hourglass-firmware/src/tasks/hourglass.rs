//! Hourglass task
//!
//! Four loops share one [`Hourglass`]: the 10 ms animation frame, the
//! brightness pulse played when the time runs out, the escape gesture
//! that opens the settings screen, and restart requests from settings.

use core::cell::RefCell;
use core::convert::Infallible;

use defmt::*;
use embassy_futures::select::{select4, Either4};
use embassy_time::{Duration, Instant, Ticker, Timer};
use hourglass_core::config::ANIMATION_PERIOD_MS;
use hourglass_core::gesture::{Gesture, GestureSet};
use hourglass_core::sand::{Hourglass, PulseRamp, HOURGLASS_PULSE_CYCLES};
use hourglass_core::task::{Fault, TaskId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::channels::{CLOCK_REDRAW, PULSE_START, RESTART_PULSE, SAND_RESTART, SETTINGS_OPEN};
use crate::context::AppContext;
use crate::supervisor::supervise;

/// Sand animation task
#[embassy_executor::task]
pub async fn hourglass_task(ctx: &'static AppContext) {
    supervise(ctx, TaskId::Hourglass, run(ctx)).await
}

async fn run(ctx: &AppContext) -> Result<Infallible, Fault> {
    let now = Instant::now().as_millis();
    let hourglass = RefCell::new(Hourglass::new(now, &ctx.config));
    ctx.set_brightness(TaskId::Hourglass, ctx.config.brightness)?;

    match select4(
        animate(ctx, &hourglass),
        pulse(ctx, &hourglass),
        escape(ctx),
        restart(&hourglass),
    )
    .await
    {
        Either4::First(result)
        | Either4::Second(result)
        | Either4::Third(result)
        | Either4::Fourth(result) => result,
    }
}

async fn animate(ctx: &AppContext, hourglass: &RefCell<Hourglass>) -> Result<Infallible, Fault> {
    let mut samples = ctx.gravity.listen()?;
    let mut sample = samples.latest().unwrap_or_default();
    let mut rng = SmallRng::seed_from_u64(Instant::now().as_ticks());
    let mut ticker = Ticker::every(Duration::from_millis(ANIMATION_PERIOD_MS));

    loop {
        if let Some(fresh) = samples.try_next() {
            sample = fresh;
        }
        // The clock only takes over from the sand, never from another screen
        let covered = ctx.owner() != TaskId::Hourglass;

        let outcome = {
            let mut hourglass = hourglass.borrow_mut();
            let drain_time_ms = ctx.drain_time_s().saturating_mul(1000);
            if hourglass.drain_time_ms() != drain_time_ms {
                info!("Drain time now {} ms", drain_time_ms);
                hourglass.set_drain_time(drain_time_ms);
            }

            let outcome = hourglass.frame(
                Instant::now().as_millis(),
                &sample,
                covered,
                &mut rng,
            );
            ctx.with_display(|display| display.draw(TaskId::Hourglass, hourglass.planes_mut()))?;
            outcome
        };

        if outcome.animated {
            ctx.keep_alive(Some(TaskId::Hourglass))?;
        }
        if outcome.start_pulse {
            PULSE_START.signal(());
        }
        if outcome.show_clock {
            ctx.hand_over(TaskId::Clock)?;
            CLOCK_REDRAW.signal(());
        }

        ticker.next().await;
    }
}

async fn pulse(ctx: &AppContext, hourglass: &RefCell<Hourglass>) -> Result<Infallible, Fault> {
    loop {
        PULSE_START.wait().await;
        info!("Time is up");

        loop {
            for step in PulseRamp::new(HOURGLASS_PULSE_CYCLES, ctx.config.brightness) {
                ctx.set_brightness(TaskId::Hourglass, step.level)?;
                Timer::after_millis(step.hold_ms).await;
            }
            if !hourglass.borrow_mut().finish_pulse() {
                break;
            }
        }
    }
}

async fn escape(ctx: &AppContext) -> Result<Infallible, Fault> {
    let gestures = ctx
        .gestures
        .register(TaskId::Hourglass, GestureSet::EMPTY.with(Gesture::Escape));

    loop {
        if gestures.receive().await == Gesture::Escape {
            ctx.hand_over(TaskId::Settings)?;
            SETTINGS_OPEN.signal(());
        }
    }
}

async fn restart(hourglass: &RefCell<Hourglass>) -> Result<Infallible, Fault> {
    loop {
        SAND_RESTART.wait().await;
        if hourglass.borrow_mut().restart() {
            info!("Sand restarted");
            RESTART_PULSE.signal(());
        }
    }
}
