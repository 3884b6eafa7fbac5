//! Clock task
//!
//! Renders the wall time once per second and keeps the display awake
//! while it is shown. Turning the hourglass over hands the display back
//! to the sand. The board's time source is asked for a fresh wall time at
//! start and then once a day.

use core::cell::RefCell;
use core::convert::Infallible;

use defmt::*;
use embassy_futures::select::{select, select3, Either, Either3};
use embassy_time::{Duration, Instant, Ticker};
use hourglass_core::clock::{brightness_for, ClockFace, WallClock};
use hourglass_core::config::{SECOND_TICK_MS, TIME_SYNC_INTERVAL_MS};
use hourglass_core::gesture::{Gesture, GestureSet};
use hourglass_core::task::{Fault, TaskId};

use crate::channels::{CLOCK_REDRAW, SYNC_REQUEST, TIME_SYNC};
use crate::context::AppContext;
use crate::supervisor::supervise;

/// Wall clock task
#[embassy_executor::task]
pub async fn clock_task(ctx: &'static AppContext) {
    supervise(ctx, TaskId::Clock, run(ctx)).await
}

async fn run(ctx: &AppContext) -> Result<Infallible, Fault> {
    let clock = RefCell::new(WallClock::new());

    match select3(show(ctx, &clock), release(ctx), sync(ctx, &clock)).await {
        Either3::First(result) | Either3::Second(result) | Either3::Third(result) => result,
    }
}

async fn show(ctx: &AppContext, clock: &RefCell<WallClock>) -> Result<Infallible, Fault> {
    let mut face = ClockFace::new();
    let mut ticker = Ticker::every(Duration::from_millis(SECOND_TICK_MS));

    loop {
        let now = clock.borrow().time_of_day(Instant::now().as_millis());
        if face.update(now) {
            let level = brightness_for(now.hour, &ctx.config.clock, ctx.config.brightness);
            ctx.with_display(|display| {
                display.set_brightness(TaskId::Clock, level)?;
                display.draw(TaskId::Clock, face.planes_mut())
            })?;
        }
        ctx.keep_alive(Some(TaskId::Clock))?;

        if let Either::Second(()) = select(ticker.next(), CLOCK_REDRAW.wait()).await {
            face.redraw();
        }
    }
}

async fn release(ctx: &AppContext) -> Result<Infallible, Fault> {
    let changes = ctx
        .gestures
        .register(TaskId::Clock, GestureSet::EMPTY.with(Gesture::OrientationChanged));

    loop {
        changes.receive().await;
        if ctx.owner() == TaskId::Clock {
            ctx.hand_over(TaskId::Hourglass)?;
        }
    }
}

async fn sync(ctx: &AppContext, clock: &RefCell<WallClock>) -> Result<Infallible, Fault> {
    let mut daily = Ticker::every(Duration::from_millis(TIME_SYNC_INTERVAL_MS));
    SYNC_REQUEST.signal(());

    loop {
        match select(TIME_SYNC.wait(), daily.next()).await {
            Either::First(wall) => {
                let now = Instant::now().as_millis();
                clock
                    .borrow_mut()
                    .synchronize(now, wall, ctx.config.clock.tz_hours);
                info!(
                    "Clock synchronized to {}:{}:{}",
                    wall.hour, wall.minute, wall.second
                );
                CLOCK_REDRAW.signal(());
            }
            Either::Second(()) => {
                debug!("Requesting time sync");
                SYNC_REQUEST.signal(());
            }
        }
    }
}
