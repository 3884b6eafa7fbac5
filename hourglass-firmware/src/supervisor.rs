//! Task supervision
//!
//! Task bodies never return normally. A body that returns has hit a fault;
//! it is logged, the task is marked faulted and the device resets.

use core::convert::Infallible;
use core::future::Future;

use defmt::*;
use hourglass_core::task::{Fault, TaskId};

use crate::context::AppContext;

/// Run a task body until it faults, then reset
pub async fn supervise<F>(ctx: &AppContext, id: TaskId, body: F)
where
    F: Future<Output = Result<Infallible, Fault>>,
{
    info!("{} task started", id.name());

    ctx.tasks
        .run(id, body, |id, fault| {
            error!("{} task failed: {}", id.name(), fault);
            (ctx.reset)()
        })
        .await
}
