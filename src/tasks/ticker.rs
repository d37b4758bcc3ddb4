//! Once-per-second ticker background task

use std::{sync::Arc, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::debug;

use crate::state::machine::{TickOutcome, TimerCore};

pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawn the tick task for one run. The handle is stored inside the timer's
/// state lock so pause and reset can abort it atomically with their
/// transition; `generation` names the run so that a tick already past its
/// await when the abort lands is recognized as stale.
pub(crate) fn spawn_ticker(core: Arc<TimerCore>, generation: u64) -> JoinHandle<()> {
    tokio::spawn(run(core, generation))
}

async fn run(core: Arc<TimerCore>, generation: u64) {
    // The first decrement lands one full period after start; a plain
    // interval completes its first tick immediately, which would swallow a
    // second.
    let mut ticker = time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD);
    // A stalled run resumes at the normal cadence instead of bursting
    // through the missed ticks.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match core.apply_tick(generation) {
            TickOutcome::Ticked => {}
            TickOutcome::Expired => break,
            TickOutcome::Cancelled => {
                debug!("Tick task outlived its run, stopping");
                break;
            }
        }
    }
}
