//! The countdown state machine and its command surface

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    notify::CompletionNotifier,
    state::{report::format_uptime, RunState, StatusReport, TimerSnapshot},
    tasks::spawn_ticker,
};

/// Mutable core of the machine, guarded by a single lock.
///
/// The ticker's join handle lives inside the same lock as the counters so
/// that spawning and aborting the tick task is atomic with the run-state
/// transition that justifies it: there is no window in which a fresh ticker
/// can outlive a concurrent pause or reset.
struct CountdownState {
    remaining_seconds: u64,
    run_state: RunState,
    notified_this_run: bool,
    ticker: Option<JoinHandle<()>>,
    /// Identity of the current run. Bumped on every start, pause, and
    /// reset, so a tick carrying an older generation is stale even if the
    /// machine happens to be `Running` again by the time it takes the lock.
    generation: u64,
}

impl CountdownState {
    fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_seconds: self.remaining_seconds,
            run_state: self.run_state,
        }
    }

    fn abort_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

/// What a single tick did; tells the ticker task whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// Decremented, still counting.
    Ticked,
    /// Reached zero: transitioned to Expired, completion delivered.
    Expired,
    /// The run this tick belonged to is already over (paused or reset).
    Cancelled,
}

struct LastCommand {
    name: &'static str,
    at: DateTime<Utc>,
}

/// Shared interior of [`CountdownTimer`]; the ticker task holds its own
/// reference to it for the lifetime of one run.
pub(crate) struct TimerCore {
    state: Mutex<CountdownState>,
    snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep one receiver alive so publishing never observes a closed channel.
    _snapshot_rx: watch::Receiver<TimerSnapshot>,
    notifier: Box<dyn CompletionNotifier>,
    created_at: Instant,
    last_command: Mutex<Option<LastCommand>>,
}

impl TimerCore {
    /// Commands are infallible by contract, so a poisoned lock (another
    /// thread panicked mid-mutation) degrades the caller to a logged no-op.
    fn lock_state(&self) -> Option<MutexGuard<'_, CountdownState>> {
        match self.state.lock() {
            Ok(state) => Some(state),
            Err(_) => {
                error!("Timer state lock poisoned; command ignored");
                None
            }
        }
    }

    fn publish(&self, state: &CountdownState) {
        if let Err(e) = self.snapshot_tx.send(state.snapshot()) {
            warn!("Failed to publish timer snapshot: {}", e);
        }
    }

    fn record_command(&self, name: &'static str) {
        if let Ok(mut last) = self.last_command.lock() {
            *last = Some(LastCommand {
                name,
                at: Utc::now(),
            });
        }
    }

    /// Apply one tick of the countdown. Called by the ticker task once per
    /// second while the machine is running, with the generation the task
    /// was spawned for.
    ///
    /// The whole decrement/transition/publish/notify sequence runs under the
    /// state lock, so no command can observe or interleave with a half-done
    /// tick, and nobody ever sees zero seconds remaining in the `Running`
    /// state.
    pub(crate) fn apply_tick(&self, generation: u64) -> TickOutcome {
        let Ok(mut state) = self.state.lock() else {
            error!("Timer state lock poisoned; stopping ticker");
            return TickOutcome::Cancelled;
        };

        if state.generation != generation || state.run_state != RunState::Running {
            // This tick lost the race against a pause or reset. Abort only
            // lands at an await point, so a straggler past its await can
            // still reach here after the run it belonged to is over, even
            // after a fresh run has started; the generation check keeps it
            // from touching that new run.
            return TickOutcome::Cancelled;
        }

        if state.remaining_seconds > 0 {
            state.remaining_seconds -= 1;
        }

        if state.remaining_seconds == 0 {
            state.run_state = RunState::Expired;
            // The task ends after an expiring tick; dropping its handle
            // merely detaches it.
            state.ticker = None;
            let first_completion = !state.notified_this_run;
            state.notified_this_run = true;
            self.publish(&state);
            if first_completion {
                self.notifier.notify_completion();
            }
            info!("Countdown reached zero");
            TickOutcome::Expired
        } else {
            self.publish(&state);
            debug!("Tick: {} seconds remaining", state.remaining_seconds);
            TickOutcome::Ticked
        }
    }
}

/// The countdown timer: a four-command state machine over
/// `{remaining_seconds, run_state}` with a once-per-second ticker and an
/// injected completion collaborator.
///
/// All commands are silent no-ops when their preconditions fail; the
/// machine raises no faults. Observers follow [`subscribe`](Self::subscribe);
/// completion is delivered exactly once per run through the
/// [`CompletionNotifier`] passed to [`new`](Self::new).
pub struct CountdownTimer {
    core: Arc<TimerCore>,
}

impl CountdownTimer {
    /// Create an idle timer that will deliver completion through `notifier`.
    pub fn new(notifier: impl CompletionNotifier + 'static) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::idle());

        Self {
            core: Arc::new(TimerCore {
                state: Mutex::new(CountdownState {
                    remaining_seconds: 0,
                    run_state: RunState::Idle,
                    notified_this_run: false,
                    ticker: None,
                    generation: 0,
                }),
                snapshot_tx,
                _snapshot_rx: snapshot_rx,
                notifier: Box::new(notifier),
                created_at: Instant::now(),
                last_command: Mutex::new(None),
            }),
        }
    }

    /// Stage a new duration without starting it.
    ///
    /// Zero is rejected silently. The run state is deliberately left
    /// untouched: arming and running are separate steps, and setting a
    /// duration mid-run re-arms the live countdown without disturbing the
    /// ticker.
    pub fn set_duration(&self, seconds: u64) {
        if seconds == 0 {
            debug!("Ignoring zero duration");
            return;
        }

        let Some(mut state) = self.core.lock_state() else {
            return;
        };

        state.remaining_seconds = seconds;
        state.notified_this_run = false;
        self.core.publish(&state);
        self.core.record_command("set_duration");
        info!("Duration staged: {} seconds", seconds);
    }

    /// Start (or resume) the countdown.
    ///
    /// No-op unless something is staged and the timer is not already
    /// running. Resuming never resets the remaining time or the completion
    /// guard; only [`set_duration`](Self::set_duration) and
    /// [`reset`](Self::reset) do that.
    pub fn start(&self) {
        let Some(mut state) = self.core.lock_state() else {
            return;
        };

        if state.run_state == RunState::Running {
            debug!("Start ignored: already running");
            return;
        }
        if state.remaining_seconds == 0 {
            debug!("Start ignored: no duration staged");
            return;
        }

        state.generation += 1;
        state.run_state = RunState::Running;
        state.ticker = Some(spawn_ticker(Arc::clone(&self.core), state.generation));
        self.core.publish(&state);
        self.core.record_command("start");
        info!("Countdown running: {} seconds remaining", state.remaining_seconds);
    }

    /// Suspend the countdown, releasing the ticker task.
    ///
    /// Idempotent: pausing a timer that is not running has no effect.
    pub fn pause(&self) {
        let Some(mut state) = self.core.lock_state() else {
            return;
        };

        if state.run_state != RunState::Running {
            debug!("Pause ignored: timer is {}", state.run_state);
            return;
        }

        state.abort_ticker();
        state.generation += 1;
        state.run_state = RunState::Paused;
        self.core.publish(&state);
        self.core.record_command("pause");
        info!("Countdown paused: {} seconds remaining", state.remaining_seconds);
    }

    /// Return to idle, releasing any ticker task. Always succeeds.
    pub fn reset(&self) {
        let Some(mut state) = self.core.lock_state() else {
            return;
        };

        state.abort_ticker();
        state.generation += 1;
        state.run_state = RunState::Idle;
        state.remaining_seconds = 0;
        state.notified_this_run = false;
        self.core.publish(&state);
        self.core.record_command("reset");
        info!("Countdown reset");
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.core.snapshot_tx.borrow()
    }

    /// Subscribe to snapshot updates; one value per tick and per accepted
    /// command.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.core.snapshot_tx.subscribe()
    }

    /// Build the diagnostic status report.
    pub fn status(&self) -> StatusReport {
        // A poisoned lock still holds the last values written before the
        // panic; a read-only diagnostic reports those rather than making
        // anything up.
        let (snapshot, notified_this_run) = match self.core.state.lock() {
            Ok(state) => (state.snapshot(), state.notified_this_run),
            Err(poisoned) => {
                warn!("Timer state lock poisoned; reporting last-known state");
                let state = poisoned.into_inner();
                (state.snapshot(), state.notified_this_run)
            }
        };

        let (last_command, last_command_at) = match self.core.last_command.lock() {
            Ok(last) => match last.as_ref() {
                Some(command) => (Some(command.name.to_string()), Some(command.at)),
                None => (None, None),
            },
            Err(_) => (None, None),
        };

        StatusReport {
            remaining_seconds: snapshot.remaining_seconds,
            run_state: snapshot.run_state,
            notified_this_run,
            uptime: format_uptime(self.core.created_at.elapsed()),
            last_command,
            last_command_at,
        }
    }
}

impl Drop for CountdownTimer {
    /// A countdown must not outlive the session that owns it: dropping the
    /// machine releases any live ticker task.
    fn drop(&mut self) {
        if let Ok(mut state) = self.core.state.lock() {
            state.abort_ticker();
        }
    }
}
