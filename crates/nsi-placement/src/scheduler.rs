use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::PlacementConfig;
use crate::error::{PlacementError, PlacementResult};
use crate::store::ItemStore;

/// Lifecycle state of a [`PlacementScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No background task is running.
    Stopped,
    /// The recurring placement task is active.
    Running,
}

struct Worker {
    runtime: Runtime,
    cancel: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Owned handle to the recurring placement task.
///
/// `start` and `stop` are the only transitions and both are idempotent. The
/// task runs on its own single-worker runtime, apart from the thread that
/// reads player input. Dropping the handle stops the task.
pub struct PlacementScheduler {
    store: ItemStore,
    config: PlacementConfig,
    worker: Option<Worker>,
}

impl std::fmt::Debug for PlacementScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementScheduler")
            .field("state", &self.state())
            .field("config", &self.config)
            .finish()
    }
}

impl PlacementScheduler {
    /// Create a stopped scheduler over `store`.
    pub fn new(store: ItemStore, config: PlacementConfig) -> Self {
        Self {
            store,
            config,
            worker: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        if self.worker.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        }
    }

    /// The store this scheduler fills.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Start the recurring task.
    ///
    /// The first tick runs immediately on the calling thread, so items are in
    /// place before `start` returns. Later ticks follow every `interval` in
    /// the background. Does nothing if already running.
    pub fn start(&mut self) -> PlacementResult<()> {
        if self.worker.is_some() {
            return Ok(());
        }
        if self.config.interval.is_zero() {
            return Err(PlacementError::ZeroInterval);
        }

        let mut rng = self.config.rng();
        let pool_size = self.config.pool_size;
        let period = self.config.interval;
        self.store.redistribute(pool_size, &mut rng)?;

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("nsi-placement")
            .enable_time()
            .build()?;

        let (cancel, mut cancelled) = oneshot::channel::<()>();
        let store = self.store.clone();

        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut cancelled => break,
                    _ = ticker.tick() => {
                        if let Err(e) = store.redistribute(pool_size, &mut rng) {
                            warn!(error = %e, "placement tick failed, stopping task");
                            break;
                        }
                    }
                }
            }
        });

        info!(interval = ?period, pool_size, "placement scheduler started");
        self.worker = Some(Worker {
            runtime,
            cancel,
            task,
        });
        Ok(())
    }

    /// Stop the recurring task.
    ///
    /// Signals cancellation, waits up to the configured grace period for an
    /// in-flight tick, then aborts the task. Returns within one grace period.
    /// Does nothing if already stopped.
    pub fn stop(&mut self) {
        let Some(Worker {
            runtime,
            cancel,
            mut task,
        }) = self.worker.take()
        else {
            return;
        };

        // The task may already have exited on its own.
        let _ = cancel.send(());

        let grace = self.config.shutdown_grace;
        match runtime.block_on(async { time::timeout(grace, &mut task).await }) {
            Ok(Ok(())) => debug!("placement task finished"),
            Ok(Err(e)) => warn!(error = %e, "placement task ended abnormally"),
            Err(_) => {
                warn!(grace = ?grace, "placement task did not stop in time, aborting");
                task.abort();
            }
        }
        runtime.shutdown_background();
        info!("placement scheduler stopped");
    }
}

impl Drop for PlacementScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
