//! Fixed-rate background driver for a [`World`].
//!
//! One tokio task owns the only write path: it takes the world's write lock
//! for exactly one tick, then releases it until the next interval fires.
//! Readers take the read lock for a whole pass, so they never observe a
//! collection mid-filter or mid-append.

use crate::model::world::World;
use forager_core::error::{Result, SimError};
use forager_core::snapshot::WorldSnapshot;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shortest interval accepted by the tick task.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct SimulationClock {
    world: Arc<RwLock<World>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl SimulationClock {
    /// Starts ticking `world` every `interval`.
    ///
    /// Must be called inside a multi-threaded tokio runtime: the tick task
    /// waits for the world lock through `block_in_place`.
    pub fn start(world: World, interval: Duration) -> Self {
        let world = Arc::new(RwLock::new(world));
        let running = Arc::new(AtomicBool::new(true));
        let handle = tokio::spawn(run_ticks(
            Arc::clone(&world),
            Arc::clone(&running),
            interval.max(MIN_INTERVAL),
        ));
        tracing::info!(interval_ms = interval.as_millis() as u64, "Simulation clock started");
        Self {
            world,
            running,
            handle: Some(handle),
        }
    }

    /// Runs `f` against the world while holding the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&World) -> T) -> T {
        let world = self.world.read().unwrap_or_else(|e| e.into_inner());
        f(&world)
    }

    /// Shared handle to the locked world, for consumers that manage the lock themselves.
    #[must_use]
    pub fn shared_world(&self) -> Arc<RwLock<World>> {
        Arc::clone(&self.world)
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        self.read(World::snapshot)
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.read(|w| w.tick)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Asks the task to stop. It notices between ticks.
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::info!("Simulation stop requested");
        }
    }

    /// Stops the task and waits at most `timeout` for it to finish.
    ///
    /// Calling it again after a successful shutdown is a no-op.
    pub async fn shutdown(&mut self, timeout: Duration) -> Result<()> {
        self.stop();
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        match tokio::time::timeout(timeout, handle).await {
            Err(_) => {
                tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Simulation task did not stop in time");
                Err(SimError::ShutdownTimeout(timeout))
            }
            Ok(Err(join_err)) => Err(SimError::TaskFailed(join_err.to_string())),
            Ok(Ok(outcome)) => outcome,
        }
    }

    /// Shuts down and hands back the world.
    pub async fn into_world(mut self, timeout: Duration) -> Result<World> {
        self.shutdown(timeout).await?;
        let world = Arc::clone(&self.world);
        drop(self);
        match Arc::try_unwrap(world) {
            Ok(lock) => Ok(lock.into_inner().unwrap_or_else(|e| e.into_inner())),
            Err(_) => Err(SimError::TaskFailed(
                "world still shared after shutdown".to_string(),
            )),
        }
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

async fn run_ticks(
    world: Arc<RwLock<World>>,
    running: Arc<AtomicBool>,
    interval: Duration,
) -> Result<()> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while running.load(Ordering::SeqCst) {
        ticker.tick().await;
        if !running.load(Ordering::SeqCst) {
            break;
        }
        // The write lock may wait on a long reader pass; keep that wait off
        // the worker so other tasks keep running.
        let stepped = tokio::task::block_in_place(|| {
            let mut world = world.write().unwrap_or_else(|e| e.into_inner());
            world.step()
        });
        if let Err(err) = stepped {
            running.store(false, Ordering::SeqCst);
            tracing::error!(error = %format!("{err:#}"), "Tick failed; stopping clock");
            return Err(SimError::TaskFailed(format!("{err:#}")));
        }
    }

    tokio::task::block_in_place(|| {
        let world = world.read().unwrap_or_else(|e| e.into_inner());
        tracing::info!(tick = world.tick, "Simulation clock stopped");
        world.metrics.log_summary();
    });
    Ok(())
}
