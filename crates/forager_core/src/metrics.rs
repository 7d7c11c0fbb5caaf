//! Run metrics and logging setup.
//!
//! Counters are plain atomics so a reader holding only `&Metrics` can sample
//! them while the tick task is still running.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

pub const FOOD_PRODUCED: &str = "food_produced";
pub const SOURCES_EXPANDED: &str = "sources_expanded";
pub const SOURCES_DESTROYED: &str = "sources_destroyed";
pub const AGENTS_DIED: &str = "agents_died";

/// Ticks between periodic `info!` summaries.
const REPORT_EVERY: u64 = 1000;

/// Population sizes observed at the end of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounts {
    pub agents: usize,
    pub food: usize,
    pub sources: usize,
}

pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    food_count: AtomicU64,
    source_count: AtomicU64,
    counters: Mutex<HashMap<String, u64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            source_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, counts: TickCounts) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.agent_count.store(counts.agents as u64, Ordering::Relaxed);
        self.food_count.store(counts.food as u64, Ordering::Relaxed);
        self.source_count.store(counts.sources as u64, Ordering::Relaxed);

        if tick % REPORT_EVERY == 0 {
            tracing::info!(
                tick,
                agents = counts.agents,
                food = counts.food,
                sources = counts.sources,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn increment_counter(&self, name: &str) {
        self.add_to_counter(name, 1);
    }

    pub fn add_to_counter(&self, name: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        *counters.entry(name.to_string()).or_insert(0) += amount;
    }

    /// Current value of a named counter; unknown names read as zero.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn source_count(&self) -> u64 {
        self.source_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a one-line summary of everything collected so far.
    pub fn log_summary(&self) {
        tracing::info!(
            ticks = self.tick_count(),
            agents = self.agent_count(),
            food = self.food_count(),
            sources = self.source_count(),
            food_produced = self.counter(FOOD_PRODUCED),
            sources_expanded = self.counter(SOURCES_EXPANDED),
            sources_destroyed = self.counter(SOURCES_DESTROYED),
            agents_died = self.counter(AGENTS_DIED),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Run summary"
        );
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` overrides the INFO default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
