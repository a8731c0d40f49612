// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Deferred Computation Boundary
// ─────────────────────────────────────────────────────────────────────
//! Submission side of the engine for interactive callers.
//!
//! Every `submit` starts a new generation and cancels all earlier
//! tokens (last configuration wins; superseded work is never queued).
//! The engine itself is not interruptible: a task checks its token
//! before computing and again before publishing, and a stale task's
//! result is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;

use harmonic_types::{AppState, HarmonicError, HarmonicResult};

use crate::engine::{EngineOutput, HarmonicEngine};

/// Output accepted from the most recent non-superseded task.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedOutput {
    pub generation: u64,
    pub output: EngineOutput,
}

#[derive(Debug, Default)]
struct Shared {
    latest: AtomicU64,
    published: Mutex<Option<PublishedOutput>>,
}

/// Cancelled as soon as a newer configuration is submitted.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    generation: u64,
    shared: Arc<Shared>,
}

impl CancellationToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.latest.load(Ordering::SeqCst) != self.generation
    }
}

/// One submitted configuration, ready to run on any thread.
#[derive(Debug)]
pub struct ComputeTask {
    state: AppState,
    token: CancellationToken,
    engine: HarmonicEngine,
}

impl ComputeTask {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Compute and publish, unless superseded.
    ///
    /// Returns `HarmonicError::Cancelled` when a newer submission exists,
    /// either before the computation starts or before it is published.
    pub fn run(self) -> HarmonicResult<EngineOutput> {
        let generation = self.token.generation;
        if self.token.is_cancelled() {
            log::info!("dispatch: generation {generation} superseded before start");
            return Err(HarmonicError::Cancelled { generation });
        }

        let output = self.engine.compute(&self.state);

        let mut published = self.token.shared.published.lock();
        if self.token.is_cancelled() {
            log::info!("dispatch: generation {generation} superseded, result discarded");
            return Err(HarmonicError::Cancelled { generation });
        }
        *published = Some(PublishedOutput {
            generation,
            output: output.clone(),
        });
        log::debug!("dispatch: published generation {generation}");
        Ok(output)
    }
}

/// Last-configuration-wins front end for [`HarmonicEngine`].
#[derive(Debug, Default)]
pub struct ComputeDispatcher {
    shared: Arc<Shared>,
    engine: HarmonicEngine,
}

impl ComputeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `state` as the newest configuration. Every previously
    /// issued token is cancelled.
    pub fn submit(&self, state: AppState) -> ComputeTask {
        let generation = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("dispatch: submitted generation {generation}");
        ComputeTask {
            state,
            token: CancellationToken {
                generation,
                shared: Arc::clone(&self.shared),
            },
            engine: self.engine,
        }
    }

    /// Submit and run on a background thread.
    pub fn spawn(&self, state: AppState) -> JoinHandle<HarmonicResult<EngineOutput>> {
        let task = self.submit(state);
        std::thread::spawn(move || task.run())
    }

    /// Cancel every outstanding task without submitting a new one.
    pub fn cancel_all(&self) {
        let generation = self.shared.latest.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("dispatch: all tasks before generation {generation} cancelled");
    }

    pub fn current_generation(&self) -> u64 {
        self.shared.latest.load(Ordering::SeqCst)
    }

    /// Most recently published output, if any.
    pub fn latest(&self) -> Option<PublishedOutput> {
        self.shared.published.lock().clone()
    }
}
