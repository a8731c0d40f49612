// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Mapping & Projection Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Turns a parameter configuration and an active function set into
//! plottable geometry: per-function log-polar spiral series, or a 2D
//! principal-component trajectory of the joint function vector.
//!
//! # Invariants
//!
//! 1. **Pure and deterministic**: the same [`AppState`] always yields
//!    bit-identical output. No hidden state survives between calls.
//!
//! 2. **No failure path**: an empty range, an empty active set, or fewer
//!    than two functions for PCA produce an empty result. Non-finite
//!    function values are passed through to the consumer untouched.
//!
//! 3. **Last configuration wins**: through [`ComputeDispatcher`], a newer
//!    submission cancels every older one and stale results are never
//!    published. The `AtomicU64` generation counter uses `SeqCst`.
//!
//! [`AppState`]: harmonic_types::AppState

pub mod dispatch;
pub mod engine;
pub mod reducer;
pub mod sample;
pub mod spiral;

pub use dispatch::{CancellationToken, ComputeDispatcher, ComputeTask, PublishedOutput};
pub use engine::{EngineOutput, HarmonicEngine};
pub use sample::{resolve_active, SampleMatrix};
pub use spiral::SpiralProjector;
