// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Mapping Engine Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Harmonic Genesis mapping engine.

pub mod config;
pub mod error;
pub mod series;

pub use config::{AppState, EmpiricalSeries, MappingMode, SystemParameters, REAL_WORLD_ID};
pub use error::{HarmonicError, HarmonicResult};
pub use series::{FunctionFamily, PcaPlotData, PcaPoint, PlotDataPoint, PlotDataSeries};
