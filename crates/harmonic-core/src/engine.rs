// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Mapping Engine
// ─────────────────────────────────────────────────────────────────────
//! Configuration in, series out. Selects the projection path from the
//! configured [`MappingMode`]:
//! - `SpiralProjection` → one log-polar series per active function.
//! - `BitwiseTrace` → the same spiral series; the bit-level display
//!   recomputes its bits from the index on its own.
//! - `DimensionalityReduction` → the 2D principal-component trajectory.

use serde::{Deserialize, Serialize};

use harmonic_types::{AppState, MappingMode, PcaPlotData, PlotDataSeries};

use crate::reducer;
use crate::sample::SampleMatrix;
use crate::spiral::SpiralProjector;

/// Result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum EngineOutput {
    Spiral(Vec<PlotDataSeries>),
    Reduction(PcaPlotData),
}

impl EngineOutput {
    /// Empty output is a valid, displayable state, not a fault.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Spiral(series) => series.is_empty(),
            Self::Reduction(points) => points.is_empty(),
        }
    }

    pub fn as_spiral(&self) -> Option<&[PlotDataSeries]> {
        match self {
            Self::Spiral(series) => Some(series),
            Self::Reduction(_) => None,
        }
    }

    pub fn as_reduction(&self) -> Option<&PcaPlotData> {
        match self {
            Self::Reduction(points) => Some(points),
            Self::Spiral(_) => None,
        }
    }
}

/// Stateless mapping engine. Every call is independent and idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonicEngine;

impl HarmonicEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the path selected by `state.map_mode`.
    pub fn compute(&self, state: &AppState) -> EngineOutput {
        match state.map_mode {
            MappingMode::SpiralProjection | MappingMode::BitwiseTrace => {
                EngineOutput::Spiral(self.plot_data(state))
            }
            MappingMode::DimensionalityReduction => {
                EngineOutput::Reduction(self.pca_projection(state))
            }
        }
    }

    /// Log-polar spiral series for every active function, regardless of mode.
    pub fn plot_data(&self, state: &AppState) -> Vec<PlotDataSeries> {
        let sample = SampleMatrix::build(state);
        SpiralProjector::new(&state.parameters).project(&sample)
    }

    /// 2D principal-component trajectory, regardless of mode.
    pub fn pca_projection(&self, state: &AppState) -> PcaPlotData {
        let sample = SampleMatrix::build(state);
        reducer::reduce(&sample)
    }
}
