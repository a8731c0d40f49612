// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Output Series Types
// ─────────────────────────────────────────────────────────────────────

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Growth-character classification of a generator function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionFamily {
    #[serde(rename = "T/M/S (Polynomial)")]
    Polynomial,
    #[serde(rename = "X (Signal/Bitwise)")]
    Signal,
    #[serde(rename = "Tesla (Chaotic)")]
    Chaotic,
    #[serde(rename = "B/BB (Super-Computable)")]
    SuperComputable,
    #[serde(rename = "Real-World Data")]
    RealWorld,
}

impl FunctionFamily {
    pub fn label(self) -> &'static str {
        match self {
            Self::Polynomial => "T/M/S (Polynomial)",
            Self::Signal => "X (Signal/Bitwise)",
            Self::Chaotic => "Tesla (Chaotic)",
            Self::SuperComputable => "B/BB (Super-Computable)",
            Self::RealWorld => "Real-World Data",
        }
    }
}

/// One projected sample of a single function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDataPoint {
    /// Absolute index.
    pub n: i64,
    /// Raw function value at `n`.
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl PlotDataPoint {
    /// Whether both projected coordinates can be plotted.
    #[inline]
    pub fn is_plottable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Spiral projection of one active function, ordered by increasing `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDataSeries {
    pub id: String,
    pub name: String,
    pub family: FunctionFamily,
    pub data: Vec<PlotDataPoint>,
}

impl PlotDataSeries {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Points whose projection is NaN or infinite.
    pub fn non_plottable_count(&self) -> usize {
        self.data.iter().filter(|p| !p.is_plottable()).count()
    }
}

/// One row of the reduced system trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcaPoint {
    /// Absolute index.
    pub n: i64,
    /// Projection on the first principal component.
    pub x: f64,
    /// Projection on the second principal component.
    pub y: f64,
    /// Raw (unprojected) value of every active function, by display name.
    pub original_vector: BTreeMap<String, f64>,
}

pub type PcaPlotData = Vec<PcaPoint>;
