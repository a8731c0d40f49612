// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Engine Configuration
// ─────────────────────────────────────────────────────────────────────

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{HarmonicError, HarmonicResult};

/// Identifier under which a user-supplied empirical series is activated.
pub const REAL_WORLD_ID: &str = "real_world";

/// Interactive control bounds published to UI collaborators.
pub const N_MAX_BOUNDS: RangeInclusive<i64> = 10..=2000;
pub const PHI_BOUNDS: RangeInclusive<f64> = 0.0..=6.283;
pub const PSI_BOUNDS: RangeInclusive<f64> = 0.0..=6.283;
pub const ALF_BOUNDS: RangeInclusive<f64> = -3.0..=3.0;
pub const Q_BOUNDS: RangeInclusive<f64> = 0.0..=2.0;

fn default_htf() -> f64 {
    1.0
}

/// Numeric parameters of the harmonic mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemParameters {
    /// Lower index bound (inclusive).
    pub n_min: i64,

    /// Upper index bound (inclusive). `n_max < n_min` yields empty output.
    pub n_max: i64,

    /// Angular velocity per unit index.
    pub phi: f64,

    /// Initial phase offset (rad).
    pub psi: f64,

    /// Radial scaling exponent; the applied scale is `10^alf`.
    pub alf: f64,

    /// Coupling strength between active functions. `q <= 0` disables coupling.
    pub q: f64,

    /// Harmonic tuning scalar. Carried in the configuration but not
    /// consumed by the transform.
    #[serde(default = "default_htf")]
    pub htf: f64,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_min: 0,
            n_max: 500,
            phi: 3.14,
            psi: 1.618,
            alf: 0.0,
            q: 0.1,
            htf: 1.0,
        }
    }
}

impl SystemParameters {
    /// Number of index positions, `n_max - n_min + 1`, or 0 for an empty range.
    pub fn n_steps(&self) -> usize {
        let span = self.n_max.saturating_sub(self.n_min).saturating_add(1);
        usize::try_from(span).unwrap_or(0)
    }

    /// Multiplicative radial scale `10^alf`.
    #[inline]
    pub fn radial_scale(&self) -> f64 {
        10f64.powf(self.alf)
    }

    /// Validate the parameter contract expected from a configuration source.
    ///
    /// The engine never calls this; it handles bad ranges through its
    /// empty-result path.
    pub fn validate(&self) -> HarmonicResult<()> {
        if self.n_min < 0 {
            return Err(HarmonicError::Validation(format!(
                "nMin must be >= 0, got {}",
                self.n_min
            )));
        }
        if self.n_min > self.n_max {
            return Err(HarmonicError::Validation(format!(
                "nMin must be <= nMax, got {} > {}",
                self.n_min, self.n_max
            )));
        }
        for (name, value) in [
            ("phi", self.phi),
            ("psi", self.psi),
            ("alf", self.alf),
            ("q", self.q),
            ("htf", self.htf),
        ] {
            if !value.is_finite() {
                return Err(HarmonicError::Validation(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.q < 0.0 {
            return Err(HarmonicError::Validation(format!(
                "q must be >= 0, got {}",
                self.q
            )));
        }
        Ok(())
    }

    /// Clamp every interactively controlled parameter into its control range.
    pub fn clamp_to_control_bounds(&mut self) {
        self.n_max = self
            .n_max
            .clamp(*N_MAX_BOUNDS.start(), *N_MAX_BOUNDS.end());
        self.n_min = self.n_min.clamp(0, self.n_max);
        self.phi = self.phi.clamp(*PHI_BOUNDS.start(), *PHI_BOUNDS.end());
        self.psi = self.psi.clamp(*PSI_BOUNDS.start(), *PSI_BOUNDS.end());
        self.alf = self.alf.clamp(*ALF_BOUNDS.start(), *ALF_BOUNDS.end());
        self.q = self.q.clamp(*Q_BOUNDS.start(), *Q_BOUNDS.end());
    }
}

/// Output selector for one engine invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingMode {
    #[default]
    #[serde(rename = "Log-Polar Spiral")]
    SpiralProjection,
    #[serde(rename = "Hypercube Projection")]
    DimensionalityReduction,
    #[serde(rename = "Binary State Plot")]
    BitwiseTrace,
}

/// User-supplied time series, indexed by absolute `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalSeries {
    pub name: String,
    pub data: Vec<f64>,
}

impl EmpiricalSeries {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Stored value at index `n`; indices outside the data yield 0.
    #[inline]
    pub fn value_at(&self, n: i64) -> f64 {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.data.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Full engine input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub parameters: SystemParameters,
    pub active_function_ids: Vec<String>,
    #[serde(default)]
    pub map_mode: MappingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_world_data: Option<EmpiricalSeries>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            parameters: SystemParameters::default(),
            active_function_ids: ["s_n", "t_n", "x1_n", "tesla_n", "b_n"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            map_mode: MappingMode::SpiralProjection,
            real_world_data: None,
        }
    }
}

impl AppState {
    pub fn new<I, S>(parameters: SystemParameters, active_ids: I, map_mode: MappingMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters,
            active_function_ids: active_ids.into_iter().map(Into::into).collect(),
            map_mode,
            real_world_data: None,
        }
    }

    /// Attach an empirical series. It is only evaluated when
    /// [`REAL_WORLD_ID`] is also listed as active.
    pub fn with_real_world_data(mut self, series: EmpiricalSeries) -> Self {
        self.real_world_data = Some(series);
        self
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_function_ids.iter().any(|a| a == id)
    }

    /// Load persisted state from a JSON string.
    pub fn from_json(json: &str) -> HarmonicResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("config: rejected persisted state: {e}");
            HarmonicError::Config(format!("JSON parse error: {e}"))
        })
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> HarmonicResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HarmonicError::Config(format!("JSON encode error: {e}")))
    }
}
