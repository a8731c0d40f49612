// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Log-Polar Spiral Projector
// ─────────────────────────────────────────────────────────────────────
//! Maps every (value, coupling, index) triple onto the plane:
//!
//!   r_i(n) = 10^alf · f_i(n) + q · Σ_{j≠i} C_ij (f_j(n) − f_i(n))
//!   θ(n)   = φ · n + ψ
//!   (x, y) = (r cos θ, r sin θ)
//!
//! Cost is O(n_steps × active²) from the per-point coupling sum. The
//! coupling table itself is built once per call.

use harmonic_functions::CouplingMatrix;
use harmonic_types::{PlotDataPoint, PlotDataSeries, SystemParameters};

use crate::sample::SampleMatrix;

/// Log-polar transform parameters for one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralProjector {
    radial_scale: f64,
    phi: f64,
    psi: f64,
    q: f64,
}

impl SpiralProjector {
    pub fn new(params: &SystemParameters) -> Self {
        Self {
            radial_scale: params.radial_scale(),
            phi: params.phi,
            psi: params.psi,
            q: params.q,
        }
    }

    /// Whether the coupling term participates (`q > 0`).
    #[inline]
    pub fn coupled(&self) -> bool {
        self.q > 0.0
    }

    /// Radial coordinate. With coupling disabled this is exactly `10^alf · value`.
    #[inline]
    pub fn radius(&self, value: f64, coupling_term: f64) -> f64 {
        if self.coupled() {
            self.radial_scale * value + self.q * coupling_term
        } else {
            self.radial_scale * value
        }
    }

    /// Angular coordinate at absolute index `n`.
    #[inline]
    pub fn angle(&self, n: i64) -> f64 {
        self.phi * n as f64 + self.psi
    }

    #[inline]
    pub fn point(&self, n: i64, value: f64, coupling_term: f64) -> PlotDataPoint {
        let r = self.radius(value, coupling_term);
        let theta = self.angle(n);
        PlotDataPoint {
            n,
            value,
            x: r * theta.cos(),
            y: r * theta.sin(),
        }
    }

    /// One series per active function, each with `n_steps` points in
    /// index order. Empty sample → empty output.
    pub fn project(&self, sample: &SampleMatrix<'_>) -> Vec<PlotDataSeries> {
        if sample.is_empty() {
            return Vec::new();
        }

        let width = sample.function_count();
        let n_steps = sample.n_steps();
        let coupling = self.coupled().then(|| CouplingMatrix::build(&sample.ids()));

        let mut series: Vec<PlotDataSeries> = sample
            .functions()
            .iter()
            .map(|f| PlotDataSeries {
                id: f.id().to_string(),
                name: f.name().to_string(),
                family: f.family(),
                data: Vec::with_capacity(n_steps),
            })
            .collect();

        let mut row = vec![0.0; width];
        for pos in 0..n_steps {
            let n = sample.index_at(pos);
            sample.row_into(pos, &mut row);
            for (i, s) in series.iter_mut().enumerate() {
                let term = coupling
                    .as_ref()
                    .map_or(0.0, |k| k.coupling_term(i, &row));
                s.data.push(self.point(n, row[i], term));
            }
        }

        for s in &series {
            let bad = s.non_plottable_count();
            if bad > 0 {
                log::warn!("spiral: {} has {bad} non-plottable points", s.id);
            }
        }

        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonic_types::{AppState, MappingMode};

    fn params(n_min: i64, n_max: i64, phi: f64, psi: f64, alf: f64, q: f64) -> SystemParameters {
        SystemParameters {
            n_min,
            n_max,
            phi,
            psi,
            alf,
            q,
            htf: 1.0,
        }
    }

    fn project(p: SystemParameters, ids: &[&str]) -> Vec<PlotDataSeries> {
        let state = AppState::new(p, ids.iter().copied(), MappingMode::SpiralProjection);
        let sample = SampleMatrix::build(&state);
        SpiralProjector::new(&state.parameters).project(&sample)
    }

    #[test]
    fn test_unit_scenario() {
        let out = project(params(0, 2, 0.0, 0.0, 0.0, 0.0), &["s_n"]);
        assert_eq!(out.len(), 1);
        let expected = [(0, 0.0), (1, 1.0), (2, 2.0)];
        for (p, (n, v)) in out[0].data.iter().zip(expected) {
            assert_eq!(p.n, n);
            assert_eq!(p.value, v);
            assert_eq!(p.x, v);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_series_metadata() {
        let out = project(params(0, 2, 0.0, 0.0, 0.0, 0.0), &["tesla_n"]);
        assert_eq!(out[0].id, "tesla_n");
        assert_eq!(out[0].name, "Tesla(n)");
        assert_eq!(out[0].family, harmonic_types::FunctionFamily::Chaotic);
    }

    #[test]
    fn test_every_series_has_n_steps_points_in_order() {
        let out = project(
            params(3, 40, 0.7, 0.2, 0.5, 0.3),
            &["s_n", "t_n", "m_n", "x2_n", "tesla_n"],
        );
        assert_eq!(out.len(), 5);
        for s in &out {
            assert_eq!(s.len(), 38);
            assert_eq!(s.data[0].n, 3);
            for w in s.data.windows(2) {
                assert_eq!(w[1].n, w[0].n + 1);
            }
        }
    }

    #[test]
    fn test_zero_coupling_is_exact_scale() {
        let p = params(0, 30, 1.1, 0.4, 1.5, 0.0);
        let scale = 10f64.powf(1.5);
        let out = project(p, &["s_n", "t_n", "bb_n"]);
        for s in &out {
            for pt in &s.data {
                let theta = 1.1 * pt.n as f64 + 0.4;
                let r = scale * pt.value;
                assert_eq!(pt.x, r * theta.cos());
                assert_eq!(pt.y, r * theta.sin());
            }
        }
    }

    #[test]
    fn test_negative_q_disables_coupling() {
        let projector = SpiralProjector::new(&params(0, 1, 0.0, 0.0, 0.0, -1.0));
        assert!(!projector.coupled());
        assert_eq!(projector.radius(2.5, 100.0), 2.5);
    }

    #[test]
    fn test_asymmetric_pull() {
        // C(s_n, t_n) = 0.95, C(t_n, s_n) = 0.05
        let q = 0.5;
        let out = project(params(1, 1, 0.0, 0.0, 0.0, q), &["s_n", "t_n"]);
        let s = 1.0;
        let t = std::f64::consts::LN_2;
        let r_s = s + q * 0.95 * (t - s);
        let r_t = t + q * 0.05 * (s - t);
        assert!((out[0].data[0].x - r_s).abs() < 1e-12);
        assert!((out[1].data[0].x - r_t).abs() < 1e-12);
    }

    #[test]
    fn test_single_function_coupling_is_zero() {
        let coupled = project(params(0, 10, 0.3, 0.1, 0.0, 2.0), &["m_n"]);
        let plain = project(params(0, 10, 0.3, 0.1, 0.0, 0.0), &["m_n"]);
        assert_eq!(coupled, plain);
    }

    #[test]
    fn test_angle_uses_absolute_index() {
        let out = project(
            params(10, 10, std::f64::consts::FRAC_PI_2 / 10.0, 0.0, 0.0, 0.0),
            &["s_n"],
        );
        let p = out[0].data[0];
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_cases() {
        assert!(project(params(0, 10, 1.0, 0.0, 0.0, 0.1), &[]).is_empty());
        assert!(project(params(5, 4, 1.0, 0.0, 0.0, 0.1), &["s_n"]).is_empty());
    }

    #[test]
    fn test_non_finite_passed_through() {
        let out = project(params(1995, 2000, 0.1, 0.0, 0.0, 0.0), &["bb_n"]);
        assert_eq!(out[0].len(), 6);
        assert!(out[0].non_plottable_count() > 0);
    }
}
