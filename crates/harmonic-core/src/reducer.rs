// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Dimensionality Reducer
// ─────────────────────────────────────────────────────────────────────
//! Projects the full multivariate trajectory (one row per index, one
//! column per active function) onto its two dominant principal axes.
//!
//! Each output point keeps the raw, unprojected function values keyed by
//! display name, for inspection by the consumer.

use std::collections::BTreeMap;

use harmonic_spectral::PcaModel;
use harmonic_types::{PcaPlotData, PcaPoint};

use crate::sample::SampleMatrix;

/// Number of principal components kept for the 2D embedding.
pub const N_COMPONENTS: usize = 2;
/// Fewer active functions than this yields an empty projection.
pub const MIN_FUNCTIONS: usize = 2;

/// Fit the 2-component model on `sample`.
///
/// `None` when the sample has fewer than [`MIN_FUNCTIONS`] columns or no rows.
pub fn fit(sample: &SampleMatrix<'_>) -> Option<PcaModel> {
    if sample.function_count() < MIN_FUNCTIONS || sample.n_steps() == 0 {
        log::debug!(
            "reducer: need >= {MIN_FUNCTIONS} functions and >= 1 step, got {} × {}",
            sample.function_count(),
            sample.n_steps()
        );
        return None;
    }
    PcaModel::fit(
        &sample.to_row_major(),
        sample.n_steps(),
        sample.function_count(),
        N_COMPONENTS,
    )
}

/// Reduce `sample` to its 2D principal-component trajectory together
/// with the fitted model.
pub fn reduce_with_model(sample: &SampleMatrix<'_>) -> Option<(PcaModel, PcaPlotData)> {
    let model = fit(sample)?;
    let width = sample.function_count();
    let names: Vec<&str> = sample.functions().iter().map(|f| f.name()).collect();

    let mut row = vec![0.0; width];
    let points: PcaPlotData = (0..sample.n_steps())
        .map(|pos| {
            sample.row_into(pos, &mut row);
            let projected = model.project_row(&row);
            let original_vector: BTreeMap<String, f64> = names
                .iter()
                .zip(&row)
                .map(|(name, &v)| (name.to_string(), v))
                .collect();
            PcaPoint {
                n: sample.index_at(pos),
                x: projected[0],
                y: projected[1],
                original_vector,
            }
        })
        .collect();

    log::debug!(
        "reducer: explained variance ratio PC1={:.4} PC2={:.4}",
        model.explained_variance_ratio[0],
        model.explained_variance_ratio[1]
    );

    Some((model, points))
}

/// Reduce `sample` to its 2D principal-component trajectory.
///
/// Empty when fewer than two functions are active or the range is empty.
pub fn reduce(sample: &SampleMatrix<'_>) -> PcaPlotData {
    reduce_with_model(sample)
        .map(|(_, points)| points)
        .unwrap_or_default()
}
