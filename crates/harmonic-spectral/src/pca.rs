// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Principal Component Model
// ─────────────────────────────────────────────────────────────────────
//! Mean-centred PCA over a dense row-major sample matrix.
//!
//! Components come from the covariance eigendecomposition, so their
//! order and sign follow [`SymmetricEigen`]: descending variance, and
//! the largest-magnitude loading of every component is positive.

use serde::{Deserialize, Serialize};

use crate::jacobi::SymmetricEigen;

/// Fitted principal-component model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcaModel {
    /// Column means subtracted before projection.
    pub mean: Vec<f64>,
    /// Component loadings, each of length `mean.len()`, by descending variance.
    pub components: Vec<Vec<f64>>,
    /// Variance captured by each component (clamped at 0).
    pub explained_variance: Vec<f64>,
    /// `explained_variance` as a share of total positive variance.
    pub explained_variance_ratio: Vec<f64>,
}

impl PcaModel {
    /// Fit on `data` (`n_rows` × `n_cols`, row-major), keeping up to
    /// `n_components` components.
    ///
    /// Returns `None` when there are no rows or no columns.
    pub fn fit(data: &[f64], n_rows: usize, n_cols: usize, n_components: usize) -> Option<Self> {
        if n_rows == 0 || n_cols == 0 || data.len() != n_rows * n_cols {
            return None;
        }

        let mut mean = vec![0.0; n_cols];
        for row in data.chunks_exact(n_cols) {
            for (m, &v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        for m in &mut mean {
            *m /= n_rows as f64;
        }

        // Covariance (n_cols × n_cols), unbiased divisor.
        let divisor = if n_rows > 1 { (n_rows - 1) as f64 } else { 1.0 };
        let mut cov = vec![0.0; n_cols * n_cols];
        for row in data.chunks_exact(n_cols) {
            for i in 0..n_cols {
                let ci = row[i] - mean[i];
                for j in i..n_cols {
                    cov[i * n_cols + j] += ci * (row[j] - mean[j]);
                }
            }
        }
        for i in 0..n_cols {
            for j in i..n_cols {
                let v = cov[i * n_cols + j] / divisor;
                cov[i * n_cols + j] = v;
                cov[j * n_cols + i] = v;
            }
        }
        if cov.iter().any(|v| !v.is_finite()) {
            log::warn!("pca: covariance contains non-finite entries; projection will be non-finite");
        }

        let eig = SymmetricEigen::decompose(&cov, n_cols);
        let total: f64 = eig.values.iter().filter(|&&v| v > 0.0).sum();
        let k = n_components.min(n_cols);

        let mut components = Vec::with_capacity(k);
        let mut explained_variance = Vec::with_capacity(k);
        let mut explained_variance_ratio = Vec::with_capacity(k);
        for idx in 0..k {
            let ev = eig.values[idx].max(0.0);
            explained_variance.push(ev);
            explained_variance_ratio.push(if total > 0.0 { ev / total } else { 0.0 });
            components.push(eig.vector(idx));
        }

        Some(Self {
            mean,
            components,
            explained_variance,
            explained_variance_ratio,
        })
    }

    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Project one sample: centre, then dot with each component.
    pub fn project_row(&self, row: &[f64]) -> Vec<f64> {
        self.components
            .iter()
            .map(|comp| {
                row.iter()
                    .zip(&self.mean)
                    .zip(comp)
                    .map(|((&v, &m), &w)| (v - m) * w)
                    .sum()
            })
            .collect()
    }

    /// Project every row of `data` (row-major, `mean.len()` columns).
    pub fn project(&self, data: &[f64]) -> Vec<Vec<f64>> {
        let n_cols = self.mean.len();
        if n_cols == 0 {
            return Vec::new();
        }
        data.chunks_exact(n_cols)
            .map(|row| self.project_row(row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_empty() {
        assert!(PcaModel::fit(&[], 0, 2, 2).is_none());
        assert!(PcaModel::fit(&[], 3, 0, 2).is_none());
        assert!(PcaModel::fit(&[1.0, 2.0, 3.0], 2, 2, 2).is_none());
    }

    #[test]
    fn test_line_captured_by_first_component() {
        // Points on y = 2x.
        let data: Vec<f64> = (0..10).flat_map(|i| [i as f64, 2.0 * i as f64]).collect();
        let pca = PcaModel::fit(&data, 10, 2, 2).unwrap();
        assert!((pca.explained_variance_ratio[0] - 1.0).abs() < 1e-9);
        assert!(pca.explained_variance_ratio[1].abs() < 1e-9);

        let projected = pca.project(&data);
        assert_eq!(projected.len(), 10);
        for p in &projected {
            assert!(p[1].abs() < 1e-9, "PC2 = {}", p[1]);
        }
        // Distances along the line are preserved by PC1.
        let step = (projected[1][0] - projected[0][0]).abs();
        assert!((step - 5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_projection_is_centred() {
        let data = vec![1.0, 5.0, 2.0, 3.0, 4.0, 0.0, 7.0, 2.0];
        let pca = PcaModel::fit(&data, 4, 2, 2).unwrap();
        let projected = pca.project(&data);
        for c in 0..2 {
            let sum: f64 = projected.iter().map(|p| p[c]).sum();
            assert!(sum.abs() < 1e-9, "component {c} sum = {sum}");
        }
    }

    #[test]
    fn test_variance_descending() {
        let data = vec![
            1.0, 0.1, 3.0, //
            2.0, 0.2, 1.0, //
            3.0, 0.1, 4.0, //
            4.0, 0.3, 1.5, //
            5.0, 0.2, 0.5,
        ];
        let pca = PcaModel::fit(&data, 5, 3, 3).unwrap();
        assert_eq!(pca.n_components(), 3);
        for w in pca.explained_variance.windows(2) {
            assert!(w[0] >= w[1]);
        }
        let total: f64 = pca.explained_variance_ratio.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_components_clamped_to_columns() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let pca = PcaModel::fit(&data, 2, 2, 5).unwrap();
        assert_eq!(pca.n_components(), 2);
    }

    #[test]
    fn test_single_row_projects_to_origin() {
        let pca = PcaModel::fit(&[3.0, 4.0], 1, 2, 2).unwrap();
        assert_eq!(pca.project_row(&[3.0, 4.0]), vec![0.0, 0.0]);
        assert_eq!(pca.explained_variance_ratio, vec![0.0, 0.0]);
    }

    #[test]
    fn test_deterministic() {
        let data = vec![0.5, 1.5, 2.5, 0.0, 3.0, 1.0, 4.5, 2.0, 1.0];
        let a = PcaModel::fit(&data, 3, 3, 2).unwrap();
        let b = PcaModel::fit(&data, 3, 3, 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.project(&data), b.project(&data));
    }
}
