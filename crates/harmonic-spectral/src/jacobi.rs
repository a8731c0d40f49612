// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Symmetric Eigensolver
// ─────────────────────────────────────────────────────────────────────
//! Cyclic Jacobi eigendecomposition for small dense symmetric matrices
//! (the covariance of tens of active functions).
//!
//! Output ordering and sign are fixed so that the same input always
//! yields the same eigenpairs:
//!   - eigenvalues descending, ties keep their original column order;
//!   - each eigenvector's largest-magnitude component is positive.

const MAX_SWEEPS: usize = 50;
const TOL: f64 = 1e-14;
/// Sweeps that skip rotations below the adaptive threshold.
const THRESHOLD_SWEEPS: usize = 4;

/// Eigenpairs of a symmetric n×n matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen {
    n: usize,
    /// Eigenvalues, descending.
    pub values: Vec<f64>,
    /// n×n row-major; column k is the eigenvector of `values[k]`.
    pub vectors: Vec<f64>,
}

impl SymmetricEigen {
    /// Decompose the row-major symmetric matrix `a` (n×n).
    pub fn decompose(a: &[f64], n: usize) -> Self {
        debug_assert_eq!(a.len(), n * n, "matrix must be n×n");
        let mut work = a.to_vec();
        let mut vectors = vec![0.0; n * n];
        for i in 0..n {
            vectors[i * n + i] = 1.0;
        }

        rotate_to_diagonal(&mut work, n, &mut vectors);

        let values = (0..n).map(|i| work[i * n + i]).collect();
        let mut eig = Self { n, values, vectors };
        eig.sort_descending();
        eig.fix_signs();
        eig
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Eigenvector `k` (paired with `values[k]`).
    pub fn vector(&self, k: usize) -> Vec<f64> {
        (0..self.n).map(|row| self.vectors[row * self.n + k]).collect()
    }

    fn sort_descending(&mut self) {
        let n = self.n;
        let mut order: Vec<usize> = (0..n).collect();
        // Stable: equal eigenvalues keep column order.
        order.sort_by(|&a, &b| self.values[b].total_cmp(&self.values[a]));

        let values: Vec<f64> = order.iter().map(|&k| self.values[k]).collect();
        let mut vectors = vec![0.0; n * n];
        for (new_col, &old_col) in order.iter().enumerate() {
            for row in 0..n {
                vectors[row * n + new_col] = self.vectors[row * n + old_col];
            }
        }
        self.values = values;
        self.vectors = vectors;
    }

    fn fix_signs(&mut self) {
        let n = self.n;
        for col in 0..n {
            let mut max_abs = 0.0;
            let mut max_row = 0;
            for row in 0..n {
                let v = self.vectors[row * n + col].abs();
                if v > max_abs {
                    max_abs = v;
                    max_row = row;
                }
            }
            if self.vectors[max_row * n + col] < 0.0 {
                for row in 0..n {
                    self.vectors[row * n + col] = -self.vectors[row * n + col];
                }
            }
        }
    }
}

/// Apply Jacobi rotations until `a` is diagonal, accumulating them in `v`.
///
/// `a` is destroyed; its diagonal holds the (unsorted) eigenvalues.
fn rotate_to_diagonal(a: &mut [f64], n: usize, v: &mut [f64]) {
    for sweep in 0..MAX_SWEEPS {
        let mut max_off = 0.0;
        for p in 0..n {
            for q in (p + 1)..n {
                let off = a[p * n + q].abs();
                if off > max_off {
                    max_off = off;
                }
            }
        }
        if max_off < TOL {
            return;
        }

        let threshold = if sweep < THRESHOLD_SWEEPS {
            0.2 * max_off / (n * n) as f64
        } else {
            0.0
        };

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p * n + q];
                if apq.abs() < threshold || apq == 0.0 {
                    continue;
                }
                rotate(a, v, n, p, q);
            }
        }
    }
    log::debug!("jacobi: no convergence after {MAX_SWEEPS} sweeps (n={n})");
}

/// Zero `a[p][q]` with one plane rotation (Rutishauser update).
fn rotate(a: &mut [f64], v: &mut [f64], n: usize, p: usize, q: usize) {
    let apq = a[p * n + q];
    let diff = a[q * n + q] - a[p * n + p];

    let t = if diff.abs() < 1e-300 {
        apq.signum()
    } else {
        let theta = diff / (2.0 * apq);
        theta.signum() / (theta.abs() + (1.0 + theta * theta).sqrt())
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    let s = t * c;
    let tau = s / (1.0 + c);

    a[p * n + p] -= t * apq;
    a[q * n + q] += t * apq;
    a[p * n + q] = 0.0;
    a[q * n + p] = 0.0;

    for r in 0..n {
        if r == p || r == q {
            continue;
        }
        let arp = a[r * n + p];
        let arq = a[r * n + q];
        a[r * n + p] = arp - s * (arq + tau * arp);
        a[p * n + r] = a[r * n + p];
        a[r * n + q] = arq + s * (arp - tau * arq);
        a[q * n + r] = a[r * n + q];
    }

    for r in 0..n {
        let vrp = v[r * n + p];
        let vrq = v[r * n + q];
        v[r * n + p] = vrp - s * (vrq + tau * vrp);
        v[r * n + q] = vrq + s * (vrp - tau * vrq);
    }
}
