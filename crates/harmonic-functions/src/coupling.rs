// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Inter-Function Coupling Model
// ─────────────────────────────────────────────────────────────────────
//! Deterministic pairwise coupling coefficients between function
//! identifiers.
//!
//! C(a, b) hashes the concatenation `a + b`, so in general
//! C(a, b) ≠ C(b, a). The asymmetry is part of the model and is kept.

use serde::{Deserialize, Serialize};

/// Rolling-hash multiplier.
const HASH_BASE: i32 = 31;
/// Number of coefficient buckets; coefficients are multiples of 1/100.
const BUCKETS: i64 = 100;

/// Coupling coefficient C(a, b) ∈ [0, 1).
///
/// 32-bit rolling hash over the UTF-16 code units of `id_a + id_b`
/// (`h = h·31 + unit`, wrapped to signed 32 bits each step), then
/// `|h| mod 100 / 100`.
pub fn coupling_coefficient(id_a: &str, id_b: &str) -> f64 {
    let hash = id_a
        .encode_utf16()
        .chain(id_b.encode_utf16())
        .fold(0i32, |h, unit| {
            h.wrapping_mul(HASH_BASE).wrapping_add(i32::from(unit))
        });
    // Widen before abs: |i32::MIN| does not fit in i32.
    (i64::from(hash).abs() % BUCKETS) as f64 / BUCKETS as f64
}

/// Dense asymmetric coupling table for one set of active functions.
///
/// `get(i, j)` = C(ids[i], ids[j]); the diagonal is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingMatrix {
    n: usize,
    k: Vec<f64>,
}

impl CouplingMatrix {
    /// Build the n×n table for `ids`, in the given order.
    pub fn build<S: AsRef<str>>(ids: &[S]) -> Self {
        let n = ids.len();
        let mut k = vec![0.0; n * n];
        for (i, a) in ids.iter().enumerate() {
            for (j, b) in ids.iter().enumerate() {
                if i != j {
                    k[i * n + j] = coupling_coefficient(a.as_ref(), b.as_ref());
                }
            }
        }
        Self { n, k }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.k[i * self.n + j]
    }

    /// Row `i`: coefficients pulling function `i` toward every other function.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.k[i * self.n..(i + 1) * self.n]
    }

    /// Coupling term for function `i` given every function's value at one index:
    /// Σ_{j≠i} C_ij · (v_j − v_i).
    pub fn coupling_term(&self, i: usize, values: &[f64]) -> f64 {
        let v_i = values[i];
        self.row(i)
            .iter()
            .zip(values)
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, (&c, &v_j))| c * (v_j - v_i))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_coefficients() {
        assert_eq!(coupling_coefficient("s_n", "t_n"), 0.95);
        assert_eq!(coupling_coefficient("t_n", "s_n"), 0.05);
        assert_eq!(coupling_coefficient("s_n", "m_n"), 0.22);
        assert_eq!(coupling_coefficient("x1_n", "s_n"), 0.94);
    }

    #[test]
    fn test_asymmetric() {
        assert_ne!(
            coupling_coefficient("s_n", "t_n"),
            coupling_coefficient("t_n", "s_n")
        );
    }

    #[test]
    fn test_deterministic() {
        let a = coupling_coefficient("tesla_n", "bb_n");
        for _ in 0..10 {
            assert_eq!(
                coupling_coefficient("tesla_n", "bb_n").to_bits(),
                a.to_bits()
            );
        }
    }

    #[test]
    fn test_range() {
        let ids = ["s_n", "t_n", "m_n", "x1_n", "x2_n", "x3_n", "tesla_n", "b_n", "bb_n", "real_world"];
        for a in ids {
            for b in ids {
                let c = coupling_coefficient(a, b);
                assert!((0.0..1.0).contains(&c), "C({a},{b}) = {c}");
            }
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(coupling_coefficient("", ""), 0.0);
    }

    #[test]
    fn test_matrix_zero_diagonal() {
        let m = CouplingMatrix::build(&["s_n", "t_n", "m_n"]);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
        }
        assert_eq!(m.get(0, 1), 0.95);
        assert_eq!(m.get(1, 0), 0.05);
    }

    #[test]
    fn test_coupling_term() {
        let m = CouplingMatrix::build(&["s_n", "t_n"]);
        let values = [1.0, 3.0];
        assert!((m.coupling_term(0, &values) - 0.95 * 2.0).abs() < 1e-12);
        assert!((m.coupling_term(1, &values) - 0.05 * -2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_matrix() {
        let m = CouplingMatrix::build::<&str>(&[]);
        assert!(m.is_empty());
    }
}
