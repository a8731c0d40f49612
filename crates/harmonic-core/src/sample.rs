// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Sample Matrix Builder
// ─────────────────────────────────────────────────────────────────────
//! Evaluates the active functions over the index range into a dense
//! table: one column per active function, one row per index position.
//!
//! Active functions are resolved in catalog order; the empirical series
//! is appended last when it is both supplied and listed as active.
//! Unknown identifiers and duplicates are dropped without error.

use harmonic_functions::{catalog, HarmonicFunction};
use harmonic_types::{AppState, REAL_WORLD_ID};

/// Resolve the active function set for `state`.
pub fn resolve_active(state: &AppState) -> Vec<HarmonicFunction<'_>> {
    let mut active: Vec<HarmonicFunction<'_>> = catalog()
        .iter()
        .filter(|def| state.is_active(def.id))
        .map(HarmonicFunction::Catalog)
        .collect();

    if let Some(series) = &state.real_world_data {
        if state.is_active(REAL_WORLD_ID) {
            active.push(HarmonicFunction::Empirical(series));
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        for id in &state.active_function_ids {
            if !active.iter().any(|f| f.id() == id.as_str()) {
                log::debug!("sample: dropping unresolved function id {id:?}");
            }
        }
    }

    active
}

/// Dense function-value table for one engine invocation.
#[derive(Debug, Clone)]
pub struct SampleMatrix<'a> {
    functions: Vec<HarmonicFunction<'a>>,
    /// `columns[k][pos]` = value of `functions[k]` at `n_min + pos`.
    columns: Vec<Vec<f64>>,
    n_min: i64,
    n_steps: usize,
}

impl<'a> SampleMatrix<'a> {
    /// Evaluate every active function of `state` at every index in
    /// `[n_min, n_max]`.
    ///
    /// An empty active set or an empty range yields the empty matrix
    /// (no functions, no columns, `n_steps() == 0`).
    pub fn build(state: &'a AppState) -> Self {
        let params = &state.parameters;
        let functions = resolve_active(state);
        let n_steps = params.n_steps();

        if n_steps == 0 || functions.is_empty() {
            log::debug!(
                "sample: empty result (range [{}, {}], {} active)",
                params.n_min,
                params.n_max,
                functions.len()
            );
            return Self::empty(params.n_min);
        }

        let columns: Vec<Vec<f64>> = functions
            .iter()
            .map(|f| {
                let column: Vec<f64> = (0..n_steps)
                    .map(|pos| f.eval(params.n_min + pos as i64))
                    .collect();
                let non_finite = column.iter().filter(|v| !v.is_finite()).count();
                if non_finite > 0 {
                    log::warn!(
                        "sample: {} produced {non_finite} non-finite values over [{}, {}]",
                        f.id(),
                        params.n_min,
                        params.n_max
                    );
                }
                column
            })
            .collect();

        log::debug!(
            "sample: {} functions × {n_steps} steps from n={}",
            functions.len(),
            params.n_min
        );

        Self {
            functions,
            columns,
            n_min: params.n_min,
            n_steps,
        }
    }

    fn empty(n_min: i64) -> Self {
        Self {
            functions: Vec::new(),
            columns: Vec::new(),
            n_min,
            n_steps: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_steps == 0 || self.functions.is_empty()
    }

    pub fn functions(&self) -> &[HarmonicFunction<'a>] {
        &self.functions
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn n_min(&self) -> i64 {
        self.n_min
    }

    /// Absolute index of row `pos`.
    #[inline]
    pub fn index_at(&self, pos: usize) -> i64 {
        self.n_min + pos as i64
    }

    /// Identifiers of the active functions, in column order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.functions.iter().map(|f| f.id()).collect()
    }

    /// Column `k` (values of `functions()[k]` in index order).
    #[inline]
    pub fn column_at(&self, k: usize) -> &[f64] {
        &self.columns[k]
    }

    /// Column for function `id`, if active.
    pub fn column(&self, id: &str) -> Option<&[f64]> {
        self.functions
            .iter()
            .position(|f| f.id() == id)
            .map(|k| self.columns[k].as_slice())
    }

    /// Copy every function's value at row `pos` into `out`.
    #[inline]
    pub fn row_into(&self, pos: usize, out: &mut [f64]) {
        for (slot, column) in out.iter_mut().zip(&self.columns) {
            *slot = column[pos];
        }
    }

    /// The whole table as a row-major `n_steps × function_count` buffer.
    pub fn to_row_major(&self) -> Vec<f64> {
        let width = self.functions.len();
        let mut data = vec![0.0; self.n_steps * width];
        for (pos, row) in data.chunks_exact_mut(width.max(1)).enumerate() {
            self.row_into(pos, row);
        }
        data
    }
}
