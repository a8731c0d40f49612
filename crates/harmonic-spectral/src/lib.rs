// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Spectral Toolkit
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Dense symmetric eigendecomposition and principal-component
//! projection, pure Rust with no BLAS/LAPACK dependency.
//!
//! Architecture:
//!   - SymmetricEigen: cyclic Jacobi with deterministic order and sign
//!   - PcaModel: mean-centred covariance PCA built on SymmetricEigen

pub mod jacobi;
pub mod pca;

pub use jacobi::SymmetricEigen;
pub use pca::PcaModel;
