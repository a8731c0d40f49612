// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Function Library & Coupling Model
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Static catalog of scalar generator functions and the asymmetric
//! hash-derived coupling between them.

pub mod catalog;
pub mod coupling;

pub use catalog::{
    by_family, catalog, lookup, Formula, FunctionDefinition, HarmonicFunction, FUNCTIONS,
    N_FUNCTIONS,
};
pub use coupling::{coupling_coefficient, CouplingMatrix};
