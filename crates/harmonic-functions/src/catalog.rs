// ─────────────────────────────────────────────────────────────────────
// Harmonic Genesis — Function Library
// ─────────────────────────────────────────────────────────────────────
//! Fixed catalog of scalar generator functions of an integer index,
//! grouped by family, plus the empirical variant built from user data.
//!
//! The catalog is a process-wide static table. Dispatch is a `match` on
//! [`Formula`], never a lookup over mutable state.

use harmonic_types::{EmpiricalSeries, FunctionFamily, REAL_WORLD_ID};

pub const N_FUNCTIONS: usize = 9;

/// Closed set of catalog formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// n
    Linear,
    /// n · ln(n + 1)
    LogLinear,
    /// 0.1 · n²
    Quadratic,
    /// (n XOR 6) − n
    BitXor,
    /// (n OR 6) − n
    BitOr,
    /// (n AND 6) − n
    BitAnd,
    /// 100 · sin(0.01 · n²) · cos(0.1 · n)
    Tesla,
    /// n^(ln(n + 1) + 1) · 0.01
    SuperPolynomial,
    /// 1.5^n · sin(n) · 5
    ExponentialSine,
}

/// Bitwise operand shared by the signal family.
pub const SIGNAL_OPERAND: i32 = 6;

impl Formula {
    /// Evaluate at index `n`.
    ///
    /// Bitwise formulas operate on `n` as a 32-bit signed integer, which
    /// is exact for every index below 2^31. Non-finite results (overflow,
    /// logarithm of zero) are returned as-is.
    #[inline]
    pub fn eval(self, n: i64) -> f64 {
        let x = n as f64;
        match self {
            Self::Linear => x,
            Self::LogLinear => x * (x + 1.0).ln(),
            Self::Quadratic => 0.1 * x * x,
            Self::BitXor => f64::from(n as i32 ^ SIGNAL_OPERAND) - x,
            Self::BitOr => f64::from(n as i32 | SIGNAL_OPERAND) - x,
            Self::BitAnd => f64::from(n as i32 & SIGNAL_OPERAND) - x,
            Self::Tesla => 100.0 * (x * x * 0.01).sin() * (x * 0.1).cos(),
            Self::SuperPolynomial => x.powf((x + 1.0).ln() + 1.0) * 0.01,
            Self::ExponentialSine => 1.5f64.powf(x) * x.sin() * 5.0,
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub family: FunctionFamily,
    pub formula: Formula,
    /// One-line description for UI collaborators.
    pub description: &'static str,
}

impl FunctionDefinition {
    #[inline]
    pub fn eval(&self, n: i64) -> f64 {
        self.formula.eval(n)
    }
}

/// The function library, in catalog order.
pub static FUNCTIONS: [FunctionDefinition; N_FUNCTIONS] = [
    FunctionDefinition {
        id: "s_n",
        name: "S(n)",
        family: FunctionFamily::Polynomial,
        formula: Formula::Linear,
        description: "Simple linear growth.",
    },
    FunctionDefinition {
        id: "t_n",
        name: "T(n)",
        family: FunctionFamily::Polynomial,
        formula: Formula::LogLinear,
        description: "Log-linear growth.",
    },
    FunctionDefinition {
        id: "m_n",
        name: "M(n)",
        family: FunctionFamily::Polynomial,
        formula: Formula::Quadratic,
        description: "Quadratic growth.",
    },
    FunctionDefinition {
        id: "x1_n",
        name: "X1(n)=n^6-n",
        family: FunctionFamily::Signal,
        formula: Formula::BitXor,
        description: "Bitwise XOR operation.",
    },
    FunctionDefinition {
        id: "x2_n",
        name: "X2(n)=n|6-n",
        family: FunctionFamily::Signal,
        formula: Formula::BitOr,
        description: "Bitwise OR operation.",
    },
    FunctionDefinition {
        id: "x3_n",
        name: "X3(n)=n&6-n",
        family: FunctionFamily::Signal,
        formula: Formula::BitAnd,
        description: "Bitwise AND operation.",
    },
    FunctionDefinition {
        id: "tesla_n",
        name: "Tesla(n)",
        family: FunctionFamily::Chaotic,
        formula: Formula::Tesla,
        description: "A chaotic, unpredictable function.",
    },
    FunctionDefinition {
        id: "b_n",
        name: "B(n)",
        family: FunctionFamily::SuperComputable,
        formula: Formula::SuperPolynomial,
        description: "Rapidly growing, super-polynomial function.",
    },
    FunctionDefinition {
        id: "bb_n",
        name: "BB(n)",
        family: FunctionFamily::SuperComputable,
        formula: Formula::ExponentialSine,
        description: "Represents exponential, \"uncomputable-like\" growth.",
    },
];

/// The whole catalog, in catalog order.
pub fn catalog() -> &'static [FunctionDefinition] {
    &FUNCTIONS
}

/// Find a catalog entry by identifier.
pub fn lookup(id: &str) -> Option<&'static FunctionDefinition> {
    FUNCTIONS.iter().find(|f| f.id == id)
}

/// Catalog entries belonging to `family`, in catalog order.
pub fn by_family(family: FunctionFamily) -> impl Iterator<Item = &'static FunctionDefinition> {
    FUNCTIONS.iter().filter(move |f| f.family == family)
}

/// A resolved generator: a catalog entry or the user-supplied series.
#[derive(Debug, Clone, Copy)]
pub enum HarmonicFunction<'a> {
    Catalog(&'static FunctionDefinition),
    Empirical(&'a EmpiricalSeries),
}

impl<'a> HarmonicFunction<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Self::Catalog(def) => def.id,
            Self::Empirical(_) => REAL_WORLD_ID,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::Catalog(def) => def.name,
            Self::Empirical(series) => &series.name,
        }
    }

    pub fn family(&self) -> FunctionFamily {
        match *self {
            Self::Catalog(def) => def.family,
            Self::Empirical(_) => FunctionFamily::RealWorld,
        }
    }

    pub fn description(&self) -> &'a str {
        match *self {
            Self::Catalog(def) => def.description,
            Self::Empirical(_) => "User-uploaded time series data.",
        }
    }

    /// Evaluate at absolute index `n`.
    #[inline]
    pub fn eval(&self, n: i64) -> f64 {
        match *self {
            Self::Catalog(def) => def.eval(n),
            Self::Empirical(series) => series.value_at(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(id: &str, n: i64) -> f64 {
        lookup(id).unwrap().eval(n)
    }

    #[test]
    fn test_catalog_ids_unique() {
        assert_eq!(catalog().len(), N_FUNCTIONS);
        for (i, a) in catalog().iter().enumerate() {
            for b in &FUNCTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
            assert_ne!(a.id, REAL_WORLD_ID);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("nope").is_none());
        assert!(lookup(REAL_WORLD_ID).is_none());
    }

    #[test]
    fn test_families() {
        assert_eq!(by_family(FunctionFamily::Polynomial).count(), 3);
        assert_eq!(by_family(FunctionFamily::Signal).count(), 3);
        assert_eq!(by_family(FunctionFamily::Chaotic).count(), 1);
        assert_eq!(by_family(FunctionFamily::SuperComputable).count(), 2);
        assert_eq!(by_family(FunctionFamily::RealWorld).count(), 0);
    }

    #[test]
    fn test_polynomial_family() {
        assert_eq!(f("s_n", 0), 0.0);
        assert_eq!(f("s_n", 42), 42.0);
        assert_eq!(f("t_n", 0), 0.0);
        assert!((f("t_n", 1) - std::f64::consts::LN_2).abs() < 1e-15);
        assert!((f("m_n", 10) - 10.0).abs() < 1e-12);
        assert!((f("m_n", 3) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_xor_scenario() {
        assert_eq!(f("x1_n", 0), 6.0);
        assert_eq!(f("x1_n", 6), -6.0);
        assert_eq!(f("x1_n", 1), 6.0);
    }

    #[test]
    fn test_or_and() {
        assert_eq!(f("x2_n", 0), 6.0);
        assert_eq!(f("x2_n", 7), 0.0);
        assert_eq!(f("x2_n", 8), 6.0);
        assert_eq!(f("x3_n", 0), 0.0);
        assert_eq!(f("x3_n", 6), 0.0);
        assert_eq!(f("x3_n", 1), -1.0);
        assert_eq!(f("x3_n", 15), -9.0);
    }

    #[test]
    fn test_bitwise_wraps_at_32_bits() {
        let n = (1i64 << 32) + 1;
        assert_eq!(f("x1_n", n), 7.0 - n as f64);
    }

    #[test]
    fn test_chaotic_and_super_computable_at_zero() {
        assert_eq!(f("tesla_n", 0), 0.0);
        assert_eq!(f("b_n", 0), 0.0);
        assert_eq!(f("bb_n", 0), 0.0);
    }

    #[test]
    fn test_super_computable_values() {
        assert!((f("b_n", 1) - 0.01).abs() < 1e-15);
        let expected = 1.5f64.powi(3) * 3f64.sin() * 5.0;
        assert!((f("bb_n", 3) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tesla_value() {
        let expected = 100.0 * (0.25f64).sin() * (0.5f64).cos();
        assert!((f("tesla_n", 5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overflow_passes_through() {
        let v = f("bb_n", 2000);
        assert!(!v.is_finite(), "expected overflow, got {v}");
    }

    #[test]
    fn test_empirical_variant() {
        let series = EmpiricalSeries::new("Rainfall", vec![2.0, 4.0, 8.0]);
        let func = HarmonicFunction::Empirical(&series);
        assert_eq!(func.id(), REAL_WORLD_ID);
        assert_eq!(func.name(), "Rainfall");
        assert_eq!(func.family(), FunctionFamily::RealWorld);
        assert_eq!(func.eval(1), 4.0);
        assert_eq!(func.eval(3), 0.0);
        assert_eq!(func.eval(-2), 0.0);
    }

    #[test]
    fn test_catalog_variant_delegates() {
        let func = HarmonicFunction::Catalog(lookup("x1_n").unwrap());
        assert_eq!(func.id(), "x1_n");
        assert_eq!(func.family(), FunctionFamily::Signal);
        assert_eq!(func.eval(6), -6.0);
    }
}
