//! Error types for galext.
//!
//! Precondition violations are reported at construction time, domain errors at
//! the offending operation, and search exhaustion whenever a finite search that
//! the algebra says must succeed comes back empty. Verification of the Galois
//! correspondence is deliberately *not* an error: see
//! [`CorrespondenceReport`](crate::galois::CorrespondenceReport).

use thiserror::Error;

/// The main error type for galext.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Precondition Violations ============
    /// A defining polynomial must have degree at least 1.
    #[error("defining polynomial must have degree >= 1, got {degree:?}")]
    InvalidDegree {
        /// Degree of the rejected polynomial (`None` for the zero polynomial).
        degree: Option<usize>,
    },

    /// A supplied polynomial does not have the requested degree.
    #[error("degree mismatch: expected {expected}, got {got:?}")]
    DegreeMismatch {
        /// Requested extension degree.
        expected: usize,
        /// Degree of the supplied polynomial.
        got: Option<usize>,
    },

    /// The characteristic must be prime.
    #[error("{0} is not prime")]
    NotPrime(u64),

    /// Exponents of `GF::power` must be non-negative.
    #[error("exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    /// Cyclotomic extensions of GF(p) need `gcd(n, p) = 1`.
    #[error("cyclotomic index {n} is not coprime to the characteristic {p}")]
    NotCoprime {
        /// Cyclotomic index.
        n: u64,
        /// Characteristic.
        p: u64,
    },

    /// The cyclotomic index must be positive.
    #[error("cyclotomic index must be >= 1, got {0}")]
    InvalidCyclotomicIndex(u64),

    /// `p^n` does not fit in a `u64`.
    #[error("field order {prime}^{exponent} overflows u64")]
    OrderOverflow {
        /// Characteristic.
        prime: u64,
        /// Extension degree.
        exponent: usize,
    },

    // ============ Domain Errors ============
    /// Division by the zero element (or the zero polynomial).
    #[error("division by zero")]
    DivisionByZero,

    /// A non-zero residue shares a factor with a reducible modulus.
    #[error("element is not invertible: gcd with the modulus has degree {gcd_degree}")]
    NotInvertible {
        /// Degree of `gcd(a, p)`.
        gcd_degree: usize,
    },

    /// Exact polynomial division left a non-zero remainder.
    #[error("polynomial division is not exact")]
    InexactDivision,

    // ============ Search Exhaustion / Structural Errors ============
    /// The defining polynomial is reducible over the base field.
    #[error("polynomial is not irreducible")]
    NotIrreducible,

    /// A proposed generator image is not a root of the minimal polynomial.
    #[error("generator image is not a root of the defining polynomial")]
    NotARoot,

    /// No inverse was found among the supplied automorphisms.
    #[error("no inverse found among {candidates} automorphisms")]
    NoInverse {
        /// Number of automorphisms searched.
        candidates: usize,
    },

    /// No element passed the primitivity test.
    #[error("no primitive element found in GF({order})")]
    NoPrimitiveElement {
        /// Order of the field that was searched.
        order: u64,
    },

    /// The monic enumeration ran out without finding an irreducible polynomial.
    #[error("no irreducible polynomial of degree {degree} found over a field of order {base_order}")]
    NoIrreduciblePolynomial {
        /// Order of the base field.
        base_order: u64,
        /// Requested degree.
        degree: usize,
    },

    /// The identity automorphism was not among the enumerated automorphisms.
    #[error("identity automorphism missing: candidate elements do not contain the generator")]
    MissingIdentity,

    /// A proposed subgroup generator is not an element of the group.
    #[error("automorphism is not a member of the Galois group")]
    NotAMember,
}

/// A specialized `Result` type for galext operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
