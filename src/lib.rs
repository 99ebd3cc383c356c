//! Finite simple field extensions and their Galois groups.
//!
//! Build `L = K[x]/(p(x))` over any [`Field`] capability, enumerate the
//! `K`-automorphisms of `L` by root-finding, and check the fundamental theorem
//! of Galois theory on the resulting subgroup / fixed-field table.
//!
//! ```
//! use galext::{GaloisCorrespondence, GF};
//!
//! let gf64 = GF::new(2, 6).unwrap();
//! let group = gf64.galois_group().unwrap();
//! assert_eq!(group.order(), 6);
//!
//! let report = GaloisCorrespondence::new(&group).verify().unwrap();
//! assert!(report.is_valid());
//! assert_eq!(report.entries.len(), 4); // subgroups of Z/6
//! ```

pub mod algebra;
pub mod error;
pub mod galois;
pub mod structures;
pub mod utils;

pub use algebra::field::{Field, FiniteField};
pub use algebra::group::Group;
pub use algebra::ring::Ring;

pub use error::{Error, Result};

pub use galois::{
    cyclotomic_polynomial, Automorphism, CorrespondenceEntry, CorrespondenceReport,
    CyclotomicExtension, GaloisCorrespondence, GaloisGroup,
};

pub use structures::ext::{ExtElement, FieldExtension};
pub use structures::fp::PrimeField;
pub use structures::gf::GF;
pub use structures::poly::{Poly, PolyRing};
pub use utils::{divisors, euler_phi, gcd, is_prime, multiplicative_order_mod};
