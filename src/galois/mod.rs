//! Automorphisms, Galois groups and the Galois correspondence.

pub mod automorphism;
pub mod correspondence;
pub mod cyclotomic;
pub mod group;

pub use automorphism::Automorphism;
pub use correspondence::{CorrespondenceEntry, CorrespondenceReport, GaloisCorrespondence};
pub use cyclotomic::{cyclotomic_polynomial, CyclotomicExtension};
pub use group::GaloisGroup;
