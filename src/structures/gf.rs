//! Finite field constructor GF(p^n).
//!
//! This module provides:
//! - The `GF` struct: GF(p)[x]/(f(x)) for an irreducible `f` of degree `n`,
//!   either supplied by the caller (and verified) or found by a deterministic
//!   search over monic polynomials
//! - Frobenius, exponentiation, multiplicative order and primitive-element
//!   queries
//! - Trace and norm down to GF(p)

use core::fmt;

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::galois::automorphism::Automorphism;
use crate::galois::group::GaloisGroup;
use crate::structures::ext::{ExtElement, FieldExtension};
use crate::structures::fp::PrimeField;
use crate::structures::poly::{Poly, PolyRing};
use crate::utils::checked_pow;

/// The finite field GF(p^n), built as a simple extension of GF(p).
///
/// Elements are [`ExtElement<u64>`]: coefficient vectors over GF(p) in the
/// basis `1, α, ..., α^(n-1)`.
///
/// # Example
///
/// ```
/// use galext::{GF, Ring};
///
/// let gf9 = GF::new(3, 2).unwrap();
/// assert_eq!(gf9.order(), 9);
/// assert_eq!(gf9.modulus().coefficients(), &[1, 0, 1]); // x^2 + 1
///
/// let g = gf9.primitive_element().unwrap();
/// assert_eq!(gf9.multiplicative_order(&g), Some(8));
///
/// // Frobenius is the p-th power map
/// let a = gf9.element(&[2, 1]);
/// assert_eq!(gf9.frobenius(&a), gf9.pow(&a, 3));
/// ```
#[derive(Clone, Debug)]
pub struct GF {
    prime: u64,
    exponent: usize,
    order: u64,
    ext: FieldExtension<PrimeField>,
}

impl GF {
    /// Construct GF(p^n) with the first monic irreducible polynomial of degree
    /// `n` in enumeration order (see [`PolyRing::first_irreducible`]).
    ///
    /// # Errors
    ///
    /// - `Error::NotPrime` if `p` is not prime
    /// - `Error::InvalidDegree` if `n = 0`
    /// - `Error::OrderOverflow` if `p^n` does not fit in a `u64`
    pub fn new(p: u64, n: usize) -> Result<Self> {
        let (base, order) = Self::validate(p, n)?;
        let ring = PolyRing::new(base);
        let modulus = ring.first_irreducible(n)?;
        Self::from_parts(ring, &modulus, order)
    }

    /// Construct GF(p^n) from a caller-supplied polynomial (ascending coefficients).
    ///
    /// # Errors
    ///
    /// As [`GF::new`], plus `Error::DegreeMismatch` if the polynomial does not
    /// have degree `n` and `Error::NotIrreducible` if it factors over GF(p).
    pub fn with_modulus(p: u64, n: usize, coeffs: &[u64]) -> Result<Self> {
        let (base, order) = Self::validate(p, n)?;
        let ring = PolyRing::new(base);
        let modulus = ring.poly(coeffs.iter().map(|&c| base.element(c)).collect());

        if modulus.degree() != Some(n) {
            return Err(Error::DegreeMismatch {
                expected: n,
                got: modulus.degree(),
            });
        }
        if !ring.is_irreducible(&modulus) {
            return Err(Error::NotIrreducible);
        }

        Self::from_parts(ring, &modulus, order)
    }

    /// Construct GF(p^n) from a random monic irreducible polynomial.
    ///
    /// Uses rejection sampling: generate random monic polynomials until
    /// finding an irreducible one.
    #[cfg(feature = "rand")]
    pub fn with_random_modulus<R: rand::Rng + ?Sized>(
        rng: &mut R,
        p: u64,
        n: usize,
    ) -> Result<Self> {
        let (base, order) = Self::validate(p, n)?;
        let ring = PolyRing::new(base);

        loop {
            let mut coeffs: Vec<u64> = (0..n).map(|_| base.random_element(rng)).collect();
            coeffs.push(1); // monic

            let f = ring.poly(coeffs);
            if ring.is_irreducible(&f) {
                return Self::from_parts(ring, &f, order);
            }
        }
    }

    fn validate(p: u64, n: usize) -> Result<(PrimeField, u64)> {
        let base = PrimeField::new(p)?;
        if n == 0 {
            return Err(Error::InvalidDegree { degree: Some(0) });
        }
        let order = checked_pow(p, n).ok_or(Error::OrderOverflow {
            prime: p,
            exponent: n,
        })?;
        Ok((base, order))
    }

    fn from_parts(ring: PolyRing<PrimeField>, modulus: &Poly<u64>, order: u64) -> Result<Self> {
        let prime = ring.field().modulus();
        let ext = FieldExtension::from_poly(ring, modulus)?;
        tracing::debug!(
            prime,
            exponent = ext.degree(),
            modulus = %ext.poly_ring().render(ext.modulus()),
            "constructed finite field"
        );
        Ok(Self {
            prime,
            exponent: ext.degree(),
            order,
            ext,
        })
    }

    /// The characteristic `p`.
    pub fn characteristic(&self) -> u64 {
        self.prime
    }

    /// The extension degree `n` over GF(p).
    pub fn exponent(&self) -> usize {
        self.exponent
    }

    /// The number of elements `p^n`.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The prime subfield GF(p).
    pub fn prime_field(&self) -> &PrimeField {
        self.ext.base()
    }

    /// The underlying extension GF(p)[x]/(f).
    pub fn extension(&self) -> &FieldExtension<PrimeField> {
        &self.ext
    }

    /// The defining polynomial `f`.
    pub fn modulus(&self) -> &Poly<u64> {
        self.ext.modulus()
    }

    /// The generator `α` (class of `x`).
    pub fn generator(&self) -> &ExtElement<u64> {
        self.ext.generator()
    }

    /// Element `c_0 + c_1 α + ...` from integer coefficients (reduced mod p and mod f).
    pub fn element(&self, coeffs: &[u64]) -> ExtElement<u64> {
        let base = self.prime_field();
        self.ext
            .element(coeffs.iter().map(|&c| base.element(c)).collect())
    }

    /// All `p^n` elements, in enumeration order (starting `0, 1, ...`).
    pub fn elements(&self) -> Vec<ExtElement<u64>> {
        FiniteField::elements(&self.ext)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` for zero.
    pub fn reciprocal(&self, a: &ExtElement<u64>) -> Result<ExtElement<u64>> {
        self.ext.reciprocal(a)
    }

    /// Frobenius endomorphism: `a -> a^p`.
    pub fn frobenius(&self, a: &ExtElement<u64>) -> ExtElement<u64> {
        self.pow(a, self.prime)
    }

    /// `a^k` for `k >= 0`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NegativeExponent` if `k < 0`.
    pub fn power(&self, a: &ExtElement<u64>, k: i64) -> Result<ExtElement<u64>> {
        let exp = u64::try_from(k).map_err(|_| Error::NegativeExponent(k))?;
        Ok(self.pow(a, exp))
    }

    /// Multiplicative order of `a`, by iterated multiplication.
    ///
    /// Returns `None` for zero.
    pub fn multiplicative_order(&self, a: &ExtElement<u64>) -> Option<u64> {
        if a.is_zero() {
            return None;
        }

        let one = self.one();
        let mut acc = a.clone();
        let mut k = 1;
        while acc != one {
            if k >= self.order {
                return None;
            }
            acc = self.mul(&acc, a);
            k += 1;
        }
        Some(k)
    }

    /// Check if `a` generates the multiplicative group (order `p^n - 1`).
    pub fn is_primitive_element(&self, a: &ExtElement<u64>) -> bool {
        !a.is_zero() && self.multiplicative_order(a) == Some(self.order - 1)
    }

    /// The first primitive element in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoPrimitiveElement` if no element passes the test, which
    /// means the modulus was not irreducible after all.
    pub fn primitive_element(&self) -> Result<ExtElement<u64>> {
        self.elements()
            .into_iter()
            .find(|a| self.is_primitive_element(a))
            .ok_or(Error::NoPrimitiveElement { order: self.order })
    }

    /// The Frobenius conjugates `a, a^p, ..., a^(p^(n-1))`.
    pub fn conjugates(&self, a: &ExtElement<u64>) -> Vec<ExtElement<u64>> {
        let mut out = Vec::with_capacity(self.exponent);
        let mut current = a.clone();
        for _ in 0..self.exponent {
            let next = self.frobenius(&current);
            out.push(current);
            current = next;
        }
        out
    }

    /// Trace to GF(p): the sum of the Frobenius conjugates.
    pub fn trace(&self, a: &ExtElement<u64>) -> u64 {
        let sum = self
            .conjugates(a)
            .iter()
            .fold(self.zero(), |acc, c| self.add(&acc, c));
        sum.coeffs().first().copied().unwrap_or(0)
    }

    /// Norm to GF(p): the product of the Frobenius conjugates.
    pub fn norm(&self, a: &ExtElement<u64>) -> u64 {
        let prod = self
            .conjugates(a)
            .iter()
            .fold(self.one(), |acc, c| self.mul(&acc, c));
        prod.coeffs().first().copied().unwrap_or(0)
    }

    /// The Frobenius automorphism `α -> α^p`, a generator of Gal(GF(p^n)/GF(p)).
    pub fn frobenius_automorphism(&self) -> Automorphism<u64> {
        Automorphism::from_image(self.frobenius(self.generator()))
    }

    /// Gal(GF(p^n)/GF(p)), enumerated by root-finding.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingIdentity` if the enumeration is inconsistent.
    pub fn galois_group(&self) -> Result<GaloisGroup<PrimeField>> {
        GaloisGroup::new(self.ext.clone(), self.elements())
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> ExtElement<u64> {
        let base = self.prime_field();
        let coeffs = (0..self.exponent)
            .map(|_| base.random_element(rng))
            .collect();
        self.ext.element(coeffs)
    }
}

impl fmt::Display for GF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.prime, self.exponent)
    }
}

impl Ring for GF {
    type Elem = ExtElement<u64>;

    fn zero(&self) -> Self::Elem {
        self.ext.zero()
    }

    fn one(&self) -> Self::Elem {
        self.ext.one()
    }

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.ext.add(a, b)
    }

    fn neg(&self, a: &Self::Elem) -> Self::Elem {
        self.ext.neg(a)
    }

    fn normalize(&self, a: Self::Elem) -> Self::Elem {
        self.ext.normalize(a)
    }

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.ext.sub(a, b)
    }

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.ext.mul(a, b)
    }

    fn is_zero(&self, a: &Self::Elem) -> bool {
        a.is_zero()
    }
}

impl Field for GF {
    fn inverse(&self, a: &Self::Elem) -> Option<Self::Elem> {
        self.ext.inverse(a)
    }
}

impl FiniteField for GF {
    fn order(&self) -> u64 {
        self.order
    }

    fn characteristic(&self) -> u64 {
        self.prime
    }

    fn elements(&self) -> Vec<Self::Elem> {
        GF::elements(self)
    }
}
