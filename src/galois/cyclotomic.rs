//! Cyclotomic polynomials and roots of unity in finite fields.

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::structures::ext::ExtElement;
use crate::structures::fp::PrimeField;
use crate::structures::gf::GF;
use crate::structures::poly::{Poly, PolyRing};
use crate::utils::{divisors, gcd, multiplicative_order_mod};

/// The `n`-th cyclotomic polynomial over the field of `ring`.
///
/// Uses `x^n - 1 = ∏_{d | n} Φ_d`, building `Φ_d` for every divisor in
/// increasing order and dividing exactly.
///
/// # Errors
///
/// Returns `Error::InvalidCyclotomicIndex` for `n = 0`.
///
/// # Example
///
/// ```
/// use galext::{cyclotomic_polynomial, PolyRing, PrimeField};
///
/// let ring = PolyRing::new(PrimeField::new(3).unwrap());
/// let phi4 = cyclotomic_polynomial(&ring, 4).unwrap();
/// assert_eq!(phi4.coefficients(), &[1, 0, 1]); // x^2 + 1
/// ```
pub fn cyclotomic_polynomial<F: Field>(ring: &PolyRing<F>, n: u64) -> Result<Poly<F::Elem>> {
    if n == 0 {
        return Err(Error::InvalidCyclotomicIndex(0));
    }

    let divs = divisors(n);
    let mut table: Vec<(u64, Poly<F::Elem>)> = Vec::with_capacity(divs.len());

    for &d in &divs {
        let degree = usize::try_from(d).map_err(|_| Error::InvalidCyclotomicIndex(n))?;
        let x_d_minus_one = ring.sub(&ring.monomial(ring.field().one(), degree), &ring.one());

        let lower = table
            .iter()
            .filter(|(e, _)| d % e == 0)
            .fold(ring.one(), |acc, (_, phi)| ring.mul(&acc, phi));

        let phi = ring.exact_div(&x_d_minus_one, &lower)?;
        table.push((d, phi));
    }

    table
        .pop()
        .map(|(_, phi)| phi)
        .ok_or(Error::InvalidCyclotomicIndex(n))
}

/// The splitting field of `x^n - 1` over GF(p), for `gcd(n, p) = 1`.
///
/// Its degree over GF(p) is the multiplicative order of `p` modulo `n`, the
/// least `k` with `n | p^k - 1`.
#[derive(Clone, Debug)]
pub struct CyclotomicExtension {
    n: u64,
    splitting_degree: usize,
    polynomial: Poly<u64>,
    field: GF,
}

impl CyclotomicExtension {
    /// # Errors
    ///
    /// - `Error::InvalidCyclotomicIndex` if `n = 0`
    /// - `Error::NotPrime` if `p` is not prime
    /// - `Error::NotCoprime` if `p` divides `n`
    /// - any construction error of [`GF::new`] for the splitting field
    pub fn new(n: u64, p: u64) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidCyclotomicIndex(0));
        }
        let base = PrimeField::new(p)?;
        if gcd(n, p) != 1 {
            return Err(Error::NotCoprime { n, p });
        }

        let order = multiplicative_order_mod(p, n).ok_or(Error::NotCoprime { n, p })?;
        let splitting_degree =
            usize::try_from(order).map_err(|_| Error::InvalidCyclotomicIndex(n))?;

        let polynomial = cyclotomic_polynomial(&PolyRing::new(base), n)?;
        let field = GF::new(p, splitting_degree)?;

        tracing::debug!(n, p, splitting_degree, "constructed cyclotomic extension");
        Ok(Self {
            n,
            splitting_degree,
            polynomial,
            field,
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    /// `Φ_n` over GF(p).
    pub fn polynomial(&self) -> &Poly<u64> {
        &self.polynomial
    }

    /// `[GF(p^k) : GF(p)]`, with `k = ord_n(p)`.
    pub fn splitting_degree(&self) -> usize {
        self.splitting_degree
    }

    /// The splitting field GF(p^k).
    pub fn field(&self) -> &GF {
        &self.field
    }

    /// All `a` with `a^n = 1`.
    pub fn roots_of_unity(&self) -> Vec<ExtElement<u64>> {
        let one = self.field.one();
        self.field
            .elements()
            .into_iter()
            .filter(|a| self.field.pow(a, self.n) == one)
            .collect()
    }

    /// The `n`-th roots of unity that are not `k`-th roots for any `0 < k < n`.
    pub fn primitive_roots_of_unity(&self) -> Vec<ExtElement<u64>> {
        self.roots_of_unity()
            .into_iter()
            .filter(|a| self.field.multiplicative_order(a) == Some(self.n))
            .collect()
    }
}
