use core::fmt;

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::structures::poly::{Poly, PolyRing};
use crate::utils::checked_pow;

/// Element of a simple extension `L = K[x]/(p(x))`.
///
/// The canonical representative of a residue class: a polynomial over `K` of
/// degree strictly less than `deg p`, with no trailing zeros. Two elements are
/// equal iff their representatives are equal. An element is only meaningful
/// together with the [`FieldExtension`] that produced it.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ExtElement<T> {
    repr: Poly<T>,
}

impl<T> ExtElement<T> {
    /// Coefficients of the representative in ascending order (`a_0 + a_1 α + ...`).
    pub fn coeffs(&self) -> &[T] {
        self.repr.coefficients()
    }

    /// The representative polynomial.
    pub fn as_poly(&self) -> &Poly<T> {
        &self.repr
    }

    /// Check if this is the zero class.
    pub fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ext{:?}", self.repr.coefficients())
    }
}

/// Simple algebraic extension `L = K[x]/(p(x))` of a base field `K`.
///
/// The base field is injected as a [`Field`] capability, so `K` may be a prime
/// field, a [`GF`](crate::GF), or another `FieldExtension` (towers). Element
/// arithmetic reduces modulo `p` after every multiplication and inverts with
/// the extended Euclidean algorithm.
///
/// The modulus is stored monic; `α` (the class of `x`) is the distinguished
/// generator. `FieldExtension` itself implements [`Field`], and
/// [`FiniteField`] whenever `K` does.
///
/// Irreducibility of `p` is a caller-guaranteed precondition of
/// [`FieldExtension::new`]; over a finite base field
/// [`FieldExtension::new_checked`] verifies it eagerly.
///
/// # Example
///
/// ```
/// use galext::{Field, FieldExtension, PrimeField, Ring};
///
/// // GF(4) = GF(2)[x]/(x^2 + x + 1)
/// let f2 = PrimeField::new(2).unwrap();
/// let gf4 = FieldExtension::new(f2, vec![1, 1, 1]).unwrap();
///
/// let alpha = gf4.generator().clone();
/// let alpha_sq = gf4.mul(&alpha, &alpha);
/// // α^2 = α + 1
/// assert_eq!(alpha_sq, gf4.add(&alpha, &gf4.one()));
///
/// let inv = gf4.reciprocal(&alpha).unwrap();
/// assert_eq!(gf4.mul(&alpha, &inv), gf4.one());
/// ```
#[derive(Clone, Debug)]
pub struct FieldExtension<F: Field> {
    ring: PolyRing<F>,
    modulus: Poly<F::Elem>,
    degree: usize,
    generator: ExtElement<F::Elem>,
}

impl<F: Field> FieldExtension<F> {
    /// Build `K[x]/(p(x))` from the coefficients of `p` (ascending order).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDegree` if `p` has degree < 1.
    pub fn new(base: F, coeffs: Vec<F::Elem>) -> Result<Self> {
        let ring = PolyRing::new(base);
        let p = ring.poly(coeffs);
        Self::from_poly(ring, &p)
    }

    /// Build `K[x]/(p(x))` from a polynomial over an existing ring.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDegree` if `p` has degree < 1.
    pub fn from_poly(ring: PolyRing<F>, p: &Poly<F::Elem>) -> Result<Self> {
        let degree = match p.degree() {
            Some(d) if d >= 1 => d,
            other => return Err(Error::InvalidDegree { degree: other }),
        };
        let modulus = ring.monic(p).ok_or(Error::DivisionByZero)?;

        let x = ring.x();
        let generator = ExtElement {
            repr: ring.rem_by_monic(&x, &modulus),
        };

        Ok(Self {
            ring,
            modulus,
            degree,
            generator,
        })
    }

    /// The base field capability `K`.
    pub fn base(&self) -> &F {
        self.ring.field()
    }

    /// The polynomial ring `K[x]` the modulus lives in.
    pub fn poly_ring(&self) -> &PolyRing<F> {
        &self.ring
    }

    /// The (monic) defining polynomial `p`.
    pub fn modulus(&self) -> &Poly<F::Elem> {
        &self.modulus
    }

    /// The extension degree `[L : K] = deg p`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The generator `α`, the class of `x`.
    pub fn generator(&self) -> &ExtElement<F::Elem> {
        &self.generator
    }

    /// Reduce an arbitrary polynomial over `K` into `L`.
    pub fn element_from_poly(&self, p: &Poly<F::Elem>) -> ExtElement<F::Elem> {
        ExtElement {
            repr: self.ring.rem_by_monic(p, &self.modulus),
        }
    }

    /// The element `c_0 + c_1 α + c_2 α^2 + ...` (reduced modulo `p`).
    pub fn element(&self, coeffs: Vec<F::Elem>) -> ExtElement<F::Elem> {
        let p = self.ring.poly(coeffs);
        self.element_from_poly(&p)
    }

    /// Embed a base field element into `L`.
    pub fn embed(&self, k: F::Elem) -> ExtElement<F::Elem> {
        ExtElement {
            repr: self.ring.constant(k),
        }
    }

    /// Check whether `a` lies in the embedded copy of `K`.
    pub fn is_embedded(&self, a: &ExtElement<F::Elem>) -> bool {
        a.repr.degree().map_or(true, |d| d == 0)
    }

    /// Evaluate the representative of `a`, read as a polynomial over `K`, at `value`.
    pub fn evaluate(&self, a: &ExtElement<F::Elem>, value: &F::Elem) -> F::Elem {
        self.ring.eval(&a.repr, value)
    }

    /// Multiplicative inverse of `a`.
    ///
    /// Runs the extended Euclidean algorithm on `(a, p)`: with `g = s·a + t·p`
    /// and `g` constant, `a⁻¹ = s · lc(g)⁻¹`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if `a` is zero, and
    /// `Error::NotInvertible` if `gcd(a, p)` is not constant (only possible
    /// when the modulus is reducible).
    pub fn reciprocal(&self, a: &ExtElement<F::Elem>) -> Result<ExtElement<F::Elem>> {
        if a.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (g, s, _t) = self.ring.extended_gcd(&a.repr, &self.modulus)?;
        match g.degree() {
            Some(0) => {}
            Some(d) => return Err(Error::NotInvertible { gcd_degree: d }),
            None => return Err(Error::DivisionByZero),
        }

        let lc = g.leading_coeff().ok_or(Error::DivisionByZero)?;
        let lc_inv = self.base().inverse(lc).ok_or(Error::DivisionByZero)?;
        let inv = self.ring.scale(&s, &lc_inv);
        Ok(self.element_from_poly(&inv))
    }

    /// All elements of `L`, given all elements of `K`.
    ///
    /// Enumerates the cartesian product of coefficient tuples of length `n`
    /// (`|K|^n` elements). Element number `i` has coefficient `j` equal to the
    /// `j`-th base-`|K|` digit of `i`, so the list starts with `0, 1, ...` when
    /// `base_elements` does.
    pub fn elements(&self, base_elements: &[F::Elem]) -> Vec<ExtElement<F::Elem>> {
        let q = base_elements.len();
        if q == 0 {
            return Vec::new();
        }

        let count = checked_pow(q as u64, self.degree).unwrap_or(u64::MAX);
        let mut out = Vec::with_capacity(usize::try_from(count).unwrap_or(0));
        let mut digits = vec![0usize; self.degree];

        loop {
            let coeffs = digits.iter().map(|&d| base_elements[d].clone()).collect();
            out.push(ExtElement {
                repr: self.ring.poly(coeffs),
            });

            // Increment the little-endian counter.
            let mut pos = 0;
            loop {
                if pos == self.degree {
                    return out;
                }
                digits[pos] += 1;
                if digits[pos] < q {
                    break;
                }
                digits[pos] = 0;
                pos += 1;
            }
        }
    }

    /// Render an element as a polynomial in `α`.
    pub fn render(&self, a: &ExtElement<F::Elem>) -> String {
        self.ring.render_in(&a.repr, "α")
    }
}

impl<F: FiniteField> FieldExtension<F> {
    /// Like [`FieldExtension::new`], but verifies that `p` is irreducible.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDegree` if `p` has degree < 1 and
    /// `Error::NotIrreducible` if `p` factors over `K`.
    pub fn new_checked(base: F, coeffs: Vec<F::Elem>) -> Result<Self> {
        let ext = Self::new(base, coeffs)?;
        if !ext.ring.is_irreducible(&ext.modulus) {
            return Err(Error::NotIrreducible);
        }
        Ok(ext)
    }
}

/* ---- implement Ring ---- */

impl<F: Field> Ring for FieldExtension<F> {
    type Elem = ExtElement<F::Elem>;

    fn zero(&self) -> Self::Elem {
        ExtElement { repr: Poly::zero() }
    }

    fn one(&self) -> Self::Elem {
        self.embed(self.base().one())
    }

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        ExtElement {
            repr: self.ring.add(&a.repr, &b.repr),
        }
    }

    fn neg(&self, a: &Self::Elem) -> Self::Elem {
        ExtElement {
            repr: self.ring.neg(&a.repr),
        }
    }

    fn normalize(&self, a: Self::Elem) -> Self::Elem {
        let p = self.ring.canonical(a.repr);
        self.element_from_poly(&p)
    }

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        ExtElement {
            repr: self.ring.sub(&a.repr, &b.repr),
        }
    }

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let prod = self.ring.mul(&a.repr, &b.repr);
        self.element_from_poly(&prod)
    }

    fn is_zero(&self, a: &Self::Elem) -> bool {
        a.is_zero()
    }
}

/* ---- implement Field ---- */

impl<F: Field> Field for FieldExtension<F> {
    fn inverse(&self, a: &Self::Elem) -> Option<Self::Elem> {
        self.reciprocal(a).ok()
    }
}

impl<F: FiniteField> FiniteField for FieldExtension<F> {
    fn order(&self) -> u64 {
        checked_pow(self.base().order(), self.degree).unwrap_or(u64::MAX)
    }

    fn characteristic(&self) -> u64 {
        self.base().characteristic()
    }

    fn elements(&self) -> Vec<Self::Elem> {
        FieldExtension::elements(self, &self.base().elements())
    }
}
