use core::fmt;
use core::fmt::Write as _;

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::utils::checked_pow;

/// Polynomial with coefficients of type `T`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector, and a
/// polynomial never carries a trailing zero coefficient. Because "zero" is a
/// property of the coefficient field rather than of `T`, polynomials are built
/// through a [`PolyRing`], which trims them into canonical form.
///
/// With the `serde` feature a polynomial serializes as its coefficient list.
/// Deserialized values should be passed back through [`PolyRing::canonical`].
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Poly<T> {
    coeffs: Vec<T>,
}

impl<T> Poly<T> {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Leading coefficient, `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Coefficients in ascending order of degree.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }
}

impl<T: fmt::Debug> fmt::Debug for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly{:?}", self.coeffs)
    }
}

/// Polynomial ring `F[x]` over a field capability `F`.
///
/// All arithmetic on [`Poly<F::Elem>`] goes through this type. The
/// algorithms are the textbook ones (schoolbook multiplication, long division,
/// iterative extended Euclid), which is all the finite instances in this
/// crate need.
///
/// # Example
///
/// ```
/// use galext::{PolyRing, PrimeField};
///
/// let ring = PolyRing::new(PrimeField::new(17).unwrap());
///
/// // (x + 1)(x - 1) = x^2 - 1
/// let a = ring.poly(vec![1, 1]);
/// let b = ring.poly(vec![16, 1]);
/// assert_eq!(ring.mul(&a, &b), ring.poly(vec![16, 0, 1]));
/// ```
#[derive(Clone, Debug)]
pub struct PolyRing<F> {
    field: F,
}

impl<F: Field> PolyRing<F> {
    /// Create `F[x]`.
    pub fn new(field: F) -> Self {
        Self { field }
    }

    /// The coefficient field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Create a polynomial from coefficients in ascending order.
    ///
    /// Each coefficient is normalized by the field, then trailing zeros are
    /// removed.
    pub fn poly(&self, coeffs: Vec<F::Elem>) -> Poly<F::Elem> {
        let mut coeffs: Vec<_> = coeffs
            .into_iter()
            .map(|c| self.field.normalize(c))
            .collect();
        while coeffs.last().is_some_and(|c| self.field.is_zero(c)) {
            coeffs.pop();
        }
        Poly { coeffs }
    }

    /// Re-trim a polynomial that may carry trailing zeros.
    pub fn canonical(&self, p: Poly<F::Elem>) -> Poly<F::Elem> {
        self.poly(p.coeffs)
    }

    /// Constant polynomial `c`.
    pub fn constant(&self, c: F::Elem) -> Poly<F::Elem> {
        self.poly(vec![c])
    }

    /// The constant polynomial `1`.
    pub fn one(&self) -> Poly<F::Elem> {
        self.constant(self.field.one())
    }

    /// The polynomial `x`.
    pub fn x(&self) -> Poly<F::Elem> {
        self.monomial(self.field.one(), 1)
    }

    /// Monomial `c * x^n`.
    pub fn monomial(&self, c: F::Elem, n: usize) -> Poly<F::Elem> {
        let c = self.field.normalize(c);
        if self.field.is_zero(&c) {
            return Poly::zero();
        }
        let mut coeffs = vec![self.field.zero(); n + 1];
        coeffs[n] = c;
        Poly { coeffs }
    }

    /// Coefficient of `x^i` (zero beyond the degree).
    pub fn coeff(&self, p: &Poly<F::Elem>, i: usize) -> F::Elem {
        p.coeffs.get(i).cloned().unwrap_or_else(|| self.field.zero())
    }

    pub fn add(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Poly<F::Elem> {
        let max_len = a.coeffs.len().max(b.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| self.field.add(&self.coeff(a, i), &self.coeff(b, i)))
            .collect();
        self.poly(coeffs)
    }

    pub fn neg(&self, a: &Poly<F::Elem>) -> Poly<F::Elem> {
        let coeffs = a.coeffs.iter().map(|c| self.field.neg(c)).collect();
        Poly { coeffs }
    }

    pub fn sub(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Poly<F::Elem> {
        let max_len = a.coeffs.len().max(b.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| self.field.sub(&self.coeff(a, i), &self.coeff(b, i)))
            .collect();
        self.poly(coeffs)
    }

    /// Polynomial multiplication using naive O(n*m) convolution.
    pub fn mul(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Poly<F::Elem> {
        if a.is_zero() || b.is_zero() {
            return Poly::zero();
        }

        let n = a.coeffs.len();
        let m = b.coeffs.len();
        let mut coeffs = vec![self.field.zero(); n + m - 1];

        for (i, ai) in a.coeffs.iter().enumerate() {
            for (j, bj) in b.coeffs.iter().enumerate() {
                let term = self.field.mul(ai, bj);
                coeffs[i + j] = self.field.add(&coeffs[i + j], &term);
            }
        }

        self.poly(coeffs)
    }

    /// Scalar multiplication `c * p`.
    pub fn scale(&self, p: &Poly<F::Elem>, c: &F::Elem) -> Poly<F::Elem> {
        if self.field.is_zero(c) {
            return Poly::zero();
        }
        let coeffs = p.coeffs.iter().map(|a| self.field.mul(a, c)).collect();
        self.poly(coeffs)
    }

    /// Make the polynomial monic by dividing by its leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn monic(&self, p: &Poly<F::Elem>) -> Option<Poly<F::Elem>> {
        let lc = p.leading_coeff()?;
        let lc_inv = self.field.inverse(lc)?;
        Some(self.scale(p, &lc_inv))
    }

    /// Euclidean division: returns `(q, r)` with `a = q*b + r` and `deg r < deg b`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if `b` is the zero polynomial.
    pub fn div_rem(
        &self,
        a: &Poly<F::Elem>,
        b: &Poly<F::Elem>,
    ) -> Result<(Poly<F::Elem>, Poly<F::Elem>)> {
        let (Some(b_deg), Some(b_lc)) = (b.degree(), b.leading_coeff()) else {
            return Err(Error::DivisionByZero);
        };
        let lc_inv = self.field.inverse(b_lc).ok_or(Error::DivisionByZero)?;

        let Some(a_deg) = a.degree() else {
            return Ok((Poly::zero(), Poly::zero()));
        };
        if a_deg < b_deg {
            return Ok((Poly::zero(), a.clone()));
        }

        let mut quotient = vec![self.field.zero(); a_deg - b_deg + 1];
        let mut remainder = a.coeffs.clone();

        for i in (0..=(a_deg - b_deg)).rev() {
            let coeff = self.field.mul(&remainder[i + b_deg], &lc_inv);
            if self.field.is_zero(&coeff) {
                continue;
            }
            for (j, bj) in b.coeffs.iter().enumerate() {
                let term = self.field.mul(&coeff, bj);
                remainder[i + j] = self.field.sub(&remainder[i + j], &term);
            }
            quotient[i] = coeff;
        }

        remainder.truncate(b_deg);
        Ok((self.poly(quotient), self.poly(remainder)))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Result<Poly<F::Elem>> {
        self.div_rem(a, b).map(|(_, r)| r)
    }

    /// Reduce `a` modulo a monic polynomial `m`.
    ///
    /// Never needs a field inversion, so it cannot fail. `m` must be monic and
    /// non-constant; this is what [`FieldExtension`](crate::FieldExtension)
    /// uses after every multiplication.
    pub fn rem_by_monic(&self, a: &Poly<F::Elem>, m: &Poly<F::Elem>) -> Poly<F::Elem> {
        let Some(m_deg) = m.degree() else {
            return a.clone();
        };
        debug_assert!(
            m.leading_coeff().is_some_and(|c| self.field.is_one(c)),
            "rem_by_monic requires a monic modulus"
        );

        let mut remainder = a.coeffs.clone();
        while remainder.len() > m_deg {
            let top = remainder.len() - 1;
            let coeff = remainder[top].clone();
            if !self.field.is_zero(&coeff) {
                let shift = top - m_deg;
                for (j, mj) in m.coeffs.iter().enumerate() {
                    let term = self.field.mul(&coeff, mj);
                    remainder[shift + j] = self.field.sub(&remainder[shift + j], &term);
                }
            }
            remainder.pop();
        }

        self.poly(remainder)
    }

    /// Exact division `a / b`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if `b` is zero and
    /// `Error::InexactDivision` if `b` does not divide `a`.
    pub fn exact_div(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Result<Poly<F::Elem>> {
        let (q, r) = self.div_rem(a, b)?;
        if !r.is_zero() {
            return Err(Error::InexactDivision);
        }
        Ok(q)
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, s, t)` such that `g = s*a + t*b` and `g` is a greatest
    /// common divisor of `a` and `b`. `g` is *not* normalized: callers that
    /// need the monic gcd should use [`PolyRing::gcd`], and callers inverting
    /// modulo `b` scale `s` by `lc(g)⁻¹`.
    pub fn extended_gcd(
        &self,
        a: &Poly<F::Elem>,
        b: &Poly<F::Elem>,
    ) -> Result<(Poly<F::Elem>, Poly<F::Elem>, Poly<F::Elem>)> {
        let (mut r0, mut r1) = (a.clone(), b.clone());
        let (mut s0, mut s1) = (self.one(), Poly::zero());
        let (mut t0, mut t1) = (Poly::zero(), self.one());

        while !r1.is_zero() {
            let (q, r) = self.div_rem(&r0, &r1)?;

            // r = r0 - q*r1, and the Bezout coefficients follow the same recurrence.
            let s = self.sub(&s0, &self.mul(&q, &s1));
            let t = self.sub(&t0, &self.mul(&q, &t1));

            r0 = core::mem::replace(&mut r1, r);
            s0 = core::mem::replace(&mut s1, s);
            t0 = core::mem::replace(&mut t1, t);
        }

        Ok((r0, s0, t0))
    }

    /// Monic greatest common divisor (zero if both inputs are zero).
    pub fn gcd(&self, a: &Poly<F::Elem>, b: &Poly<F::Elem>) -> Result<Poly<F::Elem>> {
        let (g, _, _) = self.extended_gcd(a, b)?;
        Ok(self.monic(&g).unwrap_or(g))
    }

    /// Evaluate the polynomial at `x` using Horner's method.
    pub fn eval(&self, p: &Poly<F::Elem>, x: &F::Elem) -> F::Elem {
        p.coeffs.iter().rev().fold(self.field.zero(), |acc, c| {
            self.field.add(&self.field.mul(&acc, x), c)
        })
    }

    /// Compute `base^exp mod modulus` using repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if the modulus is zero.
    pub fn powmod(
        &self,
        base: &Poly<F::Elem>,
        exp: u64,
        modulus: &Poly<F::Elem>,
    ) -> Result<Poly<F::Elem>> {
        let mut b = self.rem(base, modulus)?;
        let mut result = self.rem(&self.one(), modulus)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = self.rem(&self.mul(&result, &b), modulus)?;
            }
            e >>= 1;
            if e > 0 {
                b = self.rem(&self.mul(&b, &b), modulus)?;
            }
        }

        Ok(result)
    }

    /// Human-readable rendering, e.g. `1 + x + x^2`.
    pub fn render(&self, p: &Poly<F::Elem>) -> String {
        self.render_in(p, "x")
    }

    /// Like [`PolyRing::render`], with `var` as the indeterminate.
    pub fn render_in(&self, p: &Poly<F::Elem>, var: &str) -> String {
        if p.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, coeff) in p.coeffs.iter().enumerate() {
            if self.field.is_zero(coeff) {
                continue;
            }
            if !out.is_empty() {
                out.push_str(" + ");
            }

            let one = self.field.is_one(coeff);
            // Writing into a String cannot fail.
            let _ = match i {
                0 => write!(out, "{coeff:?}"),
                1 if one => write!(out, "{var}"),
                1 => write!(out, "{coeff:?}*{var}"),
                _ if one => write!(out, "{var}^{i}"),
                _ => write!(out, "{coeff:?}*{var}^{i}"),
            };
        }
        out
    }
}

impl<F: FiniteField> PolyRing<F> {
    /// Roots of `p` among all elements of the coefficient field.
    pub fn roots(&self, p: &Poly<F::Elem>) -> Vec<F::Elem> {
        self.field
            .elements()
            .into_iter()
            .filter(|e| self.field.is_zero(&self.eval(p, e)))
            .collect()
    }

    /// Test if `f` is irreducible over the (finite) coefficient field.
    ///
    /// - degree 1: always irreducible
    /// - degree 2 or 3: irreducible iff it has no root
    /// - degree > 3: distinct-degree test. With `q = |F|`, `f` is irreducible
    ///   iff `gcd(f, x^(q^i) - x) = 1` for every `1 <= i <= deg/2`, since
    ///   `x^(q^i) - x` is the product of all monic irreducibles whose degree
    ///   divides `i`.
    ///
    /// Returns `false` for constant or zero polynomials.
    pub fn is_irreducible(&self, f: &Poly<F::Elem>) -> bool {
        let n = match f.degree() {
            None | Some(0) => return false,
            Some(1) => return true,
            Some(d) => d,
        };

        if n <= 3 {
            return self.roots(f).is_empty();
        }

        // Irreducibility is preserved under scaling.
        let Some(f) = self.monic(f) else {
            return false;
        };

        let q = self.field.order();
        let x = self.x();
        let Ok(mut h) = self.powmod(&x, q, &f) else {
            return false;
        };

        for _ in 1..=n / 2 {
            let h_minus_x = self.sub(&h, &x);
            match self.gcd(&f, &h_minus_x) {
                Ok(g) if g.degree() == Some(0) => {}
                _ => return false,
            }
            h = match self.powmod(&h, q, &f) {
                Ok(next) => next,
                Err(_) => return false,
            };
        }

        true
    }

    /// The `index`-th monic polynomial of degree `n` in enumeration order.
    ///
    /// The lower `n` coefficients are the base-`q` digits of `index` (least
    /// significant digit = constant term), each digit mapped through
    /// `F::elements()`.
    pub fn monic_by_index(&self, n: usize, index: u64, elements: &[F::Elem]) -> Poly<F::Elem> {
        let q = elements.len() as u64;
        let mut coeffs = Vec::with_capacity(n + 1);
        let mut rest = index;
        for _ in 0..n {
            // `rest % q < q = elements.len()`.
            coeffs.push(elements[(rest % q) as usize].clone());
            rest /= q;
        }
        coeffs.push(self.field.one());
        self.poly(coeffs)
    }

    /// First monic irreducible polynomial of degree `n` in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDegree` if `n = 0`, `Error::OrderOverflow` if
    /// `q^n` does not fit in a `u64`, and `Error::NoIrreduciblePolynomial` if
    /// the enumeration is exhausted (impossible over a genuine finite field).
    pub fn first_irreducible(&self, n: usize) -> Result<Poly<F::Elem>> {
        if n == 0 {
            return Err(Error::InvalidDegree { degree: Some(0) });
        }

        let q = self.field.order();
        let count = checked_pow(q, n).ok_or(Error::OrderOverflow {
            prime: self.field.characteristic(),
            exponent: n,
        })?;
        let elements = self.field.elements();

        for index in 0..count {
            let candidate = self.monic_by_index(n, index, &elements);
            if self.is_irreducible(&candidate) {
                tracing::debug!(
                    degree = n,
                    index,
                    poly = %self.render(&candidate),
                    "selected irreducible polynomial"
                );
                return Ok(candidate);
            }
            tracing::trace!(degree = n, index, "rejected reducible candidate");
        }

        Err(Error::NoIrreduciblePolynomial {
            base_order: q,
            degree: n,
        })
    }
}
