use core::fmt;

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::utils::is_prime;

/// Prime field GF(p) = Z/pZ with the modulus chosen at runtime.
///
/// Elements are plain `u64` residues in `[0, p-1]`; the `PrimeField` value
/// supplies the arithmetic. Products are computed in `u128`, so any prime
/// that fits in a `u64` is supported, including `p = 2`.
///
/// # Example
///
/// ```
/// use galext::{Field, PrimeField, Ring};
///
/// let f7 = PrimeField::new(7).unwrap();
/// assert_eq!(f7.add(&5, &4), 2);
/// assert_eq!(f7.mul(&3, &5), 1);
/// assert_eq!(f7.inverse(&3), Some(5));
/// assert_eq!(f7.inverse(&0), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PrimeFieldRepr")
)]
pub struct PrimeField {
    p: u64,
}

/// Unvalidated wire form; deserialization goes through [`PrimeField::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PrimeFieldRepr {
    p: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<PrimeFieldRepr> for PrimeField {
    type Error = Error;

    fn try_from(repr: PrimeFieldRepr) -> Result<Self> {
        Self::new(repr.p)
    }
}

impl PrimeField {
    /// Create GF(p).
    ///
    /// # Errors
    ///
    /// Returns `Error::NotPrime` if `p` is not prime.
    pub fn new(p: u64) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrime(p));
        }
        Ok(Self { p })
    }

    /// The modulus `p`.
    pub const fn modulus(&self) -> u64 {
        self.p
    }

    /// Reduce an integer into `[0, p-1]`.
    #[inline]
    pub const fn element(&self, value: u64) -> u64 {
        value % self.p
    }

    /// Reduce a signed integer into `[0, p-1]`.
    pub fn element_signed(&self, value: i64) -> u64 {
        let r = i128::from(value).rem_euclid(i128::from(self.p));
        // r lies in [0, p) so it fits in u64.
        r as u64
    }

    /// Sample a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(0..self.p)
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/* ---- implement Ring ---- */

impl Ring for PrimeField {
    type Elem = u64;

    #[inline]
    fn zero(&self) -> u64 {
        0
    }

    #[inline]
    fn one(&self) -> u64 {
        1
    }

    #[inline]
    fn add(&self, a: &u64, b: &u64) -> u64 {
        let sum = u128::from(*a) + u128::from(*b);
        (sum % u128::from(self.p)) as u64
    }

    #[inline]
    fn neg(&self, a: &u64) -> u64 {
        let a = a % self.p;
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    #[inline]
    fn normalize(&self, a: u64) -> u64 {
        a % self.p
    }

    #[inline]
    fn mul(&self, a: &u64, b: &u64) -> u64 {
        let prod = u128::from(*a) * u128::from(*b);
        (prod % u128::from(self.p)) as u64
    }
}

/* ---- implement Field ---- */

impl Field for PrimeField {
    fn inverse(&self, a: &u64) -> Option<u64> {
        let a = a % self.p;
        if a == 0 {
            return None;
        }

        let m = i128::from(self.p);
        let (g, x, _) = egcd(i128::from(a), m);
        if g != 1 {
            return None;
        }

        Some(x.rem_euclid(m) as u64)
    }
}

impl FiniteField for PrimeField {
    fn order(&self) -> u64 {
        self.p
    }

    fn characteristic(&self) -> u64 {
        self.p
    }

    fn elements(&self) -> Vec<u64> {
        (0..self.p).collect()
    }
}

/* ---- internal helper: extended Euclidean algorithm ---- */

/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x1, y1) = egcd(b, a % b);
        (g, y1, x1 - (a / b) * y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_composite() {
        assert_eq!(PrimeField::new(15), Err(Error::NotPrime(15)));
        assert_eq!(PrimeField::new(1), Err(Error::NotPrime(1)));
        assert!(PrimeField::new(2).is_ok());
    }

    #[test]
    fn add_and_neg() {
        let f = PrimeField::new(17).unwrap();
        assert_eq!(f.add(&5, &13), 1); // 18 ≡ 1 (mod 17)
        assert_eq!(f.neg(&5), 12);
        assert_eq!(f.neg(&0), 0);
        assert_eq!(f.sub(&3, &5), 15);
    }

    #[test]
    fn mul_basic() {
        let f = PrimeField::new(17).unwrap();
        assert_eq!(f.mul(&3, &6), 1);
        assert_eq!(f.mul(&0, &6), 0);
    }

    #[test]
    fn inverse_all_nonzero() {
        let f = PrimeField::new(101).unwrap();
        for a in 1..101 {
            let inv = f.inverse(&a).unwrap();
            assert_eq!(f.mul(&a, &inv), 1);
        }
        assert_eq!(f.inverse(&0), None);
    }

    #[test]
    fn characteristic_two() {
        let f = PrimeField::new(2).unwrap();
        assert_eq!(f.add(&1, &1), 0);
        assert_eq!(f.neg(&1), 1);
        assert_eq!(f.inverse(&1), Some(1));
        assert_eq!(f.elements(), vec![0, 1]);
    }

    #[test]
    fn pow_fermat() {
        let f = PrimeField::new(17).unwrap();
        assert_eq!(f.pow(&3, 0), 1);
        assert_eq!(f.pow(&3, 16), 1);
        assert_eq!(f.pow(&3, 2), 9);
    }

    #[test]
    fn large_prime_no_overflow() {
        let p = 4_294_967_311; // smallest prime above 2^32
        let f = PrimeField::new(p).unwrap();
        let a = p - 1;
        assert_eq!(f.mul(&a, &a), 1); // (-1)^2
        assert_eq!(f.add(&a, &a), p - 2);
    }

    #[test]
    fn signed_elements() {
        let f = PrimeField::new(7).unwrap();
        assert_eq!(f.element_signed(-1), 6);
        assert_eq!(f.element_signed(-15), 6);
        assert_eq!(f.element(23), 2);
    }

    #[test]
    fn normalize_reduces_residues() {
        let f = PrimeField::new(2).unwrap();
        assert_eq!(f.normalize(3), 1);
        assert_eq!(f.normalize(2), 0);
        assert!(f.is_zero(&f.normalize(4)));
    }
}
