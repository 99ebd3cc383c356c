use core::fmt::Debug;
use core::hash::Hash;

/// A commutative ring, given as a capability object.
///
/// The ring is a value that *knows how* to combine elements of type
/// [`Ring::Elem`]; the elements themselves carry no structure. The same element
/// type can therefore live in several rings at once (`u64` residues in
/// Z/2Z and in Z/3Z, coefficient vectors in different quotient rings).
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity `zero()`
/// - (R, ·) is a commutative monoid with identity `one()`
/// - multiplication distributes over addition.
pub trait Ring: Clone + Debug {
    /// Element type operated on by this ring.
    type Elem: Clone + Eq + Hash + Debug;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// `a + b`.
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `-a`.
    fn neg(&self, a: &Self::Elem) -> Self::Elem;

    /// `a · b`.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Canonical representative of `a`.
    ///
    /// Rings whose element type admits several encodings of the same value
    /// (unreduced residues, unreduced polynomials) map them to one; equality
    /// of elements is only meaningful after this.
    #[inline]
    fn normalize(&self, a: Self::Elem) -> Self::Elem {
        a
    }

    /// `a - b`.
    #[inline]
    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.add(a, &self.neg(b))
    }

    #[inline]
    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Elem) -> bool {
        *a == self.one()
    }

    /// `a^exp` using square-and-multiply.
    fn pow(&self, a: &Self::Elem, exp: u64) -> Self::Elem {
        let mut base = a.clone();
        let mut result = self.one();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }
}
