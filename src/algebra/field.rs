use super::ring::Ring;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`, if it exists.
    ///
    /// For a true field:
    /// - `a == zero()`  ⇒  `None`
    /// - otherwise      ⇒  `Some(a⁻¹)`
    fn inverse(&self, a: &Self::Elem) -> Option<Self::Elem>;

    /// Safe division: returns `None` on division by zero.
    #[inline]
    fn try_div(&self, a: &Self::Elem, b: &Self::Elem) -> Option<Self::Elem> {
        self.inverse(b).map(|inv| self.mul(a, &inv))
    }
}

/// A field with finitely many elements that can be listed.
///
/// Everything that searches a field exhaustively (root finding, irreducibility
/// testing, automorphism enumeration) is written against this trait.
pub trait FiniteField: Field {
    /// Number of elements.
    fn order(&self) -> u64;

    /// The prime `p` with `p · 1 = 0`.
    fn characteristic(&self) -> u64;

    /// All elements, in a fixed order that starts with `zero()`.
    fn elements(&self) -> Vec<Self::Elem>;
}
