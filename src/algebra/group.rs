use core::fmt::Debug;
use core::hash::Hash;

use crate::error::Result;

/// Abstract group with a single binary operation, written multiplicatively.
///
/// Like [`Ring`](super::ring::Ring) this is a capability object: the group
/// knows how to combine its elements.
///
/// Laws (you should test these for concrete types):
/// - associativity: (ab)c = a(bc)
/// - identity: e * a = a * e = a
/// - inverse: a * a⁻¹ = a⁻¹ * a = e
pub trait Group {
    /// Element type of the group.
    type Elem: Clone + Eq + Hash + Debug;

    /// Identity element `e`.
    fn identity(&self) -> Self::Elem;

    /// Group operation `a * b`.
    fn op(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Inverse element a⁻¹.
    ///
    /// Fallible because some groups find inverses by searching a finite set
    /// of elements rather than constructing them.
    fn inverse(&self, a: &Self::Elem) -> Result<Self::Elem>;

    /// Exponentiation by a non-negative integer using square-and-multiply.
    fn pow(&self, a: &Self::Elem, exp: u64) -> Self::Elem {
        let mut base = a.clone();
        let mut result = self.identity();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = self.op(&result, &base);
            }
            base = self.op(&base, &base);
            e >>= 1;
        }
        result
    }

    /// Order of `a`: the least `k >= 1` with `a^k = e`, searching `k <= bound`.
    fn element_order(&self, a: &Self::Elem, bound: usize) -> Option<usize> {
        let e = self.identity();
        let mut acc = a.clone();
        for k in 1..=bound {
            if acc == e {
                return Some(k);
            }
            acc = self.op(&acc, a);
        }
        None
    }
}
