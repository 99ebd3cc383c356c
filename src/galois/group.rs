//! Galois groups of finite simple extensions.
//!
//! This module provides:
//! - `GaloisGroup`: the enumerated K-automorphisms of `L = K(α)` as a [`Group`]
//! - Fixed fields and fixing subgroups
//! - Closure-based subgroup generation and enumeration
//! - Normality, commutativity and cyclicity queries

use std::collections::HashSet;

use crate::algebra::field::{Field, FiniteField};
use crate::algebra::group::Group;
use crate::error::{Error, Result};
use crate::galois::automorphism::Automorphism;
use crate::structures::ext::{ExtElement, FieldExtension};

/// Aut(L/K) for a simple extension, enumerated by root-finding over a finite
/// universe of candidate elements.
///
/// The automorphisms are kept in the order their generator images appear in
/// the universe, so the identity comes first whenever the universe lists `α`
/// before its conjugates. Subgroups are returned as sub-lists in that same
/// order, which makes them directly comparable.
///
/// # Example
///
/// ```
/// use galext::{GaloisGroup, GF};
///
/// let gf16 = GF::new(2, 4).unwrap();
/// let group = GaloisGroup::of(gf16.extension().clone()).unwrap();
/// assert_eq!(group.order(), 4);
/// assert!(group.is_galois());
/// assert!(group.is_cyclic());
/// assert_eq!(group.all_subgroups().unwrap().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GaloisGroup<F: Field> {
    extension: FieldExtension<F>,
    universe: Vec<ExtElement<F::Elem>>,
    automorphisms: Vec<Automorphism<F::Elem>>,
}

impl<F: Field> GaloisGroup<F> {
    /// Enumerate the automorphisms of `extension` whose generator images lie
    /// in `universe`.
    ///
    /// `universe` should be every element of `L`; it is also the element set
    /// that fixed fields are computed over.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingIdentity` if `α` itself is not in `universe`.
    pub fn new(extension: FieldExtension<F>, universe: Vec<ExtElement<F::Elem>>) -> Result<Self> {
        let automorphisms = extension.find_automorphisms(&universe);
        let identity = extension.identity_automorphism();
        if !automorphisms.contains(&identity) {
            return Err(Error::MissingIdentity);
        }

        Ok(Self {
            extension,
            universe,
            automorphisms,
        })
    }

    /// The extension this group acts on.
    pub fn extension(&self) -> &FieldExtension<F> {
        &self.extension
    }

    /// The candidate elements the group was enumerated from.
    pub fn universe(&self) -> &[ExtElement<F::Elem>] {
        &self.universe
    }

    /// All automorphisms, in universe order.
    pub fn automorphisms(&self) -> &[Automorphism<F::Elem>] {
        &self.automorphisms
    }

    /// `|Aut(L/K)|`.
    pub fn order(&self) -> usize {
        self.automorphisms.len()
    }

    /// Whether `|Aut(L/K)| = [L : K]`.
    pub fn is_galois(&self) -> bool {
        self.order() == self.extension.degree()
    }

    /// Whether `sigma` is one of the enumerated automorphisms.
    pub fn contains(&self, sigma: &Automorphism<F::Elem>) -> bool {
        self.automorphisms.contains(sigma)
    }

    /// The elements of `elements` fixed by every automorphism in `subgroup`.
    pub fn fixed_field(
        &self,
        subgroup: &[Automorphism<F::Elem>],
        elements: &[ExtElement<F::Elem>],
    ) -> Vec<ExtElement<F::Elem>> {
        elements
            .iter()
            .filter(|a| subgroup.iter().all(|s| self.extension.apply(s, a) == **a))
            .cloned()
            .collect()
    }

    /// The automorphisms fixing every element of `elements`.
    pub fn fixing_subgroup(&self, elements: &[ExtElement<F::Elem>]) -> Vec<Automorphism<F::Elem>> {
        self.automorphisms
            .iter()
            .filter(|s| elements.iter().all(|a| self.extension.apply(s, a) == *a))
            .cloned()
            .collect()
    }

    /// The subgroup generated by `generators`.
    ///
    /// Starts from the identity and the generators and adds products and
    /// inverses of current members until nothing new appears. The group is
    /// finite, so the iteration reaches a fixed point.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotAMember` if a generator (or anything generated from
    /// the generators) is not one of the enumerated automorphisms, and
    /// `Error::NoInverse` if the enumeration is not closed under inversion.
    pub fn generate(
        &self,
        generators: &[Automorphism<F::Elem>],
    ) -> Result<Vec<Automorphism<F::Elem>>> {
        if generators.iter().any(|g| !self.contains(g)) {
            return Err(Error::NotAMember);
        }

        let mut closed: HashSet<Automorphism<F::Elem>> = HashSet::new();
        closed.insert(self.identity());
        closed.extend(generators.iter().cloned());

        loop {
            let current: Vec<_> = closed.iter().cloned().collect();
            let mut grew = false;

            for a in &current {
                grew |= closed.insert(self.inverse(a)?);
                for b in &current {
                    grew |= closed.insert(self.op(a, b));
                }
            }

            if !grew {
                break;
            }
        }

        let members: Vec<_> = self
            .automorphisms
            .iter()
            .filter(|s| closed.contains(*s))
            .cloned()
            .collect();
        if members.len() != closed.len() {
            return Err(Error::NotAMember);
        }
        Ok(members)
    }

    /// All subgroups, sorted by order (trivial subgroup first, whole group last).
    ///
    /// Seeds the closure with every single automorphism and every pair, then
    /// deduplicates by member set. Every subgroup of a group whose subgroups
    /// need at most two generators is found, which covers the cyclic Galois
    /// groups of finite fields.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`GaloisGroup::generate`].
    pub fn all_subgroups(&self) -> Result<Vec<Vec<Automorphism<F::Elem>>>> {
        let mut subgroups = vec![self.generate(&[])?];

        for (i, a) in self.automorphisms.iter().enumerate() {
            push_unique(&mut subgroups, self.generate(std::slice::from_ref(a))?);
            for b in &self.automorphisms[i + 1..] {
                push_unique(&mut subgroups, self.generate(&[a.clone(), b.clone()])?);
            }
        }

        subgroups.sort_by_key(Vec::len);

        tracing::debug!(
            group_order = self.order(),
            subgroups = subgroups.len(),
            "enumerated subgroups"
        );
        Ok(subgroups)
    }

    /// Whether `g ∘ n ∘ g⁻¹` lies in `subgroup` for every `g` in the group and
    /// every `n` in `subgroup`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoInverse` if some `g` has no inverse in the group.
    pub fn is_normal_subgroup(&self, subgroup: &[Automorphism<F::Elem>]) -> Result<bool> {
        let members: HashSet<_> = subgroup.iter().collect();

        for g in &self.automorphisms {
            let g_inv = self.inverse(g)?;
            for n in subgroup {
                let conjugate = self.op(&self.op(&g_inv, n), g);
                if !members.contains(&conjugate) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Whether every pair of automorphisms commutes.
    pub fn is_abelian(&self) -> bool {
        self.automorphisms.iter().all(|a| {
            self.automorphisms
                .iter()
                .all(|b| self.op(a, b) == self.op(b, a))
        })
    }

    /// Whether some automorphism has order `|G|`.
    pub fn is_cyclic(&self) -> bool {
        let n = self.order();
        self.automorphisms
            .iter()
            .any(|s| self.element_order(s, n) == Some(n))
    }
}

impl<F: FiniteField> GaloisGroup<F> {
    /// Aut(L/K) with every element of `L` as the universe.
    ///
    /// # Errors
    ///
    /// As [`GaloisGroup::new`].
    pub fn of(extension: FieldExtension<F>) -> Result<Self> {
        let universe = FiniteField::elements(&extension);
        Self::new(extension, universe)
    }
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

impl<F: Field> Group for GaloisGroup<F> {
    type Elem = Automorphism<F::Elem>;

    fn identity(&self) -> Self::Elem {
        self.extension.identity_automorphism()
    }

    /// `a` first, then `b`.
    fn op(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.extension.compose(a, b)
    }

    fn inverse(&self, a: &Self::Elem) -> Result<Self::Elem> {
        self.extension.inverse_automorphism(a, &self.automorphisms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::ring::Ring;
    use crate::structures::fp::PrimeField;
    use crate::structures::gf::GF;

    fn group_of(p: u64, n: usize) -> GaloisGroup<PrimeField> {
        GF::new(p, n).unwrap().galois_group().unwrap()
    }

    #[test]
    fn gf4_group() {
        let ext = FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 1]).unwrap();
        let group = GaloisGroup::of(ext).unwrap();
        assert_eq!(group.order(), 2);
        assert!(group.is_galois());
        assert!(group.is_cyclic());
        assert!(group.is_abelian());
        assert_eq!(group.automorphisms()[0], group.identity());
    }

    #[test]
    fn group_orders_match_degree() {
        assert_eq!(group_of(2, 3).order(), 3);
        assert_eq!(group_of(3, 2).order(), 2);
        assert_eq!(group_of(2, 4).order(), 4);
        assert_eq!(group_of(5, 2).order(), 2);
    }

    #[test]
    fn partial_universe_is_not_galois() {
        let gf8 = GF::new(2, 3).unwrap();
        let ext = gf8.extension().clone();
        let only_alpha = vec![ext.zero(), ext.generator().clone()];
        let group = GaloisGroup::new(ext, only_alpha).unwrap();
        assert_eq!(group.order(), 1);
        assert!(!group.is_galois());
    }

    #[test]
    fn repeated_universe_elements_are_counted_once() {
        let ext = FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 1]).unwrap();
        let alpha = ext.generator().clone();
        let group = GaloisGroup::new(ext, vec![alpha.clone(), alpha.clone(), alpha]).unwrap();
        assert_eq!(group.order(), 1);
        assert!(!group.is_galois());

        let gf4 = GF::new(2, 2).unwrap();
        let mut universe = gf4.elements();
        universe.extend(gf4.elements());
        let group = GaloisGroup::new(gf4.extension().clone(), universe).unwrap();
        assert_eq!(group.order(), 2);
        assert!(group.is_galois());
    }

    #[test]
    fn universe_without_generator_fails() {
        let gf8 = GF::new(2, 3).unwrap();
        let ext = gf8.extension().clone();
        let universe = vec![ext.zero(), ext.one()];
        assert_eq!(
            GaloisGroup::new(ext, universe).unwrap_err(),
            Error::MissingIdentity
        );
    }

    #[test]
    fn group_laws() {
        let group = group_of(2, 4);
        let e = group.identity();
        for a in group.automorphisms() {
            assert_eq!(&group.op(a, &e), a);
            assert_eq!(&group.op(&e, a), a);
            let inv = group.inverse(a).unwrap();
            assert_eq!(group.op(a, &inv), e);
            for b in group.automorphisms() {
                let ab = group.op(a, b);
                assert!(group.contains(&ab));
                for c in group.automorphisms() {
                    assert_eq!(group.op(&ab, c), group.op(a, &group.op(b, c)));
                }
            }
        }
    }

    #[test]
    fn frobenius_generates_everything() {
        let gf16 = GF::new(2, 4).unwrap();
        let group = gf16.galois_group().unwrap();
        let frob = gf16.frobenius_automorphism();
        assert_eq!(group.generate(&[frob.clone()]).unwrap().len(), 4);
        assert_eq!(group.element_order(&frob, 4), Some(4));
        assert_eq!(group.pow(&frob, 4), group.identity());

        // σ^2 generates the index-2 subgroup
        let frob_sq = group.pow(&frob, 2);
        let h = group.generate(&[frob_sq]).unwrap();
        assert_eq!(h.len(), 2);
        assert_eq!(h[0], group.identity());
    }

    #[test]
    fn generate_rejects_foreign_automorphisms() {
        let gf16 = GF::new(2, 4).unwrap();
        let group = gf16.galois_group().unwrap();

        // α ↦ 2α lives in GF(9); its coefficients are not residues mod 2.
        let gf9 = GF::new(3, 2).unwrap();
        let foreign = gf9.frobenius_automorphism();
        assert_eq!(group.generate(&[foreign]), Err(Error::NotAMember));
    }

    #[test]
    fn subgroup_lattice_of_cyclic_groups() {
        // Gal(GF(p^n)/GF(p)) ≅ Z/n, with one subgroup per divisor of n.
        for (p, n, expected) in [(2, 2, 2), (2, 3, 2), (2, 4, 3), (3, 4, 3), (2, 6, 4)] {
            let group = group_of(p, n);
            let subgroups = group.all_subgroups().unwrap();
            assert_eq!(subgroups.len(), expected, "GF({p}^{n})");
            assert_eq!(subgroups[0].len(), 1);
            assert_eq!(subgroups[subgroups.len() - 1].len(), n);
            for h in &subgroups {
                assert_eq!(n % h.len(), 0);
                assert!(group.is_normal_subgroup(h).unwrap());
            }
        }
    }

    #[test]
    fn fixed_fields() {
        let gf16 = GF::new(2, 4).unwrap();
        let group = gf16.galois_group().unwrap();
        let ext = group.extension();
        let all = group.universe();

        let base = group.fixed_field(group.automorphisms(), all);
        assert_eq!(base, vec![ext.zero(), ext.one()]);

        let whole = group.fixed_field(&[group.identity()], all);
        assert_eq!(whole.len(), 16);

        // the fixed field of the order-2 subgroup is GF(4)
        let frob_sq = group.pow(&gf16.frobenius_automorphism(), 2);
        let h = group.generate(&[frob_sq]).unwrap();
        let gf4 = group.fixed_field(&h, all);
        assert_eq!(gf4.len(), 4);
        assert_eq!(group.fixing_subgroup(&gf4), h);
    }

    #[test]
    fn fixing_subgroup_extremes() {
        let group = group_of(3, 2);
        let ext = group.extension();
        assert_eq!(
            group.fixing_subgroup(&[ext.one()]),
            group.automorphisms().to_vec()
        );
        assert_eq!(
            group.fixing_subgroup(group.universe()),
            vec![group.identity()]
        );
    }

    #[test]
    fn tower_group_over_gf4() {
        // GF(16) as a quadratic extension of GF(4): the group only has the
        // automorphisms fixing GF(4).
        let gf4 = FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 1]).unwrap();
        let alpha = gf4.generator().clone();
        let tower = FieldExtension::new_checked(gf4.clone(), vec![alpha, gf4.one(), gf4.one()])
            .unwrap();
        let group = GaloisGroup::of(tower).unwrap();
        assert_eq!(group.order(), 2);
        assert!(group.is_galois());

        let fixed = group.fixed_field(group.automorphisms(), group.universe());
        assert_eq!(fixed.len(), 4);
        assert!(fixed.iter().all(|a| group.extension().is_embedded(a)));
    }
}
