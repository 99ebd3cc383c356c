use core::fmt;
use std::collections::HashSet;

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{Error, Result};
use crate::structures::ext::{ExtElement, FieldExtension};
use crate::structures::poly::Poly;

/// A `K`-automorphism of a simple extension `L = K(α)`.
///
/// A `K`-automorphism is determined by where it sends the generator, so the
/// automorphism *is* that image: a finite, comparable value rather than a
/// closure. Composition and inversion are computed through the owning
/// [`FieldExtension`].
///
/// Invariant: `image` is a root of the defining polynomial of the extension
/// that produced it.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Automorphism<T> {
    image: ExtElement<T>,
}

impl<T> Automorphism<T> {
    pub(crate) fn from_image(image: ExtElement<T>) -> Self {
        Self { image }
    }

    /// `σ(α)`, the image of the generator.
    pub fn image(&self) -> &ExtElement<T> {
        &self.image
    }
}

impl<T: fmt::Debug> fmt::Debug for Automorphism<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "σ[α ↦ {:?}]", self.image)
    }
}

impl<F: Field> FieldExtension<F> {
    /// `f(a)` for a polynomial `f` over `K`, computed in `L` with the
    /// coefficients of `f` embedded.
    pub fn eval_embedded(&self, f: &Poly<F::Elem>, a: &ExtElement<F::Elem>) -> ExtElement<F::Elem> {
        f.coefficients().iter().rev().fold(self.zero(), |acc, c| {
            self.add(&self.mul(&acc, a), &self.embed(c.clone()))
        })
    }

    /// Check whether `a` is a root of the defining polynomial.
    pub fn is_root_of_modulus(&self, a: &ExtElement<F::Elem>) -> bool {
        self.eval_embedded(self.modulus(), a).is_zero()
    }

    /// The automorphism sending `α` to `image`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotARoot` if `image` is not a root of the defining
    /// polynomial, in which case no such automorphism exists.
    pub fn automorphism(&self, image: ExtElement<F::Elem>) -> Result<Automorphism<F::Elem>> {
        if !self.is_root_of_modulus(&image) {
            return Err(Error::NotARoot);
        }
        Ok(Automorphism::from_image(image))
    }

    /// The identity automorphism `α ↦ α`.
    pub fn identity_automorphism(&self) -> Automorphism<F::Elem> {
        Automorphism::from_image(self.generator().clone())
    }

    /// `σ(a)`: the representative of `a`, read as a polynomial in `α`, with
    /// `α` replaced by `σ(α)` (Horner accumulation in `L`).
    pub fn apply(
        &self,
        sigma: &Automorphism<F::Elem>,
        a: &ExtElement<F::Elem>,
    ) -> ExtElement<F::Elem> {
        a.coeffs().iter().rev().fold(self.zero(), |acc, c| {
            self.add(&self.mul(&acc, &sigma.image), &self.embed(c.clone()))
        })
    }

    /// `σ2 ∘ σ1`: apply `sigma1` first, then `sigma2`.
    pub fn compose(
        &self,
        sigma1: &Automorphism<F::Elem>,
        sigma2: &Automorphism<F::Elem>,
    ) -> Automorphism<F::Elem> {
        Automorphism::from_image(self.apply(sigma2, &sigma1.image))
    }

    /// Find `τ` in `all` with `σ ∘ τ = id` by linear search.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoInverse` if `all` contains no inverse of `sigma`,
    /// i.e. `all` is not closed under inversion.
    pub fn inverse_automorphism(
        &self,
        sigma: &Automorphism<F::Elem>,
        all: &[Automorphism<F::Elem>],
    ) -> Result<Automorphism<F::Elem>> {
        let identity = self.identity_automorphism();
        all.iter()
            .find(|tau| self.compose(sigma, tau) == identity)
            .cloned()
            .ok_or(Error::NoInverse {
                candidates: all.len(),
            })
    }

    /// All `K`-automorphisms of `L` whose generator image lies in `candidates`.
    ///
    /// Any `K`-automorphism maps `α` to a root of its minimal polynomial `p`,
    /// and every root `β` defines one (the substitution `α ↦ β` is a ring
    /// homomorphism `K[x]/(p) → L`). Passing every element of `L` therefore
    /// yields exactly Aut(L/K), in the order of `candidates`.
    ///
    /// Repeated candidates yield one automorphism, at their first occurrence.
    pub fn find_automorphisms(
        &self,
        candidates: &[ExtElement<F::Elem>],
    ) -> Vec<Automorphism<F::Elem>> {
        let mut seen = HashSet::new();
        let found: Vec<_> = candidates
            .iter()
            .map(|a| self.normalize(a.clone()))
            .filter(|a| self.is_root_of_modulus(a))
            .filter(|a| seen.insert(a.clone()))
            .map(Automorphism::from_image)
            .collect();

        tracing::debug!(
            degree = self.degree(),
            candidates = candidates.len(),
            automorphisms = found.len(),
            "enumerated automorphisms"
        );
        found
    }

    /// Parallel version of [`FieldExtension::find_automorphisms`].
    ///
    /// The root test for each candidate is independent, so the search fans out
    /// over the rayon thread pool. The result order matches the sequential one.
    #[cfg(feature = "parallel")]
    pub fn par_find_automorphisms(
        &self,
        candidates: &[ExtElement<F::Elem>],
    ) -> Vec<Automorphism<F::Elem>>
    where
        F: Sync,
        F::Elem: Send + Sync,
    {
        use rayon::prelude::*;

        let mut found: Vec<_> = candidates
            .par_iter()
            .map(|a| self.normalize(a.clone()))
            .filter(|a| self.is_root_of_modulus(a))
            .map(Automorphism::from_image)
            .collect();
        let mut seen = HashSet::new();
        found.retain(|sigma| seen.insert(sigma.clone()));

        tracing::debug!(
            degree = self.degree(),
            candidates = candidates.len(),
            automorphisms = found.len(),
            "enumerated automorphisms in parallel"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::field::FiniteField;
    use crate::structures::fp::PrimeField;

    fn gf4() -> FieldExtension<PrimeField> {
        FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 1]).unwrap()
    }

    #[test]
    fn gf4_has_two_automorphisms() {
        let ext = gf4();
        let auts = ext.find_automorphisms(&FiniteField::elements(&ext));
        assert_eq!(auts.len(), 2);
        // Roots of x^2 + x + 1 are α and α + 1 = α^2.
        assert_eq!(auts[0].image(), ext.generator());
        assert_eq!(auts[1].image(), &ext.element(vec![1, 1]));
    }

    #[test]
    fn repeated_candidates_yield_one_automorphism() {
        let ext = gf4();
        let beta = ext.element(vec![1, 1]);
        let alpha = ext.generator().clone();
        let candidates = vec![beta.clone(), alpha.clone(), beta.clone(), alpha, beta];
        let auts = ext.find_automorphisms(&candidates);
        assert_eq!(auts.len(), 2);
        assert_eq!(auts[0].image(), &ext.element(vec![1, 1]));
        assert_eq!(auts[1].image(), ext.generator());
    }

    #[test]
    fn apply_identity_is_noop() {
        let ext = gf4();
        let id = ext.identity_automorphism();
        for a in FiniteField::elements(&ext) {
            assert_eq!(ext.apply(&id, &a), a);
        }
    }

    #[test]
    fn apply_fixes_base_field() {
        let ext = gf4();
        let sigma = ext.automorphism(ext.element(vec![1, 1])).unwrap();
        assert_eq!(ext.apply(&sigma, &ext.zero()), ext.zero());
        assert_eq!(ext.apply(&sigma, &ext.one()), ext.one());
        // σ(α) = α + 1, σ(α + 1) = α
        assert_eq!(ext.apply(&sigma, ext.generator()), ext.element(vec![1, 1]));
        assert_eq!(
            ext.apply(&sigma, &ext.element(vec![1, 1])),
            ext.generator().clone()
        );
    }

    #[test]
    fn non_root_image_rejected() {
        let ext = gf4();
        assert_eq!(ext.automorphism(ext.one()), Err(Error::NotARoot));
        assert_eq!(ext.automorphism(ext.zero()), Err(Error::NotARoot));
    }

    #[test]
    fn compose_order_two() {
        let ext = gf4();
        let sigma = ext.automorphism(ext.element(vec![1, 1])).unwrap();
        let id = ext.identity_automorphism();
        assert_eq!(ext.compose(&sigma, &sigma), id);
        assert_eq!(ext.compose(&sigma, &id), sigma);
        assert_eq!(ext.compose(&id, &sigma), sigma);
    }

    #[test]
    fn compose_applies_first_argument_first() {
        // GF(8): σ = Frobenius (α ↦ α^2), τ = σ^2. Check (τ ∘ σ)(a) = τ(σ(a)).
        let ext = FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 0, 1]).unwrap();
        let alpha = ext.generator().clone();
        let sigma = ext.automorphism(ext.pow(&alpha, 2)).unwrap();
        let tau = ext.automorphism(ext.pow(&alpha, 4)).unwrap();
        let composed = ext.compose(&sigma, &tau);
        for a in FiniteField::elements(&ext) {
            assert_eq!(
                ext.apply(&composed, &a),
                ext.apply(&tau, &ext.apply(&sigma, &a))
            );
        }
    }

    #[test]
    fn inverse_search() {
        let ext = FieldExtension::new(PrimeField::new(2).unwrap(), vec![1, 1, 0, 1]).unwrap();
        let all = ext.find_automorphisms(&FiniteField::elements(&ext));
        assert_eq!(all.len(), 3);
        for sigma in &all {
            let inv = ext.inverse_automorphism(sigma, &all).unwrap();
            assert_eq!(ext.compose(sigma, &inv), ext.identity_automorphism());
        }

        // Without the identity in the candidate list, a non-trivial σ has no inverse.
        let partial = vec![all[1].clone()];
        assert_eq!(
            ext.inverse_automorphism(&all[1], &partial),
            Err(Error::NoInverse { candidates: 1 })
        );
    }

    #[test]
    fn eval_embedded_at_generator() {
        let ext = gf4();
        assert!(ext.eval_embedded(ext.modulus(), ext.generator()).is_zero());
        assert_eq!(ext.eval_embedded(ext.modulus(), &ext.zero()), ext.one());

        // x^2 evaluated at α is α + 1
        let x_sq = ext.poly_ring().monomial(1, 2);
        assert_eq!(
            ext.eval_embedded(&x_sq, ext.generator()),
            ext.element(vec![1, 1])
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_search_matches_sequential() {
        let ext = FieldExtension::new(PrimeField::new(3).unwrap(), vec![2, 1, 0, 0, 1]).unwrap();
        let mut elems = FiniteField::elements(&ext);
        elems.extend(FiniteField::elements(&ext));
        let found = ext.par_find_automorphisms(&elems);
        assert_eq!(found.len(), 4);
        assert_eq!(found, ext.find_automorphisms(&elems));
    }
}
