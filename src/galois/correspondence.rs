use std::collections::HashSet;

use crate::algebra::field::Field;
use crate::error::Result;
use crate::galois::automorphism::Automorphism;
use crate::galois::group::GaloisGroup;
use crate::structures::ext::ExtElement;

/// One row of the Galois correspondence: a subgroup `H` and its fixed field `L^H`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrespondenceEntry<T> {
    /// The subgroup `H`, in group order.
    pub subgroup: Vec<Automorphism<T>>,
    /// Elements of the universe fixed by every member of `subgroup`.
    pub fixed_field: Vec<ExtElement<T>>,
    /// `|H|`.
    pub subgroup_order: usize,
    /// `[L^H : K]`, inferred as `|G| / |H|`.
    pub fixed_field_degree: usize,
    /// `|L^H|`, the number of fixed elements.
    pub fixed_field_size: usize,
    /// `[L^H : K]` measured from the element count: the `d` with
    /// `|K|^d = |L^H|`, if there is one.
    pub measured_degree: Option<usize>,
    /// Whether `H` is normal in `G`.
    pub is_normal: bool,
}

/// Outcome of [`GaloisCorrespondence::verify`].
///
/// A failed check is data, not an error: the entries are kept so the caller
/// can see which subgroup broke the correspondence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrespondenceReport<T> {
    /// `|H| · [L^H : K] = [L : K]` for every entry, with the inferred degree
    /// agreeing with the measured one.
    pub index_degree_law_holds: bool,
    /// Distinct subgroups have distinct fixed fields.
    pub injective: bool,
    pub entries: Vec<CorrespondenceEntry<T>>,
}

impl<T> CorrespondenceReport<T> {
    pub fn is_valid(&self) -> bool {
        self.index_degree_law_holds && self.injective
    }
}

/// Computes and checks the subgroup / fixed-field table of a Galois group.
///
/// # Example
///
/// ```
/// use galext::{GaloisCorrespondence, GF};
///
/// let gf16 = GF::new(2, 4).unwrap();
/// let group = gf16.galois_group().unwrap();
///
/// let report = GaloisCorrespondence::new(&group).verify().unwrap();
/// assert!(report.is_valid());
///
/// // GF(2) ⊂ GF(4) ⊂ GF(16)
/// let sizes: Vec<_> = report.entries.iter().map(|e| e.fixed_field_size).collect();
/// assert_eq!(sizes, vec![16, 4, 2]);
/// ```
#[derive(Debug)]
pub struct GaloisCorrespondence<'a, F: Field> {
    group: &'a GaloisGroup<F>,
}

impl<'a, F: Field> GaloisCorrespondence<'a, F> {
    pub fn new(group: &'a GaloisGroup<F>) -> Self {
        Self { group }
    }

    pub fn group(&self) -> &'a GaloisGroup<F> {
        self.group
    }

    /// One entry per subgroup, in the order of [`GaloisGroup::all_subgroups`].
    ///
    /// # Errors
    ///
    /// Propagates subgroup enumeration and normality errors.
    pub fn compute(&self) -> Result<Vec<CorrespondenceEntry<F::Elem>>> {
        let group = self.group;
        let universe = group.universe();
        let ext = group.extension();
        let base_size = universe.iter().filter(|a| ext.is_embedded(a)).count();

        group
            .all_subgroups()?
            .into_iter()
            .map(|subgroup| -> Result<CorrespondenceEntry<F::Elem>> {
                let fixed_field = group.fixed_field(&subgroup, universe);
                let subgroup_order = subgroup.len();
                let is_normal = group.is_normal_subgroup(&subgroup)?;
                Ok(CorrespondenceEntry {
                    fixed_field_degree: group.order() / subgroup_order,
                    fixed_field_size: fixed_field.len(),
                    measured_degree: log_exact(base_size, fixed_field.len()),
                    subgroup_order,
                    is_normal,
                    fixed_field,
                    subgroup,
                })
            })
            .collect()
    }

    /// Compute the table and check the index-degree law and injectivity.
    ///
    /// # Errors
    ///
    /// Only structural failures from [`GaloisCorrespondence::compute`]; a
    /// correspondence that does not hold is reported through the booleans.
    pub fn verify(&self) -> Result<CorrespondenceReport<F::Elem>> {
        let entries = self.compute()?;
        let degree = self.group.extension().degree();

        let index_degree_law_holds = entries.iter().all(|e| {
            e.subgroup_order * e.fixed_field_degree == degree
                && e.measured_degree == Some(e.fixed_field_degree)
        });

        let mut seen = HashSet::new();
        let injective = entries.iter().all(|e| seen.insert(&e.fixed_field));

        if index_degree_law_holds && injective {
            tracing::debug!(
                degree,
                subgroups = entries.len(),
                "Galois correspondence verified"
            );
        } else {
            tracing::warn!(
                degree,
                group_order = self.group.order(),
                index_degree_law_holds,
                injective,
                "Galois correspondence does not hold"
            );
        }

        Ok(CorrespondenceReport {
            index_degree_law_holds,
            injective,
            entries,
        })
    }
}

/// The `d` with `base^d = value`, if any.
fn log_exact(base: usize, value: usize) -> Option<usize> {
    if base < 2 {
        return (value == 1).then_some(0);
    }
    let mut acc = 1usize;
    let mut d = 0;
    while acc < value {
        acc = acc.checked_mul(base)?;
        d += 1;
    }
    (acc == value).then_some(d)
}
