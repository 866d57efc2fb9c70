//! # Permutations
//!
//! This module provides a `Permutation` struct for representing bijections of a
//! finite domain of arbitrary hashable elements onto itself.
//!
//! ## Key Features:
//!
//! - **Representation**: The domain is kept in a [`Domain`] (an insertion-ordered set),
//!   and the mapping is stored by domain index: `map[i]` is the index of the image of
//!   the `i`-th element, `inv[i]` the index of its pre-image.
//! - **Construction**:
//!   - Identity permutation: `Permutation::id(domain)`.
//!   - From disjoint cycles over an explicit domain:
//!     `Permutation::with_domain(domain, cycles)`. Elements of the domain not covered
//!     by any cycle become fixed points.
//!   - From disjoint cycles alone, inferring the domain:
//!     `Permutation::from_disjoint_cycles(cycles)`.
//! - **Queries**: `p.image(&e)`, `p.preimage(&e)`, `p.domain()`, `p[&e]`.
//! - **Cycle Utilities**: `p.find_cycles()` gives the full cycle decomposition.
//!
//! Permutations are immutable once built. Equality is structural: two permutations
//! are equal when they act on the same domain and send every element to the same
//! image, regardless of the cycles they were built from.
//!
//! Derived operations (inverse, composition, cycle extraction, cyclicity) live in
//! [`crate::ops`].

use std::{fmt, hash::Hash, ops::Index};

use indexmap::IndexSet;
use itertools::Itertools;
use thiserror::Error;

/// The finite set of elements a permutation acts on.
///
/// Iteration follows insertion order, which makes cycle decompositions and
/// rendering deterministic.
pub type Domain<E> = IndexSet<E, ahash::RandomState>;

/// A bijection from a finite [`Domain`] onto itself.
///
/// # Examples
///
/// ```
/// use cyclet::permutation::Permutation;
///
/// // 'u' -> 'i' -> 'a' -> 'e' -> 'u', with 'o' fixed
/// let p = Permutation::with_domain(['a', 'e', 'i', 'o', 'u'], [vec!['u', 'i', 'a', 'e']]).unwrap();
///
/// assert_eq!(p.image(&'a'), Ok(&'e'));
/// assert_eq!(p.image(&'o'), Ok(&'o'));
/// assert_eq!(p.preimage(&'u'), Ok(&'e'));
/// ```
#[derive(Debug, Clone)]
pub struct Permutation<E> {
    domain: Domain<E>,
    map: Vec<usize>,
    inv: Vec<usize>,
}

/// Misuse of the permutation API. None of these are transient: they are raised
/// eagerly, at construction time or at the offending query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError<E> {
    /// A cycle element, or the image of a composed operand, falls outside the
    /// expected domain.
    #[error("Element {0:?} lies outside the expected domain")]
    DomainMismatch(E),

    /// Two cycles share an element.
    #[error("Element {0:?} appears in more than one cycle")]
    OverlappingCycles(E),

    /// A single cycle lists the same element twice.
    #[error("Element {0:?} is repeated within a cycle")]
    RepeatedInCycle(E),

    /// A query was made with an element outside the permutation's domain.
    #[error("Element {0:?} is not in the domain of the permutation")]
    NotInDomain(E),
}

impl<E: Eq + Hash + Clone> Permutation<E> {
    // --------------------------------------------------------------------------------------------
    // Constructors
    // --------------------------------------------------------------------------------------------

    /// Creates the identity permutation over `domain`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclet::permutation::Permutation;
    /// let p = Permutation::id(["x", "y"]);
    /// assert!(p.is_identity());
    /// assert_eq!(p.image(&"y"), Ok(&"y"));
    /// ```
    pub fn id<D>(domain: D) -> Self
    where
        D: IntoIterator<Item = E>,
    {
        let domain: Domain<E> = domain.into_iter().collect();
        let n = domain.len();
        Permutation {
            domain,
            map: (0..n).collect(),
            inv: (0..n).collect(),
        }
    }

    /// Creates a permutation of `domain` from a set of disjoint cycles.
    ///
    /// A cycle `[c0, c1, ..., ck-1]` sends each element to the next one and the
    /// last back to `c0`. Singleton cycles state a fixed point explicitly, empty
    /// cycles are ignored, and every element of `domain` not covered by a cycle
    /// is fixed.
    ///
    /// # Errors
    ///
    /// Validation runs in this order:
    /// 1. [`PermutationError::DomainMismatch`] if a cycle element is not in `domain`.
    /// 2. [`PermutationError::RepeatedInCycle`] or [`PermutationError::OverlappingCycles`]
    ///    if an element appears twice, within one cycle or across two.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclet::permutation::{Permutation, PermutationError};
    /// let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
    /// assert_eq!(p.image(&3), Ok(&1));
    /// assert_eq!(p.image(&4), Ok(&4));
    ///
    /// let stray = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 5]]);
    /// assert_eq!(stray, Err(PermutationError::DomainMismatch(5)));
    ///
    /// let overlap = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2], vec![2, 3]]);
    /// assert_eq!(overlap, Err(PermutationError::OverlappingCycles(2)));
    /// ```
    pub fn with_domain<D, I, C>(domain: D, cycles: I) -> Result<Self, PermutationError<E>>
    where
        D: IntoIterator<Item = E>,
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = E>,
    {
        let domain: Domain<E> = domain.into_iter().collect();
        let cycles = collect_cycles(cycles);

        if let Some(stray) = cycles.iter().flatten().find(|e| !domain.contains(*e)) {
            log::debug!(
                "rejecting cycles: element outside a domain of {}",
                domain.len()
            );
            return Err(PermutationError::DomainMismatch(stray.clone()));
        }

        let cycles = index_disjoint_cycles(&domain, &cycles)?;
        Ok(Self::from_index_cycles(domain, &cycles))
    }

    /// Creates a permutation from a set of disjoint cycles, taking the domain to be
    /// exactly the elements that appear in them.
    ///
    /// Domain order is the order of first appearance across the cycles.
    ///
    /// # Errors
    ///
    /// [`PermutationError::RepeatedInCycle`] or [`PermutationError::OverlappingCycles`]
    /// if an element appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclet::permutation::Permutation;
    /// let p = Permutation::from_disjoint_cycles([vec![0, 1, 2], vec![3, 4], vec![5]]).unwrap();
    /// assert_eq!(p.len(), 6);
    /// assert_eq!(p.image(&2), Ok(&0));
    /// assert_eq!(p.image(&5), Ok(&5));
    ///
    /// // Error if cycles are not disjoint
    /// assert!(Permutation::from_disjoint_cycles([vec![0, 1], vec![1, 2]]).is_err());
    /// ```
    pub fn from_disjoint_cycles<I, C>(cycles: I) -> Result<Self, PermutationError<E>>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = E>,
    {
        let cycles = collect_cycles(cycles);
        let domain: Domain<E> = cycles.iter().flatten().cloned().collect();

        let cycles = index_disjoint_cycles(&domain, &cycles)?;
        Ok(Self::from_index_cycles(domain, &cycles))
    }

    /// Builds the permutation from cycles already expressed as domain indices.
    ///
    /// The cycles must be pairwise disjoint and in bounds; every index they leave out
    /// is completed as a fixed point.
    pub(crate) fn from_index_cycles(domain: Domain<E>, cycles: &[Vec<usize>]) -> Self {
        let n = domain.len();

        let mut map = (0..n).collect::<Vec<_>>();
        for cycle in cycles {
            for (i, &from) in cycle.iter().enumerate() {
                map[from] = cycle[(i + 1) % cycle.len()];
            }
        }

        let mut inv = vec![0; n];
        for (i, &j) in map.iter().enumerate() {
            inv[j] = i;
        }

        log::trace!(
            "built permutation over {n} elements from {} cycles",
            cycles.len()
        );
        Permutation { domain, map, inv }
    }

    // --------------------------------------------------------------------------------------------
    // Queries
    // --------------------------------------------------------------------------------------------

    /// Returns the image of `e`.
    ///
    /// # Errors
    ///
    /// [`PermutationError::NotInDomain`] if `e` is not in the domain.
    pub fn image(&self, e: &E) -> Result<&E, PermutationError<E>> {
        let i = self.index_of(e)?;
        Ok(&self.domain[self.map[i]])
    }

    /// Returns the unique element whose image is `e`.
    ///
    /// # Errors
    ///
    /// [`PermutationError::NotInDomain`] if `e` is not in the domain.
    pub fn preimage(&self, e: &E) -> Result<&E, PermutationError<E>> {
        let i = self.index_of(e)?;
        Ok(&self.domain[self.inv[i]])
    }

    /// Returns `true` if `e` is in the domain.
    pub fn contains(&self, e: &E) -> bool {
        self.domain.contains(e)
    }

    /// Iterates over `(element, image)` pairs in domain order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclet::permutation::Permutation;
    /// let p = Permutation::with_domain([1, 2, 3], [vec![1, 2]]).unwrap();
    /// let pairs: Vec<_> = p.iter().collect();
    /// assert_eq!(pairs, vec![(&1, &2), (&2, &1), (&3, &3)]);
    /// ```
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&E, &E)> + '_ {
        self.domain
            .iter()
            .zip(&self.map)
            .map(move |(e, &j)| (e, &self.domain[j]))
    }

    /// Returns the cycle decomposition of `self`, fixed points included, with cycles
    /// ordered by their first element's position in the domain. Each cycle starts at
    /// that element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyclet::permutation::Permutation;
    /// let p = Permutation::with_domain([1, 2, 3, 4], [vec![3, 1, 2]]).unwrap();
    /// assert_eq!(p.find_cycles(), vec![vec![1, 2, 3], vec![4]]);
    /// ```
    pub fn find_cycles(&self) -> Vec<Vec<E>> {
        find_index_cycles(&self.map)
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|i| self.domain[i].clone()).collect())
            .collect()
    }

    fn index_of(&self, e: &E) -> Result<usize, PermutationError<E>> {
        self.domain
            .get_index_of(e)
            .ok_or_else(|| PermutationError::NotInDomain(e.clone()))
    }
}

impl<E> Permutation<E> {
    /// Returns the domain the permutation acts on.
    pub fn domain(&self) -> &Domain<E> {
        &self.domain
    }

    /// Number of elements in the domain.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Checks if every element is a fixed point.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// The inverse mapping by domain index: `inv()[i]` is the index of the pre-image
    /// of the `i`-th element.
    pub(crate) fn inv(&self) -> &[usize] {
        &self.inv
    }
}

/// Walks `next` (a bijection of `0..next.len()`) from every unvisited index in
/// increasing order, collecting each orbit until it closes.
pub(crate) fn find_index_cycles(next: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; next.len()];
    let mut cycles = Vec::new();
    for i in 0..next.len() {
        if visited[i] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut j = i;
        while !visited[j] {
            visited[j] = true;
            cycle.push(j);
            j = next[j];
        }
        cycles.push(cycle);
    }
    cycles
}

fn collect_cycles<E, I, C>(cycles: I) -> Vec<Vec<E>>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = E>,
{
    cycles
        .into_iter()
        .map(|cycle| cycle.into_iter().collect())
        .collect()
}

/// Translates cycles to domain indices, checking that no element is listed twice.
fn index_disjoint_cycles<E: Eq + Hash + Clone>(
    domain: &Domain<E>,
    cycles: &[Vec<E>],
) -> Result<Vec<Vec<usize>>, PermutationError<E>> {
    // owner[i] is the cycle that already claimed the i-th domain element
    let mut owner: Vec<Option<usize>> = vec![None; domain.len()];
    let mut indexed = Vec::with_capacity(cycles.len());

    for (c, cycle) in cycles.iter().enumerate() {
        let mut indices = Vec::with_capacity(cycle.len());
        for e in cycle {
            let i = domain
                .get_index_of(e)
                .ok_or_else(|| PermutationError::DomainMismatch(e.clone()))?;
            match owner[i] {
                Some(prev) if prev == c => {
                    log::debug!("rejecting cycles: cycle {c} repeats an element");
                    return Err(PermutationError::RepeatedInCycle(e.clone()));
                }
                Some(prev) => {
                    log::debug!("rejecting cycles: cycles {prev} and {c} overlap");
                    return Err(PermutationError::OverlappingCycles(e.clone()));
                }
                None => owner[i] = Some(c),
            }
            indices.push(i);
        }
        indexed.push(indices);
    }

    Ok(indexed)
}

impl<E: Eq + Hash> PartialEq for Permutation<E> {
    fn eq(&self, other: &Self) -> bool {
        self.domain.len() == other.domain.len()
            && self.domain.iter().zip(&self.map).all(|(e, &j)| {
                other
                    .domain
                    .get_index_of(e)
                    .is_some_and(|k| other.domain[other.map[k]] == self.domain[j])
            })
    }
}

impl<E: Eq + Hash> Eq for Permutation<E> {}

impl<'a, E: Eq + Hash + fmt::Debug> Index<&'a E> for Permutation<E> {
    type Output = E;

    /// # Panics
    ///
    /// Panics if `e` is not in the domain.
    fn index(&self, e: &'a E) -> &E {
        match self.domain.get_index_of(e) {
            Some(i) => &self.domain[self.map[i]],
            None => panic!("Element {e:?} is not in the domain of the permutation"),
        }
    }
}

/// One `element -> image` line per domain element, in domain order.
impl<E: fmt::Display> fmt::Display for Permutation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.domain.iter().zip(&self.map).format_with("\n", |(e, &j), g| {
            g(&format_args!("{e} -> {}", self.domain[j]))
        });
        write!(f, "{lines}")
    }
}
