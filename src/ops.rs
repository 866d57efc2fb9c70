//! # Permutation Operations
//!
//! Derived algorithms over [`Permutation`]:
//!
//! - [`cycle_containing`]: the cycle through a given element.
//! - [`inverse`]: the inverse bijection.
//! - [`compose`]: `p1 ∘ p2`, applying `p2` first and then `p1`.
//! - [`is_cyclic`]: whether the permutation is a single cycle over its whole domain.
//!
//! `inverse` and `compose` never edit their inputs; they decompose the resulting
//! mapping into disjoint cycles and build a fresh permutation from them.

use std::hash::Hash;

use crate::permutation::{find_index_cycles, Permutation, PermutationError};

/// Returns the cycle of `p` through `e`, starting at `e`.
///
/// A fixed point gives a cycle of length one.
///
/// # Errors
///
/// [`PermutationError::NotInDomain`] if `e` is not in the domain of `p`.
///
/// # Examples
///
/// ```
/// # use cyclet::{ops::cycle_containing, permutation::Permutation};
/// let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
/// assert_eq!(cycle_containing(&p, &1).unwrap(), vec![1, 2, 3]);
/// assert_eq!(cycle_containing(&p, &4).unwrap(), vec![4]);
/// ```
pub fn cycle_containing<E>(p: &Permutation<E>, e: &E) -> Result<Vec<E>, PermutationError<E>>
where
    E: Eq + Hash + Clone,
{
    let mut cycle = vec![e.clone()];
    let mut current = p.image(e)?;
    // the walk can only close at `e` since `p` is a bijection
    while current != e {
        cycle.push(current.clone());
        current = p.image(current)?;
    }
    Ok(cycle)
}

/// Returns the inverse of `p`, over the same domain.
///
/// The cycles of the inverse are found by walking `p` backwards from each
/// element, following pre-images.
///
/// # Examples
///
/// ```
/// # use cyclet::{ops::inverse, permutation::Permutation};
/// let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
/// let inv = inverse(&p);
/// assert_eq!(inv.image(&1), Ok(&3));
/// assert_eq!(inv.image(&4), Ok(&4));
/// assert_eq!(inverse(&inv), p);
/// ```
pub fn inverse<E>(p: &Permutation<E>) -> Permutation<E>
where
    E: Eq + Hash + Clone,
{
    let cycles = find_index_cycles(p.inv());
    log::trace!("inverting permutation with {} cycles", cycles.len());
    Permutation::from_index_cycles(p.domain().clone(), &cycles)
}

/// Composes two permutations, returning `r` with `r(e) = p1(p2(e))` for every `e`
/// in the domain of `p2`.
///
/// The result acts on the domain of `p2`. Composition is not commutative in general.
///
/// # Errors
///
/// [`PermutationError::DomainMismatch`] if some image of `p2` is not in the domain of
/// `p1`, or if `p1` then sends it outside the domain of `p2`.
///
/// # Examples
///
/// ```
/// # use cyclet::{ops::compose, permutation::{Permutation, PermutationError}};
/// let p1 = Permutation::with_domain([1, 2, 3], [vec![1, 2]]).unwrap();
/// let p2 = Permutation::with_domain([1, 2, 3], [vec![2, 3]]).unwrap();
///
/// let r = compose(&p1, &p2).unwrap();
/// assert_eq!(r.image(&2), Ok(&3)); // 2 -> 3 -> 3
/// assert_eq!(r.image(&3), Ok(&1)); // 3 -> 2 -> 1
///
/// let small = Permutation::with_domain([1, 2], [vec![1, 2]]).unwrap();
/// assert_eq!(compose(&small, &p2), Err(PermutationError::DomainMismatch(3)));
/// ```
pub fn compose<E>(
    p1: &Permutation<E>,
    p2: &Permutation<E>,
) -> Result<Permutation<E>, PermutationError<E>>
where
    E: Eq + Hash + Clone,
{
    let domain = p2.domain();

    let map = p2
        .iter()
        .map(|(_, mid)| {
            let end = p1
                .image(mid)
                .map_err(|_| PermutationError::DomainMismatch(mid.clone()))?;
            domain
                .get_index_of(end)
                .ok_or_else(|| PermutationError::DomainMismatch(end.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cycles = find_index_cycles(&map);
    log::trace!(
        "composed permutations over {} elements into {} cycles",
        domain.len(),
        cycles.len()
    );
    Ok(Permutation::from_index_cycles(domain.clone(), &cycles))
}

/// Checks whether `p` is a single cycle spanning its whole domain.
///
/// The empty permutation is vacuously cyclic.
///
/// # Examples
///
/// ```
/// # use cyclet::{ops::is_cyclic, permutation::Permutation};
/// let p = Permutation::with_domain([1, 2, 3], [vec![1, 2, 3]]).unwrap();
/// assert!(is_cyclic(&p));
///
/// let q = Permutation::with_domain([1, 2, 3], [vec![1, 2], vec![3]]).unwrap();
/// assert!(!is_cyclic(&q));
/// ```
pub fn is_cyclic<E>(p: &Permutation<E>) -> bool
where
    E: Eq + Hash + Clone,
{
    match p.domain().first() {
        Some(start) => cycle_containing(p, start).is_ok_and(|cycle| cycle.len() == p.len()),
        None => true,
    }
}

#[cfg(test)]
mod test;
