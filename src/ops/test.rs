use proptest::prelude::*;

use super::*;
use crate::permutation::test::domain_and_cycles;

#[test]
fn test_cycle_containing() {
    let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();

    assert_eq!(cycle_containing(&p, &1), Ok(vec![1, 2, 3]));
    assert_eq!(cycle_containing(&p, &3), Ok(vec![3, 1, 2]));
    assert_eq!(cycle_containing(&p, &4), Ok(vec![4]));
    assert_eq!(cycle_containing(&p, &5), Err(PermutationError::NotInDomain(5)));
}

#[test]
fn test_inverse() {
    let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
    let inv = inverse(&p);

    assert_eq!(inv.image(&1), Ok(&3));
    assert_eq!(inv.image(&2), Ok(&1));
    assert_eq!(inv.image(&3), Ok(&2));
    assert_eq!(inv.image(&4), Ok(&4));
    assert_eq!(inv.domain(), p.domain());
    assert_eq!(inv, Permutation::with_domain([1, 2, 3, 4], [vec![3, 2, 1]]).unwrap());
}

#[test]
fn test_inverse_identity() {
    let id = Permutation::id(["x", "y", "z"]);
    assert_eq!(inverse(&id), id);

    let empty = Permutation::<char>::id([]);
    assert!(inverse(&empty).is_empty());
}

#[test]
fn test_compose() {
    let p1 = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2]]).unwrap();
    let p2 = Permutation::with_domain([1, 2, 3, 4], [vec![3, 4]]).unwrap();

    let r = compose(&p1, &p2).unwrap();
    assert_eq!(r.image(&1), Ok(&2));
    assert_eq!(r.image(&2), Ok(&1));
    assert_eq!(r.image(&3), Ok(&4));
    assert_eq!(r.image(&4), Ok(&3));
}

#[test]
fn test_compose_order() {
    let p1 = Permutation::with_domain([1, 2, 3], [vec![1, 2]]).unwrap();
    let p2 = Permutation::with_domain([1, 2, 3], [vec![2, 3]]).unwrap();

    // apply p2 first, then p1
    let r = compose(&p1, &p2).unwrap();
    assert_eq!(r, Permutation::with_domain([1, 2, 3], [vec![1, 2, 3]]).unwrap());

    let s = compose(&p2, &p1).unwrap();
    assert_eq!(s, Permutation::with_domain([1, 2, 3], [vec![1, 3, 2]]).unwrap());
    assert_ne!(r, s);
}

#[test]
fn test_compose_keeps_inner_domain() {
    let p1 = Permutation::with_domain([1, 2, 3], [vec![1, 2]]).unwrap();
    let p2 = Permutation::with_domain([1, 2], [vec![1, 2]]).unwrap();

    let r = compose(&p1, &p2).unwrap();
    assert_eq!(r, Permutation::id([1, 2]));
}

#[test]
fn test_compose_domain_mismatch() {
    // p2 produces 3, which p1 cannot take
    let p1 = Permutation::with_domain([1, 2], [vec![1, 2]]).unwrap();
    let p2 = Permutation::with_domain([1, 2, 3], [vec![2, 3]]).unwrap();
    assert_eq!(compose(&p1, &p2), Err(PermutationError::DomainMismatch(3)));

    // p1 sends 2 to 3, outside the domain of p2
    let p1 = Permutation::with_domain([1, 2, 3], [vec![2, 3]]).unwrap();
    let p2 = Permutation::id([1, 2]);
    assert_eq!(compose(&p1, &p2), Err(PermutationError::DomainMismatch(3)));
}

#[test]
fn test_is_cyclic() {
    let p = Permutation::with_domain([1, 2, 3], [vec![1, 2, 3]]).unwrap();
    assert!(is_cyclic(&p));

    let q = Permutation::with_domain([1, 2, 3], [vec![1, 2], vec![3]]).unwrap();
    assert!(!is_cyclic(&q));

    let r = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
    assert!(!is_cyclic(&r));

    let s = Permutation::from_disjoint_cycles([vec!['a', 'b', 'c', 'd']]).unwrap();
    assert!(is_cyclic(&s));

    assert!(is_cyclic(&Permutation::id([7])));
    assert!(!is_cyclic(&Permutation::id([7, 8])));
}

#[test]
fn test_is_cyclic_empty() {
    let empty = Permutation::<u8>::id([]);
    assert!(is_cyclic(&empty));
}

proptest! {
    #[test]
    fn inverse_is_an_involution((domain, cycles) in domain_and_cycles()) {
        let p = Permutation::with_domain(domain, cycles).unwrap();
        let inv = inverse(&p);
        prop_assert_eq!(inverse(&inv), p.clone());

        for (e, image) in p.iter() {
            prop_assert_eq!(inv.image(image), Ok(e));
        }
    }

    #[test]
    fn compose_with_inverse_is_identity((domain, cycles) in domain_and_cycles()) {
        let p = Permutation::with_domain(domain.clone(), cycles).unwrap();
        let inv = inverse(&p);

        let left = compose(&p, &inv).unwrap();
        prop_assert!(left.is_identity());
        prop_assert_eq!(&left, &Permutation::id(domain));

        let right = compose(&inv, &p).unwrap();
        prop_assert!(right.is_identity());
    }

    #[test]
    fn compose_applies_right_first((domain, cycles) in domain_and_cycles()) {
        prop_assume!(!domain.is_empty());
        let p = Permutation::with_domain(domain.clone(), cycles).unwrap();
        let shift = Permutation::from_disjoint_cycles([domain.clone()]).unwrap();

        let r = compose(&p, &shift).unwrap();
        for e in &domain {
            prop_assert_eq!(r.image(e), p.image(shift.image(e).unwrap()));
        }
    }

    #[test]
    fn cyclic_iff_cycle_spans_domain((domain, cycles) in domain_and_cycles()) {
        prop_assume!(!domain.is_empty());
        let p = Permutation::with_domain(domain.clone(), cycles).unwrap();

        for e in &domain {
            let cycle = cycle_containing(&p, e).unwrap();
            prop_assert_eq!(is_cyclic(&p), cycle.len() == domain.len());
        }
    }

    #[test]
    fn cycle_containing_matches_decomposition((domain, cycles) in domain_and_cycles()) {
        let p = Permutation::with_domain(domain, cycles).unwrap();
        for cycle in p.find_cycles() {
            prop_assert_eq!(cycle_containing(&p, &cycle[0]).unwrap(), cycle);
        }
    }
}
