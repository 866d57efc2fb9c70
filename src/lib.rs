//! # Cyclet
//!
//! Cyclet is a Rust library for finite permutations: bijections from a finite
//! set of elements to itself. Permutations are built from disjoint cycles over
//! any hashable element type, and support image and pre-image lookup,
//! inversion, composition, cycle extraction and cyclicity testing.
//!
//! ```
//! use cyclet::{ops, permutation::Permutation};
//!
//! let p = Permutation::with_domain([1, 2, 3, 4], [vec![1, 2, 3]]).unwrap();
//! assert_eq!(p.image(&1), Ok(&2));
//! assert_eq!(ops::cycle_containing(&p, &2).unwrap(), vec![2, 3, 1]);
//!
//! let id = ops::compose(&p, &ops::inverse(&p)).unwrap();
//! assert!(id.is_identity());
//! ```

pub mod ops;
pub mod permutation;
