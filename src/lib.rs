//! # Overview
//!
//! This crate computes a constrained [tree edit distance][ted] between two ordered, labeled
//! trees: the least cost of deleting, inserting and relabeling nodes so that one tree becomes
//! the other, where matched nodes must sit at the same depth, keep their parent-child relations
//! and keep the left-to-right order of their siblings.
//!
//! Two independent strategies are provided. The exhaustive one enumerates every admissible
//! mapping from the nodes of the source tree to the nodes of the target tree by backtracking,
//! pricing each of them, while the memoized one solves the same problem by forest-distance
//! recursion without ever materializing a mapping.
//!
//! [ted]: https://en.wikipedia.org/wiki/Tree_edit_distance
//!
//! # Example
//!
//! ```rust
//! use constrained_tree_edit::*;
//!
//! // A(B(D), C)
//! let t1 = Tree::from_parents([("A", None), ("B", Some(0)), ("C", Some(0)), ("D", Some(1))])?;
//!
//! // A(X(D), Y)
//! let t2 = Tree::from_parents([("A", None), ("X", Some(0)), ("Y", Some(0)), ("D", Some(1))])?;
//!
//! let solutions = enumerate_mappings(&t1, &t2);
//! let best = cheapest(&solutions).unwrap();
//!
//! assert_eq!(best.cost, 2);
//! assert_eq!(best.breakdown.relabelings, 2);
//! assert_eq!(best.mapping.to_string(), "{0 -> 0, 1 -> 1, 2 -> 2, 3 -> 3}");
//! assert_eq!(edit_distance(&t1, &t2), best.cost);
//!
//! let (edits, cost) = diff(&t1, &t2, &Config::default());
//!
//! assert_eq!(cost, 2);
//!
//! assert_eq!(&*edits, &[
//!     Edit::Keep(Box::new([                   // A
//!         Edit::Relabel(Box::new([            // B -> X
//!             Edit::Keep(Box::default()),     // D
//!         ])),
//!         Edit::Relabel(Box::default()),      // C -> Y
//!     ]))
//! ]);
//! # Ok::<(), ConstructionError>(())
//! ```

mod candidates;
mod config;
mod cost;
mod distance;
mod edit;
mod enumerate;
mod error;
mod mapping;
mod tree;

pub use candidates::*;
pub use config::*;
pub use cost::*;
pub use distance::*;
pub use edit::*;
pub use enumerate::*;
pub use error::*;
pub use mapping::*;
pub use tree::*;

mod fold;
mod memoize;
mod tracing_macros;

pub(crate) use fold::*;
pub(crate) use memoize::*;
