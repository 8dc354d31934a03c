//! Insertion-ordered record container with on-demand total orderings.
//!
//! A [`Roster`] preserves insertion order for its default traversal and
//! produces sorted traversals on demand from a ranking rule. Sorted
//! views are computed fresh at query time from the then-current
//! contents, never cached.
//!
//! # Design
//!
//! The collection never stores an ordering. Rules are first-class values
//! passed explicitly to each query through the [`RankOrder`] seam, so
//! two queries with different rules on the same roster cannot interfere.
//! Every rule yields a strict order whenever last names differ: ties on
//! the primary key fall back to a lexical last-name comparison, which
//! keeps sorted traversals from ever collapsing records that merely
//! "look equal" under the primary key.

mod collection;
mod rank;
mod types;

pub use collection::{EmptyRosterError, Roster};
pub use rank::{RankOrder, RankRule};
pub use types::{Employee, EmployeeKind, PayBasis};
