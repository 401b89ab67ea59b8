//! Predicate engine: declarative filters over card records.
//!
//! ## Key Types
//!
//! - `Operator`: Closed enumeration of comparison operators
//! - `FilterDefinition` / `FILTERS`: Static per-field constraints
//! - `AppliedFilter`: One validated (field, operator, value) term
//! - `FilterSet`: The insertion-ordered active query
//! - `FilterError`: Construction-time rejections
//!
//! ## Semantics
//!
//! Filters combine with logical OR (union semantics): a card is in
//! the filtered view if it matches any applied filter. An empty
//! filter set yields an empty view.
//!
//! All validation happens when a filter is built; evaluation is
//! total and never fails. A substring operator meeting a non-string
//! value evaluates to no-match rather than an error.

pub mod applied;
pub mod definition;
pub mod engine;
pub mod operator;
pub mod set;

pub use applied::{AppliedFilter, FilterError, FilterValue};
pub use definition::{definition, FilterDefinition, FILTERS};
pub use engine::{apply_all, matches_any};
pub use operator::Operator;
pub use set::FilterSet;
