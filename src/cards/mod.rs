//! Card model: records, field metadata, and the free-standing catalog.
//!
//! ## Key Types
//!
//! - `CardRecord`: Immutable catalog entry, keyed by name
//! - `Field`: Closed enumeration of filterable/sortable attributes
//! - `FieldValue`: Tagged value extracted from a record
//! - `Delta`: The +1/-1 count-mutation vocabulary
//! - `Catalog`: Ordered, name-indexed store of free-standing records
//!
//! ## Field Access
//!
//! Records are never indexed dynamically by string key. `Field` plus
//! `CardRecord::field` give every caller a typed accessor, so an
//! ill-typed operator/field pairing is rejected when a filter is
//! built rather than at evaluation time.

pub mod catalog;
pub mod field;
pub mod record;

pub use catalog::Catalog;
pub use field::{Field, FieldKind, FieldValue};
pub use record::{CardRecord, Delta};
