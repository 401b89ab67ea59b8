//! Applied filters: the concrete query terms.
//!
//! An `AppliedFilter` is one (field, operator, value) term of the
//! active query. Construction is gated through `AppliedFilter::new`,
//! which validates the operator and literal against the field's
//! `FilterDefinition` - a filter that was successfully built can
//! always be evaluated, and evaluation itself never fails.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardRecord, Field, FieldKind, FieldValue};

use super::definition::definition;
use super::operator::Operator;

/// A filter literal, typed to the field it was built for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Integer literal, parsed and validated at construction.
    Int(i64),
    /// String literal.
    Text(String),
}

impl FilterValue {
    /// Borrow this literal as a field value for comparison.
    #[must_use]
    pub fn as_field(&self) -> FieldValue<'_> {
        match self {
            FilterValue::Int(v) => FieldValue::Int(*v),
            FilterValue::Text(s) => FieldValue::Text(s),
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Int(v) => write!(f, "{v}"),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

/// Rejection reasons for an applied-filter construction.
///
/// These are input-validation failures reported to the caller before
/// any filter exists; none of them can occur during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A non-numeric literal was supplied for a numeric field.
    #[error("`{input}` is not a valid number for {field}")]
    InvalidNumber {
        /// The numeric field the literal was meant for.
        field: Field,
        /// The rejected input.
        input: String,
    },

    /// The operator is not permitted for the field.
    #[error("operator `{operator}` is not permitted for {field}")]
    OperatorNotPermitted {
        /// The field in question.
        field: Field,
        /// The rejected operator.
        operator: Operator,
    },

    /// The literal is outside the field's closed value enumeration.
    #[error("`{value}` is not a permitted value for {field}")]
    ValueNotPermitted {
        /// The field in question.
        field: Field,
        /// The rejected value.
        value: String,
    },
}

/// One concrete (field, operator, value) query term.
///
/// ## Example
///
/// ```
/// use card_binder::cards::{CardRecord, Field};
/// use card_binder::filter::{AppliedFilter, Operator};
///
/// let cheap = AppliedFilter::new(Field::ManaCost, Operator::Le, "2").unwrap();
///
/// let surfer = CardRecord::new("Aqua Surfer").with_mana_cost(2);
/// let arm = CardRecord::new("Gigantic Arm").with_mana_cost(5);
///
/// assert!(cheap.matches(&surfer));
/// assert!(!cheap.matches(&arm));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    /// The field this filter tests.
    pub field: Field,

    /// Display label, copied from the definition at creation time.
    pub label: String,

    /// The comparison operator.
    pub operator: Operator,

    /// The literal to compare against.
    pub value: FilterValue,
}

impl AppliedFilter {
    /// Build a filter from a raw literal, validating it against the
    /// field's definition.
    ///
    /// Numeric fields reject literals that do not parse as integers;
    /// all fields reject operators outside their permitted set; fields
    /// with a closed value enumeration reject values outside it.
    pub fn new(field: Field, operator: Operator, raw_value: &str) -> Result<Self, FilterError> {
        let def = definition(field);

        if !def.permits(operator) {
            return Err(FilterError::OperatorNotPermitted { field, operator });
        }

        let value = match field.kind() {
            FieldKind::Int => {
                let parsed =
                    raw_value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| FilterError::InvalidNumber {
                            field,
                            input: raw_value.to_string(),
                        })?;
                FilterValue::Int(parsed)
            }
            FieldKind::Text => {
                if !def.permits_value(raw_value) {
                    return Err(FilterError::ValueNotPermitted {
                        field,
                        value: raw_value.to_string(),
                    });
                }
                FilterValue::Text(raw_value.to_string())
            }
        };

        Ok(Self {
            field,
            label: def.label().to_string(),
            operator,
            value,
        })
    }

    /// Evaluate this filter against a record.
    ///
    /// Comparison operators use the natural ordering of the field's
    /// kind (numeric for `Int`, lexicographic for `Text`). Substring
    /// operators against a non-string value evaluate to `false` in
    /// both directions - no match rather than a crash, since filters
    /// are user-composed and must never take down the view.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        let value = card.field(self.field);

        match self.operator {
            Operator::Contains | Operator::NotContains => {
                match (value, &self.value) {
                    (FieldValue::Text(haystack), FilterValue::Text(needle)) => {
                        let found = haystack.contains(needle.as_str());
                        if self.operator == Operator::Contains {
                            found
                        } else {
                            !found
                        }
                    }
                    _ => false,
                }
            }
            op => match value.partial_cmp(&self.value.as_field()) {
                Some(ordering) => op.matches_ordering(ordering),
                // Kind mismatch between field and literal: no match.
                None => false,
            },
        }
    }
}

impl std::fmt::Display for AppliedFilter {
    /// The chip form shown in the filter bar: `Mana Cost <= 2`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.label, self.operator, self.value)
    }
}
