//! Static filter definitions.
//!
//! One `FilterDefinition` per filterable field: which operators are
//! legal, and (for some string fields) the closed enumeration of
//! legal values. This is configuration, defined once and never
//! mutated - the filter bar renders it, `AppliedFilter::new` enforces
//! it.

use crate::cards::{Field, FieldKind};

use super::operator::Operator;

/// Static metadata describing one filterable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterDefinition {
    /// The field this definition constrains.
    pub field: Field,

    /// Operators legal for this field.
    pub operators: &'static [Operator],

    /// Closed value enumeration, if this field has one.
    pub values: Option<&'static [&'static str]>,
}

impl FilterDefinition {
    /// Display label, copied into applied filters at creation time.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.field.label()
    }

    /// The value kind of the underlying field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.field.kind()
    }

    /// Check if an operator is permitted for this field.
    #[must_use]
    pub fn permits(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }

    /// Check if a literal value is permitted for this field.
    ///
    /// Fields without a closed enumeration permit any value.
    #[must_use]
    pub fn permits_value(&self, value: &str) -> bool {
        match self.values {
            Some(values) => values.contains(&value),
            None => true,
        }
    }
}

/// The filterable fields and their constraints, in display order.
pub static FILTERS: [FilterDefinition; 8] = [
    FilterDefinition {
        field: Field::Name,
        operators: &[Operator::Eq],
        values: None,
    },
    FilterDefinition {
        field: Field::Count,
        operators: &[
            Operator::Eq,
            Operator::Gt,
            Operator::Lt,
            Operator::Le,
            Operator::Ge,
        ],
        values: None,
    },
    FilterDefinition {
        field: Field::Civilization,
        operators: &[Operator::Eq, Operator::Ne],
        values: Some(&["Light", "Darkness", "Fire", "Water", "Nature"]),
    },
    FilterDefinition {
        field: Field::Type,
        operators: &[Operator::Eq, Operator::Ne],
        values: Some(&["Creature", "Spell", "Evolution Creature"]),
    },
    FilterDefinition {
        field: Field::Race,
        operators: &[Operator::Eq, Operator::Ne],
        values: None,
    },
    FilterDefinition {
        field: Field::Text,
        operators: &[Operator::Contains, Operator::NotContains],
        values: None,
    },
    FilterDefinition {
        field: Field::ManaCost,
        operators: &[
            Operator::Eq,
            Operator::Ne,
            Operator::Gt,
            Operator::Lt,
            Operator::Le,
            Operator::Ge,
        ],
        values: None,
    },
    FilterDefinition {
        field: Field::Power,
        operators: &[
            Operator::Eq,
            Operator::Ne,
            Operator::Gt,
            Operator::Lt,
            Operator::Le,
            Operator::Ge,
        ],
        values: None,
    },
];

/// Look up the definition for a field.
///
/// `FILTERS` is declared in `Field::ALL` order, one entry per field.
#[must_use]
pub fn definition(field: Field) -> &'static FilterDefinition {
    &FILTERS[field as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_definition() {
        for field in Field::ALL {
            assert_eq!(definition(field).field, field);
        }
    }

    #[test]
    fn test_operator_constraints_match_kinds() {
        for def in &FILTERS {
            for op in def.operators {
                assert!(
                    op.applies_to(def.kind()),
                    "{} does not apply to {:?}",
                    op,
                    def.field
                );
            }
        }
    }

    #[test]
    fn test_name_only_permits_equality() {
        let def = definition(Field::Name);
        assert!(def.permits(Operator::Eq));
        assert!(!def.permits(Operator::Ne));
        assert!(!def.permits(Operator::Contains));
    }

    #[test]
    fn test_civilization_values_are_closed() {
        let def = definition(Field::Civilization);
        assert!(def.permits_value("Water"));
        assert!(def.permits_value("Darkness"));
        assert!(!def.permits_value("Steel"));
    }

    #[test]
    fn test_open_fields_permit_any_value() {
        assert!(definition(Field::Race).permits_value("Cyber Lord"));
        assert!(definition(Field::Name).permits_value("anything at all"));
    }

    #[test]
    fn test_substring_operators_only_on_text() {
        let def = definition(Field::Text);
        assert!(def.permits(Operator::Contains));
        assert!(def.permits(Operator::NotContains));
        assert!(!definition(Field::Power).permits(Operator::Contains));
    }
}
