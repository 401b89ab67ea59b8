//! Filter operators.
//!
//! `Operator` is a closed sum type with exhaustive matching at the
//! predicate compilation site, so adding or removing an operator is a
//! type-checked, single-point change. Wire spellings are the symbol
//! forms the filter bar displays (`=`, `!=`, `contains`, ...).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cards::FieldKind;

/// A filter comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `=` - equal.
    #[serde(rename = "=")]
    Eq,
    /// `!=` - not equal.
    #[serde(rename = "!=")]
    Ne,
    /// `>` - greater than.
    #[serde(rename = ">")]
    Gt,
    /// `<` - less than.
    #[serde(rename = "<")]
    Lt,
    /// `<=` - less than or equal.
    #[serde(rename = "<=")]
    Le,
    /// `>=` - greater than or equal.
    #[serde(rename = ">=")]
    Ge,
    /// `contains` - substring match. String fields only.
    #[serde(rename = "contains")]
    Contains,
    /// `not contains` - negated substring match. String fields only.
    #[serde(rename = "not contains")]
    NotContains,
}

impl Operator {
    /// Every operator, in display order.
    pub const ALL: [Operator; 8] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Le,
        Operator::Ge,
        Operator::Contains,
        Operator::NotContains,
    ];

    /// The symbol spelling of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Contains => "contains",
            Operator::NotContains => "not contains",
        }
    }

    /// Parse an operator from its symbol spelling.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Check if this is a substring operator (`contains` / `not contains`).
    #[must_use]
    pub const fn is_substring(self) -> bool {
        matches!(self, Operator::Contains | Operator::NotContains)
    }

    /// Check if this operator can apply to a field of the given kind.
    ///
    /// Comparison operators order numbers numerically and strings
    /// lexicographically; substring operators only apply to string
    /// fields.
    #[must_use]
    pub const fn applies_to(self, kind: FieldKind) -> bool {
        match self {
            Operator::Contains | Operator::NotContains => matches!(kind, FieldKind::Text),
            _ => true,
        }
    }

    /// Evaluate a comparison operator against an ordering between a
    /// field value and a filter literal.
    ///
    /// Substring operators have no ordering interpretation and never
    /// match here.
    #[must_use]
    pub const fn matches_ordering(self, ordering: Ordering) -> bool {
        match self {
            Operator::Eq => matches!(ordering, Ordering::Equal),
            Operator::Ne => !matches!(ordering, Ordering::Equal),
            Operator::Gt => matches!(ordering, Ordering::Greater),
            Operator::Lt => matches!(ordering, Ordering::Less),
            Operator::Le => matches!(ordering, Ordering::Less | Ordering::Equal),
            Operator::Ge => matches!(ordering, Ordering::Greater | Ordering::Equal),
            Operator::Contains | Operator::NotContains => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s).ok_or_else(|| format!("unknown operator `{s}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol("~="), None);
    }

    #[test]
    fn test_applies_to() {
        assert!(Operator::Eq.applies_to(FieldKind::Int));
        assert!(Operator::Eq.applies_to(FieldKind::Text));
        assert!(Operator::Le.applies_to(FieldKind::Int));
        assert!(Operator::Contains.applies_to(FieldKind::Text));
        assert!(!Operator::Contains.applies_to(FieldKind::Int));
        assert!(!Operator::NotContains.applies_to(FieldKind::Int));
    }

    #[test]
    fn test_matches_ordering() {
        assert!(Operator::Eq.matches_ordering(Ordering::Equal));
        assert!(!Operator::Eq.matches_ordering(Ordering::Less));
        assert!(Operator::Ne.matches_ordering(Ordering::Greater));
        assert!(Operator::Le.matches_ordering(Ordering::Less));
        assert!(Operator::Le.matches_ordering(Ordering::Equal));
        assert!(!Operator::Le.matches_ordering(Ordering::Greater));
        assert!(Operator::Ge.matches_ordering(Ordering::Equal));
        assert!(!Operator::Lt.matches_ordering(Ordering::Equal));
    }

    #[test]
    fn test_serde_uses_symbols() {
        assert_eq!(serde_json::to_string(&Operator::Le).unwrap(), "\"<=\"");
        let op: Operator = serde_json::from_str("\"not contains\"").unwrap();
        assert_eq!(op, Operator::NotContains);
    }
}
