//! Declarative validation for catalog entities.
//!
//! Every entity publishes a rule table through [`Validate`]: one [`FieldRules`]
//! entry per constrained field. [`validate`] walks that table and stops at the
//! first rule a field fails, so each offending field yields exactly one
//! [`Violation`]. Validation never fails with an error; an empty list means the
//! entity is valid.

mod rule;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use rule::{FieldRules, FieldValue, Rule};

/// A failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Implemented by entities that carry declared field constraints.
pub trait Validate {
    /// The entity's rule table, in reporting order.
    fn rules() -> &'static [FieldRules];

    /// Current value of the named field. Unknown names read as absent text.
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// Evaluates `entity` against its rule table.
pub fn validate<T: Validate>(entity: &T) -> Vec<Violation> {
    T::rules()
        .iter()
        .filter_map(|declared| {
            let value = entity.field_value(declared.field);
            declared
                .rules
                .iter()
                .find_map(|rule| rule.check(declared.field, &value))
                .map(|reason| Violation {
                    field: declared.field.to_string(),
                    reason,
                })
        })
        .collect()
}

pub fn is_valid<T: Validate>(entity: &T) -> bool {
    validate(entity).is_empty()
}
