use std::fmt;

/// A field's value as seen by the validation engine.
///
/// `None` means the field holds no value: the entity came from a partial
/// constructor, from a payload that omitted the field, or had it cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(Option<i64>),
    Flag(Option<bool>),
}

/// A single declarative constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present; text must also contain something besides whitespace.
    Required,
    /// Text may hold at most this many characters.
    MaxLength(usize),
    /// Integer must lie in `min..=max`.
    Range { min: i64, max: i64 },
}

/// The rules declared for one field, evaluated in order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl Rule {
    /// Returns the failure reason, or `None` when `value` satisfies the rule.
    ///
    /// Rules that do not apply to the value's kind, or to an absent value
    /// (other than `Required`), are satisfied.
    pub fn check(&self, field: &str, value: &FieldValue<'_>) -> Option<String> {
        match (*self, *value) {
            (Rule::Required, FieldValue::Text(text)) => match text {
                Some(text) if !text.trim().is_empty() => None,
                _ => Some(format!("The {field} field is required.")),
            },
            (Rule::Required, FieldValue::Integer(None) | FieldValue::Flag(None)) => {
                Some(format!("The {field} field is required."))
            }
            (Rule::MaxLength(max), FieldValue::Text(Some(text)))
                if text.chars().count() > max =>
            {
                Some(format!("The field {field} exceeds maximum length of {max}."))
            }
            (Rule::Range { min, max }, FieldValue::Integer(Some(n))) if n < min || n > max => {
                Some(format!("The field {field} must be between {min} and {max}."))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::MaxLength(max) => write!(f, "max length {max}"),
            Rule::Range { min, max } => write!(f, "range {min}..={max}"),
        }
    }
}
