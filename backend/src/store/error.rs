use common::validation::{validate, Validate, Violation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid {entity}: {}", list(.violations))]
    Invalid {
        entity: &'static str,
        violations: Vec<Violation>,
    },
    #[error("source {0} does not exist")]
    SourceNotFound(i32),
    #[error("source {id} is still referenced by {recipes} recipe(s)")]
    SourceInUse { id: i32, recipes: usize },
    #[error("row id {0} does not fit an entity id")]
    IdOverflow(i64),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn invalid<T: Validate>(entity: &'static str, value: &T) -> Self {
        StoreError::Invalid {
            entity,
            violations: validate(value),
        }
    }
}

fn list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
