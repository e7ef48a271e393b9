use crate::model::MAX_NAME_LENGTH;
use crate::model::source::Source;
use crate::validation::{FieldRules, FieldValue, Rule, Validate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An ice cream recipe.
///
/// `page_number` only makes sense when the referenced source has page
/// numbers. That pairing is not checked by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source_id: Option<i32>,
    #[serde(skip)]
    source: Option<Arc<Source>>,
    #[serde(default)]
    pub page_number: Option<i32>,
    /// Minutes.
    #[serde(default)]
    pub preparation_time: Option<i32>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, source_id: i32, preparation_time: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            source_id: Some(source_id),
            source: None,
            page_number: None,
            preparation_time: Some(preparation_time),
        }
    }

    /// A recipe with no field populated, for exercising invalid states.
    pub fn partial() -> Self {
        Self::default()
    }

    /// Identity assigned by storage; `None` until the recipe has been stored.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_page_number(mut self, page_number: i32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// The shared source, when it has been attached.
    pub fn source(&self) -> Option<&Arc<Source>> {
        self.source.as_ref()
    }

    /// Attaches `source`, pointing `source_id` at it when the source is stored.
    pub fn set_source(&mut self, source: Arc<Source>) {
        if let Some(id) = source.id() {
            self.source_id = Some(id);
        }
        self.source = Some(source);
    }

    pub fn with_source(mut self, source: Arc<Source>) -> Self {
        self.set_source(source);
        self
    }
}

impl Validate for Recipe {
    fn rules() -> &'static [FieldRules] {
        &[
            FieldRules {
                field: "name",
                rules: &[Rule::Required, Rule::MaxLength(MAX_NAME_LENGTH)],
            },
            FieldRules {
                field: "sourceId",
                rules: &[Rule::Required],
            },
            FieldRules {
                field: "preparationTime",
                rules: &[
                    Rule::Required,
                    Rule::Range {
                        min: 1,
                        max: i32::MAX as i64,
                    },
                ],
            },
        ]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(Some(self.name.as_str())),
            "sourceId" => FieldValue::Integer(self.source_id.map(i64::from)),
            "pageNumber" => FieldValue::Integer(self.page_number.map(i64::from)),
            "preparationTime" => FieldValue::Integer(self.preparation_time.map(i64::from)),
            _ => FieldValue::Text(None),
        }
    }
}
