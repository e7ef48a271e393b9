use crate::model::MAX_NAME_LENGTH;
use crate::validation::{FieldRules, FieldValue, Rule, Validate};
use serde::{Deserialize, Serialize};

/// Where a recipe comes from: a cookbook, a website, a family member.
///
/// `recipe_ids` is a back-reference used for navigation only. A source does
/// not own its recipes; the catalog store fills the list when loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub has_page_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipe_ids: Vec<i32>,
}

impl Source {
    pub fn new(name: impl Into<String>, has_page_numbers: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            has_page_numbers: Some(has_page_numbers),
            recipe_ids: Vec::new(),
        }
    }

    /// A source with no field populated, for exercising invalid states.
    pub fn partial() -> Self {
        Self::default()
    }

    /// Identity assigned by storage; `None` until the source has been stored.
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Validate for Source {
    fn rules() -> &'static [FieldRules] {
        &[
            FieldRules {
                field: "name",
                rules: &[Rule::Required, Rule::MaxLength(MAX_NAME_LENGTH)],
            },
            FieldRules {
                field: "hasPageNumbers",
                rules: &[Rule::Required],
            },
        ]
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "name" => FieldValue::Text(Some(self.name.as_str())),
            "hasPageNumbers" => FieldValue::Flag(self.has_page_numbers),
            _ => FieldValue::Text(None),
        }
    }
}
