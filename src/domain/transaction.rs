//! Domain type for invoice transaction line items.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// An invoice line item carrying a carbon emission coefficient. `category`
/// references a [`super::Category`] by name; the reference is checked against
/// the loaded category listing at save time, never by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub unit: String,
    pub coefficient: f64,
    pub category: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        coefficient: f64,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            unit: unit.into(),
            coefficient,
            category: category.into(),
            source: source.into(),
            source_name: None,
        }
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} ({} per {}, {})",
            self.name, self.coefficient, self.unit, self.category
        )
    }
}
