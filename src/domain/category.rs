//! Domain type for line-item categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// Groups invoice line items for reporting. `parent` is a loose reference to
/// another category's name and is not enforced anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub parent: String,
}

impl Category {
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            parent: parent.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        if self.parent.is_empty() {
            self.name.clone()
        } else {
            format!("{} (parent: {})", self.name, self.parent)
        }
    }
}
