//! Domain type for high-speed-rail station entries.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};

/// Carbon footprint of one HSR origin/destination pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HsrStation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "carbonFootprint")]
    pub carbon_footprint: f64,
}

impl HsrStation {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        carbon_footprint: f64,
    ) -> Self {
        Self {
            id: None,
            origin: origin.into(),
            destination: destination.into(),
            carbon_footprint,
        }
    }
}

impl Identifiable for HsrStation {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Displayable for HsrStation {
    fn display_label(&self) -> String {
        format!(
            "{} → {} ({} kgCO2e)",
            self.origin, self.destination, self.carbon_footprint
        )
    }
}
