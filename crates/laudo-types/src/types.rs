use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codes::{MaterialType, PackagingColor, PackagingType};

/// One line of the seizure form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub quantity: u32,
    pub material: MaterialType,
    pub packaging: PackagingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_color: Option<PackagingColor>,
    /// Subitem of the preliminary report (laudo de constatação)
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

/// Everything the form layer submits for one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaudoRequest {
    /// Case/report identifier, also used for the file name
    pub report_number: String,
    /// Lacre of the counter-sample
    pub seal_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preliminary_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requesting_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_on: Option<NaiveDate>,
    pub items: Vec<ItemRecord>,
    /// Photo of the received material, plain base64 or a `data:` URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

impl LaudoRequest {
    /// Number of items as entered on the form
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
