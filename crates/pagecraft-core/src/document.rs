//! Exported document format: page fields with the widget list inlined.

use crate::page::Page;
use crate::widget::Widget;
use serde::{Deserialize, Serialize};

/// A page and its widgets, serialized flat as `{ ...page, "widgets": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl PageDocument {
    pub fn new(page: Page, widgets: Vec<Widget>) -> Self {
        Self { page, widgets }
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
