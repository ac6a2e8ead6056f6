//! The page: root canvas every widget is placed on.

use crate::id::{PAGE_UUID, WidgetId};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A settings descriptor shown in the page property panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetting {
    pub label: String,
    /// Page field this setting edits.
    pub parent_key: String,
    pub value: Value,
}

/// The root canvas. Missing fields fall back to [`Page::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    /// Always `"page"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Always `PAGE_UUID`.
    pub uuid: WidgetId,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub background_image: String,
    pub opacity: f64,
    /// Toggled to force the render layer to redraw.
    pub tag: f64,
    pub setting: Vec<PageSetting>,
    /// Free-form data owned by the render layer.
    pub record: Map<String, Value>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Size::new(750.0, 1334.0))
    }
}

impl Page {
    /// Create a page of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            name: "Background".to_string(),
            kind: "page".to_string(),
            uuid: PAGE_UUID.to_string(),
            left: 0.0,
            top: 0.0,
            width: size.width,
            height: size.height,
            background_color: "#fff".to_string(),
            background_image: String::new(),
            opacity: 1.0,
            tag: 0.0,
            setting: vec![PageSetting {
                label: "Background color".to_string(),
                parent_key: "backgroundColor".to_string(),
                value: Value::Bool(false),
            }],
            record: Map::new(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Flip the redraw tag so observers see a change.
    pub fn touch(&mut self) {
        self.tag = if self.tag == 0.0 { 0.01 } else { 0.0 };
    }
}
