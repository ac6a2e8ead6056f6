//! Widget records placed on the page.

use crate::id::{PAGE_UUID, WidgetId, is_page_id};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Layout-derived bounds reported by the render layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutRecord {
    /// Smallest width the widget can be resized to.
    pub min_width: f64,
    /// Smallest height the widget can be resized to.
    pub min_height: f64,
    /// Resolved width after layout (0 = not laid out yet).
    pub width: f64,
    /// Resolved height after layout (0 = not laid out yet).
    pub height: f64,
}

impl LayoutRecord {
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

/// A widget on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Unique identifier, assigned when the widget is added.
    #[serde(default)]
    pub uuid: WidgetId,
    /// Widget type tag (e.g. `text`, `image`, `container`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Layering order on the page.
    #[serde(default)]
    pub z_index: i32,
    /// Container this widget is laid out in (`PAGE_UUID` for the page).
    #[serde(default = "page_parent")]
    pub parent: WidgetId,
    /// Container this widget travels with when the container is copied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belong: Option<WidgetId>,
    /// Whether other widgets can live inside this one.
    #[serde(default)]
    pub is_container: bool,
    /// Layout bounds.
    #[serde(default)]
    pub record: LayoutRecord,
    /// Type-specific fields carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn page_parent() -> WidgetId {
    PAGE_UUID.to_string()
}

impl Widget {
    /// Create a top-level widget with the given type and rectangle.
    pub fn new(kind: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            uuid: WidgetId::new(),
            kind: kind.into(),
            name: String::new(),
            left: position.x,
            top: position.y,
            width: size.width,
            height: size.height,
            z_index: 0,
            parent: page_parent(),
            belong: None,
            is_container: false,
            record: LayoutRecord::default(),
            extra: Map::new(),
        }
    }

    /// Create a container widget.
    pub fn container(position: Point, size: Size) -> Self {
        let mut widget = Self::new("container", position, size);
        widget.is_container = true;
        widget
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the minimum size.
    pub fn with_min_size(mut self, min_width: f64, min_height: f64) -> Self {
        self.record.min_width = min_width;
        self.record.min_height = min_height;
        self
    }

    /// Place the widget inside a container.
    pub fn inside(mut self, container: &WidgetId) -> Self {
        self.parent = container.clone();
        self.belong = Some(container.clone());
        self
    }

    /// Attach a type-specific field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Declared size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size after layout, falling back to the declared size per axis
    /// until the render layer reports one.
    pub fn resolved_size(&self) -> Size {
        let width = if self.record.width > 0.0 { self.record.width } else { self.width };
        let height = if self.record.height > 0.0 { self.record.height } else { self.height };
        Size::new(width, height)
    }

    /// Bounding box using the resolved size.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.resolved_size())
    }

    /// Whether the widget sits directly on the page.
    pub fn is_top_level(&self) -> bool {
        is_page_id(&self.parent)
    }
}
