//! Active selection and the pointer interaction state machine.

use crate::geometry::ResizeStart;
use crate::id::{WidgetId, is_page_id};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// What the editor currently has selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveElement {
    /// The page itself.
    #[default]
    Page,
    /// A widget, by id.
    Widget(WidgetId),
}

impl ActiveElement {
    /// Build from an id, mapping the page sentinel to [`ActiveElement::Page`].
    pub fn from_id(id: &str) -> Self {
        if is_page_id(id) {
            Self::Page
        } else {
            Self::Widget(id.to_string())
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page)
    }

    /// The selected widget id, if a widget is selected.
    pub fn widget_id(&self) -> Option<&str> {
        match self {
            Self::Page => None,
            Self::Widget(id) => Some(id.as_str()),
        }
    }
}

/// Pointer and widget positions captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOrigin {
    /// Pointer position (screen pixels) at drag start.
    pub pointer: Point,
    /// Widget top-left corner (page units) at drag start.
    pub widget: Point,
}

impl DragOrigin {
    pub fn new(pointer: Point, widget: Point) -> Self {
        Self { pointer, widget }
    }

    /// Pointer travel since the drag started, in screen pixels.
    pub fn delta(&self, pointer: Point) -> Vec2 {
        pointer - self.pointer
    }
}

/// Pointer interaction in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    /// No drag in progress.
    #[default]
    Idle,
    /// Moving the selected widget.
    Moving {
        origin: DragOrigin,
        /// Whether any drag step changed the widget.
        dirty: bool,
    },
    /// Resizing the selected widget.
    Resizing {
        origin: DragOrigin,
        /// Widget size at drag start.
        start_size: Size,
        dirty: bool,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Resize start geometry, if resizing.
    pub fn resize_start(&self) -> Option<ResizeStart> {
        match self {
            Self::Resizing { origin, start_size, .. } => Some(ResizeStart {
                origin: origin.widget,
                size: *start_size,
            }),
            _ => None,
        }
    }

    /// Record that a drag step mutated the widget.
    pub fn mark_dirty(&mut self) {
        match self {
            Self::Moving { dirty, .. } | Self::Resizing { dirty, .. } => *dirty = true,
            Self::Idle => {}
        }
    }

    /// End the interaction, returning whether anything changed during it.
    pub fn finish(&mut self) -> bool {
        let changed = match self {
            Self::Moving { dirty, .. } | Self::Resizing { dirty, .. } => *dirty,
            Self::Idle => false,
        };
        *self = Self::Idle;
        changed
    }
}
