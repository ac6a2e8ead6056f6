//! Editor configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Number of history entries kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
/// Number of recently used colors kept by default.
pub const DEFAULT_COLOR_HISTORY_CAPACITY: usize = 20;
/// Highest z-index a widget may take.
pub const MAX_Z_INDEX: i32 = 998;
/// Offset applied to the first pasted widget.
pub const DEFAULT_PASTE_OFFSET: f64 = 50.0;
/// Zoom percentage corresponding to 1:1 page units.
pub const BASE_ZOOM: f64 = 100.0;

/// Tunables for an [`Editor`](crate::Editor).
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Maximum number of undo entries.
    pub history_capacity: usize,
    /// Maximum number of remembered colors.
    pub color_history_capacity: usize,
    /// Upper bound for widget z-index edits.
    pub max_z_index: i32,
    /// Position delta applied to pasted widgets.
    pub paste_offset: f64,
    /// Page width for a fresh document.
    pub page_width: f64,
    /// Page height for a fresh document.
    pub page_height: f64,
    /// Initial zoom percentage.
    pub zoom: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            color_history_capacity: DEFAULT_COLOR_HISTORY_CAPACITY,
            max_z_index: MAX_Z_INDEX,
            paste_offset: DEFAULT_PASTE_OFFSET,
            page_width: 750.0,
            page_height: 1334.0,
            zoom: BASE_ZOOM,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Default page size.
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }
}
