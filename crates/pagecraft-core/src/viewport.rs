//! Viewport: zoom level and on-screen dimensions of the editing area.

use crate::config::BASE_ZOOM;
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest zoom percentage accepted.
pub const MIN_ZOOM: f64 = 1.0;

/// View-side state of the editor.
///
/// Pointer deltas arrive in screen pixels; the viewport converts them into page
/// units according to the zoom percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Zoom percentage (`BASE_ZOOM` = 1:1).
    pub zoom: f64,
    /// Size of the editing area on screen.
    pub screen: Size,
    /// Size of one grid cell.
    pub grid: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: BASE_ZOOM,
            screen: Size::ZERO,
            grid: Size::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom: zoom.max(MIN_ZOOM),
            ..Self::default()
        }
    }

    /// Set the zoom percentage.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.max(MIN_ZOOM);
    }

    /// Convert a screen-space distance into whole page units.
    pub fn scale(&self, delta: f64) -> f64 {
        (delta * BASE_ZOOM / self.zoom).floor()
    }

    /// Convert a screen-space pointer delta into whole page units.
    pub fn screen_to_page(&self, delta: Vec2) -> Vec2 {
        Vec2::new(self.scale(delta.x), self.scale(delta.y))
    }
}
