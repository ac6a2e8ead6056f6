//! Move, resize and alignment arithmetic.
//!
//! All functions work in page units. Pointer deltas must already be converted from
//! screen pixels with [`Viewport::screen_to_page`](crate::Viewport::screen_to_page).

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Edge of a widget being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Alignment of a widget inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Align {
    #[serde(rename = "left")]
    Left,
    /// Horizontally centered (vertical center line).
    #[serde(rename = "cv")]
    CenterV,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "top")]
    Top,
    /// Vertically centered (horizontal center line).
    #[serde(rename = "ch")]
    CenterH,
    #[serde(rename = "bottom")]
    Bottom,
}

/// Position of a widget dragged by `delta` from `origin`, kept inside the page.
///
/// The far edge is clamped first, then the near edge, so a widget larger than the
/// page sticks to the top-left corner.
pub fn moved_position(origin: Point, delta: Vec2, size: Size, page: Size) -> Point {
    let left = (origin.x + delta.x).min(page.width - size.width).max(0.0);
    let top = (origin.y + delta.y).min(page.height - size.height).max(0.0);
    Point::new(left, top)
}

/// Geometry captured when a resize drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStart {
    /// Widget top-left corner at drag start.
    pub origin: Point,
    /// Widget size at drag start.
    pub size: Size,
}

/// Rectangle of a widget after dragging `edges` by `delta`.
///
/// `current` is the widget rectangle before this step; edges not listed keep its
/// values. Edges are applied in order, so a corner drag passes two of them.
pub fn resized_rect(
    current: Rect,
    start: ResizeStart,
    edges: &[ResizeEdge],
    delta: Vec2,
    min: Size,
    page: Size,
) -> Rect {
    let mut left = current.x0;
    let mut top = current.y0;
    let mut width = current.width();
    let mut height = current.height();

    for edge in edges {
        match edge {
            ResizeEdge::Top => {
                // Bottom edge stays where it was at drag start.
                top = (start.origin.y + delta.y)
                    .max(0.0)
                    .min(start.origin.y + start.size.height - min.height);
                height = (start.size.height + start.origin.y - top).max(min.height);
            }
            ResizeEdge::Bottom => {
                height = (start.size.height + delta.y)
                    .max(min.height)
                    .min(page.height - top);
            }
            ResizeEdge::Left => {
                left = (start.origin.x + delta.x)
                    .max(0.0)
                    .min(start.origin.x + start.size.width - min.width);
                width = (start.size.width + start.origin.x - left).max(min.width);
            }
            ResizeEdge::Right => {
                width = (start.size.width + delta.x)
                    .max(min.width)
                    .min(page.width - left);
            }
        }
    }

    Rect::from_origin_size(Point::new(left, top), Size::new(width, height))
}

/// Position of a widget of `size` aligned inside `container`.
pub fn aligned_position(align: Align, position: Point, size: Size, container: Rect) -> Point {
    let mut aligned = position;
    match align {
        Align::Left => aligned.x = container.x0,
        Align::CenterV => aligned.x = container.x0 + container.width() / 2.0 - size.width / 2.0,
        Align::Right => aligned.x = container.x0 + container.width() - size.width,
        Align::Top => aligned.y = container.y0,
        Align::CenterH => aligned.y = container.y0 + container.height() / 2.0 - size.height / 2.0,
        Align::Bottom => aligned.y = container.y0 + container.height() - size.height,
    }
    aligned
}

/// Clamp a width edit to `[min_width, page_width - left]`; the minimum wins on conflict.
pub fn clamp_width(value: f64, min_width: f64, page_width: f64, left: f64) -> f64 {
    value.min(page_width - left).max(min_width)
}

/// Clamp a height edit to `[min_height, page_height - top]`; the minimum wins on conflict.
pub fn clamp_height(value: f64, min_height: f64, page_height: f64, top: f64) -> f64 {
    value.min(page_height - top).max(min_height)
}

/// Clamp a z-index edit to `[0, max]`.
pub fn clamp_z_index(value: i32, max: i32) -> i32 {
    value.max(0).min(max)
}
