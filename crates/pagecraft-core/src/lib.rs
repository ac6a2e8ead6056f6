//! Pagecraft Core Library
//!
//! Platform-agnostic editor state for the pagecraft page designer: page and widget
//! data, selection, bounded undo/redo history and drag geometry. Rendering and
//! event wiring live outside this crate.

pub mod colors;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod history;
pub mod id;
pub mod page;
pub mod selection;
pub mod viewport;
pub mod widget;

pub use colors::ColorHistory;
pub use config::EditorConfig;
pub use document::PageDocument;
pub use editor::{Editor, PageProperty, WidgetProperty};
pub use error::{EditorError, EditorResult};
pub use geometry::{Align, ResizeEdge};
pub use history::{History, HistoryAction, HistoryEntry};
pub use id::{PAGE_UUID, WidgetId, generate_uuid};
pub use page::{Page, PageSetting};
pub use selection::{ActiveElement, DragOrigin, Interaction};
pub use viewport::Viewport;
pub use widget::{LayoutRecord, Widget};
