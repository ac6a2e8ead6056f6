//! Editor state and the operations the view layer drives.

use crate::colors::ColorHistory;
use crate::config::EditorConfig;
use crate::document::PageDocument;
use crate::error::{EditorError, EditorResult};
use crate::geometry::{self, Align, ResizeEdge};
use crate::history::{History, HistoryAction, HistoryEntry};
use crate::id::{WidgetId, generate_uuid, is_page_id};
use crate::page::{Page, PageSetting};
use crate::selection::{ActiveElement, DragOrigin, Interaction};
use crate::viewport::Viewport;
use crate::widget::{LayoutRecord, Widget};
use kurbo::{Point, Rect, Size};
use serde_json::Value;
use std::collections::HashMap;

/// A page field edited through [`Editor::update_page_data`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageProperty {
    Name(String),
    Width(f64),
    Height(f64),
    BackgroundColor(String),
    BackgroundImage(String),
    Opacity(f64),
    Setting(Vec<PageSetting>),
}

/// A widget field edited through [`Editor::update_widget_data`].
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetProperty {
    Name(String),
    Left(f64),
    Top(f64),
    /// Clamped to `[min_width, page_width - left]`.
    Width(f64),
    /// Clamped to `[min_height, page_height - top]`.
    Height(f64),
    /// Clamped to `[0, max_z_index]`.
    ZIndex(i32),
    /// Any type-specific field.
    Field(String, Value),
}

fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Editor state: the page, its widgets, selection, history and drag state.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    viewport: Viewport,
    page: Page,
    /// Widgets in insertion order.
    widgets: Vec<Widget>,
    active: ActiveElement,
    clipboard: Vec<Widget>,
    hover: Option<WidgetId>,
    show_ref_line: bool,
    colors: ColorHistory,
    history: History,
    interaction: Interaction,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with a blank page and default settings.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an editor with a blank page.
    pub fn with_config(config: EditorConfig) -> Self {
        let page = Page::new(config.page_size());
        Self {
            viewport: Viewport::new(config.zoom),
            history: History::with_origin(config.history_capacity, page.clone()),
            colors: ColorHistory::new(config.color_history_capacity),
            page,
            widgets: Vec::new(),
            active: ActiveElement::Page,
            clipboard: Vec::new(),
            hover: None,
            show_ref_line: true,
            interaction: Interaction::Idle,
            config,
        }
    }

    /// Create an editor showing an existing document.
    pub fn from_document(document: PageDocument, config: EditorConfig) -> Self {
        let mut editor = Self::with_config(config);
        editor.load_document(document);
        editor
    }

    // --- Queries ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Zoom percentage.
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn screen(&self) -> Size {
        self.viewport.screen
    }

    pub fn grid_size(&self) -> Size {
        self.viewport.grid
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Get a widget by ID.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.uuid == id)
    }

    fn widget_index(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.uuid == id)
    }

    fn active_index(&self) -> Option<usize> {
        self.active.widget_id().and_then(|id| self.widget_index(id))
    }

    pub fn active(&self) -> &ActiveElement {
        &self.active
    }

    /// The selected widget, or None when the page is selected.
    pub fn active_widget(&self) -> Option<&Widget> {
        self.active.widget_id().and_then(|id| self.widget(id))
    }

    pub fn clipboard(&self) -> &[Widget] {
        &self.clipboard
    }

    pub fn hover(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    pub fn show_ref_line(&self) -> bool {
        self.show_ref_line
    }

    pub fn colors(&self) -> &ColorHistory {
        &self.colors
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// History cursor, -1 when before the first entry.
    pub fn history_index(&self) -> isize {
        self.history.index()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    // --- View settings ---

    pub fn update_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn update_screen(&mut self, screen: Size) {
        self.viewport.screen = screen;
    }

    pub fn update_grid_size(&mut self, grid: Size) {
        self.viewport.grid = grid;
    }

    /// Set the widget under the pointer (None or the page sentinel clears it).
    pub fn update_hover(&mut self, id: Option<&str>) {
        self.hover = id.filter(|id| !is_page_id(id)).map(str::to_string);
    }

    pub fn set_show_ref_line(&mut self, show: bool) {
        self.show_ref_line = show;
    }

    /// Remember a picked color.
    pub fn push_color(&mut self, color: impl Into<String>) {
        self.colors.push(color);
    }

    /// Flip the page redraw tag.
    pub fn refresh(&mut self) {
        self.page.touch();
    }

    // --- History ---

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            widgets: self.widgets.clone(),
            active: self.active.clone(),
            page: self.page.clone(),
        }
    }

    /// Record the current state as a history entry.
    pub fn push_history(&mut self) {
        let entry = self.snapshot();
        self.history.push(entry);
    }

    /// Step through history. Returns true if a snapshot was restored.
    pub fn handle_history(&mut self, action: HistoryAction) -> bool {
        let Some(entry) = self.history.step(action) else {
            return false;
        };
        self.widgets = entry.widgets;
        self.page = entry.page;
        self.active = self.resolve(entry.active);
        self.interaction = Interaction::Idle;
        true
    }

    pub fn undo(&mut self) -> bool {
        self.handle_history(HistoryAction::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.handle_history(HistoryAction::Redo)
    }

    /// Map a stored selection onto the current widgets, falling back to the page.
    fn resolve(&self, active: ActiveElement) -> ActiveElement {
        match active {
            ActiveElement::Widget(id) if self.widget(&id).is_none() => {
                log::warn!("Selected widget {} no longer exists, selecting page", id);
                ActiveElement::Page
            }
            other => other,
        }
    }

    /// Touch the page and record history after a widget mutation.
    fn commit(&mut self) {
        self.refresh();
        self.push_history();
    }

    // --- Selection ---

    /// Select a widget by ID, or the page for the page sentinel.
    ///
    /// Unknown ids select the page.
    pub fn select_widget(&mut self, id: &str) {
        if is_page_id(id) {
            self.select_page();
        } else {
            self.active = self.resolve(ActiveElement::Widget(id.to_string()));
        }
    }

    /// Select the page.
    pub fn select_page(&mut self) {
        self.active = ActiveElement::Page;
    }

    // --- Data updates ---

    /// Update a page field. Records history if the value changed or `force` is set.
    pub fn update_page_data(&mut self, property: PageProperty, force: bool) -> bool {
        let page = &mut self.page;
        let changed = match property {
            PageProperty::Name(v) => assign(&mut page.name, v),
            PageProperty::Width(v) => assign(&mut page.width, v),
            PageProperty::Height(v) => assign(&mut page.height, v),
            PageProperty::BackgroundColor(v) => assign(&mut page.background_color, v),
            PageProperty::BackgroundImage(v) => assign(&mut page.background_image, v),
            PageProperty::Opacity(v) => assign(&mut page.opacity, v),
            PageProperty::Setting(v) => assign(&mut page.setting, v),
        };
        if changed || force {
            self.push_history();
        }
        changed
    }

    /// Update a widget field, clamping geometry to the page.
    ///
    /// Records history if the stored value changed or `force` is set.
    pub fn update_widget_data(
        &mut self,
        id: &str,
        property: WidgetProperty,
        force: bool,
    ) -> EditorResult<bool> {
        let index = self
            .widget_index(id)
            .ok_or_else(|| EditorError::WidgetNotFound(id.to_string()))?;
        let page_size = self.page.size();
        let max_z = self.config.max_z_index;
        let widget = &mut self.widgets[index];

        let changed = match property {
            WidgetProperty::Name(v) => assign(&mut widget.name, v),
            WidgetProperty::Left(v) => assign(&mut widget.left, v),
            WidgetProperty::Top(v) => assign(&mut widget.top, v),
            WidgetProperty::Width(v) => {
                let v = geometry::clamp_width(v, widget.record.min_width, page_size.width, widget.left);
                assign(&mut widget.width, v)
            }
            WidgetProperty::Height(v) => {
                let v = geometry::clamp_height(v, widget.record.min_height, page_size.height, widget.top);
                assign(&mut widget.height, v)
            }
            WidgetProperty::ZIndex(v) => assign(&mut widget.z_index, geometry::clamp_z_index(v, max_z)),
            WidgetProperty::Field(key, v) => {
                if widget.extra.get(&key) == Some(&v) {
                    false
                } else {
                    widget.extra.insert(key, v);
                    true
                }
            }
        };

        if changed || force {
            self.commit();
        }
        Ok(changed)
    }

    /// Store layout bounds reported by the render layer. Not recorded in history.
    pub fn update_layout_record(&mut self, id: &str, record: LayoutRecord) -> EditorResult<()> {
        let index = self
            .widget_index(id)
            .ok_or_else(|| EditorError::WidgetNotFound(id.to_string()))?;
        self.widgets[index].record = record;
        Ok(())
    }

    // --- Widget collection ---

    /// Add a widget with a fresh ID and select it.
    pub fn add_widget(&mut self, mut widget: Widget) -> WidgetId {
        let id = generate_uuid();
        widget.uuid = id.clone();
        self.widgets.push(widget);
        self.active = ActiveElement::Widget(id.clone());
        self.commit();
        id
    }

    /// Delete the selected widget, and its children if it is a container.
    ///
    /// Does nothing when the page is selected. Returns true if anything was removed.
    pub fn delete_widget(&mut self) -> bool {
        let Some(id) = self.active.widget_id().map(str::to_string) else {
            return false;
        };
        let Some(index) = self.widget_index(&id) else {
            log::warn!("Cannot delete missing widget {}", id);
            self.active = ActiveElement::Page;
            return false;
        };

        let removed = self.widgets.remove(index);
        if removed.is_container {
            self.widgets.retain(|w| w.parent != id);
        }
        if self.hover.as_deref().is_some_and(|h| self.widget(h).is_none()) {
            self.hover = None;
        }

        self.active = ActiveElement::Page;
        self.commit();
        true
    }

    /// Copy the selected widget (and a container's members) to the clipboard.
    pub fn copy_widget(&mut self) -> bool {
        let Some(widget) = self.active_widget() else {
            return false;
        };

        let mut copied = vec![widget.clone()];
        if widget.is_container {
            let id = widget.uuid.as_str();
            copied.extend(
                self.widgets
                    .iter()
                    .filter(|w| w.belong.as_deref() == Some(id))
                    .cloned(),
            );
        }

        log::debug!("Copied {} widget(s)", copied.len());
        self.clipboard = copied;
        true
    }

    /// Paste the clipboard with fresh IDs, offsetting and selecting the first widget.
    ///
    /// Children copied with a container are re-pointed at the pasted container.
    pub fn paste_widget(&mut self) -> Option<WidgetId> {
        if self.clipboard.is_empty() {
            return None;
        }

        let mut pasted = self.clipboard.clone();
        let renamed: HashMap<WidgetId, WidgetId> = pasted
            .iter_mut()
            .map(|w| {
                let fresh = generate_uuid();
                (std::mem::replace(&mut w.uuid, fresh.clone()), fresh)
            })
            .collect();

        for widget in &mut pasted {
            if let Some(fresh) = renamed.get(&widget.parent) {
                widget.parent = fresh.clone();
            }
            if let Some(fresh) = widget.belong.as_ref().and_then(|b| renamed.get(b)) {
                widget.belong = Some(fresh.clone());
            }
        }

        let first = &mut pasted[0];
        first.left += self.config.paste_offset;
        first.top += self.config.paste_offset;
        let id = first.uuid.clone();

        self.widgets.extend(pasted);
        self.active = ActiveElement::Widget(id.clone());
        self.commit();
        Some(id)
    }

    // --- Alignment ---

    /// Bounds a widget is aligned within: its container's resolved bounds, or the page.
    fn container_bounds(&self, widget: &Widget) -> Rect {
        if widget.is_top_level() {
            return self.page.bounds();
        }
        match self.widget(&widget.parent) {
            Some(parent) => parent.bounds(),
            None => {
                log::warn!("Container {} of widget {} not found, aligning to page", widget.parent, widget.uuid);
                self.page.bounds()
            }
        }
    }

    /// Align the selected widget inside its container.
    pub fn align(&mut self, align: Align) -> bool {
        let Some(index) = self.active_index() else {
            return false;
        };
        let widget = &self.widgets[index];
        let container = self.container_bounds(widget);
        let target = geometry::aligned_position(align, widget.position(), widget.resolved_size(), container);

        if target == widget.position() {
            return false;
        }
        let widget = &mut self.widgets[index];
        widget.left = target.x;
        widget.top = target.y;
        self.commit();
        true
    }

    // --- Pointer interactions ---

    /// Start moving the selected widget. `pointer` is in screen pixels.
    pub fn begin_move(&mut self, pointer: Point) -> bool {
        let Some(widget) = self.active_widget() else {
            return false;
        };
        let origin = DragOrigin::new(pointer, widget.position());
        self.interaction = Interaction::Moving { origin, dirty: false };
        true
    }

    /// Move the selected widget to follow the pointer, staying inside the page.
    pub fn drag_move(&mut self, pointer: Point) -> bool {
        let Interaction::Moving { origin, .. } = self.interaction else {
            return false;
        };
        let Some(index) = self.active_index() else {
            return false;
        };

        let delta = self.viewport.screen_to_page(origin.delta(pointer));
        let widget = &mut self.widgets[index];
        let target = geometry::moved_position(origin.widget, delta, widget.resolved_size(), self.page.size());
        if target == widget.position() {
            return false;
        }

        widget.left = target.x;
        widget.top = target.y;
        self.interaction.mark_dirty();
        self.refresh();
        true
    }

    /// Finish a move, recording history if the widget moved.
    pub fn end_move(&mut self) -> bool {
        if !self.interaction.is_moving() {
            return false;
        }
        self.finish_interaction()
    }

    /// Start resizing the selected widget. `pointer` is in screen pixels.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        let Some(widget) = self.active_widget() else {
            return false;
        };
        let origin = DragOrigin::new(pointer, widget.position());
        self.interaction = Interaction::Resizing {
            origin,
            start_size: widget.size(),
            dirty: false,
        };
        true
    }

    /// Resize the selected widget by dragging `edges` to follow the pointer.
    pub fn drag_resize(&mut self, pointer: Point, edges: &[ResizeEdge]) -> bool {
        let Some(start) = self.interaction.resize_start() else {
            return false;
        };
        let Interaction::Resizing { origin, .. } = self.interaction else {
            return false;
        };
        let Some(index) = self.active_index() else {
            return false;
        };

        let delta = self.viewport.screen_to_page(origin.delta(pointer));
        let widget = &mut self.widgets[index];
        let current = Rect::from_origin_size(widget.position(), widget.size());
        let resized = geometry::resized_rect(
            current,
            start,
            edges,
            delta,
            widget.record.min_size(),
            self.page.size(),
        );
        if resized == current {
            return false;
        }

        widget.left = resized.x0;
        widget.top = resized.y0;
        widget.width = resized.width();
        widget.height = resized.height();
        self.interaction.mark_dirty();
        self.refresh();
        true
    }

    /// Finish a resize, recording history if the widget changed.
    pub fn end_resize(&mut self) -> bool {
        if !self.interaction.is_resizing() {
            return false;
        }
        self.finish_interaction()
    }

    fn finish_interaction(&mut self) -> bool {
        let changed = self.interaction.finish();
        if changed {
            log::debug!("Drag finished, recording history");
            self.push_history();
        }
        changed
    }

    // --- Documents ---

    /// Page and widgets in export form.
    pub fn export_document(&self) -> PageDocument {
        PageDocument::new(self.page.clone(), self.widgets.clone())
    }

    /// Export as pretty JSON.
    pub fn to_json(&self) -> EditorResult<String> {
        Ok(self.export_document().to_json()?)
    }

    /// Replace the page and widgets, select the page and restart history.
    ///
    /// Widgets without an ID get a fresh one.
    pub fn load_document(&mut self, document: PageDocument) {
        let PageDocument { page, mut widgets } = document;
        for widget in widgets.iter_mut().filter(|w| w.uuid.is_empty()) {
            widget.uuid = generate_uuid();
        }
        log::info!("Loaded document with {} widget(s)", widgets.len());

        self.page = page;
        self.widgets = widgets;
        self.active = ActiveElement::Page;
        self.hover = None;
        self.interaction = Interaction::Idle;
        self.history.reset(self.page.clone());
    }

    /// Load a document from JSON.
    pub fn load_json(&mut self, json: &str) -> EditorResult<()> {
        let document = PageDocument::from_json(json)?;
        self.load_document(document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(left: f64, top: f64, width: f64, height: f64) -> Widget {
        Widget::new("text", Point::new(left, top), Size::new(width, height)).with_min_size(20.0, 20.0)
    }

    #[test]
    fn test_new_editor() {
        let editor = Editor::new();
        assert!(editor.widgets().is_empty());
        assert!(editor.active().is_page());
        assert_eq!(editor.history_index(), -1);
        assert_eq!(editor.history().page_history_len(), 1);
        assert!(editor.show_ref_line());
    }

    #[test]
    fn test_add_widget_selects_and_records() {
        let mut editor = Editor::new();
        let id = editor.add_widget(text(10.0, 10.0, 100.0, 40.0));

        assert_eq!(id.len(), 12);
        assert_eq!(editor.active_widget().unwrap().uuid, id);
        assert_eq!(editor.history_len(), 1);
        assert_eq!(editor.history_index(), 0);
    }

    #[test]
    fn test_history_bounded() {
        let mut editor = Editor::new();
        for i in 0..15 {
            editor.add_widget(text(i as f64, 0.0, 50.0, 50.0));
            assert!(editor.history_len() <= 10);
            assert!(editor.history().page_history_len() <= editor.history_len() + 1);
        }
    }

    #[test]
    fn test_push_after_undo_truncates() {
        let mut editor = Editor::new();
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        assert!(editor.undo());
        assert!(editor.undo());
        editor.push_history();

        assert_eq!(editor.history_len(), 2);
        assert_eq!(editor.history_index(), 1);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut editor = Editor::new();
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        let id = editor.add_widget(text(100.0, 100.0, 50.0, 50.0));
        editor.update_page_data(PageProperty::BackgroundColor("#123".into()), false);

        let widgets = editor.widgets().to_vec();
        let page = editor.page().clone();

        assert!(editor.undo());
        assert_eq!(editor.page().background_color, "#fff");
        assert!(editor.redo());
        assert_eq!(editor.widgets(), widgets.as_slice());
        assert_eq!(editor.page(), &page);
        assert_eq!(editor.active(), &ActiveElement::Widget(id));
    }

    #[test]
    fn test_undo_to_empty_page() {
        let mut editor = Editor::new();
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));

        assert!(editor.undo());
        assert!(editor.widgets().is_empty());
        assert!(editor.active().is_page());
        assert_eq!(editor.history_index(), -1);
    }

    #[test]
    fn test_undo_after_eviction_restores_earliest_page() {
        let mut editor = Editor::new();
        for i in 0..11 {
            editor.add_widget(text(i as f64, 0.0, 50.0, 50.0));
        }
        assert_eq!(editor.history_len(), 10);
        assert_eq!(editor.history().page_history_len(), 11);

        for _ in 0..9 {
            assert!(editor.undo());
        }
        // Full log: no page before the first entry to go back to.
        assert!(!editor.undo());
        assert_eq!(editor.widgets().len(), 2);

        editor.update_page_data(PageProperty::BackgroundColor("#abc".into()), false);
        assert_eq!(editor.history_len(), 1);

        assert!(editor.undo());
        assert!(editor.widgets().is_empty());
        assert_eq!(editor.page().background_color, "#fff");
        assert_eq!(editor.history_index(), -1);
    }

    #[test]
    fn test_undo_selection_falls_back_to_page() {
        let mut editor = Editor::new();
        let id = editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.select_widget(&id);
        editor.delete_widget();

        // Entry 1 remembers the second widget as active.
        assert!(editor.undo());
        assert!(editor.active_widget().is_some());

        // Hand-crafted stale entry.
        let mut stale = editor.clone();
        stale.active = ActiveElement::Widget("ffffffffffff".into());
        stale.push_history();
        stale.add_widget(text(0.0, 0.0, 50.0, 50.0));
        assert!(stale.undo());
        assert!(stale.active().is_page());
    }

    #[test]
    fn test_delete_page_is_noop() {
        let mut editor = Editor::new();
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.select_page();
        assert!(!editor.delete_widget());
        assert_eq!(editor.widgets().len(), 1);
        assert_eq!(editor.history_len(), 1);
    }

    #[test]
    fn test_delete_container_cascades() {
        let mut editor = Editor::new();
        let container = editor.add_widget(Widget::container(Point::ZERO, Size::new(300.0, 300.0)));
        // Adjacent children must all go.
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0).inside(&container));
        editor.add_widget(text(10.0, 0.0, 50.0, 50.0).inside(&container));
        let outsider = editor.add_widget(text(400.0, 0.0, 50.0, 50.0));

        editor.select_widget(&container);
        assert!(editor.delete_widget());

        assert_eq!(editor.widgets().len(), 1);
        assert_eq!(editor.widgets()[0].uuid, outsider);
        assert!(editor.active().is_page());
    }

    #[test]
    fn test_copy_paste_container() {
        let mut editor = Editor::new();
        let container = editor.add_widget(Widget::container(Point::new(10.0, 10.0), Size::new(300.0, 300.0)));
        editor.add_widget(text(20.0, 20.0, 50.0, 50.0).inside(&container));
        editor.select_widget(&container);

        assert!(editor.copy_widget());
        assert_eq!(editor.clipboard().len(), 2);

        let pasted = editor.paste_widget().unwrap();
        assert_ne!(pasted, container);
        assert_eq!(editor.widgets().len(), 4);

        let copy = editor.widget(&pasted).unwrap();
        assert_eq!(copy.position(), Point::new(60.0, 60.0));
        let child = &editor.widgets()[3];
        assert_eq!(child.parent, pasted);
        assert_eq!(child.belong.as_deref(), Some(pasted.as_str()));
        assert_eq!(child.position(), Point::new(20.0, 20.0));
        assert_eq!(editor.active_widget().unwrap().uuid, pasted);
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let mut editor = Editor::new();
        assert!(!editor.copy_widget());
        assert!(editor.paste_widget().is_none());
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn test_move_scaled_by_zoom() {
        let mut editor = Editor::new();
        editor.add_widget(text(100.0, 100.0, 50.0, 50.0));
        editor.update_zoom(50.0);

        assert!(editor.begin_move(Point::new(300.0, 300.0)));
        assert!(editor.drag_move(Point::new(320.0, 300.0)));
        assert_eq!(editor.active_widget().unwrap().left, 140.0);

        assert!(editor.end_move());
        assert_eq!(editor.history_len(), 2);
        assert!(editor.interaction().is_idle());
    }

    #[test]
    fn test_move_clamped_to_page() {
        let mut editor = Editor::new();
        editor.add_widget(text(100.0, 100.0, 50.0, 50.0));
        editor.begin_move(Point::ZERO);
        editor.drag_move(Point::new(5000.0, -5000.0));

        let widget = editor.active_widget().unwrap();
        assert_eq!(widget.position(), Point::new(700.0, 0.0));
    }

    #[test]
    fn test_move_without_change_records_nothing() {
        let mut editor = Editor::new();
        editor.add_widget(text(100.0, 100.0, 50.0, 50.0));
        editor.begin_move(Point::new(10.0, 10.0));
        assert!(!editor.drag_move(Point::new(10.0, 10.0)));
        assert!(!editor.end_move());
        assert_eq!(editor.history_len(), 1);
    }

    #[test]
    fn test_drag_requires_widget_selection() {
        let mut editor = Editor::new();
        assert!(!editor.begin_move(Point::ZERO));
        assert!(!editor.drag_move(Point::new(10.0, 10.0)));
        assert!(!editor.end_move());
    }

    #[test]
    fn test_resize_right_clamped() {
        let mut editor = Editor::new();
        editor.add_widget(text(700.0, 0.0, 40.0, 40.0));
        editor.begin_resize(Point::ZERO);
        editor.drag_resize(Point::new(160.0, 0.0), &[ResizeEdge::Right]);

        assert_eq!(editor.active_widget().unwrap().width, 50.0);
        assert!(!editor.end_move());
        assert!(editor.end_resize());
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn test_resize_corner_at_zoom() {
        let mut editor = Editor::new();
        editor.add_widget(text(100.0, 100.0, 50.0, 50.0));
        editor.update_zoom(200.0);
        editor.begin_resize(Point::new(0.0, 0.0));
        editor.drag_resize(Point::new(-20.0, -20.0), &[ResizeEdge::Top, ResizeEdge::Left]);

        let widget = editor.active_widget().unwrap();
        assert_eq!(widget.position(), Point::new(90.0, 90.0));
        assert_eq!(widget.size(), Size::new(60.0, 60.0));
    }

    #[test]
    fn test_update_widget_data_clamps() {
        let mut editor = Editor::new();
        let id = editor.add_widget(text(700.0, 1300.0, 40.0, 20.0));

        editor.update_widget_data(&id, WidgetProperty::Width(200.0), false).unwrap();
        editor.update_widget_data(&id, WidgetProperty::Height(5.0), false).unwrap();
        editor.update_widget_data(&id, WidgetProperty::ZIndex(5000), false).unwrap();

        let widget = editor.widget(&id).unwrap();
        assert_eq!(widget.width, 50.0);
        assert_eq!(widget.height, 20.0);
        assert_eq!(widget.z_index, 998);
    }

    #[test]
    fn test_update_widget_data_history() {
        let mut editor = Editor::new();
        let id = editor.add_widget(text(0.0, 0.0, 40.0, 20.0));

        assert!(!editor.update_widget_data(&id, WidgetProperty::Left(0.0), false).unwrap());
        assert_eq!(editor.history_len(), 1);
        assert!(!editor.update_widget_data(&id, WidgetProperty::Left(0.0), true).unwrap());
        assert_eq!(editor.history_len(), 2);
        assert!(editor
            .update_widget_data(&id, WidgetProperty::Field("text".into(), "hi".into()), false)
            .unwrap());
        assert_eq!(editor.widget(&id).unwrap().extra["text"], "hi");
    }

    #[test]
    fn test_update_missing_widget() {
        let mut editor = Editor::new();
        let result = editor.update_widget_data("000000000000", WidgetProperty::Left(1.0), false);
        assert!(matches!(result, Err(EditorError::WidgetNotFound(_))));
    }

    #[test]
    fn test_update_page_data() {
        let mut editor = Editor::new();
        assert!(!editor.update_page_data(PageProperty::Width(750.0), false));
        assert_eq!(editor.history_len(), 0);
        assert!(editor.update_page_data(PageProperty::Width(640.0), false));
        assert_eq!(editor.page().width, 640.0);
        assert_eq!(editor.history_len(), 1);
    }

    #[test]
    fn test_align_to_page_and_container() {
        let mut editor = Editor::new();
        let container = editor.add_widget(Widget::container(Point::new(100.0, 100.0), Size::new(200.0, 100.0)));
        let child = editor.add_widget(text(120.0, 130.0, 50.0, 20.0).inside(&container));

        assert!(editor.align(Align::Right));
        assert_eq!(editor.widget(&child).unwrap().left, 250.0);
        assert!(!editor.align(Align::Right));

        let top_level = editor.add_widget(text(10.0, 10.0, 50.0, 50.0));
        assert!(editor.align(Align::CenterV));
        assert_eq!(editor.widget(&top_level).unwrap().left, 350.0);
        assert!(editor.align(Align::Bottom));
        assert_eq!(editor.widget(&top_level).unwrap().top, 1284.0);
    }

    #[test]
    fn test_align_uses_resolved_size() {
        let mut editor = Editor::new();
        let id = editor.add_widget(text(10.0, 10.0, 50.0, 50.0));
        editor
            .update_layout_record(&id, LayoutRecord { min_width: 20.0, min_height: 20.0, width: 100.0, height: 50.0 })
            .unwrap();
        editor.align(Align::Right);
        assert_eq!(editor.widget(&id).unwrap().left, 650.0);
    }

    #[test]
    fn test_select_unknown_falls_back_to_page() {
        let mut editor = Editor::new();
        editor.add_widget(text(0.0, 0.0, 50.0, 50.0));
        editor.select_widget("ffffffffffff");
        assert!(editor.active().is_page());
    }

    #[test]
    fn test_hover_and_settings() {
        let mut editor = Editor::new();
        editor.update_hover(Some("abc"));
        assert_eq!(editor.hover(), Some("abc"));
        editor.update_hover(Some("-1"));
        assert_eq!(editor.hover(), None);

        editor.update_screen(Size::new(1280.0, 720.0));
        editor.update_grid_size(Size::new(10.0, 10.0));
        editor.set_show_ref_line(false);
        assert_eq!(editor.screen(), Size::new(1280.0, 720.0));
        assert_eq!(editor.grid_size(), Size::new(10.0, 10.0));
        assert!(!editor.show_ref_line());
    }

    #[test]
    fn test_color_history() {
        let mut editor = Editor::new();
        for i in 0..25 {
            editor.push_color(format!("#{:06x}", i));
        }
        assert_eq!(editor.colors().len(), 20);
        assert_eq!(editor.colors().latest(), Some("#000018"));
    }

    #[test]
    fn test_export_and_load() {
        let mut editor = Editor::new();
        editor.add_widget(text(1.0, 2.0, 30.0, 40.0).with_field("text", "hello"));
        let json = editor.to_json().unwrap();

        let mut other = Editor::new();
        other.load_json(&json).unwrap();
        assert_eq!(other.widgets(), editor.widgets());
        assert_eq!(other.page(), editor.page());
        assert_eq!(other.history_len(), 0);
        assert!(other.active().is_page());

        assert!(other.load_json("not json").is_err());
    }

    #[test]
    fn test_load_json_with_sparse_page() {
        let mut editor = Editor::new();
        let json = r#"{"name":"Poster","widgets":[{"type":"text","left":1,"top":2,"width":3,"height":4}]}"#;
        editor.load_json(json).unwrap();

        assert_eq!(editor.page().name, "Poster");
        assert_eq!(editor.page().opacity, 1.0);
        assert_eq!(editor.widgets().len(), 1);
    }

    #[test]
    fn test_load_assigns_missing_ids() {
        let doc = PageDocument::new(Page::default(), vec![text(0.0, 0.0, 10.0, 10.0)]);
        let editor = Editor::from_document(doc, EditorConfig::default());
        assert_eq!(editor.widgets()[0].uuid.len(), 12);
    }
}
