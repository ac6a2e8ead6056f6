//! Bounded undo/redo history.
//!
//! Every committed mutation records a full snapshot of the widget list, the active
//! selection and the page. A cursor points at the snapshot currently shown; pushing
//! while the cursor is not at the tail discards the redo branch.
//!
//! Each entry owns its page snapshot. The page that precedes the first entry is kept
//! separately as the *origin page*, so undoing past the first entry can restore an
//! empty page. When the oldest entry is evicted its page becomes the new origin.

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::page::Page;
use crate::selection::ActiveElement;
use crate::widget::Widget;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// A snapshot of editor state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub widgets: Vec<Widget>,
    pub active: ActiveElement,
    pub page: Page,
}

impl HistoryEntry {
    /// Snapshot of an empty page.
    fn blank(page: Page) -> Self {
        Self {
            widgets: Vec::new(),
            active: ActiveElement::Page,
            page,
        }
    }
}

/// Undo/redo log with a fixed capacity.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    /// Page before the first entry.
    origin: Option<Page>,
    /// Index of the entry currently shown (None = before the first entry).
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            origin: None,
            cursor: None,
            capacity,
        }
    }

    /// Create an empty history whose origin is `page`.
    pub fn with_origin(capacity: usize, page: Page) -> Self {
        let mut history = Self::new(capacity);
        history.origin = Some(page);
        history
    }

    /// Drop every entry and start over from `page`.
    pub fn reset(&mut self, page: Page) {
        self.entries.clear();
        self.cursor = None;
        self.origin = Some(page);
    }

    /// Append a snapshot, discarding any redo branch and the oldest entry when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            log::debug!("History: discarding {} redo entries", self.entries.len() - keep);
            self.entries.truncate(keep);
        }

        self.entries.push_back(entry);

        if self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                self.origin = Some(evicted.page);
            }
        }

        self.cursor = Some(self.entries.len() - 1);
        log::debug!("History: pushed entry {}/{}", self.entries.len(), self.capacity);
    }

    /// Step back, returning the snapshot to restore (if any).
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                log::debug!("History: undo to {}", c - 1);
                self.entries.get(c - 1).cloned()
            }
            _ => {
                self.cursor = None;
                match &self.origin {
                    Some(page) if self.entries.len() < self.capacity => {
                        log::debug!("History: undo to origin page");
                        Some(HistoryEntry::blank(page.clone()))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Step forward, returning the snapshot to restore (if any).
    ///
    /// Redoing at the tail restores the last entry again.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        let last = self.entries.len().checked_sub(1)?;
        let next = self.cursor.map_or(0, |c| c + 1).min(last);
        self.cursor = Some(next);
        log::debug!("History: redo to {}", next);
        self.entries.get(next).cloned()
    }

    /// Step in the given direction.
    pub fn step(&mut self, action: HistoryAction) -> Option<HistoryEntry> {
        match action {
            HistoryAction::Undo => self.undo(),
            HistoryAction::Redo => self.redo(),
        }
    }

    /// Cursor position, -1 when before the first entry.
    pub fn index(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    /// Number of widget snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of page snapshots (entries plus the origin page, when known).
    pub fn page_history_len(&self) -> usize {
        self.entries.len() + usize::from(self.origin.is_some())
    }

    /// Page before the first entry.
    pub fn origin(&self) -> Option<&Page> {
        self.origin.as_ref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }
}
