//! Recently used colors.

use crate::config::DEFAULT_COLOR_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Swatches offered before the user picks any color.
pub const DEFAULT_SWATCHES: [&str; 14] = [
    "#ff4500",
    "#ff8c00",
    "#ffd700",
    "#90ee90",
    "#00ced1",
    "#1e90ff",
    "#c71585",
    "rgba(255, 69, 0, 0.68)",
    "rgb(255, 120, 0)",
    "hsv(51, 100, 98)",
    "hsva(120, 40, 94, 0.5)",
    "hsl(181, 100%, 37%)",
    "hsla(209, 100%, 56%, 0.73)",
    "#c7158577",
];

/// Most-recent-first list of CSS color strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorHistory {
    colors: VecDeque<String>,
    capacity: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR_HISTORY_CAPACITY)
    }
}

impl ColorHistory {
    /// Create a history seeded with [`DEFAULT_SWATCHES`].
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let colors = DEFAULT_SWATCHES
            .iter()
            .take(capacity)
            .map(|c| c.to_string())
            .collect();
        Self { colors, capacity }
    }

    /// Remember a color. It goes to the front; the oldest falls off when full.
    ///
    /// Duplicates are kept, so the list mirrors the order colors were picked in.
    pub fn push(&mut self, color: impl Into<String>) {
        while self.colors.len() >= self.capacity {
            self.colors.pop_back();
        }
        self.colors.push_front(color.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Most recent color.
    pub fn latest(&self) -> Option<&str> {
        self.colors.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
