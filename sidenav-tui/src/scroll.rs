//! Item-list viewport, measured in items rather than terminal rows.

use std::ops::Range;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Items that fit on screen. Zero until the first frame is drawn.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Indices of the items on screen.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        start..(start + self.height).min(total)
    }

    /// Scroll the minimum needed to bring `index` into view.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.height == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.height {
            self.offset = index + 1 - self.height;
        }
    }

    /// Scroll by `delta` items, clamped so the last page stays full.
    pub fn scroll_by(&mut self, delta: isize, total: usize) {
        let max = total.saturating_sub(self.height);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// True once the bottom edge has passed `threshold` of the list.
    pub fn past_threshold(&self, total: usize, threshold: f64) -> bool {
        if total == 0 {
            return false;
        }
        (self.offset + self.height) as f64 / total as f64 > threshold
    }
}
