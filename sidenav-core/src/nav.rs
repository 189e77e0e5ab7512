//! Navigation stack: the path from the root to the level on screen.
//!
//! The stack is never empty. Level 0 is the root frame, and the current
//! depth is always `len - 1`.

use crate::model::{ItemId, NavigationFrame, SidebarItem};

#[derive(Debug, Clone)]
pub struct NavigationStack {
    frames: Vec<NavigationFrame>,
}

impl NavigationStack {
    pub fn new(root_items: Vec<SidebarItem>) -> Self {
        Self {
            frames: vec![NavigationFrame::root(root_items)],
        }
    }

    /// Current depth; the root is depth 0.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_at_root(&self) -> bool {
        self.frames.len() == 1
    }

    pub fn frames(&self) -> &[NavigationFrame] {
        &self.frames
    }

    pub fn current(&self) -> &NavigationFrame {
        // Invariant: the root frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    pub fn root(&self) -> &NavigationFrame {
        &self.frames[0]
    }

    pub fn frame_mut(&mut self, id: &ItemId) -> Option<&mut NavigationFrame> {
        self.frames.iter_mut().find(|f| &f.id == id)
    }

    pub fn push(&mut self, frame: NavigationFrame) {
        self.frames.push(frame);
    }

    /// Drop the current level. Returns false at the root.
    pub fn pop(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        self.frames.pop();
        true
    }

    /// Keep levels `0..=level`. Returns false when `level` is out of range.
    pub fn truncate_to(&mut self, level: usize) -> bool {
        if level >= self.frames.len() {
            return false;
        }
        self.frames.truncate(level + 1);
        true
    }

    pub fn reset(&mut self) {
        self.frames.truncate(1);
    }
}
