//! Smart breadcrumb: root, overflow, and the deepest levels.

use crate::model::{ItemId, NavigationFrame};

/// A single breadcrumb entry, addressed by its absolute stack level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub level: usize,
    pub id: ItemId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Crumbs rendered inline, root first.
    pub visible: Vec<Crumb>,
    /// Levels collapsed into the overflow menu, shallowest first.
    pub hidden: Vec<Crumb>,
}

impl Breadcrumb {
    /// Split `frames` so at most `max_visible` crumbs show inline.
    ///
    /// When collapsing, the root stays first and the last `max_visible - 1`
    /// levels follow it; everything in between goes to `hidden`.
    pub fn build(frames: &[NavigationFrame], max_visible: usize) -> Self {
        let crumbs: Vec<Crumb> = frames
            .iter()
            .enumerate()
            .map(|(level, frame)| Crumb {
                level,
                id: frame.id.clone(),
                label: frame.label.clone(),
            })
            .collect();

        let max_visible = max_visible.max(2);
        if crumbs.len() <= max_visible {
            return Self {
                visible: crumbs,
                hidden: Vec::new(),
            };
        }

        let tail_start = crumbs.len() - (max_visible - 1);
        let mut visible = Vec::with_capacity(max_visible);
        visible.push(crumbs[0].clone());
        visible.extend_from_slice(&crumbs[tail_start..]);
        let hidden = crumbs[1..tail_start].to_vec();
        Self { visible, hidden }
    }

    pub fn has_overflow(&self) -> bool {
        !self.hidden.is_empty()
    }

    /// The crumb of the level currently on screen.
    pub fn current(&self) -> Option<&Crumb> {
        self.visible.last()
    }
}
