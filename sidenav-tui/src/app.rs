//! Application state — the sidebar controller plus terminal-side concerns.
//!
//! `AppState` forwards controller requests to the worker, applies worker
//! responses, keeps the item viewport in step with focus and level changes,
//! and maps clicks on cached screen regions to sidebar operations.

use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use sidenav_core::model::SidebarItem;
use sidenav_core::{Command, Request, Sidebar};

use crate::scroll::Viewport;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Two clicks on the same target within this window count as a double click.
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Something clickable on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Back,
    /// The `…` crumb that toggles the overflow menu.
    Overflow,
    /// A visible breadcrumb, by stack level.
    Crumb(usize),
    /// An overflow-menu entry, by stack level.
    MenuEntry(usize),
    /// A list row, by index into the current level.
    Item(usize),
    Explore,
    /// A child previewed in the detail pane, by index.
    Preview(usize),
    ViewMore,
}

/// Screen regions recorded during the last draw, used for hit-testing.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
    list_area: Rect,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
        self.list_area = Rect::default();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        self.regions.push((area, target));
    }

    pub fn set_list_area(&mut self, area: Rect) {
        self.list_area = area;
    }

    pub fn in_list(&self, column: u16, row: u16) -> bool {
        self.list_area.contains(Position::new(column, row))
    }

    /// Topmost target under the pointer. Later regions (overlays) win.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }
}

pub struct AppState {
    pub sidebar: Sidebar,
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    pub viewport: Viewport,
    pub hits: HitMap,
    /// Highlighted row of the overflow menu.
    pub menu_cursor: usize,
    /// Animation counter for spinners.
    pub frame_count: u64,
    pub running: bool,
    last_click: Option<(Target, Instant)>,
    seen_epoch: u64,
    seen_focus: usize,
}

impl AppState {
    pub fn new(
        sidebar: Sidebar,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            seen_epoch: sidebar.level_epoch(),
            seen_focus: sidebar.focused(),
            sidebar,
            worker_tx,
            worker_rx,
            viewport: Viewport::default(),
            hits: HitMap::default(),
            menu_cursor: 0,
            frame_count: 0,
            running: true,
            last_click: None,
        }
    }

    /// Forward controller requests to the worker.
    pub fn dispatch(&mut self, requests: Vec<Request>) {
        for request in requests {
            tracing::debug!(request = %request.describe(), "dispatch");
            if self.worker_tx.send(WorkerCommand::Fetch(request)).is_err() {
                tracing::warn!("worker channel closed, request dropped");
            }
        }
    }

    /// Drain worker responses without blocking.
    pub fn drain_worker(&mut self, now: Instant) {
        while let Ok(response) = self.worker_rx.try_recv() {
            self.handle_response(response, now);
        }
    }

    pub fn handle_response(&mut self, response: WorkerResponse, now: Instant) {
        match response {
            WorkerResponse::Children {
                parent,
                kind,
                result,
            } => {
                let requests = self.sidebar.children_loaded(parent, kind, result);
                self.dispatch(requests);
            }
            WorkerResponse::Page {
                parent,
                cursor,
                result,
            } => self.sidebar.page_loaded(parent, cursor, result),
            WorkerResponse::Content {
                item,
                ticket,
                result,
            } => self.sidebar.content_loaded(ticket, item, result, now),
        }
        self.sync_viewport();
    }

    /// Advance timers once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let requests = self.sidebar.tick(now);
        self.dispatch(requests);
    }

    /// Apply a keyboard command and follow it with the viewport.
    pub fn apply(&mut self, command: Command) {
        let requests = self.sidebar.apply(command);
        self.dispatch(requests);
        self.sync_viewport();
    }

    /// Reset scrolling on a level change; otherwise keep focus in view.
    pub fn sync_viewport(&mut self) {
        let epoch = self.sidebar.level_epoch();
        let focus = self.sidebar.focused();
        if epoch != self.seen_epoch {
            self.seen_epoch = epoch;
            self.seen_focus = focus;
            self.viewport.reset();
            return;
        }
        if focus != self.seen_focus {
            self.seen_focus = focus;
            let before = self.viewport.offset();
            self.viewport.ensure_visible(focus);
            if self.viewport.offset() != before {
                self.maybe_load_more();
            }
        }
    }

    /// Scroll the list by `delta` items (mouse wheel).
    pub fn scroll(&mut self, delta: isize) {
        let total = self.sidebar.current_items().len();
        self.viewport.scroll_by(delta, total);
        self.maybe_load_more();
    }

    fn maybe_load_more(&mut self) {
        let total = self.sidebar.current_items().len();
        let threshold = self.sidebar.config().scroll_threshold;
        if self.viewport.past_threshold(total, threshold) {
            let requests = self.sidebar.load_more();
            self.dispatch(requests);
        }
    }

    // --- Detail pane ---

    /// Cached children of the selected item shown as a preview.
    pub fn preview_children(&self) -> &[SidebarItem] {
        let Some(selected) = self.sidebar.selected() else {
            return &[];
        };
        let Some(data) = self.sidebar.cache().get(&selected.item.id) else {
            return &[];
        };
        let limit = self.sidebar.config().preview_children;
        &data.items[..data.items.len().min(limit)]
    }

    /// Cached children of the selected item beyond the preview.
    pub fn preview_overflow(&self) -> usize {
        self.sidebar
            .selected()
            .and_then(|selected| self.sidebar.child_count(&selected.item.id))
            .map_or(0, |count| count.saturating_sub(self.preview_children().len()))
    }

    /// Open the item shown in the detail pane.
    pub fn explore_selected(&mut self) {
        if self.sidebar.is_breadcrumb_open() {
            return;
        }
        let Some(item) = self.sidebar.selected().map(|selected| selected.item.clone()) else {
            return;
        };
        let requests = self.sidebar.navigate_into(&item);
        self.dispatch(requests);
        self.sync_viewport();
    }

    fn select(&mut self, item: &SidebarItem) {
        let requests = self.sidebar.select(item);
        self.dispatch(requests);
    }

    fn open(&mut self, item: &SidebarItem) {
        let requests = self.sidebar.navigate_into(item);
        self.dispatch(requests);
    }

    // --- Overflow menu ---

    pub fn toggle_menu(&mut self) {
        self.sidebar.toggle_breadcrumb_menu();
        self.menu_cursor = 0;
    }

    pub fn menu_move(&mut self, delta: isize) {
        let len = self.sidebar.breadcrumb().hidden.len();
        if len == 0 {
            return;
        }
        self.menu_cursor = self.menu_cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn menu_activate(&mut self) {
        let level = self
            .sidebar
            .breadcrumb()
            .hidden
            .get(self.menu_cursor)
            .map(|crumb| crumb.level);
        if let Some(level) = level {
            self.sidebar.navigate_to_level(level);
            self.sync_viewport();
        }
    }

    // --- Pointer ---

    /// Pointer moved over `target`: hover list rows, leave everything else.
    pub fn pointer_at(&mut self, target: Option<Target>, now: Instant) {
        let item = match target {
            Some(Target::Item(index)) => self.sidebar.current_items().get(index).cloned(),
            _ => None,
        };
        match item {
            Some(item) => {
                if self.sidebar.hovered() != Some(&item.id) {
                    self.sidebar.hover(&item, now);
                }
            }
            None => {
                if self.sidebar.hovered().is_some() {
                    self.sidebar.leave();
                }
            }
        }
    }

    /// Left click on `target`. While the overflow menu is open, any click
    /// outside its entries closes it.
    pub fn click(&mut self, target: Option<Target>, now: Instant) {
        if self.sidebar.is_breadcrumb_open() {
            match target {
                Some(Target::MenuEntry(level)) => {
                    self.sidebar.navigate_to_level(level);
                }
                _ => self.sidebar.close_breadcrumb_menu(),
            }
            self.last_click = None;
            self.sync_viewport();
            return;
        }

        let Some(target) = target else {
            return;
        };
        let double = matches!(
            self.last_click,
            Some((previous, at)) if previous == target && now.duration_since(at) <= DOUBLE_CLICK
        );
        self.last_click = if double { None } else { Some((target, now)) };

        match target {
            Target::Back => {
                self.sidebar.navigate_back();
            }
            Target::Overflow => self.toggle_menu(),
            Target::Crumb(level) => {
                if level != self.sidebar.depth() {
                    self.sidebar.navigate_to_level(level);
                }
            }
            Target::MenuEntry(_) => {}
            Target::Item(index) => {
                if let Some(item) = self.sidebar.current_items().get(index).cloned() {
                    if double {
                        self.open(&item);
                    } else {
                        self.select(&item);
                    }
                }
            }
            Target::Explore | Target::ViewMore => self.explore_selected(),
            Target::Preview(index) => {
                if let Some(child) = self.preview_children().get(index).cloned() {
                    self.select(&child);
                }
            }
        }
        self.sync_viewport();
    }
}
