//! Sidebar controller — single owner of navigation state.
//!
//! The controller performs no IO. Every user intent returns the [`Request`]s
//! the caller must run against a data source, and each result comes back
//! through `children_loaded`, `page_loaded` or `content_loaded`. This keeps
//! the state machine deterministic and lets tests drive it without threads.

use std::collections::HashMap;
use std::time::Instant;

use crate::breadcrumb::Breadcrumb;
use crate::cache::ItemCache;
use crate::config::NavigationConfig;
use crate::error::SourceError;
use crate::hover::HoverDebounce;
use crate::model::{
    ContentData, Cursor, ItemId, ItemsData, NavigationFrame, SelectedItem, SidebarItem,
};
use crate::nav::NavigationStack;

/// Why a first page of children was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// The user asked to open the item.
    Navigate,
    /// The pointer rested on the item.
    Prefetch,
}

/// Work the caller must perform on the sidebar's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// First page of `parent`'s children.
    Children { parent: ItemId, kind: LoadKind },
    /// Follow-up page of `parent`'s children.
    NextPage { parent: ItemId, cursor: Cursor },
    /// Detail payload for the detail pane.
    Content { item: ItemId, ticket: u64 },
}

impl Request {
    /// Short label for logs and thread names.
    pub fn describe(&self) -> String {
        match self {
            Request::Children { parent, kind } => format!("children of {parent} ({kind:?})"),
            Request::NextPage { parent, cursor } => format!("page of {parent} {cursor}"),
            Request::Content { item, ticket } => format!("content of {item} #{ticket}"),
        }
    }
}

/// Keyboard-level intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FocusPrev,
    FocusNext,
    /// Open the focused item.
    Expand,
    /// Show the focused item in the detail pane.
    Select,
    Back,
    /// Jump back to the root level.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pulse {
    Loading,
    FadingUntil(Instant),
}

#[derive(Debug)]
pub struct Sidebar {
    config: NavigationConfig,
    stack: NavigationStack,
    cache: ItemCache,
    focused: usize,
    active: Option<ItemId>,
    hovered: Option<ItemId>,
    hover: HoverDebounce,
    selected: Option<SelectedItem>,
    pending_selection: Option<SidebarItem>,
    content_loading: bool,
    content_ticket: u64,
    pulsing: HashMap<ItemId, Pulse>,
    breadcrumb_open: bool,
    pending_nav: Option<SidebarItem>,
    level_epoch: u64,
}

impl Sidebar {
    pub fn new(root_items: Vec<SidebarItem>, config: NavigationConfig) -> Self {
        let mut cache = ItemCache::new();
        cache.insert_first_page(ItemId::root(), ItemsData::complete(root_items.clone()));
        Self {
            hover: HoverDebounce::new(config.hover_delay()),
            config,
            stack: NavigationStack::new(root_items),
            cache,
            focused: 0,
            active: None,
            hovered: None,
            selected: None,
            pending_selection: None,
            content_loading: false,
            content_ticket: 0,
            pulsing: HashMap::new(),
            breadcrumb_open: false,
            pending_nav: None,
            level_epoch: 0,
        }
    }

    // --- Queries ---

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn cache(&self) -> &ItemCache {
        &self.cache
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn current_frame(&self) -> &NavigationFrame {
        self.stack.current()
    }

    /// Items of the level on screen: the cache entry if present, else the frame snapshot.
    pub fn current_items(&self) -> &[SidebarItem] {
        let frame = self.stack.current();
        self.cache
            .get(&frame.id)
            .map(|data| data.items.as_slice())
            .unwrap_or(&frame.items)
    }

    pub fn current_entry(&self) -> Option<&ItemsData> {
        self.cache.get(&self.stack.current().id)
    }

    pub fn has_more(&self) -> bool {
        self.current_entry().is_some_and(|data| data.has_more)
    }

    /// True while a follow-up page of the current level is in flight.
    pub fn is_loading_more(&self) -> bool {
        self.cache.page_in_flight(&self.stack.current().id)
    }

    /// True while the first page of `id`'s children is loading.
    pub fn is_loading(&self, id: &ItemId) -> bool {
        self.cache.is_loading(id)
    }

    pub fn child_count(&self, id: &ItemId) -> Option<usize> {
        self.cache.get(id).map(|data| data.items.len())
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_item(&self) -> Option<&SidebarItem> {
        self.current_items().get(self.focused)
    }

    pub fn active(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    pub fn hovered(&self) -> Option<&ItemId> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&SelectedItem> {
        self.selected.as_ref()
    }

    pub fn is_content_loading(&self) -> bool {
        self.content_loading
    }

    pub fn is_pulsing(&self, id: &ItemId) -> bool {
        self.pulsing.contains_key(id)
    }

    pub fn is_breadcrumb_open(&self) -> bool {
        self.breadcrumb_open
    }

    /// The item whose children are being loaded for a pending navigation.
    pub fn pending_navigation(&self) -> Option<&SidebarItem> {
        self.pending_nav.as_ref()
    }

    /// Bumped on every level change; front ends reset scrolling when it moves.
    pub fn level_epoch(&self) -> u64 {
        self.level_epoch
    }

    pub fn breadcrumb(&self) -> Breadcrumb {
        Breadcrumb::build(self.stack.frames(), self.config.breadcrumb_max_visible)
    }

    // --- Navigation ---

    /// Open `item`, loading its children first if they are not cached.
    pub fn navigate_into(&mut self, item: &SidebarItem) -> Vec<Request> {
        if !item.has_children {
            return Vec::new();
        }

        if let Some(data) = self.cache.get(&item.id) {
            let frame = NavigationFrame::new(item.id.clone(), item.label.clone(), data.items.clone());
            self.pending_nav = None;
            self.stack.push(frame);
            self.reset_level_state();
            tracing::debug!(id = %item.id, depth = self.stack.depth(), "navigated into");
            return Vec::new();
        }

        self.pending_nav = Some(item.clone());
        if self.cache.begin_load(&item.id) {
            vec![Request::Children {
                parent: item.id.clone(),
                kind: LoadKind::Navigate,
            }]
        } else {
            // A prefetch is already running; its result completes the navigation.
            Vec::new()
        }
    }

    /// Pop one level. Returns false at the root.
    pub fn navigate_back(&mut self) -> bool {
        if !self.stack.pop() {
            return false;
        }
        self.pending_nav = None;
        self.reset_level_state();
        tracing::debug!(depth = self.stack.depth(), "navigated back");
        true
    }

    /// Truncate the stack to `level` (breadcrumb jump). Returns false when out of range.
    pub fn navigate_to_level(&mut self, level: usize) -> bool {
        if !self.stack.truncate_to(level) {
            return false;
        }
        self.pending_nav = None;
        self.breadcrumb_open = false;
        self.reset_level_state();
        tracing::debug!(level, "navigated to breadcrumb level");
        true
    }

    pub fn reset_to_root(&mut self) {
        self.stack.reset();
        self.pending_nav = None;
        self.reset_level_state();
        tracing::debug!("reset to root");
    }

    fn reset_level_state(&mut self) {
        self.focused = 0;
        self.active = None;
        self.selected = None;
        self.pending_selection = None;
        self.content_loading = false;
        // Invalidate any detail request still in flight.
        self.content_ticket += 1;
        self.level_epoch += 1;
    }

    // --- Pointer ---

    /// Pointer entered `item`. Items with children arm the prefetch timer.
    pub fn hover(&mut self, item: &SidebarItem, now: Instant) {
        self.hovered = Some(item.id.clone());
        if item.has_children {
            self.hover.arm(item.id.clone(), now);
        } else {
            self.hover.cancel();
        }
    }

    /// Pointer left the hovered item.
    pub fn leave(&mut self) {
        self.hovered = None;
        self.hover.cancel();
    }

    /// Advance timers: fire a due hover prefetch and expire finished pulses.
    pub fn tick(&mut self, now: Instant) -> Vec<Request> {
        self.pulsing
            .retain(|_, pulse| !matches!(pulse, Pulse::FadingUntil(until) if now >= *until));

        match self.hover.take_due(now) {
            Some(id) if self.cache.begin_load(&id) => {
                tracing::debug!(%id, "hover prefetch");
                vec![Request::Children {
                    parent: id,
                    kind: LoadKind::Prefetch,
                }]
            }
            _ => Vec::new(),
        }
    }

    // --- Selection ---

    /// Show `item` in the detail pane once its content arrives.
    pub fn select(&mut self, item: &SidebarItem) -> Vec<Request> {
        self.active = Some(item.id.clone());
        self.content_loading = true;
        self.content_ticket += 1;
        self.pending_selection = Some(item.clone());
        self.pulsing.insert(item.id.clone(), Pulse::Loading);
        vec![Request::Content {
            item: item.id.clone(),
            ticket: self.content_ticket,
        }]
    }

    // --- Infinite scroll ---

    /// Request the next page of the current level, unless one is already in flight.
    pub fn load_more(&mut self) -> Vec<Request> {
        let parent = self.stack.current().id.clone();
        match self.cache.begin_page(&parent) {
            Some(cursor) => vec![Request::NextPage { parent, cursor }],
            None => Vec::new(),
        }
    }

    // --- Keyboard ---

    /// Apply a keyboard intent. Ignored while the breadcrumb overflow menu is open.
    pub fn apply(&mut self, command: Command) -> Vec<Request> {
        if self.breadcrumb_open {
            tracing::trace!(?command, "suppressed while breadcrumb menu is open");
            return Vec::new();
        }

        match command {
            Command::Back => {
                self.navigate_back();
                return Vec::new();
            }
            Command::Reset => {
                self.reset_to_root();
                return Vec::new();
            }
            _ => {}
        }

        let len = self.current_items().len();
        if len == 0 {
            return Vec::new();
        }

        match command {
            Command::FocusPrev => {
                self.focused = self.focused.saturating_sub(1);
                Vec::new()
            }
            Command::FocusNext => {
                self.focused = (self.focused + 1).min(len - 1);
                Vec::new()
            }
            Command::Expand => match self.focused_item().cloned() {
                Some(item) => self.navigate_into(&item),
                None => Vec::new(),
            },
            Command::Select => match self.focused_item().cloned() {
                Some(item) => self.select(&item),
                None => Vec::new(),
            },
            Command::Back | Command::Reset => Vec::new(),
        }
    }

    // --- Breadcrumb overflow menu ---

    /// Open or close the overflow menu. It only opens when levels are hidden.
    pub fn toggle_breadcrumb_menu(&mut self) {
        if self.breadcrumb_open {
            self.breadcrumb_open = false;
        } else if self.breadcrumb().has_overflow() {
            self.breadcrumb_open = true;
        }
    }

    pub fn close_breadcrumb_menu(&mut self) {
        self.breadcrumb_open = false;
    }

    // --- Fetch results ---

    /// Apply the first page of `parent`'s children.
    pub fn children_loaded(
        &mut self,
        parent: ItemId,
        kind: LoadKind,
        result: Result<ItemsData, SourceError>,
    ) -> Vec<Request> {
        self.cache.finish_load(&parent);
        match result {
            Ok(data) => {
                self.cache.insert_first_page(parent.clone(), data);
            }
            Err(err) => {
                tracing::warn!(%parent, ?kind, error = %err, "failed to load children");
                if self.pending_nav.as_ref().is_some_and(|item| item.id == parent) {
                    self.pending_nav = None;
                }
                return Vec::new();
            }
        }

        match self.pending_nav.take() {
            Some(item) if item.id == parent => self.navigate_into(&item),
            other => {
                self.pending_nav = other;
                Vec::new()
            }
        }
    }

    /// Apply a follow-up page and mirror it into the matching stack frame.
    pub fn page_loaded(
        &mut self,
        parent: ItemId,
        cursor: Cursor,
        result: Result<ItemsData, SourceError>,
    ) {
        self.cache.finish_page(&parent);
        let page = match result {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(%parent, %cursor, error = %err, "failed to load more items");
                return;
            }
        };
        let Some(appended) = self.cache.append_page(&parent, &cursor, page) else {
            return;
        };
        let appended = appended.to_vec();
        if let Some(frame) = self.stack.frame_mut(&parent) {
            frame.items.extend(appended);
        }
    }

    /// Apply a detail payload. Results for superseded selections are dropped.
    pub fn content_loaded(
        &mut self,
        ticket: u64,
        item: ItemId,
        result: Result<ContentData, SourceError>,
        now: Instant,
    ) {
        self.pulsing
            .insert(item.clone(), Pulse::FadingUntil(now + self.config.pulse()));

        if ticket != self.content_ticket {
            tracing::debug!(%item, ticket, current = self.content_ticket, "stale content dropped");
            return;
        }
        self.content_loading = false;

        match result {
            Ok(content) => {
                if let Some(selected) = self.pending_selection.take() {
                    self.selected = Some(SelectedItem {
                        item: selected,
                        content: Some(content),
                    });
                }
            }
            Err(err) => {
                tracing::warn!(%item, error = %err, "failed to load content");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn leaf(id: &str) -> SidebarItem {
        SidebarItem::new(id, id, false)
    }

    fn branch(id: &str) -> SidebarItem {
        SidebarItem::new(id, id, true)
    }

    fn page(parent: &str, n: usize, has_more: bool) -> ItemsData {
        let parent = ItemId::new(parent);
        let items: Vec<SidebarItem> = (0..n)
            .map(|i| SidebarItem::new(parent.child(i).0, format!("Item {}", i + 1), i % 2 == 0))
            .collect();
        ItemsData {
            next_cursor: if has_more {
                items.last().map(|i| Cursor::after(&i.id))
            } else {
                None
            },
            items,
            has_more,
            loaded: true,
        }
    }

    fn sidebar() -> Sidebar {
        Sidebar::new(
            vec![branch("dashboard"), branch("users"), leaf("about")],
            NavigationConfig::default(),
        )
    }

    fn content(id: &str) -> ContentData {
        ContentData {
            id: ItemId::new(id),
            full_content: format!("details of {id}"),
            metrics: crate::model::ContentMetrics {
                views: 3,
                last_accessed: chrono::Utc::now(),
                size_kb: 64,
            },
            actions: vec!["Edit".into()],
        }
    }

    /// Open `id` from the current level, serving its children synchronously.
    fn open(sb: &mut Sidebar, id: &str, n: usize) {
        let item = branch(id);
        let reqs = sb.navigate_into(&item);
        assert_eq!(
            reqs,
            vec![Request::Children {
                parent: ItemId::new(id),
                kind: LoadKind::Navigate
            }]
        );
        sb.children_loaded(ItemId::new(id), LoadKind::Navigate, Ok(page(id, n, true)));
    }

    #[test]
    fn starts_at_root_with_root_items_cached() {
        let sb = sidebar();
        assert_eq!(sb.depth(), 0);
        assert_eq!(sb.current_items().len(), 3);
        assert_eq!(sb.child_count(&ItemId::root()), Some(3));
        assert!(!sb.has_more());
    }

    #[test]
    fn navigate_into_uncached_loads_then_pushes() {
        let mut sb = sidebar();
        let reqs = sb.navigate_into(&branch("dashboard"));
        assert_eq!(reqs.len(), 1);
        assert!(sb.is_loading(&ItemId::new("dashboard")));
        assert_eq!(sb.depth(), 0);
        assert_eq!(sb.pending_navigation().unwrap().id.as_str(), "dashboard");

        sb.children_loaded(ItemId::new("dashboard"), LoadKind::Navigate, Ok(page("dashboard", 20, true)));
        assert_eq!(sb.depth(), 1);
        assert_eq!(sb.stack().len(), 2);
        assert_eq!(sb.current_frame().label, "dashboard");
        assert_eq!(sb.current_items().len(), 20);
        assert!(!sb.is_loading(&ItemId::new("dashboard")));
        assert!(sb.pending_navigation().is_none());
    }

    #[test]
    fn navigate_into_cached_is_immediate_and_resets_state() {
        let mut sb = sidebar();
        sb.children_loaded(ItemId::new("users"), LoadKind::Prefetch, Ok(page("users", 4, false)));
        sb.apply(Command::FocusNext);
        sb.select(&branch("users"));
        let epoch = sb.level_epoch();

        assert!(sb.navigate_into(&branch("users")).is_empty());
        assert_eq!(sb.depth(), 1);
        assert_eq!(sb.focused(), 0);
        assert!(sb.active().is_none());
        assert!(sb.selected().is_none());
        assert!(!sb.is_content_loading());
        assert!(sb.level_epoch() > epoch);
    }

    #[test]
    fn leaves_cannot_be_entered() {
        let mut sb = sidebar();
        assert!(sb.navigate_into(&leaf("about")).is_empty());
        assert!(sb.pending_navigation().is_none());
        assert_eq!(sb.depth(), 0);
    }

    #[test]
    fn failed_navigation_stays_put() {
        let mut sb = sidebar();
        sb.navigate_into(&branch("dashboard"));
        sb.children_loaded(
            ItemId::new("dashboard"),
            LoadKind::Navigate,
            Err(SourceError::Unavailable("offline".into())),
        );
        assert_eq!(sb.depth(), 0);
        assert!(!sb.is_loading(&ItemId::new("dashboard")));
        assert!(sb.pending_navigation().is_none());
        assert!(!sb.cache().contains(&ItemId::new("dashboard")));
    }

    #[test]
    fn back_pops_one_level_and_stops_at_root() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 5);
        open(&mut sb, "dashboard-0", 5);
        assert_eq!(sb.depth(), 2);

        assert!(sb.navigate_back());
        assert_eq!(sb.current_frame().id.as_str(), "dashboard");
        assert!(sb.navigate_back());
        assert!(!sb.navigate_back());
        assert_eq!(sb.depth(), 0);
    }

    #[test]
    fn breadcrumb_jump_truncates_and_closes_menu() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 5);
        open(&mut sb, "dashboard-0", 5);
        open(&mut sb, "dashboard-0-0", 5);
        assert!(sb.breadcrumb().has_overflow());

        sb.toggle_breadcrumb_menu();
        assert!(sb.is_breadcrumb_open());
        assert!(sb.navigate_to_level(1));
        assert_eq!(sb.depth(), 1);
        assert!(!sb.is_breadcrumb_open());
        assert!(!sb.navigate_to_level(4));
    }

    #[test]
    fn menu_only_opens_with_hidden_levels() {
        let mut sb = sidebar();
        sb.toggle_breadcrumb_menu();
        assert!(!sb.is_breadcrumb_open());
    }

    #[test]
    fn keyboard_focus_is_clamped() {
        let mut sb = sidebar();
        sb.apply(Command::FocusPrev);
        assert_eq!(sb.focused(), 0);
        for _ in 0..10 {
            sb.apply(Command::FocusNext);
        }
        assert_eq!(sb.focused(), 2);
        assert_eq!(sb.focused_item().unwrap().id.as_str(), "about");
    }

    #[test]
    fn keyboard_expand_and_select_use_focused_item() {
        let mut sb = sidebar();
        sb.apply(Command::FocusNext);
        let reqs = sb.apply(Command::Expand);
        assert_eq!(
            reqs,
            vec![Request::Children {
                parent: ItemId::new("users"),
                kind: LoadKind::Navigate
            }]
        );

        let reqs = sb.apply(Command::Select);
        assert!(matches!(&reqs[..], [Request::Content { item, .. }] if item.as_str() == "users"));
        assert_eq!(sb.active().unwrap().as_str(), "users");
        assert!(sb.is_content_loading());
    }

    #[test]
    fn keyboard_is_suppressed_while_menu_open() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 5);
        open(&mut sb, "dashboard-0", 5);
        open(&mut sb, "dashboard-0-0", 5);
        sb.toggle_breadcrumb_menu();

        sb.apply(Command::FocusNext);
        sb.apply(Command::Back);
        sb.apply(Command::Reset);
        assert!(sb.apply(Command::Select).is_empty());
        assert_eq!(sb.focused(), 0);
        assert_eq!(sb.depth(), 3);

        sb.close_breadcrumb_menu();
        sb.apply(Command::Reset);
        assert_eq!(sb.depth(), 0);
    }

    #[test]
    fn hover_prefetch_is_debounced() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        sb.hover(&branch("users"), t0);
        assert_eq!(sb.hovered().unwrap().as_str(), "users");
        assert!(sb.tick(t0 + Duration::from_millis(100)).is_empty());
        let reqs = sb.tick(t0 + Duration::from_millis(300));
        assert_eq!(
            reqs,
            vec![Request::Children {
                parent: ItemId::new("users"),
                kind: LoadKind::Prefetch
            }]
        );
        // Fires once.
        assert!(sb.tick(t0 + Duration::from_millis(900)).is_empty());
    }

    #[test]
    fn leaving_cancels_prefetch() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        sb.hover(&branch("users"), t0);
        sb.leave();
        assert!(sb.hovered().is_none());
        assert!(sb.tick(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn hovering_a_leaf_never_prefetches() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        sb.hover(&branch("users"), t0);
        sb.hover(&leaf("about"), t0 + Duration::from_millis(100));
        assert_eq!(sb.hovered().unwrap().as_str(), "about");
        assert!(sb.tick(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn prefetch_skips_cached_and_loading_items() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        sb.navigate_into(&branch("users"));
        sb.hover(&branch("users"), t0);
        assert!(sb.tick(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn navigation_during_prefetch_completes_when_it_lands() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        sb.hover(&branch("dashboard"), t0);
        assert_eq!(sb.tick(t0 + Duration::from_millis(300)).len(), 1);

        // Already loading: no duplicate request, but navigation is remembered.
        assert!(sb.navigate_into(&branch("dashboard")).is_empty());
        sb.children_loaded(ItemId::new("dashboard"), LoadKind::Prefetch, Ok(page("dashboard", 8, false)));
        assert_eq!(sb.depth(), 1);
    }

    #[test]
    fn superseded_navigation_is_not_applied() {
        let mut sb = sidebar();
        sb.navigate_into(&branch("dashboard"));
        sb.reset_to_root();
        sb.children_loaded(ItemId::new("dashboard"), LoadKind::Navigate, Ok(page("dashboard", 8, false)));
        assert_eq!(sb.depth(), 0);
        // The page is still cached for next time.
        assert_eq!(sb.child_count(&ItemId::new("dashboard")), Some(8));
    }

    #[test]
    fn load_more_appends_to_cache_and_frame() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 20);
        let reqs = sb.load_more();
        let cursor = match &reqs[..] {
            [Request::NextPage { parent, cursor }] => {
                assert_eq!(parent.as_str(), "dashboard");
                cursor.clone()
            }
            other => panic!("expected next page request, got {other:?}"),
        };
        assert!(sb.is_loading_more());
        // Guarded while in flight.
        assert!(sb.load_more().is_empty());

        let mut next = page("dashboard", 30, false);
        next.items.drain(..20);
        sb.page_loaded(ItemId::new("dashboard"), cursor, Ok(next));
        assert!(!sb.is_loading_more());
        assert_eq!(sb.current_items().len(), 30);
        assert_eq!(sb.current_frame().items.len(), 30);
        assert!(!sb.has_more());
        assert!(sb.load_more().is_empty());
    }

    #[test]
    fn failed_page_clears_in_flight_flag() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 20);
        let reqs = sb.load_more();
        let Request::NextPage { parent, cursor } = reqs[0].clone() else {
            panic!("expected next page");
        };
        sb.page_loaded(parent, cursor, Err(SourceError::Unavailable("timeout".into())));
        assert!(!sb.is_loading_more());
        assert_eq!(sb.current_items().len(), 20);
        assert_eq!(sb.load_more().len(), 1);
    }

    #[test]
    fn content_arrival_fills_detail_pane_and_pulses() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        let reqs = sb.select(&branch("users"));
        let Request::Content { ticket, .. } = reqs[0] else {
            panic!("expected content request");
        };
        assert!(sb.is_pulsing(&ItemId::new("users")));

        sb.content_loaded(ticket, ItemId::new("users"), Ok(content("users")), t0);
        assert!(!sb.is_content_loading());
        let selected = sb.selected().unwrap();
        assert_eq!(selected.item.id.as_str(), "users");
        assert_eq!(selected.content.as_ref().unwrap().metrics.size_kb, 64);

        assert!(sb.is_pulsing(&ItemId::new("users")));
        sb.tick(t0 + Duration::from_millis(499));
        assert!(sb.is_pulsing(&ItemId::new("users")));
        sb.tick(t0 + Duration::from_millis(500));
        assert!(!sb.is_pulsing(&ItemId::new("users")));
    }

    #[test]
    fn stale_content_is_dropped() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        let first = sb.select(&branch("dashboard"));
        let second = sb.select(&branch("users"));
        let (Request::Content { ticket: t1, .. }, Request::Content { ticket: t2, .. }) =
            (first[0].clone(), second[0].clone())
        else {
            panic!("expected content requests");
        };

        sb.content_loaded(t2, ItemId::new("users"), Ok(content("users")), t0);
        sb.content_loaded(t1, ItemId::new("dashboard"), Ok(content("dashboard")), t0);
        assert_eq!(sb.selected().unwrap().item.id.as_str(), "users");
    }

    #[test]
    fn content_after_navigation_is_dropped() {
        let mut sb = sidebar();
        open(&mut sb, "dashboard", 5);
        let reqs = sb.select(&branch("dashboard-0"));
        let Request::Content { ticket, .. } = reqs[0] else {
            panic!("expected content request");
        };
        sb.navigate_back();
        sb.content_loaded(ticket, ItemId::new("dashboard-0"), Ok(content("dashboard-0")), Instant::now());
        assert!(sb.selected().is_none());
        assert!(!sb.is_content_loading());
    }

    #[test]
    fn content_failure_keeps_previous_selection() {
        let mut sb = sidebar();
        let t0 = Instant::now();
        let reqs = sb.select(&branch("users"));
        let Request::Content { ticket, .. } = reqs[0] else { panic!() };
        sb.content_loaded(ticket, ItemId::new("users"), Ok(content("users")), t0);

        let reqs = sb.select(&branch("dashboard"));
        let Request::Content { ticket, .. } = reqs[0] else { panic!() };
        sb.content_loaded(ticket, ItemId::new("dashboard"), Err(SourceError::Unavailable("x".into())), t0);
        assert!(!sb.is_content_loading());
        assert_eq!(sb.selected().unwrap().item.id.as_str(), "users");
        assert_eq!(sb.active().unwrap().as_str(), "dashboard");
    }

    #[test]
    fn back_and_reset_work_on_empty_levels() {
        let mut sb = sidebar();
        sb.navigate_into(&branch("dashboard"));
        sb.children_loaded(ItemId::new("dashboard"), LoadKind::Navigate, Ok(page("dashboard", 0, false)));
        assert_eq!(sb.depth(), 1);
        assert!(sb.current_items().is_empty());
        assert!(sb.apply(Command::Select).is_empty());
        sb.apply(Command::Back);
        assert_eq!(sb.depth(), 0);
    }
}
