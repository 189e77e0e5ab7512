//! Per-parent children cache with pagination state.
//!
//! An entry is created by the first page and only ever grows afterwards.
//! Two in-flight sets keep concurrent fetches from duplicating work: one for
//! first pages (navigation and hover prefetch), one for follow-up pages
//! (infinite scroll).

use std::collections::{HashMap, HashSet};

use crate::model::{Cursor, ItemId, ItemsData, SidebarItem};

#[derive(Debug, Default)]
pub struct ItemCache {
    entries: HashMap<ItemId, ItemsData>,
    loading: HashSet<ItemId>,
    pages_in_flight: HashSet<ItemId>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parent: &ItemId) -> Option<&ItemsData> {
        self.entries.get(parent)
    }

    pub fn contains(&self, parent: &ItemId) -> bool {
        self.entries.contains_key(parent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store the first page for `parent`. Refused if an entry already exists.
    pub fn insert_first_page(&mut self, parent: ItemId, data: ItemsData) -> bool {
        if self.entries.contains_key(&parent) {
            tracing::debug!(%parent, "first page ignored, entry already cached");
            return false;
        }
        tracing::debug!(%parent, items = data.items.len(), has_more = data.has_more, "cached first page");
        self.entries.insert(parent, ItemsData { loaded: true, ..data });
        true
    }

    /// Append a follow-up page fetched with `cursor`.
    ///
    /// The page is only accepted when `cursor` still matches the entry's
    /// `next_cursor`; anything else is a stale or duplicate response.
    /// Returns the newly appended items.
    pub fn append_page(
        &mut self,
        parent: &ItemId,
        cursor: &Cursor,
        page: ItemsData,
    ) -> Option<&[SidebarItem]> {
        let entry = self.entries.get_mut(parent)?;
        if entry.next_cursor.as_ref() != Some(cursor) {
            tracing::debug!(%parent, %cursor, "stale page dropped");
            return None;
        }
        let start = entry.items.len();
        entry.items.extend(page.items);
        entry.next_cursor = page.next_cursor;
        entry.has_more = page.has_more;
        entry.loaded = true;
        tracing::debug!(%parent, total = entry.items.len(), has_more = entry.has_more, "appended page");
        Some(&entry.items[start..])
    }

    /// Mark a first-page load as started. False when it is cached or already loading.
    pub fn begin_load(&mut self, parent: &ItemId) -> bool {
        if self.entries.contains_key(parent) {
            return false;
        }
        self.loading.insert(parent.clone())
    }

    pub fn finish_load(&mut self, parent: &ItemId) {
        self.loading.remove(parent);
    }

    pub fn is_loading(&self, parent: &ItemId) -> bool {
        self.loading.contains(parent)
    }

    /// Claim the next page of `parent`.
    ///
    /// Returns the cursor to fetch with, or None when the parent is not
    /// cached, has no more pages, or already has a page in flight.
    pub fn begin_page(&mut self, parent: &ItemId) -> Option<Cursor> {
        let entry = self.entries.get(parent)?;
        if !entry.has_more || self.pages_in_flight.contains(parent) {
            return None;
        }
        let cursor = entry.next_cursor.clone()?;
        self.pages_in_flight.insert(parent.clone());
        Some(cursor)
    }

    pub fn finish_page(&mut self, parent: &ItemId) {
        self.pages_in_flight.remove(parent);
    }

    pub fn page_in_flight(&self, parent: &ItemId) -> bool {
        self.pages_in_flight.contains(parent)
    }
}
