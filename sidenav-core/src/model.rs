//! Domain types shared by the navigation stack, the cache and the data sources.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the synthetic parent that owns the top-level items.
pub const ROOT_ID: &str = "root";

/// Label shown for the root frame in the breadcrumb.
pub const ROOT_LABEL: &str = "Menu";

/// Stable identifier of a sidebar node.
///
/// Generated children are named `<parent>-<index>`, so the number of dashes
/// doubles as the depth of the parent that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(ROOT_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_ID
    }

    /// Depth of this id within the generated hierarchy (number of `-`).
    pub fn depth(&self) -> usize {
        self.0.matches('-').count()
    }

    /// Id of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> ItemId {
        ItemId(format!("{}-{}", self.0, index))
    }

    /// Trailing numeric segment, if the id was produced by [`ItemId::child`].
    pub fn trailing_index(&self) -> Option<usize> {
        self.0.rsplit_once('-').and_then(|(_, tail)| tail.parse().ok())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Pagination token: the id of the last item of the previous page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor(pub ItemId);

impl Cursor {
    pub fn after(id: &ItemId) -> Self {
        Self(id.clone())
    }

    /// Index at which the next page starts.
    pub fn resume_index(&self) -> Option<usize> {
        self.0.trailing_index().map(|i| i + 1)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "after:{}", self.0)
    }
}

/// Publication status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Active,
    Draft,
    Archived,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Active, ItemStatus::Draft, ItemStatus::Archived];

    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Draft => "draft",
            ItemStatus::Archived => "archived",
        }
    }
}

/// Symbolic icon of an item; the presentation layer picks the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Home,
    Users,
    FileText,
    Folder,
    Database,
    Settings,
    Shield,
    Globe,
    Monitor,
    HardDrive,
    BarChart,
    Mail,
}

impl Icon {
    const BY_DEPTH: [Icon; 9] = [
        Icon::Home,
        Icon::FileText,
        Icon::Folder,
        Icon::Database,
        Icon::Settings,
        Icon::Shield,
        Icon::Globe,
        Icon::Monitor,
        Icon::HardDrive,
    ];

    /// Icon used for generated children of a parent at `depth`.
    pub fn for_depth(depth: usize) -> Icon {
        Self::BY_DEPTH[depth.min(Self::BY_DEPTH.len() - 1)]
    }
}

/// A node descriptor. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub id: ItemId,
    pub label: String,
    pub icon: Icon,
    pub has_children: bool,
    pub description: Option<String>,
    pub content: Option<String>,
    pub last_modified: Option<NaiveDate>,
    pub status: Option<ItemStatus>,
}

impl SidebarItem {
    /// Bare item with no optional metadata.
    pub fn new(id: impl Into<String>, label: impl Into<String>, has_children: bool) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            icon: Icon::Folder,
            has_children,
            description: None,
            content: None,
            last_modified: None,
            status: None,
        }
    }
}

/// One page of children, or the accumulated cache entry for a parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsData {
    pub items: Vec<SidebarItem>,
    pub next_cursor: Option<Cursor>,
    pub has_more: bool,
    pub loaded: bool,
}

impl ItemsData {
    /// A complete, single-page entry.
    pub fn complete(items: Vec<SidebarItem>) -> Self {
        Self {
            items,
            next_cursor: None,
            has_more: false,
            loaded: true,
        }
    }
}

/// Usage numbers attached to a content payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub views: u32,
    pub last_accessed: DateTime<Utc>,
    pub size_kb: u32,
}

impl ContentMetrics {
    pub fn size_label(&self) -> String {
        format!("{}KB", self.size_kb)
    }
}

/// Detail payload fetched when an item is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    pub id: ItemId,
    pub full_content: String,
    pub metrics: ContentMetrics,
    pub actions: Vec<String>,
}

/// The item shown in the detail pane, with its content once it has arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub item: SidebarItem,
    pub content: Option<ContentData>,
}

/// One visited level of the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationFrame {
    pub id: ItemId,
    pub label: String,
    pub items: Vec<SidebarItem>,
}

impl NavigationFrame {
    pub fn new(id: ItemId, label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            id,
            label: label.into(),
            items,
        }
    }

    pub fn root(items: Vec<SidebarItem>) -> Self {
        Self::new(ItemId::root(), ROOT_LABEL, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_dashes() {
        assert_eq!(ItemId::root().depth(), 0);
        assert_eq!(ItemId::new("dashboard").depth(), 0);
        assert_eq!(ItemId::new("dashboard-3").depth(), 1);
        assert_eq!(ItemId::new("dashboard-3-17").depth(), 2);
    }

    #[test]
    fn child_ids_round_trip_their_index() {
        let parent = ItemId::new("users-4");
        let child = parent.child(12);
        assert_eq!(child.as_str(), "users-4-12");
        assert_eq!(child.trailing_index(), Some(12));
        assert_eq!(ItemId::new("users").trailing_index(), None);
    }

    #[test]
    fn cursor_resumes_after_last_id() {
        let cursor = Cursor::after(&ItemId::new("content-19"));
        assert_eq!(cursor.resume_index(), Some(20));
    }

    #[test]
    fn icon_depth_saturates() {
        assert_eq!(Icon::for_depth(0), Icon::Home);
        assert_eq!(Icon::for_depth(2), Icon::Folder);
        assert_eq!(Icon::for_depth(40), Icon::HardDrive);
    }

    #[test]
    fn status_serializes_lowercase() {
        let toml = toml::to_string(&std::collections::BTreeMap::from([(
            "status",
            ItemStatus::Draft,
        )]))
        .unwrap();
        assert!(toml.contains("\"draft\""));
    }
}
