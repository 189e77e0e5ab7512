//! Data source trait and the bundled mock implementation.
//!
//! The sidebar never calls a source directly. It emits requests, and the
//! front end runs them against a `DataSource` (on a worker pool in the TUI,
//! inline in tests). Keeping this trait narrow means a real API client could
//! replace the mock without touching navigation code.

mod catalog;
mod mock;

pub use catalog::{description_for_depth, root_items, summary_for_depth, type_label_for_depth};
pub use mock::MockSource;

use crate::error::SourceError;
use crate::model::{ContentData, Cursor, ItemId, ItemsData, SidebarItem};

pub trait DataSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Items shown at the root level. Available synchronously.
    fn root_items(&self) -> Vec<SidebarItem>;

    /// Fetch one page of children of `parent`, resuming after `cursor`.
    fn fetch_children(
        &self,
        parent: &ItemId,
        cursor: Option<&Cursor>,
        limit: usize,
    ) -> Result<ItemsData, SourceError>;

    /// Fetch the detail payload of an item.
    fn fetch_content(&self, id: &ItemId) -> Result<ContentData, SourceError>;
}
