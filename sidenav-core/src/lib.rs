//! Sidenav Core — navigation state, pagination cache and data sources.
//!
//! This crate contains everything the sidebar does apart from drawing:
//! - Domain types (items, cursors, pages, content payloads, frames)
//! - Navigation stack and smart breadcrumb
//! - Per-parent children cache with in-flight guards
//! - Debounced hover prefetch
//! - The `Sidebar` controller, which turns intents into fetch requests
//! - `DataSource` trait and a seeded mock with simulated latency
//! - TOML configuration

pub mod breadcrumb;
pub mod cache;
pub mod config;
pub mod error;
pub mod hover;
pub mod model;
pub mod nav;
pub mod rng;
pub mod sidebar;
pub mod source;

pub use config::SidebarConfig;
pub use error::{ConfigError, SourceError};
pub use model::{ContentData, Cursor, ItemId, ItemsData, SelectedItem, SidebarItem};
pub use sidebar::{Command, LoadKind, Request, Sidebar};
pub use source::{DataSource, MockSource};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything that crosses the worker boundary is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ItemId>();
        require_sync::<ItemId>();
        require_send::<Cursor>();
        require_sync::<Cursor>();
        require_send::<ItemsData>();
        require_sync::<ItemsData>();
        require_send::<ContentData>();
        require_sync::<ContentData>();
        require_send::<SourceError>();
        require_sync::<SourceError>();
        require_send::<Request>();
        require_sync::<Request>();

        require_send::<MockSource>();
        require_sync::<MockSource>();
        require_send::<Sidebar>();
    }

    /// The controller never sees a data source; it only emits requests.
    #[test]
    fn sidebar_is_sans_io() {
        let source = MockSource::instant(7);
        let mut sidebar = Sidebar::new(source.root_items(), config::NavigationConfig::default());
        let item = sidebar.current_items()[0].clone();
        let requests = sidebar.navigate_into(&item);
        assert_eq!(
            requests,
            vec![Request::Children {
                parent: item.id.clone(),
                kind: LoadKind::Navigate,
            }]
        );
        assert_eq!(sidebar.depth(), 0);
    }
}
