//! Test helpers: an `AppState` wired to channels with no worker behind them.

use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use sidenav_core::config::NavigationConfig;
use sidenav_core::model::{ItemId, ItemsData, SidebarItem};
use sidenav_core::{DataSource, LoadKind, MockSource, Sidebar};

use crate::app::AppState;
use crate::worker::{self, WorkerCommand};

/// App over the mock root menu. Requests queue on the returned receiver.
pub fn test_app() -> (AppState, Receiver<WorkerCommand>, MockSource) {
    let source = MockSource::instant(99);
    let sidebar = Sidebar::new(source.root_items(), NavigationConfig::default());
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    (AppState::new(sidebar, cmd_tx, resp_rx), cmd_rx, source)
}

/// App whose root level holds one container per id.
pub fn app_with_items(ids: &[&str]) -> AppState {
    let items = ids.iter().map(|id| SidebarItem::new(*id, *id, true)).collect();
    let sidebar = Sidebar::new(items, NavigationConfig::default());
    let (cmd_tx, _cmd_rx) = mpsc::channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    AppState::new(sidebar, cmd_tx, resp_rx)
}

/// Push one level per id, caching a single child container for each first.
pub fn descend_cached(app: &mut AppState, ids: &[&str]) {
    for id in ids {
        let child = SidebarItem::new(format!("{id}-0"), "child", true);
        app.sidebar.children_loaded(
            ItemId::new(*id),
            LoadKind::Prefetch,
            Ok(ItemsData::complete(vec![child])),
        );
        app.sidebar.navigate_into(&SidebarItem::new(*id, *id, true));
        app.sync_viewport();
    }
}

/// Run queued requests inline until none are left.
pub fn serve_all(app: &mut AppState, rx: &Receiver<WorkerCommand>, source: &MockSource) {
    let page_size = source.config().page_size;
    while let Ok(command) = rx.try_recv() {
        if let WorkerCommand::Fetch(request) = command {
            let response = worker::execute(source, page_size, request);
            app.handle_response(response, Instant::now());
        }
    }
}
