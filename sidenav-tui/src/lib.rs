//! Sidenav TUI — terminal front end for the sidebar navigator.
//!
//! Layout: breadcrumb header, paged item list and footer on the left, the
//! selected item's details on the right. Fetches run on a worker thread so
//! the draw loop never blocks on the data source.

pub mod app;
pub mod input;
pub mod logging;
pub mod scroll;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::{AppState, Target};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
