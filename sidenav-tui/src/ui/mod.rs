//! Top-level UI layout — sidebar on the left, detail pane on the right.
//!
//! Drawing also records clickable regions in `AppState::hits` and the list
//! height in `AppState::viewport`, so mouse handling and scrolling always
//! work against the last frame on screen.

pub mod breadcrumb;
pub mod content_pane;
pub mod dropdown;
pub mod footer;
pub mod item_list;

use std::borrow::Cow;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Width of the sidebar column, borders included.
pub const SIDEBAR_WIDTH: u16 = 50;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.hits.clear();
    let screen = f.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(screen);

    let overflow = draw_sidebar(f, columns[0], app);
    content_pane::render(f, columns[1], app);

    // Overlay last so its regions win hit-testing.
    if app.sidebar.is_breadcrumb_open() {
        if let Some(anchor) = overflow {
            dropdown::render(f, anchor, screen, app);
        }
    }
}

/// Returns the overflow crumb's area, if one was drawn.
fn draw_sidebar(f: &mut Frame, area: Rect, app: &mut AppState) -> Option<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(breadcrumb::HEIGHT),
            Constraint::Min(item_list::ITEM_HEIGHT),
            Constraint::Length(footer::HEIGHT),
        ])
        .split(inner);

    let overflow = breadcrumb::render(f, chunks[0], &app.sidebar, &mut app.hits);
    item_list::render(f, chunks[1], app);
    footer::render(f, chunks[2], &app.sidebar);
    overflow
}

/// Split `width` cells off the left of `area`, clamped to what is left.
pub(crate) fn take_left(area: &mut Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let taken = Rect::new(area.x, area.y, width, area.height.min(1));
    area.x += width;
    area.width -= width;
    taken
}

/// Shorten `label` to `max` characters, ending in `…` when cut.
pub(crate) fn truncate(label: &str, max: usize) -> Cow<'_, str> {
    if label.chars().count() <= max {
        return Cow::Borrowed(label);
    }
    let mut short: String = label.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    Cow::Owned(short)
}
