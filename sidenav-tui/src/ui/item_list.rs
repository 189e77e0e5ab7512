//! Item list — three rows per item, windowed by the viewport.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use sidenav_core::model::SidebarItem;
use sidenav_core::Sidebar;

use crate::app::{AppState, Target};
use crate::theme;

/// Rows taken by one item.
pub const ITEM_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let AppState {
        sidebar,
        viewport,
        hits,
        frame_count,
        ..
    } = app;
    hits.set_list_area(area);

    let loading_more = sidebar.is_loading_more();
    let (list_area, status_area) = if loading_more {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };
    viewport.set_height(usize::from(list_area.height / ITEM_HEIGHT));

    let items = sidebar.current_items();
    if items.is_empty() && !loading_more {
        f.render_widget(
            Paragraph::new(Span::styled("No items found", theme::muted())).alignment(Alignment::Center),
            Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1)),
        );
        return;
    }

    for (row, index) in viewport.visible_range(items.len()).enumerate() {
        let rect = Rect::new(
            list_area.x,
            list_area.y + row as u16 * ITEM_HEIGHT,
            list_area.width,
            ITEM_HEIGHT,
        );
        render_item(f, rect, sidebar, &items[index], index, *frame_count);
        hits.push(rect, Target::Item(index));
    }

    if let Some(status) = status_area {
        let line = Line::from(vec![
            Span::styled(theme::spinner(*frame_count), theme::warning()),
            Span::styled(" Loading more items...", theme::secondary()),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), status);
    }
}

fn render_item(f: &mut Frame, area: Rect, sidebar: &Sidebar, item: &SidebarItem, index: usize, tick: u64) {
    let active = sidebar.active() == Some(&item.id);
    let focused = sidebar.focused() == index;
    let hovered = sidebar.hovered() == Some(&item.id);
    let pulsing = sidebar.is_pulsing(&item.id);
    f.render_widget(
        Block::default().style(theme::item_row(active, focused, hovered, pulsing)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(area);

    let mut title = vec![
        Span::raw(" "),
        Span::raw(theme::icon_glyph(item.icon)),
        Span::raw(" "),
        Span::styled(item.label.as_str(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if sidebar.is_loading(&item.id) {
        title.push(Span::raw(" "));
        title.push(Span::styled(theme::spinner(tick), theme::warning()));
    }
    f.render_widget(Paragraph::new(Line::from(title)), rows[0]);

    if item.has_children {
        let badge = child_badge(sidebar, item, hovered);
        f.render_widget(
            Paragraph::new(Span::styled(format!("{badge} › "), theme::secondary()))
                .alignment(Alignment::Right),
            rows[0],
        );
    }

    if let Some(description) = &item.description {
        f.render_widget(
            Paragraph::new(Span::styled(format!("   {description}"), theme::muted())),
            rows[1],
        );
    }

    let mut meta = vec![Span::raw("   ")];
    if let Some(status) = item.status {
        meta.push(Span::styled(format!("● {}", status.label()), theme::status_chip(status)));
    }
    if let Some(date) = item.last_modified {
        if item.status.is_some() {
            meta.push(Span::styled(" · ", theme::muted()));
        }
        meta.push(Span::styled(date.format("%Y-%m-%d").to_string(), theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(meta)), rows[2]);
}

/// Child count once known and hovered, `...` otherwise.
fn child_badge(sidebar: &Sidebar, item: &SidebarItem, hovered: bool) -> String {
    match sidebar.child_count(&item.id) {
        Some(count) if hovered => count.to_string(),
        _ => "...".to_string(),
    }
}
