//! Breadcrumb header — title, back control, crumb trail and key hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sidenav_core::Sidebar;

use crate::app::{HitMap, Target};
use crate::theme;
use crate::ui::{take_left, truncate};

pub const HEIGHT: u16 = 3;

const SEPARATOR: &str = " › ";
const MAX_CRUMB: usize = 14;

/// Returns the area of the `…` crumb when levels are hidden.
pub fn render(f: &mut Frame, area: Rect, sidebar: &Sidebar, hits: &mut HitMap) -> Option<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(area);

    let mut header = rows[0];
    if sidebar.depth() > 0 {
        let back = put(f, &mut header, "‹ Back", theme::accent());
        hits.push(back, Target::Back);
        put(f, &mut header, "  ", Style::default());
    }
    put(f, &mut header, "Navigation", theme::title());

    let crumbs = sidebar.breadcrumb();
    let last = crumbs.visible.len().saturating_sub(1);
    let mut row = rows[1];
    let mut overflow = None;
    for (i, crumb) in crumbs.visible.iter().enumerate() {
        if i > 0 {
            put(f, &mut row, SEPARATOR, theme::muted());
        }
        if i == 1 && crumbs.has_overflow() {
            let ellipsis = put(f, &mut row, "…", theme::secondary());
            hits.push(ellipsis, Target::Overflow);
            overflow = Some(ellipsis);
            put(f, &mut row, SEPARATOR, theme::muted());
        }
        let label = truncate(&crumb.label, MAX_CRUMB);
        if i == last {
            put(f, &mut row, &label, theme::accent_bold());
        } else {
            let area = put(f, &mut row, &label, theme::secondary());
            hits.push(area, Target::Crumb(crumb.level));
        }
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "↑↓ Navigate • → Expand • ⏎ Select • ← Back • Esc Home",
            theme::muted(),
        )),
        rows[2],
    );
    overflow
}

/// Draw `text` at the left of `row` and advance past it.
fn put(f: &mut Frame, row: &mut Rect, text: &str, style: Style) -> Rect {
    let span = Span::styled(text.to_string(), style);
    let area = take_left(row, span.width() as u16);
    if !area.is_empty() {
        f.render_widget(Paragraph::new(span), area);
    }
    area
}
