//! Sidebar footer — level, item count and focus position.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use sidenav_core::Sidebar;

use crate::theme;

pub const HEIGHT: u16 = 1;

pub fn render(f: &mut Frame, area: Rect, sidebar: &Sidebar) {
    let focus = focus_label(sidebar);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(focus.len() as u16 + 1)])
        .split(area);
    f.render_widget(Paragraph::new(summary_line(sidebar)), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(focus, theme::muted())).alignment(Alignment::Right),
        chunks[1],
    );
}

fn summary_line(sidebar: &Sidebar) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("Level {}", sidebar.depth() + 1), theme::muted()),
        Span::styled(" • ", theme::muted()),
        Span::styled(format!("{} items", sidebar.current_items().len()), theme::muted()),
    ];
    if sidebar.has_more() {
        spans.push(Span::styled(" • ", theme::muted()));
        spans.push(Span::styled("More available", theme::accent()));
    }
    Line::from(spans)
}

fn focus_label(sidebar: &Sidebar) -> String {
    format!("Focus: {}", sidebar.focused() + 1)
}
