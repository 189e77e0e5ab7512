//! Detail pane — loading state, empty state with shortcuts, or item details.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sidenav_core::model::{SelectedItem, SidebarItem};

use crate::app::{AppState, Target};
use crate::input::key_bindings_help;
use crate::theme;

const EXPLORE: &str = "[ Explore › ]";
const VIEW_ALL: &str = "View All ›";

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(false))
        .title(" Details ")
        .title_style(theme::title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.sidebar.is_content_loading() {
        render_loading(f, inner, app.frame_count);
        return;
    }
    match app.sidebar.selected().cloned() {
        Some(selected) => render_details(f, inner, app, &selected),
        None => render_empty(f, inner),
    }
}

fn render_loading(f: &mut Frame, area: Rect, tick: u64) {
    let line = Line::from(vec![
        Span::styled(theme::spinner(tick), theme::accent()),
        Span::styled(" Loading content...", theme::secondary()),
    ]);
    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1)),
    );
}

fn render_empty(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Select an item to view details", theme::title())),
        Line::from(Span::styled(
            "Click on any item in the sidebar to see its content",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Keyboard shortcuts:", theme::secondary())),
    ];
    lines.extend(key_bindings_help().into_iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("{keys:>16}  "), theme::accent()),
            Span::styled(action, theme::muted()),
        ])
    }));
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_details(f: &mut Frame, area: Rect, app: &mut AppState, selected: &SelectedItem) {
    let item = &selected.item;
    let preview: Vec<SidebarItem> = app.preview_children().to_vec();
    let more = app.preview_overflow();
    let preview_height = if preview.is_empty() {
        0
    } else {
        preview.len() as u16 + 2 + u16::from(more > 0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(preview_height),
        ])
        .split(area);

    // Header: label, status, Explore control.
    let mut header = vec![
        Span::raw(" "),
        Span::styled(theme::icon_glyph(item.icon), theme::accent()),
        Span::raw(" "),
        Span::styled(item.label.as_str(), theme::accent_bold()),
    ];
    if let Some(status) = item.status {
        header.push(Span::raw("  "));
        header.push(Span::styled(format!("● {}", status.label()), theme::status_chip(status)));
    }
    f.render_widget(Paragraph::new(Line::from(header)), chunks[0]);
    if item.has_children {
        let explore = right_aligned(chunks[0], EXPLORE);
        f.render_widget(Paragraph::new(Span::styled(EXPLORE, theme::accent())), explore);
        app.hits.push(explore, Target::Explore);
    }

    if let Some(description) = &item.description {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {description}"), theme::secondary())),
            chunks[1],
        );
    }

    f.render_widget(Paragraph::new(meta_line(selected)), chunks[2]);

    f.render_widget(
        Paragraph::new(body_lines(selected)).wrap(Wrap { trim: false }),
        chunks[4],
    );

    if !preview.is_empty() {
        render_preview(f, chunks[5], app, &preview, more);
    }
}

fn meta_line(selected: &SelectedItem) -> Line<'static> {
    let item = &selected.item;
    let mut parts = Vec::new();
    if let Some(date) = item.last_modified {
        parts.push(("Last Modified", date.format("%Y-%m-%d").to_string()));
    }
    let kind = if item.has_children { "Container" } else { "Item" };
    parts.push(("Type", kind.to_string()));
    if let Some(content) = &selected.content {
        parts.push(("Views", content.metrics.views.to_string()));
        parts.push(("Size", content.metrics.size_label()));
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (name, value)) in parts.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", Style::default()));
        }
        spans.push(Span::styled(format!("{name}: "), theme::secondary()));
        spans.push(Span::styled(value, theme::muted()));
    }
    Line::from(spans)
}

fn body_lines(selected: &SelectedItem) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(" Overview", theme::title())),
        Line::from(Span::styled(
            format!(" {}", selected.item.content.clone().unwrap_or_default()),
            theme::text(),
        )),
    ];
    let Some(content) = &selected.content else {
        return lines;
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Detailed Information", theme::title())));
    lines.push(Line::from(Span::styled(format!(" {}", content.full_content), theme::text())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Usage Statistics", theme::title())));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", content.metrics.views), theme::accent_bold()),
        Span::styled("Total Views   ", theme::muted()),
        Span::styled(format!("{} ", content.metrics.size_label()), theme::accent_bold()),
        Span::styled("Content Size   ", theme::muted()),
        Span::styled(
            format!("{} ", content.metrics.last_accessed.format("%Y-%m-%d")),
            theme::accent_bold(),
        ),
        Span::styled("Last Accessed", theme::muted()),
    ]));

    if !content.actions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Available Actions", theme::title())));
        let mut actions = vec![Span::raw(" ")];
        for action in &content.actions {
            actions.push(Span::styled(format!("[{action}]"), theme::secondary()));
            actions.push(Span::raw(" "));
        }
        lines.push(Line::from(actions));
    }
    lines
}

fn render_preview(f: &mut Frame, area: Rect, app: &mut AppState, preview: &[SidebarItem], more: usize) {
    let mut row = Rect::new(area.x, area.y, area.width, area.height.min(1));
    f.render_widget(Paragraph::new(Span::styled(" Contents Preview", theme::title())), row);
    let view_all = right_aligned(row, VIEW_ALL);
    f.render_widget(Paragraph::new(Span::styled(VIEW_ALL, theme::accent())), view_all);
    app.hits.push(view_all, Target::ViewMore);

    for (index, child) in preview.iter().enumerate() {
        row.y += 1;
        if row.y >= area.bottom() {
            return;
        }
        let hovered = app.sidebar.hovered() == Some(&child.id);
        let style = if hovered { theme::accent() } else { theme::text() };
        let line = Line::from(vec![
            Span::raw("   "),
            Span::styled(theme::icon_glyph(child.icon), theme::muted()),
            Span::raw(" "),
            Span::styled(child.label.as_str(), style),
            Span::styled(
                format!("  {}", child.description.as_deref().unwrap_or_default()),
                theme::muted(),
            ),
        ]);
        f.render_widget(Paragraph::new(line), row);
        app.hits.push(row, Target::Preview(index));
    }

    if more > 0 {
        row.y += 1;
        if row.y >= area.bottom() {
            return;
        }
        let label = format!("View {more} more items");
        f.render_widget(
            Paragraph::new(Span::styled(label, theme::accent())).alignment(Alignment::Center),
            row,
        );
        app.hits.push(row, Target::ViewMore);
    }
}

/// Area for `text` flush against the right edge of a one-row `row`.
fn right_aligned(row: Rect, text: &str) -> Rect {
    let width = (Span::raw(text).width() as u16 + 1).min(row.width);
    Rect::new(row.right() - width, row.y, width, row.height)
}
