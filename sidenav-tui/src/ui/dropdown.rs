//! Overflow menu listing the breadcrumb levels hidden behind `…`.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Target};
use crate::theme;
use crate::ui::truncate;

const WIDTH: u16 = 28;
const MAX_LABEL: usize = 20;

/// Draw the menu just below `anchor`, kept inside `screen`.
pub fn render(f: &mut Frame, anchor: Rect, screen: Rect, app: &mut AppState) {
    let hidden = app.sidebar.breadcrumb().hidden;
    if hidden.is_empty() {
        return;
    }

    let popup = popup_area(anchor, screen, hidden.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Levels ")
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    for (i, crumb) in hidden.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let selected = i == app.menu_cursor;
        let style = if selected { theme::item_row(false, true, false, false) } else { theme::text() };
        let line = Line::from(vec![
            Span::styled(format!(" L{} ", crumb.level + 1), theme::muted()),
            Span::styled(truncate(&crumb.label, MAX_LABEL).into_owned(), style),
        ]);
        f.render_widget(Paragraph::new(line).style(style), row);
        app.hits.push(row, Target::MenuEntry(crumb.level));
    }
}

fn popup_area(anchor: Rect, screen: Rect, height: u16) -> Rect {
    let width = WIDTH.min(screen.width);
    let height = height.min(screen.height);
    let x = anchor.x.min(screen.right().saturating_sub(width));
    let below = anchor.bottom();
    let y = if below + height <= screen.bottom() {
        below
    } else {
        screen.bottom().saturating_sub(height)
    };
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::test_helpers::{app_with_items, descend_cached};

    #[test]
    fn popup_stays_on_screen() {
        let screen = Rect::new(0, 0, 40, 10);
        assert_eq!(popup_area(Rect::new(6, 2, 1, 1), screen, 4), Rect::new(6, 3, 28, 4));
        assert_eq!(popup_area(Rect::new(30, 8, 1, 1), screen, 4), Rect::new(12, 6, 28, 4));
    }

    #[test]
    fn lists_hidden_levels_as_targets() {
        let mut app = app_with_items(&["a"]);
        descend_cached(&mut app, &["a", "a-0", "a-0-0", "a-0-0-0"]);
        app.toggle_menu();
        assert!(app.sidebar.is_breadcrumb_open());

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let screen = f.area();
                render(f, Rect::new(7, 1, 1, 1), screen, &mut app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let first: String = (0..60).map(|x| buffer[(x, 3)].symbol()).collect();
        assert!(first.contains("L2 a"));
        assert_eq!(app.hits.target_at(10, 3), Some(Target::MenuEntry(1)));
        assert_eq!(app.hits.target_at(10, 4), Some(Target::MenuEntry(2)));
    }
}
