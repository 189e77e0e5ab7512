//! Input dispatch — global keys → overflow menu → sidebar keys; mouse → hit map.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use sidenav_core::Command;

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        _ => {}
    }

    // 2. The overflow menu consumes input while open.
    if app.sidebar.is_breadcrumb_open() {
        handle_menu_key(app, key);
        return;
    }

    // 3. Sidebar keys.
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::FocusPrev,
        KeyCode::Down | KeyCode::Char('j') => Command::FocusNext,
        KeyCode::Right | KeyCode::Char('l') => Command::Expand,
        KeyCode::Enter => Command::Select,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Command::Back,
        KeyCode::Esc => Command::Reset,
        KeyCode::Char('b') => {
            app.toggle_menu();
            return;
        }
        KeyCode::Char('e') => {
            app.explore_selected();
            return;
        }
        _ => return,
    };
    app.apply(command);
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.menu_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.menu_move(1),
        KeyCode::Enter => app.menu_activate(),
        KeyCode::Esc | KeyCode::Char('b') => app.sidebar.close_breadcrumb_menu(),
        _ => {}
    }
}

/// Handle a mouse event against the regions recorded by the last draw.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) {
    let target = app.hits.target_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => app.pointer_at(target, now),
        MouseEventKind::Down(MouseButton::Left) => app.click(target, now),
        MouseEventKind::ScrollDown => {
            if app.hits.in_list(mouse.column, mouse.row) {
                app.scroll(1);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.hits.in_list(mouse.column, mouse.row) {
                app.scroll(-1);
            }
        }
        _ => {}
    }
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑/k, ↓/j", "Navigate items"),
        ("Enter", "View item details"),
        ("→/l", "Expand item (if it has children)"),
        ("←/h, Backspace", "Go back to parent"),
        ("Esc", "Return to root"),
        ("b", "Show hidden levels"),
        ("e", "Explore selected item"),
        ("q / Ctrl+C", "Quit"),
    ]
}
