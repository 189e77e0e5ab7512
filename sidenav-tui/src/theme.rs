//! Slate theme tokens for the sidebar.
//!
//! # Color Palette
//! - **Background**: deep slate (panels)
//! - **Accent**: sky blue (focus, active item, current crumb)
//! - **Positive**: emerald (active status)
//! - **Warning**: amber (draft status, loading)
//! - **Pulse**: violet (item whose content just arrived)
//! - **Muted**: slate gray (descriptions, hints, archived status)

use ratatui::style::{Color, Modifier, Style};

use sidenav_core::model::{Icon, ItemStatus};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    /// Slightly lighter surface for hovered rows and the overflow menu
    pub surface: Color,
    pub accent: Color,
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub pulse: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub const fn slate() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            accent: Color::Rgb(56, 189, 248),
            positive: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),
            negative: Color::Rgb(248, 113, 113),
            pulse: Color::Rgb(167, 139, 250),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::Rgb(241, 245, 249),
            text_secondary: Color::Rgb(148, 163, 184),
        }
    }

    /// Status chip color.
    pub fn status_color(&self, status: ItemStatus) -> Color {
        match status {
            ItemStatus::Active => self.positive,
            ItemStatus::Draft => self.warning,
            ItemStatus::Archived => self.muted,
        }
    }
}

const THEME: Theme = Theme::slate();

pub fn theme() -> &'static Theme {
    &THEME
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn title() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

/// Row style for an item in the list. Pulse beats active beats focus beats hover.
pub fn item_row(active: bool, focused: bool, hovered: bool, pulsing: bool) -> Style {
    let base = Style::default().bg(THEME.background);
    if pulsing {
        base.bg(THEME.surface).fg(THEME.pulse).add_modifier(Modifier::BOLD)
    } else if active {
        base.bg(THEME.surface).fg(THEME.accent).add_modifier(Modifier::BOLD)
    } else if focused {
        base.fg(THEME.text_primary).add_modifier(Modifier::REVERSED)
    } else if hovered {
        base.bg(THEME.surface).fg(THEME.text_primary)
    } else {
        base.fg(THEME.text_primary)
    }
}

pub fn status_chip(status: ItemStatus) -> Style {
    Style::default().fg(THEME.status_color(status))
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Users => "☺",
        Icon::FileText => "≡",
        Icon::Folder => "▤",
        Icon::Database => "◫",
        Icon::Settings => "✱",
        Icon::Shield => "◈",
        Icon::Globe => "◍",
        Icon::Monitor => "▭",
        Icon::HardDrive => "▦",
        Icon::BarChart => "▥",
        Icon::Mail => "✉",
    }
}

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠸", "⠴", "⠦", "⠇", "⠏", "⠛"];

/// Spinner frame for an animation tick.
pub fn spinner(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}
