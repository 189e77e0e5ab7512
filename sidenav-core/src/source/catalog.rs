//! Fixed text tables for generated items and the root menu.

use chrono::NaiveDate;

use crate::model::{Icon, ItemId, ItemStatus, SidebarItem};

const TYPE_LABELS: [&str; 9] = [
    "Dashboard",
    "Section",
    "Category",
    "Subcategory",
    "Item",
    "Subitem",
    "Element",
    "Component",
    "Detail",
];

const DESCRIPTIONS: [&str; 9] = [
    "Main navigation area",
    "Primary content section",
    "Organized content group",
    "Detailed subcategory",
    "Individual content item",
    "Specific configuration",
    "System component",
    "Technical detail",
    "Configuration option",
];

const SUMMARIES: [&str; 9] = [
    "Comprehensive dashboard with real-time analytics and key performance indicators.",
    "User management interface with role-based access control and permission settings.",
    "Content management system for creating, editing, and organizing digital assets.",
    "System configuration panel for managing application settings and preferences.",
    "Detailed reporting module with customizable charts and data visualization.",
    "Communication hub for managing messages, notifications, and team collaboration.",
    "Advanced settings panel for fine-tuning system behavior and optimization.",
    "Data management interface for handling large datasets and database operations.",
    "Security configuration center for managing authentication and authorization.",
];

fn by_depth(table: &'static [&'static str; 9], depth: usize) -> &'static str {
    table[depth.min(table.len() - 1)]
}

/// Label prefix for children of a parent at `depth` ("Section", "Category", ...).
pub fn type_label_for_depth(depth: usize) -> &'static str {
    by_depth(&TYPE_LABELS, depth)
}

pub fn description_for_depth(depth: usize) -> &'static str {
    by_depth(&DESCRIPTIONS, depth)
}

/// One-line overview used as an item's `content`.
pub fn summary_for_depth(depth: usize) -> &'static str {
    by_depth(&SUMMARIES, depth)
}

struct RootEntry {
    id: &'static str,
    label: &'static str,
    icon: Icon,
    description: &'static str,
    content: &'static str,
    day: u32,
}

const ROOT_ENTRIES: [RootEntry; 6] = [
    RootEntry {
        id: "dashboard",
        label: "Dashboard",
        icon: Icon::Home,
        description: "Main overview and analytics",
        content: "Central dashboard providing comprehensive overview of system performance, user activity, and key metrics with real-time updates.",
        day: 20,
    },
    RootEntry {
        id: "users",
        label: "User Management",
        icon: Icon::Users,
        description: "Manage users and permissions",
        content: "Complete user management system for handling user accounts, roles, permissions, and access control across the platform.",
        day: 19,
    },
    RootEntry {
        id: "content",
        label: "Content",
        icon: Icon::FileText,
        description: "Content management system",
        content: "Advanced content management system for creating, editing, organizing, and publishing digital content across multiple channels.",
        day: 18,
    },
    RootEntry {
        id: "system",
        label: "System Settings",
        icon: Icon::Settings,
        description: "System configuration",
        content: "Comprehensive system configuration panel for managing application settings, preferences, and operational parameters.",
        day: 17,
    },
    RootEntry {
        id: "reports",
        label: "Reports",
        icon: Icon::BarChart,
        description: "Analytics and reporting",
        content: "Advanced reporting and analytics module with customizable dashboards, data visualization, and export capabilities.",
        day: 16,
    },
    RootEntry {
        id: "communication",
        label: "Communication",
        icon: Icon::Mail,
        description: "Messages and notifications",
        content: "Integrated communication platform for managing messages, notifications, announcements, and team collaboration tools.",
        day: 15,
    },
];

/// The six top-level sections. All of them have children.
pub fn root_items() -> Vec<SidebarItem> {
    ROOT_ENTRIES
        .iter()
        .map(|entry| SidebarItem {
            id: ItemId::new(entry.id),
            label: entry.label.to_string(),
            icon: entry.icon,
            has_children: true,
            description: Some(entry.description.to_string()),
            content: Some(entry.content.to_string()),
            last_modified: NaiveDate::from_ymd_opt(2024, 1, entry.day),
            status: Some(ItemStatus::Active),
        })
        .collect()
}
