//! Navigation menu.

use crate::permissions::PermissionOracle;

/// Route users land on, and fall back to when a gated route denies.
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// One sidebar entry, gated by a module/action pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub route: &'static str,
    /// Permission module guarding this entry.
    pub module: &'static str,
    /// Permission action guarding this entry.
    pub action: &'static str,
}

/// The full sidebar, in display order.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        title: "Dashboard",
        route: "/dashboard",
        module: "dashboard",
        action: "view",
    },
    MenuEntry {
        title: "Institutes",
        route: "/institutes",
        module: "institutes",
        action: "view",
    },
    MenuEntry {
        title: "Cadet Management",
        route: "/cadets",
        module: "cadets",
        action: "view",
    },
    MenuEntry {
        title: "Users",
        route: "/users",
        module: "users",
        action: "view",
    },
    MenuEntry {
        title: "Roles & Permissions",
        route: "/role-permissions",
        module: "role-permissions",
        action: "view",
    },
    MenuEntry {
        title: "Activity Logs",
        route: "/activity-logs",
        module: "activity-logs",
        action: "view",
    },
];

/// The sidebar entries the signed-in role may see.
///
/// Entries hide while permissions are still loading and reappear once the
/// fetch resolves; route gating handles the waiting state separately.
pub fn visible_menu(oracle: &PermissionOracle) -> Vec<MenuEntry> {
    MENU.iter()
        .filter(|entry| oracle.has_permission(entry.module, entry.action))
        .copied()
        .collect()
}

/// Find the menu entry owning a route.
pub fn entry_for_route(route: &str) -> Option<MenuEntry> {
    MENU.iter().find(|entry| entry.route == route).copied()
}
