//! OpsDeck Routes - Client-Side Navigation Surface
//!
//! The route table of the dashboard and the sidebar entries that point into
//! it. Paths parse to typed routes so the session guard can decide on them.
//!
//! Key Features:
//! - Typed routes with path parsing and rendering
//! - Protection flag for every route except the login page
//! - Sidebar entries with active-state matching
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

/// A dashboard route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Overview,
    Projects,
    NewProject,
    ProjectDetail(String),
    EditProject(String),
    Resources,
}

impl Route {
    /// Parse a path. Trailing slashes are ignored; unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Overview),
            ["login"] => Some(Route::Login),
            ["resources"] => Some(Route::Resources),
            ["projects"] => Some(Route::Projects),
            ["projects", "new"] => Some(Route::NewProject),
            ["projects", id] => Some(Route::ProjectDetail(id.to_string())),
            ["projects", id, "edit"] => Some(Route::EditProject(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Overview => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::NewProject => "/projects/new".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", id),
            Route::EditProject(id) => format!("/projects/{}/edit", id),
            Route::Resources => "/resources".to_string(),
        }
    }

    /// Every route except the login page requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Dashboard", path: "/", icon: "📊" },
    NavItem { label: "Projects", path: "/projects", icon: "📁" },
    NavItem { label: "Cloud Resources", path: "/resources", icon: "☁️" },
];

/// Whether a sidebar entry is highlighted for the current path.
///
/// The root entry only matches the root itself; every other entry matches by prefix.
pub fn nav_is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/" {
        return current == "/";
    }
    current.starts_with(item_path)
}
