//! Path-based routing.
//!
//! The route table is static. Mounting a route is a pure function of the
//! route and the current [`AppState`]; the [`Router`] only tracks history
//! and which page is on screen.

use log::info;
use thiserror::Error;

use crate::store::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Template rendered for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Login,
    Dashboard,
}

impl ViewId {
    pub fn template_id(&self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Dashboard => "dashboard",
        }
    }
}

/// Work to run right after a view is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterHook {
    /// Reset the search form and render the current account
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: ViewId,
    pub on_enter: Option<EnterHook>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("fallback path '{0}' is not in the route table")]
    UnknownFallback(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: &'static str,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, fallback: &'static str) -> Result<Self, RoutingError> {
        if !routes.iter().any(|route| route.path == fallback) {
            return Err(RoutingError::UnknownFallback(fallback.to_string()));
        }
        Ok(Self { routes, fallback })
    }

    /// `/login` and `/dashboard`, falling back to the dashboard
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route {
                    path: LOGIN_PATH,
                    view: ViewId::Login,
                    on_enter: None,
                },
                Route {
                    path: DASHBOARD_PATH,
                    view: ViewId::Dashboard,
                    on_enter: Some(EnterHook::Dashboard),
                },
            ],
            fallback: DASHBOARD_PATH,
        }
    }

    /// Exact path match
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn fallback_path(&self) -> &'static str {
        self.fallback
    }

    pub fn fallback_route(&self) -> &Route {
        // `new` and `standard` both guarantee the fallback is present
        self.lookup(self.fallback).unwrap_or_else(|| &self.routes[0])
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// A mounted view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub view: ViewId,
}

/// What the shell must do to show a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    Render {
        page: Page,
        on_enter: Option<EnterHook>,
    },
    /// The route needs a logged-in user and there is none
    Logout,
}

/// Decide how `route` is shown for `state`
pub fn mount(route: &Route, state: &AppState) -> RenderInstruction {
    if route.view == ViewId::Dashboard && !state.is_authenticated() {
        return RenderInstruction::Logout;
    }
    RenderInstruction::Render {
        page: Page {
            path: route.path,
            view: route.view,
        },
        on_enter: route.on_enter,
    }
}

/// Browser-style navigation history
pub trait History {
    /// Path of the current entry
    fn current_path(&self) -> String;

    /// Add an entry and make it current
    fn push(&mut self, path: &str);
}

/// History kept in memory; supports back/forward like a browser
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: vec![initial_path.to_string()],
            cursor: 0,
        }
    }

    /// Step back; returns false at the first entry
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward; returns false at the last entry
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    Unmatched,
    Rendered(Page),
}

pub struct Router<H: History> {
    table: RouteTable,
    history: H,
    state: RouterState,
}

impl<H: History> Router<H> {
    pub fn new(table: RouteTable, history: H) -> Self {
        Self {
            table,
            history,
            state: RouterState::Unmatched,
        }
    }

    /// Push `path` to the history. Resolution is up to the caller.
    pub fn navigate(&mut self, path: &str) {
        self.history.push(path);
    }

    /// Route for the current path, redirecting unknown paths to the
    /// fallback route (pushing it to the history).
    pub fn current_route(&mut self) -> Route {
        let path = self.history.current_path();
        if let Some(route) = self.table.lookup(&path) {
            return route.clone();
        }

        info!("No route for '{}', redirecting to {}", path, self.table.fallback_path());
        self.history.push(self.table.fallback_path());
        self.table.fallback_route().clone()
    }

    pub fn mark_rendered(&mut self, page: Page) {
        self.state = RouterState::Rendered(page);
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn current_page(&self) -> Option<&Page> {
        match &self.state {
            RouterState::Rendered(page) => Some(page),
            RouterState::Unmatched => None,
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Account;

    fn logged_in() -> AppState {
        AppState {
            account: Some(Account {
                user: "alice".to_string(),
                description: String::new(),
                balance: 0.0,
                currency: "EUR".to_string(),
                transactions: Vec::new(),
            }),
            ..AppState::default()
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = RouteTable::standard();
        assert_eq!(table.lookup("/login").map(|r| r.view), Some(ViewId::Login));
        assert!(table.lookup("/login/").is_none());
        assert!(table.lookup("/Dashboard").is_none());
    }

    #[test]
    fn test_table_requires_known_fallback() {
        let routes = vec![Route {
            path: "/login",
            view: ViewId::Login,
            on_enter: None,
        }];
        assert_eq!(
            RouteTable::new(routes.clone(), "/home"),
            Err(RoutingError::UnknownFallback("/home".to_string()))
        );
        assert!(RouteTable::new(routes, "/login").is_ok());
    }

    #[test]
    fn test_mount_dashboard_requires_account() {
        let table = RouteTable::standard();
        let dashboard = table.lookup(DASHBOARD_PATH).unwrap();

        assert_eq!(mount(dashboard, &AppState::default()), RenderInstruction::Logout);
        assert_eq!(
            mount(dashboard, &logged_in()),
            RenderInstruction::Render {
                page: Page {
                    path: DASHBOARD_PATH,
                    view: ViewId::Dashboard
                },
                on_enter: Some(EnterHook::Dashboard),
            }
        );
    }

    #[test]
    fn test_mount_login_is_public() {
        let table = RouteTable::standard();
        let login = table.lookup(LOGIN_PATH).unwrap();
        assert!(matches!(
            mount(login, &AppState::default()),
            RenderInstruction::Render { on_enter: None, .. }
        ));
    }

    #[test]
    fn test_unknown_path_redirects_to_dashboard() {
        let mut router = Router::new(RouteTable::standard(), MemoryHistory::new("/foo"));
        let route = router.current_route();

        assert_eq!(route.path, DASHBOARD_PATH);
        assert_eq!(router.history().current_path(), DASHBOARD_PATH);
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_memory_history_back_and_forward() {
        let mut history = MemoryHistory::new("/login");
        history.push("/dashboard");
        assert!(history.back());
        assert_eq!(history.current_path(), "/login");
        assert!(!history.back());
        assert!(history.forward());
        assert_eq!(history.current_path(), "/dashboard");
        assert!(!history.forward());

        history.back();
        history.push("/foo");
        assert_eq!(history.len(), 2);
        assert!(!history.forward());
    }

    #[test]
    fn test_template_ids() {
        assert_eq!(ViewId::Login.template_id(), "login");
        assert_eq!(ViewId::Dashboard.template_id(), "dashboard");
    }
}
