use std::fmt;

use shared_models::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current page. The dashboard requires a session; without one
/// every navigation lands on login.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn start(session: Option<&Session>) -> Self {
        let current = if session.is_some() { Route::Dashboard } else { Route::Login };
        Self { current }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route, session: Option<&Session>) -> Route {
        self.current = match (route, session) {
            (Route::Dashboard, None) => Route::Login,
            (route, _) => route,
        };
        self.current
    }
}
