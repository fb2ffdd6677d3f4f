//! Static route table mapping URL-style paths to views.
//!
//! The table is declared once at startup ([`table::routes`]) and immutable
//! afterwards. Resolution gives exact static paths priority over
//! parameterized patterns; pattern entries match in declaration order.
//! Views are loaded lazily: the first navigation to a route spawns its
//! loader future, and the loaded view is cached under the route name.

pub mod table;

use crate::store::HistoryStore;
use futures::future::BoxFuture;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Parameters captured from a matched path, e.g. `:id` segments.
pub type RouteParams = BTreeMap<String, String>;

/// Read-only data a view may draw from.
pub struct ViewContext<'a> {
    pub store: &'a HistoryStore,
    pub params: &'a RouteParams,
    /// Lines scrolled up from the bottom of the content.
    pub scroll: usize,
}

/// A routed screen. Views are pure presentation: they read store state
/// through the context and never mutate anything.
pub trait View: Send {
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &ViewContext<'_>);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ViewLoadError(pub String);

pub type ViewFuture = BoxFuture<'static, Result<Box<dyn View>, ViewLoadError>>;

pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    /// Forward captured path parameters to the view.
    pub pass_params: bool,
    loader: fn() -> ViewFuture,
}

impl RouteEntry {
    pub fn new(
        path: &'static str,
        name: &'static str,
        pass_params: bool,
        loader: fn() -> ViewFuture,
    ) -> Self {
        Self {
            path,
            name,
            pass_params,
            loader,
        }
    }

    /// Whether the path has no `:param` or `*` segments. Only static entries
    /// appear in the nav bar and the Tab cycle.
    pub fn is_static(&self) -> bool {
        is_static_path(self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("no route matches {path:?}")]
    NotFound { path: String },
}

/// Route-table invariant violations, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name {0:?}")]
    DuplicateName(&'static str),
}

/// A successful resolution: which view to show and the parameters to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: &'static str,
    pub params: RouteParams,
}

pub struct Router {
    routes: Vec<RouteEntry>,
    views: HashMap<&'static str, Box<dyn View>>,
}

impl Router {
    pub fn new(routes: Vec<RouteEntry>) -> Result<Self, RouterError> {
        for (i, entry) in routes.iter().enumerate() {
            for other in &routes[..i] {
                if other.path == entry.path {
                    return Err(RouterError::DuplicatePath(entry.path));
                }
                if other.name == entry.name {
                    return Err(RouterError::DuplicateName(entry.name));
                }
            }
        }
        Ok(Self {
            routes,
            views: HashMap::new(),
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Match `path` against the table. Exact static entries win over
    /// patterns; patterns are tried in declaration order. Captured
    /// parameters are dropped unless the entry opts into forwarding.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, NavError> {
        let segs = segments(path);

        for entry in self.routes.iter().filter(|e| is_static_path(e.path)) {
            if segments(entry.path) == segs {
                return Ok(ResolvedRoute {
                    name: entry.name,
                    params: RouteParams::new(),
                });
            }
        }

        for entry in self.routes.iter().filter(|e| !is_static_path(e.path)) {
            if let Some(params) = match_pattern(entry.path, &segs) {
                return Ok(ResolvedRoute {
                    name: entry.name,
                    params: if entry.pass_params {
                        params
                    } else {
                        RouteParams::new()
                    },
                });
            }
        }

        Err(NavError::NotFound {
            path: path.to_string(),
        })
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    pub fn view(&self, name: &str) -> Option<&dyn View> {
        self.views.get(name).map(Box::as_ref)
    }

    /// Start loading the view for `name`. Returns `None` for unknown names
    /// or when the view is already cached. The caller drives the future and
    /// hands the result back through [`Router::install`].
    pub fn begin_load(&self, name: &str) -> Option<ViewFuture> {
        if self.is_loaded(name) {
            return None;
        }
        self.routes
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.loader)())
    }

    /// Cache a loaded view under its route name.
    pub fn install(&mut self, name: &'static str, view: Box<dyn View>) {
        self.views.insert(name, view);
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn is_static_path(path: &str) -> bool {
    segments(path)
        .iter()
        .all(|seg| !seg.starts_with(':') && *seg != "*")
}

/// Match a pattern's segments against a concrete path. `:name` captures one
/// segment; a trailing `*` captures the remainder under `"*"`.
fn match_pattern(pattern: &str, path_segs: &[&str]) -> Option<RouteParams> {
    let pat_segs = segments(pattern);
    let mut params = RouteParams::new();

    for (idx, pat) in pat_segs.iter().enumerate() {
        if *pat == "*" {
            params.insert("*".to_string(), path_segs[idx..].join("/"));
            return Some(params);
        }
        let seg = path_segs.get(idx)?;
        if let Some(name) = pat.strip_prefix(':') {
            params.insert(name.to_string(), (*seg).to_string());
        } else if pat != seg {
            return None;
        }
    }

    if path_segs.len() == pat_segs.len() {
        Some(params)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl View for Blank {
        fn render(&self, _frame: &mut Frame, _area: Rect, _ctx: &ViewContext<'_>) {}
    }

    fn blank_loader() -> ViewFuture {
        Box::pin(async { Ok(Box::new(Blank) as Box<dyn View>) })
    }

    fn failing_loader() -> ViewFuture {
        Box::pin(async { Err(ViewLoadError("resource unavailable".into())) })
    }

    fn test_router() -> Router {
        Router::new(vec![
            RouteEntry::new("/", "home", false, blank_loader),
            RouteEntry::new("/make-prompt", "make-prompt", true, blank_loader),
            // Pattern declared before the static entry it overlaps with.
            RouteEntry::new("/session/:id", "session", true, blank_loader),
            RouteEntry::new("/session/latest", "session-latest", true, blank_loader),
            RouteEntry::new("/tag/:id", "tag", false, blank_loader),
            RouteEntry::new("/broken", "broken", false, failing_loader),
        ])
        .unwrap()
    }

    #[test]
    fn resolves_root_with_no_params() {
        let router = test_router();
        let resolved = router.resolve("/").unwrap();
        assert_eq!(resolved.name, "home");
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn resolves_static_path_with_trailing_slash() {
        let router = test_router();
        assert_eq!(router.resolve("/make-prompt").unwrap().name, "make-prompt");
        assert_eq!(router.resolve("/make-prompt/").unwrap().name, "make-prompt");
    }

    #[test]
    fn static_entries_win_over_earlier_patterns() {
        let router = test_router();
        assert_eq!(
            router.resolve("/session/latest").unwrap().name,
            "session-latest"
        );
        let resolved = router.resolve("/session/42").unwrap();
        assert_eq!(resolved.name, "session");
        assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn params_are_dropped_without_opt_in() {
        let router = test_router();
        let resolved = router.resolve("/tag/rust").unwrap();
        assert_eq!(resolved.name, "tag");
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn unregistered_path_is_not_found() {
        let router = test_router();
        assert_eq!(
            router.resolve("/no-such-view"),
            Err(NavError::NotFound {
                path: "/no-such-view".to_string()
            })
        );
    }

    #[test]
    fn rejects_duplicate_paths_and_names() {
        let dup_path = Router::new(vec![
            RouteEntry::new("/", "home", false, blank_loader),
            RouteEntry::new("/", "other", false, blank_loader),
        ]);
        assert_eq!(dup_path.err(), Some(RouterError::DuplicatePath("/")));

        let dup_name = Router::new(vec![
            RouteEntry::new("/", "home", false, blank_loader),
            RouteEntry::new("/h", "home", false, blank_loader),
        ]);
        assert_eq!(dup_name.err(), Some(RouterError::DuplicateName("home")));
    }

    #[test]
    fn wildcard_captures_the_remainder() {
        let router = Router::new(vec![
            RouteEntry::new("/", "home", false, blank_loader),
            RouteEntry::new("/docs/*", "docs", true, blank_loader),
        ])
        .unwrap();
        let resolved = router.resolve("/docs/guide/setup").unwrap();
        assert_eq!(resolved.name, "docs");
        assert_eq!(
            resolved.params.get("*").map(String::as_str),
            Some("guide/setup")
        );
    }

    #[tokio::test]
    async fn views_load_once_and_are_cached_by_name() {
        let mut router = test_router();
        assert!(!router.is_loaded("home"));

        let fut = router.begin_load("home").unwrap();
        let view = fut.await.unwrap();
        router.install("home", view);

        assert!(router.is_loaded("home"));
        assert!(router.view("home").is_some());
        // A cached view is not loaded again.
        assert!(router.begin_load("home").is_none());
    }

    #[tokio::test]
    async fn load_failure_is_an_error_not_a_panic() {
        let router = test_router();
        let fut = router.begin_load("broken").unwrap();
        let err = fut.await.err().unwrap();
        assert_eq!(err, ViewLoadError("resource unavailable".into()));
        assert!(!router.is_loaded("broken"));
    }

    #[test]
    fn unknown_name_has_no_loader() {
        let router = test_router();
        assert!(router.begin_load("nope").is_none());
    }
}
