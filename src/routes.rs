//! Client-side route table of the single-page front end.
//!
//! A static, ordered list of path patterns mapped to views, plus a redirect
//! table. Patterns support a single `:id` placeholder segment for the edit
//! flow. There are no guards and no async resolution.
use std::fmt;

/// The view a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    CreateDream,
    MyDreams,
    DreamAnalysis,
    Profile,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = match self {
            View::Login => "LoginView",
            View::Home => "HomeView",
            View::CreateDream => "CreateDreamView",
            View::MyDreams => "MyDreamsView",
            View::DreamAnalysis => "DreamAnalysisView",
            View::Profile => "ProfileView",
        };
        write!(f, "{view}")
    }
}

/// One entry of the route table.
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// The route table, in resolution order.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "Login",
        view: View::Login,
    },
    Route {
        path: "/main/home",
        name: "Main",
        view: View::Home,
    },
    Route {
        path: "/create-dream",
        name: "CreateDream",
        view: View::CreateDream,
    },
    Route {
        path: "/main/my-dreams",
        name: "MyDreams",
        view: View::MyDreams,
    },
    Route {
        path: "/main/dream-analysis",
        name: "DreamAnalysis",
        view: View::DreamAnalysis,
    },
    Route {
        path: "/main/profile",
        name: "Profile",
        view: View::Profile,
    },
    // The edit flow reuses the creation view, prefilled from the dream id.
    Route {
        path: "/edit-dream/:id",
        name: "EditDream",
        view: View::CreateDream,
    },
];

/// Redirects applied before the route table is consulted.
pub const REDIRECTS: &[(&str, &str)] = &[("/main", "/main/home")];

/// The outcome of resolving a path against the route table.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path matched a route. `param` holds the value bound to the `:id`
    /// placeholder, when the pattern has one.
    Matched {
        route: &'static Route,
        param: Option<&'a str>,
    },
    /// The path must be resolved again at the target location.
    Redirect(&'static str),
    NotFound,
}

/// Resolves a path against [`REDIRECTS`] and then [`ROUTES`], in order.
#[must_use]
pub fn resolve(path: &str) -> Resolution<'_> {
    if let Some((_, target)) = REDIRECTS.iter().find(|(from, _)| *from == path) {
        return Resolution::Redirect(target);
    }

    for route in ROUTES {
        if let Some(param) = match_pattern(route.path, path) {
            return Resolution::Matched { route, param };
        }
    }

    Resolution::NotFound
}

/// Matches a path against a pattern with at most one `:param` segment.
/// Returns `None` on mismatch, `Some(param)` on match.
fn match_pattern<'a>(pattern: &str, path: &'a str) -> Option<Option<&'a str>> {
    if !pattern.contains(':') {
        return (pattern == path).then_some(None);
    }

    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut param = None;

    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(_name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            param = Some(*path_segment);
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(param)
}
