//! Static route table.
//!
//! The guard only ever looks at route *names*; paths and views are opaque to
//! it. The table is a static tree so guarded sub-views hang off their parent
//! entry, and it is never mutated at runtime. Pattern segments starting with
//! `:` match any value (`/business/:id`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// One declarative route record.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub children: &'static [RouteEntry],
}

/// The application's route tree. Everything under `home` requires an
/// authorized session; the allow-list in [`crate::guard::GuardConfig`]
/// decides what is public.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        name: "login",
        path: "/login",
        children: &[],
    },
    RouteEntry {
        name: "home",
        path: "/",
        children: &[
            RouteEntry {
                name: "business",
                path: "/business/:id",
                children: &[],
            },
            RouteEntry {
                name: "orders",
                path: "/orders",
                children: &[],
            },
        ],
    },
];

/// Resolve a location pathname to a route name, descending into children.
/// Unknown or malformed paths resolve to `None`, which the guard treats as
/// guarded.
#[must_use]
pub fn route_name_for_path(path: &str) -> Option<&'static str> {
    if !path.starts_with('/') {
        return None;
    }
    find_in(ROUTES, path)
}

/// Path pattern for a route name, for building redirect targets.
#[must_use]
pub fn path_for_name(name: &str) -> Option<&'static str> {
    fn search(entries: &'static [RouteEntry], name: &str) -> Option<&'static str> {
        for entry in entries {
            if entry.name == name {
                return Some(entry.path);
            }
            if let Some(path) = search(entry.children, name) {
                return Some(path);
            }
        }
        None
    }
    search(ROUTES, name)
}

fn find_in(entries: &'static [RouteEntry], path: &str) -> Option<&'static str> {
    for entry in entries {
        if pattern_matches(entry.path, path) {
            return Some(entry.name);
        }
        if let Some(name) = find_in(entry.children, path) {
            return Some(name);
        }
    }
    None
}

/// Segment-wise match, trailing-slash insensitive. A `:param` segment
/// matches any single non-empty segment.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut expected = pattern.split('/').filter(|s| !s.is_empty());
    let mut actual = path.split('/').filter(|s| !s.is_empty());
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) if want.starts_with(':') || want == got => {}
            _ => return false,
        }
    }
}
