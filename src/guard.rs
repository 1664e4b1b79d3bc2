//! Pre-navigation authorization guard.
//!
//! Every navigation intent resolves to exactly one of three outcomes,
//! evaluated in fixed order: an authorized user heading for the login route
//! bounces home; an unauthorized user heading anywhere outside the public
//! allow-list bounces to login; everything else proceeds. A destination with
//! no resolvable route name is never in the allow-list (fail closed).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Route names reachable without an authorized session.
///
/// Deployments differ here (some expose only `login`, some add `register`
/// and `reset`), so the allow-list is configuration, not a constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_route: String,
    pub home_route: String,
    pub public_routes: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_route: "login".to_owned(),
            home_route: "home".to_owned(),
            public_routes: vec!["login".to_owned()],
        }
    }
}

/// The guard's decision for one navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Authorized user on the login route: send them home.
    RedirectHome,
    /// Unauthorized user on a guarded route: send them to login.
    RedirectLogin,
    /// Let the navigation through unmodified.
    Proceed,
}

/// Decide the outcome for a navigation to the route named `to`.
///
/// `to` is `None` when the destination has no resolvable name, which counts
/// as outside the allow-list.
#[must_use]
pub fn evaluate(to: Option<&str>, authorized: bool, config: &GuardConfig) -> GuardOutcome {
    if authorized && to == Some(config.login_route.as_str()) {
        return GuardOutcome::RedirectHome;
    }
    let public = to.is_some_and(|name| config.public_routes.iter().any(|p| p == name));
    if !authorized && !public {
        return GuardOutcome::RedirectLogin;
    }
    GuardOutcome::Proceed
}
