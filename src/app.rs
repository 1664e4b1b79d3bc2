//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::notice_stack::NoticeStack;
use crate::guard::{self, GuardConfig, GuardOutcome};
use crate::pages::{
    business::BusinessPage, home::HomePage, login::LoginPage, orders::OrdersPage,
};
use crate::routes;
use crate::session::SessionStore;
use crate::state::{cart::CartState, notice::NoticeState};

/// Root application component.
///
/// Builds the session store, provides all shared contexts, and sets up
/// client-side routing with the pre-navigation guard. The guard's public
/// allow-list is a deployment input: pass a [`GuardConfig`] to open extra
/// routes (say, registration) to signed-out users; omitting it falls back
/// to the default where only the login page is public.
#[component]
pub fn App(#[prop(optional)] guard_config: Option<GuardConfig>) -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let session = Arc::new(SessionStore::browser());
    #[cfg(not(feature = "hydrate"))]
    let session = Arc::new(SessionStore::in_memory());

    let cart = RwSignal::new(CartState::default());
    let notices = RwSignal::new(NoticeState::default());
    let config = Arc::new(guard_config.unwrap_or_default());

    // Any read that discovers a stale token purges it; tell the user why
    // they are suddenly signed out.
    session.set_expiry_hook(move || {
        notices.update(|n| n.warning("Your session has expired, please sign in again"));
    });

    provide_context(Arc::clone(&session));
    provide_context(cart);
    provide_context(notices);
    provide_context(Arc::clone(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/foodcourt.css"/>
        <Title text="Foodcourt"/>

        <Router>
            <RouteGuard/>
            <NoticeStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("business"), ParamSegment("id")) view=BusinessPage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
            </Routes>
        </Router>
    }
}

/// Pre-navigation interceptor.
///
/// Watches the router location, resolves the destination's route name, and
/// applies [`guard::evaluate`] synchronously: authorized users are bounced
/// off the login page, unauthorized users are bounced off everything outside
/// the public allow-list.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let config = expect_context::<Arc<GuardConfig>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let to = routes::route_name_for_path(&path);
        match guard::evaluate(to, !session.is_unauthorized(), &config) {
            GuardOutcome::RedirectHome => {
                if let Some(home) = routes::path_for_name(&config.home_route) {
                    navigate(home, NavigateOptions::default());
                }
            }
            GuardOutcome::RedirectLogin => {
                if let Some(login) = routes::path_for_name(&config.login_route) {
                    navigate(login, NavigateOptions::default());
                }
            }
            GuardOutcome::Proceed => {}
        }
    });
}
