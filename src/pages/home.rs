//! Home page: business listing, cart summary, and sign-out.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::SessionStore;
use crate::state::cart::CartState;
use crate::state::notice::NoticeState;

/// Home page — lists businesses to order from and shows the running cart
/// totals. The route guard has already ensured an authorized session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = session.username().unwrap_or_default();

    let fetch_session = Arc::clone(&session);
    let businesses = LocalResource::new(move || {
        let session = Arc::clone(&fetch_session);
        async move {
            match api::fetch_businesses(&session).await {
                Ok(list) => list,
                Err(err) => {
                    notices.update(|n| api::report_api_error(n, &err));
                    Vec::new()
                }
            }
        }
    });

    let on_logout = move |_| {
        let session = Arc::clone(&session);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::logout(&session).await {
                Ok(()) => {
                    notices.update(|n| n.success("Signed out, see you next time"));
                    navigate("/login", NavigateOptions::default());
                }
                Err(err) => notices.update(|n| api::report_api_error(n, &err)),
            }
        });
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Foodcourt"</h1>
                <span class="home-page__user">{username}</span>
                <span class="home-page__cart">
                    {move || {
                        let c = cart.get();
                        format!("Cart: {} items, ${:.2}", c.total_quantity(), c.total_price())
                    }}
                </span>
                <a href="/orders">"My orders"</a>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading businesses..."</p> }>
                {move || {
                    businesses
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"No businesses available."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="home-page__businesses">
                                        {list
                                            .into_iter()
                                            .map(|b| {
                                                let href = format!("/business/{}", b.id);
                                                view! {
                                                    <li class="business-card">
                                                        <a href=href>
                                                            <h2>{b.business_name}</h2>
                                                            <p>{b.business_explain}</p>
                                                            <span>
                                                                {format!("Delivery ${:.2}", b.delivery_price)}
                                                            </span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
