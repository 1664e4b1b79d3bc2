//! Order-history page: paid and unpaid orders.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::OrderList;
use crate::session::SessionStore;
use crate::state::notice::NoticeState;

/// Order-history page — renders the unpaid and paid lists.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let fetch_session = Arc::clone(&session);
    let orders = LocalResource::new(move || {
        let session = Arc::clone(&fetch_session);
        async move {
            match api::fetch_orders(&session).await {
                Ok(all) => Some(all),
                Err(err) => {
                    notices.update(|n| api::report_api_error(n, &err));
                    None
                }
            }
        }
    });

    view! {
        <div class="orders-page">
            <header class="orders-page__header">
                <a href="/">"< Back"</a>
                <h1>"My orders"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .flatten()
                        .map(|all| {
                            view! {
                                <section>
                                    <h2>"Unpaid"</h2>
                                    {order_cards(all.unpaid_list)}
                                </section>
                                <section>
                                    <h2>"Paid"</h2>
                                    {order_cards(all.paid_list)}
                                </section>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn order_cards(orders: Vec<OrderList>) -> impl IntoView {
    if orders.is_empty() {
        return view! { <p>"Nothing here."</p> }.into_any();
    }
    view! {
        <ul class="order-list">
            {orders
                .into_iter()
                .map(|order| {
                    let foods = order
                        .food_list
                        .values()
                        .map(|entry| format!("{} x{}", entry.first, entry.second.first))
                        .collect::<Vec<_>>()
                        .join(", ");
                    view! {
                        <li class="order-card">
                            <h3>{order.business_name}</h3>
                            <p>{foods}</p>
                            <span>
                                {format!(
                                    "Total {} (delivery ${:.2})",
                                    order.total_price,
                                    order.delivery_price,
                                )}
                            </span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
