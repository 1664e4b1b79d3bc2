//! Business page: one business's menu with per-dish cart controls.

#[cfg(test)]
#[path = "business_test.rs"]
mod business_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::FoodItem;
use crate::session::SessionStore;
use crate::state::cart::CartState;
use crate::state::notice::NoticeState;

/// Business page — fetches the menu for the business in the route param and
/// lets the user adjust line-item quantities in the shared cart.
#[component]
pub fn BusinessPage() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();

    let fetch_session = Arc::clone(&session);
    let foods = LocalResource::new(move || {
        let session = Arc::clone(&fetch_session);
        let id = params.read().get("id").unwrap_or_default();
        async move {
            match api::fetch_foods(&session, &id).await {
                Ok(list) => list,
                Err(err) => {
                    notices.update(|n| api::report_api_error(n, &err));
                    Vec::new()
                }
            }
        }
    });

    view! {
        <div class="business-page">
            <header class="business-page__header">
                <a href="/">"< Back"</a>
                <span class="business-page__cart">
                    {move || {
                        let c = cart.get();
                        format!("Cart: {} items, ${:.2}", c.total_quantity(), c.total_price())
                    }}
                </span>
            </header>

            <Suspense fallback=move || view! { <p>"Loading menu..."</p> }>
                {move || {
                    foods
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="business-page__menu">
                                    {list
                                        .into_iter()
                                        .map(|food| food_row(cart, food))
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One menu row with minus/plus/remove controls.
///
/// Takes the item by value so the returned view owns everything it shows
/// and rows can be collected straight out of a fetched menu.
fn food_row(cart: RwSignal<CartState>, food: FoodItem) -> impl IntoView {
    let food_id = food.id;
    let price = food.food_price;
    let name = food.food_name.clone();

    let quantity = move || {
        cart.with(|c| {
            c.items
                .iter()
                .find(|item| item.food_id == food_id)
                .map_or(0, |item| item.quantity)
        })
    };

    let enrich_name = name.clone();
    let on_add = move |_| {
        let enriched = enrich_name.clone();
        cart.update(|c| {
            let next = c
                .items
                .iter()
                .find(|item| item.food_id == food_id)
                .map_or(0, |item| item.quantity)
                + 1;
            c.update_cart(food_id, next, price);
            // Fill the display name on first insertion.
            if let Some(item) = c.items.iter_mut().find(|item| item.food_id == food_id) {
                if item.food_name.is_empty() {
                    item.food_name = enriched;
                }
            }
        });
    };

    let on_sub = move |_| {
        cart.update(|c| {
            let current = c
                .items
                .iter()
                .find(|item| item.food_id == food_id)
                .map_or(0, |item| item.quantity);
            if current > 0 {
                // Overwrite to the decremented quantity; a zero-quantity
                // line stays in the cart until removed explicitly.
                c.update_cart(food_id, current - 1, price);
            }
        });
    };

    let on_remove = move |_| cart.update(|c| c.remove_cart(food_id));

    view! {
        <li class="food-row">
            <div class="food-row__info">
                <h3>{name}</h3>
                <p>{food.food_explain}</p>
                <span>{format!("${price:.2}")}</span>
            </div>
            <div class="food-row__controls">
                <button class="btn" on:click=on_sub>"-"</button>
                <span class="food-row__quantity">{quantity}</span>
                <button class="btn" on:click=on_add>"+"</button>
                <button class="btn btn--link" on:click=on_remove>"Remove"</button>
            </div>
        </li>
    }
}
