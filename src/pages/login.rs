//! Login page with username/password form and a remember-me toggle.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::session::SessionStore;
use crate::state::notice::NoticeState;

/// Login page — submits the credentials as a form post and stores the
/// returned token under the scope picked by the remember-me checkbox.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Arc<SessionStore>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let session = Arc::clone(&session);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::login(
                &session,
                &username.get_untracked(),
                &password.get_untracked(),
                remember.get_untracked(),
            )
            .await;
            pending.set(false);
            match result {
                Ok(record) => {
                    notices.update(|n| n.success(format!("Welcome back, {}", record.username)));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => notices.update(|n| api::report_api_error(n, &err)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Foodcourt"</h1>
            <p>"Sign in to order"</p>
            <form class="login-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
