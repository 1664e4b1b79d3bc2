//! Toast stack rendering the shared notice queue.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

/// Renders queued notices; clicking a toast dismisses it.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = match notice.level {
                            NoticeLevel::Success => "notice notice--success",
                            NoticeLevel::Warning => "notice notice--warning",
                            NoticeLevel::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class on:click=move |_| notices.update(|n| n.dismiss(id))>
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
