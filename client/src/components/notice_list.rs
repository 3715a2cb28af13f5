//! Transient notice (toast) rendering.

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};

/// Stacked notices in the corner of the viewport. Click to dismiss.
#[component]
pub fn NoticeList() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notices">
            {move || {
                ui.get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = match notice.level {
                            NoticeLevel::Info => "notice",
                            NoticeLevel::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class on:click=move |_| ui.update(|u| u.dismiss_notice(id))>
                                {notice.message.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
