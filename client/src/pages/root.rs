//! Root route — chooses between loading, dashboard, and landing.

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

use leptos::prelude::*;

use crate::pages::{dashboard::DashboardPage, landing::LandingPage};
use crate::state::auth::AuthState;

/// Which of the three root renderings the current auth state selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootView {
    Loading,
    Dashboard,
    Landing,
}

/// Pure routing decision: a still-resolving session shows the loading
/// screen, an authenticated user lands on the dashboard, everyone else
/// gets the public landing page.
#[must_use]
pub fn choose_view(loading: bool, signed_in: bool) -> RootView {
    if loading {
        RootView::Loading
    } else if signed_in {
        RootView::Dashboard
    } else {
        RootView::Landing
    }
}

/// Root route component.
#[component]
pub fn RootPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let view_kind = move || {
        let state = auth.get();
        choose_view(state.loading, state.user.is_some())
    };

    view! {
        {move || match view_kind() {
            RootView::Loading => view! { <LoadingScreen/> }.into_any(),
            RootView::Dashboard => view! { <DashboardPage/> }.into_any(),
            RootView::Landing => view! { <LandingPage/> }.into_any(),
        }}
    }
}

/// Full-page spinner shown while the initial session probe is in flight.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p>"Checking session..."</p>
        </div>
    }
}
