//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_list::NoticeList;
use crate::pages::{login::LoginPage, root::RootPage};
use crate::state::auth::{AuthEvents, AuthState};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the auth and UI contexts, installs the auth event listener,
/// kicks off the initial session probe, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let events = RwSignal::new(AuthEvents::default());
    let ui = RwSignal::new(UiState::new(crate::util::dark_mode::read_preference()));

    provide_context(auth);
    provide_context(events);
    provide_context(ui);

    crate::state::auth::install_event_listener(auth, events);
    crate::state::auth::bootstrap_session(events);

    // Keep the document theme attribute in sync with the flag.
    Effect::new(move || crate::util::dark_mode::apply(ui.get().dark_mode));

    view! {
        <Title text="Taskdeck"/>

        <NoticeList/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
