//! Public landing page shown to anonymous visitors.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-card">
                <h1>"Taskdeck"</h1>
                <p class="landing-card__subtitle">
                    "Sprint planning and delivery tracking for small teams."
                </p>
                <ul class="landing-card__points">
                    <li>"Dashboards tuned to each member's role"</li>
                    <li>"Review queues that keep testers unblocked"</li>
                    <li>"Viewer seats for stakeholders at no cost"</li>
                </ul>
                <a class="landing-button" href="/login">
                    "Sign In"
                </a>
            </div>
        </div>
    }
}
