//! Login page with sign-in and account-creation forms.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{LoginRequest, SignupRequest};
use crate::state::auth::AuthEvents;
#[cfg(feature = "csr")]
use crate::state::auth::{AuthEvent, dispatch};

/// Which form the page is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    SignIn,
    SignUp,
}

pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

pub(crate) fn validate_sign_up_input(
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<SignupRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let display_name = display_name.trim();
    Ok(SignupRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        display_name: if display_name.is_empty() { None } else { Some(display_name.to_owned()) },
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let events = expect_context::<RwSignal<AuthEvents>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(FormMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        match mode.get() {
            FormMode::SignIn => {
                let input = match validate_sign_in_input(&email.get(), &password.get()) {
                    Ok(input) => input,
                    Err(msg) => {
                        info.set(msg.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set("Signing in...".to_owned());

                #[cfg(feature = "csr")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::sign_in(&input).await {
                            Ok(user) => {
                                dispatch(events, AuthEvent::SignedIn(user));
                                navigate("/", NavigateOptions::default());
                            }
                            Err(e) => {
                                info.set(e);
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&events, &navigate, input);
                }
            }
            FormMode::SignUp => {
                let input = match validate_sign_up_input(&email.get(), &password.get(), &display_name.get()) {
                    Ok(input) => input,
                    Err(msg) => {
                        info.set(msg.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set("Creating account...".to_owned());

                #[cfg(feature = "csr")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::sign_up(&input).await {
                            Ok(user) => {
                                dispatch(events, AuthEvent::SignedIn(user));
                                navigate("/", NavigateOptions::default());
                            }
                            Err(e) => {
                                info.set(e);
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&events, &navigate, input);
                }
            }
        }
    };

    let switch_mode = move |next: FormMode| {
        mode.set(next);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Taskdeck"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        FormMode::SignIn => "Sign in to your workspace",
                        FormMode::SignUp => "Create your account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == FormMode::SignUp>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="display name (optional)"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match mode.get() {
                            FormMode::SignIn => "Sign In",
                            FormMode::SignUp => "Sign Up",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                {move || match mode.get() {
                    FormMode::SignIn => view! {
                        <p class="login-card__switch">
                            "New here? "
                            <button class="login-link" on:click=move |_| switch_mode(FormMode::SignUp)>
                                "Create an account"
                            </button>
                        </p>
                    }
                        .into_any(),
                    FormMode::SignUp => view! {
                        <p class="login-card__switch">
                            "Already a member? "
                            <button class="login-link" on:click=move |_| switch_mode(FormMode::SignIn)>
                                "Sign in instead"
                            </button>
                        </p>
                    }
                        .into_any(),
                }}
            </div>
        </div>
    }
}
