//! Dashboard — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only through the root router, so a user is always present by
//! the time this renders. Loads the caller's profile on first mount and
//! composes its sections from the profile's role; admins additionally get
//! the team panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{Profile, Role, SessionUser, UpdateProfileRequest};
#[cfg(feature = "csr")]
use crate::state::auth::{AuthEvent, dispatch};
use crate::state::auth::{AuthEvents, AuthState};
#[cfg(feature = "csr")]
use crate::state::ui::NoticeLevel;
use crate::state::ui::UiState;
use crate::util::roles::{DashSection, sections_for};

/// Toolbar identity line: display name plus role label.
pub(crate) fn identity_line(user: &SessionUser) -> String {
    format!("{} ({})", user.display_name, user.role.label())
}

/// Build the PATCH body for the edit dialog, or `None` when nothing
/// changed. An emptied avatar field becomes an explicit clear.
pub(crate) fn build_profile_update(
    name_input: &str,
    avatar_input: &str,
    current: &Profile,
) -> Option<UpdateProfileRequest> {
    let name = name_input.trim();
    let avatar = avatar_input.trim();

    let display_name = (!name.is_empty() && name != current.display_name).then(|| name.to_owned());
    let current_avatar = current.avatar_url.as_deref().unwrap_or("");
    let avatar_url = (avatar != current_avatar).then(|| avatar.to_owned());

    if display_name.is_none() && avatar_url.is_none() {
        return None;
    }
    Some(UpdateProfileRequest { display_name, avatar_url })
}

/// Dashboard page: header, profile card, role-derived sections, and the
/// admin team panel.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<AuthEvents>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Load the profile once a user is present; the guard keeps a failed
    // fetch from looping.
    let requested_profile = RwSignal::new(false);
    Effect::new(move || {
        if requested_profile.get() {
            return;
        }
        if auth.get().user.is_none() {
            return;
        }
        requested_profile.set(true);
        crate::state::auth::load_profile(events);
    });

    let show_edit = RwSignal::new(false);

    // The profile's role wins once loaded; the session's role covers the
    // gap before the first profile fetch resolves.
    let role = move || {
        let state = auth.get();
        state
            .profile
            .map(|p| p.role)
            .or_else(|| state.user.map(|u| u.role))
            .unwrap_or_default()
    };

    let on_logout = move |_| crate::state::auth::sign_out(events);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__brand">"Taskdeck"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <span class="toolbar__self">
                    {move || auth.get().user.as_ref().map(identity_line).unwrap_or_default()}
                </span>

                <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                    "Sign Out"
                </button>
            </header>

            <div class="dashboard-page__body">
                <ProfileCard show_edit=show_edit/>

                <div class="dashboard-page__sections">
                    {move || {
                        sections_for(role())
                            .into_iter()
                            .map(|section| view! { <SectionCard section=section/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || role().can_manage_roles()>
                    <TeamPanel/>
                </Show>
            </div>

            <Show when=move || show_edit.get()>
                <EditProfileDialog show=show_edit/>
            </Show>
        </div>
    }
}

/// One role-derived section card.
#[component]
fn SectionCard(section: DashSection) -> impl IntoView {
    view! {
        <div class="section-card">
            <h3>{section.title}</h3>
            <p>{section.blurb}</p>
        </div>
    }
}

/// The caller's profile summary with an edit entry point.
#[component]
fn ProfileCard(show_edit: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="profile-card">
            <Show
                when=move || auth.get().profile.is_some()
                fallback=move || view! { <p>"Loading profile..."</p> }
            >
                {move || {
                    auth.get().profile.map(|profile| {
                        view! {
                            <div class="profile-card__row">
                                {profile
                                    .avatar_url
                                    .clone()
                                    .map(|url| view! { <img class="profile-card__avatar" src=url alt="avatar"/> })}
                                <div class="profile-card__details">
                                    <h2 class="profile-card__name">{profile.display_name.clone()}</h2>
                                    <span class="profile-card__role">{profile.role.label()}</span>
                                    {profile
                                        .member_since
                                        .clone()
                                        .map(|date| view! { <p class="profile-card__since">{format!("Member since {date}")}</p> })}
                                </div>
                                <button class="btn profile-card__edit" on:click=move |_| show_edit.set(true)>
                                    "Edit"
                                </button>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}

/// Modal dialog for editing display name and avatar.
#[component]
fn EditProfileDialog(show: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<AuthEvents>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let snapshot = auth.get_untracked().profile;
    let name = RwSignal::new(snapshot.as_ref().map(|p| p.display_name.clone()).unwrap_or_default());
    let avatar = RwSignal::new(snapshot.as_ref().and_then(|p| p.avatar_url.clone()).unwrap_or_default());
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(profile) = auth.get_untracked().profile else {
            show.set(false);
            return;
        };
        let Some(update) = build_profile_update(&name.get(), &avatar.get(), &profile) else {
            show.set(false);
            return;
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&update).await {
                Ok(updated) => {
                    dispatch(events, AuthEvent::ProfileUpdated(updated));
                    ui.update(|u| {
                        u.push_notice(NoticeLevel::Info, "Profile updated.");
                    });
                    show.set(false);
                }
                Err(e) => {
                    ui.update(|u| {
                        u.push_notice(NoticeLevel::Error, e);
                    });
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&events, &ui, update);
            show.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| show.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Profile"</h2>
                <label class="dialog__label">
                    "Display Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Avatar URL"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="https://... (leave empty to remove)"
                        prop:value=move || avatar.get()
                        on:input=move |ev| avatar.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| show.set(false)>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Member list with inline role management. Admin only; the server
/// enforces the same gate.
#[component]
fn TeamPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let members = RwSignal::new(Vec::<Profile>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_members().await {
            Ok(list) => members.set(list),
            Err(e) => ui.update(|u| {
                u.push_notice(NoticeLevel::Error, e);
            }),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = &ui;
        loading.set(false);
    }

    view! {
        <div class="team-panel">
            <h2>"Team"</h2>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading members..."</p> }>
                <table class="team-panel__table">
                    <thead>
                        <tr>
                            <th>"Member"</th>
                            <th>"Since"</th>
                            <th>"Role"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            members
                                .get()
                                .into_iter()
                                .map(|member| view! { <MemberRow member=member members=members/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// One table row in the team panel.
#[component]
fn MemberRow(member: Profile, members: RwSignal<Vec<Profile>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let user_id = member.user_id.clone();
    let current_role = member.role;

    let on_role_change = move |ev: leptos::ev::Event| {
        let Ok(next) = event_target_value(&ev).parse::<Role>() else {
            return;
        };
        if next == current_role {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let user_id = user_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_member_role(&user_id, next).await {
                    Ok(updated) => {
                        members.update(|list| {
                            if let Some(row) = list.iter_mut().find(|p| p.user_id == updated.user_id) {
                                *row = updated;
                            }
                        });
                        ui.update(|u| {
                            u.push_notice(NoticeLevel::Info, "Role updated.");
                        });
                    }
                    Err(e) => ui.update(|u| {
                        u.push_notice(NoticeLevel::Error, e);
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&user_id, &members, &ui, next);
        }
    };

    view! {
        <tr class="team-panel__row">
            <td>{member.display_name.clone()}</td>
            <td>{member.member_since.clone().unwrap_or_default()}</td>
            <td>
                <select class="team-panel__role" on:change=on_role_change>
                    {Role::ALL
                        .iter()
                        .map(|r| view! { <option value=r.as_str() selected={*r == current_role}>{r.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </td>
        </tr>
    }
}
