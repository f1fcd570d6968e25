//! Login page: email + password against the demo accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input is validated locally before the session store sees it. Once the
//! store reports `Authenticated` the page sends the viewer on to the
//! `next` query parameter, or home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::{DEMO_ACCOUNTS, Status, ValidationError};

use crate::state::session::SessionContext;
use crate::util::auth::post_login_target;

/// Inline message for input rejected before any request is made.
fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::EmptyEmail => "Enter your email address.",
        ValidationError::EmptyPassword => "Enter your password.",
        ValidationError::MalformedEmail(_) => "That does not look like an email address.",
    }
}

/// Submit button caption for the current status.
fn submit_label(status: Status) -> &'static str {
    if status == Status::Loading { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if session.status() == Status::Authenticated {
            let next = query.read_untracked().get("next");
            navigate(&post_login_target(next.as_deref()), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.store.with_untracked(|s| s.is_loading()) {
            return;
        }
        match session.sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(()) => info.set(String::new()),
            Err(e) => info.set(validation_message(&e).to_owned()),
        }
    };

    let last_error = move || session.store.with(|s| s.last_error().map(str::to_owned));
    let loading = move || session.status() == Status::Loading;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to ClubHub"</h1>
                <p class="login-subtitle">"Follow clubs, upvote events, and apply for membership."</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Email"</span>
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@university.ac.bd"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary login-button" type="submit" disabled=loading>
                        {move || submit_label(session.status())}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="login-info">{move || info.get()}</p>
                </Show>

                {move || {
                    last_error()
                        .map(|message| {
                            view! {
                                <div class="login-error" role="alert">
                                    <span>{message}</span>
                                    <button class="btn btn--ghost" on:click=move |_| session.dismiss_error()>
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}

                <section class="demo-accounts">
                    <h2>"Demo accounts"</h2>
                    <ul>
                        {DEMO_ACCOUNTS
                            .iter()
                            .map(|account| {
                                let fill = move |_| {
                                    email.set(account.email.to_owned());
                                    password.set(account.password.to_owned());
                                    info.set(String::new());
                                };
                                view! {
                                    <li>
                                        <button type="button" class="demo-account" on:click=fill>
                                            <span class="demo-account__role">{account.role.label()}</span>
                                            <code>{account.email}</code>
                                            " / "
                                            <code>{account.password}</code>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
