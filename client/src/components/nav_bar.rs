//! Top navigation with the session indicator.

use leptos::prelude::*;

use crate::state::session::{SessionContext, nav_label};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let on_sign_out = move |_| session.sign_out();

    view! {
        <header class="nav">
            <a class="nav__brand" href="/">"ClubHub BD"</a>
            <nav class="nav__links">
                <a href="/clubs">"Clubs"</a>
                <a href="/events">"Events"</a>
                <a href="/about">"About"</a>
            </nav>
            <div class="nav__session">
                {move || match session.user() {
                    Some(user) => {
                        view! {
                            <span class="nav__user" title={user.university.clone()}>{nav_label(&user)}</span>
                            <button class="btn btn--ghost" on:click=on_sign_out>"Sign out"</button>
                        }
                            .into_any()
                    }
                    None => view! { <a class="btn" href="/login">"Sign in"</a> }.into_any(),
                }}
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"ClubHub BD · Student clubs and events across Bangladesh"</p>
            <p class="footer__note">"Demo build. Data shown is illustrative."</p>
        </footer>
    }
}
