use leptos::prelude::*;

/// Fallback for unknown routes and stale detail links.
#[component]
pub fn NotFoundPage(#[prop(default = "page")] what: &'static str) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{format!("That {what} could not be found.")}</h1>
            <p><a href="/">"Back to ClubHub"</a></p>
        </section>
    }
}
