//! Static about page.

use leptos::prelude::*;

use session::DEMO_ACCOUNTS;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About ClubHub BD"</h1>
            <p>
                "ClubHub BD brings student clubs from universities across Bangladesh onto one "
                "site. Students can browse the directory, follow clubs, keep track of events, "
                "and apply for membership."
            </p>
            <h2>"Roles"</h2>
            <ul>
                {DEMO_ACCOUNTS
                    .iter()
                    .map(|account| view! { <li><strong>{account.role.label()}</strong>" · "{account.university}</li> })
                    .collect_view()}
            </ul>
            <p class="about__note">
                "This is a demo build. Sign-in uses fixed demo accounts and nothing leaves your browser."
            </p>
        </section>
    }
}
