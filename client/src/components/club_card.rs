//! Card for a club in the directory grid and on the home page.

use leptos::prelude::*;

use crate::components::social_buttons::FollowButton;
use crate::data::Club;

#[component]
pub fn ClubCard(club: &'static Club) -> impl IntoView {
    let href = format!("/clubs/{}", club.id);

    view! {
        <article class="club-card">
            <a class="club-card__link" href=href>
                <span class="club-card__badge">{club.category.label()}</span>
                <h3 class="club-card__name">{club.name}</h3>
                <p class="club-card__university">{club.university_name()}</p>
                <p class="club-card__description">{club.description}</p>
            </a>
            <footer class="club-card__meta">
                <span class="club-card__members">{format!("{} members", club.members)}</span>
                <FollowButton club=club/>
            </footer>
        </article>
    }
}
