//! Club profile: description, facts, upcoming events, and the apply link.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::event_card::EventCard;
use crate::components::social_buttons::FollowButton;
use crate::data::{Club, events_for_club};
use crate::net::api::get_club;
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn ClubDetailPage() -> impl IntoView {
    let params = use_params_map();
    let club = move || params.read().get("id").and_then(|id| get_club(&id).ok());

    move || match club() {
        Some(club) => view! { <ClubProfile club=club/> }.into_any(),
        None => view! { <NotFoundPage what="club"/> }.into_any(),
    }
}

#[component]
fn ClubProfile(club: &'static Club) -> impl IntoView {
    let events = events_for_club(club.id);
    let apply_href = format!("/clubs/{}/apply", club.id);

    view! {
        <article class="club-profile">
            <header class="club-profile__header">
                <span class="club-card__badge">{club.category.label()}</span>
                <h1>{club.name}" "<small>"("{club.short_name}")"</small></h1>
                <p class="club-profile__university">{club.university_name()}</p>
                <div class="club-profile__actions">
                    <FollowButton club=club/>
                    <a class="btn btn--primary" href=apply_href>"Apply to join"</a>
                </div>
            </header>

            <p class="club-profile__description">{club.description}</p>

            <dl class="club-profile__facts">
                <div><dt>"Founded"</dt><dd>{club.founded}</dd></div>
                <div><dt>"Members"</dt><dd>{club.members}</dd></div>
                <div><dt>"Meets at"</dt><dd>{club.meeting_place}</dd></div>
                <div>
                    <dt>"Contact"</dt>
                    <dd><a href={format!("mailto:{}", club.contact_email)}>{club.contact_email}</a></dd>
                </div>
            </dl>

            <ul class="tag-list">
                {club.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
            </ul>

            <section class="club-profile__events">
                <h2>"Events"</h2>
                {if events.is_empty() {
                    view! { <p class="empty-state">"No events scheduled yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {events.into_iter().map(|event| view! { <EventCard event=event/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        </article>
    }
}
