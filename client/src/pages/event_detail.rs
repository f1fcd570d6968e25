//! Event page with a live countdown while the event is upcoming.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::social_buttons::UpvoteButton;
use crate::data::Event;
use crate::net::api::get_event;
use crate::pages::not_found::NotFoundPage;
use crate::state::schedule::EventPhase;
use crate::util::time::{format_range, now_ms};

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event = move || params.read().get("id").and_then(|id| get_event(&id).ok());

    move || match event() {
        Some(event) => view! { <EventProfile event=event/> }.into_any(),
        None => view! { <NotFoundPage what="event"/> }.into_any(),
    }
}

#[component]
fn EventProfile(event: &'static Event) -> impl IntoView {
    let phase = EventPhase::of(event, now_ms());
    let host = event.club();

    view! {
        <article class="event-profile">
            <header class="event-profile__header">
                <span class="phase" class:phase--live={phase == EventPhase::Live}>{phase.label()}</span>
                <h1>{event.title}</h1>
                <p class="event-profile__when">{format_range(event.starts_at, event.ends_at)}</p>
                <p class="event-profile__venue">{event.venue}</p>
                {host
                    .map(|club| {
                        view! {
                            <p class="event-profile__host">
                                "Hosted by " <a href={format!("/clubs/{}", club.id)}>{club.name}</a>
                            </p>
                        }
                    })}
            </header>

            {(phase == EventPhase::Upcoming).then(|| view! { <CountdownTimer target_ms={event.starts_at}/> })}

            <p class="event-profile__description">{event.description}</p>

            <footer class="event-profile__meta">
                <span>{format!("Capacity {}", event.capacity)}</span>
                <UpvoteButton event=event/>
            </footer>

            <ul class="tag-list">
                {event.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}
