//! Card for an event in listings.

use leptos::prelude::*;

use crate::components::social_buttons::UpvoteButton;
use crate::data::Event;
use crate::util::time::format_range;

#[component]
pub fn EventCard(event: &'static Event) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let host = event.club().map_or("Unknown club", |c| c.name);

    view! {
        <article class="event-card">
            <a class="event-card__link" href=href>
                <p class="event-card__when">{format_range(event.starts_at, event.ends_at)}</p>
                <h3 class="event-card__title">{event.title}</h3>
                <p class="event-card__host">{host}</p>
                <p class="event-card__venue">{event.venue}</p>
            </a>
            <footer class="event-card__meta">
                <span class="event-card__capacity">{format!("{} seats", event.capacity)}</span>
                <UpvoteButton event=event/>
            </footer>
        </article>
    }
}
