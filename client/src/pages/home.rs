//! Landing page: headline numbers, the next event, and popular clubs.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::club_card::ClubCard;
use crate::components::countdown_timer::CountdownTimer;
use crate::components::event_card::EventCard;
use crate::data::{Club, UNIVERSITIES};
use crate::net::api::{list_clubs, list_events};
use crate::state::schedule::{next_event, upcoming};
use crate::util::time::{format_range, now_ms};

const FEATURED_CLUBS: usize = 3;

/// Clubs with the most followers, highest first.
fn featured(clubs: &'static [Club], limit: usize) -> Vec<&'static Club> {
    let mut ranked: Vec<&Club> = clubs.iter().collect();
    ranked.sort_by(|a, b| b.followers.cmp(&a.followers).then_with(|| a.name.cmp(b.name)));
    ranked.truncate(limit);
    ranked
}

#[component]
pub fn HomePage() -> impl IntoView {
    let now = now_ms();
    let clubs = list_clubs();
    let events = list_events();
    let upcoming_count = upcoming(events, now).len();
    let next = next_event(events, now);

    view! {
        <section class="hero">
            <h1>"Every campus club in Bangladesh, in one place."</h1>
            <p class="hero__lead">
                "Discover societies, follow what you care about, and never miss an event."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/clubs">"Browse clubs"</a>
                <a class="btn" href="/events">"See events"</a>
            </div>
            <dl class="hero__stats">
                <div><dt>"Clubs"</dt><dd>{clubs.len()}</dd></div>
                <div><dt>"Universities"</dt><dd>{UNIVERSITIES.len()}</dd></div>
                <div><dt>"Upcoming events"</dt><dd>{upcoming_count}</dd></div>
            </dl>
        </section>

        {next
            .map(|event| {
                view! {
                    <section class="next-event">
                        <h2>"Up next"</h2>
                        <p class="next-event__when">{format_range(event.starts_at, event.ends_at)}</p>
                        <CountdownTimer target_ms={event.starts_at}/>
                        <EventCard event=event/>
                    </section>
                }
            })}

        <section class="featured">
            <h2>"Popular clubs"</h2>
            <div class="card-grid">
                {featured(clubs, FEATURED_CLUBS)
                    .into_iter()
                    .map(|club| view! { <ClubCard club=club/> })
                    .collect_view()}
            </div>
        </section>
    }
}
