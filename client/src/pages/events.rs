//! Event listing split into upcoming and past tabs.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::net::api::list_events;
use crate::state::schedule::{past, upcoming};
use crate::util::time::now_ms;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Upcoming,
    Past,
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Upcoming);
    let now = now_ms();

    let tab_button = move |which: Tab, label: &'static str| {
        view! {
            <button
                class="tab"
                class:tab--active=move || tab.get() == which
                role="tab"
                on:click=move |_| tab.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="events">
            <header class="events__header">
                <h1>"Events"</h1>
                <div class="tabs" role="tablist">
                    {tab_button(Tab::Upcoming, "Upcoming")}
                    {tab_button(Tab::Past, "Past")}
                </div>
            </header>
            <div class="card-grid">
                {move || {
                    let events = match tab.get() {
                        Tab::Upcoming => upcoming(list_events(), now),
                        Tab::Past => past(list_events(), now),
                    };
                    if events.is_empty() {
                        view! { <p class="empty-state">"Nothing here yet."</p> }.into_any()
                    } else {
                        events.into_iter().map(|event| view! { <EventCard event=event/> }).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}
