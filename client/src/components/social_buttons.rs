//! Follow and upvote toggles backed by the shared `SocialState` signal.

use leptos::prelude::*;

use crate::data::{Club, Event};
use crate::state::social::{SocialState, compact_count};
use crate::util::storage::BrowserStorage;

#[component]
pub fn FollowButton(club: &'static Club) -> impl IntoView {
    let social = expect_context::<RwSignal<SocialState>>();
    let following = move || social.with(|s| s.is_following(club.id));
    let count = move || social.with(|s| compact_count(s.follower_count(club)));
    let on_click = move |_| {
        social.update(|s| {
            let now_following = s.toggle_follow(club.id);
            log::debug!("follow {} -> {now_following}", club.id);
            s.save(&BrowserStorage);
        });
    };

    view! {
        <button
            class="btn btn--follow"
            class:btn--active=following
            aria-pressed=move || following().to_string()
            on:click=on_click
        >
            {move || if following() { "Following" } else { "Follow" }}
            <span class="btn__count">{count}</span>
        </button>
    }
}

#[component]
pub fn UpvoteButton(event: &'static Event) -> impl IntoView {
    let social = expect_context::<RwSignal<SocialState>>();
    let upvoted = move || social.with(|s| s.has_upvoted(event.id));
    let count = move || social.with(|s| compact_count(s.upvote_count(event)));
    let on_click = move |_| {
        social.update(|s| {
            s.toggle_upvote(event.id);
            s.save(&BrowserStorage);
        });
    };

    view! {
        <button
            class="btn btn--upvote"
            class:btn--active=upvoted
            aria-pressed=move || upvoted().to_string()
            title="Upvote"
            on:click=on_click
        >
            "▲ "
            <span class="btn__count">{count}</span>
        </button>
    }
}
