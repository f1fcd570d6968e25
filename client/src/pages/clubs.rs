//! Club directory with search, category chips, and a university picker.

use leptos::prelude::*;

use crate::components::club_card::ClubCard;
use crate::data::{ClubCategory, UNIVERSITIES};
use crate::net::api::list_clubs;
use crate::state::directory::{DirectoryFilter, summary};

#[component]
pub fn ClubsPage() -> impl IntoView {
    let filter = RwSignal::new(DirectoryFilter::default());
    let visible = Memo::new(move |_| filter.with(|f| f.apply(list_clubs())));

    let on_university = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        filter.update(|f| f.university = (!code.is_empty()).then_some(code));
    };

    view! {
        <section class="directory">
            <header class="directory__header">
                <h1>"Clubs"</h1>
                <p class="directory__summary">
                    {move || summary(visible.with(Vec::len), list_clubs().len())}
                </p>
            </header>

            <div class="directory__controls">
                <input
                    class="directory__search"
                    type="search"
                    placeholder="Search clubs, universities, or tags"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    class="directory__university"
                    prop:value=move || filter.with(|f| f.university.clone().unwrap_or_default())
                    on:change=on_university
                >
                    <option value="">"All universities"</option>
                    {UNIVERSITIES
                        .iter()
                        .map(|u| view! { <option value={u.code}>{u.name}</option> })
                        .collect_view()}
                </select>
                <Show when=move || filter.with(DirectoryFilter::is_active)>
                    <button class="btn btn--ghost" on:click=move |_| filter.update(DirectoryFilter::clear)>
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <div class="directory__chips" role="group" aria-label="Category">
                {ClubCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let selected = move || filter.with(|f| f.category == Some(category));
                        let on_click = move |_| {
                            filter.update(|f| {
                                f.category = if f.category == Some(category) { None } else { Some(category) };
                            });
                        };
                        view! {
                            <button class="chip" class:chip--active=selected on:click=on_click>
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card-grid">
                {move || {
                    let clubs = visible.get();
                    if clubs.is_empty() {
                        view! { <p class="empty-state">"No clubs match those filters."</p> }.into_any()
                    } else {
                        clubs.into_iter().map(|club| view! { <ClubCard club=club/> }).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}
