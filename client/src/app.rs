//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::{Footer, NavBar};
use crate::pages::{
    about::AboutPage, apply::ApplyPage, club_detail::ClubDetailPage, clubs::ClubsPage,
    event_detail::EventDetailPage, events::EventsPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::session::SessionContext;
use crate::state::social::SocialState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and social contexts, restores both from
/// `localStorage` once mounted, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    let social = RwSignal::new(SocialState::default());
    provide_context(session);
    provide_context(social);

    // Effects only run in the browser, so the server always renders the
    // signed-out view and hydration fills in the stored identity.
    Effect::new(move || {
        session.hydrate();
        social.set(SocialState::load(&BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/clubhub.css"/>
        <Title text="ClubHub BD"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("clubs") view=ClubsPage/>
                    <Route path=(StaticSegment("clubs"), ParamSegment("id")) view=ClubDetailPage/>
                    <Route
                        path=(StaticSegment("clubs"), ParamSegment("id"), StaticSegment("apply"))
                        view=ApplyPage
                    />
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
