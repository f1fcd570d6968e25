//! Live countdown to an event start.
//!
//! TRADE-OFFS
//! ==========
//! The server render shows the remaining time at render; the browser then
//! ticks once a second until the component is dropped.

use leptos::prelude::*;

use crate::state::schedule::Countdown;
use crate::util::time::now_ms;

#[component]
pub fn CountdownTimer(target_ms: i64) -> impl IntoView {
    let now = RwSignal::new(now_ms());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(now_ms());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let remaining = move || Countdown::until(now.get(), target_ms);

    view! {
        <div class="countdown" aria-live="polite">
            {move || {
                let c = remaining();
                if c.is_elapsed() {
                    view! { <span class="countdown__started">"Started"</span> }.into_any()
                } else {
                    view! {
                        <span class="countdown__unit"><strong>{c.days}</strong>" days"</span>
                        <span class="countdown__unit"><strong>{format!("{:02}", c.hours)}</strong>" hrs"</span>
                        <span class="countdown__unit"><strong>{format!("{:02}", c.minutes)}</strong>" min"</span>
                        <span class="countdown__unit"><strong>{format!("{:02}", c.seconds)}</strong>" sec"</span>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
