//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes (currently the apply form) should apply identical
//! unauthenticated redirect behavior and return the viewer afterwards.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionContext, should_redirect_to_login};

/// `/login?next=<path>`, or plain `/login` when `next` is not a local path.
pub fn login_path(next: &str) -> String {
    if is_local_path(next) && next != "/login" {
        format!("/login?next={}", urlencoding::encode(next))
    } else {
        "/login".to_owned()
    }
}

/// Where to go after a successful sign-in. Only same-site paths are honored.
pub fn post_login_target(next: Option<&str>) -> String {
    next.filter(|n| is_local_path(n) && !n.starts_with("/login"))
        .unwrap_or("/")
        .to_owned()
}

/// Same-site absolute path. Browsers treat `\` as `/`, so `/\host` would
/// escape to another origin just like `//host`.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains("://")
        && !path.chars().any(|c| c == '\\' || c.is_control())
}

/// Redirect to `/login` once hydration has settled and nobody is signed in.
///
/// `return_to` is read when the redirect fires, so routes whose params change
/// in place send the viewer back to the current path.
pub fn install_unauth_redirect<R, F>(session: SessionContext, return_to: R, navigate: F)
where
    R: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let hydrated = session.hydrated.get();
        let snapshot = session.snapshot();
        if should_redirect_to_login(hydrated, &snapshot) {
            navigate(&login_path(&return_to()), NavigateOptions::default());
        }
    });
}
