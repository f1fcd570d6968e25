//! Reactive wrapper around the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionContext` is provided at the app root. Pages read the store
//! through it and route every mutation through its methods, so the store's
//! request fencing holds even when a user double-submits the login form.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{Identity, SessionSnapshot, SessionStore, Status, ValidationError};

use crate::util::storage::BrowserStorage;

/// The store type the app runs with.
pub type ClientSession = SessionStore<BrowserStorage>;

/// Shared handle to the session store plus a flag set once startup
/// hydration has run.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub store: RwSignal<ClientSession>,
    pub hydrated: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(BrowserStorage)),
            hydrated: RwSignal::new(false),
        }
    }

    /// Restore from `localStorage`. Runs once; later calls are ignored.
    pub fn hydrate(self) {
        if self.hydrated.get_untracked() {
            return;
        }
        self.store.update(|s| {
            let status = s.hydrate();
            log::debug!("session hydrated as {status:?}");
        });
        self.hydrated.set(true);
    }

    /// Tracked snapshot for views.
    pub fn snapshot(self) -> SessionSnapshot {
        self.store.with(SessionStore::snapshot)
    }

    /// Tracked current user, cloned.
    pub fn user(self) -> Option<Identity> {
        self.store.with(|s| s.current_user().cloned())
    }

    pub fn status(self) -> Status {
        self.store.with(SessionStore::status)
    }

    /// Start a sign-in. Validation errors are returned synchronously and leave
    /// the store untouched; the transport result is committed later.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for empty or malformed input.
    pub fn sign_in(self, email: &str, password: &str) -> Result<(), ValidationError> {
        let Some(begun) = self.store.try_update(|s| s.begin_sign_in(email, password)) else {
            log::warn!("sign-in ignored: session store was disposed");
            return Ok(());
        };
        let ticket = begun?;

        #[cfg(feature = "hydrate")]
        {
            use session::AuthTransport as _;

            let store = self.store;
            leptos::task::spawn_local(async move {
                let result = crate::net::auth::DemoTransport::default().sign_in(&ticket.credentials).await;
                store.update(|s| {
                    if let Err(e) = s.complete_sign_in(ticket.request, result) {
                        log::info!("sign-in {} ended: {e}", ticket.request);
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
        Ok(())
    }

    pub fn sign_out(self) {
        self.store.update(SessionStore::sign_out);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            use session::AuthTransport as _;
            crate::net::auth::DemoTransport::default().sign_out().await;
        });
    }

    pub fn dismiss_error(self) {
        self.store.update(|s| {
            s.dismiss_error();
        });
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a guarded page should send the viewer to `/login`.
///
/// Waits for hydration so a returning user is not bounced before their
/// stored identity is read, and never redirects mid sign-in.
pub fn should_redirect_to_login(hydrated: bool, snapshot: &SessionSnapshot) -> bool {
    hydrated && matches!(snapshot.status, Status::Idle | Status::Error)
}

/// Short label for the navigation bar: first name plus role.
pub fn nav_label(user: &Identity) -> String {
    let first = user.name.split_whitespace().next().unwrap_or(&user.name);
    format!("{first} · {}", user.role.label())
}
