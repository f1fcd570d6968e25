//! The owned session store: reducer + persistence + request fencing.
//!
//! ARCHITECTURE
//! ============
//! Views call `begin_sign_in`, await the transport on their own task, then
//! hand the result to `complete_sign_in`. Each attempt gets a fresh
//! [`RequestId`]; only the latest one may commit, so a slow response can
//! never overwrite a newer attempt or a sign-out.
//!
//! TRADE-OFFS
//! ==========
//! `hydrate` trusts whatever identity is in storage. There is no signature
//! or expiry to check because the demo transport never issues one.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;

use crate::error::{
    INVALID_CREDENTIALS_MESSAGE, SIGN_IN_FAILED_MESSAGE, SessionError, StorageError, TransportError,
    ValidationError,
};
use crate::identity::{AuthPayload, Credentials, Identity};
use crate::state::{RequestId, SessionAction, SessionState, Status, reduce};
use crate::storage::{SessionConfig, SessionStorage};
use crate::transport::AuthTransport;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Point-in-time copy of the store for rendering and listeners.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub status: Status,
    pub user: Option<Identity>,
    pub error: Option<String>,
    /// Incremented on every committed transition.
    pub revision: u64,
}

/// A sign-in that has entered `loading` and awaits its transport result.
#[derive(Clone, Debug)]
pub struct SignInTicket {
    pub request: RequestId,
    pub credentials: Credentials,
}

pub struct SessionStore<S> {
    storage: S,
    config: SessionConfig,
    state: SessionState,
    revision: u64,
    last_request: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    last_subscription: u64,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty store using the default storage keys. Call [`Self::hydrate`] next.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, SessionConfig::default())
    }

    pub fn with_config(storage: S, config: SessionConfig) -> Self {
        Self {
            storage,
            config,
            state: SessionState::Idle,
            revision: 0,
            last_request: 0,
            listeners: Vec::new(),
            last_subscription: 0,
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.state.current_user()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == Status::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status() == Status::Loading
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status(),
            user: self.current_user().cloned(),
            error: self.last_error().map(str::to_owned),
            revision: self.revision,
        }
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Run `action` through the reducer. Returns whether the state changed;
    /// listeners only fire on change.
    pub fn dispatch(&mut self, action: SessionAction) -> bool {
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }
        log::debug!("session: {:?} -> {:?}", self.state.status(), next.status());
        self.state = next;
        self.revision += 1;
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
        true
    }

    /// Validate input and enter `loading` under a fresh request id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] without touching state when input is empty
    /// or malformed.
    pub fn begin_sign_in(&mut self, email: &str, password: &str) -> Result<SignInTicket, ValidationError> {
        let credentials = Credentials::parse(email, password)?;
        self.last_request += 1;
        let request = RequestId(self.last_request);
        if let Some(previous) = self.state.in_flight() {
            log::debug!("session: sign-in {request} supersedes {previous}");
        }
        self.dispatch(SessionAction::SignInStarted { request });
        Ok(SignInTicket { request, credentials })
    }

    /// Commit the transport result for `request`.
    ///
    /// On success the identity and token are persisted and the store becomes
    /// `authenticated`. On rejection the store becomes `error` and any
    /// previously persisted session is cleared.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Superseded`] if `request` is no longer in flight.
    /// - [`SessionError::Authentication`] if the transport rejected the attempt.
    pub fn complete_sign_in(
        &mut self,
        request: RequestId,
        result: Result<AuthPayload, TransportError>,
    ) -> Result<Identity, SessionError> {
        if self.state.in_flight() != Some(request) {
            log::debug!("session: dropping stale sign-in result {request}");
            return Err(SessionError::Superseded(request));
        }
        match result {
            Ok(payload) => {
                if let Err(e) = self.persist(&payload) {
                    log::warn!("session: signed in but could not persist identity: {e}");
                }
                let user = payload.user;
                log::info!("session: signed in as {} ({})", user.email, user.role);
                self.dispatch(SessionAction::SignInSucceeded { request, user: user.clone() });
                Ok(user)
            }
            Err(e) => {
                let message = match e {
                    TransportError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
                    TransportError::Failed(ref reason) => {
                        log::warn!("session: sign-in transport failed: {reason}");
                        SIGN_IN_FAILED_MESSAGE
                    }
                };
                // A rejected re-authentication must not leave the previous
                // identity behind for the next hydrate.
                self.clear_persisted();
                self.dispatch(SessionAction::SignInFailed { request, message: message.to_owned() });
                Err(SessionError::Authentication(message.to_owned()))
            }
        }
    }

    /// Validate, query `transport`, and commit in one call.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_sign_in`] and [`Self::complete_sign_in`].
    pub async fn sign_in<T>(&mut self, transport: &T, email: &str, password: &str) -> Result<Identity, SessionError>
    where
        T: AuthTransport + ?Sized,
    {
        let ticket = self.begin_sign_in(email, password)?;
        let result = transport.sign_in(&ticket.credentials).await;
        self.complete_sign_in(ticket.request, result)
    }

    /// Clear the user and persisted entries. Always ends in `idle`; any
    /// in-flight sign-in is orphaned.
    pub fn sign_out(&mut self) {
        self.clear_persisted();
        if let Some(user) = self.current_user() {
            log::info!("session: signed out {}", user.email);
        }
        self.dispatch(SessionAction::SignedOut);
    }

    /// Restore the session from storage without a transport round-trip.
    ///
    /// A missing, unreadable, or malformed entry leaves the store `idle` and
    /// removes whatever was there. Calling again yields the same status.
    pub fn hydrate(&mut self) -> Status {
        match self.load_persisted() {
            Ok(Some(user)) => {
                log::debug!("session: hydrated {}", user.email);
                self.dispatch(SessionAction::Hydrated(Some(user)));
            }
            Ok(None) => {
                self.clear_persisted();
                self.dispatch(SessionAction::Hydrated(None));
            }
            Err(e) => {
                log::warn!("session: discarding persisted session: {e}");
                self.clear_persisted();
                self.dispatch(SessionAction::Hydrated(None));
            }
        }
        self.status()
    }

    /// Leave `error` for `idle`. Returns `false` in any other state.
    pub fn dismiss_error(&mut self) -> bool {
        self.dispatch(SessionAction::ErrorDismissed)
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register `listener` to run after every committed transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.last_subscription += 1;
        let id = SubscriptionId(self.last_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // =========================================================================
    // PERSISTENCE
    // =========================================================================

    fn persist(&self, payload: &AuthPayload) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&payload.user)?;
        self.storage.write(&self.config.user_key, &blob)?;
        self.storage.write(&self.config.token_key, &payload.token)
    }

    fn load_persisted(&self) -> Result<Option<Identity>, StorageError> {
        let Some(blob) = self.storage.read(&self.config.user_key)? else {
            return Ok(None);
        };
        let user: Identity = serde_json::from_str(&blob)?;
        match self.storage.read(&self.config.token_key)? {
            Some(token) if !token.trim().is_empty() => Ok(Some(user)),
            _ => Err(StorageError::MissingToken),
        }
    }

    fn clear_persisted(&self) {
        for key in [&self.config.user_key, &self.config.token_key] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("session: could not clear {key}: {e}");
            }
        }
    }
}

impl<S> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("last_request", &self.last_request)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
