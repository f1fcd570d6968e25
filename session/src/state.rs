//! Session state machine.
//!
//! DESIGN
//! ======
//! The state enum carries its payload, so "user present iff authenticated"
//! and "error message present iff error" cannot be violated. The in-flight
//! request id lives inside `Loading`; completions for any other id are
//! ignored by [`reduce`].
//!
//! ```text
//! idle ──start──▶ loading ──ok──▶ authenticated ──sign out──▶ idle
//!                    │  ▲                 │
//!                    │  └─────start───────┘
//!                    └──fail──▶ error ──dismiss──▶ idle
//!                                 └──start──▶ loading
//! ```

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Monotonic id assigned to each sign-in attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse status exposed to views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Authenticated,
    Error,
}

/// Full session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading { request: RequestId },
    Authenticated(Identity),
    Error(String),
}

impl SessionState {
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Idle => Status::Idle,
            Self::Loading { .. } => Status::Loading,
            Self::Authenticated(_) => Status::Authenticated,
            Self::Error(_) => Status::Error,
        }
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Request id of the sign-in currently awaiting its transport result.
    #[must_use]
    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            Self::Loading { request } => Some(*request),
            _ => None,
        }
    }
}

/// Every input the reducer understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    SignInStarted { request: RequestId },
    SignInSucceeded { request: RequestId, user: Identity },
    SignInFailed { request: RequestId, message: String },
    SignedOut,
    /// Result of reading persisted storage at startup.
    Hydrated(Option<Identity>),
    ErrorDismissed,
}

/// Compute the next state. Actions that do not apply return `state` unchanged.
#[must_use]
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        // A second start while loading replaces the pending request.
        SessionAction::SignInStarted { request } => SessionState::Loading { request },
        SessionAction::SignInSucceeded { request, user } if state.in_flight() == Some(request) => {
            SessionState::Authenticated(user)
        }
        SessionAction::SignInFailed { request, message } if state.in_flight() == Some(request) => {
            SessionState::Error(message)
        }
        SessionAction::SignInSucceeded { .. } | SessionAction::SignInFailed { .. } => state.clone(),
        SessionAction::SignedOut | SessionAction::Hydrated(None) => SessionState::Idle,
        SessionAction::Hydrated(Some(user)) => SessionState::Authenticated(user),
        SessionAction::ErrorDismissed => match state {
            SessionState::Error(_) => SessionState::Idle,
            other => other.clone(),
        },
    }
}
