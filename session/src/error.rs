//! Error taxonomy for session operations.
//!
//! Every failure resolves the store to a well-defined state; none of these
//! are fatal to the app.

use crate::state::RequestId;

/// User-facing message committed when credentials do not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// User-facing message committed when the transport itself fails.
pub const SIGN_IN_FAILED_MESSAGE: &str = "Sign-in failed. Please try again.";

/// Input rejected before any state transition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmptyEmail,
    #[error("password is required")]
    EmptyPassword,
    #[error("email address is malformed: {0}")]
    MalformedEmail(String),
}

/// Failure reading or writing persisted session entries.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, private mode, poisoned lock).
    #[error("session storage is unavailable")]
    Unavailable,
    /// The backend rejected an operation on `key`.
    #[error("storage operation on {key} failed: {reason}")]
    Backend { key: String, reason: String },
    /// The persisted identity blob is not valid JSON for an identity.
    #[error("persisted identity is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// An identity blob exists without its token.
    #[error("persisted identity has no token")]
    MissingToken,
}

/// Failure reported by an [`crate::AuthTransport`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("transport failed: {0}")]
    Failed(String),
}

/// Error returned from [`crate::SessionStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Credentials were rejected; the store is now in `error` with this message.
    #[error("{0}")]
    Authentication(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// A newer sign-in (or a sign-out) replaced this request; nothing was committed.
    #[error("sign-in request {0} was superseded")]
    Superseded(RequestId),
}
