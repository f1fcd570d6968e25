//! Authentication transport seam and the demo credential set.
//!
//! TRADE-OFFS
//! ==========
//! There is no auth server. [`MockTransport`] checks a hard-coded list and
//! mints a random token; nothing verifies that token later.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TransportError;
use crate::identity::{AuthPayload, Credentials, Identity, Role};

/// Request/response contract for signing in and out.
#[async_trait(?Send)]
pub trait AuthTransport {
    /// Exchange credentials for an identity and token.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidCredentials`] when nothing matches.
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthPayload, TransportError>;

    /// Tell the backend the session ended. Never fails.
    async fn sign_out(&self);
}

/// One entry of the demo credential set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoAccount {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub university: &'static str,
}

impl DemoAccount {
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            role: self.role,
            university: self.university.to_owned(),
        }
    }

    /// Email compares case-insensitively, password exactly.
    #[must_use]
    pub fn matches(&self, credentials: &Credentials) -> bool {
        self.email.eq_ignore_ascii_case(credentials.email()) && self.password == credentials.password()
    }
}

/// Accounts accepted by [`MockTransport::default`].
pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "usr-super-001",
        name: "Farhana Rahman",
        email: "super@clubhub.bd",
        password: "super123",
        role: Role::SuperAdmin,
        university: "ClubHub BD",
    },
    DemoAccount {
        id: "usr-du-014",
        name: "Tanvir Ahmed",
        email: "admin@du.ac.bd",
        password: "admin123",
        role: Role::ClubAdmin,
        university: "University of Dhaka",
    },
    DemoAccount {
        id: "usr-buet-207",
        name: "Nusrat Jahan",
        email: "student@buet.ac.bd",
        password: "student123",
        role: Role::Member,
        university: "Bangladesh University of Engineering and Technology",
    },
];

/// Transport that resolves immediately against a fixed account list.
#[derive(Clone, Copy, Debug)]
pub struct MockTransport {
    accounts: &'static [DemoAccount],
}

impl MockTransport {
    #[must_use]
    pub fn new(accounts: &'static [DemoAccount]) -> Self {
        Self { accounts }
    }

    #[must_use]
    pub fn accounts(&self) -> &'static [DemoAccount] {
        self.accounts
    }

    /// Synchronous lookup shared by the async trait method and callers that
    /// need the answer without awaiting.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidCredentials`] when no account matches.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<AuthPayload, TransportError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.matches(credentials))
            .ok_or(TransportError::InvalidCredentials)?;
        Ok(AuthPayload { user: account.identity(), token: mint_token() })
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(DEMO_ACCOUNTS)
    }
}

#[async_trait(?Send)]
impl AuthTransport for MockTransport {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthPayload, TransportError> {
        self.authenticate(credentials)
    }

    async fn sign_out(&self) {}
}

/// Opaque bearer-like token: `demo.` followed by 32 hex chars.
#[must_use]
pub fn mint_token() -> String {
    format!("demo.{}", Uuid::new_v4().simple())
}
