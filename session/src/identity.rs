//! Identity records and sign-in inputs.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Access level of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    ClubAdmin,
    Member,
}

impl Role {
    /// Wire name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::ClubAdmin => "club_admin",
            Self::Member => "member",
        }
    }

    /// Human-readable label for badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::ClubAdmin => "Club admin",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as held by the session and persisted to storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub university: String,
}

/// Successful transport response: the identity plus an opaque bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: Identity,
    pub token: String,
}

/// Validated sign-in input. Construct through [`Credentials::parse`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validate raw form input.
    ///
    /// The email is trimmed; the password is kept verbatim but must contain
    /// something other than whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for empty fields or an email without a
    /// local part and a domain.
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if password.trim().is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        if !is_plausible_email(email) {
            return Err(ValidationError::MalformedEmail(email.to_owned()));
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Loose shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub(crate) fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}
