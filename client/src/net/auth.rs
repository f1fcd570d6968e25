//! Sign-in transport used by the browser build.
//!
//! Wraps the session crate's `MockTransport` and, in the browser, waits a
//! fixed delay first so the login form's loading state is visible.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use async_trait::async_trait;
use session::{AuthPayload, AuthTransport, Credentials, MockTransport, TransportError};

/// Artificial latency before the demo sign-in resolves.
pub const SIGN_IN_LATENCY: Duration = Duration::from_millis(800);

#[derive(Clone, Copy, Debug)]
pub struct DemoTransport {
    inner: MockTransport,
    latency: Duration,
}

impl DemoTransport {
    pub fn new(inner: MockTransport, latency: Duration) -> Self {
        Self { inner, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for DemoTransport {
    fn default() -> Self {
        Self::new(MockTransport::default(), SIGN_IN_LATENCY)
    }
}

#[async_trait(?Send)]
impl AuthTransport for DemoTransport {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthPayload, TransportError> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(self.latency).await;
        let result = self.inner.sign_in(credentials).await;
        if result.is_err() {
            log::debug!("demo transport rejected {}", credentials.email());
        }
        result
    }

    async fn sign_out(&self) {
        self.inner.sign_out().await;
    }
}
