//! Client-side session store for the ClubHub demo login.
//!
//! This crate owns the only stateful piece of the app: who is signed in, and
//! whether a sign-in is in flight or failed. Storage and transport are traits
//! so the browser build can plug in `localStorage` and a delayed mock while
//! tests run against in-memory doubles.
//!
//! ARCHITECTURE
//! ============
//! `state::reduce` is a pure reducer over [`SessionState`]. [`SessionStore`]
//! wraps it with persistence, request fencing, and change notification.

pub mod error;
pub mod identity;
pub mod state;
pub mod storage;
pub mod store;
pub mod transport;

pub use error::{SessionError, StorageError, TransportError, ValidationError};
pub use identity::{AuthPayload, Credentials, Identity, Role};
pub use state::{RequestId, SessionAction, SessionState, Status, reduce};
pub use storage::{MemoryStorage, SessionConfig, SessionStorage};
pub use store::{SessionSnapshot, SessionStore, SignInTicket, SubscriptionId};
pub use transport::{AuthTransport, DEMO_ACCOUNTS, DemoAccount, MockTransport};
