//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the mock REST client over the static catalog and `auth` is the
//! sign-in transport the session store talks to. Neither touches the network.

pub mod api;
pub mod auth;
